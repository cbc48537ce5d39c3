use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::cpu::MEMORY_SIZE;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: '{content}' is not an 8-bit binary literal")]
    MalformedProgramLine { line: usize, content: String },
    #[error("program is {size} bytes, memory holds {capacity}")]
    ProgramTooLarge { size: usize, capacity: usize },
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;

/// Parses program text with one binary byte per line. Anything after `#` is a
/// comment; blank and comment-only lines take no address.
pub fn parse_program(text: &str) -> Result<Vec<u8>> {
    let mut program = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let content = match line.split_once('#') {
            Some((content, _comment)) => content,
            None => line,
        }
        .trim();
        if content.is_empty() {
            continue;
        }

        let byte = parse_byte(content).ok_or_else(|| LoadError::MalformedProgramLine {
            line: idx + 1,
            content: String::from(content),
        })?;
        program.push(byte);
    }

    if program.len() > MEMORY_SIZE {
        return Err(LoadError::ProgramTooLarge {
            size: program.len(),
            capacity: MEMORY_SIZE,
        });
    }
    Ok(program)
}

fn parse_byte(content: &str) -> Option<u8> {
    let is_binary = content.chars().all(|c| c == '0' || c == '1');
    if !is_binary || content.len() > 8 {
        return None;
    }
    u8::from_str_radix(content, 2).ok()
}

pub fn load_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    tracing::info!("loading program from {}", path.display());
    let text = fs::read_to_string(path)?;
    let program = parse_program(&text)?;
    tracing::info!("parsed {} program bytes", program.len());
    Ok(program)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_print8() {
        let program = parse_program(include_str!("../../programs/print8.ls8")).unwrap();
        assert_eq!(
            program,
            vec![0b10000010, 0b00000000, 0b00001000, 0b01000111, 0b00000000, 0b00000001]
        );
    }

    #[test]
    fn comments_and_blanks_take_no_address() {
        let text = "# just a comment\n\n   \n10000010 # LDI\n";
        assert_eq!(parse_program(text).unwrap(), vec![0b10000010]);
    }

    #[test]
    fn accepts_short_literals_and_crlf() {
        let text = "1\r\n00000101\r\n";
        assert_eq!(parse_program(text).unwrap(), vec![1, 5]);
    }

    #[test]
    fn empty_program() {
        assert_eq!(parse_program("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn rejects_malformed_lines() {
        for (text, bad) in [
            ("00000001\n0000002\n", "0000002"),
            ("LDI R0\n", "LDI R0"),
            ("100000010\n", "100000010"),
            ("+0000001\n", "+0000001"),
            ("1000 0010\n", "1000 0010"),
        ] {
            match parse_program(text) {
                Err(LoadError::MalformedProgramLine { content, .. }) => assert_eq!(content, bad),
                other => panic!("unexpected result for {:?}: {:?}", text, other),
            }
        }
    }

    #[test]
    fn reports_line_number() {
        let err = parse_program("# header\n\n00000001\nxyz\n").unwrap_err();
        assert_eq!(err.to_string(), "line 4: 'xyz' is not an 8-bit binary literal");
    }

    #[test]
    fn rejects_oversized_program() {
        let text = "00000000\n".repeat(MEMORY_SIZE + 1);
        assert!(matches!(
            parse_program(&text),
            Err(LoadError::ProgramTooLarge { size: 257, capacity: 256 })
        ));
        assert_eq!(parse_program(&"00000000\n".repeat(MEMORY_SIZE)).unwrap().len(), 256);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            load_file("/nonexistent/program.ls8"),
            Err(LoadError::Io(_))
        ));
    }
}
