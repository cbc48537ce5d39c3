use std::fmt;

use thiserror::Error;
use uuid::Uuid;

/// Labels a piece of the machine in diagnostics. Two components with the
/// same name remain distinguishable by their uuid.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ComponentId {
    name: &'static str,
    uuid: Uuid,
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl ComponentId {
    pub fn new(name: &'static str) -> Self {
        ComponentId {
            name,
            uuid: Uuid::new_v4(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AddressableComponentError {
    #[error("address 0x{0:04X} is out of bounds for {1}")]
    InvalidAddress(usize, ComponentId),
}

pub type Result<T> = std::result::Result<T, AddressableComponentError>;

pub trait Component {
    fn id(&self) -> &ComponentId;
}

/// A component exposing a flat, byte-addressable space.
pub trait AddressableComponent: Component {
    fn read(&mut self, address: usize) -> Result<u8>;
    fn write(&mut self, address: usize, value: u8) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_with_same_name_are_distinct() {
        let a = ComponentId::new("ram");
        let b = ComponentId::new("ram");
        assert_eq!(a.name(), b.name());
        assert_ne!(a, b);
        let copy = a;
        assert_eq!(copy, a);
    }

    #[test]
    fn displays_name() {
        let id = ComponentId::new("main memory");
        assert_eq!(id.to_string(), "main memory");
    }
}
