use crate::component::{
    AddressableComponent, AddressableComponentError, Component, ComponentId, Result,
};

#[derive(Clone, Debug)]
pub struct RAM<const N: usize> {
    id: ComponentId,
    buffer: [u8; N],
    num_reads: usize,
    num_writes: usize,
}

impl<const N: usize> Component for RAM<N> {
    fn id(&self) -> &ComponentId {
        &self.id
    }
}

impl<const N: usize> AddressableComponent for RAM<N> {
    fn read(&mut self, address: usize) -> Result<u8> {
        let value = *self
            .buffer
            .get(address)
            .ok_or_else(|| AddressableComponentError::InvalidAddress(address, self.id))?;
        self.num_reads += 1;
        Ok(value)
    }

    fn write(&mut self, address: usize, value: u8) -> Result<()> {
        let cell = self
            .buffer
            .get_mut(address)
            .ok_or_else(|| AddressableComponentError::InvalidAddress(address, self.id))?;
        *cell = value;
        self.num_writes += 1;
        Ok(())
    }
}

impl<const N: usize> RAM<N> {
    pub fn new(name: &'static str) -> Self {
        Self {
            id: ComponentId::new(name),
            buffer: [0; N],
            num_reads: 0,
            num_writes: 0,
        }
    }

    /// Copies `data` into memory starting at `address`. Nothing is written
    /// unless the whole block fits.
    pub fn load(&mut self, address: usize, data: &[u8]) -> Result<()> {
        let end = address + data.len();
        if end > N {
            return Err(AddressableComponentError::InvalidAddress(
                end - 1,
                self.id,
            ));
        }
        self.buffer[address..end].copy_from_slice(data);
        self.num_writes += data.len();
        tracing::debug!("{}: loaded {} bytes at 0x{:02X}", self.id, data.len(), address);
        Ok(())
    }

    pub fn num_reads(&self) -> usize {
        self.num_reads
    }

    pub fn num_writes(&self) -> usize {
        self.num_writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let mut ram = RAM::<16>::new("ram");
        for address in 0..16 {
            assert_eq!(ram.read(address), Ok(0));
        }
    }

    #[test]
    fn can_write_then_read() {
        let mut ram = RAM::<256>::new("ram");
        ram.write(0xFF, 0xAB).unwrap();
        assert_eq!(ram.read(0xFF), Ok(0xAB));
        assert_eq!(ram.num_writes(), 1);
        assert_eq!(ram.num_reads(), 1);
    }

    #[test]
    fn out_of_bounds_access_fails() {
        let mut ram = RAM::<256>::new("ram");
        assert!(matches!(
            ram.read(256),
            Err(AddressableComponentError::InvalidAddress(256, _))
        ));
        assert!(matches!(
            ram.write(300, 1),
            Err(AddressableComponentError::InvalidAddress(300, _))
        ));
        assert_eq!(ram.num_reads(), 0);
        assert_eq!(ram.num_writes(), 0);
    }

    #[test]
    fn load_copies_block() {
        let mut ram = RAM::<8>::new("ram");
        ram.load(2, &[1, 2, 3]).unwrap();
        assert_eq!(ram.read(1), Ok(0));
        assert_eq!(ram.read(2), Ok(1));
        assert_eq!(ram.read(4), Ok(3));
    }

    #[test]
    fn load_rejects_oversized_block() {
        let mut ram = RAM::<4>::new("ram");
        assert!(ram.load(2, &[9, 9, 9]).is_err());
        for address in 0..4 {
            assert_eq!(ram.read(address), Ok(0));
        }
    }
}
