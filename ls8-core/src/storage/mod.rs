mod ram;

pub use ram::RAM;
