pub mod cpu;

mod component;
mod storage;

pub use crate::component::{
    AddressableComponent, AddressableComponentError, Component, ComponentId,
};
pub use crate::storage::RAM;
