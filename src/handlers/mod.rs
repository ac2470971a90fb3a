//! Handler implementations

pub mod memory;

#[cfg(feature = "json")]
pub mod json;

pub use memory::MemoryHandler;

#[cfg(feature = "json")]
pub use json::JsonHandler;

pub use crate::core::Handler;
