//! Shared constants

pub mod defaults;
pub mod limits;

pub use defaults::*;
pub use limits::*;
