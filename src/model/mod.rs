pub mod config;
pub mod label;

pub use config::*;
pub use label::*;
