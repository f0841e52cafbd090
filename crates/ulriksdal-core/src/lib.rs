#![forbid(unsafe_code)]

pub mod algorithm;
pub mod error;
pub mod ns;

pub use error::{Error, Result};
