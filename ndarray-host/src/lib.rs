//! Library crate for ndarray_host
//!
//! Moves numbers across a scripting host boundary: host arrays arrive as `f64` sequences with optional
//! `f64` dimensions and leave the same way, while storage stays in an [`NdArray`] of a fixed dtype.

use ndarray_rs::{DType, NdArray};

mod array;
mod config;
mod error;
mod payload;

pub use crate::array::HostArray;
pub use crate::config::HostConfig;
pub use crate::error::HostError;
pub use crate::payload::HostPayload;

pub type Result<T> = std::result::Result<T, error::HostError>;
