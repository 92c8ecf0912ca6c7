//! Library crate for ndarray_rs
//!

use smallvec::SmallVec;
use std::sync::Arc;

mod constructive;
mod display;
mod dtype;
mod dynamic;
mod error;
mod iterator;
mod misc;
mod view;

pub use crate::dtype::{DType, Element};
pub use crate::dynamic::{Elements, NdArray};
pub use crate::error::ArrayError;

pub type Result<T> = std::result::Result<T, error::ArrayError>;

/// Represents a dense multi-dimensional array with element type T and inline shape capacity N.
///
/// The array is stored as a contiguous row-major block of memory shared through an [`Arc`]. Reshaping never
/// copies elements: [`Array::view`] returns a second array over the same storage with different shape metadata.
/// Storage is released when the last alias is dropped.
///
/// Shapes up to rank N are kept inline, larger ranks spill to the heap.
#[derive(Clone)]
pub struct Array<T, const N: usize = 4> {
    data: Arc<Vec<T>>,
    shape: SmallVec<[usize; N]>,
}
