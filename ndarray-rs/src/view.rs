use super::*;
use crate::constructive::shape_size;
use log::{debug, trace};

impl<T, const N: usize> Array<T, N> {
    /// Reinterprets the array with a new shape over the same storage, no data is copied.
    ///
    /// At most one dimension may be `-1`, it is inferred from the number of elements.
    pub fn view(&self, new_shape: &[isize]) -> Result<Array<T, N>> {
        let new_shape = resolve_shape::<N>(self.size(), new_shape).inspect_err(|err| {
            debug!("rejected view of {:?} as {new_shape:?}: {err}", self.shape.as_slice());
        })?;

        trace!("view {:?} -> {:?}", self.shape.as_slice(), new_shape.as_slice());

        Ok(Array {
            data: self.data.clone(),
            shape: new_shape,
        })
    }

    // Row-major offset of a multi-dimensional index
    fn get_index(&self, indices: &[usize]) -> Result<usize> {
        if indices.len() != self.shape.len() {
            return Err(ArrayError::ShapeMismatch(format!(
                "Index dimension mismatch: {} != {}",
                indices.len(),
                self.shape.len()
            )));
        }

        if let Some((i, &idx)) = indices.iter().enumerate().find(|&(i, &idx)| idx >= self.shape[i]) {
            return Err(ArrayError::IndexOutOfBounds(format!(
                "Index {idx} out of bounds for dimension {i} with size {}",
                self.shape[i]
            )));
        }

        // in-bounds indices keep the offset below the number of elements
        Ok(indices
            .iter()
            .zip(self.shape.iter())
            .fold(0, |linear_index, (&idx, &dim)| linear_index * dim + idx))
    }

    /// Returns the element at a multi-dimensional index.
    pub fn get(&self, indices: &[usize]) -> Result<&T> {
        let linear_index = self.get_index(indices)?;
        Ok(&self.data[linear_index])
    }

    /// Returns the shape.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Returns the number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Returns the number of elements.
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Returns true if both arrays alias the same storage.
    pub fn shares_storage(&self, other: &Array<T, N>) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

/// Resolves a target shape with at most one `-1` wildcard against the number of elements.
fn resolve_shape<const N: usize>(size: usize, new_shape: &[isize]) -> Result<SmallVec<[usize; N]>> {
    let mut wildcard = None;
    let mut known = 1_usize;

    for (i, &dim) in new_shape.iter().enumerate() {
        match dim {
            -1 if wildcard.is_some() => {
                return Err(ArrayError::InvalidShape(format!(
                    "only one dimension can be inferred in shape {new_shape:?}"
                )));
            }
            -1 => wildcard = Some(i),
            dim if dim < 0 => {
                return Err(ArrayError::InvalidShape(format!(
                    "invalid dimension {dim} at position {i} in shape {new_shape:?}"
                )));
            }
            dim => known = known.saturating_mul(dim as usize),
        }
    }

    let mismatch = || {
        ArrayError::ShapeMismatch(format!(
            "cannot reshape array of size {size} into shape {new_shape:?}"
        ))
    };

    let mut resolved: SmallVec<[usize; N]> = new_shape.iter().map(|&dim| dim.max(0) as usize).collect();

    if let Some(i) = wildcard {
        // NOTE a zero-sized remainder leaves the inferred dimension undetermined
        if known == 0 || size % known != 0 {
            return Err(mismatch());
        }
        resolved[i] = size / known;
    }

    if shape_size(&resolved) != size {
        return Err(mismatch());
    }

    Ok(resolved)
}
