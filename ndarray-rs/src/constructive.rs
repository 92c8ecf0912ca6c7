use super::*;
use log::debug;

impl<T: Element, const N: usize> Array<T, N> {
    /// Creates a new array from row-major data and a shape.
    ///
    /// An empty shape means a flat vector over all of `data`, so `new(vec![], &[])` has shape `[0]`.
    /// Returns an error if the shape product differs from the number of elements.
    pub fn new(data: Vec<T>, shape: &[usize]) -> Result<Self> {
        let shape: SmallVec<[usize; N]> = if shape.is_empty() {
            smallvec::smallvec![data.len()]
        } else {
            shape.iter().copied().collect()
        };

        let size = shape_size(&shape);
        if size != data.len() {
            return Err(ArrayError::ShapeMismatch(format!(
                "cannot create array of shape {:?} from {} elements",
                shape.as_slice(),
                data.len()
            )));
        }

        debug!("created {} array of shape {:?}", T::DTYPE, shape.as_slice());

        Ok(Self { data: Arc::new(data), shape })
    }

    /// Creates a new array by converting host numbers with the conversion rules of `T`.
    pub fn from_f64(values: &[f64], shape: &[usize]) -> Result<Self> {
        Self::new(values.iter().copied().map(T::from_f64).collect(), shape)
    }

    /// Creates a 1-D array holding `0, 1, .., size - 1`.
    pub fn arange(size: usize) -> Result<Self> {
        let data = (0..size).map(|value| T::from_f64(value as f64)).collect();
        Self::new(data, &[size])
    }

    /// Creates an array of the given shape filled with default values.
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        let size = if shape.is_empty() { 0 } else { shape_size(shape) };
        Self::new(vec![T::default(); size], shape)
    }

    /// Returns the data type of the elements.
    pub fn dtype(&self) -> DType {
        T::DTYPE
    }
}

impl<T: Element, const N: usize> From<Vec<T>> for Array<T, N> {
    fn from(data: Vec<T>) -> Self {
        let shape = smallvec::smallvec![data.len()];
        Self { data: Arc::new(data), shape }
    }
}

/// Returns the number of elements described by a shape.
pub(crate) fn shape_size(shape: &[usize]) -> usize {
    shape.iter().fold(1, |acc, &dim| acc.saturating_mul(dim))
}
