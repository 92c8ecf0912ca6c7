use super::*;
use std::fmt;

/// An array whose element type is chosen at runtime by a [`DType`] tag.
#[derive(Clone, Debug, PartialEq)]
pub enum NdArray {
    Int32(Array<i32>),
    Float32(Array<f32>),
    Float64(Array<f64>),
}

/// Flattened row-major elements in the native representation of their array.
#[derive(Clone, Debug, PartialEq)]
pub enum Elements {
    Int32(Vec<i32>),
    Float32(Vec<f32>),
    Float64(Vec<f64>),
}

macro_rules! dispatch {
    ($value:expr, $array:ident => $body:expr) => {
        match $value {
            NdArray::Int32($array) => $body,
            NdArray::Float32($array) => $body,
            NdArray::Float64($array) => $body,
        }
    };
}

macro_rules! map {
    ($value:expr, $array:ident => $body:expr) => {
        match $value {
            NdArray::Int32($array) => NdArray::Int32($body),
            NdArray::Float32($array) => NdArray::Float32($body),
            NdArray::Float64($array) => NdArray::Float64($body),
        }
    };
}

impl NdArray {
    /// Creates an array of the given dtype from host numbers.
    ///
    /// A missing or empty shape yields a flat vector over all elements.
    pub fn new(elements: &[f64], shape: Option<&[usize]>, dtype: DType) -> Result<Self> {
        let shape = shape.unwrap_or(&[]);
        match dtype {
            DType::Int32 => Array::from_f64(elements, shape).map(NdArray::Int32),
            DType::Float32 => Array::from_f64(elements, shape).map(NdArray::Float32),
            DType::Float64 => Array::from_f64(elements, shape).map(NdArray::Float64),
        }
    }

    pub fn dtype(&self) -> DType {
        dispatch!(self, array => array.dtype())
    }

    /// Returns a copy of the shape.
    pub fn shape(&self) -> Vec<usize> {
        dispatch!(self, array => array.shape().to_vec())
    }

    pub fn rank(&self) -> usize {
        dispatch!(self, array => array.rank())
    }

    pub fn size(&self) -> usize {
        dispatch!(self, array => array.size())
    }

    /// Returns the elements in row-major order, keeping their native representation.
    pub fn to_array(&self) -> Elements {
        match self {
            NdArray::Int32(array) => Elements::Int32(array.to_vec()),
            NdArray::Float32(array) => Elements::Float32(array.to_vec()),
            NdArray::Float64(array) => Elements::Float64(array.to_vec()),
        }
    }

    /// Returns the elements in row-major order widened to `f64`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        dispatch!(self, array => array.elements().map(|value| value.to_f64()).collect())
    }

    /// Reinterprets the array with a new shape over the same storage. See [`Array::view`].
    pub fn view(&self, new_shape: &[isize]) -> Result<Self> {
        Ok(map!(self, array => array.view(new_shape)?))
    }

    /// Returns the element at a multi-dimensional index widened to `f64`.
    pub fn get(&self, indices: &[usize]) -> Result<f64> {
        dispatch!(self, array => array.get(indices).map(|value| value.to_f64()))
    }

    /// Returns the typed array if the dtype matches `T`.
    pub fn as_typed<T: Element>(&self) -> Option<&Array<T>> {
        T::from_dynamic(self)
    }

    /// Converts into a new owned array of another dtype using host number conversion rules.
    pub fn cast(&self, dtype: DType) -> Result<Self> {
        NdArray::new(&self.to_f64_vec(), Some(self.shape().as_slice()), dtype)
    }

    /// Returns true if both arrays alias the same storage.
    pub fn shares_storage(&self, other: &NdArray) -> bool {
        match (self, other) {
            (NdArray::Int32(lhs), NdArray::Int32(rhs)) => lhs.shares_storage(rhs),
            (NdArray::Float32(lhs), NdArray::Float32(rhs)) => lhs.shares_storage(rhs),
            (NdArray::Float64(lhs), NdArray::Float64(rhs)) => lhs.shares_storage(rhs),
            _ => false,
        }
    }
}

impl<T: Element> From<Array<T>> for NdArray {
    fn from(array: Array<T>) -> Self {
        T::into_dynamic(array)
    }
}

impl<T: Element> TryFrom<NdArray> for Array<T> {
    type Error = ArrayError;

    fn try_from(array: NdArray) -> Result<Self> {
        T::from_dynamic(&array).cloned().ok_or_else(|| {
            ArrayError::CastError(format!("expected {} array, found {}", T::DTYPE, array.dtype()))
        })
    }
}

impl fmt::Display for NdArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, array => fmt::Display::fmt(array, f))
    }
}

impl Elements {
    pub fn dtype(&self) -> DType {
        match self {
            Elements::Int32(_) => DType::Int32,
            Elements::Float32(_) => DType::Float32,
            Elements::Float64(_) => DType::Float64,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Elements::Int32(values) => values.len(),
            Elements::Float32(values) => values.len(),
            Elements::Float64(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Widens all elements to `f64`.
    pub fn into_f64(self) -> Vec<f64> {
        match self {
            Elements::Int32(values) => values.into_iter().map(f64::from).collect(),
            Elements::Float32(values) => values.into_iter().map(f64::from).collect(),
            Elements::Float64(values) => values,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DType::Int32)]
    #[case(DType::Float32)]
    #[case(DType::Float64)]
    fn can_create_each_dtype(#[case] dtype: DType) -> Result<()> {
        let array = NdArray::new(&[1., 2., 3., 4., 5., 6.], Some(&[2, 3][..]), dtype)?;

        assert_eq!(array.dtype(), dtype);
        assert_eq!(array.shape(), vec![2, 3]);
        assert_eq!(array.rank(), 2);
        assert_eq!(array.size(), 6);
        assert_eq!(array.to_array().dtype(), dtype);
        assert_eq!(array.to_f64_vec(), vec![1., 2., 3., 4., 5., 6.]);

        Ok(())
    }

    #[test]
    fn keeps_native_representation() -> Result<()> {
        let ints = NdArray::new(&[1.9, -1.9], None, DType::Int32)?;
        assert_eq!(ints.to_array(), Elements::Int32(vec![1, -1]));

        let floats = NdArray::new(&[0.1], None, DType::Float32)?;
        assert_eq!(floats.to_array(), Elements::Float32(vec![0.1_f32]));
        assert_eq!(floats.to_f64_vec(), vec![0.1_f32 as f64]);

        let doubles = NdArray::new(&[0.1], None, DType::Float64)?;
        assert_eq!(doubles.to_array(), Elements::Float64(vec![0.1]));

        Ok(())
    }

    #[test]
    fn view_keeps_dtype_and_storage() -> Result<()> {
        let array = NdArray::new(&[0.; 12], None, DType::Float32)?;
        let view = array.view(&[3, -1])?;

        assert_eq!(view.dtype(), DType::Float32);
        assert_eq!(view.shape(), vec![3, 4]);
        assert!(view.shares_storage(&array));
        assert!(!view.shares_storage(&array.cast(DType::Float32)?));

        Ok(())
    }

    #[test]
    fn view_propagates_errors() -> Result<()> {
        let array = NdArray::new(&[0.; 6], None, DType::Int32)?;

        assert!(matches!(array.view(&[2, 4]), Err(ArrayError::ShapeMismatch(_))));
        assert!(matches!(array.view(&[-1, -1]), Err(ArrayError::InvalidShape(_))));

        Ok(())
    }

    #[test]
    fn can_access_typed_array() -> Result<()> {
        let array = NdArray::new(&[1., 2.], None, DType::Float64)?;

        assert!(array.as_typed::<f64>().is_some());
        assert!(array.as_typed::<i32>().is_none());

        let typed: Array<f64> = array.clone().try_into()?;
        assert_eq!(typed.to_vec(), vec![1., 2.]);

        let result: Result<Array<i32>> = array.try_into();
        assert_eq!(
            result.err(),
            Some(ArrayError::CastError("expected int array, found double".to_string()))
        );

        Ok(())
    }

    #[test]
    fn can_wrap_typed_array() -> Result<()> {
        let array = NdArray::from(Array::<i32>::arange(4)?);

        assert_eq!(array.dtype(), DType::Int32);
        assert_eq!(array.get(&[3])?, 3.);

        Ok(())
    }

    #[test]
    fn can_cast_between_dtypes() -> Result<()> {
        let array = NdArray::new(&[1.5, -2.7, 3e10], Some(&[3][..]), DType::Float64)?;

        let ints = array.cast(DType::Int32)?;

        assert_eq!(ints.shape(), vec![3]);
        assert_eq!(ints.to_array(), Elements::Int32(vec![1, -2, i32::from_f64(3e10)]));

        Ok(())
    }

    #[test]
    fn elements_widen_to_f64() {
        let elements = Elements::Float32(vec![0.5, 1.5]);

        assert_eq!(elements.len(), 2);
        assert!(!elements.is_empty());
        assert_eq!(elements.into_f64(), vec![0.5, 1.5]);
    }

    #[test]
    fn can_display() -> Result<()> {
        let array = NdArray::new(&[1., 2., 3., 4.], Some(&[2, 2][..]), DType::Int32)?;

        assert_eq!(array.to_string(), "[[1, 2], [3, 4]]");

        Ok(())
    }
}
