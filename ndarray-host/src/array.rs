use super::*;
use log::debug;
use ndarray_rs::Elements;

/// An array as the scripting host sees it: numbers in, numbers out.
///
/// Host numbers are `f64`. Elements are converted into the array's dtype on the way in and widened back to
/// `f64` on the way out, dimensions are truncated toward zero the way a host integer read does.
#[derive(Clone, Debug, PartialEq)]
pub struct HostArray {
    inner: NdArray,
}

impl HostArray {
    /// Creates an array from host numbers and optional host dimensions.
    pub fn new(data: &[f64], shape: Option<&[f64]>, dtype: DType) -> Result<Self> {
        let shape = shape.map(host_shape).transpose()?;
        let inner = NdArray::new(data, shape.as_deref(), dtype)?;

        debug!("host created {dtype} array of shape {:?}", inner.shape());

        Ok(Self { inner })
    }

    /// Creates an `int` array.
    pub fn int(data: &[f64], shape: Option<&[f64]>) -> Result<Self> {
        Self::new(data, shape, DType::Int32)
    }

    /// Creates a `float` array.
    pub fn float(data: &[f64], shape: Option<&[f64]>) -> Result<Self> {
        Self::new(data, shape, DType::Float32)
    }

    /// Creates a `double` array.
    pub fn double(data: &[f64], shape: Option<&[f64]>) -> Result<Self> {
        Self::new(data, shape, DType::Float64)
    }

    /// Creates an array whose dtype comes from a host type tag or, when absent, from the config.
    pub fn from_tagged(data: &[f64], shape: Option<&[f64]>, tag: Option<&str>, config: &HostConfig) -> Result<Self> {
        Self::new(data, shape, config.resolve(tag)?)
    }

    pub fn dtype(&self) -> DType {
        self.inner.dtype()
    }

    /// Returns the shape as host numbers.
    pub fn shape(&self) -> Vec<f64> {
        self.inner.shape().into_iter().map(|dim| dim as f64).collect()
    }

    /// Returns the row-major elements as host numbers.
    pub fn to_array(&self) -> Vec<f64> {
        self.inner.to_f64_vec()
    }

    /// Returns the row-major elements in their native representation.
    pub fn to_elements(&self) -> Elements {
        self.inner.to_array()
    }

    /// Reshapes over the same storage. A `-1` dimension is inferred.
    pub fn view(&self, shape: &[f64]) -> Result<Self> {
        let shape = shape
            .iter()
            .map(|&dim| host_dim(dim).map(|dim| dim as isize))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            inner: self.inner.view(&shape)?,
        })
    }

    pub fn inner(&self) -> &NdArray {
        &self.inner
    }

    pub fn into_inner(self) -> NdArray {
        self.inner
    }
}

impl From<NdArray> for HostArray {
    fn from(inner: NdArray) -> Self {
        Self { inner }
    }
}

/// Reads a host number as an integer dimension, truncating toward zero.
fn host_dim(dim: f64) -> Result<i64> {
    if !dim.is_finite() {
        return Err(HostError::InvalidDimension(format!("dimension {dim} is not a finite number")));
    }
    Ok(dim.trunc() as i64)
}

fn host_shape(shape: &[f64]) -> Result<Vec<usize>> {
    shape
        .iter()
        .map(|&dim| {
            let value = host_dim(dim)?;
            usize::try_from(value)
                .map_err(|_| HostError::InvalidDimension(format!("dimension {dim} is negative in shape {shape:?}")))
        })
        .collect()
}
