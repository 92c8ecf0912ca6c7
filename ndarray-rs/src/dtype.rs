use super::*;
use std::fmt;
use std::str::FromStr;

/// Numeric representation of every element in an array.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum DType {
    Int32,
    Float32,
    Float64,
}

impl DType {
    /// Returns the size of a single element in bytes.
    pub fn size_in_bytes(&self) -> usize {
        match self {
            DType::Int32 | DType::Float32 => 4,
            DType::Float64 => 8,
        }
    }

    /// Returns the short host tag: `int`, `float` or `double`.
    pub fn as_str(&self) -> &'static str {
        match self {
            DType::Int32 => "int",
            DType::Float32 => "float",
            DType::Float64 => "double",
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DType {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "int" | "int32" => Ok(DType::Int32),
            "float" | "float32" => Ok(DType::Float32),
            "double" | "float64" => Ok(DType::Float64),
            _ => Err(ArrayError::UnknownDType(format!(
                "'{s}' is not one of int, float, double"
            ))),
        }
    }
}

impl TryFrom<String> for DType {
    type Error = ArrayError;

    fn try_from(tag: String) -> Result<Self> {
        tag.parse()
    }
}

impl From<DType> for String {
    fn from(dtype: DType) -> Self {
        dtype.as_str().to_string()
    }
}

mod private {
    use crate::{Array, NdArray};

    pub trait Sealed: Sized {
        fn into_dynamic(array: Array<Self>) -> NdArray;

        fn from_dynamic(array: &NdArray) -> Option<&Array<Self>>;
    }
}

/// An element type an array can store. Implemented for `i32`, `f32` and `f64` only.
pub trait Element:
    private::Sealed + Copy + Default + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    const DTYPE: DType;

    /// Converts a host number into this representation.
    ///
    /// Integers truncate toward zero and wrap modulo 2^32, non-finite values become zero.
    /// Single precision floats round to nearest, ties to even.
    fn from_f64(value: f64) -> Self;

    /// Widens the element to a host number without loss.
    fn to_f64(self) -> f64;
}

const TWO_POW_32: f64 = 4_294_967_296.0;

impl private::Sealed for i32 {
    fn into_dynamic(array: Array<Self>) -> NdArray {
        NdArray::Int32(array)
    }

    fn from_dynamic(array: &NdArray) -> Option<&Array<Self>> {
        match array {
            NdArray::Int32(array) => Some(array),
            _ => None,
        }
    }
}

impl Element for i32 {
    const DTYPE: DType = DType::Int32;

    fn from_f64(value: f64) -> Self {
        if !value.is_finite() {
            return 0;
        }
        // NOTE `as i32` saturates, wrapping needs the modulo first
        value.trunc().rem_euclid(TWO_POW_32) as u32 as i32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl private::Sealed for f32 {
    fn into_dynamic(array: Array<Self>) -> NdArray {
        NdArray::Float32(array)
    }

    fn from_dynamic(array: &NdArray) -> Option<&Array<Self>> {
        match array {
            NdArray::Float32(array) => Some(array),
            _ => None,
        }
    }
}

impl Element for f32 {
    const DTYPE: DType = DType::Float32;

    fn from_f64(value: f64) -> Self {
        value as f32
    }

    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl private::Sealed for f64 {
    fn into_dynamic(array: Array<Self>) -> NdArray {
        NdArray::Float64(array)
    }

    fn from_dynamic(array: &NdArray) -> Option<&Array<Self>> {
        match array {
            NdArray::Float64(array) => Some(array),
            _ => None,
        }
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::Float64;

    fn from_f64(value: f64) -> Self {
        value
    }

    fn to_f64(self) -> f64 {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1.9, 1)]
    #[case(-1.9, -1)]
    #[case(0.5, 0)]
    #[case(-0.0, 0)]
    #[case(2147483647.0, i32::MAX)]
    #[case(2147483648.0, i32::MIN)]
    #[case(4294967297.0, 1)]
    #[case(-2147483649.0, i32::MAX)]
    #[case(f64::NAN, 0)]
    #[case(f64::INFINITY, 0)]
    #[case(f64::NEG_INFINITY, 0)]
    fn can_convert_to_int32(#[case] value: f64, #[case] expected: i32) {
        assert_eq!(i32::from_f64(value), expected);
    }

    #[test]
    fn can_convert_to_float32() {
        assert_eq!(f32::from_f64(0.1), 0.1_f32);
        assert_eq!(f32::from_f64(1.0 / 3.0), 1.0_f32 / 3.0);
        // 1 + 2^-24 is halfway between 1 and the next f32, ties go to even
        assert_eq!(f32::from_f64(1.0 + f64::powi(2.0, -24)), 1.0_f32);
        assert!(f32::from_f64(1e300).is_infinite());
    }

    #[test]
    fn float64_is_exact() {
        let value = 0.1 + 0.2;
        assert_eq!(f64::from_f64(value), value);
    }

    #[rstest]
    #[case("int", DType::Int32)]
    #[case("Int32", DType::Int32)]
    #[case("float", DType::Float32)]
    #[case("FLOAT32", DType::Float32)]
    #[case("double", DType::Float64)]
    #[case("float64", DType::Float64)]
    fn can_parse_dtype_tag(#[case] tag: &str, #[case] expected: DType) -> Result<()> {
        assert_eq!(tag.parse::<DType>()?, expected);
        Ok(())
    }

    #[test]
    fn rejects_unknown_dtype_tag() {
        let result = "complex".parse::<DType>();
        assert!(matches!(result, Err(ArrayError::UnknownDType(msg)) if msg.contains("complex")));
    }

    #[test]
    fn can_convert_tag_strings() -> Result<()> {
        assert_eq!(DType::try_from("DOUBLE".to_string())?, DType::Float64);
        assert!(DType::try_from("half".to_string()).is_err());
        assert_eq!(String::from(DType::Float32), "float");

        Ok(())
    }

    #[test]
    fn display_uses_short_tag() {
        assert_eq!(DType::Int32.to_string(), "int");
        assert_eq!(DType::Float64.size_in_bytes(), 8);
        assert_eq!(DType::Float32.size_in_bytes(), 4);
    }
}
