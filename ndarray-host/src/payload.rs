use super::*;
use serde::{Deserialize, Serialize};

/// Serialized form of a host array: flat numbers, optional dimensions and an optional dtype tag.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostPayload {
    pub data: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtype: Option<DType>,
}

impl HostPayload {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl HostArray {
    /// Creates an array from a payload, a missing dtype is resolved through the config.
    pub fn from_payload(payload: &HostPayload, config: &HostConfig) -> Result<Self> {
        let dtype = payload.dtype.unwrap_or(config.default_dtype);
        Self::new(&payload.data, payload.shape.as_deref(), dtype)
    }

    /// Captures the array as a payload carrying its shape and dtype.
    pub fn to_payload(&self) -> HostPayload {
        HostPayload {
            data: self.to_array(),
            shape: Some(self.shape()),
            dtype: Some(self.dtype()),
        }
    }
}
