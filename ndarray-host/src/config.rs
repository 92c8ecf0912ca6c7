use super::*;
use log::debug;
use serde::{Deserialize, Serialize};

/// Controls how the host boundary picks a dtype when the caller gives no explicit tag.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    pub default_dtype: DType,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            default_dtype: DType::Float64,
        }
    }
}

impl HostConfig {
    /// Loads the configuration from JSON, missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Resolves a host type tag such as `"int"` into a dtype, falling back to the default one.
    pub fn resolve(&self, tag: Option<&str>) -> Result<DType> {
        let dtype = match tag {
            Some(tag) => tag.parse::<DType>()?,
            None => self.default_dtype,
        };
        debug!("resolved dtype tag {tag:?} to {dtype}");

        Ok(dtype)
    }
}
