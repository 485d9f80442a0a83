use crate::error::DataError;
use serde::{Deserialize, Serialize};

/// Optional query filters for plugin list and lookup requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginRequestParams {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub consumer_id: String,

    /// Page-size hint.
    #[serde(rename = "size_id", default, skip_serializing_if = "is_zero")]
    pub size: u64,

    /// Pagination offset.
    #[serde(rename = "offset_id", default, skip_serializing_if = "is_zero")]
    pub offset: u64,
}

impl PluginRequestParams {
    /// The string addressing a single plugin, favouring `id` over `name`.
    ///
    /// Fails when the params carry neither, since such params cannot
    /// address a specific resource.
    pub fn identifier(&self) -> Result<&str, DataError> {
        if !self.id.is_empty() {
            return Ok(&self.id);
        }

        if !self.name.is_empty() {
            return Ok(&self.name);
        }

        Err(DataError::MissingIdentifier)
    }

    /// Render the params as a URL query string, zero-valued fields omitted.
    pub fn to_query_string(&self) -> Result<String, DataError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

// Serde helpers

fn is_zero(n: &u64) -> bool {
    *n == 0
}
