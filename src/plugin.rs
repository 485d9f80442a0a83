use serde::{Deserialize, Serialize};

/// A plugin attached to an API or a consumer, as exchanged with the
/// gateway admin API.
///
/// Zero-valued optional fields are left out of the serialized form
/// entirely rather than emitted as null/empty. `created_at` is assigned
/// by the server: it is read from responses but never sent back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plugin {
    /// Server-assigned identifier.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub id: String,

    /// Plugin type, e.g. "rate-limiting".
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// Owning API reference.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_id: String,

    /// Owning consumer reference.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub consumer_id: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub enabled: bool,

    /// Creation timestamp (epoch), populated from server responses only.
    #[serde(default, skip_serializing)]
    pub created_at: i64,

    #[serde(
        rename = "config.path",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub config_path: String,

    #[serde(
        rename = "config.whitelist",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub config_whitelist: String,
}

/// One page of plugins from a list request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginList {
    /// Count of plugins across all pages, not just this one.
    #[serde(default)]
    pub total: u64,

    /// Records of this page, in server response order.
    #[serde(default)]
    pub data: Vec<Plugin>,

    /// Opaque cursor for the next page; empty when this is the last page.
    #[serde(default)]
    pub next: String,
}

impl PluginList {
    /// The plugins of this page matching `pred`, in response order.
    ///
    /// Returns a fresh allocation; `data` is left untouched.
    pub fn filter_data<F>(&self, pred: F) -> Vec<Plugin>
    where
        F: Fn(&Plugin) -> bool,
    {
        self.data.iter().filter(|p| pred(p)).cloned().collect()
    }

    /// Whether a further page can be fetched.
    pub fn has_next(&self) -> bool {
        !self.next.is_empty()
    }
}

// Serde helpers

pub(crate) fn is_false(b: &bool) -> bool {
    !*b
}
