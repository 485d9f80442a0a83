//! Declarative (config-file) form of the plugin resource.
//!
//! The admin exchange form and the config form name their fields the same
//! way but disagree on what is included: config files never carry the
//! server-assigned `id` or `created_at`. The two shapes are therefore two
//! separate serde mappings rather than one struct doing double duty.
//!
//! Files are written atomically: first to a `.tmp` sibling, then renamed
//! over the final path, so a crash mid-write never corrupts the file.

use crate::error::DataError;
use crate::plugin::{Plugin, is_false};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A plugin as it appears in declarative config files and in
/// form-encoded admin requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDecl {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_id: String,

    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub consumer_id: String,

    #[serde(default, skip_serializing_if = "is_false")]
    pub enabled: bool,

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

impl From<&Plugin> for PluginDecl {
    fn from(p: &Plugin) -> Self {
        PluginDecl {
            name: p.name.clone(),
            api_id: p.api_id.clone(),
            consumer_id: p.consumer_id.clone(),
            enabled: p.enabled,
            config_path: p.config_path.clone(),
            config_whitelist: p.config_whitelist.clone(),
        }
    }
}

impl From<PluginDecl> for Plugin {
    fn from(d: PluginDecl) -> Self {
        Plugin {
            id: String::new(),
            name: d.name,
            api_id: d.api_id,
            consumer_id: d.consumer_id,
            enabled: d.enabled,
            created_at: 0,
            config_path: d.config_path,
            config_whitelist: d.config_whitelist,
        }
    }
}

impl PluginDecl {
    /// Render as an `application/x-www-form-urlencoded` body, the shape
    /// the admin API accepts for plugin creation. Config keys keep their
    /// dotted names (`config.path`, `config.whitelist`).
    pub fn to_form(&self) -> Result<String, DataError> {
        Ok(serde_urlencoded::to_string(self)?)
    }
}

/// Load the plugin declarations from a YAML file.
pub fn load_file(path: &Path) -> Result<Vec<PluginDecl>, DataError> {
    let data = std::fs::read_to_string(path)?;
    let decls: Vec<PluginDecl> = serde_yaml::from_str(&data)?;
    tracing::debug!(count = decls.len(), path = %path.display(), "decl: plugins loaded");
    Ok(decls)
}

/// Save the plugin declarations to a YAML file, atomically.
pub fn save_file(path: &Path, decls: &[PluginDecl]) -> Result<(), DataError> {
    let yaml = serde_yaml::to_string(decls)?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Atomic write: tmp file → rename
    let tmp = path.with_extension("yaml.tmp");
    std::fs::write(&tmp, &yaml)?;
    std::fs::rename(&tmp, path)?;

    tracing::debug!(count = decls.len(), path = %path.display(), "decl: plugins saved");
    Ok(())
}
