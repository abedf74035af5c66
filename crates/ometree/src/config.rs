// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Store configuration

use crate::error::Result;
use crate::schema::SchemaVersion;
use serde::{Deserialize, Serialize};

/// Configuration for a [`MetadataStore`](crate::MetadataStore).
///
/// Every field has a default, so an empty YAML document is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Schema version whose field set the store accepts
    pub schema_version: SchemaVersion,

    /// Keep one last-resolved node per entity kind
    pub cache_enabled: bool,

    /// Upper bound on indices tried by `probe_count`
    pub max_probe: usize,
}

fn default_max_probe() -> usize {
    4096
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            schema_version: SchemaVersion::default(),
            cache_enabled: true,
            max_probe: default_max_probe(),
        }
    }
}

impl StoreConfig {
    /// Parse a YAML config. Missing keys take their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml_ng::from_str(yaml)?;
        diagnostics::log_debug!(
            "loaded store config: version {version}, cache {cache}, max probe {max_probe}",
            version: config.schema_version.as_str(),
            cache: config.cache_enabled,
            max_probe: config.max_probe
        );
        Ok(config)
    }
}
