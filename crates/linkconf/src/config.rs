// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Generation config parsing and the production [`Context`] source.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::context::{ApexModule, Context};

#[cfg(test)]
#[path = "./config_test.rs"]
mod config_test;

/// API version for generation configs.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub enum ApiVersion {
    #[serde(rename = "linkconf/v0")]
    V0,
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::V0
    }
}

/// Helper for two-stage deserialization to determine API version first.
#[derive(Deserialize)]
struct ApiVersionMapping {
    #[serde(default)]
    api: ApiVersion,
}

/// Logical section this generation run targets.
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SectionKind {
    /// System partition section.
    #[default]
    System,
    /// Vendor partition section.
    Vendor,
    /// Diagnostic/bootstrap section with relaxed isolation.
    Unrestricted,
}

/// Generation config from a linkconf.yaml file.
///
/// This is the production [`Context`] implementation: an immutable
/// snapshot of build-time facts populated before any builder runs.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenConfig {
    /// API version identifier.
    pub api: ApiVersion,

    /// Optional human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Section being generated.
    #[serde(default)]
    pub section: SectionKind,

    /// Whether this run targets a standalone APEX binary configuration.
    #[serde(default)]
    pub apex_binary: bool,

    /// Whether the device ships a VNDK vendor-interface library set.
    #[serde(default = "default_vndk_available")]
    pub vndk_available: bool,

    /// Name of the system namespace to link against.
    #[serde(default = "default_system_namespace")]
    pub system_namespace: String,

    /// APEX modules and their per-namespace path contributions, in
    /// declaration order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub apex_modules: Vec<ApexModule>,

    /// Variable values expanded into shared-lib lists at render time.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub variables: HashMap<String, String>,

    /// Path to the file this was loaded from (not serialized).
    #[serde(skip)]
    pub source_path: Option<PathBuf>,
}

fn default_vndk_available() -> bool {
    true
}

fn default_system_namespace() -> String {
    "system".to_string()
}

impl GenConfig {
    /// Parse config from YAML string.
    pub fn from_yaml<S: Into<String>>(yaml: S) -> crate::Result<Self> {
        let yaml = yaml.into();

        // Stage 1: Parse to get API version
        let value: serde_yaml::Value =
            serde_yaml::from_str(&yaml).map_err(|e| crate::Error::InvalidYaml {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        let with_version: ApiVersionMapping =
            serde_yaml::from_value(value.clone()).map_err(|e| crate::Error::InvalidYaml {
                error: e,
                yaml_content: yaml.clone(),
            })?;

        // Stage 2: Deserialize based on version
        match with_version.api {
            ApiVersion::V0 => {
                serde_yaml::from_value(value).map_err(|e| crate::Error::InvalidYaml {
                    error: e,
                    yaml_content: yaml,
                })
            }
        }
    }

    /// Load config from file path.
    pub fn load<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(crate::Error::NotFoundAtPath(path.to_path_buf()));
        }
        let yaml = std::fs::read_to_string(path).map_err(|e| crate::Error::ReadFailed {
            path: path.to_path_buf(),
            error: e,
        })?;

        let mut config = Self::from_yaml(yaml)?;
        config.source_path = Some(path.to_path_buf());
        tracing::debug!(
            path = ?path,
            section = ?config.section,
            apex_modules = config.apex_modules.len(),
            "parsed generation config"
        );
        Ok(config)
    }

    /// Register this config's variables into the process-wide map.
    ///
    /// Called once at startup, before any rendering.
    pub fn register_variables(&self) {
        for (name, value) in &self.variables {
            crate::variable::register_variable(name.clone(), value.clone());
        }
    }
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            api: ApiVersion::default(),
            description: None,
            section: SectionKind::default(),
            apex_binary: false,
            vndk_available: default_vndk_available(),
            system_namespace: default_system_namespace(),
            apex_modules: Vec::new(),
            variables: HashMap::new(),
            source_path: None,
        }
    }
}

impl Context for GenConfig {
    fn is_system_section(&self) -> bool {
        self.section == SectionKind::System
    }

    fn is_unrestricted_section(&self) -> bool {
        self.section == SectionKind::Unrestricted
    }

    fn is_apex_binary_config(&self) -> bool {
        self.apex_binary
    }

    fn is_vndk_available(&self) -> bool {
        self.vndk_available
    }

    fn system_namespace_name(&self) -> &str {
        &self.system_namespace
    }

    fn apex_modules(&self) -> &[ApexModule] {
        &self.apex_modules
    }
}
