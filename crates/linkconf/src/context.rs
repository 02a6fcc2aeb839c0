// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Read-only generation context consumed by the namespace builders.

use serde::{Deserialize, Serialize};

/// Path contribution an APEX module makes to one namespace.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct Contribution {
    /// Name of the namespace the paths are destined for.
    #[serde(rename = "namespace")]
    pub namespace_name: String,

    /// Paths relative to the module's mount point.
    #[serde(default)]
    pub paths: Vec<String>,
}

/// An APEX module registered with the generation run.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ApexModule {
    /// Module name, e.g. `com.vendor.gfx`; mounted at `/apex/<name>`.
    pub name: String,

    /// Per-namespace path contributions, in declared order.
    #[serde(default)]
    pub contributions: Vec<Contribution>,
}

/// Query surface over the build-time facts a namespace builder may consult.
///
/// Implementations are immutable snapshots: every builder decision is a
/// pure function of these answers, so a given context always yields an
/// identical namespace graph. The production implementation is
/// [`crate::config::GenConfig`]; tests substitute their own fixtures.
pub trait Context {
    /// Whether the system section is being generated.
    fn is_system_section(&self) -> bool;

    /// Whether the unrestricted (diagnostic/bootstrap) section is being
    /// generated. Isolation is relaxed there.
    fn is_unrestricted_section(&self) -> bool;

    /// Whether this run targets a standalone APEX binary configuration
    /// rather than a partition section.
    fn is_apex_binary_config(&self) -> bool;

    /// Whether the device ships a VNDK vendor-interface library set.
    fn is_vndk_available(&self) -> bool;

    /// Name of the system namespace to link against for this variant.
    fn system_namespace_name(&self) -> &str;

    /// Registered APEX modules, in declaration order. Order is preserved
    /// because it determines search-path order.
    fn apex_modules(&self) -> &[ApexModule];
}
