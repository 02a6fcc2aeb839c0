// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! linkconf - Linker Namespace Configuration Generator
//!
//! This crate builds in-memory descriptions of dynamic-linker namespaces:
//! isolation boundaries that restrict which shared libraries a set of
//! processes may load and which other namespaces they may reach.
//!
//! # Overview
//!
//! A generation run consumes a [`Context`] (a read-only snapshot of
//! build-time facts: the section being generated, vendor-interface
//! availability, registered APEX modules) and deterministically assembles
//! [`Namespace`] values holding ordered search paths, permitted paths,
//! cross-namespace links, and required-library constraints. The assembled
//! graph is rendered to the linker's textual configuration format by the
//! [`render`] module.
//!
//! # Example
//!
//! ```yaml
//! # linkconf.yaml
//! api: linkconf/v0
//! section: system
//! apex_binary: false
//! vndk_available: true
//!
//! apex_modules:
//!   - name: com.vendor.gfx
//!     contributions:
//!       - namespace: sphal
//!         paths: [lib/egl]
//!
//! variables:
//!   LLNDK_LIBRARIES_VENDOR: libEGL.so:libGLESv2.so
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod namespace;
pub mod render;
pub mod sphal;
pub mod variable;

pub use config::{ApiVersion, GenConfig, SectionKind};
pub use context::{ApexModule, Context, Contribution};
pub use error::{Error, Result};
pub use namespace::{Link, Namespace};
pub use render::{render_namespace, render_namespace_with};
pub use sphal::build_sphal_namespace;
pub use variable::{clear_variables, expand, register_variable, var};

/// Well-known filename for generation configs.
pub const LINKCONF_FILENAME: &str = "linkconf.yaml";
