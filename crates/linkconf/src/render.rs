// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Rendering of assembled namespaces to the linker's textual config format.
//!
//! One stanza per namespace. Path properties use `=` for the first entry
//! and `+=` for the rest; shared-lib lists are colon-joined. Variable
//! tokens are expanded here; `${LIB}` is emitted verbatim for the dynamic
//! linker to substitute at load time. The `requires` set is not rendered,
//! it is a validation hint for the downstream aggregator.

use std::collections::HashMap;
use std::fmt::Write;

use crate::namespace::Namespace;
use crate::variable;

#[cfg(test)]
#[path = "./render_test.rs"]
mod render_test;

/// Render one namespace against the process-wide variable map.
pub fn render_namespace(ns: &Namespace) -> String {
    render_expanded(ns, |text| variable::expand(text))
}

/// Render one namespace against an explicit variable map.
pub fn render_namespace_with(vars: &HashMap<String, String>, ns: &Namespace) -> String {
    render_expanded(ns, |text| variable::expand_with(vars, text))
}

fn render_expanded(ns: &Namespace, expand: impl Fn(&str) -> String) -> String {
    let mut out = String::new();
    let prefix = format!("namespace.{}", ns.name());

    writeln!(out, "{}.isolated = {}", prefix, ns.is_isolated()).unwrap();
    writeln!(out, "{}.visible = {}", prefix, ns.is_visible()).unwrap();

    write_path_list(&mut out, &prefix, "search.paths", ns.search_paths());
    write_path_list(&mut out, &prefix, "permitted.paths", ns.permitted_paths());

    if !ns.links().is_empty() {
        let targets: Vec<&str> = ns.links().iter().map(|l| l.target_name()).collect();
        writeln!(out, "{}.links = {}", prefix, targets.join(",")).unwrap();

        for link in ns.links() {
            // Tokens may expand to nothing at all; such entries are
            // dropped, and a fully empty list emits no property.
            let libs: Vec<String> = link
                .shared_libs()
                .iter()
                .map(|lib| expand(lib))
                .filter(|lib| !lib.is_empty())
                .collect();
            if libs.is_empty() {
                continue;
            }
            writeln!(
                out,
                "{}.link.{}.shared_libs = {}",
                prefix,
                link.target_name(),
                libs.join(":")
            )
            .unwrap();
        }
    }

    out
}

fn write_path_list(out: &mut String, prefix: &str, property: &str, paths: &[String]) {
    let mut op = "=";
    for path in paths {
        writeln!(out, "{}.{} {} {}", prefix, property, op, path).unwrap();
        op = "+=";
    }
}
