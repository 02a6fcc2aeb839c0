// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;
use std::collections::HashMap;

use super::*;
use crate::variable::var;

fn sample_namespace() -> Namespace {
    let mut ns = Namespace::new("sphal", true, true);
    ns.add_search_path("/odm/${LIB}");
    ns.add_search_path("/vendor/${LIB}");
    ns.add_permitted_path("/odm/${LIB}");
    ns
}

#[rstest]
fn test_render_flags_and_path_operators() {
    let rendered = render_namespace_with(&HashMap::new(), &sample_namespace());

    let lines: Vec<&str> = rendered.lines().collect();
    assert_eq!(
        lines,
        [
            "namespace.sphal.isolated = true",
            "namespace.sphal.visible = true",
            "namespace.sphal.search.paths = /odm/${LIB}",
            "namespace.sphal.search.paths += /vendor/${LIB}",
            "namespace.sphal.permitted.paths = /odm/${LIB}",
        ]
    );
}

#[rstest]
fn test_render_expands_link_variables() {
    let mut ns = sample_namespace();
    ns.get_link("system")
        .add_shared_lib(var("LLNDK_LIBRARIES_VENDOR", ""));
    ns.get_link("vndk").add_shared_lib("libRS_internal.so");

    let mut vars = HashMap::new();
    vars.insert(
        "LLNDK_LIBRARIES_VENDOR".to_string(),
        "libEGL.so:libGLESv2.so".to_string(),
    );

    let rendered = render_namespace_with(&vars, &ns);
    assert!(rendered.contains("namespace.sphal.links = system,vndk\n"));
    assert!(rendered.contains("namespace.sphal.link.system.shared_libs = libEGL.so:libGLESv2.so\n"));
    assert!(rendered.contains("namespace.sphal.link.vndk.shared_libs = libRS_internal.so\n"));
}

#[rstest]
fn test_render_joins_literal_libs_with_colon() {
    let mut ns = sample_namespace();
    ns.get_link("system")
        .add_shared_lib("libc.so")
        .add_shared_lib("libdl.so");

    let rendered = render_namespace_with(&HashMap::new(), &ns);
    assert!(rendered.contains("namespace.sphal.link.system.shared_libs = libc.so:libdl.so\n"));
}

#[rstest]
fn test_render_skips_empty_expansions() {
    let mut ns = sample_namespace();
    ns.get_link("system")
        .add_shared_lib(var("UNSET_VARIABLE", ""));

    let rendered = render_namespace_with(&HashMap::new(), &ns);

    // The link is still declared, but an all-empty list emits no property.
    assert!(rendered.contains("namespace.sphal.links = system\n"));
    assert!(!rendered.contains("shared_libs"));
}

#[rstest]
fn test_render_keeps_lib_placeholder_verbatim() {
    let rendered = render_namespace_with(&HashMap::new(), &sample_namespace());
    assert!(rendered.contains("/vendor/${LIB}"));
}

#[rstest]
fn test_render_without_links_omits_links_property() {
    let rendered = render_namespace_with(&HashMap::new(), &sample_namespace());
    assert!(!rendered.contains(".links"));
}
