// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Assembly of the same-process HAL namespace.
//!
//! SP-HALs are the only vendor libraries that may be loaded inside system
//! processes: a GPU driver's libEGL_<chipset>.so and libGLESv2_<chipset>.so,
//! the graphics mapper implementation, and so on. The framework loads them
//! by explicitly targeting this namespace by name; there is no link from
//! the default namespace into it.

use crate::context::Context;
use crate::namespace::Namespace;
use crate::variable::var;

#[cfg(test)]
#[path = "./sphal_test.rs"]
mod sphal_test;

/// Assemble the `sphal` namespace for the given context.
///
/// The rule sequence is order-significant: earlier search paths and links
/// win resolution ties, so entries must be appended exactly in this order.
pub fn build_sphal_namespace(ctx: &dyn Context) -> Namespace {
    // Visible so the framework can target "sphal" by name when loading.
    let mut ns = Namespace::new("sphal", !ctx.is_unrestricted_section(), true);
    ns.add_search_path("/odm/${LIB}");
    ns.add_search_path("/vendor/${LIB}");
    ns.add_search_path("/vendor/${LIB}/egl");
    ns.add_search_path("/vendor/${LIB}/hw");

    ns.add_permitted_path("/odm/${LIB}");
    ns.add_permitted_path("/vendor/${LIB}");
    ns.add_permitted_path("/system/vendor/${LIB}");

    for apex in ctx.apex_modules() {
        for contribution in &apex.contributions {
            if contribution.namespace_name == "sphal" {
                for rel_path in &contribution.paths {
                    let path = format!("/apex/{}/{}", apex.name, rel_path);
                    ns.add_search_path(path.clone());
                    ns.add_permitted_path(path);
                }
            }
        }
    }

    ns.add_search_path("/vendor/${LIB}/arm");
    ns.add_permitted_path("/vendor/${LIB}/arm");
    ns.add_search_path("/vendor/${LIB}/arm/nb");
    if ctx.is_apex_binary_config() && !ctx.is_vndk_available() {
        // Legacy devices have no VNDK-capable vendor interface; let SP-HAL
        // libraries resolve VNDK-SP libraries from the system partition.
        ns.add_search_path("/system/${LIB}");
        ns.add_permitted_path("/system/${LIB}");
    }

    if ctx.is_apex_binary_config() {
        if ctx.is_vndk_available() {
            ns.add_requires(["vndksp"]);
            ns.get_link(ctx.system_namespace_name())
                .add_shared_lib(var("LLNDK_LIBRARIES_VENDOR", ""));
        }
    } else {
        // Once in this namespace, access to libraries in /system/lib is
        // restricted to the libraries listed on these links. Links are
        // tried in insertion order: rs must come before vndk since both
        // are capable of loading libRS_internal.so.
        if ctx.is_system_section() || ctx.is_unrestricted_section() {
            ns.get_link("rs").add_shared_lib("libRS_internal.so");
        }
        ns.get_link(ctx.system_namespace_name())
            .add_shared_lib(var("LLNDK_LIBRARIES_VENDOR", ""));
        ns.get_link("vndk")
            .add_shared_lib(var("VNDK_SAMEPROCESS_LIBRARIES_VENDOR", ""));
        ns.add_requires(["libneuralnetworks.so"]);
    }

    ns
}
