// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Deferred-expansion variable tokens and the process-wide variable map.
//!
//! Builders emit platform variables (LLNDK library lists and friends) as
//! opaque `@{NAME:default}` tokens; the renderer expands them against a
//! map populated once at startup. `${LIB}` is not a token of this layer:
//! it is left for the dynamic linker itself to substitute.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::RwLock;

#[cfg(test)]
#[path = "./variable_test.rs"]
mod variable_test;

/// Process-wide variable map, populated at startup and read-only afterwards.
static VARIABLES: Lazy<RwLock<HashMap<String, String>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Matches `@{NAME}` and `@{NAME:default}` tokens.
static TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"@\{([A-Za-z0-9_]+)(?::([^}]*))?\}").unwrap());

/// Produce the deferred-expansion token for `name` with a fallback value.
pub fn var<S: AsRef<str>>(name: S, default: S) -> String {
    format!("@{{{}:{}}}", name.as_ref(), default.as_ref())
}

/// Register a variable value. Called once per variable at startup, before
/// any rendering happens.
pub fn register_variable<S: Into<String>>(name: S, value: S) {
    let mut vars = VARIABLES.write().unwrap();
    vars.insert(name.into(), value.into());
}

/// Clear the variable map (used in tests).
pub fn clear_variables() {
    let mut vars = VARIABLES.write().unwrap();
    vars.clear();
}

/// Expand every variable token in `text` against the process-wide map.
pub fn expand(text: &str) -> String {
    let vars = VARIABLES.read().unwrap();
    expand_with(&vars, text)
}

/// Expand every variable token in `text` against an explicit map.
///
/// Unregistered variables fall back to the token's declared default, or
/// the empty string when none was declared; expansion never fails.
pub fn expand_with(vars: &HashMap<String, String>, text: &str) -> String {
    TOKEN
        .replace_all(text, |caps: &regex::Captures| {
            let name = &caps[1];
            match vars.get(name) {
                Some(value) => value.clone(),
                None => caps.get(2).map(|m| m.as_str()).unwrap_or("").to_string(),
            }
        })
        .into_owned()
}
