// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Namespace and link value types for the assembled configuration graph.

#[cfg(test)]
#[path = "./namespace_test.rs"]
mod namespace_test;

/// A directed permission edge from one namespace to another.
///
/// Libraries named in `shared_libs` may be resolved across this edge.
/// Entries may be literal sonames or deferred-expansion tokens produced by
/// [`crate::variable::var`]; both are carried opaquely until render time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    target_name: String,
    shared_libs: Vec<String>,
}

impl Link {
    fn new<S: Into<String>>(target_name: S) -> Self {
        Self {
            target_name: target_name.into(),
            shared_libs: Vec::new(),
        }
    }

    /// Name of the namespace this link points at.
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    /// Libraries allowed to cross this edge, in insertion order.
    pub fn shared_libs(&self) -> &[String] {
        &self.shared_libs
    }

    /// Append a library (or variable token) to this edge.
    ///
    /// Entries are never deduplicated; order is the resolution tie-break
    /// and is preserved as given.
    pub fn add_shared_lib<S: Into<String>>(&mut self, lib: S) -> &mut Self {
        self.shared_libs.push(lib.into());
        self
    }
}

/// One linker isolation domain.
///
/// Every collection on this type is append-only and ordered: search paths
/// resolve first-match-wins, and links are tried in insertion order, so
/// both existence and position carry meaning. Nothing is ever retracted or
/// deduplicated within a single build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    name: String,
    is_isolated: bool,
    is_visible: bool,
    search_paths: Vec<String>,
    permitted_paths: Vec<String>,
    links: Vec<Link>,
    requires: Vec<String>,
}

impl Namespace {
    /// Create an empty namespace.
    ///
    /// An isolated namespace cannot see libraries outside its explicit
    /// paths and links; a visible one can be targeted by name from other
    /// namespaces (e.g. for explicit dynamic loading).
    pub fn new<S: Into<String>>(name: S, is_isolated: bool, is_visible: bool) -> Self {
        Self {
            name: name.into(),
            is_isolated,
            is_visible,
            search_paths: Vec::new(),
            permitted_paths: Vec::new(),
            links: Vec::new(),
            requires: Vec::new(),
        }
    }

    /// Stable identifier, used as the lookup key by link targets.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_isolated(&self) -> bool {
        self.is_isolated
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible
    }

    /// Library search paths, first-match-wins order.
    pub fn search_paths(&self) -> &[String] {
        &self.search_paths
    }

    /// Path prefixes from which absolute-path loads are admitted even when
    /// not reachable through `search_paths`.
    pub fn permitted_paths(&self) -> &[String] {
        &self.permitted_paths
    }

    /// Outgoing links in insertion order.
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Libraries this namespace declares it must be able to resolve.
    pub fn requires(&self) -> &[String] {
        &self.requires
    }

    /// Append a search path.
    pub fn add_search_path<S: Into<String>>(&mut self, path: S) {
        self.search_paths.push(path.into());
    }

    /// Append a permitted path prefix.
    pub fn add_permitted_path<S: Into<String>>(&mut self, path: S) {
        self.permitted_paths.push(path.into());
    }

    /// Append required-library names, preserving the given order.
    pub fn add_requires<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.requires.extend(names.into_iter().map(Into::into));
    }

    /// Fetch the link to `target_name`, creating it on first use.
    ///
    /// At most one link exists per target name; asking again returns the
    /// existing edge for further mutation rather than a duplicate.
    pub fn get_link(&mut self, target_name: &str) -> &mut Link {
        let pos = match self
            .links
            .iter()
            .position(|link| link.target_name == target_name)
        {
            Some(pos) => pos,
            None => {
                self.links.push(Link::new(target_name));
                self.links.len() - 1
            }
        };
        &mut self.links[pos]
    }
}
