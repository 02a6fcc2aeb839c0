// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `linkconf generate` command.

use std::path::PathBuf;

use clap::Args;
use miette::Result;

/// Render the namespace configuration to text
#[derive(Debug, Args)]
pub struct CmdGenerate {
    /// Path to the generation config
    #[clap(short = 'f', long, default_value = "linkconf.yaml")]
    file: PathBuf,

    /// Write output to FILE instead of stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
}

impl CmdGenerate {
    pub fn run(&mut self) -> Result<i32> {
        let config = linkconf::GenConfig::load(&self.file)?;
        tracing::info!(config = ?self.file, "loaded generation config");

        // Variables are registered once, before any rendering happens.
        config.register_variables();

        let ns = linkconf::build_sphal_namespace(&config);
        tracing::debug!(
            namespace = ns.name(),
            search_paths = ns.search_paths().len(),
            links = ns.links().len(),
            "assembled namespace"
        );

        let rendered = linkconf::render_namespace(&ns);

        match &self.output {
            Some(path) => {
                std::fs::write(path, &rendered).map_err(|e| linkconf::Error::WriteFailed {
                    path: path.clone(),
                    error: e,
                })?;
                tracing::info!(output = ?path, "wrote namespace configuration");
            }
            None => {
                print!("{}", rendered);
            }
        }

        Ok(0)
    }
}
