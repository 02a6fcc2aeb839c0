// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `linkconf show` command.

use std::path::PathBuf;

use clap::Args;
use colored::Colorize;
use miette::Result;

/// Display the resolved namespace configuration
#[derive(Debug, Args)]
pub struct CmdShow {
    /// Path to the generation config
    #[clap(short = 'f', long, default_value = "linkconf.yaml")]
    file: PathBuf,

    /// Show raw shared-lib lists without variable expansion
    #[clap(long)]
    raw: bool,
}

impl CmdShow {
    pub fn run(&mut self) -> Result<i32> {
        let config = linkconf::GenConfig::load(&self.file)?;
        config.register_variables();

        let ns = linkconf::build_sphal_namespace(&config);

        println!("{}", format!("Namespace: {}", ns.name()).bold());
        if let Some(desc) = &config.description {
            println!("  {}", desc.dimmed());
        }
        println!();
        println!(
            "  isolated: {}   visible: {}",
            style_bool(ns.is_isolated()),
            style_bool(ns.is_visible())
        );

        println!();
        println!("{}", "Search paths:".bold());
        for (i, path) in ns.search_paths().iter().enumerate() {
            println!("  {}. {}", i + 1, path.cyan());
        }

        println!();
        println!("{}", "Permitted paths:".bold());
        for (i, path) in ns.permitted_paths().iter().enumerate() {
            println!("  {}. {}", i + 1, path.cyan());
        }

        println!();
        println!("{}", "Links:".bold());
        if ns.links().is_empty() {
            println!("  {}", "(no links)".dimmed());
        } else {
            for (i, link) in ns.links().iter().enumerate() {
                println!("  {}. {}", i + 1, link.target_name().green());
                for lib in link.shared_libs() {
                    let shown = if self.raw {
                        lib.clone()
                    } else {
                        linkconf::expand(lib)
                    };
                    if shown.is_empty() {
                        println!("     {}", "(empty after expansion)".dimmed());
                    } else {
                        println!("     {}", shown);
                    }
                }
            }
        }

        if !ns.requires().is_empty() {
            println!();
            println!("{}", "Requires:".bold());
            for lib in ns.requires() {
                println!("  - {}", lib.yellow());
            }
        }

        Ok(0)
    }
}

fn style_bool(value: bool) -> String {
    if value {
        "true".green().to_string()
    } else {
        "false".yellow().to_string()
    }
}
