// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

//! Implementation of the `linkconf init` command.

use clap::Args;
use miette::Result;
use std::path::PathBuf;

/// Create a new linkconf.yaml file
#[derive(Debug, Args)]
pub struct CmdInit {
    /// Directory to create file in
    #[clap(default_value = ".")]
    path: PathBuf,

    /// Section to target: system, vendor, unrestricted
    #[clap(long, default_value = "system")]
    section: String,

    /// Template to use: minimal, standard
    #[clap(long, default_value = "standard")]
    template: String,
}

impl CmdInit {
    pub fn run(&mut self) -> Result<i32> {
        let config_path = self.path.join(linkconf::LINKCONF_FILENAME);

        // Check if file already exists
        if config_path.exists() {
            return Err(miette::miette!(
                "linkconf.yaml already exists at {:?}",
                config_path
            ));
        }

        let content = match self.template.as_str() {
            "minimal" => self.generate_minimal_template(),
            _ => self.generate_standard_template(),
        };

        std::fs::write(&config_path, content)
            .map_err(|e| miette::miette!("Failed to write linkconf.yaml: {}", e))?;

        println!("Created linkconf.yaml at {:?}", config_path);
        println!();
        println!("Next steps:");
        println!("  1. Edit the file to describe your build context");
        println!("  2. Run 'linkconf show' to preview the namespace graph");
        println!("  3. Run 'linkconf generate' to render the configuration");

        Ok(0)
    }

    fn generate_minimal_template(&self) -> String {
        format!(
            "api: linkconf/v0\n\
            section: {}\n",
            self.section
        )
    }

    fn generate_standard_template(&self) -> String {
        format!(
            "# linkconf generation config\n\
            \n\
            api: linkconf/v0\n\
            \n\
            # Optional: Human-readable description\n\
            # description: \"Vendor image generation\"\n\
            \n\
            # Section to generate: system, vendor, unrestricted\n\
            section: {}\n\
            \n\
            # Standalone APEX binary configuration instead of a partition section\n\
            apex_binary: false\n\
            \n\
            # Whether the device ships a VNDK vendor-interface library set\n\
            vndk_available: true\n\
            \n\
            # Name of the system namespace to link against\n\
            system_namespace: system\n\
            \n\
            # APEX modules contributing paths to namespaces\n\
            # apex_modules:\n\
            #   - name: com.vendor.gfx\n\
            #     contributions:\n\
            #       - namespace: sphal\n\
            #         paths: [lib/egl]\n\
            \n\
            # Variable values expanded into shared-lib lists at render time\n\
            # variables:\n\
            #   LLNDK_LIBRARIES_VENDOR: libEGL.so:libGLESv2.so\n\
            #   VNDK_SAMEPROCESS_LIBRARIES_VENDOR: libhidlbase.so\n",
            self.section
        )
    }
}
