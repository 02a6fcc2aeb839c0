// Copyright (c) Contributors to the linkconf project.
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[rstest]
fn test_parse_minimal_config() {
    let yaml = r#"
api: linkconf/v0
"#;
    let config = GenConfig::from_yaml(yaml).expect("Should parse minimal config");
    assert_eq!(config.api, ApiVersion::V0);
    assert_eq!(config.section, SectionKind::System);
    assert!(!config.apex_binary);
    assert!(config.vndk_available);
    assert_eq!(config.system_namespace, "system");
    assert!(config.apex_modules.is_empty());
    assert!(config.variables.is_empty());
}

#[rstest]
fn test_parse_full_config() {
    let yaml = r#"
api: linkconf/v0
description: "Vendor image generation"
section: vendor
apex_binary: false
vndk_available: true
system_namespace: system_default
apex_modules:
  - name: com.vendor.gfx
    contributions:
      - namespace: sphal
        paths:
          - lib/egl
          - lib/hw
variables:
  LLNDK_LIBRARIES_VENDOR: libEGL.so:libGLESv2.so
"#;
    let config = GenConfig::from_yaml(yaml).expect("Should parse full config");
    assert_eq!(config.description, Some("Vendor image generation".to_string()));
    assert_eq!(config.section, SectionKind::Vendor);
    assert_eq!(config.system_namespace, "system_default");
    assert_eq!(config.apex_modules.len(), 1);
    assert_eq!(config.apex_modules[0].name, "com.vendor.gfx");
    assert_eq!(config.apex_modules[0].contributions.len(), 1);
    assert_eq!(
        config.apex_modules[0].contributions[0].paths,
        vec!["lib/egl", "lib/hw"]
    );
    assert_eq!(
        config.variables.get("LLNDK_LIBRARIES_VENDOR").map(String::as_str),
        Some("libEGL.so:libGLESv2.so")
    );
}

#[rstest]
fn test_parse_unrestricted_section() {
    let yaml = r#"
api: linkconf/v0
section: unrestricted
"#;
    let config = GenConfig::from_yaml(yaml).expect("Should parse config");
    assert_eq!(config.section, SectionKind::Unrestricted);
    assert!(config.is_unrestricted_section());
    assert!(!config.is_system_section());
}

#[rstest]
fn test_parse_invalid_yaml() {
    let yaml = r#"
api: linkconf/v0
apex_modules: [
  unclosed bracket
"#;
    let result = GenConfig::from_yaml(yaml);
    assert!(result.is_err(), "Should fail on invalid YAML");
}

#[rstest]
fn test_parse_unknown_section_rejected() {
    let yaml = r#"
api: linkconf/v0
section: recovery
"#;
    let result = GenConfig::from_yaml(yaml);
    assert!(result.is_err(), "Should fail on unknown section kind");
}

#[rstest]
fn test_context_answers_follow_fields() {
    let yaml = r#"
api: linkconf/v0
section: system
apex_binary: true
vndk_available: false
"#;
    let config = GenConfig::from_yaml(yaml).expect("Should parse config");

    let ctx: &dyn Context = &config;
    assert!(ctx.is_system_section());
    assert!(!ctx.is_unrestricted_section());
    assert!(ctx.is_apex_binary_config());
    assert!(!ctx.is_vndk_available());
    assert_eq!(ctx.system_namespace_name(), "system");
}

#[rstest]
fn test_load_sets_source_path() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let path = dir.path().join("linkconf.yaml");
    std::fs::write(&path, "api: linkconf/v0\n").expect("Should write config");

    let config = GenConfig::load(&path).expect("Should load config");
    assert_eq!(config.source_path, Some(path));
}

#[rstest]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().expect("Should create temp dir");
    let result = GenConfig::load(dir.path().join("absent.yaml"));
    assert!(matches!(result, Err(crate::Error::NotFoundAtPath(_))));
}

#[rstest]
fn test_default_config() {
    let config = GenConfig::default();
    assert_eq!(config.api, ApiVersion::V0);
    assert_eq!(config.section, SectionKind::System);
    assert!(!config.apex_binary);
    assert!(config.vndk_available);
    assert_eq!(config.system_namespace, "system");
    assert!(config.source_path.is_none());
}
