use limebird::domain::environment::ExecutionMode;
use limebird::kernel::RegistryError;
use limebird::{InitError, InitOptions, build, init};
use serial_test::serial;
use std::fs;
use tempfile::tempdir;

#[test]
fn build_uses_explicit_mode() {
    let registry = build(&InitOptions::default().mode(ExecutionMode::Production)).expect("build");
    assert!(registry.environment().is_production());
    assert_eq!(registry.resolve_active_site_url(), "https://limebird.org");
}

#[test]
fn build_reports_invalid_file_values() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("site.toml");
    fs::write(&path, "[dns]\nnetlify_ip = \"75.2.60.500\"\n")?;

    let err = build(&InitOptions::default().config_path(&path).mode(ExecutionMode::Development))
        .expect_err("invalid IPv4 must be rejected");
    assert!(matches!(err, InitError::Registry { source: RegistryError::Invariant { .. }, .. }));
    assert!(err.to_string().contains("netlify_ip"), "{err}");
    Ok(())
}

#[test]
fn build_reports_missing_file() {
    let err = build(&InitOptions::default().config_path("does/not/exist.toml"))
        .expect_err("explicit file must exist");
    assert!(matches!(err, InitError::Config { .. }));
}

#[test]
#[serial]
fn init_installs_once() {
    let options = InitOptions::default().mode(ExecutionMode::Development);
    let registry = init(&options).expect("first init");
    assert_eq!(registry.build_email_address("support"), "support@limebird.org");

    let err = init(&options).expect_err("second init");
    assert!(matches!(
        err,
        InitError::Registry { source: RegistryError::AlreadyInitialized { .. }, context: Some(_) }
    ));
}
