use std::path::PathBuf;

use engine::{
    CritPolicy, DEFAULT_ACTION_POINTS, DEFAULT_REFRESHES, Ruleset, SessionConfig, SessionTemplate,
};
use rstest::rstest;

fn load(path: &PathBuf) -> anyhow::Result<SessionConfig> {
    SessionConfig::try_from(SessionTemplate::read(path)?)
}

#[rstest]
fn test_valid_session(#[files("tests/sessions/valid/*.toml")] path: PathBuf) {
    let config = load(&path);
    assert!(
        config.is_ok(),
        "Session `{:?}` failed: {}",
        path.file_name().unwrap(),
        config.unwrap_err()
    );
}

#[rstest]
fn test_invalid_session(#[files("tests/sessions/invalid/*.toml")] path: PathBuf) {
    assert!(
        load(&path).is_err(),
        "Session `{:?}` should have been rejected",
        path.file_name().unwrap()
    );
}

#[test]
fn test_defaults() -> Result<(), Box<dyn std::error::Error>> {
    let config = load(&PathBuf::from("tests/sessions/valid/defaults.toml"))?;
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.action_points, *DEFAULT_ACTION_POINTS);
    assert_eq!(config.refreshes, *DEFAULT_REFRESHES);
    assert_eq!(config.ruleset(), Ruleset::Threshold);
    assert_eq!(config.mode.crit_policy, CritPolicy::Permissive);
    Ok(())
}

#[test]
fn test_dual_type_fields() -> Result<(), Box<dyn std::error::Error>> {
    let config = load(&PathBuf::from("tests/sessions/valid/dual_type.toml"))?;
    assert_eq!(config.ruleset(), Ruleset::DualType);
    assert_eq!(config.action_points, 20);
    assert_eq!(config.refreshes, 5);
    assert_eq!(config.seed, Some(1234));
    assert!(!config.hide_weakness);
    Ok(())
}

#[test]
fn test_missing_file() {
    assert!(SessionTemplate::read(&PathBuf::from("tests/sessions/nope.toml")).is_err());
}
