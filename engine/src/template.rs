use std::path::Path;

use serde::Deserialize;

use crate::{AttackMode, CritPolicy, DEFAULT_ACTION_POINTS, DEFAULT_REFRESHES, Ruleset};

/// Session settings as written in a TOML file. Every field is optional.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionTemplate {
    pub ruleset: Ruleset,
    pub crit_policy: CritPolicy,
    pub action_points: Option<u32>,
    pub refreshes: Option<u32>,
    pub randomize_target_points: bool,
    pub hide_weakness: bool,
    pub seed: Option<u64>,
}

impl SessionTemplate {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str::<SessionTemplate>(s)
            .map_err(|error| anyhow::anyhow!("unable to parse session template: {error}"))
    }

    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let source = std::fs::read_to_string(path)
            .map_err(|error| anyhow::anyhow!("unable to read {}: {error}", path.display()))?;
        Self::from_toml_str(&source)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: AttackMode,
    pub action_points: u32,
    pub refreshes: u32,
    pub randomize_target_points: bool,
    pub hide_weakness: bool,
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            mode: AttackMode::default(),
            action_points: *DEFAULT_ACTION_POINTS,
            refreshes: *DEFAULT_REFRESHES,
            randomize_target_points: false,
            hide_weakness: false,
            seed: None,
        }
    }
}

impl SessionConfig {
    pub fn ruleset(&self) -> Ruleset {
        self.mode.ruleset
    }
}

impl TryFrom<SessionTemplate> for SessionConfig {
    type Error = anyhow::Error;

    fn try_from(template: SessionTemplate) -> Result<Self, Self::Error> {
        let action_points = template.action_points.unwrap_or(*DEFAULT_ACTION_POINTS);
        if action_points == 0 {
            anyhow::bail!("a session needs at least one action point")
        }
        Ok(Self {
            mode: AttackMode {
                ruleset: template.ruleset,
                crit_policy: template.crit_policy,
            },
            action_points,
            refreshes: template.refreshes.unwrap_or(*DEFAULT_REFRESHES),
            randomize_target_points: template.randomize_target_points,
            hide_weakness: template.hide_weakness,
            seed: template.seed,
        })
    }
}
