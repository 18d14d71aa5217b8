use std::time::Duration;

use crate::AttackSummary;

#[derive(Clone, Debug)]
pub struct SessionRecord {
    pub attacks: Vec<AttackSummary>,
    pub refreshes: u32,
    pub statements_cleared: usize,
    pub boss_hp_remaining: u32,
    pub action_points_left: u32,
    pub duration: Duration,
}

impl SessionRecord {
    pub fn criticals(&self) -> usize {
        self.attacks.iter().filter(|a| a.critical).count()
    }
}

#[derive(Clone, Debug)]
pub enum SessionResult {
    Victory(SessionRecord),
    Defeat(SessionRecord),
    /// Threshold ruleset ran out of action points with the boss standing.
    Stalled(SessionRecord),
}

impl SessionResult {
    pub fn inner_ref(&self) -> &SessionRecord {
        match self {
            SessionResult::Victory(r) | SessionResult::Defeat(r) | SessionResult::Stalled(r) => r,
        }
    }

    pub fn short_str(&self) -> String {
        match self {
            SessionResult::Victory(..) => "Victory".to_string(),
            SessionResult::Defeat(..) => "Defeat".to_string(),
            SessionResult::Stalled(..) => "Stalled".to_string(),
        }
    }
}

impl std::fmt::Display for SessionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner_ref();
        let mut res = format!(
            "[{:?}] {} after {} attacks ({} cleared, boss {} hp left)\n",
            inner.duration,
            self.short_str(),
            inner.attacks.len(),
            inner.statements_cleared,
            inner.boss_hp_remaining,
        );
        let mut last_statement: Option<&str> = None;
        for attack in &inner.attacks {
            if last_statement != Some(attack.statement_id.as_str()) {
                res.push_str(&format!("[{}]\n", attack.statement_id));
                last_statement = Some(attack.statement_id.as_str());
            }
            res.push_str(&format!(
                "  {} -{} {:?}\n",
                attack.tier, attack.absorbed, attack.rolls
            ));
        }
        write!(f, "{res}")
    }
}
