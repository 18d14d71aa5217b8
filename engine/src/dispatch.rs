use models::PlayableCard;

use crate::{AttackOutcome, DamageTier};

#[derive(Clone, Debug)]
pub struct AttackSummary {
    pub statement_id: String,
    pub damage: u32,
    pub absorbed: u32,
    pub tier: DamageTier,
    pub rolls: Vec<u8>,
    pub critical: bool,
}

impl std::fmt::Display for AttackSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Attack<statement={}, tier={}, damage={}, absorbed={}, rolls={:?}>",
            self.statement_id, self.tier, self.damage, self.absorbed, self.rolls
        )
    }
}

impl AttackSummary {
    pub fn new(statement_id: &str, outcome: &AttackOutcome) -> Self {
        Self {
            statement_id: statement_id.to_string(),
            damage: outcome.damage(),
            absorbed: outcome.absorbed,
            tier: outcome.tier(),
            rolls: outcome.rolls.clone(),
            critical: outcome.critical_triggered(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum DispatchableEvent {
    Log(String),
    Warning(String),
    CardDrawn(PlayableCard),
    HandRefreshed(usize),
    AttackResolved(AttackSummary),
    /// Carries the break feedback to show while the statement is breaking.
    StatementBroken(String, String),
    PhaseComplete(u32),
    Victory,
    Defeat,
}
