use models::{Health, PlayableCard, Weakness};

use crate::{
    AttackOutcome, DialogueOption, OptionId, Progress, Ruleset, Signal, StatementState,
};

/// Everything the presentation layer needs after an action.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub ruleset: Ruleset,
    pub progress: Progress,
    pub statement_state: StatementState,
    pub phase_index: usize,
    pub phase_title: String,
    pub statement_index: usize,
    pub statement_id: String,
    pub statement_text: String,
    pub statement_hp: Health,
    pub weakness: Option<Weakness>,
    pub boss_hp: Health,
    pub action_points: u32,
    pub refreshes_left: u32,
    pub card: Option<PlayableCard>,
    pub options: Vec<DialogueOption>,
    pub selected: Option<OptionId>,
    pub last_outcome: Option<AttackOutcome>,
    pub break_feedback: Option<String>,
    pub signals: Vec<Signal>,
    /// Out of action points without a terminal state.
    pub stalled: bool,
}

impl Snapshot {
    pub fn boss_percent(&self) -> u32 {
        if self.boss_hp.max() == 0 {
            return 0;
        }
        self.boss_hp.current() * 100 / self.boss_hp.max()
    }

    pub fn is_over(&self) -> bool {
        self.progress.is_terminal() || self.stalled
    }

    pub fn option(&self, id: OptionId) -> Option<&DialogueOption> {
        self.options.iter().find(|o| o.id == id)
    }
}
