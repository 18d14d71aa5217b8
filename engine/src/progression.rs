use std::sync::Arc;

use models::{Content, Phase, Statement};

use crate::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementState {
    Active,
    /// Broken, break feedback showing, no further attacks.
    Breaking,
    Cleared,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    InProgress { phase: usize, statement: usize },
    Victory,
    Defeat,
}

impl Progress {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Progress::Victory | Progress::Defeat)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    StatementBroken { phase: usize, statement: usize },
    StatementCleared { phase: usize, statement: usize },
    PhaseComplete(usize),
    Victory,
    Defeat,
}

/// Walks the phases and their statements in order. The active phase's
/// statements are a private copy so that damage never touches the content.
#[derive(Clone, Debug)]
pub struct Progression {
    content: Arc<Content>,
    phase_index: usize,
    statement_index: usize,
    statements: Vec<Statement>,
    state: StatementState,
    progress: Progress,
    randomize_target_points: bool,
}

impl Progression {
    pub fn new<R: RandomSource>(
        content: Arc<Content>,
        randomize_target_points: bool,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        if content.phases.is_empty() || content.phases.iter().any(|p| p.statements.is_empty()) {
            anyhow::bail!("every phase needs at least one statement")
        }
        let mut progression = Self {
            content,
            phase_index: 0,
            statement_index: 0,
            statements: vec![],
            state: StatementState::Active,
            progress: Progress::InProgress {
                phase: 0,
                statement: 0,
            },
            randomize_target_points,
        };
        progression.activate_phase(0, rng);
        Ok(progression)
    }

    fn activate_phase<R: RandomSource>(&mut self, index: usize, rng: &mut R) {
        self.phase_index = index;
        self.statement_index = 0;
        self.statements = self.content.phases[index].statements.clone();
        if self.randomize_target_points {
            for statement in &mut self.statements {
                statement.weakness.set_target_point(rng.roll_die());
            }
        }
        self.state = StatementState::Active;
        self.progress = Progress::InProgress {
            phase: index,
            statement: 0,
        };
        tracing::info!(
            phase = self.phase().id,
            title = %self.phase().title,
            statements = self.statements.len(),
            "phase activated"
        );
    }

    pub fn phase(&self) -> &Phase {
        &self.content.phases[self.phase_index]
    }

    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    pub fn statement_index(&self) -> usize {
        self.statement_index
    }

    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    pub fn statement(&self) -> &Statement {
        &self.statements[self.statement_index]
    }

    pub fn statement_mut(&mut self) -> &mut Statement {
        &mut self.statements[self.statement_index]
    }

    pub fn state(&self) -> StatementState {
        self.state
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn is_terminal(&self) -> bool {
        self.progress.is_terminal()
    }

    /// Remaining HP of the active phase plus every phase not reached yet.
    pub fn remaining_hp(&self) -> u32 {
        let current: u32 = self.statements.iter().map(|s| s.health.current()).sum();
        let ahead: u32 = self.content.phases[self.phase_index + 1..]
            .iter()
            .map(Phase::remaining_hp)
            .sum();
        current + ahead
    }

    pub fn is_last_statement(&self) -> bool {
        self.statement_index + 1 == self.statements.len()
            && self.phase_index + 1 == self.content.phases.len()
    }

    /// `ACTIVE -> BREAKING` once the current statement is out of HP.
    pub fn begin_break(&mut self) -> Option<Signal> {
        if self.is_terminal()
            || self.state != StatementState::Active
            || !self.statement().is_broken()
        {
            return None;
        }
        self.state = StatementState::Breaking;
        tracing::info!(statement = %self.statement().id, "statement broken");
        Some(Signal::StatementBroken {
            phase: self.phase_index,
            statement: self.statement_index,
        })
    }

    /// `BREAKING -> CLEARED`, then moves on to the next statement, the next
    /// phase or victory.
    pub fn clear_statement<R: RandomSource>(&mut self, rng: &mut R) -> Vec<Signal> {
        if self.state != StatementState::Breaking || self.is_terminal() {
            return vec![];
        }
        self.state = StatementState::Cleared;
        let mut signals = vec![Signal::StatementCleared {
            phase: self.phase_index,
            statement: self.statement_index,
        }];

        if self.statement_index + 1 < self.statements.len() {
            self.statement_index += 1;
            self.state = StatementState::Active;
            self.progress = Progress::InProgress {
                phase: self.phase_index,
                statement: self.statement_index,
            };
        } else if self.phase_index + 1 < self.content.phases.len() {
            signals.push(Signal::PhaseComplete(self.phase_index));
            self.activate_phase(self.phase_index + 1, rng);
        } else {
            self.progress = Progress::Victory;
            signals.push(Signal::Victory);
            tracing::info!("victory");
        }
        signals
    }

    pub fn defeat(&mut self) -> Option<Signal> {
        if self.is_terminal() {
            return None;
        }
        self.progress = Progress::Defeat;
        tracing::info!(
            phase = self.phase_index,
            statement = self.statement_index,
            "defeat"
        );
        Some(Signal::Defeat)
    }
}
