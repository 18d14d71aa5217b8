use std::{sync::Arc, time::Instant};

use models::Content;
use serde::Deserialize;

use crate::{
    AttackSummary, DialogueOption, LineTier, OptionId, Progress, RandomSource, Ruleset,
    SeededRandom, Session, SessionConfig, SessionRecord, SessionResult, StatementState, choose,
};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Any option, uniformly.
    #[default]
    Random,
    /// The best tier on offer; refreshes a dual-type hand that holds only filler.
    Greedy,
}

impl Strategy {
    pub fn choose<R: RandomSource>(&self, options: &[DialogueOption], rng: &mut R) -> Option<OptionId> {
        match self {
            Strategy::Random => choose(rng, options).map(|o| o.id),
            Strategy::Greedy => [LineTier::Perfect, LineTier::Normal, LineTier::Bad]
                .iter()
                .find_map(|tier| options.iter().find(|o| o.tier == *tier))
                .map(|o| o.id),
        }
    }

    fn wants_refresh(&self, session: &Session) -> bool {
        *self == Strategy::Greedy
            && session.config().ruleset() == Ruleset::DualType
            && session.refreshes_left() > 0
            && session.action_points() > 1
            && !session.options().is_empty()
            && session.options().iter().all(|o| !o.is_effective)
    }
}

/// Plays `session` to the end with `strategy`.
pub fn autoplay<R: RandomSource>(
    mut session: Session,
    strategy: Strategy,
    rng: &mut R,
) -> SessionResult {
    let t_start = Instant::now();
    let mut attacks: Vec<AttackSummary> = Vec::new();
    let mut refreshes = 0;
    let mut cleared = 0;

    let result = loop {
        match session.progress() {
            Progress::Victory => break Progress::Victory,
            Progress::Defeat => break Progress::Defeat,
            Progress::InProgress { .. } => {}
        }

        if session.progression().state() == StatementState::Breaking {
            match session.finish_break(rng) {
                Ok(..) => cleared += 1,
                Err(rejected) => {
                    tracing::warn!(%rejected, "autoplay could not finish a break");
                    break session.progress();
                }
            }
            continue;
        }

        if session.is_stalled() {
            break session.progress();
        }

        if strategy.wants_refresh(&session) && session.refresh_hand(rng).is_ok() {
            refreshes += 1;
            continue;
        }

        let Some(id) = strategy.choose(session.options(), rng) else {
            tracing::warn!("autoplay found no options");
            break session.progress();
        };
        let attack = session
            .select_option(id)
            .and_then(|_| session.confirm_attack(rng));
        match attack {
            Ok(snapshot) => {
                if let Some(ref outcome) = snapshot.last_outcome {
                    attacks.push(AttackSummary::new(&snapshot.statement_id, outcome));
                }
            }
            Err(rejected) => {
                tracing::warn!(%rejected, "autoplay attack rejected");
                break session.progress();
            }
        }
    };

    let record = SessionRecord {
        attacks,
        refreshes,
        statements_cleared: cleared,
        boss_hp_remaining: session.boss().current(),
        action_points_left: session.action_points(),
        duration: Instant::now() - t_start,
    };
    match result {
        Progress::Victory => SessionResult::Victory(record),
        Progress::Defeat => SessionResult::Defeat(record),
        Progress::InProgress { .. } => SessionResult::Stalled(record),
    }
}

/// Runs `iterations` independent sessions from one seeded source.
pub fn autoplay_many(
    content: Arc<Content>,
    config: &SessionConfig,
    strategy: Strategy,
    iterations: usize,
    mut rng: SeededRandom,
) -> anyhow::Result<Vec<SessionResult>> {
    (0..iterations)
        .map(|_| {
            let session = Session::new(Arc::clone(&content), config.clone(), &mut rng)?;
            Ok(autoplay(session, strategy, &mut rng))
        })
        .collect()
}
