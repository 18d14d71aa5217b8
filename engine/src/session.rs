use std::sync::Arc;

use models::{Content, Health, PlayableCard};

use crate::{
    AttackOutcome, AttackSummary, Deck, DialogueOption, DispatchableEvent, OptionId, Progress,
    Progression, RandomSource, Rejected, Ruleset, SessionConfig, Signal, Snapshot, StatementState,
    choose, generate_options, resolve_attack,
};

#[derive(Clone, Debug)]
enum Hand {
    /// Threshold ruleset: one drawn card expanded into its options.
    Drawn {
        card: Option<PlayableCard>,
        options: Vec<DialogueOption>,
    },
    /// Dual-type ruleset: a standing hand out of the statement's deck.
    Standing(Deck),
}

impl Hand {
    fn options(&self) -> &[DialogueOption] {
        match self {
            Hand::Drawn { options, .. } => options,
            Hand::Standing(deck) => deck.hand(),
        }
    }

    fn card(&self) -> Option<&PlayableCard> {
        match self {
            Hand::Drawn { card, .. } => card.as_ref(),
            Hand::Standing(..) => None,
        }
    }
}

/// A single play-through. All state lives here and every mutation goes
/// through one of the action methods, one at a time.
#[derive(Clone, Debug)]
pub struct Session {
    content: Arc<Content>,
    config: SessionConfig,
    progression: Progression,
    boss: Health,
    action_points: u32,
    refreshes_left: u32,
    hand: Hand,
    selected: Option<OptionId>,
    last_outcome: Option<AttackOutcome>,
    signals: Vec<Signal>,
    pub event_sender: Option<std::sync::mpsc::Sender<DispatchableEvent>>,
}

impl Session {
    pub fn new<R: RandomSource>(
        content: Arc<Content>,
        config: SessionConfig,
        rng: &mut R,
    ) -> anyhow::Result<Self> {
        if content.cards.is_empty() && config.ruleset() == Ruleset::Threshold {
            anyhow::bail!("the threshold ruleset needs a card pool")
        }
        let progression =
            Progression::new(Arc::clone(&content), config.randomize_target_points, rng)?;
        let boss = Health(content.remaining_hp(), content.total_max_hp());
        let mut session = Self {
            boss,
            action_points: config.action_points,
            refreshes_left: config.refreshes,
            hand: Hand::Drawn {
                card: None,
                options: vec![],
            },
            selected: None,
            last_outcome: None,
            signals: vec![],
            event_sender: None,
            content,
            config,
            progression,
        };
        session.deal_for_statement(rng);
        Ok(session)
    }

    pub fn with_channel(mut self, sender: std::sync::mpsc::Sender<DispatchableEvent>) -> Self {
        self.event_sender = Some(sender);
        self
    }

    fn dispatch_event(&self, event: DispatchableEvent) {
        if let Some(ref tx) = self.event_sender {
            let _ = tx.send(event);
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn progression(&self) -> &Progression {
        &self.progression
    }

    pub fn boss(&self) -> Health {
        self.boss
    }

    pub fn action_points(&self) -> u32 {
        self.action_points
    }

    pub fn refreshes_left(&self) -> u32 {
        self.refreshes_left
    }

    pub fn options(&self) -> &[DialogueOption] {
        self.hand.options()
    }

    pub fn card(&self) -> Option<&PlayableCard> {
        self.hand.card()
    }

    pub fn selected(&self) -> Option<&DialogueOption> {
        let id = self.selected?;
        self.options().iter().find(|o| o.id == id)
    }

    pub fn is_stalled(&self) -> bool {
        self.action_points == 0
            && !self.progression.is_terminal()
            && self.progression.state() == StatementState::Active
    }

    fn draw_card<R: RandomSource>(&mut self, rng: &mut R) {
        let card = choose(rng, &self.content.cards).cloned();
        let options = match card {
            Some(ref card) => {
                tracing::debug!(card = %card.id, rarity = ?card.rarity, "card drawn");
                self.dispatch_event(DispatchableEvent::CardDrawn(card.clone()));
                generate_options(
                    card,
                    self.progression.statement(),
                    &self.content.fillers,
                    rng,
                )
            }
            None => {
                self.dispatch_event(DispatchableEvent::Warning(
                    "card pool is empty".to_string(),
                ));
                vec![]
            }
        };
        self.hand = Hand::Drawn { card, options };
    }

    fn deal_for_statement<R: RandomSource>(&mut self, rng: &mut R) {
        self.selected = None;
        match self.config.ruleset() {
            Ruleset::Threshold => self.draw_card(rng),
            Ruleset::DualType => {
                let deck = Deck::build(self.progression.statement(), &self.content.fillers, rng);
                self.hand = Hand::Standing(deck);
            }
        }
    }

    fn guard_open(&self) -> Result<(), Rejected> {
        if self.progression.is_terminal() {
            return Err(Rejected::GameOver);
        }
        if self.progression.state() != StatementState::Active {
            return Err(Rejected::Resolving);
        }
        Ok(())
    }

    fn reject(&self, rejected: Rejected) -> Rejected {
        tracing::debug!(%rejected, "action ignored");
        rejected
    }

    fn check_exhaustion(&mut self) {
        if self.action_points == 0 && self.config.ruleset() == Ruleset::DualType {
            if let Some(signal) = self.progression.defeat() {
                self.signals.push(signal);
                self.dispatch_event(DispatchableEvent::Defeat);
            }
        }
    }

    /// Toggles the selection. Picking the selected option again clears it.
    pub fn select_option(&mut self, id: OptionId) -> Result<Snapshot, Rejected> {
        self.guard_open().map_err(|r| self.reject(r))?;
        if !self.options().iter().any(|o| o.id == id) {
            return Err(self.reject(Rejected::UnknownOption));
        }
        self.selected = match self.selected {
            Some(selected) if selected == id => None,
            _ => Some(id),
        };
        self.signals.clear();
        Ok(self.snapshot())
    }

    pub fn confirm_attack<R: RandomSource>(&mut self, rng: &mut R) -> Result<Snapshot, Rejected> {
        self.guard_open().map_err(|r| self.reject(r))?;
        let Some(id) = self.selected else {
            return Err(self.reject(Rejected::NoSelection));
        };
        if self.action_points == 0 {
            return Err(self.reject(Rejected::OutOfActionPoints));
        }
        let option = match &mut self.hand {
            Hand::Drawn { options, .. } => options.iter().find(|o| o.id == id).cloned(),
            Hand::Standing(deck) => deck.play(id, &self.content.fillers, rng),
        };
        let Some(option) = option else {
            self.selected = None;
            return Err(self.reject(Rejected::UnknownOption));
        };

        self.action_points -= 1;
        self.selected = None;
        self.signals.clear();

        let card = self.hand.card().cloned();
        let outcome = resolve_attack(
            &option,
            self.progression.statement_mut(),
            card.as_ref(),
            self.config.mode,
            rng,
        );
        self.boss.absorb(outcome.absorbed);
        self.dispatch_event(DispatchableEvent::AttackResolved(AttackSummary::new(
            &self.progression.statement().id,
            &outcome,
        )));

        if outcome.broke_statement {
            if let Some(signal) = self.progression.begin_break() {
                self.signals.push(signal);
            }
            let statement = self.progression.statement();
            self.dispatch_event(DispatchableEvent::StatementBroken(
                statement.id.clone(),
                statement.break_feedback.clone(),
            ));
        } else {
            if self.config.ruleset() == Ruleset::Threshold {
                self.draw_card(rng);
            }
            self.check_exhaustion();
        }

        self.last_outcome = Some(outcome);
        Ok(self.snapshot())
    }

    /// Dual-type ruleset only: reshuffles the hand into the deck and redeals.
    pub fn refresh_hand<R: RandomSource>(&mut self, rng: &mut R) -> Result<Snapshot, Rejected> {
        self.guard_open().map_err(|r| self.reject(r))?;
        if !matches!(self.hand, Hand::Standing(..)) {
            return Err(self.reject(Rejected::UnsupportedByRuleset));
        }
        if self.action_points == 0 {
            return Err(self.reject(Rejected::OutOfActionPoints));
        }
        if self.refreshes_left == 0 {
            return Err(self.reject(Rejected::NoRefreshesLeft));
        }
        let remaining = match &mut self.hand {
            Hand::Standing(deck) => {
                deck.refresh(&self.content.fillers, rng);
                deck.remaining()
            }
            Hand::Drawn { .. } => 0,
        };

        self.action_points -= 1;
        self.refreshes_left -= 1;
        self.selected = None;
        self.signals.clear();
        tracing::info!(
            refreshes_left = self.refreshes_left,
            action_points = self.action_points,
            "hand refreshed"
        );
        self.dispatch_event(DispatchableEvent::HandRefreshed(remaining));
        self.check_exhaustion();
        Ok(self.snapshot())
    }

    /// Ends the break interval of the current statement and advances.
    pub fn finish_break<R: RandomSource>(&mut self, rng: &mut R) -> Result<Snapshot, Rejected> {
        if self.progression.is_terminal() {
            return Err(self.reject(Rejected::GameOver));
        }
        if self.progression.state() != StatementState::Breaking {
            return Err(self.reject(Rejected::NotBreaking));
        }
        let cleared = self.progression.statement().id.clone();
        self.signals = self.progression.clear_statement(rng);
        self.dispatch_event(DispatchableEvent::Log(format!("{cleared} cleared")));

        for signal in self.signals.clone() {
            match signal {
                Signal::PhaseComplete(index) => {
                    let id = self.content.phases[index].id;
                    self.dispatch_event(DispatchableEvent::PhaseComplete(id))
                }
                Signal::Victory => self.dispatch_event(DispatchableEvent::Victory),
                _ => {}
            }
        }

        if !self.progression.is_terminal() {
            self.deal_for_statement(rng);
            self.check_exhaustion();
        }
        Ok(self.snapshot())
    }

    pub fn snapshot(&self) -> Snapshot {
        let statement = self.progression.statement();
        let breaking = self.progression.state() == StatementState::Breaking;
        Snapshot {
            ruleset: self.config.ruleset(),
            progress: self.progression.progress(),
            statement_state: self.progression.state(),
            phase_index: self.progression.phase_index(),
            phase_title: self.progression.phase().title.clone(),
            statement_index: self.progression.statement_index(),
            statement_id: statement.id.clone(),
            statement_text: statement.text.clone(),
            statement_hp: statement.health,
            weakness: (!self.config.hide_weakness).then(|| statement.weakness.clone()),
            boss_hp: self.boss,
            action_points: self.action_points,
            refreshes_left: self.refreshes_left,
            card: self.hand.card().cloned(),
            options: self.hand.options().to_vec(),
            selected: self.selected,
            last_outcome: self.last_outcome.clone(),
            break_feedback: breaking.then(|| statement.break_feedback.clone()),
            signals: self.signals.clone(),
            stalled: self.is_stalled(),
        }
    }

    pub fn progress(&self) -> Progress {
        self.progression.progress()
    }
}
