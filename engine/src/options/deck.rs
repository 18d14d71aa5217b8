use std::collections::HashSet;

use models::{CardType, Statement};

use crate::{
    DECK_SIZE, DialogueOption, FillerPool, HAND_SIZE, OptionId, RandomSource, random_filler,
};

/// Standing deck used by the dual-type ruleset: one deck per statement, of
/// which the player holds a fixed-size hand.
#[derive(Clone, Debug)]
pub struct Deck {
    draw_pile: Vec<DialogueOption>,
    hand: Vec<DialogueOption>,
}

impl Deck {
    /// Lines the statement is weak to come first, then its other lines, then
    /// generic filler up to [`DECK_SIZE`]. Texts are unique within the deck.
    pub fn build<R: RandomSource>(statement: &Statement, fillers: &FillerPool, rng: &mut R) -> Self {
        let mut seen: HashSet<String> = HashSet::new();
        let mut cards: Vec<DialogueOption> = Vec::with_capacity(*DECK_SIZE);

        for weak in [true, false] {
            for (card_type, lines) in &statement.interactions {
                if statement.weakness.is_weak_to(*card_type) != weak {
                    continue;
                }
                for line in lines {
                    if seen.insert(line.player.clone()) {
                        cards.push(DialogueOption::effective(
                            line.player.clone(),
                            *card_type,
                            &statement.weakness,
                        ));
                    }
                }
            }
        }

        let mut pool: Vec<(CardType, &String)> = fillers
            .iter()
            .flat_map(|(card_type, lines)| lines.iter().map(move |l| (*card_type, l)))
            .collect();
        rng.shuffle(&mut pool);
        for (card_type, line) in pool {
            if cards.len() >= *DECK_SIZE {
                break;
            }
            if seen.insert(line.clone()) {
                cards.push(DialogueOption::filler(line.clone(), card_type));
            }
        }

        rng.shuffle(&mut cards);
        tracing::debug!(statement = %statement.id, size = cards.len(), "built deck");

        let mut deck = Self {
            draw_pile: cards,
            hand: Vec::with_capacity(*HAND_SIZE),
        };
        deck.deal(fillers, rng);
        deck
    }

    pub fn hand(&self) -> &[DialogueOption] {
        &self.hand
    }

    pub fn draw_pile(&self) -> &[DialogueOption] {
        &self.draw_pile
    }

    pub fn remaining(&self) -> usize {
        self.draw_pile.len()
    }

    pub fn find(&self, id: OptionId) -> Option<&DialogueOption> {
        self.hand.iter().find(|o| o.id == id)
    }

    /// Tops the hand up to [`HAND_SIZE`], falling back to fresh filler once the
    /// draw pile is empty.
    pub fn deal<R: RandomSource>(&mut self, fillers: &FillerPool, rng: &mut R) {
        while self.hand.len() < *HAND_SIZE {
            match self.draw_pile.pop() {
                Some(option) => self.hand.push(option),
                None => self.hand.push(random_filler(fillers, rng)),
            }
        }
    }

    /// Removes the option from the hand and draws its replacement.
    pub fn play<R: RandomSource>(
        &mut self,
        id: OptionId,
        fillers: &FillerPool,
        rng: &mut R,
    ) -> Option<DialogueOption> {
        let position = self.hand.iter().position(|o| o.id == id)?;
        let option = self.hand.remove(position);
        self.deal(fillers, rng);
        Some(option)
    }

    /// Shuffles the hand back into the draw pile and deals a new hand.
    pub fn refresh<R: RandomSource>(&mut self, fillers: &FillerPool, rng: &mut R) {
        self.draw_pile.append(&mut self.hand);
        rng.shuffle(&mut self.draw_pile);
        self.deal(fillers, rng);
    }
}
