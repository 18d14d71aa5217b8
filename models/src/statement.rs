use indexmap::IndexMap;
use serde::Deserialize;

use crate::{CardType, Health, Weakness};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Interaction {
    pub player: String,
    pub boss: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    pub id: String,
    pub text: String,
    pub health: Health,
    pub weakness: Weakness,
    pub break_feedback: String,
    pub interactions: IndexMap<CardType, Vec<Interaction>>,
}

impl Statement {
    pub fn lines_for(&self, card_type: CardType) -> &[Interaction] {
        self.interactions
            .get(&card_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn reply_to(&self, card_type: CardType, player_line: &str) -> Option<&str> {
        self.lines_for(card_type)
            .iter()
            .find(|i| i.player == player_line)
            .map(|i| i.boss.as_str())
    }

    pub fn is_broken(&self) -> bool {
        self.health.is_depleted()
    }

    pub fn absorb(&mut self, damage: u32) -> u32 {
        self.health.absorb(damage)
    }
}
