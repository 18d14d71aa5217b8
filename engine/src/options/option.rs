use models::{CardType, Weakness};

use crate::OptionId;

/// How well a line answers the statement it was generated for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum LineTier {
    Perfect,
    Normal,
    Bad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueOption {
    pub id: OptionId,
    pub text: String,
    pub is_effective: bool,
    pub card_type: CardType,
    pub tier: LineTier,
}

impl DialogueOption {
    pub fn effective(text: String, card_type: CardType, weakness: &Weakness) -> Self {
        let tier = if weakness.is_weak_to(card_type) {
            LineTier::Perfect
        } else {
            LineTier::Normal
        };
        Self {
            id: OptionId::fresh(),
            text,
            is_effective: true,
            card_type,
            tier,
        }
    }

    pub fn filler(text: String, card_type: CardType) -> Self {
        Self {
            id: OptionId::fresh(),
            text,
            is_effective: false,
            card_type,
            tier: LineTier::Bad,
        }
    }
}

impl std::fmt::Display for DialogueOption {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.card_type.icon(), self.text)
    }
}
