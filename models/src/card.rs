use serde::Deserialize;

use crate::CardType;

/// One option per type is offered, so a card never carries more types than that.
pub const MAX_CARD_TYPES: usize = 3;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    R,
    SR,
    SSR,
}

impl Rarity {
    pub fn dice(&self) -> u8 {
        match self {
            Rarity::R => 1,
            Rarity::SR => 2,
            Rarity::SSR => 3,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Rarity::R => "混乱思维",
            Rarity::SR => "清晰思维",
            Rarity::SSR => "绝对灵感",
        }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Character {
    PurpleFox,
    GreenFace,
    RedMan,
}

impl Character {
    pub fn name(&self) -> &'static str {
        match self {
            Character::PurpleFox => "紫狐狸",
            Character::GreenFace => "绿双面人",
            Character::RedMan => "红发男",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayableCard {
    pub id: String,
    pub rarity: Rarity,
    pub types: Vec<CardType>,
    pub dice_count: u8,
    pub character: Character,
    pub label: String,
    pub icon: String,
}

impl std::fmt::Display for PlayableCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let types = self
            .types
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<String>>()
            .join(", ");
        write!(
            f,
            "{} {} [{:?}] ({types}) 🎲x{}",
            self.icon, self.label, self.rarity, self.dice_count
        )
    }
}
