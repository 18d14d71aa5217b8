use crate::CardType;

pub const MIN_TARGET_POINT: u8 = 1;
pub const MAX_TARGET_POINT: u8 = 6;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Weakness {
    /// A single weak type. `count` is how many dice have to land on
    /// `target_point` for a full break.
    Threshold {
        card_type: CardType,
        count: u8,
        target_point: u8,
    },
    /// Every listed type is equally effective.
    Coverage { types: Vec<CardType>, target_point: u8 },
}

impl Weakness {
    pub fn is_weak_to(&self, card_type: CardType) -> bool {
        match self {
            Weakness::Threshold { card_type: t, .. } => *t == card_type,
            Weakness::Coverage { types, .. } => types.contains(&card_type),
        }
    }

    pub fn target_point(&self) -> u8 {
        match self {
            Weakness::Threshold { target_point, .. } | Weakness::Coverage { target_point, .. } => {
                *target_point
            }
        }
    }

    pub fn set_target_point(&mut self, face: u8) {
        match self {
            Weakness::Threshold { target_point, .. } | Weakness::Coverage { target_point, .. } => {
                *target_point = face
            }
        }
    }

    pub fn required_hits(&self) -> u8 {
        match self {
            Weakness::Threshold { count, .. } => *count,
            Weakness::Coverage { .. } => 1,
        }
    }

    pub fn weak_types(&self) -> Vec<CardType> {
        match self {
            Weakness::Threshold { card_type, .. } => vec![*card_type],
            Weakness::Coverage { types, .. } => types.clone(),
        }
    }
}

impl std::fmt::Display for Weakness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Weakness::Threshold {
                card_type,
                count,
                target_point,
            } => write!(f, "{card_type} x{count} @ {target_point}"),
            Weakness::Coverage {
                types,
                target_point,
            } => {
                let types = types
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<String>>()
                    .join("/");
                write!(f, "{types} @ {target_point}")
            }
        }
    }
}
