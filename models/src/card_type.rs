#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CardType {
    Threat,
    Mockery,
    Questioning,
    Logic,
    Empathy,
    Deceit,
}

impl CardType {
    pub const ALL: [CardType; 6] = [
        CardType::Threat,
        CardType::Mockery,
        CardType::Questioning,
        CardType::Logic,
        CardType::Empathy,
        CardType::Deceit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardType::Threat => "威胁",
            CardType::Mockery => "嘲讽",
            CardType::Questioning => "质疑",
            CardType::Logic => "逻辑",
            CardType::Empathy => "共情",
            CardType::Deceit => "追问",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            CardType::Threat => "⚔️",
            CardType::Mockery => "🤡",
            CardType::Questioning => "❓",
            CardType::Logic => "🧠",
            CardType::Empathy => "❤️",
            CardType::Deceit => "🎭",
        }
    }
}

impl TryFrom<&str> for CardType {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "threat" => Ok(CardType::Threat),
            "mockery" => Ok(CardType::Mockery),
            "questioning" => Ok(CardType::Questioning),
            "logic" => Ok(CardType::Logic),
            "empathy" => Ok(CardType::Empathy),
            "deceit" => Ok(CardType::Deceit),
            card_type => anyhow::bail!("invalid card type {card_type}"),
        }
    }
}

impl std::fmt::Display for CardType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}
