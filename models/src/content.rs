use std::collections::HashSet;

use indexmap::IndexMap;

use crate::{CardType, ContentTemplate, Phase, PlayableCard};

/// Immutable story content: the filler pool, the drawable cards and the
/// phases in the order they are played.
#[derive(Clone, Debug, PartialEq)]
pub struct Content {
    pub fillers: IndexMap<CardType, Vec<String>>,
    pub cards: Vec<PlayableCard>,
    pub phases: Vec<Phase>,
}

impl Content {
    pub fn from_toml_str(s: &str) -> anyhow::Result<Self> {
        let template = toml::from_str::<ContentTemplate>(s)
            .map_err(|error| anyhow::anyhow!("unable to parse content: {error}"))?;
        Content::try_from(template)
    }

    pub fn fillers_for(&self, card_type: CardType) -> &[String] {
        self.fillers
            .get(&card_type)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn total_max_hp(&self) -> u32 {
        self.phases.iter().map(Phase::max_hp).sum()
    }

    /// Authored HP left across every phase; below `total_max_hp` when some
    /// statements start damaged.
    pub fn remaining_hp(&self) -> u32 {
        self.phases.iter().map(Phase::remaining_hp).sum()
    }

    pub fn statement_count(&self) -> usize {
        self.phases.iter().map(|p| p.statements.len()).sum()
    }
}

impl TryFrom<ContentTemplate> for Content {
    type Error = anyhow::Error;

    fn try_from(template: ContentTemplate) -> Result<Self, Self::Error> {
        if template.phases.is_empty() {
            anyhow::bail!("content has no phases")
        }
        if template.cards.is_empty() {
            anyhow::bail!("content has no cards")
        }

        let mut fillers: IndexMap<CardType, Vec<String>> = IndexMap::new();
        for (card_type, lines) in &template.fillers {
            fillers
                .entry(CardType::try_from(card_type.as_str())?)
                .or_default()
                .extend(lines.iter().cloned());
        }

        let cards = template
            .cards
            .iter()
            .map(PlayableCard::try_from)
            .collect::<anyhow::Result<Vec<PlayableCard>>>()?;

        let phases = template
            .phases
            .iter()
            .map(Phase::try_from)
            .collect::<anyhow::Result<Vec<Phase>>>()?;

        let mut seen: HashSet<&str> = HashSet::new();
        for statement in phases.iter().flat_map(|p| p.statements.iter()) {
            if !seen.insert(statement.id.as_str()) {
                anyhow::bail!("duplicate statement id {}", statement.id)
            }
        }

        Ok(Self {
            fillers,
            cards,
            phases,
        })
    }
}
