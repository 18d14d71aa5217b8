use indexmap::IndexMap;
use serde::Deserialize;

use crate::{
    CardType, Character, Health, Interaction, MAX_CARD_TYPES, MAX_TARGET_POINT, MIN_TARGET_POINT,
    Phase, PlayableCard, Rarity, Statement, Weakness,
};

#[derive(Clone, Debug, Deserialize)]
pub struct ContentTemplate {
    #[serde(default)]
    pub fillers: IndexMap<String, Vec<String>>,
    #[serde(default)]
    pub cards: Vec<CardTemplate>,
    #[serde(default)]
    pub phases: Vec<PhaseTemplate>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CardTemplate {
    pub id: String,
    pub rarity: Rarity,
    pub types: Vec<String>,
    pub dice_count: u8,
    pub character: Character,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub icon: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct PhaseTemplate {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub statements: Vec<StatementTemplate>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StatementTemplate {
    pub id: String,
    pub text: String,
    pub hp: Option<u32>,
    pub max_hp: u32,
    pub weakness: WeaknessTemplate,
    pub break_feedback: String,
    #[serde(default)]
    pub interactions: IndexMap<String, Vec<Interaction>>,
}

#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "model", rename_all = "snake_case")]
pub enum WeaknessTemplate {
    Threshold {
        #[serde(rename = "type")]
        card_type: String,
        count: u8,
        target_point: u8,
    },
    Coverage {
        types: Vec<String>,
        target_point: u8,
    },
}

fn check_target_point(target_point: u8) -> anyhow::Result<u8> {
    if !(MIN_TARGET_POINT..=MAX_TARGET_POINT).contains(&target_point) {
        anyhow::bail!(
            "target point {target_point} outside of {MIN_TARGET_POINT}..={MAX_TARGET_POINT}"
        )
    }
    Ok(target_point)
}

fn parse_types(types: &[String]) -> anyhow::Result<Vec<CardType>> {
    types
        .iter()
        .map(|t| CardType::try_from(t.as_str()))
        .collect()
}

impl TryFrom<&WeaknessTemplate> for Weakness {
    type Error = anyhow::Error;

    fn try_from(template: &WeaknessTemplate) -> Result<Self, Self::Error> {
        match template {
            WeaknessTemplate::Threshold {
                card_type,
                count,
                target_point,
            } => {
                if *count == 0 {
                    anyhow::bail!("threshold weakness needs a count of at least 1")
                }
                Ok(Weakness::Threshold {
                    card_type: CardType::try_from(card_type.as_str())?,
                    count: *count,
                    target_point: check_target_point(*target_point)?,
                })
            }
            WeaknessTemplate::Coverage {
                types,
                target_point,
            } => {
                if types.is_empty() {
                    anyhow::bail!("coverage weakness needs at least one type")
                }
                let mut types = parse_types(types)?;
                types.dedup();
                Ok(Weakness::Coverage {
                    types,
                    target_point: check_target_point(*target_point)?,
                })
            }
        }
    }
}

impl TryFrom<&StatementTemplate> for Statement {
    type Error = anyhow::Error;

    fn try_from(template: &StatementTemplate) -> Result<Self, Self::Error> {
        let hp = template.hp.unwrap_or(template.max_hp);
        if template.max_hp == 0 {
            anyhow::bail!("statement {} has no max hp", template.id)
        }
        if hp == 0 {
            anyhow::bail!("statement {} starts already broken", template.id)
        }
        if hp > template.max_hp {
            anyhow::bail!(
                "statement {} hp {hp} exceeds max hp {}",
                template.id,
                template.max_hp
            )
        }
        let weakness = Weakness::try_from(&template.weakness)
            .map_err(|error| anyhow::anyhow!("statement {}: {error}", template.id))?;
        let mut interactions: IndexMap<CardType, Vec<Interaction>> = IndexMap::new();
        for (card_type, lines) in &template.interactions {
            interactions
                .entry(CardType::try_from(card_type.as_str())?)
                .or_default()
                .extend(lines.iter().cloned());
        }
        Ok(Statement {
            id: template.id.clone(),
            text: template.text.clone(),
            health: Health(hp, template.max_hp),
            weakness,
            break_feedback: template.break_feedback.clone(),
            interactions,
        })
    }
}

impl TryFrom<&PhaseTemplate> for Phase {
    type Error = anyhow::Error;

    fn try_from(template: &PhaseTemplate) -> Result<Self, Self::Error> {
        if template.statements.is_empty() {
            anyhow::bail!("phase {} has no statements", template.id)
        }
        Ok(Phase {
            id: template.id,
            title: template.title.clone(),
            description: template.description.clone(),
            statements: template
                .statements
                .iter()
                .map(Statement::try_from)
                .collect::<anyhow::Result<Vec<Statement>>>()?,
        })
    }
}

impl TryFrom<&CardTemplate> for PlayableCard {
    type Error = anyhow::Error;

    fn try_from(template: &CardTemplate) -> Result<Self, Self::Error> {
        let types = parse_types(&template.types)
            .map_err(|error| anyhow::anyhow!("card {}: {error}", template.id))?;
        if types.is_empty() {
            anyhow::bail!("card {} has no types", template.id)
        }
        if types.len() > MAX_CARD_TYPES {
            anyhow::bail!(
                "card {} has {} types, at most {MAX_CARD_TYPES} fit on a card",
                template.id,
                types.len()
            )
        }
        if usize::from(template.dice_count) != types.len() {
            anyhow::bail!(
                "card {} rolls {} dice but has {} types",
                template.id,
                template.dice_count,
                types.len()
            )
        }
        Ok(PlayableCard {
            id: template.id.clone(),
            rarity: template.rarity,
            types,
            dice_count: template.dice_count,
            character: template.character,
            label: template.label.clone(),
            icon: template.icon.clone(),
        })
    }
}
