use std::sync::Arc;

use engine::{AttackMode, CritPolicy, DialogueOption, Ruleset, SessionConfig};
use models::{CardType, Character, Content, PlayableCard, Rarity, Statement};

const DUEL_TOML: &str = include_str!("../content/duel.toml");

lazy_static::lazy_static! {
    pub static ref DUEL: Arc<Content> =
        Arc::new(Content::from_toml_str(DUEL_TOML).expect("duel content should parse"));
}

#[allow(unused)]
pub fn duel() -> Arc<Content> {
    Arc::clone(&DUEL)
}

/// The duel with both statements authored below max hp: alibi at 10/40, motive at 25/40.
#[allow(unused)]
pub fn wounded_duel() -> Arc<Content> {
    let toml = DUEL_TOML
        .replace(
            "max_hp = 40\nbreak_feedback = \"Fine, I went out.\"",
            "hp = 10\nmax_hp = 40\nbreak_feedback = \"Fine, I went out.\"",
        )
        .replace(
            "max_hp = 40\nbreak_feedback = \"He owed me.\"",
            "hp = 25\nmax_hp = 40\nbreak_feedback = \"He owed me.\"",
        );
    Arc::new(Content::from_toml_str(&toml).expect("wounded duel should parse"))
}

/// Threat x1 @ 4, 40 hp.
#[allow(unused)]
pub fn alibi() -> Statement {
    DUEL.phases[0].statements[0].clone()
}

/// Coverage Logic/Empathy @ 2, 40 hp.
#[allow(unused)]
pub fn motive() -> Statement {
    DUEL.phases[1].statements[0].clone()
}

#[allow(unused)]
pub fn card(types: &[CardType]) -> PlayableCard {
    let rarity = match types.len() {
        1 => Rarity::R,
        2 => Rarity::SR,
        _ => Rarity::SSR,
    };
    PlayableCard {
        id: format!("test_{}", types.len()),
        rarity,
        types: types.to_vec(),
        dice_count: types.len() as u8,
        character: Character::RedMan,
        label: "test".to_string(),
        icon: "🃏".to_string(),
    }
}

#[allow(unused)]
pub fn line(statement: &Statement, card_type: CardType, index: usize) -> DialogueOption {
    let text = statement.lines_for(card_type)[index].player.clone();
    DialogueOption::effective(text, card_type, &statement.weakness)
}

#[allow(unused)]
pub fn mode(ruleset: Ruleset, crit_policy: CritPolicy) -> AttackMode {
    AttackMode {
        ruleset,
        crit_policy,
    }
}

#[allow(unused)]
pub fn config(ruleset: Ruleset, crit_policy: CritPolicy) -> SessionConfig {
    SessionConfig {
        mode: mode(ruleset, crit_policy),
        ..SessionConfig::default()
    }
}
