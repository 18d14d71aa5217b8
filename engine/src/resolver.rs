use models::{PlayableCard, Statement, Weakness};
use serde::Deserialize;

use crate::{
    BURST_PER_HIT, CRIT_MULTIPLIER, DialogueOption, FALLBACK_LINE, GOOD_DAMAGE, PERFECT_DAMAGE,
    RandomSource, roll_dice,
};

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Ruleset {
    /// A card is drawn per turn, rolls one die per type and every hit on the
    /// target point adds burst damage.
    #[default]
    Threshold,
    /// A standing hand drawn from a per-statement deck, a single die and a
    /// multiplier on a hit.
    DualType,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CritPolicy {
    /// Dice only count when the option's type is one the statement is weak to.
    Strict,
    /// Dice count for every effective option.
    #[default]
    Permissive,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackMode {
    #[serde(default)]
    pub ruleset: Ruleset,
    #[serde(default)]
    pub crit_policy: CritPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageTier {
    Miss,
    Good,
    Perfect,
    PerfectCrit,
    LuckyCrit,
}

impl DamageTier {
    pub fn label(&self) -> &'static str {
        match self {
            DamageTier::Miss => "MISS",
            DamageTier::Good => "GOOD",
            DamageTier::Perfect => "PERFECT",
            DamageTier::PerfectCrit => "PERFECT CRIT!",
            DamageTier::LuckyCrit => "LUCKY CRIT!",
        }
    }

    pub fn color_hint(&self) -> &'static str {
        match self {
            DamageTier::Miss => "#aaaaaa",
            DamageTier::Good => "#00ffff",
            DamageTier::Perfect => "#39ff14",
            DamageTier::PerfectCrit => "#ffcc00",
            DamageTier::LuckyCrit => "#ff8800",
        }
    }
}

impl std::fmt::Display for DamageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assessment {
    pub base_damage: u32,
    pub critical_hits: u8,
    pub damage: u32,
    pub type_match: bool,
    pub critical_triggered: bool,
    /// Enough matching dice on a matching type to satisfy the weakness count.
    pub meets_threshold: bool,
    pub tier: DamageTier,
}

pub fn dice_for(ruleset: Ruleset, card: Option<&PlayableCard>) -> usize {
    match ruleset {
        Ruleset::Threshold => card.map(|c| usize::from(c.dice_count)).unwrap_or(1).max(1),
        Ruleset::DualType => 1,
    }
}

/// First matching rule wins.
pub fn classify(damage: u32, type_match: bool, critical: bool, policy: CritPolicy) -> DamageTier {
    if damage == 0 {
        DamageTier::Miss
    } else if type_match && critical {
        DamageTier::PerfectCrit
    } else if !type_match && critical && policy == CritPolicy::Permissive {
        DamageTier::LuckyCrit
    } else if type_match {
        DamageTier::Perfect
    } else {
        DamageTier::Good
    }
}

/// Damage and classification of `option` against `weakness` for a given set
/// of rolls. Filler never deals damage and never crits.
pub fn assess(
    option: &DialogueOption,
    weakness: &Weakness,
    rolls: &[u8],
    mode: AttackMode,
) -> Assessment {
    let type_match = option.is_effective && weakness.is_weak_to(option.card_type);
    let base_damage = match (option.is_effective, type_match) {
        (false, _) => 0,
        (true, true) => *PERFECT_DAMAGE,
        (true, false) => *GOOD_DAMAGE,
    };

    let dice_evaluated = option.is_effective
        && match mode.crit_policy {
            CritPolicy::Strict => type_match,
            CritPolicy::Permissive => true,
        };
    let critical_hits = if dice_evaluated {
        rolls
            .iter()
            .filter(|r| **r == weakness.target_point())
            .count()
            .min(u8::MAX as usize) as u8
    } else {
        0
    };
    let critical_triggered = critical_hits > 0;

    let damage = match mode.ruleset {
        Ruleset::Threshold => base_damage + u32::from(critical_hits) * *BURST_PER_HIT,
        Ruleset::DualType if critical_triggered => {
            (f64::from(base_damage) * *CRIT_MULTIPLIER).floor() as u32
        }
        Ruleset::DualType => base_damage,
    };

    Assessment {
        base_damage,
        critical_hits,
        damage,
        type_match,
        critical_triggered,
        meets_threshold: type_match && critical_hits >= weakness.required_hits(),
        tier: classify(damage, type_match, critical_triggered, mode.crit_policy),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttackOutcome {
    pub option: DialogueOption,
    pub rolls: Vec<u8>,
    pub assessment: Assessment,
    /// Damage the statement actually lost; overkill is discarded.
    pub absorbed: u32,
    pub boss_reply: String,
    pub broke_statement: bool,
}

impl AttackOutcome {
    pub fn damage(&self) -> u32 {
        self.assessment.damage
    }

    pub fn tier(&self) -> DamageTier {
        self.assessment.tier
    }

    pub fn label(&self) -> &'static str {
        self.assessment.tier.label()
    }

    pub fn color_hint(&self) -> &'static str {
        self.assessment.tier.color_hint()
    }

    pub fn critical_triggered(&self) -> bool {
        self.assessment.critical_triggered
    }
}

impl std::fmt::Display for AttackOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rolls = self
            .rolls
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        write!(
            f,
            "{} -{} (absorbed {}) 🎲[{rolls}]",
            self.label(),
            self.damage(),
            self.absorbed
        )
    }
}

pub fn boss_reply(option: &DialogueOption, statement: &Statement) -> String {
    if !option.is_effective {
        return FALLBACK_LINE.to_string();
    }
    statement
        .reply_to(option.card_type, &option.text)
        .unwrap_or(*FALLBACK_LINE)
        .to_string()
}

/// Rolls the dice for one attack, scores it and applies the clamped damage to
/// `statement`. A statement that is already broken takes nothing.
pub fn resolve_attack<R: RandomSource>(
    option: &DialogueOption,
    statement: &mut Statement,
    card: Option<&PlayableCard>,
    mode: AttackMode,
    rng: &mut R,
) -> AttackOutcome {
    let rolls = roll_dice(rng, dice_for(mode.ruleset, card));
    let assessment = assess(option, &statement.weakness, &rolls, mode);
    let was_broken = statement.is_broken();
    let absorbed = if was_broken {
        0
    } else {
        statement.absorb(assessment.damage)
    };

    tracing::info!(
        statement = %statement.id,
        option = %option.id,
        ?rolls,
        damage = assessment.damage,
        absorbed,
        tier = %assessment.tier,
        hp = statement.health.current(),
        "attack resolved"
    );

    AttackOutcome {
        option: option.clone(),
        boss_reply: boss_reply(option, statement),
        broke_statement: !was_broken && statement.is_broken(),
        rolls,
        assessment,
        absorbed,
    }
}
