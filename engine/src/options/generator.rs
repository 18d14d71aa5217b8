use std::collections::HashSet;

use indexmap::IndexMap;
use models::{CardType, Interaction, PlayableCard, Statement};

use crate::{DialogueOption, FALLBACK_LINE, OPTION_COUNT, RandomSource, choose};

pub type FillerPool = IndexMap<CardType, Vec<String>>;

/// A narratively useless line: the type is drawn from the whole type universe
/// first, then a line from that type's pool.
pub fn random_filler<R: RandomSource>(fillers: &FillerPool, rng: &mut R) -> DialogueOption {
    let card_type = CardType::ALL[rng.pick(CardType::ALL.len())];
    let pool = fillers.get(&card_type).map(Vec::as_slice).unwrap_or(&[]);
    let text = choose(rng, pool)
        .cloned()
        .unwrap_or_else(|| FALLBACK_LINE.to_string());
    DialogueOption::filler(text, card_type)
}

/// Expands `card` into exactly [`OPTION_COUNT`] options against `statement`.
///
/// Each type on the card contributes one effective line that has not been
/// used yet in this pass, or a filler if that type has nothing left. Short
/// cards are padded with filler and the result is shuffled.
pub fn generate_options<R: RandomSource>(
    card: &PlayableCard,
    statement: &Statement,
    fillers: &FillerPool,
    rng: &mut R,
) -> Vec<DialogueOption> {
    let mut options: Vec<DialogueOption> = Vec::with_capacity(*OPTION_COUNT);
    let mut used: HashSet<&str> = HashSet::new();

    for card_type in &card.types {
        let available: Vec<&Interaction> = statement
            .lines_for(*card_type)
            .iter()
            .filter(|i| !used.contains(i.player.as_str()))
            .collect();

        match choose(rng, &available) {
            Some(&interaction) => {
                used.insert(interaction.player.as_str());
                options.push(DialogueOption::effective(
                    interaction.player.clone(),
                    *card_type,
                    &statement.weakness,
                ));
            }
            None => options.push(random_filler(fillers, rng)),
        }
    }

    options.truncate(*OPTION_COUNT);
    while options.len() < *OPTION_COUNT {
        options.push(random_filler(fillers, rng));
    }

    rng.shuffle(&mut options);
    tracing::debug!(
        card = %card.id,
        statement = %statement.id,
        effective = options.iter().filter(|o| o.is_effective).count(),
        "generated options"
    );
    options
}
