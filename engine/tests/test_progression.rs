mod aux;

use std::sync::Arc;

use aux::{ScriptedRandom, duel};
use engine::{Progress, Progression, Signal, StatementState};
use indexmap::IndexMap;
use models::Content;

#[test]
fn test_walks_statements_then_phases() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = ScriptedRandom::new();
    let mut progression = Progression::new(duel(), false, &mut rng)?;
    assert_eq!(progression.remaining_hp(), 80);
    assert_eq!(progression.begin_break(), None, "alibi is not broken yet");
    assert!(progression.clear_statement(&mut rng).is_empty());

    progression.statement_mut().absorb(40);
    assert_eq!(progression.remaining_hp(), 40);
    assert_eq!(
        progression.begin_break(),
        Some(Signal::StatementBroken {
            phase: 0,
            statement: 0
        })
    );
    assert_eq!(progression.state(), StatementState::Breaking);
    assert_eq!(progression.begin_break(), None);
    assert!(!progression.is_last_statement());

    let signals = progression.clear_statement(&mut rng);
    assert_eq!(
        signals,
        [
            Signal::StatementCleared {
                phase: 0,
                statement: 0
            },
            Signal::PhaseComplete(0)
        ]
    );
    assert_eq!(
        progression.progress(),
        Progress::InProgress {
            phase: 1,
            statement: 0
        }
    );
    assert_eq!(progression.state(), StatementState::Active);
    assert_eq!(progression.phase().title, "Motive");
    assert!(progression.is_last_statement());

    progression.statement_mut().absorb(100);
    progression.begin_break();
    let signals = progression.clear_statement(&mut rng);
    assert_eq!(signals.last(), Some(&Signal::Victory));
    assert_eq!(progression.progress(), Progress::Victory);
    assert_eq!(progression.remaining_hp(), 0);
    assert_eq!(progression.defeat(), None, "victory is final");
    Ok(())
}

#[test]
fn test_damage_never_reaches_the_content() -> Result<(), Box<dyn std::error::Error>> {
    let content = duel();
    let mut progression = Progression::new(Arc::clone(&content), false, &mut ScriptedRandom::new())?;
    progression.statement_mut().absorb(25);
    assert_eq!(progression.statement().health.current(), 15);
    assert_eq!(content.phases[0].statements[0].health.current(), 40);
    Ok(())
}

#[test]
fn test_target_points_reroll_per_phase() -> Result<(), Box<dyn std::error::Error>> {
    let content = duel();
    let mut rng = ScriptedRandom::new().with_rolls(&[6, 3]);
    let mut progression = Progression::new(Arc::clone(&content), true, &mut rng)?;
    assert_eq!(progression.statement().weakness.target_point(), 6);
    assert_eq!(content.phases[0].statements[0].weakness.target_point(), 4);

    progression.statement_mut().absorb(40);
    progression.begin_break();
    progression.clear_statement(&mut rng);
    assert_eq!(progression.statement().weakness.target_point(), 3);
    Ok(())
}

#[test]
fn test_defeat_is_terminal() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = ScriptedRandom::new();
    let mut progression = Progression::new(duel(), false, &mut rng)?;
    assert_eq!(progression.defeat(), Some(Signal::Defeat));
    assert!(progression.is_terminal());
    assert_eq!(progression.defeat(), None);

    progression.statement_mut().absorb(40);
    assert_eq!(progression.begin_break(), None);
    assert!(progression.clear_statement(&mut rng).is_empty());
    assert_eq!(progression.progress(), Progress::Defeat);
    Ok(())
}

#[test]
fn test_content_without_phases_is_rejected() {
    let content = Content {
        fillers: IndexMap::new(),
        cards: vec![],
        phases: vec![],
    };
    assert!(Progression::new(Arc::new(content), false, &mut ScriptedRandom::new()).is_err());
}
