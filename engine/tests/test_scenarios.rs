mod aux;

use aux::{ScriptedRandom, alibi, card, config, duel, line, mode};
use engine::{
    CritPolicy, DamageTier, DialogueOption, Progress, Rejected, Ruleset, Session, Signal,
    StatementState, resolve_attack,
};
use models::CardType;

#[test]
fn matching_type_on_target_breaks_the_statement() {
    let mut statement = alibi();
    let option = line(&statement, CardType::Threat, 0);
    let mut rng = ScriptedRandom::new().with_rolls(&[4]);

    let outcome = resolve_attack(
        &option,
        &mut statement,
        Some(&card(&[CardType::Threat])),
        mode(Ruleset::Threshold, CritPolicy::Strict),
        &mut rng,
    );

    assert_eq!(outcome.damage(), 60);
    assert_eq!(outcome.absorbed, 40);
    assert_eq!(outcome.tier(), DamageTier::PerfectCrit);
    assert!(outcome.critical_triggered());
    assert!(outcome.broke_statement);
    assert_eq!(statement.health.current(), 0);
    assert_eq!(outcome.boss_reply, "I am!");
}

#[test]
fn matching_type_on_target_advances_the_session() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = ScriptedRandom::new().with_rolls(&[4]);
    let mut session = Session::new(duel(), config(Ruleset::Threshold, CritPolicy::Strict), &mut rng)?;
    let option = session.options()[0].clone();
    assert!(option.is_effective);
    assert_eq!(option.card_type, CardType::Threat);

    session.select_option(option.id)?;
    let snapshot = session.confirm_attack(&mut rng)?;
    assert_eq!(snapshot.statement_state, StatementState::Breaking);
    assert_eq!(snapshot.break_feedback.as_deref(), Some("Fine, I went out."));
    assert_eq!(snapshot.boss_hp.current(), 40);
    assert!(snapshot.signals.contains(&Signal::StatementBroken {
        phase: 0,
        statement: 0
    }));

    let snapshot = session.finish_break(&mut rng)?;
    assert_eq!(
        snapshot.progress,
        Progress::InProgress {
            phase: 1,
            statement: 0
        }
    );
    assert!(snapshot.signals.contains(&Signal::PhaseComplete(0)));
    assert_eq!(snapshot.statement_id, "motive");
    assert_eq!(snapshot.statement_hp.current(), 40);
    Ok(())
}

#[test]
fn off_type_on_target_is_only_good_when_strict() {
    let mut statement = alibi();
    let option = line(&statement, CardType::Logic, 0);
    let mut rng = ScriptedRandom::new().with_rolls(&[4]);

    let outcome = resolve_attack(
        &option,
        &mut statement,
        Some(&card(&[CardType::Logic])),
        mode(Ruleset::Threshold, CritPolicy::Strict),
        &mut rng,
    );

    assert_eq!(outcome.damage(), 10);
    assert_eq!(outcome.tier(), DamageTier::Good);
    assert_eq!(outcome.label(), "GOOD");
    assert!(!outcome.critical_triggered());
    assert!(!outcome.broke_statement);
    assert_eq!(statement.health.current(), 30);
}

#[test]
fn off_type_on_target_is_a_lucky_crit_when_permissive() {
    let mut statement = alibi();
    let option = line(&statement, CardType::Logic, 0);
    let mut rng = ScriptedRandom::new().with_rolls(&[4]);

    let outcome = resolve_attack(
        &option,
        &mut statement,
        Some(&card(&[CardType::Logic])),
        mode(Ruleset::Threshold, CritPolicy::Permissive),
        &mut rng,
    );

    assert_eq!(outcome.damage(), 50);
    assert_eq!(outcome.absorbed, 40);
    assert_eq!(outcome.tier(), DamageTier::LuckyCrit);
    assert_eq!(outcome.label(), "LUCKY CRIT!");
    assert_eq!(statement.health.current(), 0);
}

#[test]
fn filler_misses_but_costs_an_action_point() -> Result<(), Box<dyn std::error::Error>> {
    let mut statement = alibi();
    let filler = DialogueOption::filler("Anyway...".to_string(), CardType::Threat);
    let outcome = resolve_attack(
        &filler,
        &mut statement,
        None,
        mode(Ruleset::Threshold, CritPolicy::Permissive),
        &mut ScriptedRandom::new().with_rolls(&[4]),
    );
    assert_eq!(outcome.damage(), 0);
    assert_eq!(outcome.tier(), DamageTier::Miss);
    assert_eq!(statement.health.current(), 40);

    let mut rng = ScriptedRandom::new();
    let mut session = Session::new(duel(), config(Ruleset::Threshold, CritPolicy::Permissive), &mut rng)?;
    let filler = session.options()[1].clone();
    assert!(!filler.is_effective);

    session.select_option(filler.id)?;
    let snapshot = session.confirm_attack(&mut rng)?;
    let outcome = snapshot.last_outcome.as_ref().expect("attack has an outcome");
    assert_eq!(outcome.label(), "MISS");
    assert_eq!(outcome.boss_reply, "……");
    assert_eq!(snapshot.statement_hp.current(), 40);
    assert_eq!(snapshot.boss_hp.current(), 80);
    assert_eq!(snapshot.action_points, 29);
    Ok(())
}

#[test]
fn clearing_the_last_statement_wins_and_locks_the_session() -> Result<(), Box<dyn std::error::Error>>
{
    let mut rng = ScriptedRandom::new().with_rolls(&[4, 2]);
    let mut session = Session::new(duel(), config(Ruleset::Threshold, CritPolicy::Permissive), &mut rng)?;

    for _ in 0..2 {
        let id = session.options()[0].id;
        session.select_option(id)?;
        let snapshot = session.confirm_attack(&mut rng)?;
        assert_eq!(snapshot.statement_state, StatementState::Breaking);
        session.finish_break(&mut rng)?;
    }

    let snapshot = session.snapshot();
    assert_eq!(snapshot.progress, Progress::Victory);
    assert!(snapshot.signals.contains(&Signal::Victory));
    assert_eq!(snapshot.boss_hp.current(), 0);
    assert!(snapshot.is_over());

    let id = session.options()[0].id;
    assert_eq!(session.select_option(id).unwrap_err(), Rejected::GameOver);
    assert_eq!(session.confirm_attack(&mut rng).unwrap_err(), Rejected::GameOver);
    assert_eq!(session.refresh_hand(&mut rng).unwrap_err(), Rejected::GameOver);
    assert_eq!(session.finish_break(&mut rng).unwrap_err(), Rejected::GameOver);
    assert_eq!(session.action_points(), 28);
    Ok(())
}
