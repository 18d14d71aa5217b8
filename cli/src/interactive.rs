use std::{
    io::{BufRead, Write},
    sync::Arc,
    time::Duration,
};

use engine::{RandomSource, SeededRandom, Session, SessionConfig, StatementState};
use models::Content;

use crate::render;

enum Command {
    Select(usize),
    Attack,
    Refresh,
    Quit,
}

fn parse(line: &str) -> Option<Command> {
    match line.trim() {
        "a" | "attack" => Some(Command::Attack),
        "r" | "refresh" => Some(Command::Refresh),
        "q" | "quit" => Some(Command::Quit),
        other => other.parse::<usize>().ok().map(Command::Select),
    }
}

pub fn play(content: Arc<Content>, config: SessionConfig, pause: Duration) -> anyhow::Result<()> {
    let mut rng = match config.seed {
        Some(seed) => SeededRandom::from_seed(seed),
        None => SeededRandom::from_entropy(),
    };
    let (evt_tx, evt_rx) = std::sync::mpsc::channel();
    let mut session = Session::new(content, config, &mut rng)?.with_channel(evt_tx);

    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    println!("{}", render::snapshot(&session.snapshot()));

    loop {
        let snapshot = session.snapshot();
        if snapshot.is_over() {
            if snapshot.stalled {
                println!("out of action points");
            }
            break;
        }

        print!("[1-{}] select, a attack, r refresh, q quit > ", snapshot.options.len());
        std::io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let Some(command) = parse(&line?) else {
            continue;
        };

        let result = match command {
            Command::Quit => break,
            Command::Select(n) => match snapshot.options.get(n.wrapping_sub(1)) {
                Some(option) => session.select_option(option.id),
                None => continue,
            },
            Command::Attack => session.confirm_attack(&mut rng),
            Command::Refresh => session.refresh_hand(&mut rng),
        };

        match result {
            Ok(snapshot) => {
                println!("{}", render::snapshot(&snapshot));
                if snapshot.statement_state == StatementState::Breaking {
                    std::thread::sleep(pause);
                    finish_break(&mut session, &mut rng)?;
                }
                for signal in &snapshot.signals {
                    if let Some(line) = render::signal(signal) {
                        println!("{line}");
                    }
                }
            }
            Err(rejected) => println!("({rejected})"),
        }
        for event in evt_rx.try_iter() {
            if let Some(line) = render::event(&event) {
                println!("{line}");
            }
        }
    }
    Ok(())
}

fn finish_break<R: RandomSource>(session: &mut Session, rng: &mut R) -> anyhow::Result<()> {
    let snapshot = session.finish_break(rng)?;
    for signal in &snapshot.signals {
        if let Some(line) = render::signal(signal) {
            println!("{line}");
        }
    }
    if !snapshot.is_over() {
        println!("{}", render::snapshot(&snapshot));
    }
    Ok(())
}
