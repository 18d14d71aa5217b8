use engine::{DispatchableEvent, Ruleset, Signal, Snapshot, StatementState};
use models::Health;

const BAR_WIDTH: usize = 20;

fn bar(health: Health) -> String {
    let filled = (health.fraction() * BAR_WIDTH as f32).round() as usize;
    format!(
        "[{}{}] {}/{}",
        "█".repeat(filled.min(BAR_WIDTH)),
        "░".repeat(BAR_WIDTH - filled.min(BAR_WIDTH)),
        health.current(),
        health.max()
    )
}

pub fn snapshot(s: &Snapshot) -> String {
    let mut out = format!(
        "\n== {} #{} ==\nBOSS {} {}%\n\n「{}」\n{}\n",
        s.phase_title,
        s.statement_index + 1,
        bar(s.boss_hp),
        s.boss_percent(),
        s.statement_text,
        bar(s.statement_hp),
    );
    if let Some(ref weakness) = s.weakness {
        out.push_str(&format!("weak to {weakness}\n"));
    }

    if let Some(ref outcome) = s.last_outcome {
        out.push_str(&format!("\n> {}\n{outcome}\n< {}\n", outcome.option.text, outcome.boss_reply));
    }

    if s.statement_state == StatementState::Breaking {
        if let Some(ref feedback) = s.break_feedback {
            out.push_str(&format!("\n💥 {feedback}\n"));
        }
        return out;
    }

    out.push('\n');
    if let Some(ref card) = s.card {
        out.push_str(&format!(
            "{} | {} {card}\n",
            card.character.name(),
            card.rarity.label()
        ));
    }
    for (i, option) in s.options.iter().enumerate() {
        let marker = if s.selected == Some(option.id) { ">" } else { " " };
        out.push_str(&format!(
            "{marker} {}. [{}] {option}\n",
            i + 1,
            option.card_type.label()
        ));
    }
    let refreshes = match s.ruleset {
        Ruleset::DualType => format!("  refreshes {}", s.refreshes_left),
        Ruleset::Threshold => String::new(),
    };
    out.push_str(&format!("AP {}{refreshes}\n", s.action_points));
    out
}

pub fn signal(signal: &Signal) -> Option<String> {
    match signal {
        Signal::PhaseComplete(index) => Some(format!("phase {} complete", index + 1)),
        Signal::Victory => Some("VICTORY".to_string()),
        Signal::Defeat => Some("DEFEAT".to_string()),
        _ => None,
    }
}

pub fn event(event: &DispatchableEvent) -> Option<String> {
    match event {
        DispatchableEvent::Log(msg) => Some(msg.clone()),
        DispatchableEvent::Warning(msg) => Some(format!("warning: {msg}")),
        DispatchableEvent::HandRefreshed(remaining) => {
            Some(format!("hand refreshed, {remaining} left in the deck"))
        }
        _ => None,
    }
}
