use std::time::Duration;

use crate::SessionResult;

#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub total_runs: usize,
    pub victories: usize,
    pub defeats: usize,
    pub stalled: usize,
    pub average_duration: Duration,
    pub average_attacks: f32,
    pub average_criticals: f32,
    pub average_boss_hp: f32,
}

impl SessionSummary {
    pub fn victory_rate(&self) -> f32 {
        if self.total_runs == 0 {
            return 0.0;
        }
        self.victories as f32 / self.total_runs as f32
    }
}

impl std::fmt::Display for SessionSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} runs: {} victories ({:.1}%), {} defeats, {} stalled | avg {:.1} attacks, {:.2} crits, {:.1} boss hp left, {:?} per run",
            self.total_runs,
            self.victories,
            self.victory_rate() * 100.0,
            self.defeats,
            self.stalled,
            self.average_attacks,
            self.average_criticals,
            self.average_boss_hp,
            self.average_duration,
        )
    }
}

impl From<&Vec<SessionResult>> for SessionSummary {
    fn from(results: &Vec<SessionResult>) -> Self {
        let total_runs = results.len();
        let mut victories = 0;
        let mut defeats = 0;
        let mut stalled = 0;
        let mut sum_duration = Duration::ZERO;
        let mut sum_attacks = 0f64;
        let mut sum_criticals = 0f64;
        let mut sum_boss_hp = 0f64;

        for res in results.iter() {
            match res {
                SessionResult::Victory(..) => victories += 1,
                SessionResult::Defeat(..) => defeats += 1,
                SessionResult::Stalled(..) => stalled += 1,
            }
            let inner = res.inner_ref();
            sum_duration += inner.duration;
            sum_attacks += inner.attacks.len() as f64;
            sum_criticals += inner.criticals() as f64;
            sum_boss_hp += inner.boss_hp_remaining as f64;
        }

        let average = |sum: f64| -> f32 {
            if total_runs > 0 {
                (sum / total_runs as f64) as f32
            } else {
                0.0
            }
        };

        let average_duration = if total_runs > 0 {
            sum_duration / (total_runs as u32)
        } else {
            Duration::ZERO
        };

        SessionSummary {
            total_runs,
            victories,
            defeats,
            stalled,
            average_duration,
            average_attacks: average(sum_attacks),
            average_criticals: average(sum_criticals),
            average_boss_hp: average(sum_boss_hp),
        }
    }
}
