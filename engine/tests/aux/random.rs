use std::collections::VecDeque;

use engine::RandomSource;

/// Hands out queued values, then fixed defaults (rolls of 1, picks of 0).
/// Shuffles leave the order untouched.
#[derive(Default, Debug)]
pub struct ScriptedRandom {
    rolls: VecDeque<u8>,
    picks: VecDeque<usize>,
}

#[allow(unused)]
impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rolls(mut self, rolls: &[u8]) -> Self {
        self.rolls.extend(rolls.iter().copied());
        self
    }

    pub fn with_picks(mut self, picks: &[usize]) -> Self {
        self.picks.extend(picks.iter().copied());
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn roll_die(&mut self) -> u8 {
        self.rolls.pop_front().unwrap_or(1)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.picks.pop_front().unwrap_or(0).min(len.saturating_sub(1))
    }

    fn shuffle<T>(&mut self, _items: &mut [T]) {}
}
