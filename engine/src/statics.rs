lazy_static::lazy_static! {
    pub static ref OPTION_COUNT: usize = 3;
    pub static ref DECK_SIZE: usize = 16;
    pub static ref HAND_SIZE: usize = 4;
    pub static ref DEFAULT_ACTION_POINTS: u32 = 30;
    pub static ref DEFAULT_REFRESHES: u32 = 3;
    pub static ref GOOD_DAMAGE: u32 = 10;
    pub static ref PERFECT_DAMAGE: u32 = 20;
    pub static ref BURST_PER_HIT: u32 = 40;
    pub static ref CRIT_MULTIPLIER: f64 = 1.5;
    pub static ref FALLBACK_LINE: &'static str = "……";
}
