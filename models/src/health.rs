/// Remaining and maximum hit points. Damage is only ever applied through
/// [`Health::absorb`], so the value stays within `0..=max`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Health(pub u32, pub u32);

impl Health {
    pub fn max(&self) -> u32 {
        self.1
    }

    pub fn current(&self) -> u32 {
        self.0
    }

    pub fn fraction(&self) -> f32 {
        if self.1 == 0 {
            return 0.0;
        }
        (self.0 as f64 / self.1 as f64) as f32
    }

    pub fn is_depleted(&self) -> bool {
        self.0 == 0
    }

    /// Takes as much of `damage` as there is health left and returns the amount
    /// actually taken.
    pub fn absorb(&mut self, damage: u32) -> u32 {
        let absorbed = damage.min(self.0);
        self.0 -= absorbed;
        absorbed
    }
}

impl std::fmt::Display for Health {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Health ({}/{})", self.current(), self.max())
    }
}
