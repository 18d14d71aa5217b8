use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_OPTION: AtomicU64 = AtomicU64::new(1);

/// Handle the input layer uses to point at an offered option. Ids are never
/// reused within a process, so one kept from an earlier hand is just unknown.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OptionId(u64);

impl OptionId {
    pub fn fresh() -> Self {
        Self(NEXT_OPTION.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_only_grow() {
        let first = OptionId::fresh();
        let second = OptionId::fresh();
        assert!(second > first);
        assert_ne!(first.to_string(), second.to_string());
    }
}
