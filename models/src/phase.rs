use crate::Statement;

#[derive(Clone, Debug, PartialEq)]
pub struct Phase {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub statements: Vec<Statement>,
}

impl Phase {
    pub fn max_hp(&self) -> u32 {
        self.statements.iter().map(|s| s.health.max()).sum()
    }

    pub fn remaining_hp(&self) -> u32 {
        self.statements.iter().map(|s| s.health.current()).sum()
    }
}
