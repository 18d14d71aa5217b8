use thiserror::Error;

/// Why an action was ignored. A rejected action never changes the session.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rejected {
    #[error("the game is over")]
    GameOver,

    #[error("a break is still being resolved")]
    Resolving,

    #[error("no option selected")]
    NoSelection,

    #[error("option is not on offer")]
    UnknownOption,

    #[error("no action points left")]
    OutOfActionPoints,

    #[error("no refreshes left")]
    NoRefreshesLeft,

    #[error("no statement is breaking")]
    NotBreaking,

    #[error("not available in this ruleset")]
    UnsupportedByRuleset,
}
