use thiserror::Error;

/// This is the core error type for the evaluator. It uses `thiserror` to
/// provide readable error messages.
///
/// Neither error is fatal: callers decide whether to re-prompt, skip the
/// evaluation, or treat the entity as having no hand.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PokerError {
    #[error("Invalid card identifier {0:?}, expected <rank><suit> like \"As\"")]
    InvalidCardFormat(String),
    #[error("At least {required} cards are needed, only {found} supplied")]
    InsufficientCards { required: usize, found: usize },
}
