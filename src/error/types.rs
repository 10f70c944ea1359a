use thiserror::Error;

/// Unified result type for the flow engine.
pub type Result<T> = std::result::Result<T, FlowError>;

/// Errors surfaced by the flow layout engine.
///
/// Rule registration is the only fallible surface; a registered rule set
/// never fails during a layout pass. Widgets that vanish between passes are
/// purged silently, not reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("invalid instruction `{token}`")]
    InvalidInstruction { token: char },
    #[error("rule ends with dangling modifier `{modifier}`")]
    DanglingModifier { modifier: char },
}
