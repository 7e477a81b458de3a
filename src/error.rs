use thiserror::Error;

/// Errors that can occur while currying or applying a function.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurryError {
    /// The curry target is not something that can be curried.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A target function was applied to values it cannot operate on.
    #[error("type mismatch: cannot apply `{op}` to {left} and {right}")]
    TypeMismatch {
        op: &'static str,
        left: &'static str,
        right: &'static str,
    },

    /// A fixed-arity function was handed the wrong number of arguments.
    #[error("`{name}` takes {expected} arguments, got {got}")]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// The chain already produced its value and cannot take more arguments.
    #[error("curried function was already satisfied")]
    AlreadySatisfied,
}
