use std::borrow::Cow;

/// Setup errors raised while declaring a parser's keywords.
///
/// These are programming or configuration defects. They are detected when a
/// binding is registered, never while tokens are consumed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// A keyword with this name is already bound in the same parser.
    #[error("keyword '{keyword}' is already bound")]
    DuplicateKeyword { keyword: Cow<'static, str> },
}

/// Strict-policy view of a parse outcome.
///
/// A parse never fails on its own; callers that treat leftovers or missing
/// values as errors turn a [`ParseOutcome`](crate::ParseOutcome) into one of
/// these through [`ParseOutcome::check`](crate::ParseOutcome::check).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgumentError {
    /// Tokens that no keyword claimed.
    #[error("unparsed arguments: {}", .arguments.join(" "))]
    UnparsedArguments { arguments: Vec<String> },

    /// A keyword that requires a value was given none.
    #[error("keyword '{keyword}' is missing its value")]
    MissingValue { keyword: Cow<'static, str> },
}
