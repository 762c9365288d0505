use thiserror::Error;

/// Everything that can go wrong while registering options, scanning a token
/// list, or running the required-check.
///
/// Each variant carries the offending long form or raw token. Any failure
/// aborts the parse as a whole; there is no partial result to recover. The
/// library itself never prints or exits — surfacing the message next to the
/// usage table is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A boolean flag was registered without a long form. Only value-taking
    /// options may use the empty long form (the positional catch-all).
    #[error("flags must have a long form")]
    EmptyLongForm,
    /// The long form, or a non-empty short alias, is already registered.
    #[error("parameter already defined: {0}")]
    DuplicateOption(String),
    #[error("unknown parameter: {0}")]
    UnknownParameter(String),
    /// Flags only accept the literal values `0` and `1`.
    #[error("flag values must be '0' or '1': {0}")]
    MalformedFlagValue(String),
    /// A single-value option was supplied more than once.
    #[error("value already set for parameter: {0}")]
    DuplicateSingleValue(String),
    #[error("empty value for parameter: {0}")]
    EmptyValue(String),
    /// A value-taking option reached the end of its token(s) without one.
    #[error("missing value for parameter: {0}")]
    MissingValue(String),
    /// A bare token with no pending option and no catch-all to route it to.
    #[error("unexpected argument: {0}")]
    UnexpectedToken(String),
    #[error("required parameter not specified: {0}")]
    MissingRequired(String),
}
