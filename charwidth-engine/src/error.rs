//! Error types for normalize options

/// Errors raised while turning untyped option keys and category tags into
/// [`NormalizeOptions`](crate::NormalizeOptions).
///
/// Both variants carry the offending input verbatim so callers can report it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptionsError {
    #[error("unexpected normalize option(s): {0:?}")]
    UnexpectedOptions(Vec<String>),

    #[error("unexpected normalize type(s): {0:?}")]
    UnexpectedTypes(Vec<String>),
}

pub type Result<T> = std::result::Result<T, OptionsError>;
