use thiserror::Error;

/// The single error kind produced by the reflection surface: a value or name
/// with no corresponding entry in the queried type's descriptor.
///
/// Lookup failures are always synchronous and always surfaced to the
/// immediate caller; this crate never logs, retries, or suppresses them.
/// Both variants carry the offending input and the type name so callers can
/// build a diagnostic without re-deriving context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// No declared variant has this underlying value.
    #[error("no variant of `{type_name}` has underlying value {discriminant}")]
    UnknownDiscriminant {
        type_name: &'static str,
        discriminant: i64,
    },
    /// No declared variant has this name.
    #[error("no variant of `{type_name}` is named `{name}`")]
    UnknownName {
        type_name: &'static str,
        name: String,
    },
}
