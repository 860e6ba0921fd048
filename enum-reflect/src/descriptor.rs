//! Per-type reflection metadata.

use crate::{EnumReflect, LookupError};

/// Immutable reflection table for one enumerated type.
///
/// One descriptor exists per derived type, reachable through
/// [`EnumReflect::DESCRIPTOR`]. The table is emitted at compile time by the
/// derive macro and lives in static storage for the life of the process, so
/// reads from any number of threads need no synchronization.
///
/// Entries are stored in declaration order. Within one descriptor both
/// underlying values and names are unique; the compiler enforces this for
/// fieldless enums (duplicate discriminants and duplicate variant
/// identifiers are rejected at the definition site), so lookups never have
/// to tie-break.
pub struct EnumDescriptor<E: 'static> {
    type_name: &'static str,
    variants: &'static [(E, &'static str)],
}

impl<E: 'static> EnumDescriptor<E> {
    /// Builds a descriptor from derive-generated code. User code has no
    /// reason to call this directly.
    #[doc(hidden)]
    pub const fn new(type_name: &'static str, variants: &'static [(E, &'static str)]) -> Self {
        Self {
            type_name,
            variants,
        }
    }

    /// The enum's declared identifier.
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Number of declared variants.
    pub const fn len(&self) -> usize {
        self.variants.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterates over `(value, name)` pairs in declaration order.
    pub fn variants(&self) -> core::slice::Iter<'static, (E, &'static str)> {
        self.variants.iter()
    }
}

impl<E: EnumReflect> EnumDescriptor<E> {
    /// Looks up the declared name for a raw underlying value.
    ///
    /// This is the partial half of reflection: the representation type
    /// admits values outside the declared set, and those fail here.
    pub fn name_of(&self, discriminant: i64) -> Result<&'static str, LookupError> {
        self.variants
            .iter()
            .find(|(variant, _)| variant.discriminant() == discriminant)
            .map(|&(_, name)| name)
            .ok_or(LookupError::UnknownDiscriminant {
                type_name: self.type_name,
                discriminant,
            })
    }

    /// Looks up the variant whose declared name equals `name`. The match is
    /// exact and case-sensitive.
    pub fn value_of(&self, name: &str) -> Result<E, LookupError> {
        self.variants
            .iter()
            .find(|&&(_, declared)| declared == name)
            .map(|&(variant, _)| variant)
            .ok_or_else(|| LookupError::UnknownName {
                type_name: self.type_name,
                name: name.to_owned(),
            })
    }
}
