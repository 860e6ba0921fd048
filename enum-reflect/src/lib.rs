//! Compile-time enum reflection.
//!
//! This crate provides two things:
//! 1. The [`EnumReflect`] trait and its per-type [`EnumDescriptor`] table
//!    mapping each declared variant to its name.
//! 2. A derive macro that emits the descriptor from the enum definition, so
//!    no lookup table is ever maintained by hand.
//!
//! The derive macro lives in the companion crate `enum-reflect-derive`, but
//! we re-export it here for ergonomic `use enum_reflect::EnumReflect;`.
//!
//! The query surface is three free functions: [`get_size`] (variant count),
//! [`get_name`] (value to declared name), and [`get_value`] (declared name
//! back to value). Name and value lookups are partial: the underlying
//! representation admits values outside the declared set, and strings are
//! arbitrary, so both return a [`Result`] and fail with [`LookupError`].
//!
//! ```
//! use enum_reflect::{get_name, get_size, get_value, EnumReflect};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, EnumReflect)]
//! enum Direction {
//!     North,
//!     South,
//! }
//!
//! assert_eq!(get_size::<Direction>(), 2);
//! assert_eq!(get_name(Direction::North)?, "North");
//! assert_eq!(get_value::<Direction>("South")?, Direction::South);
//! # Ok::<(), enum_reflect::LookupError>(())
//! ```
//!
//! Descriptors are compile-time constants: there is no registration step, no
//! lazy initialization, and no locking. All lookups are bounded synchronous
//! scans over a small static table.

pub mod descriptor;
pub mod error;

pub use descriptor::EnumDescriptor;
pub use error::LookupError;

// -------------------------------------------------------------------------
// Re-exports
// -------------------------------------------------------------------------

pub use enum_reflect_derive::EnumReflect;

/// Convenience alias for fallible reflection lookups.
pub type Result<T> = core::result::Result<T, LookupError>;

/// Reflection metadata for a fieldless enum.
///
/// Implemented by `#[derive(EnumReflect)]`; implementing it by hand defeats
/// the point of the crate but is not forbidden. The `Copy` bound matches the
/// usual `#[derive(Clone, Copy, PartialEq)]` on C-like enums and lets
/// lookups hand variants back by value out of the static table.
pub trait EnumReflect: Copy + Sized + 'static {
    /// The per-type reflection table, emitted by the derive macro.
    const DESCRIPTOR: EnumDescriptor<Self>;

    /// The underlying value backing `self`.
    ///
    /// Total over all representable values, including ones outside the
    /// declared variant set; [`get_name`] is where partiality lives.
    fn discriminant(&self) -> i64;
}

/// Number of declared variants of `E`.
///
/// Infallible: the variant set is fixed by the type's definition.
pub fn get_size<E: EnumReflect>() -> usize {
    E::DESCRIPTOR.len()
}

/// Declared name of the variant whose underlying value equals `value`'s.
///
/// Fails with [`LookupError::UnknownDiscriminant`] when no declared variant
/// matches.
pub fn get_name<E: EnumReflect>(value: E) -> Result<&'static str> {
    E::DESCRIPTOR.name_of(value.discriminant())
}

/// Variant of `E` whose declared name equals `name`, matched exactly and
/// case-sensitively.
///
/// Fails with [`LookupError::UnknownName`] when no declared variant matches.
pub fn get_value<E: EnumReflect>(name: &str) -> Result<E> {
    E::DESCRIPTOR.value_of(name)
}
