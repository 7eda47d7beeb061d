//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: create a complete rule (struct + `Rule` impl + factory fn)
//!
//! # Examples
//!
//! ```rust,ignore
//! use passgate_validator::rule;
//! use passgate_validator::foundation::RuleId;
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub HasDigit => RuleId::Digit;
//!     check(pair) { pair.password.bytes().any(|b| b.is_ascii_digit()) }
//!     fn has_digit();
//! }
//!
//! // Struct with fields
//! rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MinLength { min: usize } => RuleId::MinLength;
//!     check(self, pair) { pair.password.chars().count() >= self.min }
//!     new(min: usize) { Self { min } }
//!     fn min_length(min: usize);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete rule: struct definition, `Rule` implementation,
/// constructor, and factory function.
///
/// Unit rules always derive `Debug, Clone, Copy, PartialEq, Eq, Hash, Default`.
/// Struct rules derive `Debug, Clone`; add extra derives via `#[derive(...)]`.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub HasUppercase => RuleId::Uppercase;
///     check(pair) { pair.password.bytes().any(|b| b.is_ascii_uppercase()) }
///     fn has_uppercase();
/// }
/// ```
///
/// **Struct with fields** (custom `new`):
/// ```rust,ignore
/// rule! {
///     pub MinLength { min: usize } => RuleId::MinLength;
///     check(self, pair) { pair.password.chars().count() >= self.min }
///     new(min: usize) { Self { min } }
///     fn min_length(min: usize);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $id:expr;
        check($pair:ident) $check:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name => $id;
            check($pair) $check
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident => $id:expr;
        check($pair:ident) $check:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            fn id(&self) -> $crate::foundation::RuleId {
                $id
            }

            fn is_satisfied(&self, $pair: &$crate::foundation::CandidatePair<'_>) -> bool $check
        }
    };

    // ── Variant 2a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } => $id:expr;
        check($self_:ident, $pair:ident) $check:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } => $id;
            check($self_, $pair) $check
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } => $id:expr;
        check($self_:ident, $pair:ident) $check:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        impl $crate::foundation::Rule for $name {
            fn id(&self) -> $crate::foundation::RuleId {
                $id
            }

            fn is_satisfied(&$self_, $pair: &$crate::foundation::CandidatePair<'_>) -> bool $check
        }
    };
}
