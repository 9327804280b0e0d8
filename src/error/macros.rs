//! Constructor generation for error variants
//!
//! Each error sub-module lists its variants once and gets a snake_case constructor
//! per variant, taking every field as `impl Into<String>`.

/// Generate constructor functions for `SaucerError` variants
///
/// # Example
/// ```rust,ignore
/// impl_error_constructors! {
///     not_found => NotFound(path),
///     read_failed => FileReadFailed(path, reason),
/// }
///
/// let err = not_found("src/main.cpp");
/// ```
macro_rules! impl_error_constructors {
    ($($name:ident => $variant:ident($($field:ident),* $(,)?)),* $(,)?) => {
        $(
            #[doc = concat!("Creates a [`SaucerError::", stringify!($variant), "`] error")]
            pub fn $name($($field: impl Into<String>),*) -> $crate::error::SaucerError {
                $crate::error::SaucerError::$variant {
                    $($field: $field.into()),*
                }
            }
        )*
    };
}
