//! Embedded bundle lookup errors

impl_error_constructors! {
    not_found => NotFound(path),
    not_utf8 => NotUtf8(path, reason),
    invalid_pattern => InvalidPattern(pattern, reason),
}
