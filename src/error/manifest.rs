//! Vendoring manifest errors

impl_error_constructors! {
    parse_failed => ManifestParseFailed(path, reason),
    invalid => ManifestInvalid(message),
}
