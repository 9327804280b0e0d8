//! File system errors

impl_error_constructors! {
    read_failed => FileReadFailed(path, reason),
    write_failed => FileWriteFailed(path, reason),
    hash_mismatch => HashMismatch(path, expected, actual),
    io_error => IoError(message),
}
