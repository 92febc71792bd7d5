use thiserror::Error;

/// Error types for libinfo-core operations.
///
/// Construction is the only fallible operation; descriptor reads never
/// fail.
#[derive(Error, Debug)]
pub enum LibraryError {
    #[error("Host context carries no package name; cannot describe a host-bound library")]
    InvalidHostContext,
}

pub type Result<T> = std::result::Result<T, LibraryError>;
