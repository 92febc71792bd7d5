/// A component that can describe itself.
///
/// Implementors precompute their descriptor at construction time, so
/// `about` is infallible and returns the identical value on every read.
pub trait Library {
    /// Human-readable identity string: kind label plus version,
    /// optionally prefixed by the hosting application's package
    /// namespace.
    fn about(&self) -> &str;
}
