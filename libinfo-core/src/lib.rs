//! libinfo-core
//!
//! Self-describing library components. Each component implements
//! [`Library`] and exposes a single human-readable descriptor combining
//! its kind label and version, optionally prefixed by the package
//! namespace of the hosting application.

pub mod android;
pub mod description;
pub mod error;
pub mod host;
pub mod kotlin;
pub mod library;

// Re-export the capability surface so callers don't need to know the
// module layout.
pub use android::AndroidLibrary;
pub use description::formatted_library_description;
pub use error::{LibraryError, Result};
pub use host::{AppContext, HostContext};
pub use kotlin::KotlinLibrary;
pub use library::Library;
