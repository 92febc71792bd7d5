use crate::error::{LibraryError, Result};
use crate::host::HostContext;
use crate::library::Library;

const VERSION: &str = "0.1.0";

/// Library component bound to a hosting application.
///
/// Borrows the host context during construction only; the package
/// namespace is copied into the descriptor and no reference to the host
/// is kept.
pub struct AndroidLibrary {
    about: String,
}

impl AndroidLibrary {
    /// Build the component from its hosting environment.
    ///
    /// Fails with [`LibraryError::InvalidHostContext`] when the context
    /// carries an empty or blank package name. The check happens here so
    /// that `about` can never fail.
    pub fn new(context: &dyn HostContext) -> Result<Self> {
        let package_name = context.package_name().trim();
        if package_name.is_empty() {
            return Err(LibraryError::InvalidHostContext);
        }

        Ok(AndroidLibrary {
            about: format!("{}: Android library. Version {}", package_name, VERSION),
        })
    }
}

impl Library for AndroidLibrary {
    fn about(&self) -> &str {
        &self.about
    }
}
