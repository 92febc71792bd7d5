use crate::library::Library;

const VERSION: &str = "0.0.1";

/// Host-agnostic library component.
///
/// Constructed with no arguments; its descriptor is fixed at build time
/// and identical across instances.
pub struct KotlinLibrary {
    about: String,
}

impl KotlinLibrary {
    pub fn new() -> Self {
        KotlinLibrary {
            about: format!("Kotlin library. Version {}", VERSION),
        }
    }
}

impl Default for KotlinLibrary {
    fn default() -> Self {
        KotlinLibrary::new()
    }
}

impl Library for KotlinLibrary {
    fn about(&self) -> &str {
        &self.about
    }
}
