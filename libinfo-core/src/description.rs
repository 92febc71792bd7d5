use crate::library::Library;

/// Render a library's descriptor for display.
pub fn formatted_library_description(library: &dyn Library) -> String {
    format!("About library:\n{}", library.about())
}
