use serde::Serialize;

use libinfo_core::{
    formatted_library_description, AndroidLibrary, AppContext, KotlinLibrary, Library,
};

use crate::config::CliConfig;
use crate::LibraryKind;

#[derive(Serialize)]
struct AboutRow<'a> {
    library: &'a str,
    about: &'a str,
}

pub fn run(
    kind: LibraryKind,
    package: Option<&str>,
    config: &CliConfig,
    json: bool,
) -> anyhow::Result<u8> {
    let library = build_library(kind, package, config)?;

    if json {
        let row = AboutRow {
            library: kind.as_str(),
            about: library.about(),
        };
        println!("{}", serde_json::to_string_pretty(&row)?);
    } else {
        println!("{}", formatted_library_description(library.as_ref()));
    }

    Ok(0)
}

fn build_library(
    kind: LibraryKind,
    package: Option<&str>,
    config: &CliConfig,
) -> anyhow::Result<Box<dyn Library>> {
    match kind {
        LibraryKind::Kotlin => Ok(Box::new(KotlinLibrary::new())),

        LibraryKind::Android => {
            let package = super::resolve_package(package, config).ok_or_else(|| {
                anyhow::anyhow!(
                    "No package namespace available for the android library. \
                     Pass --package or set package_name in the config file."
                )
            })?;
            let context = AppContext::new(package);
            let library = AndroidLibrary::new(&context)?;
            Ok(Box::new(library))
        }
    }
}
