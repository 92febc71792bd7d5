use serde::Serialize;
use tracing::debug;

use libinfo_core::{AndroidLibrary, AppContext, KotlinLibrary, Library};

use crate::config::CliConfig;

#[derive(Serialize)]
struct ListRow {
    library: &'static str,
    about: String,
}

/// Print the descriptor of every component constructible with the
/// available context. Host-bound components are skipped when no package
/// namespace is available; listing is a discovery operation, not a
/// validation step.
pub fn run(package: Option<&str>, config: &CliConfig, json: bool) -> anyhow::Result<u8> {
    let mut rows = vec![ListRow {
        library: "kotlin",
        about: KotlinLibrary::new().about().to_string(),
    }];

    match super::resolve_package(package, config) {
        Some(package) => {
            let context = AppContext::new(package);
            rows.push(ListRow {
                library: "android",
                about: AndroidLibrary::new(&context)?.about().to_string(),
            });
        }
        None => {
            debug!("no package namespace available; skipping host-bound libraries");
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}", row.about);
        }
    }

    Ok(0)
}
