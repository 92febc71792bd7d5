pub mod about;
pub mod list;

use crate::config::CliConfig;

/// Resolve the package namespace for host-bound components.
/// The command-line flag wins over the config file.
pub fn resolve_package(flag: Option<&str>, config: &CliConfig) -> Option<String> {
    flag.map(str::to_string)
        .or_else(|| config.package_name.clone())
}
