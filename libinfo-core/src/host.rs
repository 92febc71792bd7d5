/// Handle onto a hosting environment.
///
/// The only thing a library component ever reads from its host is the
/// package namespace of the application it is embedded in. Passing the
/// context in explicitly keeps host-bound components constructible in
/// tests without a real hosting environment.
pub trait HostContext {
    /// Package identifier of the hosting application,
    /// e.g. `"com.example.app"`. Format is the host's business; it is
    /// not validated here.
    fn package_name(&self) -> &str;
}

/// Plain owned host context backed by a package name string.
#[derive(Debug, Clone)]
pub struct AppContext {
    package_name: String,
}

impl AppContext {
    pub fn new(package_name: impl Into<String>) -> Self {
        AppContext {
            package_name: package_name.into(),
        }
    }
}

impl HostContext for AppContext {
    fn package_name(&self) -> &str {
        &self.package_name
    }
}
