// Name and version baked in at build time

/// Package version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name (from Cargo.toml).
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Shown in the dashboard header, e.g. `hostwatch v0.3.0`.
pub fn display() -> String {
    format!("{NAME} v{VERSION}")
}
