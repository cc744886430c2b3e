//! Tracing/logging setup shared by binaries.

/// Tracing subscriber configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::LogFormat;

/// Environment variable selecting the log format (`json` or `pretty`).
pub const LOG_FORMAT_VAR: &str = "SHIPCALC_LOG_FORMAT";

/// Initialize process-wide logging with the format named by
/// `SHIPCALC_LOG_FORMAT` (default `json`).
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    init_from(std::env::var(LOG_FORMAT_VAR).ok().as_deref());
}

/// Initialize logging from a raw format setting. An unrecognized value falls
/// back to the default and is reported once the subscriber is installed.
pub fn init_from(raw: Option<&str>) {
    match LogFormat::resolve(raw) {
        Ok(format) => crate::tracing::init(format),
        Err(rejected) => {
            let format = LogFormat::default();
            crate::tracing::init(format);
            ::tracing::warn!("{LOG_FORMAT_VAR}={rejected:?} not recognized; using {format:?}");
        }
    }
}
