//! Logging bootstrap honoring the configured output format.

use bookbud_kernel::settings::{LogFormat, TelemetrySettings};

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls keep the first subscriber.
pub fn init(settings: &TelemetrySettings) {
    match settings.log_format {
        LogFormat::Pretty => {
            tracing_subscriber::fmt().try_init().ok();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().json().try_init().ok();
        }
    }
    tracing::debug!(format = ?settings.log_format, "telemetry initialized");
}
