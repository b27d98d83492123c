pub mod setup;

pub use setup::{TelemetryConfig, TelemetryError, init_telemetry};
