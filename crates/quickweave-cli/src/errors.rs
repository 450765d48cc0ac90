//! Error types for the CLI runtime.

use std::io;
use std::sync::Arc;

use quickweave::{BuildDescriptionError, ConfigurationError, WeaveError};
use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("failed to initialise telemetry: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error(transparent)]
    BuildDescription(#[from] BuildDescriptionError),
    #[error(transparent)]
    Weave(#[from] WeaveError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error("failed to serialise {what}: {source}")]
    Serialise {
        what: &'static str,
        source: serde_json::Error,
    },
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}
