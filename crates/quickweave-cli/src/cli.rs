//! CLI argument definitions for the quickweave binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use quickweave::PluginVariant;

/// Command-line interface for the quickweave build step.
#[derive(Parser, Debug)]
#[command(name = "quickweave", disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Action to perform.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Subcommands understood by the binary.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Weaves the inputs listed in a build description.
    Weave {
        /// JSON build description written by the host build.
        #[arg(long, value_name = "FILE")]
        build: PathBuf,
    },
    /// Prints what must be registered with a host module.
    Register {
        /// Plugin ids applied to the host project.
        #[arg(long = "plugin", value_name = "ID", required = true)]
        plugins: Vec<String>,
        /// Which libraries accompany the transform.
        #[arg(long, value_enum, default_value_t = VariantArg::Annotations)]
        variant: VariantArg,
    },
    /// Prints the transform descriptor.
    Describe,
}

/// Library set added alongside the transform.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum VariantArg {
    /// Aspect runtime plus permission annotations.
    #[default]
    Annotations,
    /// Aspect runtime only.
    Runtime,
}

impl From<VariantArg> for PluginVariant {
    fn from(value: VariantArg) -> Self {
        match value {
            VariantArg::Annotations => Self::Annotations,
            VariantArg::Runtime => Self::Runtime,
        }
    }
}
