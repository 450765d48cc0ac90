//! Command-line runtime for the quickweave build step.
//!
//! The module owns argument parsing, configuration bootstrapping, telemetry
//! installation, and dispatch to the weave transform. The runtime can be
//! exercised from the binary entrypoint or from tests where configuration
//! loading and the output streams are substituted.

use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use quickweave::{
    AjcProcessInvoker, BuildDescription, LanguageLevels, PluginVariant, Registration,
    RelevantArchiveFilter, TracingLogger, TransformDescriptor, WeaveTransform,
};
use quickweave_config::Config;

mod cli;
mod config;
mod errors;
mod telemetry;

use cli::{Cli, CliCommand};
use config::{ConfigLoader, OrthoConfigLoader, split_config_arguments};
pub(crate) use errors::AppError;

/// Runs the CLI using the provided arguments and output streams.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    run_with_loader(args, stdout, stderr, &OrthoConfigLoader)
}

fn run_with_loader<I, W, E, L>(args: I, stdout: &mut W, stderr: &mut E, loader: &L) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let arguments: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&arguments);

    let result = Cli::try_parse_from(&split.cli_arguments)
        .map_err(AppError::CliUsage)
        .and_then(|cli| loader.load(&split.config_arguments).map(|config| (cli, config)))
        .and_then(|(cli, config)| {
            telemetry::initialise(&config)?;
            execute(cli.command, &config, stdout)
        });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::CliUsage(error))
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            drop(write!(stdout, "{error}"));
            ExitCode::SUCCESS
        }
        Err(error) => {
            drop(writeln!(stderr, "{error}"));
            ExitCode::FAILURE
        }
    }
}

fn execute<W: Write>(command: CliCommand, config: &Config, stdout: &mut W) -> Result<(), AppError> {
    match command {
        CliCommand::Weave { build } => weave(&build, config),
        CliCommand::Register { plugins, variant } => register(&plugins, variant.into(), stdout),
        CliCommand::Describe => emit_json(
            "transform descriptor",
            &TransformDescriptor::default(),
            stdout,
        ),
    }
}

fn weave(build: &Path, config: &Config) -> Result<(), AppError> {
    let description = BuildDescription::from_path(build)?;
    let transform = WeaveTransform::new(invoker_for(config), description.outputs())
        .with_levels(LanguageLevels::new(config.source_level(), config.target_level()))
        .with_filter(
            RelevantArchiveFilter::default()
                .with_markers(config.extra_archive_markers().iter().cloned()),
        );

    transform.transform(&description.into_invocation(), &TracingLogger)?;
    Ok(())
}

fn invoker_for(config: &Config) -> AjcProcessInvoker {
    match config.aspectj_tools_jar() {
        Some(jar) => AjcProcessInvoker::jvm(config.java_program(), jar),
        None => AjcProcessInvoker::new(config.weaver_program()),
    }
}

fn register<W: Write>(
    plugins: &[String],
    variant: PluginVariant,
    stdout: &mut W,
) -> Result<(), AppError> {
    let registration = Registration::plan(plugins, variant)?;
    emit_json("registration plan", &registration, stdout)
}

fn emit_json<T, W>(what: &'static str, value: &T, stdout: &mut W) -> Result<(), AppError>
where
    T: serde::Serialize,
    W: Write,
{
    let json = serde_json::to_string_pretty(value)
        .map_err(|source| AppError::Serialise { what, source })?;
    writeln!(stdout, "{json}").map_err(AppError::WriteOutput)
}
