// src/main.rs
use anyhow::Context;
use clap::Parser;
use log::LevelFilter;
use log4rs::{
    append::console::{ConsoleAppender, Target},
    append::file::FileAppender,
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
    Config,
};
use outline_document::{
    emit, AppError, CommandLineInput, DocumentCreatePipeline, ExecutionResult, ModuleConfig,
    OutlineHttpClient,
};
use std::fs;

/// Sets up logging configuration.
///
/// Console output goes to stderr: stdout is reserved for the module result.
fn setup_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let log_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    let log_file_path = std::env::temp_dir().join("outline_document.log");
    if let Some(parent) = log_file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    let pattern = if verbose {
        "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}"
    } else {
        "{m}{n}"
    };

    let stderr_appender = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(pattern)))
        .build();

    let file_appender = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] - {m}{n}",
        )))
        .build(&log_file_path)?;

    let config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr_appender)))
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(LevelFilter::Debug)))
                .build("file", Box::new(file_appender)),
        )
        .build(
            Root::builder()
                .appender("stderr")
                .appender("file")
                .build(log_level),
        )?;

    log4rs::init_config(config)?;
    log::info!("Logging initialized. Log file: {}", log_file_path.display());
    Ok(())
}

/// Creates the document described by `config` over HTTP.
fn execute_module(config: &ModuleConfig) -> Result<ExecutionResult, AppError> {
    let transport = OutlineHttpClient::new(config.timeout)?;
    let pipeline =
        DocumentCreatePipeline::new(&config.credentials, transport).check_mode(config.check_mode);
    Ok(pipeline.execute(&config.request))
}

fn main() -> anyhow::Result<()> {
    let cli = CommandLineInput::parse();

    if let Err(e) = setup_logging(cli.verbose) {
        eprintln!("Logging disabled: {}", e);
    }

    let result = ModuleConfig::resolve(cli)
        .and_then(|config| execute_module(&config))
        .unwrap_or_else(|err| {
            log::error!("{}", err);
            ExecutionResult::failed(&err)
        });

    let stdout = std::io::stdout();
    emit(&result, &mut stdout.lock()).context("failed to write module result")?;

    if result.is_failure() {
        std::process::exit(1);
    }
    Ok(())
}
