mod config;
mod report;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use eof_container::{read_eof1_header, CodeFormat, ContainerBuilder};
use log::LevelFilter;

use config::{InspectConfig, OutputFormat};
use report::Report;

/// Validate and build EOF1 bytecode containers
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Report format (overrides the config file)
    #[arg(short, long, global = true)]
    format: Option<OutputFormat>,

    /// Log level (overrides the config file, `RUST_LOG` overrides both)
    #[arg(long, global = true)]
    log_level: Option<LevelFilter>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a container and print a report
    Validate {
        /// Container file
        #[arg(required_unless_present = "hex", conflicts_with = "hex")]
        input: Option<PathBuf>,

        /// Container given as a hex string
        #[arg(long)]
        hex: Option<String>,

        /// Accept code without the format byte as legacy bytecode
        #[arg(long)]
        allow_legacy: bool,
    },
    /// Encode a container from hex sections
    Build {
        #[arg(long)]
        code: String,

        #[arg(long)]
        data: Option<String>,

        /// Output file; the container is printed as hex when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn parse_hex(text: &str) -> Result<Vec<u8>> {
    let text: String = text.split_whitespace().collect();
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(&text);
    hex::decode(digits).with_context(|| format!("invalid hex input {:?}", text))
}

fn load_input(input: Option<&Path>, hex: Option<&str>) -> Result<(String, Vec<u8>)> {
    match (input, hex) {
        (_, Some(hex)) => Ok(("hex".to_string(), parse_hex(hex)?)),
        (Some(path), None) => {
            let bytes = std::fs::read(path).with_context(|| format!("read {:?}", path))?;
            Ok((path.display().to_string(), bytes))
        }
        (None, None) => anyhow::bail!("no input given"),
    }
}

fn validate(
    input: Option<&Path>,
    hex: Option<&str>,
    allow_legacy: bool,
    format: OutputFormat,
) -> Result<bool> {
    let (source, bytes) = load_input(input, hex)?;
    log::info!("validating {} ({} bytes)", source, bytes.len());

    let report = if allow_legacy {
        Report::from_format(source, bytes.len(), CodeFormat::detect(&bytes))
    } else {
        Report::from_header(source, bytes.len(), read_eof1_header(&bytes))
    };
    print!("{}", report.render(format)?);

    Ok(report.valid)
}

fn build(code: &str, data: Option<&str>, output: Option<&Path>) -> Result<()> {
    let code = parse_hex(code).context("code section")?;
    let data = match data {
        Some(data) => parse_hex(data).context("data section")?,
        None => Vec::new(),
    };

    let container = ContainerBuilder::new(&code).with_data(&data).build()?;
    log::info!(
        "built container: code={} bytes, data={} bytes, total={} bytes",
        code.len(),
        data.len(),
        container.len()
    );

    match output {
        Some(path) => {
            std::fs::write(path, &container).with_context(|| format!("write {:?}", path))?
        }
        None => println!("{}", hex::encode_upper(&container)),
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => InspectConfig::read(path)?,
        None => InspectConfig::default(),
    };
    let level = args.log_level.unwrap_or(config.logger.level_filter);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_env("RUST_LOG")
        .init();

    let format = args.format.unwrap_or(config.output);

    match args.command {
        Command::Validate { input, hex, allow_legacy } => {
            let valid = validate(input.as_deref(), hex.as_deref(), allow_legacy, format)?;
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Build { code, data, output } => {
            build(&code, data.as_deref(), output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
