use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Deserialize;

use lexcast::{LexicalCast, Notation, Radix, Stream, Strategy, TargetType};

use crate::error::CliError;

#[derive(Parser)]
#[command(name = "lexcast", about = "Convert values through text", version)]
pub struct Cli {
    /// Path to TOML config file
    #[arg(long, global = true, env = "LEXCAST_CONFIG")]
    pub config: Option<String>,

    #[command(flatten)]
    pub converter: ConverterArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the six demonstration conversions with both calling conventions
    Demo(DemoArgs),
    /// Direct conversion: fail when the value cannot be converted
    Cast(CastArgs),
    /// Optional conversion: absent unless a fallback is given
    Convert(ConvertArgs),
    /// Convert every line of a file (or stdin)
    Batch(BatchArgs),
}

#[derive(Args, Clone, Debug)]
pub struct DemoArgs {
    /// Text converted to i32
    #[arg(long, default_value = "123", allow_hyphen_values = true)]
    pub text: String,

    /// Number converted to string
    #[arg(long, default_value_t = 123, allow_hyphen_values = true)]
    pub number: i32,
}

#[derive(Args, Clone, Debug)]
pub struct CastArgs {
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Target type (bool, char, i8..i128, u8..u128, f32, f64, string)
    #[arg(long, short)]
    pub to: TargetType,

    /// Source type; VALUE is read as plain decimal text into it first
    #[arg(long, default_value = "string")]
    pub from: TargetType,
}

#[derive(Args, Clone, Debug)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub cast: CastArgs,

    /// Printed instead when the conversion yields no value
    #[arg(long, allow_hyphen_values = true)]
    pub fallback: Option<String>,
}

#[derive(Args, Clone, Debug)]
pub struct BatchArgs {
    /// Input file, one value per line (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Target type
    #[arg(long, short)]
    pub to: TargetType,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ConverterKind {
    #[default]
    Lexical,
    Stream,
}

/// Converter flags. Any stream option implies `--converter stream`.
#[derive(Args, Clone, Debug, Default)]
pub struct ConverterArgs {
    /// Conversion strategy
    #[arg(long = "converter", global = true, value_enum)]
    pub kind: Option<ConverterKind>,

    /// Integer radix: bin, oct, dec, hex (or 2, 8, 10, 16)
    #[arg(long, global = true)]
    pub radix: Option<Radix>,

    /// Upper-case hex digits
    #[arg(long, global = true)]
    pub uppercase: bool,

    /// Trim surrounding whitespace instead of rejecting it
    #[arg(long, global = true)]
    pub skip_whitespace: bool,

    /// Fractional digits when writing floats
    #[arg(long, global = true)]
    pub precision: Option<usize>,
}

impl ConverterArgs {
    fn has_stream_options(&self) -> bool {
        self.radix.is_some() || self.uppercase || self.skip_whitespace || self.precision.is_some()
    }

    /// Merge with the config file; flags win.
    pub fn resolve(&self, file: &FileConfig) -> Strategy {
        let kind = self.kind.unwrap_or(if self.has_stream_options() {
            ConverterKind::Stream
        } else {
            file.converter
        });

        match kind {
            ConverterKind::Lexical => Strategy::Lexical(LexicalCast),
            ConverterKind::Stream => {
                let mut notation = file.stream;
                if let Some(radix) = self.radix {
                    notation.radix = radix;
                }
                notation.uppercase |= self.uppercase;
                notation.skip_whitespace |= self.skip_whitespace;
                if self.precision.is_some() {
                    notation.precision = self.precision;
                }
                Strategy::Stream(Stream::from(notation))
            }
        }
    }
}

// ---- TOML Config ----

/// ```toml
/// converter = "stream"
///
/// [stream]
/// radix = "hex"
/// uppercase = true
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub converter: ConverterKind,
    /// Used when `converter = "stream"`.
    pub stream: Notation,
}

impl FileConfig {
    pub fn load(path: &str) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config { context: "read", detail: format!("'{path}': {e}") })?;
        toml::from_str(&content)
            .map_err(|e| CliError::Config { context: "parse", detail: format!("'{path}': {e}") })
    }
}

/// Strategy for this invocation: config file (if any) overlaid with flags.
pub fn strategy(cli: &Cli) -> Result<Strategy, CliError> {
    let file = match &cli.config {
        Some(path) => {
            tracing::debug!(config = %path, "loading configuration");
            FileConfig::load(path)?
        }
        None => FileConfig::default(),
    };
    let strategy = cli.converter.resolve(&file);
    tracing::debug!(converter = strategy.name(), ?strategy, "converter selected");
    Ok(strategy)
}
