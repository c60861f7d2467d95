use std::path::PathBuf;

use clap::ValueHint;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, clap::ValueEnum)]
pub enum LogFormat {
    Compact,
    Full,
    Pretty,
    Json,
}

impl std::fmt::Display for LogFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogFormat::Compact => f.write_str("compact"),
            LogFormat::Full => f.write_str("full"),
            LogFormat::Pretty => f.write_str("pretty"),
            LogFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Logging output filters; comma-separated
    #[arg(
        short,
        long,
        default_value = "warn,meshmend=info,hedron=info,meshmend_cli=info",
        env = "MESHMEND_LOG_FILTER"
    )]
    pub log_filter: String,
    /// Logging output format
    #[arg(long, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
    /// Mesh document to operate on, as JSON
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub document: PathBuf,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// List the blocks in the document
    Blocks,
    /// List the operations which can be cast on a block, or on the whole document if no block is
    /// given
    List {
        /// Index of the selected block
        #[arg(short, long)]
        block: Option<u32>,
        /// List every registered operation, applicable or not
        #[arg(short, long)]
        all: bool,
    },
    /// Cast an operation and save the result
    Cast {
        /// Operation name, optionally prefixed by its page (e.g. "Mesh/Flip UV")
        operation: String,
        /// Index of the selected block
        #[arg(short, long)]
        block: Option<u32>,
        /// Index of the operation mode to use
        #[arg(short, long, default_value_t = 0)]
        mode: usize,
        /// File used as the clipboard for copying vertex data between documents
        #[arg(
            short,
            long,
            default_value = "meshmend-clipboard.json",
            env = "MESHMEND_CLIPBOARD",
            value_hint = ValueHint::FilePath
        )]
        clipboard: PathBuf,
        /// Where to write the edited document; defaults to overwriting the input
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },
}

/// Set up pretty log output
pub(crate) fn initialize_tracing(log_filter: &str, log_format: LogFormat) {
    let tsub = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::OffsetTime::new(
            time::UtcOffset::current_local_offset().unwrap_or_else(|e| {
                tracing::warn!("couldn't get local time offset: {:?}", e);
                time::UtcOffset::UTC
            }),
            time::macros::format_description!("[hour]:[minute]:[second]"),
        ))
        .with_env_filter(log_filter);

    match log_format {
        LogFormat::Compact => tsub.compact().init(),
        LogFormat::Full => tsub.init(),
        LogFormat::Pretty => tsub.pretty().init(),
        LogFormat::Json => tsub.json().init(),
    }
}
