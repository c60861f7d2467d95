use std::path::{Path, PathBuf};

use clap::Parser;
use hedron::{BlockId, Document};
use meshmend::{Context, Registry};

mod cli;
mod clipboard;

use cli::{Cli, Command};
use clipboard::FileClipboard;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("could not access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a valid mesh document")]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Mesh(#[from] meshmend::Error),
}

fn load(path: &Path) -> Result<Document, AppError> {
    let text = std::fs::read_to_string(path).map_err(|source| AppError::Io {
        path: path.to_owned(),
        source,
    })?;
    let doc: Document = serde_json::from_str(&text).map_err(|source| AppError::Document {
        path: path.to_owned(),
        source,
    })?;
    tracing::debug!(path = %path.display(), blocks = doc.len(), "loaded document");
    Ok(doc)
}

fn save(doc: &Document, path: &Path) -> Result<(), AppError> {
    let text = serde_json::to_string_pretty(doc).map_err(|source| AppError::Document {
        path: path.to_owned(),
        source,
    })?;
    std::fs::write(path, text).map_err(|source| AppError::Io {
        path: path.to_owned(),
        source,
    })?;
    tracing::info!(path = %path.display(), "saved document");
    Ok(())
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut doc = load(&cli.document)?;
    let registry = Registry::<Document>::standard();
    match cli.command {
        Command::Blocks => {
            for id in doc.ids() {
                if let Some(kind) = doc.kind(id) {
                    println!("{id}\t{kind}");
                }
            }
        }
        Command::List { block, all } => {
            let selection = block.map(BlockId);
            for op in registry.iter() {
                if all || op.applies(&doc, selection) {
                    println!("{}/{}", op.page, op.name);
                    for (i, mode) in op.modes.iter().enumerate() {
                        println!("\t{i}: {mode}");
                    }
                }
            }
        }
        Command::Cast {
            operation,
            block,
            mode,
            clipboard,
            output,
        } => {
            let mut clipboard = FileClipboard::new(clipboard);
            let mut ctx = Context::new(&mut clipboard).with_mode(mode);
            let outcome = registry.cast(&operation, &mut doc, block.map(BlockId), &mut ctx)?;
            for notice in &outcome.notices {
                println!("{notice}");
            }
            if !outcome.is_noop() {
                save(&doc, output.as_deref().unwrap_or(&cli.document))?;
            }
        }
    }
    Ok(())
}

pub fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    cli::initialize_tracing(&cli.log_filter, cli.log_format);

    match run(cli) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            let mut msg = e.to_string();
            let mut source = std::error::Error::source(&e);
            while let Some(s) = source {
                msg = format!("{msg}: {s}");
                source = s.source();
            }
            tracing::error!("{msg}");
            std::process::ExitCode::FAILURE
        }
    }
}
