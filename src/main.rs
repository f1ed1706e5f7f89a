// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pdf_qa::ui::render::{render_answer, render_documents, render_failure, render_upload};
use pdf_qa::ui::Spinner;
use pdf_qa::{Config, Operation, PdfFile, Repl, SessionClient};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "pdf_qa")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Upload PDFs to a question-answering backend and ask about them", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Backend base URL, overriding the configured one
    #[arg(short, long, value_name = "URL")]
    backend_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Shell,

    /// Upload one or more PDF files
    Upload {
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,
    },

    /// Ask a question, optionally restricted to one document
    Ask {
        question: String,

        #[arg(short, long, value_name = "ID")]
        doc_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // A missing file is fine; environment overrides still apply and are validated.
    let mut config =
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?;

    config.ui.color = config.ui.color && cli.color;
    colored::control::set_override(config.ui.color);
    pdf_qa::utils::logging::init_logger(config.ui.color, cli.verbose);

    if cli.config.exists() {
        info!("Loaded configuration from: {}", cli.config.display());
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
    }

    if let Some(url) = cli.backend_url {
        config = config
            .with_backend_url(url)
            .context("Invalid backend URL")?;
    }

    let session = SessionClient::from_config(&config).context("Failed to create session")?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => cmd_shell(&config, session).await?,
        Commands::Upload { files } => cmd_upload(&config, session, &files).await?,
        Commands::Ask { question, doc_id } => {
            cmd_ask(&config, session, &question, doc_id.as_deref()).await?
        }
    }

    Ok(())
}

async fn cmd_shell(config: &Config, session: SessionClient) -> Result<()> {
    let mut repl = Repl::new(session, &config.ui);
    repl.run().await.context("Interactive session failed")?;
    Ok(())
}

async fn cmd_upload(config: &Config, mut session: SessionClient, paths: &[PathBuf]) -> Result<()> {
    let files = paths
        .iter()
        .map(|path| PdfFile::from_path(path))
        .collect::<pdf_qa::Result<Vec<_>>>()
        .context("Failed to read input files")?;

    let result = {
        let _spinner = Spinner::start(Operation::Upload.busy_message(), config.ui.color);
        session.upload_documents(&files).await
    };

    match result {
        Ok(outcome) => {
            println!("{}\n", render_upload(&outcome, config.ui.show_raw_json));
            println!("{}", render_documents(session.state().documents()));
            Ok(())
        }
        Err(e) => {
            println!("{}", render_failure(Operation::Upload, &e));
            Err(anyhow::Error::new(e).context("Upload failed"))
        }
    }
}

async fn cmd_ask(
    config: &Config,
    session: SessionClient,
    question: &str,
    doc_id: Option<&str>,
) -> Result<()> {
    let result = {
        let _spinner = Spinner::start(Operation::Ask.busy_message(), config.ui.color);
        session.ask_question(question, doc_id).await
    };

    match result {
        Ok(answer) => {
            println!("{}", render_answer(&answer, config.ui.show_raw_json));
            Ok(())
        }
        Err(e) => {
            println!("{}", render_failure(Operation::Ask, &e));
            Err(anyhow::Error::new(e).context("Ask failed"))
        }
    }
}
