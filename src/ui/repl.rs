// file: src/ui/repl.rs
// description: interactive session shell driving uploads and questions
// reference: rustyline line editor with slash-command completion

use crate::config::UiConfig;
use crate::error::{ClientError, Result};
use crate::models::PdfFile;
use crate::session::SessionClient;
use crate::ui::render::{
    Operation, render_answer, render_documents, render_failure, render_picker, render_status,
    render_upload,
};
use crate::ui::spinner::Spinner;
use crate::utils::logging::{format_info, format_success, format_warning};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator as LineValidator;
use rustyline::{Context, Editor, Helper};
use std::path::PathBuf;
use tracing::debug;

const PROMPT: &str = "pdf_qa> ";

const COMMANDS: &[&str] = &[
    "/upload", "/docs", "/pick", "/docid", "/url", "/status", "/ask", "/json", "/help", "/quit",
    "/exit",
];

const HELP: &str = "\
Commands:
  /upload <file.pdf> [more.pdf ...]  upload PDFs (quote paths containing spaces)
  /docs                              list uploaded documents
  /pick [n|none]                     show the picker, or choose entry n
  /docid [id]                        set the docId override (no id clears it)
  /url [url]                         show or change the backend URL
  /status                            show session state
  /ask <question>                    ask a question (a bare line works too)
  /json [on|off]                     toggle raw JSON output
  /help                              show this help
  /quit                              leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Upload(Vec<PathBuf>),
    Docs,
    /// `None` shows the picker; `Some(0)` is the `none` entry.
    Pick(Option<usize>),
    DocId(String),
    Url(Option<String>),
    Status,
    Ask(String),
    Json(Option<bool>),
    Help,
    Quit,
    Empty,
    Usage(&'static str),
    Unknown(String),
}

pub fn parse_command(line: &str) -> ReplCommand {
    let line = line.trim();

    if line.is_empty() {
        return ReplCommand::Empty;
    }

    if !line.starts_with('/') {
        return ReplCommand::Ask(line.to_string());
    }

    let (name, rest) = match line.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (line, ""),
    };

    match name {
        "/upload" if rest.is_empty() => ReplCommand::Usage("/upload <file.pdf> [more.pdf ...]"),
        "/upload" => match split_paths(rest) {
            Some(paths) => ReplCommand::Upload(paths),
            None => ReplCommand::Usage("/upload <file.pdf> [\"path with spaces.pdf\" ...]"),
        },
        "/docs" => ReplCommand::Docs,
        "/pick" if rest.is_empty() => ReplCommand::Pick(None),
        "/pick" if rest.eq_ignore_ascii_case("none") => ReplCommand::Pick(Some(0)),
        "/pick" => match rest.parse::<usize>() {
            Ok(index) => ReplCommand::Pick(Some(index)),
            Err(_) => ReplCommand::Usage("/pick [n|none]"),
        },
        "/docid" => ReplCommand::DocId(rest.to_string()),
        "/url" if rest.is_empty() => ReplCommand::Url(None),
        "/url" => ReplCommand::Url(Some(rest.to_string())),
        "/status" => ReplCommand::Status,
        "/ask" if rest.is_empty() => ReplCommand::Usage("/ask <question>"),
        "/ask" => ReplCommand::Ask(rest.to_string()),
        "/json" => match rest {
            "" => ReplCommand::Json(None),
            "on" => ReplCommand::Json(Some(true)),
            "off" => ReplCommand::Json(Some(false)),
            _ => ReplCommand::Usage("/json [on|off]"),
        },
        "/help" => ReplCommand::Help,
        "/quit" | "/exit" => ReplCommand::Quit,
        other => ReplCommand::Unknown(other.to_string()),
    }
}

/// Splits `/upload` arguments on whitespace, keeping single- or double-quoted
/// runs together. `None` on an unterminated quote.
fn split_paths(args: &str) -> Option<Vec<PathBuf>> {
    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut in_token = false;

    for c in args.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_token = true;
            }
            None if c.is_whitespace() => {
                if in_token {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                    in_token = false;
                }
            }
            None => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if quote.is_some() {
        return None;
    }
    if in_token {
        paths.push(PathBuf::from(current));
    }
    Some(paths)
}

/// Outcome of one shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Continue(String),
    Quit,
}

pub struct Repl {
    session: SessionClient,
    show_raw_json: bool,
    colored: bool,
}

impl Repl {
    pub fn new(session: SessionClient, ui: &UiConfig) -> Self {
        Self {
            session,
            show_raw_json: ui.show_raw_json,
            colored: ui.color,
        }
    }

    pub fn session(&self) -> &SessionClient {
        &self.session
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut editor: Editor<ReplHelper, DefaultHistory> =
            Editor::new().map_err(|e| ClientError::Terminal(e.to_string()))?;
        editor.set_helper(Some(ReplHelper));

        println!(
            "{}",
            format_info(&format!(
                "Backend: {} (type /help for commands)",
                self.session.state().backend_url()
            ))
        );

        loop {
            let line = match editor.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(e) => return Err(ClientError::Terminal(e.to_string())),
            };

            if !line.trim().is_empty() {
                let _ = editor.add_history_entry(line.as_str());
            }

            match self.execute(parse_command(&line)).await {
                Step::Continue(output) if output.is_empty() => {}
                Step::Continue(output) => println!("{}\n", output),
                Step::Quit => break,
            }
        }

        Ok(())
    }

    pub async fn execute(&mut self, command: ReplCommand) -> Step {
        debug!("Executing {:?}", command);

        let output = match command {
            ReplCommand::Empty => String::new(),
            ReplCommand::Quit => return Step::Quit,
            ReplCommand::Help => HELP.to_string(),
            ReplCommand::Usage(usage) => format_warning(&format!("Usage: {}", usage)),
            ReplCommand::Unknown(name) => {
                format_warning(&format!("Unknown command {} (try /help)", name))
            }
            ReplCommand::Docs => render_documents(self.session.state().documents()),
            ReplCommand::Status => render_status(self.session.state()),
            ReplCommand::Pick(None) => render_picker(self.session.state()),
            ReplCommand::Pick(Some(index)) => match self.session.state_mut().pick(index) {
                Ok(()) => render_picker(self.session.state()),
                Err(e) => format_warning(&e.to_string()),
            },
            ReplCommand::DocId(doc_id) => {
                self.session.state_mut().set_selected_doc_id(doc_id);
                render_status(self.session.state())
            }
            ReplCommand::Url(None) => self.session.state().backend_url().to_string(),
            ReplCommand::Url(Some(url)) => match self.session.state_mut().set_backend_url(&url) {
                Ok(()) => format_success(&format!("Backend URL set to {}", url.trim())),
                Err(e) => format_warning(&e.to_string()),
            },
            ReplCommand::Json(toggle) => {
                self.show_raw_json = toggle.unwrap_or(!self.show_raw_json);
                format_info(&format!(
                    "Raw JSON {}",
                    if self.show_raw_json { "on" } else { "off" }
                ))
            }
            ReplCommand::Upload(paths) => self.upload(&paths).await,
            ReplCommand::Ask(question) => self.ask(&question).await,
        };

        Step::Continue(output)
    }

    async fn upload(&mut self, paths: &[PathBuf]) -> String {
        let files = match paths
            .iter()
            .map(|path| PdfFile::from_path(path))
            .collect::<Result<Vec<_>>>()
        {
            Ok(files) => files,
            Err(e) => return render_failure(Operation::Upload, &e),
        };

        let result = {
            let _spinner = Spinner::start(Operation::Upload.busy_message(), self.colored);
            self.session.upload_documents(&files).await
        };

        match result {
            Ok(outcome) => format!(
                "{}\n\n{}",
                render_upload(&outcome, self.show_raw_json),
                render_documents(self.session.state().documents())
            ),
            Err(e) => render_failure(Operation::Upload, &e),
        }
    }

    async fn ask(&self, question: &str) -> String {
        let result = {
            let _spinner = Spinner::start(Operation::Ask.busy_message(), self.colored);
            self.session.ask(question).await
        };

        match result {
            Ok(answer) => render_answer(&answer, self.show_raw_json),
            Err(e) => render_failure(Operation::Ask, &e),
        }
    }
}

/// Completes slash commands at the start of the line.
struct ReplHelper;

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if !line.starts_with('/') || line.contains(char::is_whitespace) {
            return Ok((0, vec![]));
        }

        let candidates = COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Hinter for ReplHelper {
    type Hint = String;
}

impl Highlighter for ReplHelper {}

impl LineValidator for ReplHelper {}

impl Helper for ReplHelper {}
