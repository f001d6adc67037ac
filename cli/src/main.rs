//! PromptForge CLI binary: analyze a prompt, apply suggestions, export.
//!
//! Default mode runs the heuristic engine in-process; `--remote` sends the
//! prompt to a running `promptforge serve`. The `serve` subcommand starts
//! that server.

use chrono::Local;
use clap::{Parser, Subcommand};
use cli::{render_report, AnalyzeBackend, LocalBackend, RemoteBackend, RunError};
use promptforge::{apply_all, export_file_name, markdown_document};
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

const DEFAULT_REMOTE_URL: &str = "http://127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(name = "promptforge")]
#[command(about = "PromptForge — analyze and optimize prompts for AI agents")]
struct Args {
    #[command(subcommand)]
    cmd: Option<Command>,

    /// Prompt text (or pass as first positional argument)
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Positional args: prompt text when -m/--message is not used
    #[arg(trailing_var_arg = true)]
    rest: Vec<String>,

    /// Read the prompt from a file
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Objective: what the prompt should achieve (biases some checks)
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    objective: String,

    /// Analyze via a running server instead of in-process
    #[arg(long)]
    remote: bool,

    /// Server URL for --remote (default: http://127.0.0.1:8080 or PROMPTFORGE_REMOTE_URL)
    #[arg(long, value_name = "URL")]
    remote_url: Option<String>,

    /// Print the prompt with every suggestion applied instead of the optimized rewrite
    #[arg(long)]
    apply_all: bool,

    /// Apply only the suggestion with this id (repeatable); keeps analysis order
    #[arg(long = "apply", value_name = "ID")]
    apply: Vec<String>,

    /// Output the full analysis as JSON
    #[arg(long)]
    json: bool,

    /// With --json, pretty-print (multi-line). Default: compact
    #[arg(long)]
    pretty: bool,

    /// Write the resulting prompt to this file, or into this directory with
    /// the dated name prompt-YYYY-MM-DD.{txt,md}
    #[arg(long, value_name = "PATH")]
    out: Option<PathBuf>,

    /// With --out, write the Markdown document form instead of plain text
    #[arg(long)]
    markdown: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP analysis server
    Serve {
        /// Address to listen on (default 127.0.0.1:8080)
        #[arg(long, value_name = "ADDR")]
        addr: Option<String>,
    },
}

fn init_logging() {
    use tracing_subscriber::EnvFilter;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_remote_url(args: &Args) -> String {
    if let Some(ref url) = args.remote_url {
        return url.clone();
    }
    std::env::var("PROMPTFORGE_REMOTE_URL").unwrap_or_else(|_| DEFAULT_REMOTE_URL.to_string())
}

/// Prompt text from, in order: -m/--message, positional args, --file,
/// piped stdin.
fn resolve_prompt(args: &Args) -> Result<String, RunError> {
    if let Some(ref message) = args.message {
        return Ok(message.clone());
    }
    if !args.rest.is_empty() {
        return Ok(args.rest.join(" "));
    }
    if let Some(ref path) = args.file {
        return std::fs::read_to_string(path).map_err(|source| RunError::ReadFile {
            path: path.display().to_string(),
            source,
        });
    }
    let mut stdin = std::io::stdin();
    if !stdin.is_terminal() {
        let mut buf = String::new();
        if stdin.read_to_string(&mut buf).is_ok() && !buf.trim().is_empty() {
            return Ok(buf);
        }
    }
    Err(RunError::NoPrompt)
}

async fn run(args: Args) -> Result<(), RunError> {
    if let Some(Command::Serve { ref addr }) = args.cmd {
        return serve::run_serve(addr.as_deref(), false)
            .await
            .map_err(|e| RunError::Serve(e.to_string()));
    }

    let prompt = resolve_prompt(&args)?;
    let report = if args.remote {
        RemoteBackend::new(resolve_remote_url(&args))
            .analyze(&prompt, &args.objective)
            .await?
    } else {
        LocalBackend.analyze(&prompt, &args.objective).await?
    };

    let final_prompt = if args.apply_all {
        apply_all(&prompt, report.suggestions())
    } else if !args.apply.is_empty() {
        let selected: Vec<_> = report
            .suggestions()
            .iter()
            .filter(|s| args.apply.contains(&s.id))
            .cloned()
            .collect();
        apply_all(&prompt, &selected)
    } else {
        report.optimized_prompt().to_string()
    };

    if args.json {
        let value = report.to_json()?;
        let line = if args.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        println!("{line}");
    } else {
        print!("{}", render_report(&report));
        println!("--- Prompt final ---");
        println!("{final_prompt}");
    }

    if let Some(ref path) = args.out {
        let now = Local::now();
        let (content, extension) = if args.markdown {
            (markdown_document(&final_prompt, now), "md")
        } else {
            (final_prompt.clone(), "txt")
        };
        let path = if path.is_dir() {
            path.join(export_file_name(now, extension))
        } else {
            path.clone()
        };
        std::fs::write(&path, content).map_err(|source| RunError::WriteOutput {
            path: path.display().to_string(),
            source,
        })?;
        eprintln!("saved: {}", path.display());
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    if let Err(e) = config::load_and_apply(config::APP_NAME, None) {
        tracing::warn!("config load failed, continuing with process env only: {e}");
    }
    let args = Args::parse();
    if let Err(e) = run(args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
