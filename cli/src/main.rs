mod client;

use std::io::{self, Read};
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use correction::{Correction, CorrectionError, DEFAULT_CORRECTION_ENDPOINT, Notice, PanelState};

use crate::client::CorrectionClient;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Rejected(Notice),
    #[error("{}", Notice::Unreachable)]
    Transport(#[source] CorrectionError),
    #[error("failed to read stdin: {0}")]
    Stdin(#[from] io::Error),
    #[error("http client setup failed: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("invalid JSON output: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "spellfix-cli", about = "Send text to a spelling-correction service")]
struct Cli {
    #[arg(long, env = "SPELLFIX_CORRECTION_ENDPOINT", default_value = DEFAULT_CORRECTION_ENDPOINT)]
    endpoint: String,

    #[arg(long, env = "SPELLFIX_REQUEST_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,

    #[arg(long, default_value_t = false, help = "Print the normalized correction as JSON")]
    json: bool,

    #[arg(default_value = "-", help = "Text to correct, or - for stdin")]
    text: String,
}

/// What a finished run prints.
#[derive(Debug)]
struct Report {
    stdout: String,
    notice: Option<Notice>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let outcome = match read_input(&cli.text) {
        Ok(text) => run(&cli, text).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => {
            if let Some(notice) = report.notice {
                eprintln!("{notice}");
            }
            println!("{}", report.stdout);
            ExitCode::SUCCESS
        }
        Err(CliError::Transport(source)) => {
            eprintln!("{}", Notice::Unreachable);
            eprintln!("  cause: {source}");
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn read_input(arg: &str) -> Result<String, CliError> {
    if arg != "-" {
        return Ok(arg.to_owned());
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Drive one submit/settle cycle of the panel against the service.
async fn run(cli: &Cli, text: String) -> Result<Report, CliError> {
    let mut panel = PanelState::default();
    panel.set_input(text);
    let Some(pending) = panel.begin_submit() else {
        return Err(CliError::Rejected(panel.notice.unwrap_or(Notice::EmptyInput)));
    };

    let client = CorrectionClient::new(&cli.endpoint, Duration::from_secs(cli.timeout_secs))?;
    let outcome = client.correct(pending.text()).await;
    let failure = outcome.as_ref().err().cloned();
    panel.settle(&pending, outcome);
    if let Some(source) = failure {
        return Err(CliError::Transport(source));
    }

    let stdout = if cli.json { render_json(&panel)? } else { render_text(&panel) };
    Ok(Report { stdout, notice: panel.notice })
}

fn render_text(panel: &PanelState) -> String {
    let mut out = panel.output_text().to_owned();
    if let Some(detail) = panel.detail_view() {
        out.push_str("\n\nDetails:");
        for line in detail.lines {
            out.push_str("\n  ");
            out.push_str(&line);
        }
    }
    out
}

fn render_json(panel: &PanelState) -> Result<String, CliError> {
    let correction =
        Correction { corrected: panel.corrected.clone(), detail: panel.detail.clone(), from_input: false };
    Ok(serde_json::to_string_pretty(&correction)?)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
