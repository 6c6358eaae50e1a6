mod samples;

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use desk_core::{Action, InboundMessage};
use desk_observability::{init_tracing, AppMetrics};
use desk_triage::{DeskConfig, TriageDesk, TriageReport};

#[derive(Debug, Parser)]
#[command(name = "triage")]
#[command(about = "Municipal inbox triage: route complete requests, draft clarifications for the rest")]
struct Cli {
    /// JSON file with extra given names/honorifics for entity recognition.
    #[arg(long, global = true, env = "DESK_GAZETTEER")]
    gazetteer: Option<PathBuf>,

    /// JSON file with extra female/male given names for salutations.
    #[arg(long, global = true, env = "DESK_NAME_LEXICON")]
    name_lexicon: Option<PathBuf>,

    /// Print pipeline counters when done.
    #[arg(long, global = true)]
    metrics: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Walk through the built-in sample messages.
    Demo {
        /// Wait for ENTER between messages.
        #[arg(long)]
        step: bool,
    },
    Process {
        #[arg(long)]
        sender: String,
        #[arg(long, conflicts_with = "file")]
        text: Option<String>,
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Process a JSONL file of `{"sender", "text"}` objects in parallel.
    Batch {
        path: PathBuf,
        #[arg(long)]
        json: bool,
    },
    Classify {
        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("desk_cli");
    let cli = Cli::parse();

    let mut config = DeskConfig::from_env()?;
    if cli.gazetteer.is_some() {
        config.entity_source.gazetteer_path = cli.gazetteer.clone();
    }
    if cli.name_lexicon.is_some() {
        config.name_lexicon_path = cli.name_lexicon.clone();
    }

    let desk = TriageDesk::from_config(&config, AppMetrics::shared())
        .context("triage desk failed to start")?;

    match cli.command {
        Command::Demo { step } => run_demo(&desk, step)?,
        Command::Process {
            sender,
            text,
            file,
            json,
        } => {
            let text = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => fs::read_to_string(&path)
                    .with_context(|| format!("failed reading message from {}", path.display()))?,
                (None, None) => bail!("either --text or --file is required"),
            };

            let report = desk.process_detailed(&InboundMessage::new(sender, text));
            print_report(&report, json)?;
        }
        Command::Batch { path, json } => run_batch(&desk, &path, json).await?,
        Command::Classify { text } => println!("{}", desk.classify(&text)),
    }

    if cli.metrics {
        println!(
            "{}",
            serde_json::to_string_pretty(&desk.metrics().snapshot())?
        );
    }

    Ok(())
}

fn run_demo(desk: &TriageDesk, step: bool) -> Result<()> {
    let samples = samples::demo_messages();
    let total = samples.len();

    println!("\n{}", "=".repeat(70));
    println!(" INBOX TRIAGE SIMULATION: MUNICIPAL SERVICE DESK ");
    println!("{}", "=".repeat(70));

    for (idx, message) in samples.iter().enumerate() {
        println!("\n[INBOUND {}/{}] FROM: {}", idx + 1, total, message.sender);
        println!("\n--- ORIGINAL FREE TEXT ---");
        println!("\"{}\"", message.text);
        println!("--------------------------\n");

        let report = desk.process_detailed(message);
        print_report(&report, false)?;
        println!("\n{}", "-".repeat(70));

        if step && idx + 1 < total {
            print!("\n>>> Press [ENTER] for the next example...");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
        }
    }

    Ok(())
}

async fn run_batch(desk: &TriageDesk, path: &Path, json: bool) -> Result<()> {
    let file = fs::File::open(path)
        .with_context(|| format!("failed opening batch file {}", path.display()))?;

    let mut messages = Vec::new();
    for (line_no, line) in io::BufReader::new(file).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let parsed: InboundMessage = serde_json::from_str(&line)
            .with_context(|| format!("invalid message on line {}", line_no + 1))?;
        messages.push(InboundMessage::new(parsed.sender, parsed.text));
    }

    let handles = messages
        .into_iter()
        .map(|message| {
            let desk = desk.clone();
            tokio::task::spawn_blocking(move || desk.process_detailed(&message))
        })
        .collect::<Vec<_>>();

    for handle in handles {
        let report = handle.await.context("triage worker panicked")?;
        print_report(&report, json)?;
        if !json {
            println!("\n{}", "-".repeat(70));
        }
    }

    Ok(())
}

fn print_report(report: &TriageReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!(
        "[ROUTING] {} - {}",
        report.run.office_code, report.run.department
    );
    if !report.entities.is_empty() {
        let spans = report
            .entities
            .iter()
            .map(|entity| format!("{}: {}", entity.label.as_code(), entity.text))
            .collect::<Vec<_>>()
            .join(", ");
        println!("[ENTITIES] {spans}");
    }
    match report.run.output.action {
        Action::Reject => {
            println!("[SYSTEM CHECK] INCOMPLETE. Processing blocked.");
            println!("[ACTION] Automatic clarification with the citizen initiated:\n");
        }
        Action::Route => {
            println!("[SYSTEM CHECK] COMPLETE. Forwarding to department.");
            println!("[ACTION] Building data cockpit for the caseworker:\n");
        }
    }
    println!("{}", report.run.output.rendered_text);
    Ok(())
}
