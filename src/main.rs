//! Confirmify CLI - alert() to confirm-dialog migration codemod
//!
//! Usage: confirmify <COMMAND>
//!
//! Commands:
//!   run    Migrate alert() calls under the configured root
//!   diff   Preview changes without writing
//!   rules  Print the substitution rule table

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use confirmify::config::{ColorMode, Config};
use confirmify::engine::{EngineOptions, FileOutcome, MigrationEngine};
use confirmify::models::RuleOrder;
use confirmify::patch::Patcher;
use confirmify::rules::RuleSet;
use confirmify::ui::json::JsonEventSink;
use confirmify::ui::{diff, report, terminal};
use confirmify::walker;

/// Confirmify - alert() to confirm-dialog migration codemod
#[derive(Parser, Debug)]
#[command(name = "confirmify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit NDJSON events instead of human-readable output
    #[arg(long, default_value = "false")]
    json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Migrate alert() calls under the configured root
    Run {
        /// Directory to scan (defaults to the configured root)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Run the full pipeline but write nothing back
        #[arg(long)]
        dry_run: bool,

        /// Print a unified diff for each changed file
        #[arg(long)]
        diff: bool,

        /// Rule ordering: legacy or specific-first
        #[arg(long)]
        rule_order: Option<String>,
    },

    /// Preview changes without writing (same as run --dry-run --diff)
    Diff {
        /// Directory to scan (defaults to the configured root)
        #[arg(long)]
        root: Option<PathBuf>,

        /// Rule ordering: legacy or specific-first
        #[arg(long)]
        rule_order: Option<String>,
    },

    /// Print the substitution rule table
    Rules {
        /// Rule ordering: legacy or specific-first
        #[arg(long)]
        rule_order: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            root,
            dry_run,
            diff,
            rule_order,
        } => cmd_run(root, dry_run, diff, rule_order, cli.json, cli.verbose),
        Commands::Diff { root, rule_order } => {
            cmd_run(root, true, true, rule_order, cli.json, cli.verbose)
        }
        Commands::Rules { rule_order } => cmd_rules(rule_order),
    }
}

fn parse_order(flag: Option<String>, fallback: RuleOrder) -> Result<RuleOrder> {
    match flag {
        Some(value) => value.parse::<RuleOrder>().map_err(|e| anyhow::anyhow!(e)),
        None => Ok(fallback),
    }
}

fn cmd_run(
    root_flag: Option<PathBuf>,
    dry_run: bool,
    show_diff: bool,
    rule_order_flag: Option<String>,
    json: bool,
    verbose: u8,
) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, warnings) = Config::load_or_default(&cwd)?;

    let order = parse_order(rule_order_flag, config.rules.order)?;
    let root = root_flag.unwrap_or_else(|| config.paths.root.clone());
    let extension = config.paths.extension.clone();

    let caps = terminal::detect_capabilities();
    let color = match config.output.color {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => caps.supports_color && !caps.is_ci,
    };
    let unicode = caps.supports_unicode;

    if !json {
        for warning in &warnings {
            eprintln!(
                "warning: unknown config key '{}' in {}",
                warning.key,
                warning.file.display()
            );
        }
    }

    let patcher = Patcher::new(RuleSet::new(order)?)?;
    let engine = MigrationEngine::new(patcher, EngineOptions { dry_run });
    let files = walker::discover_files(&root, &extension);

    let sink = if json { Some(JsonEventSink::stdout()) } else { None };

    if let Some(sink) = &sink {
        sink.emit_start(&root, order, files.len(), dry_run);
    } else {
        let mut modes = Vec::new();
        if dry_run {
            modes.push("dry-run".to_string());
        }
        if show_diff {
            modes.push("diff".to_string());
        }
        println!("{}", report::render_header(&root, order, &modes, color, unicode));
        if verbose > 0 {
            println!("Extension: .{extension}");
        }
        println!("{}", report::render_file_count(files.len()));
    }

    let summary = engine.run(&files, &mut |outcome: &FileOutcome| {
        if let Some(sink) = &sink {
            sink.emit_file(&outcome.report);
            return;
        }

        println!(
            "{}",
            report::render_file_line(&outcome.report, dry_run, color, unicode)
        );
        if show_diff {
            if let Some(change) = &outcome.change {
                print!(
                    "{}",
                    diff::render_unified_diff(
                        &outcome.report.path.display().to_string(),
                        &change.original,
                        &change.patched,
                        color,
                    )
                );
            }
        }
    });

    if let Some(sink) = &sink {
        sink.emit_summary(&summary);
    } else {
        println!();
        println!("{}", report::render_summary(&summary, dry_run, color));
    }

    // Per-file failures are reported in the summary; the run itself succeeds.
    Ok(())
}

fn cmd_rules(rule_order_flag: Option<String>) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let (config, _) = Config::load_or_default(&cwd)?;
    let order = parse_order(rule_order_flag, config.rules.order)?;

    let rules = RuleSet::new(order)?;
    println!("Rule order: {order}");
    for (i, rule) in rules.iter().enumerate() {
        println!("{:>2}. {} [{} / {}]", i + 1, rule.name, rule.title, rule.severity);
        println!("    match:   {}", rule.pattern);
        println!("    rewrite: {}", rule.replacement);
    }
    Ok(())
}
