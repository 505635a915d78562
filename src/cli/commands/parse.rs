//! Parse command implementation
//!
//! Discovers input tables, parses them into one dataset and writes the JSON
//! database to a file or stdout.

use anyhow::{Context, Result};
use colored::*;
use std::io::Write;
use std::path::Path;
use std::time::Instant;
use tracing::info;

use super::shared::{create_progress_bar, setup_logging};
use crate::cli::args::ParseArgs;
use crate::database::{to_json_string, write_database};
use crate::discovery::resolve_inputs;
use crate::parser::{CrcParser, ParseResult};

/// Run the parse command
pub fn run_parse(args: ParseArgs) -> Result<ParseResult> {
    setup_logging(args.get_log_level(), args.quiet);
    args.validate()?;

    let start_time = Instant::now();
    let config = args.to_config().context("Failed to load configuration")?;
    let pretty = config.pretty;

    let files = resolve_inputs(&args.inputs).context("Failed to resolve inputs")?;
    info!("Discovered {} input files", files.len());

    let progress_bar = create_progress_bar(files.len() as u64, args.show_progress());
    let parser = CrcParser::new(config);
    let result = parser
        .parse_files(&files, Some(&progress_bar))
        .context("Failed to parse CRC tables")?;
    progress_bar.finish_and_clear();

    let output = args.output_path();
    match &output {
        Some(path) => write_database(path, &result.entries, pretty)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => {
            let json = to_json_string(&result.entries, pretty)?;
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
        }
    }

    if !args.quiet {
        print_summary(output.as_deref(), &result, start_time.elapsed().as_millis());
    }

    Ok(result)
}

/// Summary goes to stderr so stdout stays valid JSON
fn print_summary(output: Option<&Path>, result: &ParseResult, elapsed_ms: u128) {
    let stats = &result.stats;

    eprintln!("\n{}", "Parsing Summary".bright_green().bold());
    eprintln!(
        "  {} {}ms",
        "Time elapsed:".bright_cyan(),
        elapsed_ms.to_string().bright_white()
    );
    eprintln!(
        "  {} {}",
        "Files parsed:".bright_cyan(),
        stats.files_parsed.to_string().bright_white()
    );
    eprintln!(
        "  {} {} of {} ({:.1}%)",
        "Rows parsed:".bright_cyan(),
        stats.rows_parsed.to_string().bright_white().bold(),
        stats.total_rows,
        stats.success_rate()
    );
    for (reason, count) in &stats.skipped_by_reason {
        eprintln!(
            "  {} {} ({})",
            "Rows skipped:".bright_yellow(),
            count.to_string().bright_yellow(),
            reason
        );
    }
    if !stats.errors.is_empty() {
        eprintln!(
            "  {} {}",
            "Errors:".bright_red(),
            stats.errors.len().to_string().bright_red().bold()
        );
        for error in stats.errors.iter().take(5) {
            eprintln!("    {}", error.red());
        }
    }
    eprintln!(
        "  {} {}",
        "Entries written:".bright_cyan(),
        result.entries.len().to_string().bright_white().bold()
    );
    if let Some(output) = output {
        eprintln!(
            "  {} {}",
            "Output:".bright_cyan(),
            output.display().to_string().bright_white()
        );
    }
}
