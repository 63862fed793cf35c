use anchorsort_core::batch::{BatchOptions, BatchProgressCallback, FileEvent, run_batch};
use anchorsort_core::input::{ColumnSpec, DEFAULT_ANCHOR_COLUMN, DEFAULT_TARGET_COLUMN, InputFile};
use anchorsort_core::report::{ReportFormat, export_results, generate_text_report};
use anchorsort_core::rules::{ClassifierRules, KeywordSet};
use anchorsort_core::{BatchSummary, Classifier};
use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::Level;

pub const EXIT_NO_RESULTS: i32 = 1;
pub const EXIT_CONFIG: i32 = 2;

/// Log level for a repeated `-v` count; warnings are always shown.
pub fn verbosity_level(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

pub fn init_tracing(verbosity: u8) {
    let level = verbosity_level(verbosity);

    // A subscriber may already be installed when handlers run inside tests
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

pub fn print_banner() {
    println!(
        "{} {}",
        "anchorsort".bright_cyan().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("{}", "backlink anchor text categorizer".bright_black());
    println!();
}

fn print_divider() {
    println!("{}", "═".repeat(60).bright_blue().bold());
}

/// Parse a delimiter argument: a single ASCII character, or `tab` / `\t`.
pub fn parse_delimiter(value: &str) -> Result<u8> {
    match value {
        "tab" | "\\t" | "\t" => Ok(b'\t'),
        _ => {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii() => Ok(c as u8),
                _ => bail!(
                    "Delimiter must be a single ASCII character or 'tab', got '{}'",
                    value
                ),
            }
        }
    }
}

/// Built-in keyword list unless a keyword file is given.
pub fn load_rules(keywords_file: Option<&PathBuf>) -> Result<ClassifierRules> {
    let rules = ClassifierRules::default();
    match keywords_file {
        Some(path) => {
            let keywords = KeywordSet::from_file(path)?;
            Ok(rules.with_keywords(keywords))
        }
        None => Ok(rules),
    }
}

pub fn load_input_files(paths: &[PathBuf]) -> Vec<InputFile> {
    paths.iter().map(|p| InputFile::from_path(p)).collect()
}

/// Expand `~` in a user-supplied output path, or fall back to the default
/// file name for the format in the current directory.
pub fn resolve_output_path(output: Option<&String>, format: ReportFormat) -> PathBuf {
    match output {
        Some(path) => PathBuf::from(shellexpand::tilde(path).into_owned()),
        None => PathBuf::from(format.default_file_name()),
    }
}

pub fn column_spec_from_args(args: &ArgMatches) -> Result<ColumnSpec> {
    let anchor = args
        .get_one::<String>("anchor-column")
        .cloned()
        .unwrap_or_else(|| DEFAULT_ANCHOR_COLUMN.to_string());
    let target_url = args
        .get_one::<String>("target-column")
        .cloned()
        .unwrap_or_else(|| DEFAULT_TARGET_COLUMN.to_string());
    let delimiter = match args.get_one::<String>("delimiter") {
        Some(value) => parse_delimiter(value)?,
        None => b',',
    };

    Ok(ColumnSpec {
        anchor,
        target_url,
        delimiter,
    })
}

fn progress_bar(total: usize, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(total as u64);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    pb.set_style(style);
    pb.set_message("Processing files...");
    pb
}

fn file_status_line(event: &FileEvent<'_>) -> String {
    match event.outcome {
        Ok(result) => format!(
            "{} {} {}",
            "✓".green().bold(),
            event.file_name.bright_white(),
            format!("({} anchors)", result.tally.total()).bright_black()
        ),
        Err(e) if e.is_skip() => format!(
            "{} Skipping {}: {}",
            "⚠".yellow().bold(),
            event.file_name.bright_white(),
            e
        ),
        Err(e) => format!(
            "{} Error processing {}: {}",
            "✗".red().bold(),
            event.file_name.bright_white(),
            e
        ),
    }
}

/// Returns the process exit code.
pub fn handle_classify(args: &ArgMatches, quiet: bool) -> i32 {
    let paths: Vec<PathBuf> = args
        .get_many::<PathBuf>("FILES")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let format = args
        .get_one::<String>("format")
        .and_then(|f| ReportFormat::from_str(f))
        .unwrap_or(ReportFormat::Xlsx);
    let output_path = resolve_output_path(args.get_one::<String>("output"), format);

    let options = match build_batch_options(args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{} {:#}", "✗".red().bold(), e);
            return EXIT_CONFIG;
        }
    };

    let files = load_input_files(&paths);

    if !quiet {
        print_divider();
        println!(
            "{}",
            format!("  ANCHOR ANALYSIS: {} file(s)", files.len())
                .bright_white()
                .bold()
        );
        print_divider();
        println!(
            "{} Columns: '{}' / '{}'",
            "→".blue(),
            options.columns.anchor,
            options.columns.target_url
        );
        println!(
            "{} Exact-match keywords: {}",
            "→".blue(),
            options.classifier.rules().keywords.len().to_string().cyan()
        );
        println!();
    }

    let pb = progress_bar(files.len(), quiet);
    let pb_clone = pb.clone();
    let progress_callback: BatchProgressCallback = Arc::new(move |event: &FileEvent<'_>| {
        let line = file_status_line(event);
        pb_clone.suspend(|| {
            if event.outcome.is_ok() {
                if !quiet {
                    println!("{}", line);
                }
            } else {
                eprintln!("{}", line);
            }
        });
        pb_clone.set_position(event.completed as u64);
    });

    let summary = run_batch(&files, &options, Some(progress_callback));
    pb.finish_and_clear();

    report_summary(&summary, format, &output_path, quiet)
}

fn build_batch_options(args: &ArgMatches) -> Result<BatchOptions> {
    let columns = column_spec_from_args(args)?;
    let rules = load_rules(args.get_one::<PathBuf>("keywords"))
        .context("Could not load exact-match keywords")?;

    Ok(BatchOptions {
        columns,
        classifier: Classifier::new(rules),
    })
}

/// Print the combined table and write the export. Returns the exit code.
pub fn report_summary(
    summary: &BatchSummary,
    format: ReportFormat,
    output_path: &Path,
    quiet: bool,
) -> i32 {
    if !summary.has_results() {
        println!();
        println!("{} No valid data processed.", "⚠".yellow().bold());
        return EXIT_NO_RESULTS;
    }

    println!();
    print!("{}", generate_text_report(&summary.results));
    println!();

    if let Err(e) = export_results(&summary.results, format, output_path) {
        eprintln!(
            "{} Could not write {}: {}",
            "✗".red().bold(),
            output_path.display(),
            e
        );
        return EXIT_CONFIG;
    }

    println!("{} Analysis complete!", "✓".green().bold());
    if !quiet {
        let skipped = summary.skipped().count();
        let failed = summary.failed().count();
        println!(
            "{} Processed {} of {} file(s) ({} skipped, {} failed)",
            "→".blue(),
            summary.results.len().to_string().cyan(),
            summary.total_files,
            skipped,
            failed
        );
    }
    println!(
        "{} Results saved to: {}",
        "✓".green().bold(),
        output_path.display().to_string().bright_white()
    );

    0
}

/// Render a keyword list in the format `KeywordSet::from_file` reads back.
pub fn render_keyword_file(keywords: &KeywordSet) -> String {
    let mut content = String::from("# Exact-match anchor keywords, one phrase per line\n");
    for phrase in keywords.sorted() {
        content.push_str(phrase);
        content.push('\n');
    }
    content
}

pub fn handle_keywords(args: &ArgMatches) -> i32 {
    let keywords = KeywordSet::default();
    let content = render_keyword_file(&keywords);

    match args.get_one::<String>("output") {
        Some(output) => {
            let path = PathBuf::from(shellexpand::tilde(output).into_owned());
            match fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))
            {
                Ok(()) => {
                    println!(
                        "{} {} keywords written to {}",
                        "✓".green().bold(),
                        keywords.len().to_string().cyan(),
                        path.display().to_string().bright_white()
                    );
                    0
                }
                Err(e) => {
                    eprintln!("{} {:#}", "✗".red().bold(), e);
                    EXIT_CONFIG
                }
            }
        }
        None => {
            print!("{}", content);
            0
        }
    }
}
