use crate::CLAP_STYLING;
use anchorsort_core::input::{DEFAULT_ANCHOR_COLUMN, DEFAULT_TARGET_COLUMN};
use clap::{arg, command};

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("anchorsort")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("anchorsort")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-v --"verbose" ...)
                .help("Increase log verbosity above warnings (-v info, -vv debug, -vvv trace)")
                .required(false),
        )
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            command!("classify")
                .about(
                    "Categorize the anchors of one or more backlink exports into branded, \
                exact match, naked URL and other generic counts.",
                )
                .arg(
                    arg!(<FILES> ...)
                        .help("Backlink export files (CSV) to analyse, processed in order")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(--"anchor-column" <NAME>)
                        .required(false)
                        .help("Header of the column holding the anchor text")
                        .default_value(DEFAULT_ANCHOR_COLUMN),
                )
                .arg(
                    arg!(--"target-column" <NAME>)
                        .required(false)
                        .help("Header of the column holding the target URL")
                        .default_value(DEFAULT_TARGET_COLUMN),
                )
                .arg(
                    arg!(-d --"delimiter" <CHAR>)
                        .required(false)
                        .help("Field delimiter of the input files ('tab' for TSV)")
                        .default_value(","),
                )
                .arg(
                    arg!(-k --"keywords" <PATH>)
                        .required(false)
                        .help(
                            "Newline-delimited exact-match keyword list (default: built-in \
                        casino vertical list)",
                        )
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Where to save the combined table (default: combined_anchor_counts.<ext>)"),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Export format: xlsx, csv, json, markdown, text")
                        .value_parser(["xlsx", "csv", "json", "markdown", "text"])
                        .default_value("xlsx"),
                ),
        )
        .subcommand(
            command!("keywords")
                .about("Print the built-in exact-match keyword list, ready to edit and pass to --keywords")
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Write the list to a file instead of standard output"),
                ),
        )
}
