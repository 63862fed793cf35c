use anchorsort::handlers::{handle_classify, handle_keywords, init_tracing, print_banner};
use commands::command_argument_builder;

mod commands;

fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    init_tracing(chosen_command.get_count("verbose"));

    let exit_code = match chosen_command.subcommand() {
        Some(("classify", primary_command)) => {
            // Show banner unless --quiet flag is set
            if !quiet {
                print_banner();
            }
            handle_classify(primary_command, quiet)
        }
        Some(("keywords", primary_command)) => handle_keywords(primary_command),
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
