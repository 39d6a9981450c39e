//! Completions command implementation
//!
//! Handles the `tweak-catalog completions` command which generates
//! shell completion scripts for bash, zsh, fish, etc.

use clap::{Arg, ArgAction, Command};
use clap_complete::{generate, Shell};
use std::io::Write;

use crate::catalog::Category;

const BIN_NAME: &str = "tweak-catalog";

/// Command tree used for completion scripts
///
/// Category arguments complete to the fixed category names.
pub fn completion_command() -> Command {
    let categories: Vec<&'static str> = Category::ALL.iter().map(|c| c.as_str()).collect();
    let category_arg = || {
        Arg::new("category")
            .required(true)
            .value_parser(categories.clone())
    };
    let locale_arg = || Arg::new("locale").long("locale").short('l');
    let json_arg = || Arg::new("json").long("json").action(ArgAction::SetTrue);

    Command::new(BIN_NAME)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bilingual catalog of Windows performance tweaks")
        .arg(
            Arg::new("no-emoji")
                .long("no-emoji")
                .help("Disable emoji output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(Arg::new("config").long("config").short('c').global(true))
        .subcommand(
            Command::new("categories")
                .about("List tweak categories")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("list")
                .about("List the tweaks of a category")
                .arg(category_arg())
                .arg(locale_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("show")
                .about("Show one tweak")
                .arg(category_arg())
                .arg(Arg::new("id").required(true))
                .arg(locale_arg())
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("validate")
                .about("Check catalog data")
                .arg(json_arg()),
        )
        .subcommand(
            Command::new("sitemap")
                .about("Generate sitemap XML")
                .arg(Arg::new("base-url").long("base-url"))
                .arg(Arg::new("output").long("output").short('o'))
                .arg(Arg::new("date").long("date")),
        )
        .subcommand(Command::new("init").about("Create a configuration file"))
        .subcommand(
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .required(true)
                        .value_parser(clap::value_parser!(Shell)),
                ),
        )
}

/// Write a completion script for `shell` to `out`
pub fn write_completions(shell: Shell, out: &mut dyn Write) {
    let mut cmd = completion_command();
    generate(shell, &mut cmd, BIN_NAME, out);
}

/// Generate shell completion scripts
///
/// Outputs completion script for the specified shell to stdout.
/// Users can redirect this to their shell's completion directory.
///
/// # Examples
///
/// ```bash
/// # Bash
/// tweak-catalog completions bash > /etc/bash_completion.d/tweak-catalog
///
/// # Zsh
/// tweak-catalog completions zsh > ~/.zfunc/_tweak-catalog
///
/// # Fish
/// tweak-catalog completions fish > ~/.config/fish/completions/tweak-catalog.fish
/// ```
pub fn cmd_completions(shell: Shell) {
    write_completions(shell, &mut std::io::stdout());
}
