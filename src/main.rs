use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use std::process;
use tweak_catalog::cmd;

/// Bilingual catalog of Windows performance tweaks
///
/// tweak-catalog lists, shows and validates documented Windows tweaks
/// (registry edits, netsh and PowerShell commands) in English and Spanish,
/// and generates the site's sitemap.
#[derive(Parser)]
#[command(author, version, about = "Bilingual catalog of Windows performance tweaks", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Disable emoji output (useful for CI/CD or accessibility)
    #[arg(long, global = true)]
    no_emoji: bool,

    /// Configuration file (defaults to ./.tweak-catalog.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tweak categories
    Categories {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the tweaks of a category
    List {
        /// Category name, e.g. network or latency_timers
        category: String,

        /// Language code; unsupported codes fall back to the default locale
        #[arg(short, long)]
        locale: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one tweak with every step
    Show {
        /// Category name
        category: String,

        /// Tweak id, e.g. block-smb-port
        id: String,

        /// Language code; unsupported codes fall back to the default locale
        #[arg(short, long)]
        locale: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check catalog data (parity, ids, command blocks)
    Validate {
        /// Output as JSON (for CI/CD integration)
        #[arg(long)]
        json: bool,
    },

    /// Generate sitemap XML
    Sitemap {
        /// Site root, overrides sitemap.base-url
        #[arg(long)]
        base_url: Option<String>,

        /// Write to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Last-modified date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Initialize tweak-catalog configuration
    Init,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    // Initialize logger (use RUST_LOG env var to control verbosity)
    env_logger::init();

    let cli = Cli::parse();

    // Set console emoji mode based on CLI flag
    if cli.no_emoji {
        std::env::set_var("NO_EMOJI", "1");
    }

    let config = cli.config.as_deref();
    let result = match &cli.command {
        Some(Commands::Categories { json }) => cmd::cmd_categories(config, *json),
        Some(Commands::List {
            category,
            locale,
            json,
        }) => cmd::cmd_list(config, category, locale.as_deref(), *json),
        Some(Commands::Show {
            category,
            id,
            locale,
            json,
        }) => cmd::cmd_show(config, category, id, locale.as_deref(), *json),
        Some(Commands::Validate { json }) => cmd::cmd_validate(config, *json),
        Some(Commands::Sitemap {
            base_url,
            output,
            date,
        }) => cmd::cmd_sitemap(
            config,
            base_url.as_deref(),
            output.as_deref(),
            date.as_deref(),
        ),
        Some(Commands::Init) => cmd::cmd_init(),
        Some(Commands::Completions { shell }) => {
            cmd::cmd_completions(*shell);
            Ok(())
        }
        None => {
            // No subcommand provided, show help
            println!("tweak-catalog v{}", env!("CARGO_PKG_VERSION"));
            println!("Bilingual catalog of Windows performance tweaks\n");
            println!("Usage: tweak-catalog <COMMAND>\n");
            println!("Commands:");
            println!("  categories  List tweak categories");
            println!("  list        List the tweaks of a category");
            println!("  show        Show one tweak with every step");
            println!("  validate    Check catalog data");
            println!("  sitemap     Generate sitemap XML");
            println!("  init        Initialize tweak-catalog configuration");
            println!("\nRun 'tweak-catalog <COMMAND> --help' for more information on a command.");
            Ok(())
        }
    };

    if let Err(e) = result {
        use tweak_catalog::error::ErrorFormatter;
        eprintln!("{}", ErrorFormatter::format(&e));
        let exit_code = ErrorFormatter::exit_code(&e);
        process::exit(exit_code);
    }
}
