mod cmd;
mod logging;
mod tui;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use mdpad_core::config::loader::ConfigLoader;
use mdpad_core::config::types::ResolvedConfig;

#[derive(Debug, Parser)]
#[command(name = "mdp", version, about = "Markdown editing with live preview")]
pub struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Strip markdown/HTML syntax, keeping the readable text
    Strip(StripArgs),

    /// Render a markdown file to preview HTML
    Preview(PreviewArgs),

    /// Print a formatting snippet
    Snippet(SnippetArgs),

    /// Generate a markdown table scaffold
    Table(TableArgs),

    /// Open the terminal editor with a live preview pane
    Edit(EditArgs),

    /// Validate configuration and print resolved settings
    Doctor,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct StripArgs {
    /// Markdown file to strip (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Markdown file to render (stdin when omitted)
    pub file: Option<PathBuf>,

    /// Write the HTML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SnippetArgs {
    /// Which snippet to print
    #[arg(value_enum)]
    pub name: cmd::snippet::SnippetName,

    /// Text to wrap (an empty delimiter pair is produced when omitted)
    #[arg(long)]
    pub selection: Option<String>,

    /// Heading level (heading snippet only)
    #[arg(long, default_value_t = 1)]
    pub level: u8,

    /// Language tag (code-block snippet only)
    #[arg(long)]
    pub lang: Option<String>,

    /// Image source path (image snippet only)
    #[arg(long)]
    pub path: Option<String>,

    /// Image alt text (image snippet only)
    #[arg(long)]
    pub alt: Option<String>,

    /// Image width, px or % (image snippet only)
    #[arg(long)]
    pub width: Option<String>,

    /// Image height, px or % (image snippet only)
    #[arg(long)]
    pub height: Option<String>,

    /// Emit JSON with the caret offset
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct TableArgs {
    /// Number of columns (prompted for when omitted on a terminal)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Number of rows (prompted for when omitted on a terminal)
    #[arg(long)]
    pub rows: Option<usize>,

    /// Cell layout (config default when omitted)
    #[arg(long, value_enum)]
    pub format: Option<cmd::table::TableFormatArg>,
}

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Markdown file to edit (created on save if missing)
    pub file: PathBuf,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

fn main() {
    let cli = Cli::parse();
    let config_path = cli.config.clone();

    match cli.command {
        Commands::Doctor => cmd::doctor::run(config_path.as_deref()),
        Commands::Completions(args) => cmd::completions::run(&args),
        Commands::Strip(args) => cmd::strip::run(&setup(config_path.as_deref()), &args),
        Commands::Preview(args) => {
            cmd::preview::run(&setup(config_path.as_deref()), &args);
        }
        Commands::Snippet(args) => {
            cmd::snippet::run(&setup(config_path.as_deref()), &args);
        }
        Commands::Table(args) => cmd::table::run(&setup(config_path.as_deref()), &args),
        Commands::Edit(args) => cmd::edit::run(&setup(config_path.as_deref()), &args),
    }
}

/// Load configuration and initialize logging, or exit with a diagnostic.
fn setup(config_path: Option<&Path>) -> ResolvedConfig {
    match ConfigLoader::load(config_path) {
        Ok(config) => {
            logging::init(&config.logging);
            config
        }
        Err(e) => {
            eprintln!("configuration error: {e}");
            eprintln!("Run 'mdp doctor' to diagnose.");
            std::process::exit(1);
        }
    }
}
