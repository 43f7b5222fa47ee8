use clap::Parser;
use std::path::PathBuf;

/// Command-line surface of the colorscheme setter.
///
/// Flag-based rather than subcommand-based: a single invocation can combine
/// cache maintenance (`--clear-*`, `--update-list`) with a render pass.
#[derive(Parser, Debug)]
#[command(
    name = "tinter",
    about = "Apply a named colorscheme across application configuration files",
    version
)]
pub struct Cli {
    /// Update the cached colorscheme and template lists before rendering
    #[arg(long)]
    pub update_list: bool,

    /// Delete the cached colorscheme and template lists
    #[arg(long)]
    pub clear_list: bool,

    /// Delete cached template bodies
    #[arg(long)]
    pub clear_templates: bool,

    /// Delete cached colorscheme files
    #[arg(long)]
    pub clear_schemes: bool,

    /// Configuration file to use
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the current configuration
    #[arg(long)]
    pub print_config: bool,

    /// Scheme to use (overrides the configuration)
    #[arg(long)]
    pub scheme: Option<String>,

    /// Preview output destinations without writing or running hooks
    #[arg(short = 'd', long)]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
