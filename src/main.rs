//! CLI entry point for autopost

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use autopost::content::WorkflowVariant;
use autopost::Autopost;

#[derive(Parser)]
#[command(name = "autopost")]
#[command(version)]
#[command(about = "Publish a generated blog post to a static home page", long_about = None)]
struct Cli {
    /// Set the blog directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a configuration file and starter home page
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Generate a post, insert it into the home page and push
    Run {
        /// Content source to use
        #[arg(short, long, value_enum, default_value = "generator")]
        variant: WorkflowVariant,

        /// Commit without pushing
        #[arg(long)]
        no_push: bool,

        /// Render only; do not touch the document or the repository
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the fragment the next run would insert
    Preview {
        /// Content source to use
        #[arg(short, long, value_enum, default_value = "generator")]
        variant: WorkflowVariant,
    },

    /// List the configured topics
    Topics,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    match cli.command {
        Commands::Init { folder } => {
            autopost::logging::init(cli.debug, None)?;
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing blog in {:?}", target_dir);
            autopost::commands::init::init_site(&target_dir)?;
            println!("Initialized autopost in {:?}", target_dir);
        }

        Commands::Run {
            variant,
            no_push,
            dry_run,
        } => {
            let site = open_site(&base_dir, cli.debug, true)?;
            let report = autopost::commands::run::run(&site, variant, no_push, dry_run)
                .inspect_err(|e| tracing::error!("Run aborted: {:#}", e))?;
            println!("{}", autopost::commands::run::summary(&report));
        }

        Commands::Preview { variant } => {
            let site = open_site(&base_dir, cli.debug, false)?;
            let prepared = autopost::commands::preview::run(&site, variant)?;
            print!("{}", prepared.fragment);
        }

        Commands::Topics => {
            let site = open_site(&base_dir, cli.debug, false)?;
            autopost::commands::topics::run(&site);
        }

        Commands::Version => {
            println!("autopost version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

/// Load the blog and install logging, writing to its log file when `log_to_file`
fn open_site(base_dir: &Path, debug: bool, log_to_file: bool) -> Result<Autopost> {
    let site = match Autopost::new(base_dir) {
        Ok(site) => site,
        Err(e) => {
            autopost::logging::init(debug, None)?;
            return Err(e);
        }
    };

    let log_file = log_to_file.then_some(site.log_path.as_path());
    autopost::logging::init(debug, log_file)?;
    Ok(site)
}
