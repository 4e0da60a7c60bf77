use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use dialoguer::Input;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use modtree::export::ExportFormat;
use modtree::parser;
use modtree::source::{self, DEFAULT_GO};
use modtree::tree::SerializeOptions;

#[derive(Parser)]
#[command(name = "modtree")]
#[command(version)]
#[command(about = "Go module dependency trees from `go mod graph` output", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Args)]
struct OutputArgs {
    /// Output format (json or text)
    #[arg(short, long, default_value = "json", env = "MODTREE_FORMAT")]
    format: ExportFormat,

    /// Show `path@version` tokens as separate name and version
    #[arg(long)]
    split_version: bool,

    /// Write the document to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an existing edge list (file or stdin)
    Render {
        /// Edge list file, `-` or nothing for stdin
        input: Option<PathBuf>,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Run `go mod graph` in a module directory and render it
    Graph {
        /// Module directory (defaults to current directory)
        #[arg(short, long, default_value = ".")]
        path: PathBuf,

        /// Go executable
        #[arg(long, default_value = DEFAULT_GO, env = "MODTREE_GO")]
        go: String,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Clone a repository, check out a revision and render its modules
    Repo {
        /// Repository URL (prompted for when omitted)
        #[arg(short, long)]
        url: Option<String>,

        /// Branch or tag to check out (prompted for when omitted)
        #[arg(short, long)]
        rev: Option<String>,

        /// Clone destination (defaults to the repository name)
        #[arg(short, long)]
        dest: Option<PathBuf>,

        /// Go executable
        #[arg(long, default_value = DEFAULT_GO, env = "MODTREE_GO")]
        go: String,

        #[command(flatten)]
        out: OutputArgs,
    },
    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Render { input, out }) => {
            let edge_list = read_edge_list(input.as_deref())?;
            emit(&edge_list, &out)
        }
        Some(Commands::Graph { path, go, out }) => {
            let edge_list = source::go_mod_graph(&path, &go)?;
            emit(&edge_list, &out)
        }
        Some(Commands::Repo {
            url,
            rev,
            dest,
            go,
            out,
        }) => {
            let url = match url {
                Some(url) => url,
                None => prompt("Enter GitHub repository URL")?,
            };
            if url.trim().is_empty() {
                bail!("A repository URL is required");
            }
            let rev = match rev {
                Some(rev) => rev,
                None => prompt("Enter branch/tag")?,
            };
            let dest = dest.unwrap_or_else(|| PathBuf::from(source::repo_name(&url)));

            source::clone_repository(&url, &dest).context("Error cloning repository")?;
            if rev.trim().is_empty() {
                info!("No revision given, keeping default branch");
            } else {
                source::checkout(&dest, rev.trim())?;
            }

            let edge_list = source::go_mod_graph(&dest, &go)?;
            emit(&edge_list, &out)
        }
        Some(Commands::Version) => {
            println!("modtree v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        None => {
            println!("modtree - Go module dependency trees");
            println!("Run 'modtree graph' inside a Go module to print its dependency tree");
            println!("Run 'modtree --help' for more information");
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn prompt(label: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .with_context(|| format!("Failed to read input for '{}'", label))
}

fn read_edge_list(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) if path != Path::new("-") => {
            debug!("Reading edge list from {}", path.display());
            parser::read_file(path)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
        _ => {
            debug!("Reading edge list from stdin");
            parser::read_from(io::stdin().lock()).context("Failed to read stdin")
        }
    }
}

fn emit(edge_list: &str, out: &OutputArgs) -> Result<()> {
    let options = SerializeOptions {
        split_version: out.split_version,
    };
    let document = modtree::render(edge_list, out.format, &options)
        .context("Error generating dependency tree")?;

    match &out.output {
        Some(path) => {
            fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {} bytes to {}", document.len(), path.display());
        }
        None => {
            io::stdout()
                .lock()
                .write_all(document.as_bytes())
                .context("Failed to write to stdout")?;
        }
    }
    Ok(())
}
