//! xrgeom CLI - build triangle geometry buffers from the command line.

use clap::{Parser, Subcommand};
use env_logger::Env;
use xrgeom_terminal::commands;
use xrgeom_terminal::{OutputFormat, VertexArgs};

const DEFAULT_LOGGING_LEVEL: &str = "warn";

#[derive(Parser)]
#[command(name = "xrgeom")]
#[command(version, about = "Flat triangle geometry buffers for WebXR scenes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print position, normal and uv buffers.
    Build {
        #[command(flatten)]
        vertices: VertexArgs,

        /// Output format.
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Draw the UV layout as ASCII.
    Preview {
        #[command(flatten)]
        vertices: VertexArgs,

        /// Preview width in characters.
        #[arg(long, default_value_t = 40)]
        width: usize,

        /// Preview height in characters.
        #[arg(long, default_value_t = 20)]
        height: usize,
    },

    /// List registered geometry primitives.
    Primitives,
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build { vertices, format } => commands::build(&vertices, format),
        Commands::Preview {
            vertices,
            width,
            height,
        } => commands::preview(&vertices, width, height),
        Commands::Primitives => commands::primitives(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
