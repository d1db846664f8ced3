//! Application icon tool.
//!
//! Renders the icon to PNG at several sizes and packs it into a Windows ICO.

mod commands;

use std::path::PathBuf;
use std::process;

use boxtag_core::style::{DEFAULT_CANVAS_SIZE, DEFAULT_CORNER_RADIUS, DEFAULT_MARGIN};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "boxtag")]
#[command(about = "Generate the application icon and pack it into a Windows ICO")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render icon.png and the down-sampled icon_NxN.png copies
    Generate {
        /// Canvas edge length in pixels; copies larger than this are skipped
        #[arg(long, default_value_t = DEFAULT_CANVAS_SIZE)]
        size: u32,

        /// Inset of the rounded background from the canvas edge
        #[arg(long, default_value_t = DEFAULT_MARGIN)]
        margin: u32,

        /// Corner radius of the rounded background
        #[arg(long, default_value_t = DEFAULT_CORNER_RADIUS)]
        corner_radius: u32,

        /// Directory the PNG files are written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Pack a PNG into a multi-size Windows ICO
    Ico {
        /// Input image
        #[arg(default_value = "icon.png")]
        input: PathBuf,
        /// Output ICO file
        #[arg(default_value = "icon.ico")]
        output: PathBuf,
    },
    /// List the entries of an ICO file
    Inspect {
        /// ICO file to read
        #[arg(default_value = "icon.ico")]
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            size,
            margin,
            corner_radius,
            out_dir,
        } => commands::generate::run(size, margin, corner_radius, &out_dir),
        Commands::Ico { input, output } => commands::ico::run(&input, &output),
        Commands::Inspect { file } => commands::inspect::run(&file).map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
