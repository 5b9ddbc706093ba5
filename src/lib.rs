//! Boxmark: the annotation core of a bounding-box image labeler.
//!
//! Boxmark is the piece of a labeling tool that has nothing to do with
//! widgets: converting pointer positions on a zoomed, panned canvas into
//! resolution-independent bounding boxes, and keeping the in-memory box
//! list and the one-file-per-image label files consistent across drawing,
//! undo, clear, and navigation. A GUI host wires its events into a
//! [`Session`] and renders what the session reports back.
//!
//! # Modules
//!
//! - [`geom`]: typed coordinate spaces and projection math
//! - [`viewport`]: zoom/pan/fit state for the active image
//! - [`label`]: box model, in-memory store, and label-file persistence
//! - [`session`]: the controller tying the above together
//! - [`layout`]: image discovery and label-path mapping on disk
//! - [`config`]: tunable parameters with YAML loading
//! - [`error`]: error types for boxmark operations

pub mod config;
pub mod error;
pub mod geom;
pub mod label;
pub mod layout;
pub mod session;
pub mod viewport;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use label::{FileReport, LabelCheckReport, LabelSet};
use layout::DatasetLayout;

pub use config::{Config, FitMode};
pub use error::BoxmarkError;
pub use label::BoundingBox;
pub use session::Session;
pub use viewport::ViewportState;

/// The boxmark CLI application.
#[derive(Parser)]
#[command(name = "boxmark")]
#[command(version, author, about)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check every label file under a directory for malformed lines.
    Check(CheckArgs),

    /// Create empty label files for images that have none yet.
    Init(InitArgs),
}

/// Arguments for the check subcommand.
#[derive(clap::Args)]
struct CheckArgs {
    /// Directory containing label files.
    labels_dir: PathBuf,

    /// Label file extension, without the dot.
    #[arg(long, default_value = "txt")]
    extension: String,

    /// Treat warnings as a failing result (exit non-zero if any).
    #[arg(long)]
    strict: bool,

    /// Output format for the report ('text' or 'json').
    #[arg(long, default_value = "text")]
    output: String,
}

/// Arguments for the init subcommand.
#[derive(clap::Args)]
struct InitArgs {
    /// Directory containing images.
    #[arg(long)]
    images: PathBuf,

    /// Directory for label files (defaults to 'labels' beside the images
    /// directory).
    #[arg(long)]
    labels: Option<PathBuf>,

    /// Label file extension, without the dot.
    #[arg(long, default_value = "txt")]
    extension: String,
}

/// Run the boxmark CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), BoxmarkError> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check(args)) => run_check(args),
        Some(Commands::Init(args)) => run_init(args),
        None => {
            // No subcommand: print a usage hint and exit successfully.
            println!("boxmark {}", env!("CARGO_PKG_VERSION"));
            println!();
            println!("Bounding-box labeling core and label-file tools.");
            println!();
            println!("Run 'boxmark --help' for usage information.");
            Ok(())
        }
    }
}

/// Execute the check subcommand.
fn run_check(args: CheckArgs) -> Result<(), BoxmarkError> {
    let files = layout::collect_label_files(&args.labels_dir, &args.extension)?;

    let mut report = LabelCheckReport::new();
    for path in files {
        let loaded = label::io_yolo::load_labels(&path)?;
        report.add(FileReport {
            path,
            boxes: loaded.labels.len(),
            warnings: loaded.warnings,
        });
    }

    match args.output.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "text" => print!("{report}"),
        other => return Err(BoxmarkError::UnsupportedOutput(other.to_string())),
    }

    let warning_count = report.warning_count();
    if args.strict && warning_count > 0 {
        Err(BoxmarkError::LabelCheckFailed {
            warning_count,
            report,
        })
    } else {
        Ok(())
    }
}

/// Execute the init subcommand.
fn run_init(args: InitArgs) -> Result<(), BoxmarkError> {
    let labels_dir = args.labels.unwrap_or_else(|| match args.images.parent() {
        Some(parent) => parent.join("labels"),
        None => PathBuf::from("labels"),
    });

    let dataset = DatasetLayout::new(&args.images, labels_dir, args.extension);
    let entries = dataset.discover()?;

    let mut created = 0usize;
    for entry in &entries {
        let label_path = dataset.label_path(&entry.path);
        if !label_path.exists() {
            label::io_yolo::save_labels(&LabelSet::new(), &label_path)?;
            created += 1;
        }
    }

    println!(
        "Created {} empty label file(s) for {} image(s).",
        created,
        entries.len()
    );
    Ok(())
}
