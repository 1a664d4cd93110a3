use std::path::PathBuf;

use clap::Parser;
use font_subset::{SubsetError, Subsetter};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "font-subset")]
#[command(about = "Subset a font based on UI strings used in the repo", long_about = None)]
struct Args {
    /// Path to input font (full font)
    #[arg(long, value_name = "FILE")]
    input: PathBuf,

    /// Path to output font (subset)
    #[arg(long, value_name = "FILE")]
    output: PathBuf,

    /// Root directory/file to scan for strings (repeatable). Default: src and web
    #[arg(long, value_name = "PATH")]
    roots: Vec<PathBuf>,

    /// (Deprecated) Alias of --roots for backward compatibility
    #[arg(long, value_name = "PATH")]
    ui_src: Option<PathBuf>,

    /// Python executable to run fontTools with
    #[arg(long, value_name = "EXE", default_value = "python3")]
    python: PathBuf,
}

fn main() {
    // Diagnostics go to stderr; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Fail fast on a bad input font, before paying for the scan.
    if let Err(e) = font_subset::check_input_font(&args.input) {
        error!("{e}");
        std::process::exit(2);
    }

    let mut roots = args.roots;
    if let Some(ui_src) = args.ui_src {
        roots.push(ui_src);
    }
    if roots.is_empty() {
        roots = vec![PathBuf::from("src"), PathBuf::from("web")];
    }

    let mut charset = font_subset::scan_roots(&roots);
    charset.add_baseline();
    info!(
        "extracted {} unique chars from: {}",
        charset.len(),
        roots
            .iter()
            .map(|root| root.display().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    let subsetter = Subsetter::builder().python(args.python).build();
    match subsetter.subset(&args.input, &args.output, &charset) {
        Ok(_) => {}
        Err(e @ SubsetError::MissingInput(_)) => {
            error!("{e}");
            std::process::exit(2);
        }
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    }
}
