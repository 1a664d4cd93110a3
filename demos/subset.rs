use std::env;
use std::path::PathBuf;

use font_subset::SubsetOutcome;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <input_font> <output_font> [root ...]", args[0]);
        std::process::exit(1);
    }

    let input = &args[1];
    let output = &args[2];
    let roots: Vec<PathBuf> = if args.len() > 3 {
        args[3..].iter().map(PathBuf::from).collect()
    } else {
        // Same defaults as the CLI
        vec![PathBuf::from("src"), PathBuf::from("web")]
    };

    let mut charset = font_subset::scan_roots(&roots);
    charset.add_baseline();
    println!("{} distinct characters to cover", charset.len());

    match font_subset::subset_font(input, output, &charset) {
        Ok(SubsetOutcome::Subsetted) => {
            println!("wrote subset font to {output}");
        }
        Ok(SubsetOutcome::CopiedFull(reason)) => {
            println!("copied full font to {output} ({reason})");
        }
        Err(e) => {
            eprintln!("Error subsetting font: {}", e);
            std::process::exit(1);
        }
    }
}
