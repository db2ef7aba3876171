use std::path::PathBuf;

use clap::Parser;
use log::debug;
use voicegender_core::{analyze, classify_file, AnalysisParams, GenderLabel};

/// Classify the speaker in a recording as low-pitch (`M`) or
/// high-pitch/unknown (`K`) from its harmonic product spectrum.
#[derive(Parser, Debug)]
#[command(name = "voicegender", version, about)]
struct Cli {
    /// Recording to classify (WAV; FLAC and Ogg/Vorbis also decode).
    file: PathBuf,

    /// Print the full analysis (label, fundamental Hz, or the error) as
    /// JSON instead of the bare label.
    #[arg(long)]
    json: bool,

    /// Log pipeline progress to stderr (repeat for more detail).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!(
        "classifying {} ({} output)",
        cli.file.display(),
        if cli.json { "json" } else { "label" }
    );

    if cli.json {
        match analyze(&cli.file, &AnalysisParams::default()) {
            Ok(analysis) => {
                println!("{}", serde_json::to_string(&analysis).expect("serialize analysis"));
            }
            Err(err) => {
                println!(
                    "{}",
                    serde_json::json!({
                        "label": GenderLabel::HighPitchOrUnknown.tag(),
                        "error": err.to_string(),
                    })
                );
            }
        }
    } else {
        println!("{}", classify_file(&cli.file));
    }

    // Exit status stays 0 even on internal failure; the label on stdout is
    // the whole interface.
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
