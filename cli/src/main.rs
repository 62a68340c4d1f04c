use std::io::{self, IsTerminal};
use std::process;

use clap::{CommandFactory, Parser};

use hexalpha_core::alphabet::build_table;
use hexalpha_core::constants::DEFAULT_LINE_LENGTH;
use hexalpha_core::stream::{
    decode_stream, encode_stream, DecodeParams, EncodeParams, InputSource, OutputSink,
};
use hexalpha_core::types::StreamError;

/// Encode hexadecimal data to letter pairs or decode letter pairs back to hexadecimal.
#[derive(Parser)]
#[command(name = "hexalpha", version, about)]
struct Cli {
    /// Decode mode
    #[arg(short = 'd', long = "decode")]
    decode: bool,

    /// Line length for encoding (0 for no line breaks)
    #[arg(short = 'l', long = "line-length", default_value_t = DEFAULT_LINE_LENGTH)]
    line_length: usize,

    /// Use uppercase letters (default is lowercase)
    #[arg(short = 'u', long = "uppercase")]
    uppercase: bool,
}

fn init_tracing() {
    // Logs go to stderr only; stdout is the data channel. RUST_LOG opts in,
    // default is off so piped output stays clean.
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("off"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    // Bare invocation from a terminal: nothing to transcode, print usage and
    // bail instead of blocking on an interactive stdin.
    if std::env::args().len() == 1 && io::stdin().is_terminal() {
        let mut cmd = Cli::command();
        eprintln!("{}", cmd.render_help());
        process::exit(1);
    }

    let cli = Cli::parse();
    init_tracing();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), StreamError> {
    let table = build_table();

    let input = InputSource::Reader(Box::new(io::stdin()));
    let output = OutputSink::Writer(Box::new(io::stdout()));

    let snapshot = if cli.decode {
        decode_stream(
            input,
            output,
            &table,
            DecodeParams {
                uppercase: cli.uppercase,
            },
        )?
    } else {
        encode_stream(
            input,
            output,
            &table,
            EncodeParams {
                line_length: cli.line_length,
                uppercase: cli.uppercase,
            },
        )?
    };

    tracing::debug!(
        lines_in = snapshot.lines_in,
        pairs = snapshot.pairs,
        bytes_out = snapshot.bytes_out,
        elapsed_ms = snapshot.elapsed.as_secs_f64() * 1_000.0,
        "transcode finished"
    );
    Ok(())
}
