//! RV32I random instruction generator CLI.
//!
//! Thin glue around `rvgen-core`: resolves the format selector and count
//! (falling back to interactive prompts, as the tool predates scripted
//! use), then dispatches one generation request per selected format and
//! reports the artifact files written.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use rvgen_core::{Config, Format, Mode};

#[derive(Parser, Debug)]
#[command(
    name = "rvgen",
    version,
    about = "Random RV32I instruction generator",
    long_about = "Generates pseudo-random RV32I instructions and writes a little-endian \
memory image (mem_<tag>.txt) plus an annotated listing (tc_<tag>.txt) per run.\n\nExamples:\n  \
rvgen R 32\n  rvgen mixed 64 --seed 7\n  rvgen ALL 16 --out-dir vectors\n  rvgen S --walk"
)]
struct Cli {
    /// Format selector: R, I, S, B, U, J, SYS, M/MIXED, or ALL.
    mode: Option<String>,

    /// Instruction count; non-numeric input falls back to the default.
    count: Option<String>,

    /// Walk the chosen format's catalog deterministically (one instruction
    /// per row, fixed operands) instead of drawing random rows.
    #[arg(long)]
    walk: bool,

    /// Fixed RNG seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Directory receiving the artifact files.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

/// What the mode tag resolved to.
enum Selector {
    One(Format),
    Mixed,
    All,
}

/// Resolves a mode tag the way the tool always has: case-insensitive,
/// `MIXED`/`M` for mixed, `SYS` for the system set, `ALL` for every
/// format, otherwise the first letter names the format.
fn parse_selector(tag: &str) -> Option<Selector> {
    let tag = tag.trim().to_ascii_uppercase();
    match tag.as_str() {
        "ALL" => return Some(Selector::All),
        "M" | "MIXED" | "MIXEDSET" => return Some(Selector::Mixed),
        "SYS" | "Y" => return Some(Selector::One(Format::System)),
        _ => {}
    }
    match tag.chars().next()? {
        'R' => Some(Selector::One(Format::Register)),
        'I' => Some(Selector::One(Format::Immediate)),
        'S' => Some(Selector::One(Format::Store)),
        'B' => Some(Selector::One(Format::Branch)),
        'U' => Some(Selector::One(Format::Upper)),
        'J' => Some(Selector::One(Format::Jump)),
        'M' => Some(Selector::Mixed),
        _ => None,
    }
}

fn prompt(question: &str) -> Option<String> {
    print!("{question}");
    io::stdout().flush().ok()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line).ok()?;
    if line.is_empty() { None } else { Some(line) }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Cli { mode, count, walk, seed, out_dir } = Cli::parse();
    let config = Config::default();
    let interactive = mode.is_none();

    let mode_tag = match mode {
        Some(tag) => tag,
        None => {
            println!("RV32I random instruction generator - interactive mode");
            let Some(tag) = prompt("Enter MODE (R,I,S,B,U,J,SYS,M,ALL): ") else {
                process::exit(1);
            };
            tag
        }
    };

    // A missing or non-numeric count falls back to the default rather
    // than failing the run.
    let count = count
        .or_else(|| if interactive { prompt("Enter number of instructions: ") } else { None })
        .and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(config.default_count);

    let Some(selector) = parse_selector(&mode_tag) else {
        eprintln!("Invalid MODE '{}'. Valid: R, I, S, B, U, J, SYS, M, ALL", mode_tag.trim());
        process::exit(1);
    };

    let result = match selector {
        Selector::One(format) => {
            let mode = if walk { Mode::Walk(format) } else { Mode::Repeat(format) };
            dispatch(mode, count, &out_dir, seed, &config)
        }
        Selector::Mixed => {
            if walk {
                eprintln!("--walk needs a single format tag, not MIXED");
                process::exit(1);
            }
            dispatch(Mode::Mixed, count, &out_dir, seed, &config)
        }
        Selector::All => Format::ALL.iter().try_for_each(|&format| {
            let mode = if walk { Mode::Walk(format) } else { Mode::Repeat(format) };
            dispatch(mode, count, &out_dir, seed, &config)
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn dispatch(
    mode: Mode,
    count: usize,
    out_dir: &Path,
    seed: Option<u64>,
    config: &Config,
) -> Result<(), rvgen_core::GenError> {
    rvgen_core::run(mode, count, out_dir, seed, config)?;
    let tag = mode.tag();
    println!("Processed mode {tag} with {count} instructions -> tc_{tag}.txt / mem_{tag}.txt");
    Ok(())
}
