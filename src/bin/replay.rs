//! Replay a recorded transcript and print the final grid.
//!
//! Usage: `replay <transcript.jsonl>` (or `-` for stdin)

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{bail, Context, Result};
use tracing::info;

use tui_blockfall::engine::Transcript;
use tui_blockfall::logging;

fn main() -> Result<()> {
    logging::init_stderr();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [path] = args.as_slice() else {
        bail!("usage: replay <transcript.jsonl | ->");
    };

    let transcript = if path == "-" {
        Transcript::read(io::stdin().lock())?
    } else {
        let file = File::open(path).with_context(|| format!("open transcript {path}"))?;
        Transcript::read(BufReader::new(file))?
    };

    info!(
        events = transcript.events.len(),
        ignored = transcript.ignored,
        seed = transcript.config.seed,
        "replaying"
    );

    let session = transcript.replay();
    println!("{}", session.frame().to_text());
    println!("score: {}", session.score());
    if session.is_topped_out() {
        println!("topped out");
    }
    Ok(())
}
