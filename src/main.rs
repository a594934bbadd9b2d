//! Terminal block-fall runner (default binary).
//!
//! One loop: wait for input no longer than the time left until the next
//! tick, apply at most one key, then let the timer fire. All transitions go
//! through the single `GameSession`.

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_blockfall::engine::{GameConfig, GameSession, TranscriptWriter};
use tui_blockfall::input::{handle_key_event, should_quit, should_restart};
use tui_blockfall::logging;
use tui_blockfall::term::{FrameBuffer, GameView, StatusView, TerminalRenderer, Viewport};
use tui_blockfall::types::InputEvent;

const ENV_RECORD_PATH: &str = "BLOCKFALL_RECORD_PATH";

type Recorder = TranscriptWriter<BufWriter<File>>;

fn main() -> Result<()> {
    logging::init_from_env()?;

    let config = GameConfig::from_env();
    config.validate().context("invalid game configuration")?;
    let recorder = open_recorder(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, recorder);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn open_recorder(config: &GameConfig) -> Result<Option<Recorder>> {
    let Some(path) = std::env::var_os(ENV_RECORD_PATH).filter(|p| !p.is_empty()) else {
        return Ok(None);
    };
    let file = File::create(&path)
        .with_context(|| format!("create transcript {}", path.to_string_lossy()))?;
    info!(path = %path.to_string_lossy(), "recording transcript");
    Ok(Some(TranscriptWriter::new(BufWriter::new(file), config)?))
}

fn run(term: &mut TerminalRenderer, config: GameConfig, mut recorder: Option<Recorder>) -> Result<()> {
    let mut session = GameSession::with_start(config, Instant::now());
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let status = StatusView {
            topped_out: session.is_topped_out(),
        };
        view.render_into(&session.frame(), status, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        let timeout = session.ticker().time_until_next(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        break;
                    }
                    if should_restart(key) {
                        if let Some(mut writer) = recorder.take() {
                            // Replays start from a fresh spawn stream; a restart
                            // continues the old one, so the transcript ends here.
                            writer.flush()?;
                            warn!("restart ends transcript recording");
                        }
                        session.restart(Instant::now());
                        continue;
                    }
                    if let Some(action) = handle_key_event(key) {
                        session.handle_input(action);
                        record(&mut recorder, InputEvent::Action(action))?;
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        if session.poll_timer(Instant::now()) {
            record(&mut recorder, InputEvent::Tick)?;
        }
    }

    session.stop();
    if let Some(mut writer) = recorder {
        writer.flush()?;
    }
    Ok(())
}

fn record(recorder: &mut Option<Recorder>, event: InputEvent) -> Result<()> {
    match recorder {
        Some(writer) => writer.record(event),
        None => Ok(()),
    }
}
