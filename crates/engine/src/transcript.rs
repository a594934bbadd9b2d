//! Session transcripts: newline-delimited JSON records of every event fed to
//! a session, preceded by a header with the configuration.
//!
//! ```text
//! {"type":"header","version":1,"gridWidth":20,"gridHeight":40,...}
//! {"type":"tick"}
//! {"type":"action","action":"shiftLeft"}
//! ```
//!
//! Because transitions are pure and spawn selection is seeded, replaying the
//! events through a fresh [`GameSession`] reproduces the recorded game.

use std::io::{BufRead, Write};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::core::SpawnColumn;
use crate::session::GameSession;
use crate::types::{GameAction, InputEvent, Orientation, ShapeId};

pub const TRANSCRIPT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranscriptHeader {
    pub version: u32,
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_ms: u32,
    pub shapes: Vec<u8>,
    pub orientations: Vec<u8>,
    /// `None` means a random spawn column.
    pub spawn_column: Option<u16>,
    pub seed: u32,
}

impl From<&GameConfig> for TranscriptHeader {
    fn from(config: &GameConfig) -> Self {
        Self {
            version: TRANSCRIPT_VERSION,
            grid_width: config.grid_width,
            grid_height: config.grid_height,
            tick_ms: config.tick_ms,
            shapes: config.allowed_shapes.iter().map(|s| s.index()).collect(),
            orientations: config
                .allowed_orientations
                .iter()
                .map(|o| o.index())
                .collect(),
            spawn_column: match config.spawn_column {
                SpawnColumn::Fixed(c) => Some(c),
                SpawnColumn::Random => None,
            },
            seed: config.seed,
        }
    }
}

impl TryFrom<&TranscriptHeader> for GameConfig {
    type Error = anyhow::Error;

    fn try_from(header: &TranscriptHeader) -> Result<Self> {
        if header.version != TRANSCRIPT_VERSION {
            bail!(
                "unsupported transcript version {} (expected {})",
                header.version,
                TRANSCRIPT_VERSION
            );
        }

        let allowed_shapes = header
            .shapes
            .iter()
            .map(|&i| ShapeId::from_index(i).with_context(|| format!("invalid shape id {i}")))
            .collect::<Result<Vec<_>>>()?;
        let allowed_orientations = header
            .orientations
            .iter()
            .map(|&i| Orientation::from_index(i).with_context(|| format!("invalid orientation {i}")))
            .collect::<Result<Vec<_>>>()?;

        let config = GameConfig {
            grid_width: header.grid_width,
            grid_height: header.grid_height,
            tick_ms: header.tick_ms,
            allowed_shapes,
            allowed_orientations,
            spawn_column: header
                .spawn_column
                .map(SpawnColumn::Fixed)
                .unwrap_or(SpawnColumn::Random),
            seed: header.seed,
        };
        config.validate().context("transcript header")?;
        Ok(config)
    }
}

/// One line of a transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Record {
    Header(TranscriptHeader),
    Tick,
    Action { action: String },
}

impl From<InputEvent> for Record {
    fn from(event: InputEvent) -> Self {
        match event {
            InputEvent::Tick => Record::Tick,
            InputEvent::Action(a) => Record::Action {
                action: a.as_str().to_string(),
            },
        }
    }
}

/// Appends records to any writer, one JSON object per line.
pub struct TranscriptWriter<W: Write> {
    out: W,
}

impl<W: Write> TranscriptWriter<W> {
    /// Start a transcript; writes the header immediately.
    pub fn new(mut out: W, config: &GameConfig) -> Result<Self> {
        write_record(&mut out, &Record::Header(config.into()))?;
        Ok(Self { out })
    }

    pub fn record(&mut self, event: InputEvent) -> Result<()> {
        write_record(&mut self.out, &event.into())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("flush transcript")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn write_record(out: &mut impl Write, record: &Record) -> Result<()> {
    serde_json::to_writer(&mut *out, record).context("encode transcript record")?;
    out.write_all(b"\n").context("write transcript record")?;
    Ok(())
}

/// A parsed transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub config: GameConfig,
    pub events: Vec<InputEvent>,
    /// Action records whose name was not recognised (ignored on replay)
    pub ignored: usize,
}

impl Transcript {
    /// Parse a transcript. The first non-blank line must be the header.
    pub fn read(input: impl BufRead) -> Result<Self> {
        let mut config = None;
        let mut events = Vec::new();
        let mut ignored = 0;

        for (i, line) in input.lines().enumerate() {
            let line_no = i + 1;
            let line = line.with_context(|| format!("read transcript line {line_no}"))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let record: Record = serde_json::from_str(line)
                .with_context(|| format!("parse transcript line {line_no}"))?;

            match (record, config.is_some()) {
                (Record::Header(header), false) => {
                    config = Some(GameConfig::try_from(&header)?);
                }
                (Record::Header(_), true) => bail!("duplicate header at line {line_no}"),
                (_, false) => bail!("transcript must start with a header (line {line_no})"),
                (Record::Tick, true) => events.push(InputEvent::Tick),
                (Record::Action { action }, true) => match GameAction::from_str(&action) {
                    Some(a) => events.push(InputEvent::Action(a)),
                    None => {
                        tracing::trace!(line = line_no, action = %action, "ignoring unknown action");
                        ignored += 1;
                    }
                },
            }
        }

        let Some(config) = config else {
            bail!("transcript is empty");
        };

        Ok(Self {
            config,
            events,
            ignored,
        })
    }

    /// Feed every event through a fresh session and return it.
    pub fn replay(&self) -> GameSession {
        let mut session = GameSession::new(self.config.clone());
        for &event in &self.events {
            session.apply(event);
        }
        session.stop();
        session
    }
}
