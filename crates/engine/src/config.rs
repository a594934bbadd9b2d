//! Game configuration.
//!
//! Everything is static for the lifetime of a session. Values come from
//! defaults, optionally overridden by `BLOCKFALL_*` environment variables.
//! Unparseable values fall back to the default with a warning; structurally
//! impossible combinations are rejected by [`GameConfig::validate`].

use std::time::Duration;

use anyhow::{ensure, Result};

use crate::core::pieces::max_width;
use crate::core::{GameState, SpawnColumn, SpawnPolicy};
use crate::types::{
    Orientation, ShapeId, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_SEED,
    DEFAULT_SPAWN_COLUMN, DEFAULT_TICK_MS,
};

pub const ENV_WIDTH: &str = "BLOCKFALL_WIDTH";
pub const ENV_HEIGHT: &str = "BLOCKFALL_HEIGHT";
pub const ENV_TICK_MS: &str = "BLOCKFALL_TICK_MS";
pub const ENV_SHAPES: &str = "BLOCKFALL_SHAPES";
pub const ENV_ORIENTATIONS: &str = "BLOCKFALL_ORIENTATIONS";
pub const ENV_SPAWN_COLUMN: &str = "BLOCKFALL_SPAWN_COLUMN";
pub const ENV_SEED: &str = "BLOCKFALL_SEED";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub tick_ms: u32,
    pub allowed_shapes: Vec<ShapeId>,
    pub allowed_orientations: Vec<Orientation>,
    pub spawn_column: SpawnColumn,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            allowed_shapes: ShapeId::ALL.to_vec(),
            allowed_orientations: Orientation::ALL.to_vec(),
            spawn_column: SpawnColumn::Fixed(DEFAULT_SPAWN_COLUMN),
            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, test map, ...)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let read = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let grid_width = parse_or(ENV_WIDTH, read(ENV_WIDTH), defaults.grid_width);
        let grid_height = parse_or(ENV_HEIGHT, read(ENV_HEIGHT), defaults.grid_height);
        let tick_ms = parse_or(ENV_TICK_MS, read(ENV_TICK_MS), defaults.tick_ms);
        let seed = parse_or(ENV_SEED, read(ENV_SEED), defaults.seed);

        let allowed_shapes = match read(ENV_SHAPES) {
            Some(raw) => parse_set(ENV_SHAPES, &raw, ShapeId::from_index)
                .unwrap_or(defaults.allowed_shapes),
            None => defaults.allowed_shapes,
        };
        let allowed_orientations = match read(ENV_ORIENTATIONS) {
            Some(raw) => parse_set(ENV_ORIENTATIONS, &raw, Orientation::from_index)
                .unwrap_or(defaults.allowed_orientations),
            None => defaults.allowed_orientations,
        };

        let spawn_column = match read(ENV_SPAWN_COLUMN) {
            Some(raw) if raw.eq_ignore_ascii_case("random") => SpawnColumn::Random,
            Some(raw) => SpawnColumn::Fixed(parse_or(
                ENV_SPAWN_COLUMN,
                Some(raw),
                DEFAULT_SPAWN_COLUMN,
            )),
            None => defaults.spawn_column,
        };

        Self {
            grid_width,
            grid_height,
            tick_ms,
            allowed_shapes,
            allowed_orientations,
            spawn_column,
            seed,
        }
    }

    /// Reject configurations no game can be played on.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.allowed_shapes.is_empty(), "allowed shape set is empty");
        ensure!(
            !self.allowed_orientations.is_empty(),
            "allowed orientation set is empty"
        );
        ensure!(self.tick_ms > 0, "tick interval must be positive");
        ensure!(self.grid_height > 0, "grid height must be positive");

        let widest = max_width(&self.allowed_shapes);
        ensure!(
            self.grid_width as i32 >= widest,
            "grid width {} is narrower than the widest allowed shape ({})",
            self.grid_width,
            widest
        );

        if let SpawnColumn::Fixed(column) = self.spawn_column {
            ensure!(
                column as i32 + widest <= self.grid_width as i32,
                "spawn column {} leaves no room for a {}-wide shape on a {}-wide grid",
                column,
                widest,
                self.grid_width
            );
        }

        Ok(())
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms as u64)
    }

    /// Empty state sized by this configuration
    pub fn initial_state(&self) -> GameState {
        GameState::new(self.grid_width, self.grid_height)
    }

    /// Spawn selection seeded by this configuration
    pub fn spawn_policy(&self) -> SpawnPolicy {
        SpawnPolicy::new(
            &self.allowed_shapes,
            &self.allowed_orientations,
            self.spawn_column,
            self.seed,
        )
    }
}

fn parse_or<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(v) => v,
        Err(_) => {
            tracing::warn!("{key}={raw:?} is not a valid value. Falling back to {default}.");
            default
        }
    }
}

fn parse_set<T: PartialEq>(key: &str, raw: &str, from_index: fn(u8) -> Option<T>) -> Option<Vec<T>> {
    let mut out = Vec::new();
    for token in raw.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let Some(item) = token.parse::<u8>().ok().and_then(from_index) else {
            tracing::warn!("{key}={raw:?} contains invalid entry {token:?}. Falling back to defaults.");
            return None;
        };
        if !out.contains(&item) {
            out.push(item);
        }
    }
    if out.is_empty() {
        tracing::warn!("{key}={raw:?} names no entries. Falling back to defaults.");
        return None;
    }
    Some(out)
}
