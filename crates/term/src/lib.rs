//! Terminal rendering for the block-fall game.
//!
//! Rendering goes through a plain framebuffer rather than a widget toolkit:
//! [`GameView`] paints a [`Frame`](crate::core::Frame) into a [`FrameBuffer`],
//! and [`TerminalRenderer`] flushes only what changed since the last draw.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{AnchorY, GameView, RowScale, StatusView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
