//! Transition engine - `(state, event) -> state`
//!
//! Every function here takes the committed state by reference and returns a
//! fresh value. Nothing is mutated in place, so any state can be kept, compared
//! or replayed.
//!
//! Piece lifecycle: absent → falling → (descent collides) locked → absent.
//! The tick after a lock spawns the next piece.

use tracing::{debug, trace};

use crate::core::{clear_rows, invalid_move, GameState, MovingPiece, SpawnPolicy};
use crate::types::{Cell, GameAction, InputEvent};

/// Advance `state` by one event.
pub fn next_state(state: &GameState, event: InputEvent, spawner: &mut SpawnPolicy) -> GameState {
    match event {
        InputEvent::Tick => tick(state, spawner),
        InputEvent::Action(action) => apply_action(state, action),
    }
}

/// Timer transition: spawn when no piece is falling, otherwise descend.
pub fn tick(state: &GameState, spawner: &mut SpawnPolicy) -> GameState {
    match state.moving() {
        None => spawn(state, spawner),
        Some(&piece) => descend(state, piece),
    }
}

/// Place a freshly drawn piece at the spawn column, row 0.
///
/// The spawn area is not checked: once the stack reaches row 0 the new piece
/// overlaps locked blocks and stays that way until it locks. That overlap is
/// the top-out condition (see [`GameState::collides`]); there is no game-over.
pub fn spawn(state: &GameState, spawner: &mut SpawnPolicy) -> GameState {
    let draw = spawner.draw(state.grid_width());
    let piece = MovingPiece::new(draw.shape, draw.orientation, Cell::new(draw.column, 0));
    debug!(
        shape = draw.shape.index(),
        orientation = draw.orientation.index(),
        column = draw.column,
        "spawn"
    );
    state.with_moving(Some(piece))
}

/// Player transition. Without a moving piece every action is a no-op.
pub fn apply_action(state: &GameState, action: GameAction) -> GameState {
    let Some(&piece) = state.moving() else {
        return state.clone();
    };

    match action {
        GameAction::Rotate => try_candidate(state, piece.rotated(), action),
        GameAction::ShiftLeft => try_candidate(state, piece.moved(-1, 0), action),
        GameAction::ShiftRight => try_candidate(state, piece.moved(1, 0), action),
        GameAction::SoftDrop => descend(state, piece),
    }
}

/// Commit `candidate` unless it is an invalid move, in which case the
/// committed state is returned unchanged.
fn try_candidate(state: &GameState, candidate: MovingPiece, action: GameAction) -> GameState {
    let next = state.with_moving(Some(candidate));
    if invalid_move(&next) {
        trace!(action = action.as_str(), "move rejected");
        return state.clone();
    }
    next
}

/// Move `piece` down one row; if that collides, lock `piece` where it was.
///
/// The lock uses the pre-descent piece, so it settles exactly on top of
/// whatever the descended candidate hit.
fn descend(state: &GameState, piece: MovingPiece) -> GameState {
    let candidate = state.with_moving(Some(piece.moved(0, 1)));
    if candidate.collides() {
        return lock_and_clear(state, &piece);
    }
    candidate
}

/// Merge `piece` into the locked blocks, clear filled rows and leave the
/// moving piece absent.
pub fn lock_and_clear(state: &GameState, piece: &MovingPiece) -> GameState {
    let locked = state.with_piece_locked(piece);
    let cleared = clear_rows(&locked);

    let rows = cleared.score() - state.score();
    debug!(
        shape = piece.shape.index(),
        column = piece.position.column,
        row = piece.position.row,
        rows_cleared = rows,
        score = cleared.score(),
        "lock"
    );
    cleared
}
