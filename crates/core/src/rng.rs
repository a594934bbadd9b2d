//! RNG module - spawn selection
//!
//! New pieces draw their shape and orientation uniformly from configured
//! allowed sets. A simple LCG keeps the draw sequence deterministic for a
//! given seed, which makes whole games replayable.

use crate::types::{Orientation, ShapeId};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (((self.next_u32() >> 16) as u64 * max as u64) >> 16) as u32
    }

    /// Pick one element uniformly, `None` for an empty slice
    pub fn choose<T: Copy>(&mut self, items: &[T]) -> Option<T> {
        if items.is_empty() {
            return None;
        }
        let i = self.next_range(items.len() as u32) as usize;
        items.get(i).copied()
    }
}

/// Where a new piece appears horizontally
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpawnColumn {
    /// Always the same column
    Fixed(u16),
    /// Uniform over every column where the drawn shape fits
    Random,
}

/// Draws shapes and orientations for new pieces
#[derive(Debug, Clone)]
pub struct SpawnPolicy {
    shapes: Vec<ShapeId>,
    orientations: Vec<Orientation>,
    column: SpawnColumn,
    seed: u32,
    rng: SimpleRng,
}

/// One draw from a [`SpawnPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnDraw {
    pub shape: ShapeId,
    pub orientation: Orientation,
    pub column: i32,
}

impl SpawnPolicy {
    /// Create a policy. Empty sets fall back to every shape / orientation.
    pub fn new(
        shapes: &[ShapeId],
        orientations: &[Orientation],
        column: SpawnColumn,
        seed: u32,
    ) -> Self {
        let shapes = if shapes.is_empty() {
            ShapeId::ALL.to_vec()
        } else {
            shapes.to_vec()
        };
        let orientations = if orientations.is_empty() {
            Orientation::ALL.to_vec()
        } else {
            orientations.to_vec()
        };

        Self {
            shapes,
            orientations,
            column,
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn shapes(&self) -> &[ShapeId] {
        &self.shapes
    }

    pub fn orientations(&self) -> &[Orientation] {
        &self.orientations
    }

    pub fn column(&self) -> SpawnColumn {
        self.column
    }

    /// Draw the next piece for a grid `grid_width` columns wide
    pub fn draw(&mut self, grid_width: u16) -> SpawnDraw {
        let shape = self.rng.choose(&self.shapes).unwrap_or(ShapeId::O);
        let orientation = self
            .rng
            .choose(&self.orientations)
            .unwrap_or(Orientation::R0);

        let column = match self.column {
            SpawnColumn::Fixed(c) => c as i32,
            SpawnColumn::Random => {
                let extent = crate::pieces::shape_extent(shape, orientation);
                let slots = (grid_width as i32 - extent + 1).max(1);
                self.rng.next_range(slots as u32) as i32
            }
        };

        SpawnDraw {
            shape,
            orientation,
            column,
        }
    }
}

impl Default for SpawnPolicy {
    fn default() -> Self {
        Self::new(
            &ShapeId::ALL,
            &Orientation::ALL,
            SpawnColumn::Fixed(crate::types::DEFAULT_SPAWN_COLUMN),
            crate::types::DEFAULT_SEED,
        )
    }
}
