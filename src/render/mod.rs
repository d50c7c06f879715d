// src/render/mod.rs
// Drawing primitives and the block row renderer.
// Layout space has its origin at the top-left with y pointing down;
// the nannou surface maps it onto the window.

pub mod block_group;
pub mod surface;

pub use block_group::{block_scale, draw_block_group, draw_chain, layout_blocks, RowGeometry};
pub use surface::{NannouSurface, Surface};

/// An axis-aligned rectangle by its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlockRect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl BlockRect {
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.w / 2.0, self.y + self.h / 2.0)
    }
}
