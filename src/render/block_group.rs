// src/render/block_group.rs
//
// Maps a row's scale onto a group of squares. One sine pulse drives every
// block; each block takes its own slice of the wave so they grow one
// after another and shrink back in reverse.

use std::f32::consts::PI;

use super::{BlockRect, Surface};
use crate::models::NodeChain;
use crate::views::Palette;

/// Local scale of block `index` out of `squares` for row scale `scale`.
/// Always within 0..=1.
pub fn block_scale(scale: f32, index: usize, squares: usize) -> f32 {
    let n = squares as f32;
    let wave = (scale * PI).sin();
    (wave - index as f32 / n).max(0.0).min(1.0 / n) * n
}

/// Row measurements for a surface of `width` x `height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    pub width: f32,
    pub band_height: f32,
    pub squares: usize,
    pub gap: f32,
    pub full_edge: f32,
}

impl RowGeometry {
    pub fn new(width: f32, height: f32, nodes: usize, squares: usize, size_factor: f32) -> Self {
        let band_height = height / nodes.max(1) as f32;
        let squares = squares.max(1);
        Self {
            width,
            band_height,
            squares,
            gap: width / (squares + 1) as f32,
            full_edge: (width / size_factor).min(band_height),
        }
    }

    /// Vertical centre of row `index`.
    pub fn band_center(&self, index: usize) -> f32 {
        self.band_height * index as f32 + self.band_height / 2.0
    }
}

/// Block rects for one row, relative to the row's centre line.
pub fn layout_blocks(scale: f32, geometry: &RowGeometry) -> Vec<BlockRect> {
    (0..geometry.squares)
        .map(|j| {
            let edge = geometry.full_edge * block_scale(scale, j, geometry.squares);
            let cx = geometry.gap * (j + 1) as f32;
            BlockRect {
                x: cx - edge / 2.0,
                y: -edge / 2.0,
                w: edge,
                h: edge,
            }
        })
        .collect()
}

pub fn draw_block_group<S: Surface>(
    surface: &mut S,
    scale: f32,
    geometry: &RowGeometry,
    palette: &Palette,
) {
    for (j, rect) in layout_blocks(scale, geometry).into_iter().enumerate() {
        surface.fill_rect(rect, palette.block_color(j));
    }
}

/// Draws each node's row in index order, each at its own scale.
pub fn draw_chain<S: Surface>(
    surface: &mut S,
    chain: &NodeChain,
    geometry: &RowGeometry,
    palette: &Palette,
) {
    for node in chain.nodes() {
        surface.save();
        surface.translate(0.0, geometry.band_center(node.index));
        draw_block_group(surface, node.state.scale, geometry, palette);
        surface.restore();
    }
}
