// src/render/surface.rs
//
// The minimal 2D target the widget draws onto.

use nannou::prelude::*;

use super::BlockRect;

pub trait Surface {
    fn fill_background(&mut self, color: Rgb);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn fill_rect(&mut self, rect: BlockRect, color: Rgb);
}

/// Wraps a nannou `Draw`, mapping top-left/y-down layout coordinates onto
/// the window's centred, y-up space. The transform stack is a stack of
/// derived `Draw` handles.
pub struct NannouSurface {
    current: Draw,
    stack: Vec<Draw>,
}

impl NannouSurface {
    pub fn new(draw: &Draw, window: Rect) -> Self {
        let current = draw
            .translate(vec3(window.left(), window.top(), 0.0))
            .scale_y(-1.0);
        Self {
            current,
            stack: Vec::new(),
        }
    }
}

impl Surface for NannouSurface {
    fn fill_background(&mut self, color: Rgb) {
        self.current.background().color(color);
    }

    fn save(&mut self) {
        self.stack.push(self.current.clone());
    }

    fn restore(&mut self) {
        if let Some(draw) = self.stack.pop() {
            self.current = draw;
        }
    }

    fn translate(&mut self, x: f32, y: f32) {
        self.current = self.current.translate(vec3(x, y, 0.0));
    }

    fn fill_rect(&mut self, rect: BlockRect, color: Rgb) {
        let (cx, cy) = rect.center();
        self.current
            .rect()
            .x_y(cx, cy)
            .w_h(rect.w, rect.h)
            .color(color);
    }
}
