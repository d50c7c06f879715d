// src/controllers/block_view_controller.rs
//
// BlockViewController owns the node chain and the animation driver.
// A tap starts the current node; each due tick advances it, and when it
// completes the current pointer hops one node and the driver stops.
// One hop per tap.

use nannou::event::TouchPhase;

use crate::{
    animation::{AnimationDriver, ScaleUpdate, StartOutcome},
    config::Config,
    models::{Advance, NodeChain},
    render::{draw_chain, RowGeometry, Surface},
    views::Palette,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    Started(usize),
    Ignored,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    Idle,
    Waiting,        // driver active, pacing delay not yet elapsed
    Animating(f32), // current node's scale after the tick
    Completed { finished: usize, next: usize },
    BoundaryHit { finished: usize, next: usize },
}

/// Only the initial contact of a touch counts as a tap.
pub fn is_tap(phase: TouchPhase) -> bool {
    matches!(phase, TouchPhase::Started)
}

pub struct BlockViewController {
    chain: NodeChain,
    driver: AnimationDriver,
    palette: Palette,
    squares: usize,
    block_size_factor: f32,
}

impl BlockViewController {
    pub fn new(config: &Config, palette: Palette) -> Self {
        Self {
            chain: NodeChain::new(config.chain.nodes, config.animation.scale_step),
            driver: AnimationDriver::new(config.animation.tick_delay_secs()),
            palette,
            squares: config.chain.squares,
            block_size_factor: config.style.block_size_factor,
        }
    }

    pub fn chain(&self) -> &NodeChain {
        &self.chain
    }

    pub fn is_animating(&self) -> bool {
        self.driver.is_active()
    }

    pub fn handle_tap(&mut self) -> TapOutcome {
        let index = self.chain.current_index();
        match self.chain.current_mut().state.start_updating() {
            StartOutcome::Started => {
                log::debug!("Tap: animating node {}", index);
                self.driver.start();
                TapOutcome::Started(index)
            }
            StartOutcome::AlreadyRunning => {
                log::debug!("Tap ignored, node {} still animating", index);
                TapOutcome::Ignored
            }
        }
    }

    pub fn tick(&mut self, dt: f32) -> TickOutcome {
        if !self.driver.is_active() {
            return TickOutcome::Idle;
        }
        if !self.driver.tick(dt) {
            return TickOutcome::Waiting;
        }

        let finished = self.chain.current_index();
        match self.chain.current_mut().state.update() {
            ScaleUpdate::InProgress => TickOutcome::Animating(self.chain.current().state.scale),
            ScaleUpdate::Completed(scale) => {
                let step = self.chain.advance();
                self.driver.stop();
                match step {
                    Advance::Moved(next) => {
                        log::debug!("Node {} settled at {}, next is {}", finished, scale, next);
                        TickOutcome::Completed { finished, next }
                    }
                    Advance::BoundaryHit(next) => {
                        log::info!(
                            "Node {} reached the end of the chain, now heading {:?}",
                            finished,
                            self.chain.direction()
                        );
                        TickOutcome::BoundaryHit { finished, next }
                    }
                }
            }
            ScaleUpdate::Idle => {
                // driver running without an animating node
                self.driver.stop();
                TickOutcome::Idle
            }
        }
    }

    pub fn geometry(&self, width: f32, height: f32) -> RowGeometry {
        RowGeometry::new(
            width,
            height,
            self.chain.len(),
            self.squares,
            self.block_size_factor,
        )
    }

    /// Paints the background and every row onto a `width` x `height` surface.
    pub fn draw<S: Surface>(&self, surface: &mut S, width: f32, height: f32) {
        surface.fill_background(self.palette.background());
        let geometry = self.geometry(width, height);
        draw_chain(surface, &self.chain, &geometry, &self.palette);
    }
}
