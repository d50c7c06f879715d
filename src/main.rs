// src/main.rs
use nannou::event::TouchEvent;
use nannou::prelude::*;

use bouncyblocks::{
    config::Config,
    controllers::{is_tap, BlockViewController},
    render::NannouSurface,
    views::Palette,
};

struct Model {
    controller: BlockViewController,
}

fn main() {
    env_logger::init();
    nannou::app(model).update(update).run();
}

fn model(app: &App) -> Model {
    // Load config
    let config = Config::load().expect("Failed to load config file");
    let palette = Palette::from_config(&config.style).expect("Invalid palette in config");

    // Create window
    let window_id = app
        .new_window()
        .title(&config.window.title)
        .size(config.window.width, config.window.height)
        .view(view)
        .mouse_pressed(mouse_pressed)
        .touch(touch)
        .build()
        .unwrap();

    if config.window.fullscreen {
        if let Some(window) = app.window(window_id) {
            window.set_fullscreen(true);
        }
    }

    log::info!(
        "Chain of {} nodes x {} blocks, step {} every {}ms",
        config.chain.nodes,
        config.chain.squares,
        config.animation.scale_step,
        config.animation.tick_delay_ms
    );

    Model {
        controller: BlockViewController::new(&config, palette),
    }
}

fn mouse_pressed(_app: &App, model: &mut Model, _button: MouseButton) {
    model.controller.handle_tap();
}

fn touch(_app: &App, model: &mut Model, touch: TouchEvent) {
    if is_tap(touch.phase) {
        model.controller.handle_tap();
    }
}

fn update(_app: &App, model: &mut Model, update: Update) {
    model.controller.tick(update.since_last.as_secs_f32());
}

// Draw the state of Model into the given Frame
fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    let rect = app.window_rect();

    let mut surface = NannouSurface::new(&draw, rect);
    model.controller.draw(&mut surface, rect.w(), rect.h());

    if let Err(err) = draw.to_frame(app, &frame) {
        log::error!("Failed to render frame: {:?}", err);
    }
}
