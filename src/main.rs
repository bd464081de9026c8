use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use raylib::prelude::*;

mod constants;
mod controller;
mod engine;
mod indicator;
mod input;
mod overlay;
mod slide;
mod texture_loader;
mod view;

use crate::constants::*;
use crate::engine::CarouselEngine;
use crate::overlay::QuitOverlay;
use crate::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};

/// Browse a directory of pictures one slide at a time.
///
/// Left/right arrows (or the on-screen arrows) step through the images,
/// clicking a dot jumps straight to that slide, Escape asks before quitting.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Directory containing the images to browse
    image_dir: PathBuf,

    /// Advance automatically every this many seconds
    #[arg(long, value_name = "SECONDS")]
    interval: Option<f32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let image_paths = load_sorted_image_paths(&args.image_dir)?;

    let (mut rl, thread) = raylib::init()
        .size(WINDOW_WIDTH, WINDOW_HEIGHT)
        .title("Image Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    // Escape drives the quit dialog instead of closing the window outright.
    rl.set_exit_key(None);

    // --- Load Slides ---
    let mut textures = Vec::new();
    for path in &image_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => textures.push(texture),
            Err(e) => eprintln!("Warning: skipping {}: {}", path.display(), e),
        }
    }

    let mut engine = CarouselEngine::new(textures, args.interval)?;
    let mut quit_overlay = QuitOverlay::new();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if quit_overlay.visible() {
            // The dialog swallows all input until it is answered.
            if rl.is_key_pressed(KeyboardKey::KEY_ENTER) {
                break;
            }
            if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
                quit_overlay.hide();
            } else if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
                let cursor = rl.get_mouse_position();
                if overlay::click_dismisses(
                    cursor.x,
                    cursor.y,
                    rl.get_screen_width() as f32,
                    rl.get_screen_height() as f32,
                ) {
                    quit_overlay.hide();
                }
            }
        } else if rl.is_key_pressed(KeyboardKey::KEY_ESCAPE) {
            quit_overlay.show();
        } else {
            if let Some(event) = input::poll(&rl, engine.slide_count()) {
                engine.apply(event);
            }
            engine.tick(dt);
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        engine.draw(&mut d);
        quit_overlay.draw(&mut d);
    }

    Ok(())
}
