//! Desktop simulator for the LuminOS watch UI.
//!
//! Renders lumin-core pages in an SDL2 window via `embedded-graphics-simulator`.
//! The host wall clock drives the lock screen and status bar, and the host
//! battery (when there is one) drives the battery gauge.
//!
//! # Controls
//!
//! | Input        | Action                 |
//! |--------------|------------------------|
//! | Left click   | Touch press            |
//! | Q / Escape   | Quit                   |
//!
//! Configuration comes from a TOML file given with `--config` or the
//! `LUMIN_CONFIG` environment variable.

mod battery;
mod config;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use chrono::{Local, Timelike};
use clap::Parser;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{
    OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window, sdl2::Keycode,
    sdl2::MouseButton,
};
use log::{error, info};

use lumin_core::clock::ClockReading;
use lumin_core::framebuffer::FrameBuffer;
use lumin_core::input::{InputSampler, PointerEvent};
use lumin_core::pages::{draw_region_outlines, render};
use lumin_core::ui::{DISPLAY_HEIGHT_PX, DISPLAY_WIDTH_PX, TouchPoint};
use lumin_core::watch::Watch;

use crate::battery::BatteryMonitor;

/// LuminOS watch simulator
#[derive(Parser, Debug)]
#[command(name = "lumin-simulator")]
#[command(about = "Desktop simulator for the LuminOS watch UI", long_about = None)]
struct Args {
    /// Path to a TOML config file
    #[arg(long, value_name = "PATH", env = "LUMIN_CONFIG")]
    config: Option<PathBuf>,

    /// Window scale factor, overrides the config file
    #[arg(long)]
    scale: Option<u32>,

    /// Outline every touch region
    #[arg(long)]
    show_regions: bool,

    /// Print the effective config as TOML and exit
    #[arg(long)]
    dump_config: bool,
}

// ---------------------------------------------------------------------------
// Host adapters
// ---------------------------------------------------------------------------

/// Wall-clock reading from any chrono time.
fn clock_reading<T: Timelike>(time: &T) -> ClockReading {
    ClockReading::new(
        time.hour() as u8,
        time.minute() as u8,
        time.second() as u8,
        time.nanosecond(),
    )
}

/// Map an SDL event to a pointer event. Only the left button touches.
fn pointer_event(event: &SimulatorEvent) -> Option<PointerEvent> {
    match *event {
        SimulatorEvent::MouseButtonDown {
            mouse_btn: MouseButton::Left,
            point,
        } => Some(PointerEvent::Down(TouchPoint::from_point(point))),
        SimulatorEvent::MouseButtonUp {
            mouse_btn: MouseButton::Left,
            point,
        } => Some(PointerEvent::Up(TouchPoint::from_point(point))),
        SimulatorEvent::MouseMove { point } => {
            Some(PointerEvent::Move(TouchPoint::from_point(point)))
        }
        _ => None,
    }
}

fn is_quit(event: &SimulatorEvent) -> bool {
    match event {
        SimulatorEvent::Quit => true,
        SimulatorEvent::KeyDown { keycode, .. } => {
            *keycode == Keycode::Q || *keycode == Keycode::Escape
        }
        _ => false,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    let args = Args::parse();

    let mut watch_config = config::load_config(args.config.as_deref())?;
    if let Some(scale) = args.scale {
        watch_config.window_scale = scale;
        watch_config
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid --scale: {e}"))?;
    }

    if args.dump_config {
        print!("{}", config::dump_config(&watch_config)?);
        return Ok(());
    }

    env_logger::init();
    info!("Starting LuminOS simulator");
    info!(
        "Display: {}×{} (scale {}×) at {} fps",
        DISPLAY_WIDTH_PX, DISPLAY_HEIGHT_PX, watch_config.window_scale, watch_config.frame_rate
    );
    match &args.config {
        Some(path) => info!("Config: {}", path.display()),
        None => info!("Config: defaults"),
    }
    info!("Click to touch, Q/Escape to quit");

    let frame_duration = Duration::from_micros(watch_config.frame_duration_micros());

    // SDL2 display and window
    let mut display = SimulatorDisplay::<Rgb565>::new(Size::new(
        DISPLAY_WIDTH_PX as u32,
        DISPLAY_HEIGHT_PX as u32,
    ));
    let output_settings = OutputSettingsBuilder::new()
        .scale(watch_config.window_scale)
        .build();
    let mut window = Window::new("LuminOS Simulator", &output_settings);

    let mut watch = Watch::new(&watch_config);
    let mut input = InputSampler::new();
    let mut battery = BatteryMonitor::system();
    let mut framebuffer = FrameBuffer::new();
    let start = Instant::now();

    // The SDL window is lazily initialized on the first `update()` call.
    // We must call `update()` once before `events()` or it will panic.
    let _ = display.clear(Rgb565::BLACK);
    window.update(&display);

    // -----------------------------------------------------------------------
    // Main loop
    // -----------------------------------------------------------------------
    'running: loop {
        let frame_start = Instant::now();

        // --- SDL events ---------------------------------------------------
        for event in window.events() {
            if is_quit(&event) {
                break 'running;
            }
            if let Some(pointer) = pointer_event(&event) {
                input.push(pointer);
            }
        }

        // --- State --------------------------------------------------------
        let now = start.elapsed().as_secs_f64();
        let frame_input = input.finish_frame();
        for action in watch.process_frame(&frame_input, now) {
            info!("Touch → {:?}", action);
        }

        // --- Render -------------------------------------------------------
        let ctx = watch.context(
            clock_reading(&Local::now()),
            now,
            battery.percent(frame_start),
        );
        match render(&ctx, &mut framebuffer) {
            Ok(regions) => {
                if args.show_regions
                    && let Err(e) = draw_region_outlines(&regions, &mut framebuffer)
                {
                    error!("Draw error: {:?}", e);
                }
            }
            Err(e) => error!("Draw error: {:?}", e),
        }
        if let Err(e) = framebuffer.flush(&mut display) {
            error!("Flush error: {:?}", e);
        }

        window.update(&display);

        // --- Frame pacing -------------------------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    info!("Simulator exiting");
    Ok(())
}
