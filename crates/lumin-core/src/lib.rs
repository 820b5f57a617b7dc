//! Hardware-independent core library for LuminOS
//!
//! This crate contains all platform-agnostic logic for the LuminOS watch:
//! the navigation state machine, the per-app state, hit-region geometry,
//! input edge detection and page rendering.
//!
//! It is `#![no_std]` with `extern crate alloc` so it compiles on both
//! embedded targets and desktop hosts (for the simulator and tests).

#![no_std]

extern crate alloc;

pub mod apps;
pub mod clock;
pub mod config;
pub mod framebuffer;
pub mod input;
pub mod layout;
pub mod pages;
pub mod ui;
pub mod watch;
