// src/ui/components/mod.rs
//! UI components library

pub mod button;
pub mod text;

pub use button::{Button, LabelAlignment};
pub use text::{TextSize, draw_text};
