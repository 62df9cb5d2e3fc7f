//! # Rendering
//!
//! - `background`: paints the starfield behind screen content
//! - `screens`: screen-specific rendering
//! - `theme`: palette bridging and egui visuals
//! - `debug_overlay`: diagnostics window

pub mod background;
pub mod debug_overlay;
pub mod screens;
pub mod theme;
