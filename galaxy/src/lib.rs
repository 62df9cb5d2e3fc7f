//! # Galaxy - Desktop Host
//!
//! Native window that shows the procedural starfield from `lib-starfield`
//! behind a small demo screen.
//!
//! ## Module Structure
//!
//! - **app**: [`GalaxyApp`], the `eframe::App` that drives the frame loop
//! - **core**: [`Config`] from the environment and the [`AppError`] type
//! - **debug**: logging setup, frame metrics
//! - **ui**: background painter, theme bridging, screens, debug overlay
//!
//! ```text
//! main.rs
//!   │
//!   ├── debug (tracing subscriber, daily log file)
//!   ├── core  (Config::from_env, validate)
//!   │
//!   └── app::GalaxyApp ── per frame ──► GalaxyBackground::tick
//!         │                              ui::background::show
//!         │                                ├── paint scene
//!         │                                └── ui::screens::home
//!         └── Ctrl+D ──► ui::debug_overlay
//! ```
//!
//! ## Usage
//!
//! ```bash
//! GALAXY_QUALITY=medium GALAXY_THEME=light cargo run --bin galaxy
//! ```

pub mod app;
pub mod core;
pub mod debug;
pub mod ui;

pub use app::GalaxyApp;
pub use crate::core::{AppError, Config, Result};
