//! # Starfield Library
//!
//! Procedural, depth-layered twinkling star background.
//!
//! Stars are placed by a seeded hash of their index, so the same field comes
//! back on every launch and every resize. The pieces, bottom up:
//!
//! - [`seed`]: stateless `[0, 1)` draws keyed by star index and layer
//! - [`layers`]: far-to-near layer table and quality presets
//! - [`star`]: one immutable [`StarDescriptor`] per star
//! - [`animation`]: per-star twinkle loop driven by the host clock
//! - [`compositor`]: [`GalaxyBackground`], which ties it all together and
//!   produces a paintable [`Scene`]
//!
//! ```no_run
//! use lib_starfield::{GalaxyBackground, StarfieldConfig, Theme, Viewport};
//!
//! let mut background = GalaxyBackground::new(&Theme::dark(), Viewport::new(390.0, 844.0), &StarfieldConfig::default());
//! background.mount(0);
//! background.tick(16, |_star, _opacity| {});
//! let scene = background.scene();
//! assert_eq!(scene.stars.len(), background.star_count());
//! ```

pub mod animation;
pub mod compositor;
pub mod error;
pub mod layers;
pub mod seed;
pub mod star;
pub mod theme;
pub mod viewport;

// Re-export commonly used types
pub use animation::{AnimationHandle, Phase, TwinkleTiming};
pub use compositor::{GalaxyBackground, NebulaShape, Scene, StarSprite};
pub use error::{Error, Result};
pub use layers::{LayerPlan, LayerSpec, Quality, StarfieldConfig, DEFAULT_LAYERS};
pub use seed::{seeded_random, seeded_range, SeedChannel};
pub use star::{build_star, ColorRole, StarDescriptor};
pub use theme::{Palette, Theme};
pub use viewport::Viewport;
