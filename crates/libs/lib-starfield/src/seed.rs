//! # Seeded Coordinate Generator
//!
//! Stateless pseudo-random draws keyed by an integer seed. Every placement,
//! size and timing decision in the starfield goes through [`seeded_random`], so
//! the same star index always lands in the same place with the same rhythm.

/// Distance between the seed spaces of two depth layers.
///
/// Large and prime so that layer `d + 1` never replays a seed from layer `d`.
const LAYER_STRIDE: f64 = 7919.0;

/// Spacing between consecutive global indices in seed space.
const INDEX_STRIDE: f64 = 1.618;

/// Spacing between channels drawn for the same star.
const CHANNEL_STRIDE: f64 = 31.7;

/// Map a seed to a stable value in `[0, 1)`.
///
/// `fract(sin(seed * 12.9898 + 78.233) * 43758.5453)`: the large multiplier
/// turns the smooth sine into a high-frequency hash, so neighbouring seeds give
/// uncorrelated results. Non-finite seeds map to `0.0`.
pub fn seeded_random(seed: f64) -> f64 {
    if !seed.is_finite() {
        return 0.0;
    }
    let x = (seed * 12.9898 + 78.233).sin() * 43758.5453;
    let r = x - x.floor();
    // fract of a tiny negative number rounds up to exactly 1.0
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}

/// Map a seed onto `[min, max)`.
pub fn seeded_range(seed: f64, min: f64, max: f64) -> f64 {
    min + seeded_random(seed) * (max - min)
}

/// Independent random streams drawn per star.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedChannel {
    Left,
    Top,
    Jitter,
    Bright,
    Dim,
    Delay,
    Opacity,
}

impl SeedChannel {
    fn offset(self) -> f64 {
        let slot = match self {
            SeedChannel::Left => 0,
            SeedChannel::Top => 1,
            SeedChannel::Jitter => 2,
            SeedChannel::Bright => 3,
            SeedChannel::Dim => 4,
            SeedChannel::Delay => 5,
            SeedChannel::Opacity => 6,
        };
        slot as f64 * CHANNEL_STRIDE
    }

    /// Seed for this channel of the star at `global_index` in layer `depth_index`.
    pub fn seed(self, global_index: usize, depth_index: usize) -> f64 {
        global_index as f64 * INDEX_STRIDE + depth_index as f64 * LAYER_STRIDE + self.offset()
    }

    /// Draw in `[0, 1)` for this channel.
    pub fn draw(self, global_index: usize, depth_index: usize) -> f64 {
        seeded_random(self.seed(global_index, depth_index))
    }

    /// Draw in `[min, max)` for this channel.
    pub fn draw_range(self, global_index: usize, depth_index: usize, min: f64, max: f64) -> f64 {
        seeded_range(self.seed(global_index, depth_index), min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_same_seed_same_value() {
        for seed in 0..500 {
            let seed = seed as f64;
            assert_eq!(seeded_random(seed).to_bits(), seeded_random(seed).to_bits());
        }
    }

    #[test]
    fn test_always_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..10_000 {
            let seed: f64 = rng.random_range(-1.0e6..1.0e6);
            let value = seeded_random(seed);
            assert!((0.0..1.0).contains(&value), "seed {seed} gave {value}");
        }
    }

    #[test]
    fn test_non_finite_seed_is_defined() {
        assert_eq!(seeded_random(f64::NAN), 0.0);
        assert_eq!(seeded_random(f64::INFINITY), 0.0);
        assert_eq!(seeded_random(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn test_adjacent_seeds_are_spread() {
        // 2000 consecutive seeds should hit every decile
        let mut deciles = [0usize; 10];
        for seed in 0..2000 {
            deciles[(seeded_random(seed as f64) * 10.0) as usize] += 1;
        }
        for (bucket, count) in deciles.iter().enumerate() {
            assert!(*count > 120, "decile {bucket} only got {count} hits");
        }
    }

    #[test]
    fn test_channels_do_not_collide() {
        let channels = [
            SeedChannel::Left,
            SeedChannel::Top,
            SeedChannel::Jitter,
            SeedChannel::Bright,
            SeedChannel::Dim,
            SeedChannel::Delay,
            SeedChannel::Opacity,
        ];
        for (i, a) in channels.iter().enumerate() {
            for b in &channels[i + 1..] {
                assert_ne!(a.seed(10, 1), b.seed(10, 1));
            }
        }
        assert_ne!(SeedChannel::Left.seed(5, 0), SeedChannel::Left.seed(5, 1));
    }

    #[test]
    fn test_range_mapping() {
        for seed in 0..200 {
            let v = seeded_range(seed as f64, 1200.0, 3400.0);
            assert!((1200.0..3400.0).contains(&v));
        }
    }
}
