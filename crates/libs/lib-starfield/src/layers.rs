//! # Layer Planner
//!
//! Depth layers ordered far to near: far layers are small, numerous and dim,
//! near layers are large, sparse and bright. The plan also partitions the
//! global star index space into one contiguous range per layer, so a star's
//! global index alone identifies it across the whole field.
//!
//! The star count is the dominant rendering cost. [`Quality`] is the one
//! tunable: it trims per-layer counts, or whole layers, on weaker hardware.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::error::Error;

/// Configuration of one depth tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerSpec {
    pub depth_index: usize,
    pub star_count: usize,
    pub size_multiplier: f32,
    /// Lowest opacity reached at the end of the dim phase.
    pub dim_floor: f32,
}

impl LayerSpec {
    pub const MIN_SIZE_MULTIPLIER: f32 = 0.1;
    pub const MAX_DIM_FLOOR: f32 = 0.95;

    pub fn new(depth_index: usize, star_count: usize, size_multiplier: f32, dim_floor: f32) -> Self {
        Self {
            depth_index,
            star_count,
            size_multiplier,
            dim_floor,
        }
    }

    /// Clamp every field into its valid range.
    pub fn sanitized(self) -> Self {
        let size_multiplier = if self.size_multiplier.is_finite() {
            self.size_multiplier.max(Self::MIN_SIZE_MULTIPLIER)
        } else {
            1.0
        };
        let dim_floor = if self.dim_floor.is_finite() {
            self.dim_floor.clamp(0.0, Self::MAX_DIM_FLOOR)
        } else {
            0.0
        };
        Self {
            depth_index: self.depth_index,
            star_count: self.star_count.max(1),
            size_multiplier,
            dim_floor,
        }
    }
}

/// Default far-to-near table: population 3:2:1, size 1x/2x/3x.
pub const DEFAULT_LAYERS: [LayerSpec; 3] = [
    LayerSpec { depth_index: 0, star_count: 120, size_multiplier: 1.0, dim_floor: 0.15 },
    LayerSpec { depth_index: 1, star_count: 80, size_multiplier: 2.0, dim_floor: 0.25 },
    LayerSpec { depth_index: 2, star_count: 40, size_multiplier: 3.0, dim_floor: 0.35 },
];

/// Density preset for the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    /// Two far layers at 40% density.
    Low,
    /// All layers at 60% density.
    Medium,
    /// Full table.
    #[default]
    High,
}

impl Quality {
    pub fn all() -> [Quality; 3] {
        [Quality::Low, Quality::Medium, Quality::High]
    }

    pub fn label(self) -> &'static str {
        match self {
            Quality::Low => "low",
            Quality::Medium => "medium",
            Quality::High => "high",
        }
    }

    fn layer_limit(self) -> usize {
        match self {
            Quality::Low => 2,
            Quality::Medium | Quality::High => usize::MAX,
        }
    }

    fn density(self) -> f32 {
        match self {
            Quality::Low => 0.4,
            Quality::Medium => 0.6,
            Quality::High => 1.0,
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Quality {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Quality::Low),
            "medium" | "med" => Ok(Quality::Medium),
            "high" => Ok(Quality::High),
            other => Err(Error::UnknownQuality(other.to_string())),
        }
    }
}

/// Engine configuration: a quality preset plus an optional custom layer table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarfieldConfig {
    pub quality: Quality,
    /// Replaces [`DEFAULT_LAYERS`] before the quality preset is applied.
    pub layers: Option<Vec<LayerSpec>>,
}

impl StarfieldConfig {
    pub fn with_quality(quality: Quality) -> Self {
        Self { quality, layers: None }
    }

    pub fn with_layers(layers: Vec<LayerSpec>) -> Self {
        Self {
            quality: Quality::High,
            layers: Some(layers),
        }
    }
}

/// Ordered layers with their global index ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPlan {
    layers: Vec<LayerSpec>,
    offsets: Vec<usize>,
}

impl LayerPlan {
    /// Build from a config. Layers are re-indexed 0..N in far-to-near order.
    pub fn from_config(config: &StarfieldConfig) -> Self {
        let table: Vec<LayerSpec> = match &config.layers {
            Some(custom) if !custom.is_empty() => custom.clone(),
            _ => DEFAULT_LAYERS.to_vec(),
        };

        let density = config.quality.density();
        let layers = table
            .into_iter()
            .take(config.quality.layer_limit())
            .enumerate()
            .map(|(depth, spec)| {
                let star_count = (spec.star_count as f32 * density).round() as usize;
                LayerSpec {
                    depth_index: depth,
                    star_count,
                    ..spec
                }
                .sanitized()
            })
            .collect();

        Self::from_layers(layers)
    }

    fn from_layers(layers: Vec<LayerSpec>) -> Self {
        let offsets = layers
            .iter()
            .scan(0usize, |next, spec| {
                let start = *next;
                *next += spec.star_count;
                Some(start)
            })
            .collect();
        Self { layers, offsets }
    }

    pub fn layers(&self) -> &[LayerSpec] {
        &self.layers
    }

    pub fn layer(&self, depth_index: usize) -> Option<&LayerSpec> {
        self.layers.get(depth_index)
    }

    pub fn total_stars(&self) -> usize {
        self.layers.iter().map(|l| l.star_count).sum()
    }

    /// Global index range owned by a layer.
    pub fn range(&self, depth_index: usize) -> Range<usize> {
        match (self.offsets.get(depth_index), self.layers.get(depth_index)) {
            (Some(&start), Some(spec)) => start..start + spec.star_count,
            _ => 0..0,
        }
    }

    /// Every `(layer, local_index, global_index)` triple, far layer first.
    pub fn stars(&self) -> impl Iterator<Item = (&LayerSpec, usize, usize)> + '_ {
        self.layers
            .iter()
            .zip(&self.offsets)
            .flat_map(|(spec, &offset)| (0..spec.star_count).map(move |local| (spec, local, offset + local)))
    }
}

impl Default for LayerPlan {
    fn default() -> Self {
        Self::from_config(&StarfieldConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_shape() {
        let plan = LayerPlan::default();
        let counts: Vec<usize> = plan.layers().iter().map(|l| l.star_count).collect();
        assert_eq!(counts, vec![120, 80, 40]);
        assert_eq!(plan.total_stars(), 240);

        for pair in plan.layers().windows(2) {
            assert!(pair[0].size_multiplier < pair[1].size_multiplier);
            assert!(pair[0].dim_floor < pair[1].dim_floor);
            assert!(pair[0].star_count > pair[1].star_count);
        }
    }

    #[test]
    fn test_ranges_are_disjoint_and_contiguous() {
        let plan = LayerPlan::default();
        assert_eq!(plan.range(0), 0..120);
        assert_eq!(plan.range(1), 120..200);
        assert_eq!(plan.range(2), 200..240);
        assert_eq!(plan.range(3), 0..0);

        let globals: Vec<usize> = plan.stars().map(|(_, _, g)| g).collect();
        assert_eq!(globals, (0..240).collect::<Vec<_>>());
    }

    #[test]
    fn test_quality_presets_reduce_cost() {
        let low = LayerPlan::from_config(&StarfieldConfig::with_quality(Quality::Low));
        let medium = LayerPlan::from_config(&StarfieldConfig::with_quality(Quality::Medium));
        let high = LayerPlan::from_config(&StarfieldConfig::with_quality(Quality::High));

        assert_eq!(low.layers().len(), 2);
        assert_eq!(low.total_stars(), 48 + 32);
        assert_eq!(medium.layers().len(), 3);
        assert_eq!(medium.total_stars(), 72 + 48 + 24);
        assert!(low.total_stars() < medium.total_stars());
        assert!(medium.total_stars() < high.total_stars());
    }

    #[test]
    fn test_custom_layers_are_reindexed_and_sanitized() {
        let config = StarfieldConfig::with_layers(vec![
            LayerSpec::new(7, 0, -2.0, 1.5),
            LayerSpec::new(3, 10, f32::NAN, -0.2),
        ]);
        let plan = LayerPlan::from_config(&config);
        let first = plan.layer(0).unwrap();
        assert_eq!(first.depth_index, 0);
        assert_eq!(first.star_count, 1);
        assert_eq!(first.size_multiplier, LayerSpec::MIN_SIZE_MULTIPLIER);
        assert_eq!(first.dim_floor, LayerSpec::MAX_DIM_FLOOR);

        let second = plan.layer(1).unwrap();
        assert_eq!(second.depth_index, 1);
        assert_eq!(second.size_multiplier, 1.0);
        assert_eq!(second.dim_floor, 0.0);
    }

    #[test]
    fn test_quality_parsing() {
        assert_eq!("LOW".parse::<Quality>().unwrap(), Quality::Low);
        assert_eq!(" medium ".parse::<Quality>().unwrap(), Quality::Medium);
        assert!(matches!("ultra".parse::<Quality>(), Err(Error::UnknownQuality(q)) if q == "ultra"));
        assert_eq!(Quality::High.to_string(), "high");
    }

    #[test]
    fn test_config_from_json() {
        let config: StarfieldConfig = serde_json::from_str(r#"{ "quality": "medium" }"#).unwrap();
        assert_eq!(config.quality, Quality::Medium);
        assert!(config.layers.is_none());
    }
}
