//! End-to-end behaviour of a mounted starfield.

use std::collections::HashSet;

use lib_starfield::{GalaxyBackground, LayerSpec, StarfieldConfig, Theme, Viewport, DEFAULT_LAYERS};

fn phone() -> Viewport {
    Viewport::new(390.0, 844.0)
}

fn default_background() -> GalaxyBackground {
    GalaxyBackground::new(&Theme::dark(), phone(), &StarfieldConfig::default())
}

#[test]
fn default_field_has_240_distinct_stars() {
    let background = default_background();
    assert_eq!(background.star_count(), 240);

    let positions: HashSet<(u32, u32)> = background
        .descriptors()
        .map(|d| (d.left_pct().to_bits(), d.top_pct().to_bits()))
        .collect();
    assert_eq!(positions.len(), 240);
}

#[test]
fn far_layer_dims_deeper_than_near_layer() {
    let background = default_background();
    let floors: Vec<f32> = background.plan().layers().iter().map(|l| l.dim_floor).collect();
    assert!(floors[0] <= floors[2]);

    let far_max = background.descriptors().filter(|d| d.depth_index() == 0).map(|d| d.size_px()).fold(0.0, f32::max);
    let near_min = background
        .descriptors()
        .filter(|d| d.depth_index() == 2)
        .map(|d| d.size_px())
        .fold(f32::MAX, f32::min);
    assert!(far_max < near_min);
}

#[test]
fn stars_stay_visible_on_reference_phone() {
    let background = default_background();
    assert!(background.descriptors().all(|d| d.base_size_px() >= 0.8));
}

#[test]
fn rebuilding_gives_the_same_field() {
    let a = default_background();
    let b = default_background();
    assert!(a.descriptors().eq(b.descriptors()));
}

#[test]
fn resize_scales_sizes_without_moving_stars() {
    let mut background = GalaxyBackground::new(&Theme::dark(), Viewport::new(400.0, 800.0), &StarfieldConfig::default());
    let before: Vec<_> = background.descriptors().cloned().collect();

    background.set_viewport(Viewport::new(800.0, 1600.0));
    for (old, new) in before.iter().zip(background.descriptors()) {
        assert_eq!(old.global_index(), new.global_index());
        assert_eq!(old.left_pct(), new.left_pct());
        assert_eq!(old.top_pct(), new.top_pct());
        assert!((new.base_size_px() - old.base_size_px() * 2.0).abs() < 1e-4);
    }
}

#[test]
fn opacity_stays_between_floor_and_one_while_running() {
    let mut background = default_background();
    background.mount(1_000);

    let floors: Vec<f32> = background.descriptors().map(|d| d.dim_floor()).collect();
    let mut now = 1_000;
    while now < 21_000 {
        background.tick(now, |star, opacity| {
            assert!(opacity >= floors[star] && opacity <= 1.0, "star {star} at {opacity}");
        });
        now += 16;
    }
}

#[test]
fn teardown_silences_every_star() {
    let mut background = default_background();
    background.mount(0);
    for now in (0..4_000).step_by(16) {
        background.tick(now, |_, _| {});
    }

    background.unmount();
    assert_eq!(background.running_count(), 0);

    let mut calls = 0;
    for now in (4_000..30_000).step_by(16) {
        background.tick(now, |_, _| calls += 1);
    }
    assert_eq!(calls, 0);
}

#[test]
fn custom_layer_table_is_respected() {
    let config = StarfieldConfig::with_layers(vec![DEFAULT_LAYERS[0], LayerSpec::new(1, 10, 4.0, 0.5)]);
    let background = GalaxyBackground::new(&Theme::default(), phone(), &config);
    assert_eq!(background.star_count(), 130);
    assert_eq!(background.plan().range(1), 120..130);
}

#[test]
fn theme_file_round_trip_through_disk() {
    let path = std::env::temp_dir().join(format!("starfield-theme-{}.json", std::process::id()));
    std::fs::write(&path, r##"{ "colors": { "background": "#101010", "starPrimary": "#fafafa" } }"##).unwrap();

    let theme = Theme::load_from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let palette = theme.resolve();
    assert_eq!(palette.background.to_hex(), "#101010");
    assert!(Theme::load_from_file(&path).is_err());
}
