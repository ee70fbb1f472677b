//! The built-in patterns: grid fit, record counts and reproducibility.

mod common;

use common::{TestResult, path_element_count, seeded};
use tilebg::patterns;
use tilebg::{GeneratorConfig, WallpaperGenerator};

fn expected_records(name: &str) -> usize {
    match name {
        // (1920/30 + 1) × (1200/24 + 1)
        "gosperflakes2" => 65 * 51,
        // (1920/32 + 1) × (1080/27 + 1)
        "hexagons" => 61 * 41,
        // (1920/128 + 1) × (1080/36 + 1), one big and two small flakes per cell
        "kochflakes3" => 16 * 31 * 3,
        // (1920/120 + 1) × (1080/60 + 1)
        "minkowskiflakes4" => 17 * 19,
        other => panic!("unexpected pattern {other}"),
    }
}

#[test]
fn every_pattern_builds_closed_paths() -> TestResult {
    for pattern in patterns::all() {
        let wallpaper = pattern.build(&mut seeded(1))?;
        assert_eq!(wallpaper.resolution, pattern.resolution());
        assert_eq!(wallpaper.metadata.author, "ccornix");
        assert_eq!(wallpaper.metadata.title, pattern.title());
        assert_eq!(
            wallpaper.paths.len(),
            expected_records(pattern.name()),
            "{}",
            pattern.name()
        );
        assert_eq!(wallpaper.closed_path_count(), wallpaper.paths.len());
        assert!(wallpaper.paths.iter().all(|p| p.classes().contains("stroke")));
    }
    Ok(())
}

#[test]
fn same_seed_same_svg() -> TestResult {
    let first = WallpaperGenerator::new("gosperflakes2")?.with_seed(11).generate_to_string()?;
    let second = WallpaperGenerator::new("gosperflakes2")?.with_seed(11).generate_to_string()?;
    let other = WallpaperGenerator::new("gosperflakes2")?.with_seed(12).generate_to_string()?;
    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_eq!(path_element_count(&first), path_element_count(&other));
    Ok(())
}

#[test]
fn koch_flakes_big_before_small() -> TestResult {
    let pattern = patterns::find("kochflakes3")?;
    let paths = pattern.paths(&mut seeded(1))?;
    let big_count = 16 * 31;
    let big = &paths[0];
    let small = &paths[big_count];
    // A big flake spans the cell height (72), a small one half of it.
    let height = |p: &tilebg::PlacedPath| {
        let ys: Vec<f64> = p.points().iter().map(|q| q.to_f64().1).collect();
        let max = ys.iter().cloned().fold(f64::MIN, f64::max);
        let min = ys.iter().cloned().fold(f64::MAX, f64::min);
        max - min
    };
    assert!((height(big) - 72.0).abs() < 1e-9);
    assert!((height(small) - 36.0).abs() < 1e-9);
    Ok(())
}

#[test]
fn config_drives_generator() -> TestResult {
    let config = GeneratorConfig::from_json(r#"{"pattern": "minkowskiflakes4", "seed": 4}"#)?;
    let generator = WallpaperGenerator::from_config(&config)?;
    assert_eq!(generator.pattern().name(), "minkowskiflakes4");
    assert_eq!(generator.seed(), 4);
    Ok(())
}
