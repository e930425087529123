//! Condition Selection
//!
//! Picks the primary condition for a crop. Without an image the catalog's
//! first entry is returned untouched. With an image the probability is boosted,
//! and with `reselect_chance` another catalog condition is surfaced instead
//! (the image "revealing a more specific finding").
//!
//! Randomness comes only from the caller-supplied `Rng`, so a seeded generator
//! reproduces a selection exactly.

use rand::Rng;

use crate::catalog::DiseaseCatalog;
use crate::config::EngineConfig;
use crate::types::{ConditionRecord, HEALTHY_SENTINEL};

/// Select the primary condition for `crop_type`.
///
/// Never fails: unknown crops resolve to the healthy sentinel regardless of
/// the image signal.
pub fn select_condition<R: Rng + ?Sized>(
    catalog: &DiseaseCatalog,
    crop_type: &str,
    image_signal: bool,
    config: &EngineConfig,
    rng: &mut R,
) -> ConditionRecord {
    let candidates = catalog.lookup(crop_type);

    let Some(primary) = candidates.first() else {
        tracing::warn!("No catalog entry for crop '{}', falling back to healthy", crop_type);
        return HEALTHY_SENTINEL;
    };

    if !image_signal {
        return *primary;
    }

    let boosted = primary.with_probability(boost(primary.probability, config.image_boost, config));

    if candidates.len() > 1 && rng.gen::<f64>() < config.reselect_chance {
        // Uniform over the non-primary entries so the finding always changes
        let idx = rng.gen_range(1..candidates.len());
        let alternative = &candidates[idx];
        let reselected =
            alternative.with_probability(boost(alternative.probability, config.reselect_boost, config));

        tracing::debug!(
            "Image re-selected '{}' over '{}' for {} (p={:.2})",
            reselected.name,
            primary.name,
            crop_type,
            reselected.probability
        );
        return reselected;
    }

    tracing::debug!(
        "Image boosted '{}' for {}: {:.2} -> {:.2}",
        primary.name,
        crop_type,
        primary.probability,
        boosted.probability
    );
    boosted
}

fn boost(probability: f64, delta: f64, config: &EngineConfig) -> f64 {
    (probability + delta).min(config.probability_cap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::catalog::CROP_TYPES;
    use crate::types::SeverityTier;

    fn never_reselect() -> EngineConfig {
        EngineConfig {
            reselect_chance: 0.0,
            ..EngineConfig::default()
        }
    }

    fn always_reselect() -> EngineConfig {
        EngineConfig {
            reselect_chance: 1.0,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_no_image_returns_primary_unchanged() {
        let catalog = DiseaseCatalog::global();
        let mut rng = StdRng::seed_from_u64(7);

        for crop in CROP_TYPES {
            let selected = select_condition(catalog, crop, false, &always_reselect(), &mut rng);
            assert_eq!(selected, catalog.lookup(crop)[0]);
        }
    }

    #[test]
    fn test_unknown_crop_is_healthy_with_or_without_image() {
        let catalog = DiseaseCatalog::global();
        let mut rng = StdRng::seed_from_u64(1);

        for image in [false, true] {
            let selected = select_condition(catalog, "UnknownCrop", image, &always_reselect(), &mut rng);
            assert_eq!(selected, HEALTHY_SENTINEL);
        }
    }

    #[test]
    fn test_image_boosts_primary() {
        let catalog = DiseaseCatalog::global();
        let mut rng = StdRng::seed_from_u64(3);

        let selected = select_condition(catalog, "Wheat", true, &never_reselect(), &mut rng);
        assert_eq!(selected.name, "Rust");
        assert_eq!(selected.severity, SeverityTier::Medium);
        assert_relative_eq!(selected.probability, 0.75, epsilon = 1e-9);
    }

    #[test]
    fn test_image_boost_is_capped() {
        let catalog = DiseaseCatalog::global();
        let mut rng = StdRng::seed_from_u64(3);

        // Potato primary is Late Blight at 0.85
        let selected = select_condition(catalog, "Potato", true, &never_reselect(), &mut rng);
        assert_eq!(selected.name, "Late Blight");
        assert!(selected.probability <= 0.95);
        assert_relative_eq!(selected.probability, 0.95, epsilon = 1e-9);
    }

    #[test]
    fn test_reselection_picks_a_different_condition() {
        let catalog = DiseaseCatalog::global();

        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_condition(catalog, "Rice", true, &always_reselect(), &mut rng);

            assert_ne!(selected.name, "Blast");
            let original = catalog
                .lookup("Rice")
                .iter()
                .find(|c| c.name == selected.name)
                .expect("re-selected condition comes from the catalog");
            assert_eq!(selected.severity, original.severity);
            assert_relative_eq!(
                selected.probability,
                (original.probability + 0.15).min(0.95),
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_default_reselection_rate() {
        let catalog = DiseaseCatalog::global();
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(30);

        let runs = 1000;
        let mut boosted_primary = 0;
        let mut reselected = 0;

        for _ in 0..runs {
            let selected = select_condition(catalog, "Wheat", true, &config, &mut rng);
            if selected.name == "Rust" {
                assert_relative_eq!(selected.probability, 0.75, epsilon = 1e-9);
                boosted_primary += 1;
            } else {
                assert!(
                    selected.name == "Powdery Mildew" || selected.name == "Leaf Blight",
                    "unexpected condition {}",
                    selected.name
                );
                reselected += 1;
            }
        }

        assert!(boosted_primary > 0);
        assert!(reselected > 0);
        assert_eq!(boosted_primary + reselected, runs);

        let share = reselected as f64 / runs as f64;
        assert!((share - 0.30).abs() < 0.05, "re-selection share {}", share);
    }

    #[test]
    fn test_image_probability_never_exceeds_cap() {
        let catalog = DiseaseCatalog::global();
        let config = EngineConfig::default();
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..200 {
            for crop in CROP_TYPES {
                let selected = select_condition(catalog, crop, true, &config, &mut rng);
                assert!(selected.probability <= 0.95, "{} -> {}", crop, selected.probability);
                assert!(selected.probability >= 0.0);
            }
        }
    }

    #[test]
    fn test_same_seed_same_selection() {
        let catalog = DiseaseCatalog::global();
        let config = EngineConfig::default();

        let run = |seed: u64| -> Vec<ConditionRecord> {
            let mut rng = StdRng::seed_from_u64(seed);
            CROP_TYPES
                .iter()
                .map(|crop| select_condition(catalog, crop, true, &config, &mut rng))
                .collect()
        };

        assert_eq!(run(42), run(42));
    }
}
