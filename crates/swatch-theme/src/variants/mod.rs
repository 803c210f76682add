//! Seed tables for the three theme variants.
//!
//! Each submodule is data only: a single [`VariantSeeds`] constant. Keys in
//! `regular` are the contract: every other variant must define the same key
//! paths (it may add more, as kawaii does with its extended palette).

use crate::model::ThemeVariant;
use crate::seed::VariantSeeds;

pub mod high_contrast;
pub mod kawaii;
pub mod regular;

/// The seed table for a variant.
#[must_use]
pub fn seeds(variant: ThemeVariant) -> &'static VariantSeeds {
    match variant {
        ThemeVariant::Regular => &regular::SEEDS,
        ThemeVariant::HighContrast => &high_contrast::SEEDS,
        ThemeVariant::Kawaii => &kawaii::SEEDS,
    }
}

#[cfg(test)]
mod tests {
    use swatch_color::space::hue_diff;
    use swatch_color::value::{
        ROUNDTRIP_HUE_MIN_CHROMA, ROUNDTRIP_HUE_TOLERANCE, ROUNDTRIP_LC_TOLERANCE,
    };
    use swatch_color::{create_color_from_oklch, create_color_from_srgb, parse_oklch};

    use super::*;
    use crate::seed::Seed;

    /// Every light and dark seed string in a table.
    fn seed_strings(table: &VariantSeeds) -> Vec<&'static str> {
        let mut all: Vec<Seed> = Vec::new();
        all.extend(table.regular.iter().map(|(_, s)| *s));
        all.extend(table.regular_high_contrast.iter().map(|(_, s)| *s));
        for (_, levels) in table.element {
            all.extend(levels.iter().map(|(_, s)| *s));
        }
        all.extend(table.background.iter().map(|(_, s)| *s));
        all.extend(table.fill.iter().map(|(_, s)| *s));
        all.extend(table.material.iter().map(|(_, s)| *s));
        all.extend(table.application.iter().map(|(_, s)| *s));
        all.into_iter().flat_map(|s| [s.light, s.dark]).collect()
    }

    fn within(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance + 1e-9
    }

    #[test]
    fn seed_tables_are_labelled_with_their_variant() {
        for variant in ThemeVariant::ALL {
            assert_eq!(seeds(variant).variant, variant);
        }
    }

    #[test]
    fn regular_shape() {
        let s = seeds(ThemeVariant::Regular);
        assert!(s.regular.len() >= 13);
        assert_eq!(s.regular.len(), s.regular_high_contrast.len());
        assert_eq!(s.background.len(), 5);
        assert_eq!(s.fill.len(), 4);
        assert_eq!(s.material.len(), 6);
        assert_eq!(s.application.len(), 3);
        let roles: Vec<_> = s.element.iter().map(|(role, _)| *role).collect();
        assert_eq!(
            roles,
            [
                "text",
                "border",
                "link",
                "separator",
                "placeholderText",
                "disabledControl",
                "disabledText",
            ]
        );
    }

    // ── Round trip over every shipped seed ──────────────────────────

    #[test]
    fn every_oklch_seed_survives_the_srgb_round_trip() {
        let mut checked = 0;
        let mut out_of_gamut = 0;
        for variant in ThemeVariant::ALL {
            for input in seed_strings(seeds(variant)) {
                if !input.starts_with("oklch(") {
                    continue;
                }
                let original = parse_oklch(input).unwrap();
                let srgb = create_color_from_oklch(input).unwrap().srgb;
                let recovered = parse_oklch(&create_color_from_srgb(&srgb).unwrap().oklch).unwrap();
                let context = format!("{variant} {input} -> {srgb}");

                assert!(within(original.l, recovered.l, ROUNDTRIP_LC_TOLERANCE), "{context}: L {}", recovered.l);
                if original.in_srgb_gamut() {
                    assert!(within(original.c, recovered.c, ROUNDTRIP_LC_TOLERANCE), "{context}: C {}", recovered.c);
                    if original.c >= ROUNDTRIP_HUE_MIN_CHROMA {
                        assert!(
                            hue_diff(original.h, recovered.h) <= ROUNDTRIP_HUE_TOLERANCE,
                            "{context}: H {}",
                            recovered.h
                        );
                    }
                } else {
                    out_of_gamut += 1;
                    assert!(recovered.c <= original.c + ROUNDTRIP_LC_TOLERANCE, "{context}: C {}", recovered.c);
                    assert!(
                        hue_diff(original.h, recovered.h) <= ROUNDTRIP_HUE_TOLERANCE,
                        "{context}: H {}",
                        recovered.h
                    );
                }
                checked += 1;
            }
        }
        assert!(checked > 300, "only {checked} seeds checked");
        assert!(out_of_gamut > 0);
    }
}
