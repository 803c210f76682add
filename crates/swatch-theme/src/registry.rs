//! The assembled color systems, one per theme variant.
//!
//! [`ThemeRegistry::build`] resolves every seed table and then enforces key
//! parity: each key path in the regular variant must exist in the other two,
//! because stylesheets and the docs site look colors up by name across
//! variants.

use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

use crate::error::ThemeError;
use crate::model::{ColorSystem, ThemeVariant};
use crate::seed::build_system;
use crate::variants;

/// All three color systems, keyed by variant.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    regular: ColorSystem,
    high_contrast: ColorSystem,
    kawaii: ColorSystem,
}

impl ThemeRegistry {
    /// Build every variant from its seed table and check key parity.
    ///
    /// # Errors
    ///
    /// The first seed or parity failure, see [`ThemeError`].
    pub fn build() -> Result<Self, ThemeError> {
        let build = |variant: ThemeVariant| {
            let system = build_system(variants::seeds(variant))?;
            debug!(%variant, entries = system.entry_count(), "assembled color system");
            Ok::<_, ThemeError>(system)
        };

        let registry = Self {
            regular: build(ThemeVariant::Regular)?,
            high_contrast: build(ThemeVariant::HighContrast)?,
            kawaii: build(ThemeVariant::Kawaii)?,
        };
        registry.check_key_parity()?;
        Ok(registry)
    }

    #[must_use]
    pub const fn get(&self, variant: ThemeVariant) -> &ColorSystem {
        match variant {
            ThemeVariant::Regular => &self.regular,
            ThemeVariant::HighContrast => &self.high_contrast,
            ThemeVariant::Kawaii => &self.kawaii,
        }
    }

    /// Variants in canonical order: regular, high-contrast, kawaii.
    pub fn iter(&self) -> impl Iterator<Item = (ThemeVariant, &ColorSystem)> {
        ThemeVariant::ALL.into_iter().map(|v| (v, self.get(v)))
    }

    /// Verify every regular key path exists in the other variants.
    ///
    /// # Errors
    ///
    /// [`ThemeError::MissingKey`] naming the first gap.
    pub fn check_key_parity(&self) -> Result<(), ThemeError> {
        check_parity(&self.regular, self.iter().skip(1))
    }
}

/// Serializes as `{ "regular": ..., "high-contrast": ..., "kawaii": ... }`.
impl Serialize for ThemeRegistry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(ThemeVariant::ALL.len()))?;
        for (variant, system) in self.iter() {
            map.serialize_entry(variant.name(), system)?;
        }
        map.end()
    }
}

fn check_parity<'a>(
    reference: &ColorSystem,
    others: impl Iterator<Item = (ThemeVariant, &'a ColorSystem)>,
) -> Result<(), ThemeError> {
    let expected = reference.key_paths();
    for (variant, system) in others {
        let present = system.key_paths();
        if let Some(path) = expected.iter().find(|p| !present.contains(p)) {
            return Err(ThemeError::MissingKey {
                variant,
                path: path.clone(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Depth, MaterialTier};
    use crate::seed::{VariantSeeds, seed};

    #[test]
    fn all_variants_build() {
        let registry = ThemeRegistry::build().unwrap();
        for (variant, system) in registry.iter() {
            assert!(system.regular.len() >= 13, "{variant} has too few base colors");
            assert_eq!(system.background.len(), 5, "{variant}");
            assert_eq!(system.fill.len(), 4, "{variant}");
            assert_eq!(system.application.len(), 3, "{variant}");
            assert_eq!(system.material.iter().count(), 6, "{variant}");
        }
    }

    #[test]
    fn every_regular_key_exists_in_every_variant() {
        let registry = ThemeRegistry::build().unwrap();
        let regular = registry.get(ThemeVariant::Regular).key_paths();
        for variant in [ThemeVariant::HighContrast, ThemeVariant::Kawaii] {
            let paths = registry.get(variant).key_paths();
            for path in &regular {
                assert!(paths.contains(path), "{variant} is missing {path}");
            }
        }
    }

    #[test]
    fn kawaii_extends_the_palette() {
        let registry = ThemeRegistry::build().unwrap();
        let kawaii = registry.get(ThemeVariant::Kawaii);
        assert!(kawaii.regular.contains("lavender"));
        assert!(kawaii.regular.contains("peach"));
        assert!(!registry.get(ThemeVariant::Regular).regular.contains("lavender"));
    }

    #[test]
    fn every_color_has_p3() {
        let registry = ThemeRegistry::build().unwrap();
        for (variant, system) in registry.iter() {
            for (key, colors) in system.regular.iter() {
                assert!(colors.light.p3.is_some(), "{variant} {key} light");
                assert!(colors.dark.p3.is_some(), "{variant} {key} dark");
            }
        }
    }

    #[test]
    fn json_is_keyed_by_variant_name() {
        let registry = ThemeRegistry::build().unwrap();
        let json = serde_json::to_value(&registry).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 3);
        let kawaii = &json["kawaii"];
        assert!(kawaii["regularHighContrast"]["red"]["light"]["srgb"].is_string());
        assert!(kawaii["element"]["placeholderText"]["primary"]["dark"]["oklch"].is_string());
        assert!(json["high-contrast"]["material"]["ultraThick"]["light"]["p3"].is_string());
    }

    static PARTIAL: VariantSeeds = VariantSeeds {
        variant: ThemeVariant::Kawaii,
        regular: &[("red", seed("oklch(0.7 0.17 15)", "oklch(0.76 0.14 15)"))],
        regular_high_contrast: &[],
        element: &[],
        background: &[(Depth::Primary, seed("oklch(1 0 0)", "oklch(0 0 0)"))],
        fill: &[],
        material: &[
            (MaterialTier::UltraThick, seed("oklch(1 0 0 / 0.9)", "oklch(0 0 0 / 0.9)")),
            (MaterialTier::Thick, seed("oklch(1 0 0 / 0.8)", "oklch(0 0 0 / 0.8)")),
            (MaterialTier::Regular, seed("oklch(1 0 0 / 0.7)", "oklch(0 0 0 / 0.7)")),
            (MaterialTier::Thin, seed("oklch(1 0 0 / 0.6)", "oklch(0 0 0 / 0.6)")),
            (MaterialTier::UltraThin, seed("oklch(1 0 0 / 0.5)", "oklch(0 0 0 / 0.5)")),
            (MaterialTier::Opaque, seed("oklch(1 0 0 / 1)", "oklch(0 0 0 / 1)")),
        ],
        application: &[],
    };

    #[test]
    fn parity_gap_is_reported() {
        let regular = build_system(variants::seeds(ThemeVariant::Regular)).unwrap();
        let partial = build_system(&PARTIAL).unwrap();
        let err = check_parity(&regular, [(ThemeVariant::Kawaii, &partial)].into_iter()).unwrap_err();
        assert_eq!(
            err,
            ThemeError::MissingKey {
                variant: ThemeVariant::Kawaii,
                path: "regular.orange".to_string(),
            }
        );
    }
}
