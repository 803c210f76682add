//! Seed tables and the builder that resolves them into a [`ColorSystem`].
//!
//! A theme variant is pure data: one [`VariantSeeds`] value of literal CSS
//! seed strings. [`build_system`] runs every seed through
//! [`swatch_color::create_color`] so no variant carries its own conversion
//! logic. The first malformed seed aborts the build with its key path.

use std::collections::BTreeMap;

use swatch_color::{create_color, validate_color};
use tracing::debug;

use crate::error::ThemeError;
use crate::model::{
    ColorSystem, ColorVariants, Depth, MaterialTable, MaterialTier, Named, SemanticColor,
    ThemeVariant,
};

/// Light and dark seed strings for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub light: &'static str,
    pub dark: &'static str,
}

/// Shorthand for table literals.
#[must_use]
pub const fn seed(light: &'static str, dark: &'static str) -> Seed {
    Seed { light, dark }
}

pub type NamedSeeds = &'static [(&'static str, Seed)];
pub type DepthSeeds = &'static [(Depth, Seed)];

/// Every seed for one theme variant.
#[derive(Debug, Clone, Copy)]
pub struct VariantSeeds {
    pub variant: ThemeVariant,
    pub regular: NamedSeeds,
    pub regular_high_contrast: NamedSeeds,
    pub element: &'static [(&'static str, DepthSeeds)],
    pub background: DepthSeeds,
    pub fill: DepthSeeds,
    pub material: &'static [(MaterialTier, Seed)],
    pub application: NamedSeeds,
}

/// Resolve a seed table into a [`ColorSystem`].
///
/// # Errors
///
/// - [`ThemeError::Seed`] for the first seed that fails to convert
/// - [`ThemeError::DuplicateKey`] when a table repeats a key or depth
/// - [`ThemeError::MissingMaterialTier`] when the material table is incomplete
pub fn build_system(seeds: &VariantSeeds) -> Result<ColorSystem, ThemeError> {
    let builder = Builder {
        variant: seeds.variant,
    };

    let mut element = Named::new();
    for (role, levels) in seeds.element {
        let path = format!("element.{role}");
        let semantic = builder.semantic(&path, levels)?;
        if !element.insert(role, semantic) {
            return Err(builder.duplicate(path));
        }
    }

    Ok(ColorSystem {
        regular: builder.named("regular", seeds.regular)?,
        regular_high_contrast: builder.named("regularHighContrast", seeds.regular_high_contrast)?,
        element,
        background: builder.semantic("background", seeds.background)?,
        fill: builder.semantic("fill", seeds.fill)?,
        material: builder.material(seeds.material)?,
        application: builder.named("application", seeds.application)?,
    })
}

struct Builder {
    variant: ThemeVariant,
}

impl Builder {
    fn duplicate(&self, path: String) -> ThemeError {
        ThemeError::DuplicateKey {
            variant: self.variant,
            path,
        }
    }

    fn variants(&self, path: &str, seed: Seed) -> Result<ColorVariants, ThemeError> {
        let convert = |tone: &str, input: &str| {
            for warning in validate_color(input).warnings {
                debug!(variant = %self.variant, path, tone, %warning, "seed outside the safe range");
            }
            create_color(input).map_err(|source| ThemeError::Seed {
                variant: self.variant,
                path: format!("{path}.{tone}"),
                source,
            })
        };
        Ok(ColorVariants {
            light: convert("light", seed.light)?,
            dark: convert("dark", seed.dark)?,
        })
    }

    fn named(&self, category: &str, entries: &[(&str, Seed)]) -> Result<Named<ColorVariants>, ThemeError> {
        let mut table = Named::new();
        for (key, seed) in entries {
            let path = format!("{category}.{key}");
            let variants = self.variants(&path, *seed)?;
            if !table.insert(key, variants) {
                return Err(self.duplicate(path));
            }
        }
        Ok(table)
    }

    fn semantic(&self, category: &str, entries: &[(Depth, Seed)]) -> Result<SemanticColor, ThemeError> {
        let mut semantic = SemanticColor::default();
        for (depth, seed) in entries {
            let path = format!("{category}.{}", depth.name());
            let variants = self.variants(&path, *seed)?;
            if !semantic.insert(*depth, variants) {
                return Err(self.duplicate(path));
            }
        }
        Ok(semantic)
    }

    fn material(&self, entries: &[(MaterialTier, Seed)]) -> Result<MaterialTable, ThemeError> {
        let mut tiers = BTreeMap::new();
        for (tier, seed) in entries {
            let path = format!("material.{}", tier.name());
            let variants = self.variants(&path, *seed)?;
            if tiers.insert(*tier, variants).is_some() {
                return Err(self.duplicate(path));
            }
        }
        if let Some(tier) = MaterialTier::ALL.into_iter().find(|t| !tiers.contains_key(t)) {
            return Err(ThemeError::MissingMaterialTier {
                variant: self.variant,
                tier,
            });
        }
        Ok(MaterialTable::new(tiers))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
