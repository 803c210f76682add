//! The color system data model.
//!
//! A [`ColorSystem`] is what one theme variant resolves to: every seed turned
//! into a [`ColorVariants`] pair, grouped by semantic category. Everything
//! here is immutable once built and iterates in a fixed order (seed-table
//! order for named entries, declaration order for depths and tiers), which is
//! what makes the CSS output byte-for-byte reproducible.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use swatch_color::ColorValue;

// ---------------------------------------------------------------------------
// Tone pair
// ---------------------------------------------------------------------------

/// Which half of a [`ColorVariants`] pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Light,
    Dark,
}

impl Tone {
    pub const ALL: [Self; 2] = [Self::Light, Self::Dark];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A color's light and dark tones. Always exactly two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorVariants {
    pub light: ColorValue,
    pub dark: ColorValue,
}

impl ColorVariants {
    #[must_use]
    pub const fn tone(&self, tone: Tone) -> &ColorValue {
        match tone {
            Tone::Light => &self.light,
            Tone::Dark => &self.dark,
        }
    }
}

// ---------------------------------------------------------------------------
// Depth and material tiers
// ---------------------------------------------------------------------------

/// Depth level in a background, fill, or element stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Depth {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
    Quinary,
}

impl Depth {
    pub const ALL: [Self; 5] = [
        Self::Primary,
        Self::Secondary,
        Self::Tertiary,
        Self::Quaternary,
        Self::Quinary,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Tertiary => "tertiary",
            Self::Quaternary => "quaternary",
            Self::Quinary => "quinary",
        }
    }
}

/// Opacity tier for translucent surfaces, thickest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialTier {
    UltraThick,
    Thick,
    Regular,
    Thin,
    UltraThin,
    Opaque,
}

impl MaterialTier {
    pub const ALL: [Self; 6] = [
        Self::UltraThick,
        Self::Thick,
        Self::Regular,
        Self::Thin,
        Self::UltraThin,
        Self::Opaque,
    ];

    /// The camelCase key used in paths and JSON (`ultraThick`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::UltraThick => "ultraThick",
            Self::Thick => "thick",
            Self::Regular => "regular",
            Self::Thin => "thin",
            Self::UltraThin => "ultraThin",
            Self::Opaque => "opaque",
        }
    }
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

/// Depth → tone pair. At most five levels, all optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SemanticColor {
    levels: BTreeMap<Depth, ColorVariants>,
}

impl SemanticColor {
    #[must_use]
    pub fn get(&self, depth: Depth) -> Option<&ColorVariants> {
        self.levels.get(&depth)
    }

    /// Levels in depth order, primary first.
    pub fn iter(&self) -> impl Iterator<Item = (Depth, &ColorVariants)> {
        self.levels.iter().map(|(d, v)| (*d, v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Returns `false` if the depth was already present.
    pub(crate) fn insert(&mut self, depth: Depth, variants: ColorVariants) -> bool {
        self.levels.insert(depth, variants).is_none()
    }
}

/// All six material tiers. Construction guarantees completeness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MaterialTable {
    tiers: BTreeMap<MaterialTier, ColorVariants>,
}

impl MaterialTable {
    pub(crate) const fn new(tiers: BTreeMap<MaterialTier, ColorVariants>) -> Self {
        Self { tiers }
    }

    #[must_use]
    pub fn get(&self, tier: MaterialTier) -> Option<&ColorVariants> {
        self.tiers.get(&tier)
    }

    /// Tiers thickest first.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialTier, &ColorVariants)> {
        self.tiers.iter().map(|(t, v)| (*t, v))
    }
}

/// An insertion-ordered table of named entries.
///
/// Small enough (a few dozen keys) that a linear `get` beats hashing, and the
/// order is what the generator walks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Named<T> {
    entries: Vec<(String, T)>,
}

impl<T> Named<T> {
    pub(crate) const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Returns `false` (and leaves the table unchanged) on a duplicate key.
    pub(crate) fn insert(&mut self, key: &str, value: T) -> bool {
        if self.contains(key) {
            return false;
        }
        self.entries.push((key.to_string(), value));
        true
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Serialize> Serialize for Named<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ---------------------------------------------------------------------------
// ColorSystem
// ---------------------------------------------------------------------------

/// One theme variant, fully resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorSystem {
    /// Named base colors (`red`, `blue`, ...).
    pub regular: Named<ColorVariants>,
    /// The same names, tuned for increased contrast.
    pub regular_high_contrast: Named<ColorVariants>,
    /// Element roles (`text`, `border`, `link`, ...) by depth.
    pub element: Named<SemanticColor>,
    /// Five-level background stack.
    pub background: SemanticColor,
    /// Four-level fill stack.
    pub fill: SemanticColor,
    /// Translucent surface materials.
    pub material: MaterialTable,
    /// Brand accents.
    pub application: Named<ColorVariants>,
}

impl ColorSystem {
    /// Every leaf key as a dotted path, in generation order.
    ///
    /// `regular.red`, `element.text.secondary`, `material.ultraThick`, ...
    #[must_use]
    pub fn key_paths(&self) -> Vec<String> {
        let mut paths = Vec::new();
        paths.extend(self.regular.keys().map(|k| format!("regular.{k}")));
        paths.extend(
            self.regular_high_contrast
                .keys()
                .map(|k| format!("regularHighContrast.{k}")),
        );
        for (role, semantic) in self.element.iter() {
            paths.extend(semantic.iter().map(|(d, _)| format!("element.{role}.{}", d.name())));
        }
        paths.extend(self.background.iter().map(|(d, _)| format!("background.{}", d.name())));
        paths.extend(self.fill.iter().map(|(d, _)| format!("fill.{}", d.name())));
        paths.extend(self.material.iter().map(|(t, _)| format!("material.{}", t.name())));
        paths.extend(self.application.keys().map(|k| format!("application.{k}")));
        paths
    }

    /// Number of [`ColorVariants`] leaves.
    #[must_use]
    pub fn entry_count(&self) -> usize {
        self.key_paths().len()
    }
}

// ---------------------------------------------------------------------------
// ThemeVariant
// ---------------------------------------------------------------------------

/// The three parallel color systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeVariant {
    Regular,
    HighContrast,
    Kawaii,
}

impl ThemeVariant {
    pub const ALL: [Self; 3] = [Self::Regular, Self::HighContrast, Self::Kawaii];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::HighContrast => "high-contrast",
            Self::Kawaii => "kawaii",
        }
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.name() == s)
            .ok_or_else(|| format!("unknown theme variant '{s}' (expected regular, high-contrast or kawaii)"))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use swatch_color::create_color;

    use super::*;

    fn pair(light: &str, dark: &str) -> ColorVariants {
        ColorVariants {
            light: create_color(light).unwrap(),
            dark: create_color(dark).unwrap(),
        }
    }

    #[test]
    fn named_keeps_insertion_order_and_rejects_duplicates() {
        let mut table = Named::new();
        assert!(table.insert("zeta", 1));
        assert!(table.insert("alpha", 2));
        assert!(!table.insert("zeta", 3));
        assert_eq!(table.keys().collect::<Vec<_>>(), vec!["zeta", "alpha"]);
        assert_eq!(table.get("zeta"), Some(&1));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn semantic_color_iterates_in_depth_order() {
        let mut semantic = SemanticColor::default();
        semantic.insert(Depth::Tertiary, pair("oklch(0.3 0 0)", "oklch(0.7 0 0)"));
        semantic.insert(Depth::Primary, pair("oklch(0.1 0 0)", "oklch(0.9 0 0)"));
        let depths: Vec<_> = semantic.iter().map(|(d, _)| d).collect();
        assert_eq!(depths, vec![Depth::Primary, Depth::Tertiary]);
        assert!(semantic.get(Depth::Secondary).is_none());
    }

    #[test]
    fn tone_selects_half() {
        let p = pair("oklch(1 0 0)", "oklch(0 0 0)");
        assert_eq!(p.tone(Tone::Light).srgb, "rgb(255 255 255)");
        assert_eq!(p.tone(Tone::Dark).srgb, "rgb(0 0 0)");
    }

    #[test]
    fn theme_variant_names_roundtrip() {
        for variant in ThemeVariant::ALL {
            assert_eq!(variant.name().parse::<ThemeVariant>(), Ok(variant));
        }
        assert!("neon".parse::<ThemeVariant>().is_err());
    }

    #[test]
    fn material_tier_serializes_camel_case() {
        let json = serde_json::to_string(&MaterialTier::UltraThick).unwrap();
        assert_eq!(json, "\"ultraThick\"");
    }
}
