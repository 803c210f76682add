//! CSS custom-property generation.
//!
//! Walks a [`ColorSystem`] once per tone and writes `--color-*` declarations
//! into Tailwind-style `@theme` blocks:
//!
//! ```text
//! @theme {                                   light tone
//!   --color-background: oklch(1 0 0);
//!   --color-background-srgb: rgb(255 255 255);
//!   --color-background-p3: color(display-p3 1 1 1);
//! }
//!
//! @media (prefers-color-scheme: dark) {      dark tone, wrapped per DarkMode
//!   @theme { ... }
//! }
//! ```
//!
//! Every category is flattened into `(variable name, ColorVariants)` pairs by
//! [`categories`], so there is a single emission loop regardless of how the
//! category is keyed. Output depends only on the input: same system, same
//! config, same bytes.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use swatch_color::ColorValue;

use crate::model::{ColorSystem, ColorVariants, Depth, Named, SemanticColor, Tone};

/// Selector used by [`DarkMode::Class`] when none is given.
pub const DEFAULT_CLASS_SELECTOR: &str = ".dark";

/// Selector used by [`DarkMode::DataAttribute`] when none is given.
pub const DEFAULT_DATA_ATTRIBUTE_SELECTOR: &str = r#"html[data-theme="dark"]"#;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Which encoding the bare `--color-<name>` variable carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorSpace {
    #[default]
    Oklch,
    Srgb,
    P3,
}

impl ColorSpace {
    pub const ALL: [Self; 3] = [Self::Srgb, Self::Oklch, Self::P3];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Oklch => "oklch",
            Self::Srgb => "srgb",
            Self::P3 => "p3",
        }
    }

    /// Pick this space's encoding, falling back to sRGB when P3 is absent.
    #[must_use]
    pub fn select(self, value: &ColorValue) -> &str {
        match self {
            Self::Oklch => &value.oklch,
            Self::Srgb => &value.srgb,
            Self::P3 => value.p3.as_deref().unwrap_or(&value.srgb),
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|space| space.name() == s)
            .ok_or_else(|| format!("unknown color space '{s}' (expected srgb, oklch or p3)"))
    }
}

/// How the dark tone is switched on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum DarkMode {
    /// Follow the OS via `prefers-color-scheme`.
    #[default]
    MediaQuery,
    /// A class on an ancestor, [`DEFAULT_CLASS_SELECTOR`] when `None`.
    Class(Option<String>),
    /// A data attribute, [`DEFAULT_DATA_ATTRIBUTE_SELECTOR`] when `None`.
    DataAttribute(Option<String>),
}

impl DarkMode {
    /// The strategy name used in generated file names.
    #[must_use]
    pub const fn strategy(&self) -> &'static str {
        match self {
            Self::MediaQuery => "media-query",
            Self::Class(_) => "class",
            Self::DataAttribute(_) => "data-attribute",
        }
    }

    /// The selector wrapping the dark block, if this strategy uses one.
    #[must_use]
    pub fn selector(&self) -> Option<&str> {
        match self {
            Self::MediaQuery => None,
            Self::Class(sel) => Some(sel.as_deref().unwrap_or(DEFAULT_CLASS_SELECTOR)),
            Self::DataAttribute(sel) => Some(sel.as_deref().unwrap_or(DEFAULT_DATA_ATTRIBUTE_SELECTOR)),
        }
    }

    fn opening(&self) -> String {
        match self.selector() {
            None => "@media (prefers-color-scheme: dark)".to_string(),
            Some(sel) => sel.to_string(),
        }
    }
}

/// Output formatting knobs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    pub color_space: ColorSpace,
}

/// Everything [`generate_css`] needs.
#[derive(Debug, Clone)]
pub struct GeneratorConfig<'a> {
    pub colors: &'a ColorSystem,
    pub dark_mode: DarkMode,
    pub format: FormatOptions,
}

impl<'a> GeneratorConfig<'a> {
    /// OKLCH values, media-query dark mode.
    #[must_use]
    pub fn new(colors: &'a ColorSystem) -> Self {
        Self {
            colors,
            dark_mode: DarkMode::default(),
            format: FormatOptions::default(),
        }
    }

    #[must_use]
    pub fn dark_mode(mut self, dark_mode: DarkMode) -> Self {
        self.dark_mode = dark_mode;
        self
    }

    #[must_use]
    pub fn color_space(mut self, color_space: ColorSpace) -> Self {
        self.format.color_space = color_space;
        self
    }
}

// ---------------------------------------------------------------------------
// Naming
// ---------------------------------------------------------------------------

/// `placeholderText` → `placeholder-text`.
fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// `background` + primary → `background`; + secondary → `background-secondary`.
fn depth_name(base: &str, depth: Depth) -> String {
    match depth {
        Depth::Primary => base.to_string(),
        other => format!("{base}-{}", other.name()),
    }
}

/// One category flattened into `(name, colors)` pairs, names without the
/// `--color-` prefix.
struct Category<'a> {
    title: &'static str,
    entries: Vec<(String, &'a ColorVariants)>,
}

fn named_entries<'a>(table: &'a Named<ColorVariants>, suffix: &str) -> Vec<(String, &'a ColorVariants)> {
    table
        .iter()
        .map(|(key, colors)| (format!("{}{suffix}", kebab_case(key)), colors))
        .collect()
}

fn depth_entries<'a>(base: &str, semantic: &'a SemanticColor) -> Vec<(String, &'a ColorVariants)> {
    semantic
        .iter()
        .map(|(depth, colors)| (depth_name(base, depth), colors))
        .collect()
}

/// Flatten a color system in generation order.
fn categories(system: &ColorSystem) -> Vec<Category<'_>> {
    let element = system
        .element
        .iter()
        .flat_map(|(role, semantic)| depth_entries(&kebab_case(role), semantic))
        .collect();

    vec![
        Category {
            title: "Base colors",
            entries: named_entries(&system.regular, ""),
        },
        Category {
            title: "High-contrast base colors",
            entries: named_entries(&system.regular_high_contrast, "-high-contrast"),
        },
        Category {
            title: "Element colors",
            entries: element,
        },
        Category {
            title: "Background colors",
            entries: depth_entries("background", &system.background),
        },
        Category {
            title: "Fill colors",
            entries: depth_entries("fill", &system.fill),
        },
        Category {
            title: "Material colors",
            entries: system
                .material
                .iter()
                .map(|(tier, colors)| (format!("material-{}", tier.name().to_lowercase()), colors))
                .collect(),
        },
        Category {
            title: "Application colors",
            entries: named_entries(&system.application, ""),
        },
    ]
}

// ---------------------------------------------------------------------------
// Emission
// ---------------------------------------------------------------------------

fn emit_variable(out: &mut String, indent: &str, name: &str, value: &str) {
    let _ = writeln!(out, "{indent}--color-{name}: {value};");
}

/// Write every declaration for one tone, categories separated by a blank line.
fn emit_tone(out: &mut String, indent: &str, categories: &[Category<'_>], tone: Tone, space: ColorSpace) {
    for (i, category) in categories.iter().filter(|c| !c.entries.is_empty()).enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{indent}/* {} */", category.title);
        for (name, colors) in &category.entries {
            let value = colors.tone(tone);
            emit_variable(out, indent, name, space.select(value));
            if space != ColorSpace::Oklch {
                emit_variable(out, indent, &format!("{name}-oklch"), &value.oklch);
            }
            emit_variable(out, indent, &format!("{name}-srgb"), &value.srgb);
            if let Some(p3) = &value.p3 {
                emit_variable(out, indent, &format!("{name}-p3"), p3);
            }
        }
    }
}

/// Render a color system as CSS custom properties.
///
/// Light values land in a top-level `@theme` block; dark values in a second
/// `@theme` block wrapped according to [`GeneratorConfig::dark_mode`]. Never
/// fails: an entry without a P3 encoding just omits its `-p3` companion.
#[must_use]
pub fn generate_css(config: &GeneratorConfig<'_>) -> String {
    let categories = categories(config.colors);
    let space = config.format.color_space;
    let mut out = String::new();

    out.push_str("@theme {\n");
    emit_tone(&mut out, "  ", &categories, Tone::Light, space);
    out.push_str("}\n\n");

    let _ = writeln!(out, "{} {{", config.dark_mode.opening());
    out.push_str("  @theme {\n");
    emit_tone(&mut out, "    ", &categories, Tone::Dark, space);
    out.push_str("  }\n");
    out.push_str("}\n");

    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
