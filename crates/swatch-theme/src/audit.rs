//! WCAG contrast audit of the reading colors.
//!
//! Each check compares one foreground against `background.primary` in the
//! same tone. Results are advisory: the build driver logs failures and keeps
//! going.

use swatch_color::contrast::{AA_LARGE, AA_NORMAL};
use swatch_color::{ColorValue, calculate_contrast_ratio, parse_rgb};

use crate::model::{ColorSystem, Depth, Tone};

/// Foregrounds that must stay readable, with their minimum ratio.
const RULES: [(&str, Depth, f64); 3] = [
    ("text", Depth::Primary, AA_NORMAL),
    ("text", Depth::Secondary, AA_LARGE),
    ("link", Depth::Primary, AA_LARGE),
];

/// One foreground/background comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct ContrastCheck {
    pub tone: Tone,
    /// Dotted key path, e.g. `element.text.secondary`.
    pub foreground: String,
    pub background: String,
    pub ratio: f64,
    pub threshold: f64,
}

impl ContrastCheck {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.ratio >= self.threshold
    }
}

/// Check every rule in both tones.
///
/// Rules whose foreground is missing from the system, or whose sRGB encoding
/// does not parse, are skipped.
#[must_use]
pub fn audit_contrast(system: &ColorSystem) -> Vec<ContrastCheck> {
    let Some(background) = system.background.get(Depth::Primary) else {
        return Vec::new();
    };

    let mut checks = Vec::new();
    for tone in Tone::ALL {
        for (role, depth, threshold) in RULES {
            let Some(foreground) = system.element.get(role).and_then(|s| s.get(depth)) else {
                continue;
            };
            let Some(ratio) = srgb_ratio(foreground.tone(tone), background.tone(tone)) else {
                continue;
            };
            checks.push(ContrastCheck {
                tone,
                foreground: format!("element.{role}.{}", depth.name()),
                background: "background.primary".to_string(),
                ratio,
                threshold,
            });
        }
    }
    checks
}

fn srgb_ratio(fg: &ColorValue, bg: &ColorValue) -> Option<f64> {
    let fg = parse_rgb(&fg.srgb).ok()?;
    let bg = parse_rgb(&bg.srgb).ok()?;
    Some(calculate_contrast_ratio(fg, bg).ratio)
}
