// SPDX-License-Identifier: MIT
//
// Advisory range checks for color strings.
//
// Unlike the parsers in value.rs, validation never fails: it returns a report
// and leaves the policy to the caller. A chroma above 0.3 is legal OKLCH but
// will lose chroma in sRGB, so it is a warning rather than an error.

use crate::value::{match_oklch, match_rgb};

/// Maximum OKLCH chroma accepted without an error.
pub const MAX_CHROMA: f64 = 0.37;

/// Chroma above which sRGB output is likely to need gamut mapping.
pub const SRGB_SAFE_CHROMA: f64 = 0.3;

/// Outcome of [`validate_color`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn finish(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }
}

/// Check a color string against the OKLCH or RGB ranges.
#[must_use]
pub fn validate_color(value: &str) -> ValidationReport {
    let trimmed = value.trim();
    if trimmed.starts_with("oklch(") {
        validate_oklch(trimmed)
    } else if trimmed.starts_with("rgb") {
        validate_rgb(trimmed)
    } else {
        ValidationReport::finish(vec!["Unknown color format".to_string()], Vec::new())
    }
}

fn validate_oklch(value: &str) -> ValidationReport {
    let Some(raw) = match_oklch(value) else {
        return ValidationReport::finish(vec!["Invalid OKLCH format".to_string()], Vec::new());
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if !(0.0..=1.0).contains(&raw.l) {
        errors.push(format!("Lightness must be between 0 and 1, got {}", raw.l));
    }
    if !(0.0..=MAX_CHROMA).contains(&raw.c) {
        errors.push(format!("Chroma must be between 0 and {MAX_CHROMA}, got {}", raw.c));
    } else if raw.c > SRGB_SAFE_CHROMA {
        warnings.push(format!(
            "Chroma {} exceeds {SRGB_SAFE_CHROMA} and may not display correctly in sRGB",
            raw.c
        ));
    }
    if !(0.0..360.0).contains(&raw.h) {
        errors.push(format!("Hue must be between 0 and 360, got {}", raw.h));
    }
    if let Some(a) = raw.alpha {
        if !(0.0..=1.0).contains(&a) {
            errors.push(format!("Alpha must be between 0 and 1, got {a}"));
        }
    }

    ValidationReport::finish(errors, warnings)
}

fn validate_rgb(value: &str) -> ValidationReport {
    let Some(raw) = match_rgb(value) else {
        return ValidationReport::finish(vec!["Invalid RGB format".to_string()], Vec::new());
    };

    let errors = ["Red", "Green", "Blue"]
        .iter()
        .zip(raw.channels)
        .filter(|(_, v)| !(0..=255).contains(v))
        .map(|(name, v)| format!("{name} must be between 0 and 255, got {v}"))
        .collect();

    ValidationReport::finish(errors, Vec::new())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn valid_oklch_has_no_findings() {
        let report = validate_color("oklch(0.62 0.19 253)");
        assert_eq!(report, ValidationReport { valid: true, errors: vec![], warnings: vec![] });
    }

    #[test]
    fn chroma_above_max_is_an_error() {
        let report = validate_color("oklch(0.5 0.38 10)");
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("Chroma"), "{:?}", report.errors);
    }

    #[test]
    fn high_chroma_is_only_a_warning() {
        let report = validate_color("oklch(0.5 0.32 10)");
        assert!(report.valid);
        assert!(report.errors.is_empty());
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn boundaries() {
        assert!(validate_color("oklch(0 0 0)").valid);
        assert!(validate_color("oklch(1 0.37 359.9)").valid);
        assert!(!validate_color("oklch(1.01 0.1 10)").valid);
        assert!(!validate_color("oklch(-0.1 0.1 10)").valid);
        assert!(!validate_color("oklch(0.5 0.1 360)").valid);
        assert!(!validate_color("oklch(0.5 -0.1 10)").valid);
    }

    #[test]
    fn several_errors_are_collected() {
        let report = validate_color("oklch(2 0.5 400)");
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn malformed_oklch() {
        let report = validate_color("oklch(nope)");
        assert_eq!(report.errors, vec!["Invalid OKLCH format".to_string()]);
    }

    #[test]
    fn rgb_channel_ranges() {
        assert!(validate_color("rgb(0 128 255)").valid);

        let report = validate_color("rgb(300 0 -5)");
        assert!(!report.valid);
        assert_eq!(report.errors.len(), 2);
        assert!(report.errors[0].starts_with("Red"));
        assert!(report.errors[1].starts_with("Blue"));
    }

    #[test]
    fn unknown_format() {
        let report = validate_color("#ff0000");
        assert!(!report.valid);
        assert_eq!(report.errors, vec!["Unknown color format".to_string()]);
        assert!(report.warnings.is_empty());
    }
}
