// SPDX-License-Identifier: MIT
//
// WCAG 2.x relative luminance and contrast ratio.
//
// Luminance is computed from the 8-bit sRGB channels with the WCAG
// linearization (threshold 0.03928), not the IEC one used in space.rs. The
// difference is invisible at 8 bits, but WCAG tooling uses this constant and
// reported ratios should match it.

use serde::Serialize;

use crate::value::Rgb;

/// Minimum ratio for WCAG AA, normal text.
pub const AA_NORMAL: f64 = 4.5;
/// Minimum ratio for WCAG AA, large text.
pub const AA_LARGE: f64 = 3.0;
/// Minimum ratio for WCAG AAA, normal text.
pub const AAA_NORMAL: f64 = 7.0;
/// Minimum ratio for WCAG AAA, large text.
pub const AAA_LARGE: f64 = 4.5;

/// Which WCAG levels a contrast ratio reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct WcagPasses {
    pub aa: bool,
    pub aa_large: bool,
    pub aaa: bool,
    pub aaa_large: bool,
}

/// A WCAG contrast ratio in [1, 21] with its pass flags.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContrastRatio {
    pub ratio: f64,
    pub passes: WcagPasses,
}

impl ContrastRatio {
    fn from_ratio(ratio: f64) -> Self {
        Self {
            ratio,
            passes: WcagPasses {
                aa: ratio >= AA_NORMAL,
                aa_large: ratio >= AA_LARGE,
                aaa: ratio >= AAA_NORMAL,
                aaa_large: ratio >= AAA_LARGE,
            },
        }
    }
}

/// Relative luminance of an sRGB color per WCAG 2.x.
///
///   L = 0.2126 * R + 0.7152 * G + 0.0722 * B   (linearized channels)
///
/// Returns a value in [0.0, 1.0]. Alpha is ignored.
#[must_use]
pub fn calculate_relative_luminance(rgb: Rgb) -> f64 {
    let [r, g, b] = rgb.to_unit().map(|c| {
        if c <= 0.039_28 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    });
    0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
}

/// WCAG contrast ratio between two colors:
///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
///
/// The result does not depend on argument order.
#[must_use]
pub fn calculate_contrast_ratio(a: Rgb, b: Rgb) -> ContrastRatio {
    let la = calculate_relative_luminance(a);
    let lb = calculate_relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    ContrastRatio::from_ratio((lighter + 0.05) / (darker + 0.05))
}
