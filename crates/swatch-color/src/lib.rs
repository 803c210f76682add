// SPDX-License-Identifier: MIT
//
// swatch-color — the color value engine behind swatchbook.
//
// Every design token starts life as a single CSS seed string. This crate turns
// that seed into the same color expressed three ways (OKLCH, gamut-mapped 8-bit
// sRGB, Display-P3), checks color strings against their legal ranges, and
// computes WCAG contrast between two sRGB colors.
//
//   seed ──► value.rs (parse) ──► space.rs (OKLCH ↔ Oklab ↔ linear sRGB ↔ XYZ ↔ P3)
//                │
//                └──► ColorValue { oklch, srgb, p3 }
//
//   validate.rs: advisory range report, never fails
//   contrast.rs: WCAG relative luminance and contrast ratio

pub mod contrast;
pub mod error;
pub mod space;
pub mod validate;
pub mod value;

pub use contrast::{ContrastRatio, WcagPasses, calculate_contrast_ratio, calculate_relative_luminance};
pub use error::ColorError;
pub use validate::{ValidationReport, validate_color};
pub use value::{
    ColorValue, Oklch, Rgb, create_color, create_color_from_oklch, create_color_from_srgb,
    parse_oklch, parse_rgb,
};
