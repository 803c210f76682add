// SPDX-License-Identifier: MIT
//
// ColorValue — one color, three textual encodings.
//
// Seeds enter as CSS strings (`oklch(...)` or `rgb(...)`), get parsed with a
// fixed grammar, pushed through the space.rs pipeline, and come back out as
// three strings ready to paste into a stylesheet:
//
//   oklch(0.63 0.24 27)   rgb(229 42 48)   color(display-p3 0.834 0.237 0.215)
//
// Wide-gamut seeds keep their lightness and hue: chroma is reduced until the
// color fits sRGB (and separately, P3) before encoding. The `oklch` string
// keeps the seed's own chroma, so the extra saturation is still there for
// browsers that render OKLCH natively.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;

use crate::error::ColorError;
use crate::space;

// ─── Grammar ─────────────────────────────────────────────────────────────────

const NUMBER: &str = r"-?(?:\d+\.?\d*|\.\d+)";

/// `oklch(L C H)` or `oklch(L C H / A)`. L and A may be percentages.
static OKLCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^oklch\(\s*({NUMBER})(%)?\s+({NUMBER})\s+({NUMBER})(?:deg)?\s*(?:/\s*({NUMBER})(%)?\s*)?\)$"
    ))
    .expect("OKLCH grammar is a valid regex")
});

/// `rgb(r g b)`, `rgb(r, g, b)`, `rgba(r g b / a)`, `rgba(r, g, b, a)`.
static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"^rgba?\(\s*(-?\d+)(?:\s*,\s*|\s+)(-?\d+)(?:\s*,\s*|\s+)(-?\d+)\s*(?:[,/]\s*({NUMBER})(%)?\s*)?\)$"
    ))
    .expect("RGB grammar is a valid regex")
});

/// Raw OKLCH components exactly as written, before any range check.
pub(crate) struct RawOklch {
    pub l: f64,
    pub c: f64,
    pub h: f64,
    pub alpha: Option<f64>,
}

/// Raw RGB channels exactly as written, before any range check.
pub(crate) struct RawRgb {
    pub channels: [i64; 3],
    pub alpha: Option<f64>,
}

fn capture_number(caps: &Captures<'_>, idx: usize) -> Option<f64> {
    caps.get(idx)?.as_str().parse::<f64>().ok()
}

fn capture_alpha(caps: &Captures<'_>, idx: usize, pct_idx: usize) -> Option<Option<f64>> {
    match caps.get(idx) {
        None => Some(None),
        Some(m) => {
            let v = m.as_str().parse::<f64>().ok()?;
            Some(Some(if caps.get(pct_idx).is_some() { v / 100.0 } else { v }))
        }
    }
}

pub(crate) fn match_oklch(input: &str) -> Option<RawOklch> {
    let caps = OKLCH_RE.captures(input.trim())?;
    let l = capture_number(&caps, 1)?;
    let l = if caps.get(2).is_some() { l / 100.0 } else { l };
    Some(RawOklch {
        l,
        c: capture_number(&caps, 3)?,
        h: capture_number(&caps, 4)?,
        alpha: capture_alpha(&caps, 5, 6)?,
    })
}

pub(crate) fn match_rgb(input: &str) -> Option<RawRgb> {
    let caps = RGB_RE.captures(input.trim())?;
    let channel = |idx: usize| caps.get(idx)?.as_str().parse::<i64>().ok();
    Some(RawRgb {
        channels: [channel(1)?, channel(2)?, channel(3)?],
        alpha: capture_alpha(&caps, 4, 5)?,
    })
}

// ─── Parsed Colors ───────────────────────────────────────────────────────────

/// A parsed OKLCH color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Oklch {
    /// Lightness, normally 0.0–1.0.
    pub l: f64,
    /// Chroma, normally 0.0–0.37.
    pub c: f64,
    /// Hue in degrees.
    pub h: f64,
    /// Optional alpha, 0.0–1.0.
    pub alpha: Option<f64>,
}

impl Oklch {
    /// Whether this color lies inside sRGB, so gamut mapping leaves it untouched.
    #[must_use]
    pub fn in_srgb_gamut(&self) -> bool {
        space::in_srgb_gamut(self.l, self.c, self.h)
    }

    /// This color with chroma reduced until it fits sRGB.
    #[must_use]
    pub fn to_srgb_gamut(self) -> Self {
        Self {
            c: space::srgb_gamut_chroma(self.l, self.c, self.h),
            ..self
        }
    }
}

/// A parsed 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Optional alpha, 0.0–1.0.
    pub alpha: Option<f64>,
}

impl Rgb {
    /// An opaque color from 8-bit channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, alpha: None }
    }

    /// Channels normalized to 0.0–1.0.
    #[must_use]
    pub fn to_unit(self) -> [f64; 3] {
        [self.r, self.g, self.b].map(|v| f64::from(v) / 255.0)
    }
}

/// Parse an `oklch(...)` string.
///
/// Only the structure is checked here; out-of-range components parse fine and
/// are reported by [`validate_color`](crate::validate::validate_color).
///
/// # Errors
///
/// [`ColorError::InvalidOklch`] when the grammar does not match or a
/// component is not finite.
pub fn parse_oklch(input: &str) -> Result<Oklch, ColorError> {
    let invalid = || ColorError::InvalidOklch(input.to_string());
    let raw = match_oklch(input).ok_or_else(invalid)?;
    let finite = [raw.l, raw.c, raw.h, raw.alpha.unwrap_or(1.0)]
        .iter()
        .all(|v| v.is_finite());
    if !finite {
        return Err(invalid());
    }
    Ok(Oklch {
        l: raw.l,
        c: raw.c,
        h: raw.h,
        alpha: raw.alpha,
    })
}

/// Parse an `rgb(...)` / `rgba(...)` string with integer channels.
///
/// # Errors
///
/// [`ColorError::InvalidRgb`] when the grammar does not match or a channel
/// falls outside 0–255.
pub fn parse_rgb(input: &str) -> Result<Rgb, ColorError> {
    let invalid = || ColorError::InvalidRgb(input.to_string());
    let raw = match_rgb(input).ok_or_else(invalid)?;
    let [r, g, b] = raw.channels;
    let byte = |v: i64| u8::try_from(v).map_err(|_| invalid());
    Ok(Rgb {
        r: byte(r)?,
        g: byte(g)?,
        b: byte(b)?,
        alpha: raw.alpha,
    })
}

// ─── ColorValue ──────────────────────────────────────────────────────────────

/// One color in all three encodings.
///
/// `oklch` and `srgb` are always present. `p3` is `None` only when the P3
/// transform produced a non-finite channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorValue {
    pub oklch: String,
    pub srgb: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub p3: Option<String>,
}

/// Create a [`ColorValue`] from an `oklch(...)` or `rgb(...)` string.
///
/// # Errors
///
/// [`ColorError::UnsupportedFormat`] for any other prefix, or the parse error
/// of the matching format.
pub fn create_color(input: &str) -> Result<ColorValue, ColorError> {
    let trimmed = input.trim();
    if trimmed.starts_with("oklch(") {
        create_color_from_oklch(trimmed)
    } else if trimmed.starts_with("rgb") {
        create_color_from_srgb(trimmed)
    } else {
        Err(ColorError::UnsupportedFormat(input.to_string()))
    }
}

/// Lightness and chroma bound for OKLCH → 8-bit sRGB → OKLCH.
///
/// One 8-bit step near black moves OKLCH lightness by several thousandths, so
/// thousandth precision is out of reach. 0.003 is the largest error measured
/// over swatchbook's theme seeds (`oklch(0.12 0.003 286)` returns L 0.123).
pub const ROUNDTRIP_LC_TOLERANCE: f64 = 0.003;

/// Hue bound in degrees for the same round trip, out-of-gamut seeds included.
/// Holds from [`ROUNDTRIP_HUE_MIN_CHROMA`] up.
pub const ROUNDTRIP_HUE_TOLERANCE: f64 = 2.0;

/// Below this chroma one 8-bit step can swing the hue by several degrees.
pub const ROUNDTRIP_HUE_MIN_CHROMA: f64 = 0.02;

/// Create a [`ColorValue`] from an OKLCH seed.
///
/// Out-of-gamut seeds are mapped into sRGB and P3 by reducing chroma at
/// fixed lightness and hue.
///
/// # Errors
///
/// [`ColorError::InvalidOklch`] when the seed does not parse.
pub fn create_color_from_oklch(input: &str) -> Result<ColorValue, ColorError> {
    let Oklch { l, c, h, alpha } = parse_oklch(input)?;

    let [r, g, b] = space::oklch_to_srgb(l, space::srgb_gamut_chroma(l, c, h), h).map(unit_to_byte);
    let p3 = space::oklch_to_p3(l, space::p3_gamut_chroma(l, c, h), h);

    Ok(ColorValue {
        oklch: format_oklch(l, c, h, alpha),
        srgb: format_rgb(r, g, b, alpha),
        p3: format_p3(p3, alpha),
    })
}

/// Create a [`ColorValue`] from an sRGB seed.
///
/// OKLCH lightness and chroma are rounded to 3 decimals and hue to a whole
/// degree.
///
/// # Errors
///
/// [`ColorError::InvalidRgb`] when the seed does not parse.
pub fn create_color_from_srgb(input: &str) -> Result<ColorValue, ColorError> {
    let rgb = parse_rgb(input)?;
    let unit = rgb.to_unit();

    let (l, c, h) = space::srgb_to_oklch(unit);
    let l = round_to(l, 3);
    let c = round_to(c, 3);
    // Hue is meaningless once chroma rounds away.
    let h = if c == 0.0 { 0.0 } else { space::normalize_hue(h.round()) };

    Ok(ColorValue {
        oklch: format_oklch(l, c, h, rgb.alpha),
        srgb: format_rgb(rgb.r, rgb.g, rgb.b, rgb.alpha),
        p3: format_p3(space::srgb_to_p3(unit), rgb.alpha),
    })
}

// ─── Formatting ──────────────────────────────────────────────────────────────

/// Round to `decimals` places, normalizing `-0` to `0`.
#[must_use]
pub fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale + 0.0
}

/// Format a number the way CSS authors write it: shortest form, no
/// trailing zeros, at most `decimals` places.
#[must_use]
pub fn format_number(v: f64, decimals: i32) -> String {
    format!("{}", round_to(v, decimals))
}

fn push_alpha(out: &mut String, alpha: Option<f64>) {
    if let Some(a) = alpha {
        let _ = write!(out, " / {}", format_number(a, 3));
    }
}

fn format_oklch(l: f64, c: f64, h: f64, alpha: Option<f64>) -> String {
    let mut out = format!(
        "oklch({} {} {}",
        format_number(l, 4),
        format_number(c, 4),
        format_number(h, 2)
    );
    push_alpha(&mut out, alpha);
    out.push(')');
    out
}

fn format_rgb(r: u8, g: u8, b: u8, alpha: Option<f64>) -> String {
    let mut out = format!("rgb({r} {g} {b}");
    push_alpha(&mut out, alpha);
    out.push(')');
    out
}

fn format_p3(p3: [f64; 3], alpha: Option<f64>) -> Option<String> {
    if !p3.iter().all(|v| v.is_finite()) {
        return None;
    }
    let [r, g, b] = p3.map(|v| format_number(v.clamp(0.0, 1.0), 3));
    let mut out = format!("color(display-p3 {r} {g} {b}");
    push_alpha(&mut out, alpha);
    out.push(')');
    Some(out)
}

/// Convert a 0.0–1.0 channel to 0–255, clamping the epsilon residue left by gamut mapping.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn unit_to_byte(v: f64) -> u8 {
    // NaN maps to 0; clamp keeps the cast in range.
    if v.is_nan() {
        return 0;
    }
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::space::hue_diff;

    fn assert_rgb_close(actual: Rgb, expected: (u8, u8, u8)) {
        let close = |a: u8, e: u8| (i16::from(a) - i16::from(e)).unsigned_abs() <= 1;
        assert!(
            close(actual.r, expected.0) && close(actual.g, expected.1) && close(actual.b, expected.2),
            "RGB mismatch: got {actual:?}, expected {expected:?}"
        );
    }

    // ── Parsing ──────────────────────────────────────────────────────

    #[test]
    fn parse_oklch_plain() {
        let c = parse_oklch("oklch(0.62 0.19 253)").unwrap();
        assert_eq!(c, Oklch { l: 0.62, c: 0.19, h: 253.0, alpha: None });
    }

    #[test]
    fn parse_oklch_percent_and_alpha() {
        let c = parse_oklch("oklch(62% 0.19 253deg / 50%)").unwrap();
        assert!((c.l - 0.62).abs() < 1e-12);
        assert_eq!(c.alpha, Some(0.5));

        let c = parse_oklch("oklch(0.98 0.003 286 / 0.85)").unwrap();
        assert_eq!(c.alpha, Some(0.85));
    }

    #[test]
    fn parse_oklch_rejects_garbage() {
        assert!(matches!(parse_oklch("oklch(0.5 0.1)"), Err(ColorError::InvalidOklch(_))));
        assert!(matches!(parse_oklch("oklch(a b c)"), Err(ColorError::InvalidOklch(_))));
        assert!(matches!(parse_oklch("oklch(0.5, 0.1, 20)"), Err(ColorError::InvalidOklch(_))));
    }

    #[test]
    fn parse_rgb_syntaxes() {
        assert_eq!(parse_rgb("rgb(1 2 3)").unwrap(), Rgb::new(1, 2, 3));
        assert_eq!(parse_rgb("rgb(1, 2, 3)").unwrap(), Rgb::new(1, 2, 3));

        let c = parse_rgb("rgba(10 20 30 / 0.5)").unwrap();
        assert_eq!((c.r, c.g, c.b, c.alpha), (10, 20, 30, Some(0.5)));

        let c = parse_rgb("rgba(10, 20, 30, 0.25)").unwrap();
        assert_eq!(c.alpha, Some(0.25));
    }

    #[test]
    fn parse_rgb_rejects_out_of_range() {
        assert!(matches!(parse_rgb("rgb(256 0 0)"), Err(ColorError::InvalidRgb(_))));
        assert!(matches!(parse_rgb("rgb(-1 0 0)"), Err(ColorError::InvalidRgb(_))));
        assert!(matches!(parse_rgb("rgb(1.5 0 0)"), Err(ColorError::InvalidRgb(_))));
    }

    // ── create_color ─────────────────────────────────────────────────

    #[test]
    fn create_color_dispatches_on_prefix() {
        assert!(create_color("oklch(0.5 0.1 20)").is_ok());
        assert!(create_color("  rgb(0 0 0)  ").is_ok());
        assert_eq!(
            create_color("#ff0000"),
            Err(ColorError::UnsupportedFormat("#ff0000".to_string()))
        );
        assert!(matches!(create_color("hsl(0 100% 50%)"), Err(ColorError::UnsupportedFormat(_))));
    }

    #[test]
    fn white_from_oklch() {
        let white = create_color("oklch(1 0 0)").unwrap();
        assert_eq!(white.oklch, "oklch(1 0 0)");
        assert_eq!(white.srgb, "rgb(255 255 255)");
        assert_eq!(white.p3.as_deref(), Some("color(display-p3 1 1 1)"));
    }

    #[test]
    fn black_from_srgb() {
        let black = create_color("rgb(0 0 0)").unwrap();
        assert_eq!(black.oklch, "oklch(0 0 0)");
        assert_eq!(black.srgb, "rgb(0 0 0)");
        assert_eq!(black.p3.as_deref(), Some("color(display-p3 0 0 0)"));
    }

    #[test]
    fn red_from_oklch() {
        let red = create_color("oklch(0.628 0.2577 29.23)").unwrap();
        assert_rgb_close(parse_rgb(&red.srgb).unwrap(), (255, 0, 0));
        assert!(red.p3.is_some());
    }

    #[test]
    fn red_from_srgb() {
        let red = create_color("rgb(255 0 0)").unwrap();
        assert_eq!(red.oklch, "oklch(0.628 0.258 29)");
        assert_eq!(red.srgb, "rgb(255 0 0)");
    }

    #[test]
    fn alpha_is_carried_through_every_encoding() {
        let glass = create_color("oklch(0.98 0.003 286 / 0.85)").unwrap();
        assert!(glass.oklch.ends_with("/ 0.85)"), "{}", glass.oklch);
        assert!(glass.srgb.ends_with("/ 0.85)"), "{}", glass.srgb);
        assert!(glass.p3.unwrap().ends_with("/ 0.85)"));

        let glass = create_color("rgba(10, 20, 30, 0.5)").unwrap();
        assert_eq!(glass.srgb, "rgb(10 20 30 / 0.5)");
        assert!(glass.oklch.ends_with("/ 0.5)"));
    }

    #[test]
    fn out_of_gamut_srgb_reduces_chroma() {
        // Far outside sRGB: chroma drops, the channel that overflowed sits at 0.
        let vivid = create_color("oklch(0.7 0.37 150)").unwrap();
        assert_eq!(vivid.oklch, "oklch(0.7 0.37 150)");
        let rgb = parse_rgb(&vivid.srgb).unwrap();
        assert_eq!(rgb.r, 0);
        assert!(rgb.g > rgb.b);
        assert!(vivid.p3.is_some());
    }

    #[test]
    fn gamut_mapping_keeps_lightness_and_hue() {
        let vivid = parse_oklch("oklch(0.7 0.37 150)").unwrap();
        let mapped = vivid.to_srgb_gamut();
        assert!(mapped.in_srgb_gamut());
        assert!(mapped.c < vivid.c);
        assert_eq!((mapped.l, mapped.h, mapped.alpha), (vivid.l, vivid.h, vivid.alpha));

        let inside = parse_oklch("oklch(0.7 0.1 150)").unwrap();
        assert_eq!(inside.to_srgb_gamut(), inside);
    }

    #[test]
    fn p3_channels_are_three_decimals() {
        let blue = create_color("oklch(0.6 0.21 256)").unwrap();
        let p3 = blue.p3.unwrap();
        let body = p3.trim_start_matches("color(display-p3 ").trim_end_matches(')');
        for part in body.split_whitespace() {
            let decimals = part.split('.').nth(1).map_or(0, str::len);
            assert!(decimals <= 3, "{part} in {p3}");
        }
    }

    // ── Round trip ───────────────────────────────────────────────────

    fn roundtrip(seed: &str) -> (Oklch, Oklch) {
        let original = parse_oklch(seed).unwrap();
        let value = create_color_from_oklch(seed).unwrap();
        let back = create_color_from_srgb(&value.srgb).unwrap();
        (original, parse_oklch(&back.oklch).unwrap())
    }

    fn within(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() <= tolerance + 1e-9
    }

    #[test]
    fn oklch_srgb_oklch_roundtrip() {
        let seeds = [
            "oklch(0.7 0.15 150)",
            "oklch(0.55 0.15 30)",
            "oklch(0.8 0.12 90)",
            "oklch(0.5 0.12 280)",
            "oklch(0.65 0.15 330)",
            "oklch(0.12 0.003 286)",
            "oklch(0.22 0.03 330)",
        ];
        for seed in seeds {
            let (original, recovered) = roundtrip(seed);
            assert!(original.in_srgb_gamut(), "{seed} should be in gamut");
            assert!(within(original.l, recovered.l, ROUNDTRIP_LC_TOLERANCE), "{seed}: L {}", recovered.l);
            assert!(within(original.c, recovered.c, ROUNDTRIP_LC_TOLERANCE), "{seed}: C {}", recovered.c);
            if original.c >= ROUNDTRIP_HUE_MIN_CHROMA {
                assert!(
                    hue_diff(original.h, recovered.h) <= ROUNDTRIP_HUE_TOLERANCE,
                    "{seed}: H {}",
                    recovered.h
                );
            }
        }
    }

    #[test]
    fn out_of_gamut_roundtrip_keeps_hue_and_lightness() {
        let seeds = [
            "oklch(0.91 0.08 224)",
            "oklch(0.88 0.11 60)",
            "oklch(0.82 0.14 22)",
            "oklch(0.7 0.37 150)",
            "oklch(0.5 0.3 145)",
            "oklch(0.8 0.3 145)",
        ];
        for seed in seeds {
            let (original, recovered) = roundtrip(seed);
            assert!(!original.in_srgb_gamut(), "{seed} should be out of gamut");
            assert!(
                hue_diff(original.h, recovered.h) <= ROUNDTRIP_HUE_TOLERANCE,
                "{seed}: H {}",
                recovered.h
            );
            assert!(within(original.l, recovered.l, ROUNDTRIP_LC_TOLERANCE), "{seed}: L {}", recovered.l);
            assert!(recovered.c < original.c, "{seed}: C {}", recovered.c);
        }

        let dim = roundtrip("oklch(0.5 0.3 145)").1;
        let bright = roundtrip("oklch(0.8 0.3 145)").1;
        assert!(dim.l < bright.l);
    }

    // ── Formatting ───────────────────────────────────────────────────

    #[test]
    fn number_formatting() {
        assert_eq!(format_number(0.5, 3), "0.5");
        assert_eq!(format_number(0.12345, 3), "0.123");
        assert_eq!(format_number(-0.0001, 3), "0");
        assert_eq!(format_number(253.0, 2), "253");
    }
}
