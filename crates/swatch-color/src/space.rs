// SPDX-License-Identifier: MIT
//
// Color space math: OKLCH, Oklab, linear sRGB, XYZ (D65), Display-P3.
//
// Single-character variable names (r, g, b, l, c, h, a, m, s) are the
// standard mathematical convention in color science.
#![allow(clippy::many_single_char_names)]
//
// Conversion pipeline:
//
//   OKLCH ↔ Oklab ↔ Linear sRGB ↔ sRGB
//                        │
//                        ▼
//                   XYZ (D65) → Linear P3 → Display-P3
//
// sRGB and Display-P3 share the same transfer function, so one pair of
// gamma helpers serves both. The conversions never clamp; out-of-gamut
// colors are brought inside by reducing chroma (see the Gamut section).

// ─── Matrices ────────────────────────────────────────────────────────────────
//
// Oklab matrices are Björn Ottosson's, https://bottosson.github.io/posts/oklab/
// XYZ matrices are the CSS Color 4 values.

#[rustfmt::skip]
const OKLAB_TO_LMS: [[f64; 3]; 3] = [
    [1.0,  0.396_337_777_4,  0.215_803_757_3],
    [1.0, -0.105_561_345_8, -0.063_854_172_8],
    [1.0, -0.089_484_177_5, -1.291_485_548_0],
];

#[rustfmt::skip]
const LMS_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [ 4.076_741_662_1, -3.307_711_591_3,  0.230_969_929_2],
    [-1.268_438_004_6,  2.609_757_401_1, -0.341_319_396_5],
    [-0.004_196_086_3, -0.703_418_614_7,  1.707_614_701_0],
];

#[rustfmt::skip]
const LINEAR_SRGB_TO_LMS: [[f64; 3]; 3] = [
    [0.412_221_470_8, 0.536_332_536_3, 0.051_445_992_9],
    [0.211_903_498_2, 0.680_699_545_1, 0.107_396_956_6],
    [0.088_302_461_9, 0.281_718_837_6, 0.629_978_700_5],
];

#[rustfmt::skip]
const LMS_TO_OKLAB: [[f64; 3]; 3] = [
    [0.210_454_255_3,  0.793_617_785_0, -0.004_072_046_8],
    [1.977_998_495_1, -2.428_592_205_0,  0.450_593_709_9],
    [0.025_904_037_1,  0.782_771_766_2, -0.808_675_766_0],
];

#[rustfmt::skip]
const LINEAR_SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [0.412_390_799_265_959_34, 0.357_584_339_383_878,    0.180_480_788_401_834_3 ],
    [0.212_639_005_871_510_27, 0.715_168_678_767_756,    0.072_192_315_360_733_71],
    [0.019_330_818_715_591_82, 0.119_194_779_794_625_98, 0.950_532_152_249_660_7 ],
];

#[rustfmt::skip]
const XYZ_TO_LINEAR_P3: [[f64; 3]; 3] = [
    [ 2.493_496_911_941_425,   -0.931_383_617_919_123_9, -0.402_710_784_450_716_84 ],
    [-0.829_488_969_561_574_7,  1.762_664_060_318_346_3,  0.023_624_685_841_943_577],
    [ 0.035_845_830_243_784_47, -0.076_172_389_268_041_82, 0.956_884_524_007_687_2  ],
];

/// Multiply a 3×3 matrix with a 3-vector.
#[inline]
fn multiply(matrix: &[[f64; 3]; 3], v: [f64; 3]) -> [f64; 3] {
    let row = |r: &[f64; 3]| r[2].mul_add(v[2], r[0].mul_add(v[0], r[1] * v[1]));
    [row(&matrix[0]), row(&matrix[1]), row(&matrix[2])]
}

// ─── Hue ─────────────────────────────────────────────────────────────────────

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel).
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── OKLCH ↔ Oklab ──────────────────────────────────────────────────────────

/// Convert OKLCH to Oklab `[L, a, b]`.
#[inline]
#[must_use]
pub fn oklch_to_oklab(l: f64, c: f64, h: f64) -> [f64; 3] {
    let h_rad = h.to_radians();
    [l, c * h_rad.cos(), c * h_rad.sin()]
}

/// Convert Oklab to OKLCH `(L, C, H)`. Hue is 0 for achromatic input.
#[inline]
#[must_use]
pub fn oklab_to_oklch(lab: [f64; 3]) -> (f64, f64, f64) {
    let [l, a, b] = lab;
    let c = a.hypot(b);
    let h = if c < 1e-8 {
        0.0
    } else {
        normalize_hue(b.atan2(a).to_degrees())
    };
    (l, c, h)
}

// ─── Oklab ↔ Linear sRGB ────────────────────────────────────────────────────

/// Convert Oklab to linear sRGB through the LMS cone space.
#[must_use]
pub fn oklab_to_linear_srgb(lab: [f64; 3]) -> [f64; 3] {
    let [l_, m_, s_] = multiply(&OKLAB_TO_LMS, lab);
    multiply(&LMS_TO_LINEAR_SRGB, [l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_])
}

/// Convert linear sRGB to Oklab through the LMS cone space.
#[must_use]
pub fn linear_srgb_to_oklab(rgb: [f64; 3]) -> [f64; 3] {
    let [l, m, s] = multiply(&LINEAR_SRGB_TO_LMS, rgb);
    multiply(&LMS_TO_OKLAB, [l.cbrt(), m.cbrt(), s.cbrt()])
}

// ─── Linear ↔ Gamma-encoded (sRGB and Display-P3 share this curve) ─────────

/// Apply the sRGB transfer function to one linear component.
///
/// Sign-preserving, so out-of-gamut negative values stay negative.
#[inline]
#[must_use]
pub fn linear_to_gamma(c: f64) -> f64 {
    let magnitude = c.abs();
    if magnitude <= 0.003_130_8 {
        c * 12.92
    } else {
        1.055f64.mul_add(magnitude.powf(1.0 / 2.4), -0.055).copysign(c)
    }
}

/// Remove the sRGB transfer function from one gamma-encoded component.
#[inline]
#[must_use]
pub fn gamma_to_linear(c: f64) -> f64 {
    let magnitude = c.abs();
    if magnitude <= 0.040_45 {
        c / 12.92
    } else {
        ((magnitude + 0.055) / 1.055).powf(2.4).copysign(c)
    }
}

// ─── Linear sRGB → Display-P3 ───────────────────────────────────────────────

/// Convert linear sRGB to linear Display-P3 via XYZ (both D65).
#[must_use]
pub fn linear_srgb_to_linear_p3(rgb: [f64; 3]) -> [f64; 3] {
    multiply(&XYZ_TO_LINEAR_P3, multiply(&LINEAR_SRGB_TO_XYZ, rgb))
}

// ─── Composite Conversions ───────────────────────────────────────────────────

/// OKLCH → gamma-encoded sRGB in 0.0–1.0. May be out of gamut.
#[must_use]
pub fn oklch_to_srgb(l: f64, c: f64, h: f64) -> [f64; 3] {
    oklab_to_linear_srgb(oklch_to_oklab(l, c, h)).map(linear_to_gamma)
}

/// OKLCH → gamma-encoded Display-P3 in 0.0–1.0. May be out of gamut.
#[must_use]
pub fn oklch_to_p3(l: f64, c: f64, h: f64) -> [f64; 3] {
    let linear = oklab_to_linear_srgb(oklch_to_oklab(l, c, h));
    linear_srgb_to_linear_p3(linear).map(linear_to_gamma)
}

/// Gamma-encoded sRGB in 0.0–1.0 → OKLCH `(L, C, H)`.
#[must_use]
pub fn srgb_to_oklch(rgb: [f64; 3]) -> (f64, f64, f64) {
    oklab_to_oklch(linear_srgb_to_oklab(rgb.map(gamma_to_linear)))
}

/// Gamma-encoded sRGB in 0.0–1.0 → gamma-encoded Display-P3.
#[must_use]
pub fn srgb_to_p3(rgb: [f64; 3]) -> [f64; 3] {
    linear_srgb_to_linear_p3(rgb.map(gamma_to_linear)).map(linear_to_gamma)
}

// ─── Gamut ───────────────────────────────────────────────────────────────────

/// How far a channel may overshoot [0, 1] and still count as in gamut.
///
/// Absorbs floating-point noise at the boundary, so pure white and the sRGB
/// primaries are inside. Gamut tests and gamut mapping both use this value.
pub const GAMUT_EPSILON: f64 = 1e-4;

/// Bisection steps in the chroma search. 24 halvings of a chroma below 0.4
/// leave an error far under the 4-decimal output precision.
const GAMUT_SEARCH_STEPS: u32 = 24;

fn within_unit_cube(rgb: [f64; 3]) -> bool {
    rgb.iter()
        .all(|&v| (-GAMUT_EPSILON..=1.0 + GAMUT_EPSILON).contains(&v))
}

/// Whether an OKLCH color lies inside the sRGB gamut.
#[must_use]
pub fn in_srgb_gamut(l: f64, c: f64, h: f64) -> bool {
    within_unit_cube(oklch_to_srgb(l, c, h))
}

/// Whether an OKLCH color lies inside the Display-P3 gamut.
#[must_use]
pub fn in_p3_gamut(l: f64, c: f64, h: f64) -> bool {
    within_unit_cube(oklch_to_p3(l, c, h))
}

/// Binary search for the largest chroma in `[0, c]` that `inside` accepts,
/// holding lightness and hue fixed.
fn max_chroma(l: f64, c: f64, h: f64, inside: fn(f64, f64, f64) -> bool) -> f64 {
    if inside(l, c, h) {
        return c;
    }

    let mut lo = 0.0;
    let mut hi = c;
    for _ in 0..GAMUT_SEARCH_STEPS {
        let mid = (lo + hi) * 0.5;
        if inside(l, mid, h) {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Chroma reduced until `(l, c, h)` fits the sRGB gamut. Returns `c`
/// unchanged when it already fits.
#[must_use]
pub fn srgb_gamut_chroma(l: f64, c: f64, h: f64) -> f64 {
    max_chroma(l, c, h, in_srgb_gamut)
}

/// Chroma reduced until `(l, c, h)` fits the Display-P3 gamut.
#[must_use]
pub fn p3_gamut_chroma(l: f64, c: f64, h: f64) -> f64 {
    max_chroma(l, c, h, in_p3_gamut)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
