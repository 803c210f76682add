//! The high-contrast theme: pure black/white ground, deeper light tones and
//! brighter dark tones.

use crate::model::{Depth, MaterialTier, ThemeVariant};
use crate::seed::{VariantSeeds, seed};

pub static SEEDS: VariantSeeds = VariantSeeds {
    variant: ThemeVariant::HighContrast,

    regular: &[
        ("red", seed("oklch(0.5 0.2 27)", "oklch(0.74 0.18 22)")),
        ("orange", seed("oklch(0.56 0.15 50)", "oklch(0.82 0.14 60)")),
        ("yellow", seed("oklch(0.58 0.12 85)", "oklch(0.92 0.15 100)")),
        ("green", seed("oklch(0.52 0.14 145)", "oklch(0.84 0.17 145)")),
        ("mint", seed("oklch(0.55 0.1 180)", "oklch(0.88 0.11 182)")),
        ("teal", seed("oklch(0.5 0.08 205)", "oklch(0.85 0.09 205)")),
        ("cyan", seed("oklch(0.53 0.1 230)", "oklch(0.87 0.1 224)")),
        ("blue", seed("oklch(0.45 0.19 260)", "oklch(0.74 0.15 255)")),
        ("indigo", seed("oklch(0.4 0.18 278)", "oklch(0.72 0.14 280)")),
        ("purple", seed("oklch(0.45 0.19 305)", "oklch(0.78 0.15 308)")),
        ("pink", seed("oklch(0.5 0.19 8)", "oklch(0.78 0.16 10)")),
        ("brown", seed("oklch(0.45 0.06 62)", "oklch(0.76 0.06 68)")),
        ("gray", seed("oklch(0.46 0.01 286)", "oklch(0.78 0.01 286)")),
    ],

    regular_high_contrast: &[
        ("red", seed("oklch(0.42 0.18 27)", "oklch(0.82 0.14 22)")),
        ("orange", seed("oklch(0.46 0.13 50)", "oklch(0.88 0.11 60)")),
        ("yellow", seed("oklch(0.48 0.1 85)", "oklch(0.95 0.12 100)")),
        ("green", seed("oklch(0.42 0.12 145)", "oklch(0.9 0.14 145)")),
        ("mint", seed("oklch(0.44 0.09 180)", "oklch(0.92 0.09 182)")),
        ("teal", seed("oklch(0.41 0.07 205)", "oklch(0.9 0.07 205)")),
        ("cyan", seed("oklch(0.43 0.09 230)", "oklch(0.91 0.08 224)")),
        ("blue", seed("oklch(0.38 0.17 260)", "oklch(0.82 0.11 255)")),
        ("indigo", seed("oklch(0.34 0.16 278)", "oklch(0.8 0.1 280)")),
        ("purple", seed("oklch(0.38 0.17 305)", "oklch(0.85 0.11 308)")),
        ("pink", seed("oklch(0.42 0.17 8)", "oklch(0.85 0.12 10)")),
        ("brown", seed("oklch(0.38 0.05 62)", "oklch(0.84 0.05 68)")),
        ("gray", seed("oklch(0.38 0.01 286)", "oklch(0.86 0.01 286)")),
    ],

    element: &[
        ("text", &[
            (Depth::Primary, seed("oklch(0 0 0)", "oklch(1 0 0)")),
            (Depth::Secondary, seed("oklch(0.3 0.005 286)", "oklch(0.88 0.004 286)")),
            (Depth::Tertiary, seed("oklch(0.42 0.008 286)", "oklch(0.78 0.006 286)")),
            (Depth::Quaternary, seed("oklch(0.54 0.008 286)", "oklch(0.66 0.008 286)")),
        ]),
        ("border", &[
            (Depth::Primary, seed("oklch(0.45 0.008 286)", "oklch(0.7 0.008 286)")),
            (Depth::Secondary, seed("oklch(0.55 0.008 286)", "oklch(0.6 0.008 286)")),
            (Depth::Tertiary, seed("oklch(0.65 0.006 286)", "oklch(0.5 0.008 286)")),
            (Depth::Quaternary, seed("oklch(0.75 0.005 286)", "oklch(0.4 0.006 286)")),
        ]),
        ("link", &[(Depth::Primary, seed("oklch(0.42 0.2 262)", "oklch(0.8 0.12 252)"))]),
        ("separator", &[(Depth::Primary, seed("oklch(0.5 0.008 286)", "oklch(0.62 0.008 286)"))]),
        ("placeholderText", &[(Depth::Primary, seed("oklch(0.45 0.008 286)", "oklch(0.72 0.008 286)"))]),
        ("disabledControl", &[(Depth::Primary, seed("oklch(0.8 0.005 286)", "oklch(0.4 0.006 286)"))]),
        ("disabledText", &[(Depth::Primary, seed("oklch(0.52 0.006 286)", "oklch(0.62 0.006 286)"))]),
    ],

    background: &[
        (Depth::Primary, seed("oklch(1 0 0)", "oklch(0 0 0)")),
        (Depth::Secondary, seed("oklch(0.96 0 0)", "oklch(0.12 0.003 286)")),
        (Depth::Tertiary, seed("oklch(0.92 0.002 286)", "oklch(0.18 0.004 286)")),
        (Depth::Quaternary, seed("oklch(0.88 0.003 286)", "oklch(0.24 0.005 286)")),
        (Depth::Quinary, seed("oklch(0.84 0.004 286)", "oklch(0.3 0.006 286)")),
    ],

    fill: &[
        (Depth::Primary, seed("oklch(0.5 0.01 286 / 0.32)", "oklch(0.7 0.01 286 / 0.44)")),
        (Depth::Secondary, seed("oklch(0.5 0.01 286 / 0.26)", "oklch(0.7 0.01 286 / 0.38)")),
        (Depth::Tertiary, seed("oklch(0.5 0.01 286 / 0.2)", "oklch(0.7 0.01 286 / 0.3)")),
        (Depth::Quaternary, seed("oklch(0.5 0.01 286 / 0.14)", "oklch(0.7 0.01 286 / 0.24)")),
    ],

    material: &[
        (MaterialTier::UltraThick, seed("oklch(1 0 0 / 0.97)", "oklch(0 0 0 / 0.97)")),
        (MaterialTier::Thick, seed("oklch(1 0 0 / 0.93)", "oklch(0 0 0 / 0.93)")),
        (MaterialTier::Regular, seed("oklch(1 0 0 / 0.88)", "oklch(0 0 0 / 0.88)")),
        (MaterialTier::Thin, seed("oklch(1 0 0 / 0.8)", "oklch(0 0 0 / 0.8)")),
        (MaterialTier::UltraThin, seed("oklch(1 0 0 / 0.7)", "oklch(0 0 0 / 0.7)")),
        (MaterialTier::Opaque, seed("oklch(1 0 0 / 1)", "oklch(0 0 0 / 1)")),
    ],

    application: &[
        ("accent", seed("oklch(0.45 0.19 260)", "oklch(0.76 0.14 256)")),
        ("brand", seed("oklch(0.44 0.18 295)", "oklch(0.78 0.13 295)")),
        ("highlight", seed("oklch(0.62 0.13 90)", "oklch(0.9 0.15 95)")),
    ],
};
