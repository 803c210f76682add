//! The regular theme: the reference palette every other variant mirrors.

use crate::model::{Depth, MaterialTier, ThemeVariant};
use crate::seed::{VariantSeeds, seed};

pub static SEEDS: VariantSeeds = VariantSeeds {
    variant: ThemeVariant::Regular,

    regular: &[
        ("red", seed("oklch(0.63 0.24 27)", "oklch(0.67 0.22 25)")),
        ("orange", seed("oklch(0.73 0.18 55)", "oklch(0.76 0.17 58)")),
        ("yellow", seed("oklch(0.86 0.17 95)", "oklch(0.88 0.16 98)")),
        ("green", seed("oklch(0.7 0.18 145)", "oklch(0.75 0.19 145)")),
        ("mint", seed("oklch(0.78 0.13 180)", "oklch(0.83 0.12 182)")),
        ("teal", seed("oklch(0.7 0.1 200)", "oklch(0.77 0.1 205)")),
        ("cyan", seed("oklch(0.75 0.13 222)", "oklch(0.8 0.12 224)")),
        ("blue", seed("oklch(0.6 0.21 256)", "oklch(0.64 0.2 258)")),
        ("indigo", seed("oklch(0.51 0.2 277)", "oklch(0.57 0.19 280)")),
        ("purple", seed("oklch(0.6 0.22 305)", "oklch(0.66 0.2 308)")),
        ("pink", seed("oklch(0.64 0.23 10)", "oklch(0.68 0.21 12)")),
        ("brown", seed("oklch(0.6 0.06 65)", "oklch(0.66 0.06 68)")),
        ("gray", seed("oklch(0.62 0.01 286)", "oklch(0.62 0.01 286)")),
    ],

    regular_high_contrast: &[
        ("red", seed("oklch(0.52 0.21 27)", "oklch(0.74 0.18 22)")),
        ("orange", seed("oklch(0.58 0.16 50)", "oklch(0.82 0.14 60)")),
        ("yellow", seed("oklch(0.62 0.13 85)", "oklch(0.92 0.15 100)")),
        ("green", seed("oklch(0.55 0.15 145)", "oklch(0.83 0.17 145)")),
        ("mint", seed("oklch(0.58 0.11 180)", "oklch(0.88 0.11 182)")),
        ("teal", seed("oklch(0.53 0.09 205)", "oklch(0.84 0.09 205)")),
        ("cyan", seed("oklch(0.56 0.11 230)", "oklch(0.86 0.1 224)")),
        ("blue", seed("oklch(0.48 0.2 260)", "oklch(0.72 0.16 255)")),
        ("indigo", seed("oklch(0.42 0.19 278)", "oklch(0.68 0.15 280)")),
        ("purple", seed("oklch(0.48 0.2 305)", "oklch(0.76 0.16 308)")),
        ("pink", seed("oklch(0.52 0.2 8)", "oklch(0.76 0.17 10)")),
        ("brown", seed("oklch(0.48 0.06 62)", "oklch(0.74 0.06 68)")),
        ("gray", seed("oklch(0.5 0.01 286)", "oklch(0.74 0.01 286)")),
    ],

    element: &[
        ("text", &[
            (Depth::Primary, seed("oklch(0.2 0.005 286)", "oklch(0.98 0.002 286)")),
            (Depth::Secondary, seed("oklch(0.44 0.01 286)", "oklch(0.8 0.008 286)")),
            (Depth::Tertiary, seed("oklch(0.58 0.01 286)", "oklch(0.66 0.01 286)")),
            (Depth::Quaternary, seed("oklch(0.72 0.008 286)", "oklch(0.52 0.01 286)")),
        ]),
        ("border", &[
            (Depth::Primary, seed("oklch(0.82 0.006 286)", "oklch(0.36 0.008 286)")),
            (Depth::Secondary, seed("oklch(0.87 0.005 286)", "oklch(0.31 0.008 286)")),
            (Depth::Tertiary, seed("oklch(0.91 0.004 286)", "oklch(0.27 0.007 286)")),
            (Depth::Quaternary, seed("oklch(0.94 0.003 286)", "oklch(0.23 0.006 286)")),
        ]),
        ("link", &[(Depth::Primary, seed("oklch(0.55 0.2 258)", "oklch(0.7 0.15 252)"))]),
        ("separator", &[(Depth::Primary, seed("oklch(0.89 0.004 286)", "oklch(0.3 0.006 286)"))]),
        ("placeholderText", &[(Depth::Primary, seed("oklch(0.7 0.008 286)", "oklch(0.5 0.01 286)"))]),
        ("disabledControl", &[(Depth::Primary, seed("oklch(0.92 0.004 286)", "oklch(0.3 0.006 286)"))]),
        ("disabledText", &[(Depth::Primary, seed("oklch(0.72 0.006 286)", "oklch(0.45 0.008 286)"))]),
    ],

    background: &[
        (Depth::Primary, seed("oklch(1 0 0)", "oklch(0.15 0.004 286)")),
        (Depth::Secondary, seed("oklch(0.975 0.002 286)", "oklch(0.19 0.005 286)")),
        (Depth::Tertiary, seed("oklch(0.95 0.003 286)", "oklch(0.23 0.006 286)")),
        (Depth::Quaternary, seed("oklch(0.925 0.004 286)", "oklch(0.27 0.006 286)")),
        (Depth::Quinary, seed("oklch(0.9 0.005 286)", "oklch(0.31 0.007 286)")),
    ],

    fill: &[
        (Depth::Primary, seed("oklch(0.62 0.01 286 / 0.2)", "oklch(0.62 0.01 286 / 0.36)")),
        (Depth::Secondary, seed("oklch(0.62 0.01 286 / 0.16)", "oklch(0.62 0.01 286 / 0.32)")),
        (Depth::Tertiary, seed("oklch(0.62 0.01 286 / 0.12)", "oklch(0.62 0.01 286 / 0.24)")),
        (Depth::Quaternary, seed("oklch(0.62 0.01 286 / 0.08)", "oklch(0.62 0.01 286 / 0.18)")),
    ],

    material: &[
        (MaterialTier::UltraThick, seed("oklch(0.98 0.003 286 / 0.92)", "oklch(0.2 0.005 286 / 0.92)")),
        (MaterialTier::Thick, seed("oklch(0.98 0.003 286 / 0.85)", "oklch(0.2 0.005 286 / 0.85)")),
        (MaterialTier::Regular, seed("oklch(0.98 0.003 286 / 0.75)", "oklch(0.2 0.005 286 / 0.75)")),
        (MaterialTier::Thin, seed("oklch(0.98 0.003 286 / 0.6)", "oklch(0.2 0.005 286 / 0.6)")),
        (MaterialTier::UltraThin, seed("oklch(0.98 0.003 286 / 0.45)", "oklch(0.2 0.005 286 / 0.45)")),
        (MaterialTier::Opaque, seed("oklch(0.98 0.003 286 / 1)", "oklch(0.2 0.005 286 / 1)")),
    ],

    application: &[
        ("accent", seed("oklch(0.6 0.21 256)", "oklch(0.66 0.19 256)")),
        ("brand", seed("oklch(0.58 0.19 295)", "oklch(0.68 0.17 295)")),
        ("highlight", seed("oklch(0.85 0.15 95)", "oklch(0.78 0.14 90)")),
    ],
};
