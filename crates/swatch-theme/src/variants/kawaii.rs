//! The kawaii theme: pastel candy tones on a blush ground.
//!
//! Extends the base palette with `lavender` and `peach`.

use crate::model::{Depth, MaterialTier, ThemeVariant};
use crate::seed::{VariantSeeds, seed};

pub static SEEDS: VariantSeeds = VariantSeeds {
    variant: ThemeVariant::Kawaii,

    regular: &[
        ("red", seed("oklch(0.7 0.17 15)", "oklch(0.76 0.14 15)")),
        ("orange", seed("oklch(0.8 0.12 55)", "oklch(0.83 0.1 58)")),
        ("yellow", seed("oklch(0.9 0.11 95)", "oklch(0.91 0.1 98)")),
        ("green", seed("oklch(0.8 0.13 150)", "oklch(0.84 0.12 150)")),
        ("mint", seed("oklch(0.86 0.1 175)", "oklch(0.88 0.09 175)")),
        ("teal", seed("oklch(0.78 0.08 195)", "oklch(0.82 0.08 195)")),
        ("cyan", seed("oklch(0.82 0.09 215)", "oklch(0.85 0.08 215)")),
        ("blue", seed("oklch(0.72 0.12 250)", "oklch(0.77 0.11 250)")),
        ("indigo", seed("oklch(0.64 0.13 280)", "oklch(0.7 0.12 280)")),
        ("purple", seed("oklch(0.7 0.15 310)", "oklch(0.76 0.13 310)")),
        ("pink", seed("oklch(0.76 0.15 350)", "oklch(0.8 0.13 350)")),
        ("brown", seed("oklch(0.68 0.06 50)", "oklch(0.74 0.06 50)")),
        ("gray", seed("oklch(0.7 0.02 330)", "oklch(0.68 0.02 330)")),
        ("lavender", seed("oklch(0.8 0.08 300)", "oklch(0.83 0.07 300)")),
        ("peach", seed("oklch(0.84 0.08 45)", "oklch(0.86 0.07 45)")),
    ],

    regular_high_contrast: &[
        ("red", seed("oklch(0.56 0.18 15)", "oklch(0.84 0.11 15)")),
        ("orange", seed("oklch(0.62 0.13 55)", "oklch(0.89 0.08 58)")),
        ("yellow", seed("oklch(0.66 0.12 90)", "oklch(0.95 0.08 98)")),
        ("green", seed("oklch(0.58 0.13 150)", "oklch(0.9 0.1 150)")),
        ("mint", seed("oklch(0.6 0.1 175)", "oklch(0.93 0.07 175)")),
        ("teal", seed("oklch(0.56 0.08 195)", "oklch(0.89 0.06 195)")),
        ("cyan", seed("oklch(0.58 0.09 215)", "oklch(0.91 0.06 215)")),
        ("blue", seed("oklch(0.52 0.14 250)", "oklch(0.85 0.08 250)")),
        ("indigo", seed("oklch(0.46 0.15 280)", "oklch(0.8 0.09 280)")),
        ("purple", seed("oklch(0.52 0.16 310)", "oklch(0.84 0.1 310)")),
        ("pink", seed("oklch(0.56 0.17 350)", "oklch(0.87 0.1 350)")),
        ("brown", seed("oklch(0.5 0.06 50)", "oklch(0.82 0.05 50)")),
        ("gray", seed("oklch(0.52 0.02 330)", "oklch(0.8 0.02 330)")),
        ("lavender", seed("oklch(0.56 0.1 300)", "oklch(0.89 0.05 300)")),
        ("peach", seed("oklch(0.6 0.1 45)", "oklch(0.91 0.05 45)")),
    ],

    element: &[
        ("text", &[
            (Depth::Primary, seed("oklch(0.32 0.06 340)", "oklch(0.95 0.02 340)")),
            (Depth::Secondary, seed("oklch(0.48 0.07 340)", "oklch(0.82 0.04 340)")),
            (Depth::Tertiary, seed("oklch(0.6 0.06 340)", "oklch(0.7 0.04 340)")),
            (Depth::Quaternary, seed("oklch(0.72 0.05 340)", "oklch(0.58 0.04 340)")),
        ]),
        ("border", &[
            (Depth::Primary, seed("oklch(0.84 0.05 350)", "oklch(0.42 0.05 330)")),
            (Depth::Secondary, seed("oklch(0.88 0.04 350)", "oklch(0.37 0.04 330)")),
            (Depth::Tertiary, seed("oklch(0.91 0.03 350)", "oklch(0.33 0.04 330)")),
            (Depth::Quaternary, seed("oklch(0.94 0.02 350)", "oklch(0.29 0.03 330)")),
        ]),
        ("link", &[(Depth::Primary, seed("oklch(0.58 0.17 350)", "oklch(0.78 0.13 350)"))]),
        ("separator", &[(Depth::Primary, seed("oklch(0.9 0.03 350)", "oklch(0.36 0.04 330)"))]),
        ("placeholderText", &[(Depth::Primary, seed("oklch(0.7 0.05 340)", "oklch(0.56 0.04 340)"))]),
        ("disabledControl", &[(Depth::Primary, seed("oklch(0.92 0.02 350)", "oklch(0.34 0.03 330)"))]),
        ("disabledText", &[(Depth::Primary, seed("oklch(0.74 0.04 340)", "oklch(0.5 0.04 340)"))]),
    ],

    background: &[
        (Depth::Primary, seed("oklch(0.97 0.015 350)", "oklch(0.22 0.03 330)")),
        (Depth::Secondary, seed("oklch(0.95 0.02 350)", "oklch(0.26 0.035 330)")),
        (Depth::Tertiary, seed("oklch(0.93 0.025 350)", "oklch(0.3 0.04 330)")),
        (Depth::Quaternary, seed("oklch(0.91 0.03 350)", "oklch(0.34 0.04 330)")),
        (Depth::Quinary, seed("oklch(0.89 0.035 350)", "oklch(0.38 0.045 330)")),
    ],

    fill: &[
        (Depth::Primary, seed("oklch(0.76 0.15 350 / 0.2)", "oklch(0.8 0.13 350 / 0.32)")),
        (Depth::Secondary, seed("oklch(0.76 0.15 350 / 0.16)", "oklch(0.8 0.13 350 / 0.26)")),
        (Depth::Tertiary, seed("oklch(0.76 0.15 350 / 0.12)", "oklch(0.8 0.13 350 / 0.2)")),
        (Depth::Quaternary, seed("oklch(0.76 0.15 350 / 0.08)", "oklch(0.8 0.13 350 / 0.14)")),
    ],

    material: &[
        (MaterialTier::UltraThick, seed("oklch(0.97 0.015 350 / 0.92)", "oklch(0.24 0.03 330 / 0.92)")),
        (MaterialTier::Thick, seed("oklch(0.97 0.015 350 / 0.85)", "oklch(0.24 0.03 330 / 0.85)")),
        (MaterialTier::Regular, seed("oklch(0.97 0.015 350 / 0.75)", "oklch(0.24 0.03 330 / 0.75)")),
        (MaterialTier::Thin, seed("oklch(0.97 0.015 350 / 0.6)", "oklch(0.24 0.03 330 / 0.6)")),
        (MaterialTier::UltraThin, seed("oklch(0.97 0.015 350 / 0.45)", "oklch(0.24 0.03 330 / 0.45)")),
        (MaterialTier::Opaque, seed("oklch(0.97 0.015 350 / 1)", "oklch(0.24 0.03 330 / 1)")),
    ],

    application: &[
        ("accent", seed("oklch(0.7 0.16 350)", "oklch(0.78 0.13 350)")),
        ("brand", seed("oklch(0.68 0.14 305)", "oklch(0.76 0.12 305)")),
        ("highlight", seed("rgb(255 214 165)", "rgb(255 200 150)")),
    ],
};
