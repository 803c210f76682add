//! Errors raised while assembling color systems.
//!
//! All of these fire at startup, while seed tables are turned into color
//! systems. A bad seed stops the build before any stylesheet is written.

use swatch_color::ColorError;
use thiserror::Error;

use crate::model::{MaterialTier, ThemeVariant};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A seed string failed to convert.
    #[error("{variant}: bad seed at {path}: {source}")]
    Seed {
        variant: ThemeVariant,
        path: String,
        #[source]
        source: ColorError,
    },

    /// The same key appears twice in one table.
    #[error("{variant}: duplicate key {path}")]
    DuplicateKey { variant: ThemeVariant, path: String },

    /// The material table does not cover every tier.
    #[error("{variant}: material table is missing tier {}", .tier.name())]
    MissingMaterialTier {
        variant: ThemeVariant,
        tier: MaterialTier,
    },

    /// A key present in the regular variant is absent from another variant.
    #[error("{variant}: missing key {path} (present in regular)")]
    MissingKey { variant: ThemeVariant, path: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_variant_and_path() {
        let err = ThemeError::Seed {
            variant: ThemeVariant::Kawaii,
            path: "regular.pink.light".to_string(),
            source: ColorError::InvalidOklch("oklch(x)".to_string()),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("kawaii:"), "{msg}");
        assert!(msg.contains("regular.pink.light"));
        assert!(msg.contains("oklch(x)"));

        let err = ThemeError::MissingKey {
            variant: ThemeVariant::HighContrast,
            path: "fill.quaternary".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "high-contrast: missing key fill.quaternary (present in regular)"
        );

        let err = ThemeError::MissingMaterialTier {
            variant: ThemeVariant::Regular,
            tier: MaterialTier::UltraThin,
        };
        assert!(err.to_string().contains("ultraThin"));
    }
}
