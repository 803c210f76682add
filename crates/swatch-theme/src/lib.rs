//! # swatch-theme — design-token color systems and their CSS
//!
//! Three parallel color systems (regular, high-contrast, kawaii) described as
//! static seed tables, resolved once at startup, and rendered as CSS custom
//! properties for Tailwind's `@theme` blocks.
//!
//! # Architecture
//!
//! ```text
//! variants/*.rs:  VariantSeeds (literal light/dark CSS strings)
//!     │
//!     ▼
//! seed.rs:        build_system, every seed through swatch_color::create_color
//!     │
//!     ▼
//! registry.rs:    ThemeRegistry, all variants + key parity against regular
//!     │
//!     ├──► audit.rs:  WCAG check of text and link colors (advisory)
//!     │
//!     ▼
//! css.rs:         generate_css, one ColorSystem × ColorSpace × DarkMode → text
//! ```
//!
//! # Determinism
//!
//! Named tables keep seed-table order and depth/tier tables are keyed by
//! ordered enums, so generating twice from the same seeds yields the same
//! bytes.

pub mod audit;
pub mod css;
pub mod error;
pub mod model;
pub mod registry;
pub mod seed;
pub mod variants;

pub use audit::{ContrastCheck, audit_contrast};
pub use css::{ColorSpace, DarkMode, FormatOptions, GeneratorConfig, generate_css};
pub use error::ThemeError;
pub use model::{
    ColorSystem, ColorVariants, Depth, MaterialTable, MaterialTier, Named, SemanticColor, ThemeVariant,
    Tone,
};
pub use registry::ThemeRegistry;
