// SPDX-License-Identifier: MIT
//
// swatchbook — color design tokens compiled to CSS custom properties.
//
// This is the build driver that wires the two crates together:
//
//   swatch-color → OKLCH / sRGB / Display-P3 conversion, validation, contrast
//   swatch-theme → seed tables, color systems, CSS generator
//
// A run with no arguments assembles every theme variant, then writes the
// regular variant into ./dist as thirteen stylesheets:
//
//   seeds → ThemeRegistry::build → generate_css × (strategy, space) → dist/*.css
//
// Progress goes to stdout (one `✓ <file>` per file), logs go to stderr.

mod build;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use swatch_theme::ThemeVariant;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

use crate::build::BuildConfig;

#[derive(Parser)]
#[command(name = "swatchbook")]
#[command(about = "Generate Tailwind @theme stylesheets from the swatchbook color systems")]
#[command(version)]
struct Cli {
    /// Directory the stylesheets are written to
    #[arg(long, env = "SWATCHBOOK_OUT_DIR", default_value = "dist")]
    out_dir: PathBuf,

    /// Which color system feeds the stylesheets: regular, high-contrast or kawaii
    #[arg(long, default_value = "regular")]
    variant: ThemeVariant,

    /// Dark-mode selector for the class strategy (default `.dark`)
    #[arg(long)]
    class_selector: Option<String>,

    /// Dark-mode selector for the data-attribute strategy (default `html[data-theme="dark"]`)
    #[arg(long)]
    data_attribute_selector: Option<String>,

    /// Also write colors.json with every variant
    #[arg(long)]
    json: bool,
}

impl From<Cli> for BuildConfig {
    fn from(cli: Cli) -> Self {
        Self {
            variant: cli.variant,
            class_selector: cli.class_selector,
            data_attribute_selector: cli.data_attribute_selector,
            json: cli.json,
            ..Self::new(cli.out_dir)
        }
    }
}

/// `RUST_LOG`-style directives, INFO when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn init_logging() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(&directives))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match build::run(&cli.into()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("swatchbook: {e:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_need_no_arguments() {
        let cli = Cli::try_parse_from(["swatchbook"]).unwrap();
        let config = BuildConfig::from(cli);
        assert_eq!(config.variant, ThemeVariant::Regular);
        assert!(!config.json);
        assert_eq!(config.class_selector, None);
    }

    #[test]
    fn flags_map_onto_build_config() {
        let cli = Cli::try_parse_from([
            "swatchbook",
            "--out-dir",
            "public/css",
            "--variant",
            "high-contrast",
            "--class-selector",
            ".night",
            "--json",
        ])
        .unwrap();
        let config = BuildConfig::from(cli);
        assert_eq!(config.out_dir, PathBuf::from("public/css"));
        assert_eq!(config.variant, ThemeVariant::HighContrast);
        assert_eq!(config.class_selector.as_deref(), Some(".night"));
        assert!(config.json);
    }

    #[test]
    fn log_level_defaults_to_info() {
        assert_eq!(log_filter("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn rust_log_overrides_the_default_level() {
        assert_eq!(log_filter("debug").max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(log_filter("warn").max_level_hint(), Some(LevelFilter::WARN));
        assert_eq!(
            log_filter("swatch_theme=debug").max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert!(Cli::try_parse_from(["swatchbook", "--variant", "neon"]).is_err());
    }
}
