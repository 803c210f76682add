// SPDX-License-Identifier: MIT
//
// The stylesheet build: one ColorSystem rendered into every combination of
// dark-mode strategy and color space, written into a single output directory.
//
//   theme.css                              sRGB, media-query (the default import)
//   theme-<space>.css                      media-query, per space
//   theme-<strategy>-<space>.css           every strategy × every space
//
// Nothing is written until every variant has been assembled, so a bad seed
// never leaves a half-populated directory behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use swatch_theme::{
    ColorSpace, ColorSystem, DarkMode, GeneratorConfig, ThemeRegistry, ThemeVariant, audit_contrast,
    generate_css,
};

/// What to build and where.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    pub out_dir: PathBuf,
    pub variant: ThemeVariant,
    pub class_selector: Option<String>,
    pub data_attribute_selector: Option<String>,
    pub json: bool,
}

impl BuildConfig {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            variant: ThemeVariant::Regular,
            class_selector: None,
            data_attribute_selector: None,
            json: false,
        }
    }

    fn strategies(&self) -> [DarkMode; 3] {
        [
            DarkMode::MediaQuery,
            DarkMode::Class(self.class_selector.clone()),
            DarkMode::DataAttribute(self.data_attribute_selector.clone()),
        ]
    }
}

/// One stylesheet to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Output {
    pub file_name: String,
    pub dark_mode: DarkMode,
    pub color_space: ColorSpace,
}

/// Every stylesheet, in write order. Thirteen in total.
pub fn outputs(config: &BuildConfig) -> Vec<Output> {
    let mut outputs = vec![Output {
        file_name: "theme.css".to_string(),
        dark_mode: DarkMode::MediaQuery,
        color_space: ColorSpace::Srgb,
    }];

    for space in ColorSpace::ALL {
        outputs.push(Output {
            file_name: format!("theme-{space}.css"),
            dark_mode: DarkMode::MediaQuery,
            color_space: space,
        });
    }

    for dark_mode in config.strategies() {
        for space in ColorSpace::ALL {
            outputs.push(Output {
                file_name: format!("theme-{}-{space}.css", dark_mode.strategy()),
                dark_mode: dark_mode.clone(),
                color_space: space,
            });
        }
    }

    outputs
}

/// Assemble the registry and write every output. Returns the written paths.
///
/// # Errors
///
/// Seed or parity failures from assembly, and any I/O failure with the path
/// that caused it.
pub fn run(config: &BuildConfig) -> Result<Vec<PathBuf>> {
    let registry = ThemeRegistry::build().context("failed to assemble color systems")?;
    let system = registry.get(config.variant);
    report_contrast(config.variant, system);

    fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("failed to create {}", config.out_dir.display()))?;
    info!(out_dir = %config.out_dir.display(), variant = %config.variant, "generating stylesheets");

    let mut written = Vec::new();
    for output in outputs(config) {
        let css = generate_css(
            &GeneratorConfig::new(system)
                .dark_mode(output.dark_mode)
                .color_space(output.color_space),
        );
        let path = config.out_dir.join(&output.file_name);
        write(&path, &css)?;
        println!("✓ {}", output.file_name);
        written.push(path);
    }

    if config.json {
        let json = serde_json::to_string_pretty(&registry).context("failed to serialize color systems")?;
        let path = config.out_dir.join("colors.json");
        write(&path, &json)?;
        println!("✓ colors.json");
        written.push(path);
    }

    info!(files = written.len(), "done");
    Ok(written)
}

fn write(path: &Path, contents: &str) -> Result<()> {
    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

fn report_contrast(variant: ThemeVariant, system: &ColorSystem) {
    for check in audit_contrast(system).iter().filter(|c| !c.passed()) {
        warn!(
            %variant,
            tone = %check.tone,
            foreground = %check.foreground,
            background = %check.background,
            ratio = format_args!("{:.2}", check.ratio),
            threshold = check.threshold,
            "contrast below threshold"
        );
    }
}
