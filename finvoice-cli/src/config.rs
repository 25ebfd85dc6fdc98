use anyhow::{Context, Result, bail};
use finvoice_core::{CategoryRule, CategoryTable, FALLBACK_CATEGORY};
use finvoice_ingest::ParseStrategy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::state::{ensure_finvoice_home, finvoice_home};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub parser: ParserSection,

    /// Replaces the built-in category table when non-empty
    #[serde(default)]
    pub categories: Vec<CategoryRule>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ParserSection {
    #[serde(default)]
    pub strategy: ParseStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            parser: ParserSection::default(),
            categories: CategoryTable::default().rules().to_vec(),
        }
    }
}

impl Config {
    pub fn category_table(&self) -> Result<CategoryTable> {
        if self.categories.is_empty() {
            return Ok(CategoryTable::default());
        }
        CategoryTable::new(self.categories.clone(), FALLBACK_CATEGORY)
            .context("invalid [[categories]] in config")
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(finvoice_home()?.join("config.toml"))
}

/// Load `path`, or the default location where a missing file means defaults.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let p = match path {
        Some(p) => {
            if !p.exists() {
                bail!("Config not found: {}", p.display());
            }
            p.to_path_buf()
        }
        None => config_path()?,
    };
    if !p.exists() {
        debug!("No config at {}, using defaults", p.display());
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("parse {}", p.display()))
}

pub fn parse_config(s: &str) -> Result<Config> {
    Ok(toml::from_str(s)?)
}

pub fn save_config(cfg: &Config) -> Result<PathBuf> {
    let p = ensure_finvoice_home()?.join("config.toml");
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    Ok(p)
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    let written = save_config(&Config::default())?;
    println!("Wrote {}", written.display());
    Ok(())
}
