//! Configuration loading for the dgidb parser.
//! Reads dgidb.toml from `--config`, the DGIDB_CONFIG env var, or the current directory.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use dgidb_ingestion::pipeline::DEFAULT_FILE_NAME;
use dgidb_ingestion::sources::mychem::MYCHEM_QUERY_URL;
use dgidb_ingestion::sources::mygene::MYGENE_QUERY_URL;
use dgidb_ingestion::{AssociationFields, ParserOptions, SweepPolicy};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "dgidb.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub input: InputConfig,
    pub lookup: LookupConfig,
    pub output: OutputConfig,
    pub cleanup: CleanupConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { data_dir: default_data_dir(), file_name: default_file_name() }
    }
}

fn default_data_dir()  -> PathBuf { PathBuf::from("./data") }
fn default_file_name() -> String  { DEFAULT_FILE_NAME.to_string() }

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupConfig {
    #[serde(default = "bool_true")]
    pub enabled: bool,
    #[serde(default = "default_mygene_url")]
    pub mygene_url: String,
    #[serde(default = "default_mychem_url")]
    pub mychem_url: String,
    /// Unset keeps the HTTP client's default.
    pub timeout_secs: Option<u64>,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            enabled: bool_true(),
            mygene_url: default_mygene_url(),
            mychem_url: default_mychem_url(),
            timeout_secs: None,
        }
    }
}

impl LookupConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

fn bool_true()          -> bool   { true }
fn default_mygene_url() -> String { MYGENE_QUERY_URL.to_string() }
fn default_mychem_url() -> String { MYCHEM_QUERY_URL.to_string() }

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub association: AssociationFields,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanupConfig {
    #[serde(default)]
    pub sweep_values: SweepPolicy,
}


impl Config {
    /// Load configuration from `path`, or from dgidb.toml when no path is given.
    /// A missing dgidb.toml falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.exists() {
            return Self::from_file(default_path);
        }

        tracing::warn!("No {} found, using built-in defaults", DEFAULT_CONFIG_FILE);
        Ok(Self::default())
    }

    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Config file not found: {}\n\
                 Copy dgidb.example.toml to dgidb.toml and edit it.",
                path.display()
            );
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn parser_options(&self) -> ParserOptions {
        ParserOptions {
            association_fields: self.output.association.clone(),
            sweep: self.cleanup.sweep_values.clone(),
        }
    }
}
