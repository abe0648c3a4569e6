//! Configuration loading and representation.

use std::path::PathBuf;

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};

use crate::catalogue::JsonFileCatalogue;

pub const CATALOGUE_PATH_VAR: &str = "VAULTLEDGER_CATALOGUE_PATH";
pub const LOG_JSON_VAR: &str = "VAULTLEDGER_LOG_JSON";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InfraConfig {
    /// Location of the JSON catalogue document.
    pub catalogue_path: PathBuf,
    /// Emit JSON logs (otherwise human-readable text).
    pub log_json: bool,
}

impl InfraConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let catalogue_path = lookup(CATALOGUE_PATH_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .with_context(|| format!("{CATALOGUE_PATH_VAR} must be set"))?;

        let log_json = match lookup(LOG_JSON_VAR) {
            None => true,
            Some(raw) => parse_bool(&raw).with_context(|| format!("invalid {LOG_JSON_VAR}"))?,
        };

        Ok(Self {
            catalogue_path,
            log_json,
        })
    }

    pub fn catalogue(&self) -> JsonFileCatalogue {
        JsonFileCatalogue::new(self.catalogue_path.clone())
    }

    /// Install process-wide tracing using this configuration's log format.
    pub fn init_observability(&self) {
        vaultledger_observability::init_with_format(if self.log_json {
            vaultledger_observability::LogFormat::Json
        } else {
            vaultledger_observability::LogFormat::Text
        });
    }
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => bail!("expected a boolean, got {other:?}"),
    }
}
