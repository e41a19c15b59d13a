use anyhow::{Context, Result};
use fingenius_api::ApiSettings;
use fingenius_core::Funds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::ensure_fingenius_home;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerSection,
    pub profile: ProfileSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub host: String,
    pub port: u16,
    /// Pause before each expense analysis, in milliseconds
    pub analysis_delay_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileSection {
    /// IANA name; decides which calendar day counts as today
    pub timezone: String,
    /// Starting savings for new users and for `fingenius goal`
    pub savings: f64,
    pub investments: f64,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            analysis_delay_ms: 0,
        }
    }
}

impl Default for ProfileSection {
    fn default() -> Self {
        Self {
            timezone: "Asia/Kolkata".to_string(),
            savings: 0.0,
            investments: 0.0,
        }
    }
}

impl Config {
    pub fn funds(&self) -> Funds {
        Funds {
            savings: self.profile.savings,
            investments: self.profile.investments,
        }
    }

    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            analysis_delay: Duration::from_millis(self.server.analysis_delay_ms),
            timezone: self.profile.timezone.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ensure_fingenius_home()?.join("config.toml"))
}

pub fn load_config() -> Result<Config> {
    let p = config_path()?;
    if !p.exists() {
        tracing::debug!(path = %p.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    let cfg = toml::from_str(&s).with_context(|| format!("parse {}", p.display()))?;
    tracing::debug!(path = %p.display(), "loaded config");
    Ok(cfg)
}

pub fn save_config(cfg: &Config) -> Result<()> {
    let p = config_path()?;
    let s = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(&p, s).with_context(|| format!("write {}", p.display()))?;
    tracing::info!(path = %p.display(), "saved config");
    Ok(())
}

pub fn init_config() -> Result<()> {
    let p = config_path()?;
    if p.exists() {
        println!("Config already exists: {}", p.display());
        return Ok(());
    }
    save_config(&Config::default())?;
    println!("Wrote {}", p.display());
    Ok(())
}

pub fn show_config() -> Result<()> {
    let p = config_path()?;
    let cfg = load_config()?;
    println!("# {}", p.display());
    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str("[server]\nport = 8080\n").unwrap();
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.profile.timezone, "Asia/Kolkata");
    }

    #[test]
    fn test_round_trip() {
        let mut cfg = Config::default();
        cfg.profile.savings = 25_000.0;
        cfg.server.analysis_delay_ms = 1500;

        let text = toml::to_string_pretty(&cfg).unwrap();
        let back: Config = toml::from_str(&text).unwrap();
        assert_eq!(back, cfg);
        assert_eq!(back.api_settings().analysis_delay, Duration::from_millis(1500));
    }
}
