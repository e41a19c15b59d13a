use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

/// Environment variable that replaces `~/.fingenius`
pub const HOME_ENV: &str = "FINGENIUS_HOME";

pub fn fingenius_home() -> Result<PathBuf> {
    resolve_home(std::env::var(HOME_ENV).ok(), std::env::var("HOME").ok())
}

fn resolve_home(override_dir: Option<String>, home: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = override_dir.filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    match home {
        Some(home) => Ok(PathBuf::from(home).join(".fingenius")),
        None => bail!("HOME is not set (or set {HOME_ENV})"),
    }
}

pub fn ensure_fingenius_home() -> Result<PathBuf> {
    let dir = fingenius_home()?;
    fs::create_dir_all(&dir).with_context(|| format!("create {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = resolve_home(Some("/tmp/fg".into()), Some("/home/asha".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/fg"));
    }

    #[test]
    fn test_default_under_home() {
        let dir = resolve_home(Some("  ".into()), Some("/home/asha".into())).unwrap();
        assert_eq!(dir, PathBuf::from("/home/asha/.fingenius"));
        assert!(resolve_home(None, None).is_err());
    }
}
