//! Configuration — YAML config + env var overrides for the static host.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Bind address
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Built frontend bundle (relative paths resolve against the config file)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,

    /// Resolved project root (set at load time, not serialized from YAML)
    #[serde(skip)]
    pub project_root: PathBuf,
}

fn default_host() -> String {
    "0.0.0.0".into()
}
fn default_port() -> u16 {
    8000
}
fn default_dist_dir() -> PathBuf {
    PathBuf::from("crates/portfolio-web/frontend/dist")
}

impl SiteConfig {
    /// `project_root/config.yaml` if present, otherwise defaults rooted at
    /// `project_root`. Env overrides apply either way.
    pub fn load_or_default(project_root: &Path) -> Result<Self> {
        let mut config = Self::file_or_defaults(project_root)?;
        config.apply_env();
        Ok(config)
    }

    /// Parse a config file as written, without env overrides.
    pub fn from_file(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: SiteConfig =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;

        let parent = config_path.parent().unwrap_or(Path::new("."));
        config.project_root = parent
            .canonicalize()
            .unwrap_or_else(|_| parent.to_path_buf());
        Ok(config)
    }

    /// Same lookup as `load_or_default`, without env overrides.
    pub fn file_or_defaults(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join("config.yaml");
        if config_path.is_file() {
            return Self::from_file(&config_path);
        }
        Ok(Self {
            project_root: project_root.to_path_buf(),
            ..Self::default()
        })
    }

    fn apply_env(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Override fields from `PORTFOLIO_HOST`, `PORT` and `PORTFOLIO_DIST` as
    /// resolved by `lookup`. An unparsable `PORT` is ignored.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("PORTFOLIO_HOST") {
            self.host = host;
        }
        if let Some(port) = lookup("PORT").and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        if let Some(dist) = lookup("PORTFOLIO_DIST") {
            self.dist_dir = PathBuf::from(dist);
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Absolute location of the frontend bundle.
    pub fn resolve_dist_dir(&self) -> PathBuf {
        if self.dist_dir.is_absolute() {
            self.dist_dir.clone()
        } else {
            self.project_root.join(&self.dist_dir)
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
            project_root: PathBuf::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "host: 127.0.0.1").unwrap();

        let config = SiteConfig::from_file(tmp.path()).unwrap();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(
            config.dist_dir,
            PathBuf::from("crates/portfolio-web/frontend/dist")
        );
    }

    #[test]
    fn test_relative_dist_resolves_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "dist_dir: site/dist\n").unwrap();

        let config = SiteConfig::from_file(&path).unwrap();
        let root = dir.path().canonicalize().unwrap();
        assert_eq!(config.resolve_dist_dir(), root.join("site/dist"));
    }

    #[test]
    fn test_absolute_dist_kept() {
        let config = SiteConfig {
            dist_dir: PathBuf::from("/srv/portfolio"),
            project_root: PathBuf::from("/ignored"),
            ..SiteConfig::default()
        };
        assert_eq!(config.resolve_dist_dir(), PathBuf::from("/srv/portfolio"));
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "port: not-a-number").unwrap();
        assert!(SiteConfig::from_file(tmp.path()).is_err());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SiteConfig::file_or_defaults(dir.path()).unwrap();
        assert_eq!(config.project_root, dir.path());
        assert_eq!(config.port, 8000);
        assert!(config.resolve_dist_dir().starts_with(dir.path()));
    }

    #[test]
    fn test_config_file_found_in_project_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yaml"), "port: 9100\n").unwrap();
        let config = SiteConfig::file_or_defaults(dir.path()).unwrap();
        assert_eq!(config.port, 9100);
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            ("PORTFOLIO_HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("PORTFOLIO_DIST", "/srv/site"),
        ]
        .into_iter()
        .collect();

        let mut config = SiteConfig::default();
        config.apply_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.bind_addr(), "127.0.0.1:3000");
        assert_eq!(config.resolve_dist_dir(), PathBuf::from("/srv/site"));
    }

    #[test]
    fn test_bad_port_override_ignored() {
        let mut config = SiteConfig::default();
        config.apply_overrides(|key| (key == "PORT").then(|| "eighty".to_string()));
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "0.0.0.0");
    }
}
