use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use dashboard_domain::{AverageBasis, DashboardSettings, RuntimeConfig};

pub const CONFIG_ENV: &str = "DASHBOARD_CONFIG";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub fixtures_path: Option<String>,
    pub request_timeout_seconds: u64,
    pub title: String,
    pub badge: String,
    pub subtitle: String,
    pub region: String,
    pub environment: String,
    pub average_basis: AverageBasis,
    pub show_architecture: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let dashboard = DashboardSettings::default();
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            fixtures_path: None,
            request_timeout_seconds: 15,
            title: dashboard.title,
            badge: dashboard.badge,
            subtitle: dashboard.subtitle,
            region: dashboard.region,
            environment: dashboard.environment,
            average_basis: dashboard.average_basis,
            show_architecture: dashboard.show_architecture,
        }
    }
}

impl AppConfig {
    /// Loads `config_path`, falling back to `DASHBOARD_CONFIG` and then
    /// `./config.toml`, and applies `DASHBOARD_*` overrides.
    pub async fn load(config_path: Option<&Path>) -> Result<Self> {
        let path = resolve_config_path(config_path, |key| env::var(key).ok());
        let mut config = Self::read(&path).await?;
        config.apply_env_overrides();
        config.finish(path.parent())?;
        Ok(config)
    }

    async fn read(file_path: &Path) -> Result<Self> {
        if !file_path.exists() {
            warn!("{} not found, using defaults", file_path.display());
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(file_path).await?;
        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads `file_path` without consulting the environment.
    pub async fn load_from(file_path: &Path) -> Result<Self> {
        let mut config = Self::read(file_path).await?;
        config.finish(file_path.parent())?;
        Ok(config)
    }

    fn finish(&mut self, base_dir: Option<&Path>) -> Result<()> {
        self.normalize();
        self.resolve_paths(base_dir);
        self.validate()
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(path) = &self.fixtures_path {
            if path.trim().is_empty() {
                self.fixtures_path = None;
            }
        }
        self.title = self.title.trim().to_string();
        self.region = self.region.trim().to_string();
        self.environment = self.environment.trim().to_string();
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        if let Some(path) = &self.fixtures_path {
            self.fixtures_path = Some(resolve_path(base, path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        if self.title.is_empty() {
            return Err(anyhow!("title must not be empty"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            fixtures_path: self.fixtures_path.clone(),
            request_timeout_seconds: self.request_timeout_seconds,
            dashboard: DashboardSettings {
                title: self.title.clone(),
                badge: self.badge.clone(),
                subtitle: self.subtitle.clone(),
                region: self.region.clone(),
                environment: self.environment.clone(),
                average_basis: self.average_basis,
                show_architecture: self.show_architecture,
            },
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("DASHBOARD_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("DASHBOARD_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Some(value) = lookup("DASHBOARD_FIXTURES_PATH") {
            self.fixtures_path = Some(value);
        }
        if let Some(value) = lookup("DASHBOARD_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("DASHBOARD_TITLE") {
            self.title = value;
        }
        if let Some(value) = lookup("DASHBOARD_BADGE") {
            self.badge = value;
        }
        if let Some(value) = lookup("DASHBOARD_SUBTITLE") {
            self.subtitle = value;
        }
        if let Some(value) = lookup("DASHBOARD_REGION") {
            self.region = value;
        }
        if let Some(value) = lookup("DASHBOARD_ENVIRONMENT") {
            self.environment = value;
        }
        if let Some(value) = lookup("DASHBOARD_AVERAGE_BASIS") {
            match value.parse() {
                Ok(basis) => self.average_basis = basis,
                Err(err) => warn!("ignoring DASHBOARD_AVERAGE_BASIS: {}", err),
            }
        }
        if let Some(value) = lookup("DASHBOARD_SHOW_ARCHITECTURE") {
            self.show_architecture = value.parse().unwrap_or(self.show_architecture);
        }
    }
}

fn resolve_config_path(
    explicit: Option<&Path>,
    lookup: impl Fn(&str) -> Option<String>,
) -> PathBuf {
    match explicit {
        Some(path) => path.to_path_buf(),
        None => lookup(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("./config.toml")),
    }
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_falls_back_to_defaults() {
        let dir = TempDir::new().expect("tempdir");
        let config = AppConfig::load_from(&dir.path().join("config.toml"))
            .await
            .expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.average_basis, AverageBasis::Score);
    }

    #[tokio::test]
    async fn file_values_are_normalized_and_resolved() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
bind_addr = "0.0.0.0:8080"
api_token = "  "
fixtures_path = "data/anomalies.json"
average_basis = "amount"
show_architecture = false
region = " us-east-1 "
"#,
        )
        .await
        .expect("write config");

        let config = AppConfig::load_from(&path).await.expect("config");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.api_token, None);
        let expected = dir
            .path()
            .join("data/anomalies.json")
            .to_string_lossy()
            .to_string();
        assert_eq!(config.fixtures_path.as_deref(), Some(expected.as_str()));
        assert_eq!(config.region, "us-east-1");

        let runtime = config.to_runtime_config();
        assert_eq!(runtime.dashboard.average_basis, AverageBasis::Amount);
        assert!(!runtime.dashboard.show_architecture);
    }

    #[tokio::test]
    async fn unknown_average_basis_is_rejected() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "average_basis = \"median\"\n")
            .await
            .expect("write config");
        assert!(AppConfig::load_from(&path).await.is_err());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.bind_addr = "not-an-addr".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.request_timeout_seconds = 0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.title = "   ".to_string();
        config.normalize();
        assert!(config.validate().is_err());
    }

    #[test]
    fn explicit_config_path_wins_over_environment() {
        let from_env = |key: &str| (key == CONFIG_ENV).then(|| "/etc/dashboard.toml".to_string());
        assert_eq!(
            resolve_config_path(Some(Path::new("cli.toml")), from_env),
            PathBuf::from("cli.toml")
        );
        assert_eq!(
            resolve_config_path(None, from_env),
            PathBuf::from("/etc/dashboard.toml")
        );
        assert_eq!(
            resolve_config_path(None, |_| None),
            PathBuf::from("./config.toml")
        );
    }

    #[test]
    fn overrides_apply_and_ignore_garbage() {
        let vars: HashMap<&str, &str> = [
            ("DASHBOARD_BIND_ADDR", "127.0.0.1:9999"),
            ("DASHBOARD_API_TOKEN", "secret"),
            ("DASHBOARD_REQUEST_TIMEOUT_SECONDS", "soon"),
            ("DASHBOARD_AVERAGE_BASIS", "median"),
            ("DASHBOARD_ENVIRONMENT", "Staging"),
        ]
        .into_iter()
        .collect();
        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|value| value.to_string()));
        assert_eq!(config.bind_addr, "127.0.0.1:9999");
        assert_eq!(config.api_token.as_deref(), Some("secret"));
        assert_eq!(config.request_timeout_seconds, 15);
        assert_eq!(config.average_basis, AverageBasis::Score);
        assert_eq!(config.environment, "Staging");
    }
}
