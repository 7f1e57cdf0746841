use std::path::Path;

use anyhow::{anyhow, Result};
use tokio::fs;
use tracing::info;

use dashboard_domain::AnomalyRecord;

use crate::validate_records;

/// Reads a fixture file holding an array of records. `.json`, `.yaml` and
/// `.yml` are accepted; the set is validated before it is returned.
pub struct FixtureFileLoader;

impl FixtureFileLoader {
    pub fn new() -> Self {
        Self
    }

    pub async fn load(&self, path: &str) -> Result<Vec<AnomalyRecord>> {
        let file_path = Path::new(path);
        let format = FixtureFormat::from_path(file_path)?;
        let content = fs::read_to_string(file_path)
            .await
            .map_err(|err| anyhow!("failed to read fixture file {}: {}", path, err))?;
        let records = format.parse(&content)?;
        validate_records(&records)?;
        info!(path = %path, records = records.len(), "fixture file loaded");
        Ok(records)
    }
}

impl Default for FixtureFileLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FixtureFormat {
    Json,
    Yaml,
}

impl FixtureFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();
        match extension.as_str() {
            "json" => Ok(FixtureFormat::Json),
            "yaml" | "yml" => Ok(FixtureFormat::Yaml),
            _ => Err(anyhow!(
                "unsupported fixture file '{}', expected .json, .yaml or .yml",
                path.display()
            )),
        }
    }

    fn parse(&self, content: &str) -> Result<Vec<AnomalyRecord>> {
        let records: Vec<AnomalyRecord> = match self {
            FixtureFormat::Json => serde_json::from_str(content)?,
            FixtureFormat::Yaml => serde_yaml::from_str(content)?,
        };
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dashboard_domain::RiskLevel;
    use tempfile::TempDir;

    const JSON_FIXTURE: &str = r#"[
  {"transactionId":"tx_A","amount":12.5,"currency":"EUR","country":"FR","merchant":"Utility",
   "score":0.61,"riskLevel":"Medium","timestamp":"2025-12-21 09:00:00"},
  {"transactionId":"tx_B","amount":18250.0,"currency":"EUR","country":"IE","merchant":"Travel",
   "score":0.99,"riskLevel":"High","timestamp":"2025-12-21 09:05:00"}
]"#;

    const YAML_FIXTURE: &str = r#"
- transactionId: tx_Y
  amount: 42.0
  currency: USD
  country: US
  merchant: Online Service
  score: 0.4
  riskLevel: Low
  timestamp: "2025-12-21 10:00:00"
"#;

    async fn write(dir: &TempDir, name: &str, content: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, content).await.expect("write fixture");
        path.to_string_lossy().to_string()
    }

    #[tokio::test]
    async fn loads_json_in_file_order() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "anomalies.json", JSON_FIXTURE).await;
        let records = FixtureFileLoader::new().load(&path).await.expect("load");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].transaction_id.as_str(), "tx_A");
        assert_eq!(records[1].risk_level, RiskLevel::High);
    }

    #[tokio::test]
    async fn loads_yaml() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "anomalies.yml", YAML_FIXTURE).await;
        let records = FixtureFileLoader::new().load(&path).await.expect("load");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].merchant, "Online Service");
    }

    #[tokio::test]
    async fn rejects_lowercase_risk_level() {
        let dir = TempDir::new().expect("tempdir");
        let fixture = JSON_FIXTURE.replace("\"High\"", "\"high\"");
        let path = write(&dir, "anomalies.json", &fixture).await;
        assert!(FixtureFileLoader::new().load(&path).await.is_err());
    }

    #[tokio::test]
    async fn rejects_invalid_records() {
        let dir = TempDir::new().expect("tempdir");
        let fixture = JSON_FIXTURE.replace("\"tx_B\"", "\"tx_A\"");
        let path = write(&dir, "anomalies.json", &fixture).await;
        let err = FixtureFileLoader::new().load(&path).await.expect_err("duplicate");
        assert!(err.to_string().contains("duplicate"));
    }

    #[tokio::test]
    async fn rejects_unknown_extension_and_missing_file() {
        let dir = TempDir::new().expect("tempdir");
        let path = write(&dir, "anomalies.csv", "transactionId\n").await;
        assert!(FixtureFileLoader::new().load(&path).await.is_err());

        let missing = dir.path().join("missing.json");
        assert!(FixtureFileLoader::new()
            .load(&missing.to_string_lossy())
            .await
            .is_err());
    }
}
