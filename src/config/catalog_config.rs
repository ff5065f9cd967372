use crate::core::catalog::Catalog;
use crate::domain::model::TerritoryProfile;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub territories: Vec<TerritoryConfig>,
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerritoryConfig {
    pub name: String,
    pub text_fraction: f64,
    /// 未填時為 1 - text_fraction
    pub media_fraction: Option<f64>,
}

impl TerritoryConfig {
    pub fn media_fraction(&self) -> f64 {
        self.media_fraction.unwrap_or(1.0 - self.text_fraction)
    }

    fn to_profile(&self) -> TerritoryProfile {
        TerritoryProfile::new(self.name.trim(), self.text_fraction, self.media_fraction())
    }
}

impl CatalogConfig {
    /// 從 TOML 檔案載入目錄
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析目錄
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SKINCARE_TEXT_FRACTION})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證後建立不可變的目錄
    pub fn into_catalog(self) -> Result<Catalog> {
        let mut builder = Catalog::builder();
        for territory in &self.territories {
            builder = builder.territory(territory.to_profile());
        }
        for (alias, canonical) in self.aliases {
            builder = builder.alias(alias, canonical);
        }
        let catalog = builder.build()?;

        tracing::debug!(
            "Loaded catalog with {} territories and {} aliases",
            catalog.len(),
            catalog.aliases().len()
        );
        Ok(catalog)
    }

    /// Built-in catalog, or the one described by `path` when given.
    pub fn load_catalog<P: AsRef<Path>>(path: Option<P>) -> Result<Catalog> {
        match path {
            Some(path) => {
                tracing::info!("📁 Loading catalog from: {}", path.as_ref().display());
                Self::from_file(path)?.into_catalog()
            }
            None => Ok(Catalog::builtin().clone()),
        }
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.clone().into_catalog().map(|_| ())
    }
}
