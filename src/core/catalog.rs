use crate::domain::model::TerritoryProfile;
use crate::domain::ports::TerritoryLookup;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{
    validate_fraction_sum, validate_non_empty_string, validate_range, validate_unique_names,
};
use std::collections::HashMap;
use std::sync::LazyLock;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    profiles: vec![
        TerritoryProfile::new("Skincare", 0.90, 0.10),
        TerritoryProfile::new("Make Up", 0.60, 0.40),
        TerritoryProfile::new("Fragrance", 0.90, 0.10),
    ],
    aliases: HashMap::new(),
});

/// Macro-territories and their text/media split, in declaration order.
///
/// Alias keys are stored trimmed and lower-cased and point at an index into
/// `profiles`, so every alias is guaranteed to resolve.
#[derive(Debug, Clone)]
pub struct Catalog {
    profiles: Vec<TerritoryProfile>,
    aliases: HashMap<String, usize>,
}

impl Catalog {
    /// Skincare, Make Up and Fragrance with no aliases.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn builder() -> CatalogBuilder {
        CatalogBuilder::default()
    }

    pub fn resolve(&self, name: &str) -> Result<&TerritoryProfile> {
        let key = name.trim().to_lowercase();

        if let Some(&index) = self.aliases.get(&key) {
            tracing::debug!("Macro territory '{}' matched alias", name);
            return Ok(&self.profiles[index]);
        }

        self.profiles
            .iter()
            .find(|p| p.name.to_lowercase() == key)
            .ok_or_else(|| PlannerError::InvalidTerritory {
                input: name.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.name.as_str())
    }

    pub fn profiles(&self) -> &[TerritoryProfile] {
        &self.profiles
    }

    /// Alias -> canonical name pairs, sorted by alias.
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .aliases
            .iter()
            .map(|(alias, &index)| (alias.as_str(), self.profiles[index].name.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl TerritoryLookup for Catalog {
    fn resolve(&self, name: &str) -> Result<&TerritoryProfile> {
        Catalog::resolve(self, name)
    }
}

#[derive(Debug, Default)]
pub struct CatalogBuilder {
    profiles: Vec<TerritoryProfile>,
    aliases: Vec<(String, String)>,
}

impl CatalogBuilder {
    pub fn territory(mut self, profile: TerritoryProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    pub fn alias(mut self, alias: impl Into<String>, canonical: impl Into<String>) -> Self {
        self.aliases.push((alias.into(), canonical.into()));
        self
    }

    pub fn build(self) -> Result<Catalog> {
        if self.profiles.is_empty() {
            return Err(PlannerError::ConfigValidationError {
                field: "territories".to_string(),
                message: "Catalog must define at least one territory".to_string(),
            });
        }

        for profile in &self.profiles {
            validate_non_empty_string("territories.name", &profile.name)?;
            let field = format!("territories.{}", profile.name);
            validate_range(&field, profile.text_fraction, 0.0, 1.0)?;
            validate_range(&field, profile.media_fraction, 0.0, 1.0)?;
            validate_fraction_sum(&field, profile.text_fraction, profile.media_fraction)?;
        }
        validate_unique_names("territories", self.profiles.iter().map(|p| p.name.as_str()))?;

        let mut aliases = HashMap::with_capacity(self.aliases.len());
        for (alias, canonical) in self.aliases {
            validate_non_empty_string("aliases", &alias)?;
            let target = canonical.trim().to_lowercase();
            let index = self
                .profiles
                .iter()
                .position(|p| p.name.to_lowercase() == target)
                .ok_or_else(|| PlannerError::InvalidConfigValueError {
                    field: format!("aliases.{}", alias),
                    value: canonical.clone(),
                    reason: "Alias points at an unknown macro territory".to_string(),
                })?;
            if aliases.insert(alias.trim().to_lowercase(), index).is_some() {
                return Err(PlannerError::ConfigValidationError {
                    field: "aliases".to_string(),
                    message: format!("Duplicate alias (case-insensitive): {}", alias),
                });
            }
        }

        Ok(Catalog {
            profiles: self.profiles,
            aliases,
        })
    }
}
