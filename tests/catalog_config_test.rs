use anyhow::Result;
use coverage_planner::utils::validation::Validate;
use coverage_planner::{CatalogConfig, PlanCalculator, PlannerError};
use tempfile::TempDir;

/// 自訂目錄加別名後，計算結果使用正式名稱與其比例
#[test]
fn test_plan_against_file_catalog() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[territories]]
name = "Skincare"
text_fraction = 0.90
media_fraction = 0.10

[[territories]]
name = "Haircare"
text_fraction = 0.50

[aliases]
"hair care" = "Haircare"
"#,
    )?;

    let config = CatalogConfig::from_file(&path)?;
    config.validate()?;
    let catalog = config.into_catalog()?;

    let plan = PlanCalculator::new(&catalog).calculate("HAIR CARE ", "shampoo", 500, 100)?;
    assert_eq!(plan.macro_territory, "Haircare");
    // 20% coverage -> Growth, gap 400 / 50 = 8, half articles
    assert_eq!(plan.recommended_contents, 8);
    assert_eq!(plan.text_contents(), 4);
    assert_eq!(plan.media_contents(), 4);

    let err = PlanCalculator::new(&catalog)
        .calculate("Make Up", "x", 10, 1)
        .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidTerritory { .. }));
    Ok(())
}

#[test]
fn test_load_catalog_defaults_to_builtin() -> Result<()> {
    let catalog = CatalogConfig::load_catalog(None::<&std::path::Path>)?;
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["Skincare", "Make Up", "Fragrance"]);
    assert!(catalog.aliases().is_empty());
    Ok(())
}

#[test]
fn test_duplicate_names_are_rejected() -> Result<()> {
    let config = CatalogConfig::from_toml_str(
        r#"
[[territories]]
name = "Fragrance"
text_fraction = 0.9

[[territories]]
name = " fragrance"
text_fraction = 0.8
"#,
    )?;
    let err = config.into_catalog().unwrap_err();
    assert!(matches!(err, PlannerError::ConfigValidationError { .. }));
    Ok(())
}

#[test]
fn test_invalid_toml_is_reported() {
    let err = CatalogConfig::from_toml_str("[[territories]\nname = ").unwrap_err();
    assert!(err.to_string().contains("TOML parsing error"));
}
