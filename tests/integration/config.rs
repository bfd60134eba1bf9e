use recipe_cost::config::SiteConfig;
use recipe_cost::core::user_friendly_error;
use recipe_cost::presentation::present;
use recipe_cost::resolver::resolve;
use tempfile::TempDir;

use crate::common::{TestSite, groceries};

const SITE_TOML: &str = r#"
[defaults]
hide_nutrition = true

[currency]
symbol = "€"
decimals = 1

[[units]]
unit = "jar"
plural = "jars"
kind = "other"
"#;

const JAM_TOAST: &str = r"
title: Jam Toast
ingredients:
  - number: 2
    unit: jars
    item: jam
";

const JAM_TART: &str = r"
title: Jam Tart
hide_nutrition: false
ingredients:
  - number: 1
    unit: jar
    item: jam
";

fn write_config(dir: &TempDir, content: &str) -> std::path::PathBuf {
    let path = dir.path().join("site.toml");
    std::fs::write(&path, content).unwrap();
    path
}

fn jam_site(config: SiteConfig) -> TestSite {
    let mut site = TestSite::with_config(config);
    site.groceries = groceries(
        r"
- name: jam
  cost: 4.0
  other_amount: 1
  other_unit: jar
  calories: 1000
",
    )
    .unwrap();
    site
}

#[test]
fn test_config_from_file_drives_build() {
    let temp = TempDir::new().unwrap();
    let config = SiteConfig::load(&write_config(&temp, SITE_TOML)).unwrap();
    assert_eq!(config.units.len(), 1);

    let test_site = jam_site(config);
    let mut site = test_site.build(&[JAM_TOAST, JAM_TART]).unwrap();
    resolve(&mut site).unwrap();
    present(&mut site, &test_site.config).unwrap();

    let toast = site.recipe("jam-toast").unwrap();
    assert_eq!(toast.scales[0].cost.value(), 8.0);
    assert_eq!(toast.scales[0].display.cost_string, "€8.0");
    assert!(toast.hide_nutrition);
    assert!(!toast.scales[0].display.has_visible_nutrition);

    let tart = site.recipe("jam-tart").unwrap();
    assert!(!tart.hide_nutrition);
    assert!(tart.scales[0].display.has_visible_nutrition);
}

#[test]
fn test_unregistered_unit_counts_nothing() {
    let test_site = jam_site(SiteConfig::default());
    let mut site = test_site.build(&[JAM_TOAST]).unwrap();
    resolve(&mut site).unwrap();

    let toast = site.recipe("jam-toast").unwrap();
    assert_eq!(toast.scales[0].ingredients[0].grocery_count(), 0.0);
    assert_eq!(toast.scales[0].cost.value(), 0.0);
}

#[test]
fn test_missing_file_is_an_error() {
    let temp = TempDir::new().unwrap();
    let err = SiteConfig::load(&temp.path().join("missing.toml")).unwrap_err();
    assert!(err.to_string().contains("Failed to read config file"));
}

#[test]
fn test_invalid_unit_factor_rejected() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "[[units]]\nunit = \"jar\"\nto_standard = -1.0\n");
    let err = SiteConfig::load(&path).unwrap_err();

    let friendly = user_friendly_error(err);
    assert!(friendly.error.to_string().contains("jar"));
}

#[test]
fn test_empty_file_is_default() {
    let temp = TempDir::new().unwrap();
    let config = SiteConfig::load(&write_config(&temp, "")).unwrap();
    assert_eq!(config, SiteConfig::default());
}
