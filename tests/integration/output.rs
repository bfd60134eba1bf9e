use recipe_cost::RecipeCostError;
use recipe_cost::config::SiteConfig;
use recipe_cost::presentation::present;
use recipe_cost::resolver::resolve;
use recipe_cost::summary::summarize;

use crate::common::TestSite;

const PANCAKES: &str = r"
title: Pancakes
yield:
  - number: 4
    unit: servings
  - number: 12
    unit: pancakes
    show_serving_size: true
scales: [2, 3]
ingredients:
  - number: 2
    unit: cups
    item: flour
  - number: 4
    unit: cups
    item: milk
  - number: 2
    item: egg
  - number: 1
    unit: stick
    item: butter
    scale: 2
  - number: 1
    item: vanilla pod
";

const TEA: &str = r"
title: Tea
hide_cost: true
ingredients:
  - number: 3
    unit: cups
    item: milk
";

fn presented() -> recipe_cost::models::Site {
    let test_site = TestSite::new();
    let mut site = test_site.build(&[PANCAKES, TEA]).unwrap();
    resolve(&mut site).unwrap();
    present(&mut site, &test_site.config).unwrap();
    site
}

#[test]
fn test_present_requires_resolved_site() {
    let mut site = TestSite::new().build(&[PANCAKES]).unwrap();
    let err = present(&mut site, &SiteConfig::default()).unwrap_err();
    assert!(matches!(err, RecipeCostError::Other { .. }));
}

#[test]
fn test_scale_display_values() {
    let site = presented();
    let pancakes = site.recipe("pancakes").unwrap();

    let base = &pancakes.scales[0].display;
    assert_eq!(base.cost_string, "$2.55");
    assert!(base.has_visible_cost);
    assert!(base.has_visible_cost_per_serving);
    assert!(base.is_nutrition_per_serving);
    assert_eq!(base.nutrition_display.fat, 11.0);
    assert!(base.has_cost_detail);
    assert!(base.has_nutrition_detail);
    assert!(base.has_any_detail);

    let double = &pancakes.scales[1].display;
    assert_eq!(double.cost_per_serving_string, "$0.79");
    assert!(pancakes.details.has_cost_per_serving_detail);
}

#[test]
fn test_serving_size_strings() {
    let site = presented();
    let pancakes = site.recipe("pancakes").unwrap();
    assert_eq!(pancakes.scales[0].yields[1].serving_size_string.as_deref(), Some("3 pancakes"));
    assert_eq!(pancakes.scales[0].yields[0].serving_size_string, None);
}

#[test]
fn test_ingredient_display_values() {
    let site = presented();
    let base = &site.recipe("pancakes").unwrap().scales[0];
    let egg = base.ingredients.iter().find(|i| i.item == "egg").unwrap();
    assert_eq!(egg.display.cost_string, "$1.00");
    assert_eq!(egg.display.cost_per_serving_string, "$0.25");
    assert_eq!(egg.display.nutrition_display.calories, 35.0);
}

#[test]
fn test_hidden_cost_and_single_serving() {
    let site = presented();
    let tea = site.recipe("tea").unwrap();
    let display = &tea.scales[0].display;

    assert_eq!(display.cost_string, "$0.56");
    assert!(!display.has_visible_cost);
    assert!(!display.has_cost_detail);
    assert!(!display.is_nutrition_per_serving);
    assert!(display.has_visible_nutrition);
    assert!(!tea.details.has_cost_detail);
}

#[test]
fn test_summary_finds_missing_and_unused_groceries() {
    let test_site = TestSite::new();
    let mut site = test_site.build(&[PANCAKES]).unwrap();
    resolve(&mut site).unwrap();
    let summary = summarize(&site, &test_site.groceries);

    assert_eq!(summary.recipes.len(), 1);
    assert_eq!(summary.ingredients.len(), 13);

    let missing: Vec<&str> = summary.missing_groceries().map(|row| row.scale.as_str()).collect();
    assert_eq!(missing, vec!["1x", "2x", "3x"]);

    let egg = summary.ingredients.iter().find(|row| row.ingredient == "2 egg").unwrap();
    assert_eq!(egg.number_groceries, 0.16667);
    assert!(egg.found_grocery);

    let flour = summary.groceries.iter().find(|row| row.name == "flour").unwrap();
    assert_eq!(flour.recipe_scales, vec!["Pancakes (1x)", "Pancakes (2x)", "Pancakes (3x)"]);
    let butter = summary.groceries.iter().find(|row| row.name == "butter").unwrap();
    assert_eq!(butter.recipe_scales, vec!["Pancakes (2x)"]);

    let unused: Vec<&str> = summary.unused_groceries().map(|row| row.name.as_str()).collect();
    assert_eq!(unused, vec!["garlic"]);
}

#[test]
fn test_summary_json_export() {
    let test_site = TestSite::new();
    let site = test_site.build(&[PANCAKES]).unwrap();
    let json = summarize(&site, &test_site.groceries).to_json().unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["recipes"][0]["title"], "Pancakes");
    assert_eq!(value["groceries"][4]["grocery_id"], 5);
    assert_eq!(value["groceries"][4]["recipe_scales"][0], "Pancakes (2x)");
    assert_eq!(value["ingredients"][3]["found_grocery"], false);
}
