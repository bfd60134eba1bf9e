use recipe_cost::RecipeCostError;
use recipe_cost::models::IngredientSource;

use crate::common::{TestSite, approx};

const PANCAKES: &str = r"
title: Pancakes
yield:
  - number: 4
    unit: servings
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

#[test]
fn test_scales_expanded_in_order() {
    let site = TestSite::new().build(&[PANCAKES]).unwrap();
    let pancakes = site.recipe("pancakes").unwrap();

    let labels: Vec<&str> = pancakes.scales.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["1x", "2x", "3x"]);
    assert_eq!(pancakes.scales[0].servings, Some(4.0));
    assert_eq!(pancakes.scales[2].servings, Some(12.0));
    assert_eq!(pancakes.scales[1].yields[0].yield_string, "8 servings");
}

#[test]
fn test_scale_restricted_ingredient() {
    let site = TestSite::new().build(&[PANCAKES]).unwrap();
    let pancakes = site.recipe("pancakes").unwrap();

    let has_butter = |index: usize| {
        pancakes.scales[index].ingredients.iter().any(|i| i.item == "butter")
    };
    assert!(!has_butter(0));
    assert!(has_butter(1));
    assert!(!has_butter(2));

    let butter = pancakes.scales[1].ingredients.iter().find(|i| i.item == "butter").unwrap();
    assert_eq!(butter.number, 1.0);
    assert_eq!(butter.string, "1 stick butter");
}

#[test]
fn test_grocery_counts() {
    let site = TestSite::new().build(&[PANCAKES]).unwrap();
    let base = &site.recipe("pancakes").unwrap().scales[0];

    let count = |item: &str| base.ingredients.iter().find(|i| i.item == item).unwrap().grocery_count();
    assert!(approx(count("flour"), 0.2));
    assert!(approx(count("milk"), 0.25));
    assert!(approx(count("egg"), 2.0 / 12.0));
    assert_eq!(count("vanilla pod"), 0.0);

    let vanilla = base.ingredients.iter().find(|i| i.item == "vanilla pod").unwrap();
    assert!(vanilla.is_grocery());
    assert!(!vanilla.has_matching_grocery());
}

#[test]
fn test_grocery_counts_scale_with_multiplier() {
    let site = TestSite::new().build(&[PANCAKES]).unwrap();
    let triple = &site.recipe("pancakes").unwrap().scales[2];
    let flour = triple.ingredients.iter().find(|i| i.item == "flour").unwrap();
    assert_eq!(flour.number, 6.0);
    assert!(approx(flour.grocery_count(), 0.6));
}

#[test]
fn test_recipe_quantity_converts_volume() {
    let stock = r"
title: Chicken Stock
yield:
  - number: 1
    unit: quart
ingredients:
  - number: 2
    item: egg
";
    let soup = r"
title: Soup
scales: [0.5]
ingredients:
  - number: 12
    unit: cups
    item: chicken stock
    recipe: chicken-stock
";
    let site = TestSite::new().build(&[soup, stock]).unwrap();
    let soup = site.recipe("soup").unwrap();

    let base = soup.scales[0].ingredients[0].recipe_reference().unwrap();
    assert!(approx(base.recipe_quantity, 3.0));
    assert_eq!(base.recipe_url, "../chicken-stock");

    let half = soup.scales[1].ingredients[0].recipe_reference().unwrap();
    assert!(approx(half.recipe_quantity, 1.5));
}

#[test]
fn test_incompatible_yield_gives_zero_quantity() {
    let dough = r"
title: Dough
yield:
  - number: 500
    unit: g
";
    let pizza = r"
title: Pizza
ingredients:
  - number: 2
    unit: cups
    item: dough
    recipe: dough
";
    let site = TestSite::new().build(&[pizza, dough]).unwrap();
    let reference = site.recipe("pizza").unwrap().scales[0].ingredients[0].recipe_reference().unwrap();
    assert_eq!(reference.recipe_quantity, 0.0);
}

#[test]
fn test_used_in_links() {
    let dough = "title: Pizza Dough\nyield: 2\n";
    let margherita = r"
title: Margherita
ingredients:
  - number: 1
    unit: servings
    item: dough
    recipe: pizza-dough
";
    let calzone = r"
title: Calzone
ingredients:
  - number: 1
    unit: servings
    item: dough
    recipe: pizza-dough
  - number: 1
    unit: servings
    item: more dough
    recipe: pizza-dough
";
    let site = TestSite::new().build(&[dough, margherita, calzone]).unwrap();
    let dough = site.recipe("pizza-dough").unwrap();

    let parents: Vec<&str> = dough.used_in.iter().map(|link| link.slug.as_str()).collect();
    assert_eq!(parents, vec!["margherita", "calzone"]);
    assert!(!site.recipe("calzone").unwrap().is_used_in_any());
}

#[test]
fn test_unknown_child_suggests_slug() {
    let dough = "title: Pizza Dough\n";
    let pizza = r"
title: Pizza
ingredients:
  - number: 1
    item: dough
    recipe: piza-dough
";
    let err = TestSite::new().build(&[pizza, dough]).unwrap_err();
    match err.downcast::<RecipeCostError>().unwrap() {
        RecipeCostError::RecipeNotFound {
            slug,
            referenced_by,
            suggestions,
        } => {
            assert_eq!(slug, "piza-dough");
            assert_eq!(referenced_by, "pizza");
            assert_eq!(suggestions, vec!["pizza-dough".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_duplicate_slug_rejected() {
    let err = TestSite::new().build(&["title: Bread\n", "title: bread\n"]).unwrap_err();
    assert!(matches!(
        err.downcast::<RecipeCostError>().unwrap(),
        RecipeCostError::DuplicateRecipe { .. }
    ));
}

#[test]
fn test_invalid_multiplier_rejected() {
    let err = TestSite::new().build(&["title: Bread\nscales: [0]\n"]).unwrap_err();
    assert!(matches!(
        err.downcast::<RecipeCostError>().unwrap(),
        RecipeCostError::InvalidRecipe { .. }
    ));
}

#[test]
fn test_recipe_ingredients_skip_grocery_lookup() {
    let egg_salad = "title: Egg\nyield: 1\n";
    let sandwich = r"
title: Sandwich
ingredients:
  - number: 1
    unit: serving
    item: egg
    recipe: egg
";
    let site = TestSite::new().build(&[sandwich, egg_salad]).unwrap();
    let ingredient = &site.recipe("sandwich").unwrap().scales[0].ingredients[0];
    assert!(ingredient.is_recipe());
    assert!(matches!(ingredient.source, IngredientSource::Recipe(_)));
    assert_eq!(ingredient.grocery_count(), 0.0);
}
