use recipe_cost::RecipeCostError;
use recipe_cost::resolver::{PropagationReport, resolve, resolve_costs, resolve_nutrition};

use crate::common::{TestSite, approx};

const PANCAKES: &str = r"
title: Pancakes
yield: 4
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

const STOCK: &str = r"
title: Stock
yield:
  - number: 1
    unit: batch
ingredients:
  - number: 4
    item: egg
";

const GRAVY: &str = r"
title: Gravy
yield:
  - number: 1
    unit: batch
ingredients:
  - number: 3
    unit: batches
    item: stock
    recipe: stock
";

const ROAST: &str = r"
title: Roast
yield: 6
scales: [2]
ingredients:
  - number: 1
    unit: batch
    item: gravy
    recipe: gravy
  - number: 2
    unit: cloves
    item: garlic
";

#[test]
fn test_grocery_only_site_resolves_in_one_round() {
    let mut site = TestSite::new().build(&[PANCAKES]).unwrap();
    let report = resolve_costs(&mut site).unwrap();

    assert_eq!(report.rounds, 1);
    assert_eq!(report.resolved_scales, 3);

    let pancakes = site.recipe("pancakes").unwrap();
    assert!(approx(pancakes.scales[0].cost.value(), 2.55));
    assert!(approx(pancakes.scales[1].cost.value(), 6.35));
    assert!(approx(pancakes.scales[2].cost.value(), 7.65));
}

#[test]
fn test_scale_cost_is_sum_of_ingredients() {
    let mut site = TestSite::new().build(&[ROAST, PANCAKES, GRAVY, STOCK]).unwrap();
    resolve(&mut site).unwrap();

    for (recipe, scale) in site.scales() {
        if recipe.explicit_cost.is_some() {
            continue;
        }
        let total: f64 = scale.ingredients.iter().map(|i| i.cost.value()).sum();
        assert!(approx(scale.cost.value(), total), "{} {}", recipe.url_slug, scale.label);
        assert!(scale.cost.is_final());
        assert!(scale.nutrition.is_final());
    }
    assert!(site.is_resolved());
}

#[test]
fn test_chain_compounds_child_costs() {
    let mut site = TestSite::new().build(&[ROAST, GRAVY, STOCK]).unwrap();
    let report = resolve_costs(&mut site).unwrap();
    assert_eq!(report.rounds, 3);

    assert!(approx(site.recipe("stock").unwrap().scales[0].cost.value(), 2.0));
    assert!(approx(site.recipe("gravy").unwrap().scales[0].cost.value(), 6.0));

    let roast = site.recipe("roast").unwrap();
    assert!(approx(roast.scales[0].cost.value(), 6.1));
    assert!(approx(roast.scales[1].cost.value(), 12.2));

    let gravy = roast.scales[1].ingredients[0].recipe_reference().unwrap();
    assert_eq!(gravy.recipe_quantity, 2.0);
    assert!(approx(gravy.recipe_cost.unwrap(), 6.0));
}

#[test]
fn test_child_nutrition_propagates() {
    let mut site = TestSite::new().build(&[ROAST, GRAVY, STOCK]).unwrap();
    resolve_nutrition(&mut site).unwrap();

    // 4 eggs at 70 kcal, times 3, plus 2 of 10 garlic cloves at 40 kcal
    let roast = site.recipe("roast").unwrap();
    assert!(approx(roast.scales[0].nutrition.value().calories, 848.0));
    assert!(roast.scales[0].ingredients.iter().all(|i| i.has_nutrition));
}

#[test]
fn test_mutual_reference_is_a_cycle() {
    let a = r"
title: A
yield: 1
ingredients:
  - number: 1
    unit: serving
    item: b
    recipe: b
";
    let b = r"
title: B
yield: 1
ingredients:
  - number: 1
    unit: serving
    item: a
    recipe: a
";
    let mut site = TestSite::new().build(&[a, b, PANCAKES]).unwrap();
    let err = resolve(&mut site).unwrap_err();

    match &err {
        RecipeCostError::CyclicRecipeReference {
            facet,
            recipes,
            cycle,
        } => {
            assert_eq!(facet, "cost");
            assert_eq!(recipes, &vec!["a".to_string(), "b".to_string()]);
            assert_eq!(cycle.as_deref(), Some("a → b → a"));
        }
        other => panic!("expected a cycle, got {other}"),
    }
    assert!(err.to_string().starts_with("Cyclic recipe reference found"));
    assert!(site.dependency_order().is_err());
}

#[test]
fn test_resolving_twice_changes_nothing() {
    let mut site = TestSite::new().build(&[ROAST, GRAVY, STOCK]).unwrap();
    resolve(&mut site).unwrap();
    let before = site.recipes().to_vec();

    let report = resolve(&mut site).unwrap();
    assert_eq!(report, PropagationReport::default());
    assert_eq!(site.recipes(), before.as_slice());
}

#[test]
fn test_explicit_recipe_cost_scales() {
    let cake = r"
title: Cake
cost: 10
scales: [0.5, 2]
ingredients:
  - number: 2
    item: egg
";
    let mut site = TestSite::new().build(&[cake]).unwrap();
    let report = resolve_costs(&mut site).unwrap();
    assert_eq!(report.rounds, 0);

    let cake = site.recipe("cake").unwrap();
    let costs: Vec<f64> = cake.scales.iter().map(|s| s.cost.value()).collect();
    assert_eq!(costs, vec![10.0, 5.0, 20.0]);
    assert!(cake.scales.iter().flat_map(|s| &s.ingredients).all(|i| i.cost.is_final()));
}

#[test]
fn test_explicit_ingredient_values_are_multiplied() {
    let bread = r"
title: Bread
scales: [2]
ingredients:
  - number: 1
    item: sourdough starter
    cost: 1.5
    nutrition:
      calories: 200
";
    let mut site = TestSite::new().build(&[bread]).unwrap();
    resolve(&mut site).unwrap();

    let bread = site.recipe("bread").unwrap();
    assert_eq!(bread.scales[0].cost.value(), 1.5);
    assert_eq!(bread.scales[1].cost.value(), 3.0);
    assert_eq!(bread.scales[1].nutrition.value().calories, 400.0);
    assert!(bread.scales[1].ingredients[0].has_nutrition);
}

#[test]
fn test_dependency_order_children_first() {
    let site = TestSite::new().build(&[ROAST, GRAVY, STOCK]).unwrap();
    let order = site.dependency_order().unwrap();
    let position = |slug: &str| order.iter().position(|s| s == slug).unwrap();

    assert!(position("stock") < position("gravy"));
    assert!(position("gravy") < position("roast"));
}
