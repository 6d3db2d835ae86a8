use recipe_ocr_import::{
    parse_recipe_text, recipe_from_text, IngredientLine, INSTRUCTIONS_PLACEHOLDER,
    UNTITLED_RECIPE,
};

const GRANDMAS_SOUP: &str = "Grandma's Soup\nServes: 4\nIngredients:\n2 cups carrots\n1 onion\nInstructions:\n1. Chop vegetables.\n2. Simmer for 30 minutes.";

#[tokio::test]
async fn test_grandmas_soup_end_to_end() {
    let recipe = recipe_from_text(GRANDMAS_SOUP).await;

    assert_eq!(recipe.title, "Grandma's Soup");
    assert_eq!(recipe.servings, "4");
    assert_eq!(
        recipe.ingredients,
        vec![
            IngredientLine::new("2", "cup", "carrots"),
            IngredientLine::new("1", "", "onion"),
        ]
    );
    assert_eq!(
        recipe.instructions,
        "1. Chop vegetables.\n\n2. Simmer for 30 minutes."
    );
    assert_eq!(recipe.prep_time, "");
    assert_eq!(recipe.total_time, "");
    assert_eq!(recipe.diet_type, "");
    assert_eq!(recipe.meal_type, "");
}

#[tokio::test]
async fn test_total_time_is_derived() {
    let text = "Beef Stew\nPrep Time: 15 minutes\nCook Time: 1 hour 10 minutes\nIngredients:\n1 lb beef";
    let recipe = recipe_from_text(text).await;

    assert_eq!(recipe.prep_time, "15 min");
    assert_eq!(recipe.cook_time, "70 min");
    assert_eq!(recipe.total_time, "85 min");
}

#[tokio::test]
async fn test_explicit_total_wins_over_derivation() {
    let text = "Bread\nPrep time: 20 min\nCook time: 40 min\nTotal time: 3 hours";
    let recipe = recipe_from_text(text).await;

    assert_eq!(recipe.total_time, "180 min");
}

#[tokio::test]
async fn test_title_from_first_line() {
    let text = "Chicken Tikka Masala\n2 chicken breasts\n1 cup yogurt\nCook the chicken in the sauce until done.";
    let recipe = recipe_from_text(text).await;

    assert_eq!(recipe.title, "Chicken Tikka Masala");
}

#[tokio::test]
async fn test_fraction_glyph_ingredient() {
    let recipe = recipe_from_text("Salsa\nIngredients\n½ cup chopped onion").await;

    assert_eq!(recipe.ingredients.len(), 1);
    let onion = &recipe.ingredients[0];
    let segmented = onion == &IngredientLine::new("1/2", "cup", "chopped onion");
    let whole_line = onion.amount.is_empty()
        && onion.unit.is_empty()
        && onion.ingredient_name == "1/2 cup chopped onion";
    assert!(segmented || whole_line, "got {:?}", onion);
}

#[tokio::test]
async fn test_numbered_steps_without_heading() {
    let text = "Pizza\n1 ball of dough\n\n1. Preheat oven to 450°F\n2. Bake for 20 minutes";
    let recipe = recipe_from_text(text).await;

    assert_eq!(
        recipe.instructions,
        "1. Preheat oven to 450°F\n\n2. Bake for 20 minutes"
    );
    // numbered steps are not mistaken for ingredients
    assert_eq!(recipe.ingredients.len(), 1);
    assert_eq!(recipe.ingredients[0].ingredient_name, "ball of dough");
}

#[tokio::test]
async fn test_servings_range() {
    let recipe = recipe_from_text("Chili\nServes: 4–6 people").await;
    assert_eq!(recipe.servings, "4-6");

    let recipe = recipe_from_text("Chili\nServes: 4-6 people").await;
    assert_eq!(recipe.servings, "4-6");
}

#[tokio::test]
async fn test_recipe_card_header_block() {
    let text = "Lemon Bars\nPrep Time   Cook Time   Servings\n20 mins   45 mins   12\n\nIngredients\n1 cup butter\n2 cups flour\n\nDirections\n1. Make the crust.\n2. Bake the filling.";
    let recipe = recipe_from_text(text).await;

    assert_eq!(recipe.title, "Lemon Bars");
    assert_eq!(recipe.prep_time, "20 min");
    assert_eq!(recipe.cook_time, "45 min");
    assert_eq!(recipe.total_time, "65 min");
    assert_eq!(recipe.servings, "12");
    assert_eq!(recipe.ingredients.len(), 2);
    assert_eq!(recipe.ingredients[1], IngredientLine::new("2", "cup", "flour"));
    assert_eq!(
        recipe.instructions,
        "1. Make the crust.\n\n2. Bake the filling."
    );
}

#[tokio::test]
async fn test_messy_ocr_whitespace() {
    let text = "  Banana   Bread \r\n\r\n\r\n Ingredients:\r\n3\tripe bananas\r\n1½ cups flour\r\n Method\r\n Mash the bananas.\r\n";
    let recipe = recipe_from_text(text).await;

    assert_eq!(recipe.title, "Banana Bread");
    assert_eq!(
        recipe.ingredients,
        vec![
            IngredientLine::new("3", "", "ripe bananas"),
            IngredientLine::new("1 1/2", "cup", "flour"),
        ]
    );
    assert_eq!(recipe.instructions, "1. Mash the bananas.");
}

#[tokio::test]
async fn test_empty_input_is_well_formed() {
    for text in ["", "   ", "\n\n\n", "\r\n\t"] {
        let recipe = recipe_from_text(text).await;

        assert_eq!(recipe.title, UNTITLED_RECIPE);
        assert_eq!(recipe.prep_time, "");
        assert_eq!(recipe.cook_time, "");
        assert_eq!(recipe.total_time, "");
        assert_eq!(recipe.servings, "");
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.instructions, INSTRUCTIONS_PLACEHOLDER);
        assert_eq!(recipe.diet_type, "");
        assert_eq!(recipe.meal_type, "");
    }
}

#[tokio::test]
async fn test_serialized_record_has_every_field() {
    let recipe = recipe_from_text("").await;
    let json = serde_json::to_value(&recipe).unwrap();

    for field in [
        "title",
        "prepTime",
        "cookTime",
        "totalTime",
        "servings",
        "instructions",
        "dietType",
        "mealType",
    ] {
        assert!(json[field].is_string(), "{} should be a string", field);
    }
    assert!(json["ingredients"].is_array());
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let first = recipe_from_text(GRANDMAS_SOUP).await;
    for _ in 0..5 {
        assert_eq!(recipe_from_text(GRANDMAS_SOUP).await, first);
    }
}

#[tokio::test]
async fn test_async_and_sync_agree() {
    let texts = [
        GRANDMAS_SOUP,
        "",
        "Prep Time: 15 minutes\nCook Time: 1 hour 10 minutes",
        "Pancakes\n**Fluffy Pancakes**\nMakes 8 pancakes\n- 1 cup flour\n- 1 egg\nWhisk everything together in a large bowl.",
    ];

    for text in texts {
        assert_eq!(recipe_from_text(text).await, parse_recipe_text(text));
    }
}

#[tokio::test]
async fn test_huge_durations_leave_times_empty_instead_of_failing() {
    let text = "Soup\nPrep Time: 4000000000 minutes\nCook Time: 4000000000 minutes";

    let recipe = recipe_from_text(text).await;
    assert_eq!(recipe.prep_time, "4000000000 min");
    assert_eq!(recipe.cook_time, "4000000000 min");
    assert_eq!(recipe.total_time, "");
    assert_eq!(parse_recipe_text(text), recipe);

    let recipe = parse_recipe_text("Soup\nPrep Time: 99999999999 hours 5 minutes");
    assert_eq!(recipe.title, "Soup");
    assert_eq!(recipe.prep_time, "");
}

#[tokio::test]
async fn test_celsius_temperature_is_not_a_unit() {
    let text = "Cake\nDirections\n1. Preheat oven to 180 C.\n2. Bake for 20 minutes";
    let recipe = recipe_from_text(text).await;

    assert_eq!(
        recipe.instructions,
        "1. Preheat oven to 180 C.\n\n2. Bake for 20 minutes"
    );
}

#[tokio::test]
async fn test_content_sharing_the_heading_line() {
    let text = "Scrambled Eggs\nIngredients: 2 eggs\n1 knob of butter\nDirections: Whisk the eggs.\nCook gently in the butter.";
    let recipe = recipe_from_text(text).await;

    assert_eq!(
        recipe.ingredients,
        vec![
            IngredientLine::new("2", "", "eggs"),
            IngredientLine::new("1", "", "knob of butter"),
        ]
    );
    assert_eq!(
        recipe.instructions,
        "1. Whisk the eggs.\n\n2. Cook gently in the butter."
    );
}
