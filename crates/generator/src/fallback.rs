use crate::{GenerateRecipeRequest, GeneratedIngredient, GeneratedRecipe, GeneratedStep};

/// Deterministic recipe used when the model cannot deliver one.
pub fn fallback_recipe(request: &GenerateRecipeRequest) -> GeneratedRecipe {
    let primary = request
        .ingredients
        .first()
        .map(String::as_str)
        .unwrap_or("ingredients");
    let secondary = request
        .ingredients
        .get(1)
        .map(String::as_str)
        .unwrap_or("seasonings");

    let ingredients = request
        .ingredients
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let (amount, unit) = if index == 0 { (2.0, "cups") } else { (1.0, "cup") };
            GeneratedIngredient {
                name: name.clone(),
                amount,
                unit: unit.to_owned(),
            }
        })
        .collect();

    let steps = [
        (
            format!("Clean and prep your {primary}. Wash and chop all vegetables into bite-sized pieces."),
            8,
        ),
        (
            format!("Heat oil in a large pan over medium heat. Add {primary} and cook until golden."),
            12,
        ),
        (
            format!("Add {secondary} and remaining ingredients. Season with salt, pepper, and your favorite spices."),
            8,
        ),
        (
            "Cook until everything is tender and flavors are well combined. Taste and adjust seasoning.".to_owned(),
            5,
        ),
        ("Serve hot and enjoy your delicious homemade meal!".to_owned(), 2),
    ]
    .into_iter()
    .zip(1..)
    .map(|((instruction, minutes), step_number)| GeneratedStep {
        step_number,
        instruction,
        estimated_time: Some(minutes),
    })
    .collect();

    GeneratedRecipe {
        title: format!("Savory {} Delight", capitalize(primary)),
        description: format!(
            "A delicious and easy recipe featuring {primary} and {secondary}. \
Perfect for a quick and satisfying meal that brings out the best flavors of your ingredients."
        ),
        prep_time: 15,
        cook_time: 25,
        servings: request.servings,
        difficulty: request.difficulty,
        cuisine: "Fusion".to_owned(),
        ingredients,
        steps,
        tags: vec![
            "quick-meal".to_owned(),
            "easy".to_owned(),
            "homestyle".to_owned(),
        ],
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
