use crate::GenerateRecipeRequest;

const ROLE: &str = "You are a professional chef and cookbook author. \
Write detailed, practical recipes that home cooks can follow.";

const SHAPE: &str = r#"{
  "title": "Recipe Name",
  "description": "Brief description of the dish",
  "prepTime": 15,
  "cookTime": 25,
  "servings": 4,
  "difficulty": "medium",
  "cuisine": "Italian",
  "ingredients": [
    {"name": "ingredient name", "amount": 2.5, "unit": "cups"}
  ],
  "steps": [
    {"stepNumber": 1, "instruction": "Step instruction", "estimatedTime": 5}
  ],
  "tags": ["tag1", "tag2"]
}"#;

/// Prompt sent to the model for one generation request.
pub fn build_prompt(request: &GenerateRecipeRequest) -> String {
    let mut requirements = vec![
        format!("- Difficulty: {}", request.difficulty),
        format!("- Servings: {}", request.servings),
        format!("- Maximum cooking time: {} minutes", request.max_cook_time),
        format!("- Cuisine preference: {}", request.cuisine),
    ];

    if !request.dietary_restrictions.is_empty() {
        requirements.push(format!(
            "- Dietary restrictions: {}",
            request.dietary_restrictions.join(", ")
        ));
    }

    format!(
        "{ROLE}\n\n\
Respond with ONLY a valid JSON object. No markdown code fences, no text before or after it.\n\n\
Create a recipe using these ingredients: {ingredients}.\n\n\
Requirements:\n{requirements}\n\n\
Include an appetizing title, a one or two sentence description, realistic prep and cook \
times, every ingredient with an amount and unit, numbered steps with an estimated time \
where helpful, and tags for categorization.\n\n\
Use exactly this format:\n{SHAPE}\n\n\
Amounts must be decimal numbers (0.25, 0.5, 1.5), never fractions such as 1/4. \
Do not include comments inside the JSON.",
        ingredients = request.ingredients.join(", "),
        requirements = requirements.join("\n"),
    )
}
