use larder_generator::{GenerateRecipeRequest, RecipeGenerator, llm::create_provider};
use larder_recipe::filter_recipes;
use larder_shared::{Difficulty, RecipeFilters, RecipeSource, SortBy};

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Comma or newline separated ingredients
    pub ingredients: String,

    #[arg(long)]
    pub cuisine: Option<String>,

    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    #[arg(long)]
    pub servings: Option<u32>,

    /// Maximum cooking time in minutes
    #[arg(long)]
    pub max_cook_time: Option<u32>,

    /// Repeatable, e.g. --dietary vegan --dietary gluten-free
    #[arg(long)]
    pub dietary: Vec<String>,
}

#[derive(clap::Args)]
pub struct CatalogArgs {
    #[arg(long, default_value = "")]
    pub search: String,

    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    #[arg(long)]
    pub max_prep_time: Option<u32>,

    #[arg(long)]
    pub source: Option<RecipeSource>,

    #[arg(long)]
    pub sort_by: Option<SortBy>,
}

/// Generates one recipe and prints it as JSON.
pub async fn generate(config: larder::Config, args: GenerateArgs) -> anyhow::Result<()> {
    let generator = RecipeGenerator::new(create_provider(&config.generator)?);

    let mut request = GenerateRecipeRequest::from_input(&args.ingredients)
        .dietary_restrictions(args.dietary);
    if let Some(cuisine) = args.cuisine {
        request = request.cuisine(cuisine);
    }
    if let Some(difficulty) = args.difficulty {
        request = request.difficulty(difficulty);
    }
    if let Some(servings) = args.servings {
        request = request.servings(servings);
    }
    if let Some(minutes) = args.max_cook_time {
        request = request.max_cook_time(minutes);
    }

    let generation = generator.generate(request).await?;
    if generation.fallback {
        tracing::warn!("model output unusable, printed the fallback recipe");
    }

    println!("{}", serde_json::to_string_pretty(&generation)?);

    Ok(())
}

/// Prints the seed catalog run through the filter engine.
pub fn catalog(config: larder::Config, args: CatalogArgs) -> anyhow::Result<()> {
    let recipes = larder::seed_recipes(&config)?;
    let filters = RecipeFilters {
        difficulty: args.difficulty,
        max_prep_time: args.max_prep_time,
        source: args.source,
        sort_by: args.sort_by,
        ..Default::default()
    };

    let filtered = filter_recipes(&recipes, &filters, &args.search);
    tracing::info!(
        total = recipes.len(),
        filtered = filtered.len(),
        "catalog filtered"
    );

    println!("{}", serde_json::to_string_pretty(&filtered)?);

    Ok(())
}
