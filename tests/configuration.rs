//! Tests for configuration loading

use larder::Config;
use temp_dir::TempDir;

fn env(vars: &[(&str, &str)]) -> config::Map<String, String> {
    vars.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_defaults_without_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let missing = dir.child("missing.toml");

    let config = Config::load_with_env(Some(missing.display().to_string()), env(&[]))?;

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 3000);
    assert_eq!(config.generator.provider, "gemini");
    assert_eq!(config.generator.model, "gemini-1.5-flash");
    assert_eq!(config.generator.max_output_tokens, 2000);
    assert!(config.generator.api_key.is_none());
    assert!(config.catalog.seed_path.is_none());
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json);
    assert!(config.validate().is_err());

    Ok(())
}

#[test]
fn test_file_then_env_overrides() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("larder.toml");
    std::fs::write(
        &path,
        r#"
[server]
port = 8080

[generator]
provider = "fake"
temperature = 0.2

[logging]
json = true
"#,
    )?;

    let config = Config::load_with_env(
        Some(path.display().to_string()),
        env(&[("LARDER__SERVER__PORT", "9090"), ("LARDER__LOGGING__LEVEL", "debug")]),
    )?;

    assert_eq!(config.server.port, 9090);
    assert_eq!(config.generator.provider, "fake");
    assert!((config.generator.temperature - 0.2).abs() < f32::EPSILON);
    assert_eq!(config.logging.level, "debug");
    assert!(config.logging.json);
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_config_path_and_legacy_api_key() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let path = dir.child("custom.toml");
    std::fs::write(&path, "[catalog]\nseed_path = \"recipes.json\"\n")?;
    let path = path.display().to_string();

    let config = Config::load_with_env(
        None,
        env(&[("CONFIG_PATH", path.as_str()), ("GEMINI_API_KEY", "from-legacy")]),
    )?;

    assert_eq!(config.catalog.seed_path.as_deref(), Some("recipes.json"));
    assert_eq!(config.generator.api_key.as_deref(), Some("from-legacy"));
    assert!(config.validate().is_ok());

    Ok(())
}

#[test]
fn test_create_state_uses_seed_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let seed = dir.child("seed.json");
    std::fs::write(&seed, serde_json::to_string(&larder_recipe::sample_recipes()?[..2])?)?;

    let config = Config::load_with_env(
        Some(dir.child("none.toml").display().to_string()),
        env(&[
            ("LARDER__GENERATOR__PROVIDER", "fake"),
            ("LARDER__CATALOG__SEED_PATH", &seed.display().to_string()),
        ]),
    )?;

    let state = larder::create_state(&config)?;
    assert_eq!(state.store.snapshot().recipes().len(), 2);
    assert_eq!(state.generator.provider().provider_name(), "fake");

    Ok(())
}
