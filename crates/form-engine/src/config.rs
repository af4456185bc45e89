use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct EngineConfig {
    pub api: ApiConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    /// Base URL of the back-office REST collaborator
    pub base_url: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:3000/api"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<EngineConfig> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: EngineConfig = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: EngineConfig = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}
