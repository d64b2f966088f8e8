use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::domain::RateTable;

/// Everything the binary needs at boot: tunable settings plus prompt text.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub config: Config,
    pub prompts: PromptsConfig,
}

impl AppConfig {
    /// Loads `config.yaml` and `prompts.yaml` from `CONFIG_DIR` (default
    /// `config/`), falling back to built-in defaults for anything missing,
    /// then applies environment overrides.
    pub fn load() -> anyhow::Result<Self> {
        let dir = std::env::var("CONFIG_DIR").unwrap_or_else(|_| "config".into());
        let dir = Path::new(&dir);

        let mut config: Config = load_yaml(dir.join("config.yaml"))?;
        let prompts: PromptsConfig = load_yaml(dir.join("prompts.yaml"))?;
        config.apply_env_overrides();

        Ok(Self { config, prompts })
    }
}

fn load_yaml<T: DeserializeOwned + Default>(path: PathBuf) -> anyhow::Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let raw = std::fs::read_to_string(&path)?;
    Ok(serde_yaml::from_str(&raw)?)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub validation: ValidationConfig,
    pub cors: CorsConfig,
}

impl Config {
    fn apply_env_overrides(&mut self) {
        if let Ok(model) = std::env::var("LLM_MODEL") {
            self.llm.model = model;
        }
        if let Ok(password) = std::env::var("APP_PASSWORD") {
            self.auth.password = password;
        }
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.server.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: String,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password: "trocar-senha".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub icms_rates: HashMap<String, String>,
}

impl ValidationConfig {
    pub fn rate_table(&self) -> RateTable {
        RateTable::new(self.icms_rates.clone())
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        let icms_rates = [("5101", "18"), ("5102", "18"), ("6102", "12")]
            .into_iter()
            .map(|(c, r)| (c.to_string(), r.to_string()))
            .collect();
        Self { icms_rates }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptsConfig {
    pub consultant: ConsultantPrompts,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsultantPrompts {
    pub system: String,
}

impl Default for ConsultantPrompts {
    fn default() -> Self {
        Self {
            system: "Você é uma IA da Turing Tecnologia especializada em Direito Tributário \
                     do Distrito Federal. Responda com precisão, clareza e sempre com base \
                     legal. Se faltar a base legal, deixe claro para o usuário."
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let config = Config::default();

        assert_eq!(config.llm.model, "gpt-4o-mini");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.auth.password, "trocar-senha");
        assert_eq!(config.validation.icms_rates.len(), 3);
        assert_eq!(config.cors.allowed_origins, vec!["*".to_string()]);
    }

    #[test]
    fn partial_yaml_falls_back_to_defaults() {
        let config: Config = serde_yaml::from_str("llm:\n  model: gpt-4o\n").unwrap();

        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.auth.password, "trocar-senha");
        assert_eq!(
            config.validation.rate_table().expected_rate("6102"),
            Some("12")
        );
    }

    #[test]
    fn default_prompt_names_the_persona() {
        let prompts = PromptsConfig::default();

        assert!(prompts.consultant.system.contains("Turing Tecnologia"));
        assert!(prompts.consultant.system.contains("base legal"));
    }
}
