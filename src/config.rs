use crate::cli_args::Cli;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Upper bound on the commit/diff payload handed to the model, in characters.
pub const DEFAULT_MAX_DIFF_CHARS: usize = 10_000;

/// Final resolved configuration for prbot.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: Option<String>,
    pub model: String,
    pub api_base_url: String,
    pub max_diff_chars: usize,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--api-key`)
    ///   2. Env vars `PRBOT_MODEL` / `OPENAI_API_KEY`
    ///   3. TOML `~/.config/prbot.toml`
    ///   4. Hardcoded defaults ("gpt-5-nano", api.openai.com, 10,000 chars)
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let model_cli = cli.model.clone();
        let api_key_cli = cli.api_key.clone();
        let model_env = env::var("PRBOT_MODEL").ok();
        let api_key_env = env::var("OPENAI_API_KEY").ok();

        let model = model_cli
            .or(model_env)
            .or(file_cfg.model)
            .unwrap_or_else(|| "gpt-5-nano".to_string());

        let openai_api_key = api_key_cli.or(api_key_env).or(file_cfg.openai_api_key);

        let api_base_url = file_cfg
            .api_base_url
            .unwrap_or_else(|| "https://api.openai.com".to_string());

        let max_diff_chars = file_cfg.max_diff_chars.unwrap_or(DEFAULT_MAX_DIFF_CHARS);

        Config {
            openai_api_key,
            model,
            api_base_url,
            max_diff_chars,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    /// Default model to use when not provided via CLI or env.
    pub model: Option<String>,
    pub openai_api_key: Option<String>,
    pub api_base_url: Option<String>,
    pub max_diff_chars: Option<usize>,
}

/// Return `~/.config/prbot.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("prbot.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}
