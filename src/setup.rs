use anyhow::{anyhow, Result};
use log::debug;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::llm::openai::OpenAiClient;
use crate::llm::{LlmClient, NoopClient};

/// Build the LLM client based on CLI + config.
pub fn build_llm_client(cli: &Cli, cfg: &Config) -> Result<Box<dyn LlmClient>> {
    let use_no_model = cli.no_model || cfg.model.eq_ignore_ascii_case("none");

    if use_no_model {
        debug!("Using NoopClient (no model calls).");
        return Ok(Box::new(NoopClient));
    }

    let key = cfg.openai_api_key.clone().ok_or_else(|| {
        anyhow!("OPENAI_API_KEY (or --api-key) is required unless --no-model or model=none is used")
    })?;

    debug!("Using OpenAiClient with model: {}", cfg.model);

    let client = OpenAiClient::new(key, cfg.model.clone(), cfg.api_base_url.clone())?;
    Ok(Box::new(client))
}
