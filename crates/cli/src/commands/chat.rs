use std::io::Read;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::ValueEnum;
use workdeck_core::ChatService;
use workdeck_domain::ChatConfig;
use workdeck_infra::{LlmClient, LlmProvider};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    /// OpenAI-compatible endpoint (Tabby)
    Tabby,
    /// Ollama generate endpoint
    Ollama,
}

impl From<Provider> for LlmProvider {
    fn from(provider: Provider) -> Self {
        match provider {
            Provider::Tabby => LlmProvider::OpenAiCompatible,
            Provider::Ollama => LlmProvider::Ollama,
        }
    }
}

pub async fn run(provider: Provider, prompt: Option<String>, config: &ChatConfig) -> Result<()> {
    let prompt = match prompt.filter(|p| p != "-") {
        Some(prompt) => prompt,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("failed to read prompt from stdin")?;
            buf
        }
    };

    let client = LlmClient::from_config(provider.into(), config)?;
    let service = ChatService::new(Arc::new(client));

    let answer = service.draft(&prompt).await?;
    println!("{answer}");
    Ok(())
}
