//! Generative model bridge for questions about the scraped rows.

mod gemini;

pub use gemini::GeminiProvider;

use crate::client::Client;
use crate::error::Result;
use crate::table::ResultRow;
use crate::utils::log;
use async_trait::async_trait;

/// Prefix written before the serialized rows.
const CONTEXT_HEADER: &str = "Context:\n";
/// Separator between the serialized rows and the user prompt.
const PROMPT_SEPARATOR: &str = "\nUser Prompt:\n";

/// LLM provider trait for abstracting different text generation APIs.
#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Send the full request content and return the generated text.
    async fn complete(&self, content: &str, client: &Client) -> Result<String>;

    /// Provider name for logging/debugging.
    fn provider_name(&self) -> &'static str;
}

/// Rows joined by newlines with the cells of each row joined by tabs.
pub fn build_context(rows: &[ResultRow]) -> String {
    rows.iter()
        .map(|row| row.join("\t"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The request content sent to the model for a prompt.
pub fn build_prompt(prompt: &str, rows: &[ResultRow]) -> String {
    let context = build_context(rows);
    let mut content =
        String::with_capacity(CONTEXT_HEADER.len() + context.len() + PROMPT_SEPARATOR.len() + prompt.len());

    content.push_str(CONTEXT_HEADER);
    content.push_str(&context);
    content.push_str(PROMPT_SEPARATOR);
    content.push_str(prompt);

    content
}

/// Ask the model about the rows. Failures are returned as the reply text
/// so the caller can show them and keep going.
pub async fn ask<P>(provider: &P, client: &Client, prompt: &str, rows: &[ResultRow]) -> String
where
    P: LLMProvider + ?Sized,
{
    let content = build_prompt(prompt, rows);

    log(provider.provider_name(), prompt);

    match provider.complete(&content, client).await {
        Ok(text) => text,
        Err(e) => format!("Error saat memanggil Gemini API: {}", e),
    }
}
