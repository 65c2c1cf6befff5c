//! Turns a free-text UI description into generated front-end code by asking a
//! language-model provider.
//!
//! Nothing here retries or caches: every call to [`DesignGenerator::generate`]
//! is one fresh remote request.

pub mod error;
pub mod openai;
pub mod prompt;

use async_trait::async_trait;
use draftsmith_types::api::GenerationOptions;
use draftsmith_types::models::GeneratedDesignResponse;

pub use error::GenerateError;
pub use openai::{OpenAiConfig, OpenAiGenerator};

#[async_trait]
pub trait DesignGenerator: Send + Sync {
    async fn generate(
        &self,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<GeneratedDesignResponse, GenerateError>;
}
