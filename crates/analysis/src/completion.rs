use std::sync::Arc;

use async_trait::async_trait;
use veracity_common::error::VeracityResult;

/// A text-completion model: one prompt in, one reply out.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Model identifier, used for logging.
    fn model(&self) -> &str;
    async fn complete(&self, prompt: &str) -> VeracityResult<String>;
}

/// Client handle shared by all request handlers for the process lifetime.
pub type SharedCompletionClient = Arc<dyn CompletionClient>;

#[async_trait]
impl<C: CompletionClient + ?Sized> CompletionClient for Arc<C> {
    fn model(&self) -> &str {
        (**self).model()
    }

    async fn complete(&self, prompt: &str) -> VeracityResult<String> {
        (**self).complete(prompt).await
    }
}
