// UI Session
// Binds a gateway client to an error normalizer so every failed call
// terminates at the display sink. Callers get `Option<T>`: the success
// value or nothing, with the message already shown. Exactly one of the
// two paths fires per call.

use std::future::Future;

use crate::application::gateway::GatewayClient;
use crate::application::normalize::ErrorNormalizer;
use crate::error::Result;

pub struct UiSession {
    client: GatewayClient,
    normalizer: ErrorNormalizer,
}

impl UiSession {
    pub fn new(client: GatewayClient, normalizer: ErrorNormalizer) -> Self {
        Self { client, normalizer }
    }

    pub fn client(&self) -> &GatewayClient {
        &self.client
    }

    pub fn normalizer(&self) -> &ErrorNormalizer {
        &self.normalizer
    }

    /// Run any gateway operation, routing errors to the display sink
    pub async fn run<T>(&self, operation: impl Future<Output = Result<T>>) -> Option<T> {
        match operation.await {
            Ok(value) => Some(value),
            Err(err) => {
                self.normalizer.normalize(&err);
                None
            }
        }
    }

    /// Cancel a task, optionally clearing visible messages first.
    ///
    /// The clear happens before the DELETE is issued, matching the
    /// original UI flow where stale messages disappear as soon as the
    /// user confirms the cancellation.
    pub async fn cancel_task(&self, id: &str, clear_messages: bool) -> Option<()> {
        if clear_messages {
            self.normalizer.clear();
        }
        self.run(self.client.cancel_task(id)).await
    }
}
