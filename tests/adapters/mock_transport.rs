use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use component_response::async_trait;
use component_response::bytes::Bytes;
use component_response::http::{Transport, TransportError};
use component_response::model::application::InteractionResponseType;
use component_response::model::id::InteractionId;
use serde_json::Value;

/// A response the mock accepted.
#[derive(Debug, Clone)]
pub struct RecordedResponse {
    pub interaction_id: InteractionId,
    pub kind: InteractionResponseType,
    pub payload: Option<Bytes>,
}

impl RecordedResponse {
    pub fn payload_json(&self) -> Option<Value> {
        self.payload.as_ref().map(|bytes| serde_json::from_slice(bytes).unwrap())
    }
}

/// Mock implementation of Transport for testing
pub struct MockTransport {
    pub responses: Arc<Mutex<Vec<RecordedResponse>>>,
    failures: Mutex<VecDeque<TransportError>>,
    attempts: Mutex<usize>,
    delay: Duration,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            failures: Mutex::new(VecDeque::new()),
            attempts: Mutex::new(0),
            delay: Duration::ZERO,
        }
    }

    /// Stall every send, widening the window for racing callers.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            ..Self::new()
        }
    }

    /// Queue a failure for the next send attempt.
    pub fn fail_next(&self, error: TransportError) {
        self.failures.lock().unwrap().push_back(error);
    }

    pub fn get_responses(&self) -> Vec<RecordedResponse> {
        self.responses.lock().unwrap().clone()
    }

    pub fn attempts(&self) -> usize {
        *self.attempts.lock().unwrap()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send_interaction_response(
        &self,
        interaction_id: InteractionId,
        kind: InteractionResponseType,
        payload: Option<Bytes>,
    ) -> Result<(), TransportError> {
        *self.attempts.lock().unwrap() += 1;

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let failure = self.failures.lock().unwrap().pop_front();
        if let Some(error) = failure {
            return Err(error);
        }

        self.responses.lock().unwrap().push(RecordedResponse {
            interaction_id,
            kind,
            payload,
        });
        Ok(())
    }
}
