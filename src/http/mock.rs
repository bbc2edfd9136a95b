use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use super::{Transport, TransportError};
use crate::json::Value;
use crate::model::application::InteractionResponseType;
use crate::model::id::InteractionId;

/// A response the mock transport accepted.
#[derive(Clone, Debug)]
pub(crate) struct SentResponse {
    pub interaction_id: InteractionId,
    pub kind: InteractionResponseType,
    pub payload: Option<Bytes>,
}

impl SentResponse {
    pub fn payload_json(&self) -> Option<Value> {
        self.payload.as_ref().map(|bytes| serde_json::from_slice(bytes).unwrap())
    }
}

/// Records every delivery, optionally failing queued attempts or stalling each one.
#[derive(Default)]
pub(crate) struct MockTransport {
    sent: Mutex<Vec<SentResponse>>,
    failures: Mutex<VecDeque<TransportError>>,
    attempts: Mutex<usize>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::default()
        }
    }

    pub fn fail_next(&self, error: TransportError) {
        self.failures.lock().unwrap().push_back(error);
    }

    pub fn sent(&self) -> Vec<SentResponse> {
        self.sent.lock().unwrap().clone()
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

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let failure = self.failures.lock().unwrap().pop_front();
        if let Some(error) = failure {
            return Err(error);
        }

        self.sent.lock().unwrap().push(SentResponse {
            interaction_id,
            kind,
            payload,
        });
        Ok(())
    }
}
