//! Digit source that replays canned responses with optional delays.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::json;

use crate::usecases::ports::DigitSource;
use crate::usecases::ports::TransportError;

type Scripted = (Duration, Result<String, TransportError>);

pub struct ScriptedSource {
    script: Mutex<VecDeque<Scripted>>,
    calls: Mutex<usize>,
}

impl Default for ScriptedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
            calls: Mutex::new(0),
        }
    }

    pub fn then_body(self, body: impl Into<String>) -> Self {
        self.then_after(Duration::ZERO, Ok(body.into()))
    }

    pub fn then_error(self, error: TransportError) -> Self {
        self.then_after(Duration::ZERO, Err(error))
    }

    pub fn then_after(self, delay: Duration, result: Result<String, TransportError>) -> Self {
        self.script.lock().unwrap().push_back((delay, result));
        self
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }

    /// Body whose every pixel holds `sample`.
    pub fn uniform_body(sample: i64, target: &str) -> String {
        json!({ "pixels": vec![sample; 64], "target": target }).to_string()
    }

    /// Body with `pixels[i] = i`.
    pub fn counting_body(target: &str) -> String {
        let pixels: Vec<i64> = (0..64).collect();
        json!({ "pixels": pixels, "target": target }).to_string()
    }
}

#[async_trait]
impl DigitSource for ScriptedSource {
    fn endpoint(&self) -> &str {
        "scripted://digit"
    }

    async fn fetch(&self) -> Result<String, TransportError> {
        *self.calls.lock().unwrap() += 1;
        let next = self.script.lock().unwrap().pop_front();
        let (delay, result) = next.unwrap_or_else(|| {
            (
                Duration::ZERO,
                Err(TransportError::Task("script exhausted".to_string())),
            )
        });
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        result
    }
}
