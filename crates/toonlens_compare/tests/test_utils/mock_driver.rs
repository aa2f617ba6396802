//! Mock measurement backends.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use toonlens_core::{ChatRequest, Role, TokenUsage};
use toonlens_error::{ModelsError, ModelsErrorKind, ModelsResult};
use toonlens_interface::{TokenCounting, UsageDriver};

/// Completion tokens every successful mock call reports.
pub const MOCK_COMPLETION_TOKENS: u64 = 2;

/// Behavior configuration for mock usage responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always report usage derived from the request
    Success,
    /// Always return the specified error
    Error(ModelsErrorKind),
    /// Succeed until the given 1-based call, which fails with the error
    FailOnCall {
        call: usize,
        error: ModelsErrorKind,
    },
    /// Wait, then fail the way a client timeout does
    Timeout(Duration),
}

/// Mock usage driver for testing.
///
/// Successful calls report one prompt token per four bytes of message
/// content plus [`MOCK_COMPLETION_TOKENS`], so larger payloads cost more.
pub struct MockUsageDriver {
    behavior: MockBehavior,
    call_count: Arc<Mutex<usize>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl MockUsageDriver {
    /// Create a mock driver with custom behavior.
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(Mutex::new(0)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock driver that always succeeds.
    pub fn new_success() -> Self {
        Self::new(MockBehavior::Success)
    }

    /// Create a mock driver that always fails with the given error.
    #[allow(dead_code)]
    pub fn new_error(error: ModelsErrorKind) -> Self {
        Self::new(MockBehavior::Error(error))
    }

    /// Get the number of times usage() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// Requests received so far, in order.
    #[allow(dead_code)]
    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Usage a successful call reports for `req`.
    pub fn expected_usage(req: &ChatRequest) -> TokenUsage {
        let bytes: usize = req.messages.iter().map(|m| m.content.len()).sum();
        TokenUsage::new(bytes.div_ceil(4) as u64, MOCK_COMPLETION_TOKENS)
    }
}

#[async_trait]
impl UsageDriver for MockUsageDriver {
    async fn usage(&self, req: &ChatRequest) -> ModelsResult<TokenUsage> {
        let call = {
            let mut count = self.call_count.lock().unwrap();
            *count += 1;
            *count
        };
        self.requests.lock().unwrap().push(req.clone());

        match &self.behavior {
            MockBehavior::Success => Ok(Self::expected_usage(req)),
            MockBehavior::Error(kind) => Err(ModelsError::new(kind.clone())),
            MockBehavior::FailOnCall { call: fail_on, error } => {
                if call == *fail_on {
                    Err(ModelsError::new(error.clone()))
                } else {
                    Ok(Self::expected_usage(req))
                }
            }
            MockBehavior::Timeout(delay) => {
                tokio::time::sleep(*delay).await;
                Err(ModelsError::new(ModelsErrorKind::Http(
                    "Request timed out: operation timed out".to_string(),
                )))
            }
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn endpoint(&self) -> &str {
        "mock://usage"
    }
}

/// Mock local counter: one token per whitespace-separated word.
pub struct MockCounter {
    fail: bool,
    call_count: Arc<Mutex<usize>>,
}

impl MockCounter {
    /// Counter that always succeeds.
    pub fn new() -> Self {
        Self {
            fail: false,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Counter whose tokenizer cannot be loaded.
    #[allow(dead_code)]
    pub fn new_failing() -> Self {
        Self {
            fail: true,
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Get the number of times count_tokens() was called.
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    /// What a successful count of `text` returns.
    #[allow(dead_code)]
    pub fn expected(text: &str) -> u64 {
        text.split_whitespace().count() as u64
    }
}

impl TokenCounting for MockCounter {
    fn count_tokens(&self, _model: &str, text: &str) -> ModelsResult<u64> {
        *self.call_count.lock().unwrap() += 1;
        if self.fail {
            return Err(ModelsError::new(ModelsErrorKind::TokenCountingFailed(
                "mock tokenizer unavailable".to_string(),
            )));
        }
        Ok(Self::expected(text))
    }
}

/// Role of each message, for asserting request shape.
#[allow(dead_code)]
pub fn roles(req: &ChatRequest) -> Vec<Role> {
    req.messages.iter().map(|m| m.role).collect()
}
