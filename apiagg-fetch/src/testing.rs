//! Test doubles for code built on this crate.
//!
//! Available with the `test-util` feature.
//!
//! - [`StubTransport`] - Answers every request with one canned response or
//!   failure and records what was sent
//! - [`LogCapture`] - `tracing` layer that records events for assertions

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serde::Serialize;
use tracing::field::{Field, Visit};
use tracing::dispatcher::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::{FetchError, TransportError};
use crate::host::http::{HttpRequest, HttpResponse, HttpTransport};

// ============================================================================
// Stub Transport
// ============================================================================

type FailureFn = Box<dyn Fn() -> FetchError + Send + Sync>;

enum Reply {
    Response(HttpResponse),
    Failure(FailureFn),
}

/// [`HttpTransport`] returning a fixed reply.
pub struct StubTransport {
    reply: Reply,
    requests: Mutex<Vec<HttpRequest>>,
}

impl StubTransport {
    /// Replies with `response` to every request.
    pub fn with_response(response: HttpResponse) -> Self {
        Self {
            reply: Reply::Response(response),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Replies with a status and raw body.
    pub fn respond(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::with_response(HttpResponse::new(status, body))
    }

    /// Replies with a status and `value` serialized as JSON.
    ///
    /// # Panics
    ///
    /// Panics if `value` cannot be serialized.
    pub fn respond_json<T: Serialize + ?Sized>(status: u16, value: &T) -> Self {
        let body = serde_json::to_vec(value).expect("stub body must serialize");
        Self::respond(status, body)
    }

    /// Fails every request with the error produced by `failure`.
    pub fn fail_with(failure: impl Fn() -> FetchError + Send + Sync + 'static) -> Self {
        Self {
            reply: Reply::Failure(Box::new(failure)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Fails every request as if the connection was refused.
    pub fn connection_refused() -> Self {
        Self::fail_with(|| TransportError::Connect("Network error".to_string()).into())
    }

    /// Fails every request with a non-transport error.
    pub fn unexpected(message: &str) -> Self {
        let message = message.to_string();
        Self::fail_with(move || FetchError::Unexpected(message.clone()))
    }

    /// Requests received so far.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The most recent request.
    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests().pop()
    }
}

impl fmt::Debug for StubTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reply = match &self.reply {
            Reply::Response(r) => format!("Response({})", r.status),
            Reply::Failure(_) => "Failure".to_string(),
        };
        f.debug_struct("StubTransport").field("reply", &reply).finish()
    }
}

#[async_trait]
impl HttpTransport for StubTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match &self.reply {
            Reply::Response(response) => Ok(response.clone()),
            Reply::Failure(failure) => Err(failure()),
        }
    }
}

// ============================================================================
// Log Capture
// ============================================================================

/// One recorded `tracing` event.
#[derive(Debug, Clone)]
pub struct CapturedEvent {
    /// Event level.
    pub level: Level,
    /// Event target (module path).
    pub target: String,
    /// Formatted message.
    pub message: String,
    /// Other fields, in recording order.
    pub fields: Vec<(String, String)>,
}

impl CapturedEvent {
    /// Returns the value of a field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

struct EventVisitor<'a>(&'a mut CapturedEvent);

impl Visit for EventVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.0.message = value.to_string();
        } else {
            self.0.fields.push((field.name().to_string(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        let text = format!("{value:?}");
        if field.name() == "message" {
            self.0.message = text;
        } else {
            self.0.fields.push((field.name().to_string(), text));
        }
    }
}

/// `tracing` layer recording every event it sees.
#[derive(Debug, Clone, Default)]
pub struct LogCapture {
    events: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl LogCapture {
    /// Creates an empty capture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the capture as the thread-local default subscriber.
    ///
    /// Events are recorded until the returned guard is dropped.
    pub fn install(&self) -> DefaultGuard {
        tracing_subscriber::registry().with(self.clone()).set_default()
    }

    /// All recorded events.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Recorded error-level events.
    pub fn errors(&self) -> Vec<CapturedEvent> {
        self.events()
            .into_iter()
            .filter(|e| e.level == Level::ERROR)
            .collect()
    }

    /// Number of error-level events whose message contains `needle`.
    pub fn errors_containing(&self, needle: &str) -> usize {
        self.errors()
            .iter()
            .filter(|e| e.message.contains(needle))
            .count()
    }
}

impl<S: Subscriber> Layer<S> for LogCapture {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let mut captured = CapturedEvent {
            level: *metadata.level(),
            target: metadata.target().to_string(),
            message: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut EventVisitor(&mut captured));

        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(captured);
    }
}
