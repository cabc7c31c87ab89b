// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use ::tracing::{Event, Level, Subscriber, field, span};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;

/// Represents a captured tracing span with its attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedSpan {
    /// The name of the span.
    pub name: String,
    /// A map of attribute keys to their string representations.
    pub attributes: HashMap<String, String>,
}

/// Represents a captured tracing event.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedEvent {
    pub level: Level,
    /// The formatted message, if any.
    pub message: Option<String>,
    /// The remaining fields of the event.
    pub attributes: HashMap<String, String>,
    /// The name of the innermost span containing the event.
    pub span: Option<String>,
}

/// A `tracing::field::Visit` implementation to extract key-value pairs.
///
/// Converts the field types (str, debug, i64, u64, bool) into their string
/// representations.
struct TestVisitor<'a>(&'a mut HashMap<String, String>);

impl field::Visit for TestVisitor<'_> {
    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        self.0.insert(field.name().to_string(), format!("{value:?}"));
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.0.insert(field.name().to_string(), value.to_string());
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.0.insert(field.name().to_string(), value.to_string());
    }
}

#[derive(Debug, Default)]
struct CapturedLog {
    spans: Vec<CapturedSpan>,
    events: Vec<CapturedEvent>,
}

/// A tracing layer for capturing and inspecting spans and events in tests.
///
/// The layer is installed as the default subscriber of the current thread,
/// so tests running in parallel do not see each other's data.
///
/// # Example
///
/// ```rust
/// use tencentcloud_test_utils::test_layer::TestLayer;
///
/// let (layer, _guard) = TestLayer::initialize();
/// tracing::info_span!("my_operation", foo = "bar").in_scope(|| {
///     tracing::info!("Doing something important");
/// });
///
/// let spans = layer.spans();
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].name, "my_operation");
/// assert_eq!(spans[0].attributes.get("foo").map(String::as_str), Some("bar"));
/// let events = layer.events();
/// assert_eq!(events[0].span.as_deref(), Some("my_operation"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TestLayer {
    log: Arc<Mutex<CapturedLog>>,
}

impl TestLayer {
    /// Installs a new layer as the default subscriber for the current thread.
    ///
    /// The layer captures data while the returned guard is in scope.
    pub fn initialize() -> (Self, ::tracing::subscriber::DefaultGuard) {
        let layer = TestLayer::default();
        let subscriber = tracing_subscriber::registry().with(layer.clone());
        let guard = ::tracing::subscriber::set_default(subscriber);
        (layer, guard)
    }

    /// The spans captured so far, in creation order.
    pub fn spans(&self) -> Vec<CapturedSpan> {
        self.lock().spans.clone()
    }

    /// The events captured so far, in emission order.
    pub fn events(&self) -> Vec<CapturedEvent> {
        self.lock().events.clone()
    }

    fn lock(&self) -> MutexGuard<'_, CapturedLog> {
        // A panicking test poisons the mutex, the data is still usable.
        self.log.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<S> Layer<S> for TestLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(&self, attrs: &span::Attributes<'_>, _id: &span::Id, _ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        attrs.record(&mut TestVisitor(&mut attributes));
        self.lock().spans.push(CapturedSpan {
            name: attrs.metadata().name().to_string(),
            attributes,
        });
    }

    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let mut attributes = HashMap::new();
        event.record(&mut TestVisitor(&mut attributes));
        let message = attributes.remove("message");
        let span = ctx.event_span(event).map(|s| s.name().to_string());
        self.lock().events.push(CapturedEvent {
            level: *event.metadata().level(),
            message,
            attributes,
            span,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn captures_spans() {
        let (layer, _guard) = TestLayer::initialize();
        let span = ::tracing::info_span!("outer", action = "CreateVpc", count = 3_u64, ok = true);
        let _enter = span.enter();
        let spans = layer.spans();
        assert_eq!(spans.len(), 1, "{spans:?}");
        assert_eq!(spans[0].name, "outer");
        let want = HashMap::from([
            ("action".to_string(), "CreateVpc".to_string()),
            ("count".to_string(), "3".to_string()),
            ("ok".to_string(), "true".to_string()),
        ]);
        assert_eq!(spans[0].attributes, want);
    }

    #[test]
    fn captures_events() {
        let (layer, _guard) = TestLayer::initialize();
        ::tracing::warn!(code = "InternalError", "the call failed: {}", "oops");
        ::tracing::info_span!("inner").in_scope(|| ::tracing::debug!(size = -1_i64, "inside"));
        let events = layer.events();
        assert_eq!(events.len(), 2, "{events:?}");
        assert_eq!(events[0].level, Level::WARN);
        assert_eq!(events[0].message.as_deref(), Some("the call failed: oops"));
        assert_eq!(
            events[0].attributes.get("code").map(String::as_str),
            Some("InternalError")
        );
        assert_eq!(events[0].span, None);
        assert_eq!(events[1].level, Level::DEBUG);
        assert_eq!(events[1].span.as_deref(), Some("inner"));
        assert_eq!(events[1].attributes.get("size").map(String::as_str), Some("-1"));
    }

    #[test]
    fn isolated() {
        let (first, guard) = TestLayer::initialize();
        ::tracing::info!("first");
        drop(guard);
        let (second, _guard) = TestLayer::initialize();
        ::tracing::info!("second");
        assert_eq!(first.events().len(), 1);
        assert_eq!(second.events().len(), 1);
        assert_eq!(second.events()[0].message.as_deref(), Some("second"));
    }
}
