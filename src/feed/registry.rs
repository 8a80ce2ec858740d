//! Type-tag dispatch from event types to message renderers.
//!
//! The registry is filled once at startup (built-ins plus anything the embedder
//! registers) and then shared read-only. Unknown tags resolve to `None`; callers
//! render nothing for them so newer event types never break an older UI.

use std::collections::HashMap;

use super::messages;
use super::record::{EventRecord, Identity, Team};

/// A piece of a rendered summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Text(String),
    /// An emphasised entity: a user, domain or alias.
    Bold(String),
    /// A literal shown on its own line, such as a deployment URL.
    Code(String),
}

/// Human-readable description of one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub spans: Vec<Span>,
}

impl Summary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span::Text(text.into()));
        self
    }

    pub fn bold(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span::Bold(text.into()));
        self
    }

    pub fn code(mut self, text: impl Into<String>) -> Self {
        self.spans.push(Span::Code(text.into()));
        self
    }

    /// Flattened text, used for logs and tests.
    pub fn plain_text(&self) -> String {
        self.spans
            .iter()
            .map(|span| match span {
                Span::Text(s) | Span::Bold(s) | Span::Code(s) => s.as_str(),
            })
            .collect()
    }
}

/// Produces the summary for one event type.
pub trait Renderer: Send + Sync {
    fn render(&self, event: &EventRecord, user: &Identity, team: Option<&Team>) -> Summary;
}

impl<F> Renderer for F
where
    F: Fn(&EventRecord, &Identity, Option<&Team>) -> Summary + Send + Sync,
{
    fn render(&self, event: &EventRecord, user: &Identity, team: Option<&Team>) -> Summary {
        self(event, user, team)
    }
}

#[derive(Default)]
pub struct MessageRegistry {
    renderers: HashMap<String, Box<dyn Renderer>>,
}

impl MessageRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in event type.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        messages::register_defaults(&mut registry);
        registry
    }

    /// Add or replace the renderer for `tag`.
    pub fn register(&mut self, tag: impl Into<String>, renderer: impl Renderer + 'static) -> &mut Self {
        self.renderers.insert(tag.into(), Box::new(renderer));
        self
    }

    /// Exact-match lookup.
    pub fn resolve(&self, tag: &str) -> Option<&dyn Renderer> {
        self.renderers.get(tag).map(|r| r.as_ref())
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.renderers.contains_key(tag)
    }

    pub fn len(&self) -> usize {
        self.renderers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.renderers.is_empty()
    }
}

impl std::fmt::Debug for MessageRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        tags.sort_unstable();
        f.debug_struct("MessageRegistry").field("tags", &tags).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(tag: &str) -> EventRecord {
        serde_json::from_value(json!({"type": tag, "payload": {"name": "x"}})).unwrap()
    }

    #[test]
    fn test_unknown_type_resolves_to_none() {
        let registry = MessageRegistry::with_defaults();
        assert!(registry.resolve("unknown-type-xyz").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_lookup_is_exact() {
        let registry = MessageRegistry::with_defaults();
        assert!(registry.resolve("deployment").is_some());
        assert!(registry.resolve("Deployment").is_none());
        assert!(registry.resolve("deployment ").is_none());
    }

    #[test]
    fn test_register_closure_renderer() {
        let mut registry = MessageRegistry::new();
        assert!(registry.is_empty());
        registry.register("custom", |e: &EventRecord, _: &Identity, _: Option<&Team>| {
            Summary::new().text("custom ").bold(e.payload_str("name").unwrap_or_default())
        });

        let renderer = registry.resolve("custom").unwrap();
        let summary = renderer.render(&event("custom"), &Identity::default(), None);
        assert_eq!(summary.plain_text(), "custom x");
        assert_eq!(
            summary.spans,
            vec![Span::Text("custom ".into()), Span::Bold("x".into())]
        );
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = MessageRegistry::with_defaults();
        let before = registry.len();
        registry.register("login", |_: &EventRecord, _: &Identity, _: Option<&Team>| {
            Summary::new().text("signed in")
        });
        assert_eq!(registry.len(), before);
        let summary = registry
            .resolve("login")
            .unwrap()
            .render(&event("login"), &Identity::default(), None);
        assert_eq!(summary.plain_text(), "signed in");
    }
}
