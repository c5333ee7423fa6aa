//! Resource producers and the content they yield.
//!
//! A producer is the capability stored next to each registered resource.
//! It takes no arguments and returns the resource's content; the registry
//! invokes it lazily on every read.

use std::borrow::Cow;
use std::future::Future;

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use rmcp::model::{ReadResourceResult, ResourceContents};
use serde::{Deserialize, Serialize};

/// MIME type of every document in the catalogue.
pub const MARKDOWN_MIME_TYPE: &str = "text/markdown";

/// One content entry of a resource read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEntry {
    /// The resolved URI of the resource.
    pub uri: String,

    /// MIME type of `text`.
    pub mime_type: String,

    /// The literal document.
    pub text: String,
}

/// The payload returned by a producer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResourceContent {
    pub contents: Vec<ContentEntry>,
}

impl ResourceContent {
    /// Content made of a single text entry.
    pub fn text(
        uri: impl Into<String>,
        mime_type: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            contents: vec![ContentEntry {
                uri: uri.into(),
                mime_type: mime_type.into(),
                text: text.into(),
            }],
        }
    }

    /// Text of the first entry, if any.
    pub fn first_text(&self) -> Option<&str> {
        self.contents.first().map(|entry| entry.text.as_str())
    }
}

impl From<ResourceContent> for ReadResourceResult {
    fn from(content: ResourceContent) -> Self {
        ReadResourceResult {
            contents: content
                .contents
                .into_iter()
                .map(|entry| ResourceContents::TextResourceContents {
                    uri: entry.uri,
                    mime_type: Some(entry.mime_type),
                    text: entry.text,
                    meta: None,
                })
                .collect(),
        }
    }
}

/// Capability that yields a resource's content on demand.
///
/// Implementations must be pure: every call returns the same content and
/// has no observable side effects, so the registry can invoke them from
/// any number of tasks at once.
#[async_trait]
pub trait ResourceProducer: Send + Sync {
    /// Produce the content.
    async fn produce(&self) -> ResourceContent;
}

// ============================================================================
// Static documents
// ============================================================================

/// A producer closing over one literal document.
#[derive(Debug, Clone)]
pub struct StaticDocument {
    uri: String,
    mime_type: String,
    text: Cow<'static, str>,
}

impl StaticDocument {
    /// Create a document with an explicit MIME type.
    pub fn new(
        uri: impl Into<String>,
        mime_type: impl Into<String>,
        text: impl Into<Cow<'static, str>>,
    ) -> Self {
        Self {
            uri: uri.into(),
            mime_type: mime_type.into(),
            text: text.into(),
        }
    }

    /// Create a Markdown document.
    pub fn markdown(uri: impl Into<String>, text: impl Into<Cow<'static, str>>) -> Self {
        Self::new(uri, MARKDOWN_MIME_TYPE, text)
    }

    /// The wrapped document.
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[async_trait]
impl ResourceProducer for StaticDocument {
    async fn produce(&self) -> ResourceContent {
        ResourceContent::text(&self.uri, &self.mime_type, self.text.as_ref())
    }
}

// ============================================================================
// Closure producers
// ============================================================================

type BoxedProduceFn = Box<dyn Fn() -> BoxFuture<'static, ResourceContent> + Send + Sync>;

/// A producer backed by an async closure.
pub struct FnProducer {
    produce: BoxedProduceFn,
}

impl std::fmt::Debug for FnProducer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProducer").finish_non_exhaustive()
    }
}

#[async_trait]
impl ResourceProducer for FnProducer {
    async fn produce(&self) -> ResourceContent {
        (self.produce)().await
    }
}

/// Wrap a zero-argument async closure as a [`ResourceProducer`].
///
/// ```rust
/// use docs_mcp_server::domains::resources::{ResourceContent, producer_fn};
///
/// let producer = producer_fn(|| async {
///     ResourceContent::text("vue/vue", "text/markdown", "# Get started")
/// });
/// # let _ = producer;
/// ```
pub fn producer_fn<F, Fut>(f: F) -> FnProducer
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ResourceContent> + Send + 'static,
{
    FnProducer {
        produce: Box::new(move || f().boxed()),
    }
}
