//! Resource Registry - the table of every registered resource.
//!
//! The registry maps a [`ResourceKey`] to its metadata and the producer
//! that yields its content. It is populated once during startup and then
//! shared read-only (usually as `Arc<ResourceRegistry>`), so concurrent
//! reads need no locking.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::model::{AnnotateAble, RawResource, Resource};
use tracing::debug;

use super::error::ResourceError;
use super::key::ResourceKey;
use super::producer::{MARKDOWN_MIME_TYPE, ResourceContent, ResourceProducer, StaticDocument};

/// Metadata supplied alongside a key at registration time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDescriptor {
    /// A longer human-readable summary.
    pub description: String,

    /// MIME type of the produced content.
    pub content_type: String,
}

impl ResourceDescriptor {
    /// Create a descriptor.
    pub fn new(description: impl Into<String>, content_type: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            content_type: content_type.into(),
        }
    }

    /// Create a descriptor for Markdown content.
    pub fn markdown(description: impl Into<String>) -> Self {
        Self::new(description, MARKDOWN_MIME_TYPE)
    }
}

/// A resource held by the registry.
#[derive(Clone)]
pub struct RegisteredResource {
    title: String,
    descriptor: ResourceDescriptor,
    producer: Arc<dyn ResourceProducer>,
}

impl RegisteredResource {
    /// The display title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The registration metadata.
    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    /// Build the MCP listing entry for this resource.
    pub fn to_mcp_resource(&self, key: &ResourceKey) -> Resource {
        let mut raw = RawResource::new(key.uri(), self.title.clone());
        raw.title = Some(self.title.clone());
        raw.description = Some(self.descriptor.description.clone());
        raw.mime_type = Some(self.descriptor.content_type.clone());
        raw.no_annotation()
    }
}

impl std::fmt::Debug for RegisteredResource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisteredResource")
            .field("title", &self.title)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}

/// Table of registered resources, ordered by key.
#[derive(Debug, Default, Clone)]
pub struct ResourceRegistry {
    entries: BTreeMap<ResourceKey, RegisteredResource>,
}

impl ResourceRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource.
    ///
    /// Fails with [`ResourceError::DuplicateKey`] if `key` is already taken;
    /// the existing entry is kept untouched.
    pub fn register<P>(
        &mut self,
        title: impl Into<String>,
        key: ResourceKey,
        descriptor: ResourceDescriptor,
        producer: P,
    ) -> Result<(), ResourceError>
    where
        P: ResourceProducer + 'static,
    {
        self.register_shared(title, key, descriptor, Arc::new(producer))
    }

    /// Register a resource whose producer is already shared.
    pub fn register_shared(
        &mut self,
        title: impl Into<String>,
        key: ResourceKey,
        descriptor: ResourceDescriptor,
        producer: Arc<dyn ResourceProducer>,
    ) -> Result<(), ResourceError> {
        let title = title.into();
        if title.is_empty() {
            return Err(ResourceError::invalid_descriptor(format!(
                "empty title for {}",
                key
            )));
        }
        if descriptor.description.is_empty() {
            return Err(ResourceError::invalid_descriptor(format!(
                "empty description for {}",
                key
            )));
        }
        if descriptor.content_type.is_empty() {
            return Err(ResourceError::invalid_descriptor(format!(
                "empty content type for {}",
                key
            )));
        }
        if self.entries.contains_key(&key) {
            return Err(ResourceError::duplicate_key(key.uri()));
        }

        debug!("Registering resource: {} ({})", key, title);
        self.entries.insert(
            key,
            RegisteredResource {
                title,
                descriptor,
                producer,
            },
        );
        Ok(())
    }

    /// Register a static Markdown document under `key`.
    pub fn register_markdown(
        &mut self,
        title: impl Into<String>,
        key: ResourceKey,
        description: impl Into<String>,
        text: impl Into<Cow<'static, str>>,
    ) -> Result<(), ResourceError> {
        let producer = StaticDocument::markdown(key.uri(), text);
        self.register(title, key, ResourceDescriptor::markdown(description), producer)
    }

    /// Produce the content registered under `key`.
    pub async fn resolve(&self, key: &ResourceKey) -> Result<ResourceContent, ResourceError> {
        let entry = self
            .entries
            .get(key)
            .ok_or_else(|| ResourceError::not_found(key.uri()))?;
        Ok(entry.producer.produce().await)
    }

    /// Look up a registered resource.
    pub fn get(&self, key: &ResourceKey) -> Option<&RegisteredResource> {
        self.entries.get(key)
    }

    /// Whether `key` is registered.
    pub fn contains(&self, key: &ResourceKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of registered resources.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey> {
        self.entries.keys()
    }

    /// Registered resources in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&ResourceKey, &RegisteredResource)> {
        self.entries.iter()
    }

    /// Distinct categories, sorted.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = self.entries.keys().map(ResourceKey::category).collect();
        categories.dedup();
        categories
    }

    /// Freeze the registry for shared read-only use.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::producer::producer_fn;

    fn key(category: &str, slug: &str) -> ResourceKey {
        ResourceKey::new(category, slug).unwrap()
    }

    #[tokio::test]
    async fn test_register_and_resolve_get_started() {
        let mut registry = ResourceRegistry::new();
        registry
            .register(
                "Vue: Get started",
                key("vue", "vue"),
                ResourceDescriptor::markdown("Getting started with Vue"),
                producer_fn(|| async {
                    ResourceContent::text(
                        "vue/vue",
                        MARKDOWN_MIME_TYPE,
                        "# Get started\n\nInstall Vue.",
                    )
                }),
            )
            .unwrap();

        let content = registry.resolve(&key("vue", "vue")).await.unwrap();
        assert_eq!(content.contents.len(), 1);
        assert!(content.contents[0].text.starts_with("# Get started"));
    }

    #[tokio::test]
    async fn test_same_slug_in_different_categories() {
        let mut registry = ResourceRegistry::new();
        registry
            .register_markdown("Vue: Animation", key("vue", "animation"), "Vue animation", "# Vue animation")
            .unwrap();
        registry
            .register_markdown(
                "React: Animation",
                key("react", "animation"),
                "React animation",
                "# React animation",
            )
            .unwrap();

        let vue = registry.resolve(&key("vue", "animation")).await.unwrap();
        let react = registry.resolve(&key("react", "animation")).await.unwrap();

        assert_eq!(vue.first_text(), Some("# Vue animation"));
        assert_eq!(react.first_text(), Some("# React animation"));
        assert_eq!(vue.contents[0].uri, "vue/animation");
        assert_eq!(react.contents[0].uri, "react/animation");
    }

    #[tokio::test]
    async fn test_resolve_unregistered_key_is_not_found() {
        let mut registry = ResourceRegistry::new();
        registry
            .register_markdown("Vue: Get started", key("vue", "vue"), "Vue", "# Get started")
            .unwrap();

        let err = registry.resolve(&key("nonexistent", "missing")).await.unwrap_err();
        assert_eq!(err, ResourceError::NotFound("nonexistent/missing".to_string()));
    }

    #[tokio::test]
    async fn test_duplicate_key_is_rejected_and_first_wins() {
        let mut registry = ResourceRegistry::new();
        registry
            .register_markdown("First", key("vue", "vue"), "first", "first body")
            .unwrap();

        for _ in 0..3 {
            let err = registry
                .register_markdown("Second", key("vue", "vue"), "second", "second body")
                .unwrap_err();
            assert_eq!(err, ResourceError::DuplicateKey("vue/vue".to_string()));
        }

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get(&key("vue", "vue")).unwrap().title(), "First");
        let content = registry.resolve(&key("vue", "vue")).await.unwrap();
        assert_eq!(content.first_text(), Some("first body"));
    }

    #[test]
    fn test_register_rejects_empty_metadata() {
        let mut registry = ResourceRegistry::new();

        let err = registry
            .register_markdown("", key("vue", "vue"), "desc", "body")
            .unwrap_err();
        assert!(matches!(err, ResourceError::InvalidDescriptor(_)));

        let err = registry
            .register_markdown("Title", key("vue", "vue"), "", "body")
            .unwrap_err();
        assert!(matches!(err, ResourceError::InvalidDescriptor(_)));

        let err = registry
            .register(
                "Title",
                key("vue", "vue"),
                ResourceDescriptor::new("desc", ""),
                StaticDocument::markdown("vue/vue", "body"),
            )
            .unwrap_err();
        assert!(matches!(err, ResourceError::InvalidDescriptor(_)));

        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_resolve_is_idempotent_under_concurrency() {
        let mut registry = ResourceRegistry::new();
        for (category, slug) in [("vue", "vue"), ("react", "react"), ("svelte", "svelte")] {
            registry
                .register_markdown(
                    format!("{}: Overview", category),
                    key(category, slug),
                    "overview",
                    format!("# {} overview", category),
                )
                .unwrap();
        }
        let registry = registry.into_shared();

        let handles: Vec<_> = (0..32)
            .map(|i| {
                let registry = registry.clone();
                let k = registry.keys().nth(i % 3).cloned().unwrap();
                tokio::spawn(async move { (k.clone(), registry.resolve(&k).await.unwrap()) })
            })
            .collect();

        for handle in handles {
            let (k, content) = handle.await.unwrap();
            let expected = registry.resolve(&k).await.unwrap();
            assert_eq!(content, expected);
            assert_eq!(content.contents[0].uri, k.uri());
        }
    }

    #[test]
    fn test_iteration_is_key_ordered() {
        let mut registry = ResourceRegistry::new();
        registry
            .register_markdown("b", key("vue", "routing"), "d", "t")
            .unwrap();
        registry
            .register_markdown("a", key("react", "hooks"), "d", "t")
            .unwrap();
        registry
            .register_markdown("c", key("vue", "animation"), "d", "t")
            .unwrap();

        let uris: Vec<_> = registry.keys().map(ResourceKey::uri).collect();
        assert_eq!(uris, vec!["react/hooks", "vue/animation", "vue/routing"]);
        assert_eq!(registry.categories(), vec!["react", "vue"]);
    }

    #[test]
    fn test_to_mcp_resource() {
        let mut registry = ResourceRegistry::new();
        let k = key("react", "hooks");
        registry
            .register_markdown("React: Hooks", k.clone(), "Using hooks", "# Hooks")
            .unwrap();

        let resource = registry.get(&k).unwrap().to_mcp_resource(&k);
        assert_eq!(resource.raw.uri, "react/hooks");
        assert_eq!(resource.raw.name, "React: Hooks");
        assert_eq!(resource.raw.description.as_deref(), Some("Using hooks"));
        assert_eq!(resource.raw.mime_type.as_deref(), Some(MARKDOWN_MIME_TYPE));
    }
}
