//! Resource service implementation.
//!
//! The ResourceService adapts the frozen [`ResourceRegistry`] to MCP:
//! listing with cursor pagination, resource templates, and reads by URI.
//!
//! Documents are defined in `definitions/` and registered via `catalogue.rs`.
//! Adding a new document does NOT require modifying this file.

use std::sync::Arc;

use rmcp::model::{ReadResourceResult, Resource, ResourceTemplate};
use tracing::{debug, info};

use super::catalogue::{build_registry, resource_templates};
use super::error::ResourceError;
use super::key::ResourceKey;
use super::registry::ResourceRegistry;
use crate::core::config::ResourcesConfig;

/// Service for listing and reading documentation resources.
///
/// Cloning is cheap: the registry is shared, never copied.
#[derive(Debug, Clone)]
pub struct ResourceService {
    /// The populated, read-only registry.
    registry: Arc<ResourceRegistry>,

    /// Resource templates advertised to clients.
    templates: Vec<ResourceTemplate>,

    /// Maximum number of resources per listing page.
    page_size: Option<usize>,
}

/// One page of a resource listing.
#[derive(Debug, Clone)]
pub struct ResourcePage {
    /// Resources on this page, in key order.
    pub resources: Vec<Resource>,

    /// Cursor for the next page, if there is one.
    pub next_cursor: Option<String>,
}

impl ResourceService {
    /// Create a new ResourceService with the given configuration.
    ///
    /// Registers the whole catalogue up front; fails if the catalogue is
    /// inconsistent with the configuration.
    pub fn new(config: ResourcesConfig) -> Result<Self, ResourceError> {
        info!("Initializing ResourceService");

        let registry = build_registry(&config)?;
        info!("Resource registry ready with {} documents", registry.len());

        Ok(Self::with_registry(registry.into_shared(), config.page_size))
    }

    /// Create a service over an already populated registry.
    pub fn with_registry(registry: Arc<ResourceRegistry>, page_size: Option<usize>) -> Self {
        Self {
            registry,
            templates: resource_templates(),
            page_size: page_size.filter(|size| *size > 0),
        }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &Arc<ResourceRegistry> {
        &self.registry
    }

    /// List resources, starting at `cursor`.
    pub async fn list_resources(&self, cursor: Option<&str>) -> Result<ResourcePage, ResourceError> {
        let start = match cursor {
            Some(cursor) => decode_cursor(cursor, self.registry.len())?,
            None => 0,
        };
        let take = self.page_size.unwrap_or(usize::MAX);

        let resources: Vec<Resource> = self
            .registry
            .iter()
            .skip(start)
            .take(take)
            .map(|(key, entry)| entry.to_mcp_resource(key))
            .collect();

        let end = start + resources.len();
        let next_cursor = (end < self.registry.len()).then(|| end.to_string());
        debug!("Listed resources {}..{} of {}", start, end, self.registry.len());

        Ok(ResourcePage {
            resources,
            next_cursor,
        })
    }

    /// List all available resource templates.
    pub async fn list_resource_templates(&self) -> Vec<ResourceTemplate> {
        self.templates.clone()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let key: ResourceKey = uri.parse()?;
        let content = self.registry.resolve(&key).await?;
        Ok(content.into())
    }
}

/// Cursors are the decimal offset of the first resource of the page.
fn decode_cursor(cursor: &str, len: usize) -> Result<usize, ResourceError> {
    match cursor.parse::<usize>() {
        Ok(offset) if offset <= len => Ok(offset),
        _ => Err(ResourceError::invalid_cursor(cursor)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ResourceContents;

    fn service() -> ResourceService {
        ResourceService::new(ResourcesConfig::default()).unwrap()
    }

    fn text_of(result: &ReadResourceResult) -> &str {
        match &result.contents[0] {
            ResourceContents::TextResourceContents { text, .. } => text,
            _ => panic!("Expected text contents"),
        }
    }

    #[tokio::test]
    async fn test_resource_service_creation() {
        let service = service();

        let page = service.list_resources(None).await.unwrap();
        assert!(!page.resources.is_empty());
        assert_eq!(page.resources.len(), service.registry().len());
        assert!(page.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_read_existing_resource() {
        let service = service();

        let result = service.read_resource("vue/vue").await.unwrap();
        assert_eq!(result.contents.len(), 1);
        assert!(text_of(&result).starts_with("# Get started"));
    }

    #[tokio::test]
    async fn test_read_is_idempotent() {
        let service = service();

        let first = service.read_resource("react/hooks").await.unwrap();
        let second = service.read_resource("react/hooks").await.unwrap();
        assert_eq!(text_of(&first), text_of(&second));
    }

    #[tokio::test]
    async fn test_read_nonexistent_resource() {
        let service = service();

        let err = service.read_resource("nonexistent/missing").await.unwrap_err();
        assert_eq!(err, ResourceError::NotFound("nonexistent/missing".to_string()));
    }

    #[tokio::test]
    async fn test_read_malformed_uri() {
        let service = service();

        let err = service.read_resource("vue").await.unwrap_err();
        assert!(matches!(err, ResourceError::InvalidUri(_)));
        assert!(err.is_invalid_input());
    }

    #[tokio::test]
    async fn test_concurrent_reads() {
        let service = service();
        let uris: Vec<String> = service.registry().keys().map(ResourceKey::uri).collect();

        let reads = uris.iter().map(|uri| service.read_resource(uri));
        let results = futures::future::join_all(reads).await;

        for (uri, result) in uris.iter().zip(results) {
            let result = result.unwrap();
            match &result.contents[0] {
                ResourceContents::TextResourceContents { uri: got, .. } => assert_eq!(got, uri),
                _ => panic!("Expected text contents"),
            }
        }
    }

    #[tokio::test]
    async fn test_pagination_walks_every_resource_once() {
        let registry = build_registry(&ResourcesConfig::default()).unwrap().into_shared();
        let total = registry.len();
        let service = ResourceService::with_registry(registry, Some(4));

        let mut seen = Vec::new();
        let mut cursor: Option<String> = None;
        loop {
            let page = service.list_resources(cursor.as_deref()).await.unwrap();
            assert!(page.resources.len() <= 4);
            seen.extend(page.resources.into_iter().map(|r| r.raw.uri));
            match page.next_cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        assert_eq!(seen.len(), total);
        let mut sorted = seen.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), total);
    }

    #[tokio::test]
    async fn test_full_catalogue_pages() {
        let service = ResourceService::new(ResourcesConfig {
            page_size: Some(25),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(service.registry().len(), 60);

        let first = service.list_resources(None).await.unwrap();
        assert_eq!(first.resources.len(), 25);
        assert_eq!(first.next_cursor.as_deref(), Some("25"));

        let second = service.list_resources(Some("25")).await.unwrap();
        assert_eq!(second.resources.len(), 25);
        assert_eq!(second.next_cursor.as_deref(), Some("50"));

        let last = service.list_resources(Some("50")).await.unwrap();
        assert_eq!(last.resources.len(), 10);
        assert!(last.next_cursor.is_none());
    }

    #[tokio::test]
    async fn test_invalid_cursor() {
        let service = service();

        for cursor in ["abc", "-1", "100000"] {
            let err = service.list_resources(Some(cursor)).await.unwrap_err();
            assert!(matches!(err, ResourceError::InvalidCursor(_)));
        }
    }

    #[tokio::test]
    async fn test_list_resource_templates() {
        let service = service();
        let templates = service.list_resource_templates().await;
        assert_eq!(templates.len(), 1);
    }
}
