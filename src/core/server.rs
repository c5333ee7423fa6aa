//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the resource service.
//!
//! Documents are defined in `domains/resources/definitions/` and registered
//! once, when the server is created. **Adding a new document does NOT
//! require modifying this file!**

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, model::*, service::RequestContext,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

use super::config::Config;
use super::error::Result;
use crate::domains::resources::{ResourceError, ResourceService};

const INSTRUCTIONS: &str = "This server exposes framework documentation as read-only Markdown \
     resources. List resources to discover pages, then read one by its `category/slug` URI.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and serves
/// documentation resources. Clones share the same registry.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// The documentation catalogue is registered here, before any request
    /// can be served.
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);
        let resource_service = Arc::new(ResourceService::new(config.resources.clone())?);

        Ok(Self {
            config,
            resource_service,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the resource service.
    pub fn resources(&self) -> &Arc<ResourceService> {
        &self.resource_service
    }

    /// Instructions sent to clients on initialization.
    pub fn instructions(&self) -> &'static str {
        INSTRUCTIONS
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List resources as JSON (for HTTP transport).
    pub async fn list_resources_json(
        &self,
        cursor: Option<&str>,
    ) -> std::result::Result<serde_json::Value, ResourceError> {
        let page = self.resource_service.list_resources(cursor).await?;
        Ok(serde_json::json!({
            "resources": page.resources,
            "nextCursor": page.next_cursor,
        }))
    }

    /// List resource templates as JSON (for HTTP transport).
    pub async fn list_resource_templates_json(&self) -> serde_json::Value {
        let templates = self.resource_service.list_resource_templates().await;
        serde_json::json!({ "resourceTemplates": templates })
    }

    /// Read a resource as JSON (for HTTP transport).
    pub async fn read_resource_json(
        &self,
        uri: &str,
    ) -> std::result::Result<serde_json::Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({ "contents": result.contents }))
    }
}

/// Map a resource error onto the MCP error space.
fn to_mcp_error(err: ResourceError) -> McpError {
    match &err {
        ResourceError::NotFound(_) => McpError::resource_not_found(err.to_string(), None),
        e if e.is_invalid_input() => McpError::invalid_params(err.to_string(), None),
        _ => McpError::internal_error(err.to_string(), None),
    }
}

impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_resources().build(),
            server_info: Implementation {
                name: self.name().to_string(),
                version: self.version().to_string(),
                ..Default::default()
            },
            instructions: Some(INSTRUCTIONS.to_string()),
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let cursor = request.and_then(|r| r.cursor);
        let page = self
            .resource_service
            .list_resources(cursor.as_deref())
            .await
            .map_err(|e| {
                warn!("Failed to list resources: {}", e);
                to_mcp_error(e)
            })?;
        Ok(ListResourcesResult {
            resources: page.resources,
            next_cursor: page.next_cursor,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ListResourceTemplatesResult, McpError> {
        info!("Listing resource templates");
        let templates = self.resource_service.list_resource_templates().await;
        Ok(ListResourceTemplatesResult {
            resource_templates: templates,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> std::result::Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| {
                warn!("Failed to read resource {}: {}", request.uri, e);
                to_mcp_error(e)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::ResourcesConfig;

    fn server() -> McpServer {
        McpServer::new(Config::default()).unwrap()
    }

    #[test]
    fn test_get_info_advertises_resources_only() {
        let info = server().get_info();
        assert!(info.capabilities.resources.is_some());
        assert!(info.capabilities.tools.is_none());
        assert!(info.capabilities.prompts.is_none());
        assert!(info.instructions.is_some());
    }

    #[test]
    fn test_get_info_reports_configured_identity() {
        let mut config = Config::default();
        config.server.name = "my-docs".to_string();
        config.server.version = "2.3.4".to_string();

        let info = McpServer::new(config).unwrap().get_info();
        assert_eq!(info.server_info.name, "my-docs");
        assert_eq!(info.server_info.version, "2.3.4");
    }

    #[test]
    fn test_new_rejects_unknown_category() {
        let mut config = Config::default();
        config.resources = ResourcesConfig {
            enabled_categories: Some(vec!["cobol".to_string()]),
            page_size: None,
        };
        let err = McpServer::new(config).err().unwrap();
        assert!(matches!(
            err,
            crate::core::Error::Resource(ResourceError::UnknownCategory(_))
        ));
    }

    #[tokio::test]
    async fn test_read_resource_json() {
        let server = server();
        let json = server.read_resource_json("vue/vue").await.unwrap();

        let contents = json["contents"].as_array().unwrap();
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0]["uri"], "vue/vue");
        assert_eq!(contents[0]["mimeType"], "text/markdown");
        assert!(
            contents[0]["text"]
                .as_str()
                .unwrap()
                .starts_with("# Get started")
        );
    }

    #[tokio::test]
    async fn test_list_resources_json() {
        let server = server();
        let json = server.list_resources_json(None).await.unwrap();

        let resources = json["resources"].as_array().unwrap();
        assert_eq!(resources.len(), server.resources().registry().len());
        assert!(json["nextCursor"].is_null());
        assert!(
            resources
                .iter()
                .any(|r| r["uri"] == "svelte/svelte" && r["name"] == "Svelte: Get started")
        );
    }

    #[test]
    fn test_error_mapping() {
        let err = to_mcp_error(ResourceError::not_found("a/b"));
        assert_eq!(err.code, ErrorCode::RESOURCE_NOT_FOUND);

        let err = to_mcp_error(ResourceError::invalid_uri("ab"));
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);

        let err = to_mcp_error(ResourceError::duplicate_key("a/b"));
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }

    #[test]
    fn test_clones_share_registry() {
        let server = server();
        let clone = server.clone();
        assert!(Arc::ptr_eq(
            server.resources().registry(),
            clone.resources().registry()
        ));
    }
}
