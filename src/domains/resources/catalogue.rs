//! Resource Catalogue - central registration of all documentation.
//!
//! This module populates a [`ResourceRegistry`] from the category tables in
//! `definitions/`. When adding a new category:
//! 1. Create the category file in `definitions/`
//! 2. Export it in `definitions/mod.rs`
//! 3. Add it to `CATEGORIES` below

use rmcp::model::{AnnotateAble, RawResourceTemplate, ResourceTemplate};
use tracing::info;

use super::definitions::{DocCategory, React, Svelte, Vue};
use super::error::ResourceError;
use super::key::ResourceKey;
use super::producer::MARKDOWN_MIME_TYPE;
use super::registry::ResourceRegistry;
use crate::core::config::ResourcesConfig;

type Registrar = fn(&mut ResourceRegistry) -> Result<usize, ResourceError>;

/// Every category shipped with the server, in registration order.
const CATEGORIES: &[(&str, Registrar)] = &[
    (Vue::CATEGORY, register_category::<Vue>),
    (React::CATEGORY, register_category::<React>),
    (Svelte::CATEGORY, register_category::<Svelte>),
];

/// Register every document of one category, returning how many were added.
fn register_category<C: DocCategory>(registry: &mut ResourceRegistry) -> Result<usize, ResourceError> {
    let docs = C::documents();
    for doc in docs {
        let key = ResourceKey::new(C::CATEGORY, doc.slug)?;
        registry.register_markdown(C::title_of(doc), key, doc.description, doc.body)?;
    }
    Ok(docs.len())
}

/// Names of every shipped category.
pub fn category_names() -> Vec<&'static str> {
    CATEGORIES.iter().map(|(name, _)| *name).collect()
}

/// Build a registry holding every document of the enabled categories.
///
/// `enabled_categories: None` enables everything. Naming a category that
/// does not ship fails with [`ResourceError::UnknownCategory`].
pub fn build_registry(config: &ResourcesConfig) -> Result<ResourceRegistry, ResourceError> {
    build_from(CATEGORIES, config)
}

fn build_from(
    categories: &[(&str, Registrar)],
    config: &ResourcesConfig,
) -> Result<ResourceRegistry, ResourceError> {
    if let Some(enabled) = &config.enabled_categories {
        if let Some(unknown) = enabled
            .iter()
            .find(|name| !categories.iter().any(|(known, _)| *known == name.as_str()))
        {
            return Err(ResourceError::unknown_category(unknown.as_str()));
        }
    }

    let mut registry = ResourceRegistry::new();
    for (name, register) in categories {
        if !config.is_category_enabled(name) {
            info!("Skipping disabled documentation category: {}", name);
            continue;
        }
        let count = register(&mut registry)?;
        info!("Registered {} documents for category '{}'", count, name);
    }
    Ok(registry)
}

/// URIs of every shipped document.
///
/// Fails if a category table cannot be registered, e.g. because it repeats
/// a slug.
pub fn resource_uris() -> Result<Vec<String>, ResourceError> {
    uris_from(CATEGORIES)
}

fn uris_from(categories: &[(&str, Registrar)]) -> Result<Vec<String>, ResourceError> {
    let registry = build_from(categories, &ResourcesConfig::default())?;
    Ok(registry.keys().map(ResourceKey::uri).collect())
}

/// Get all resource templates.
///
/// Resource templates use URI templates (RFC 6570) to describe
/// parameterized resources that clients can fill in.
pub fn resource_templates() -> Vec<ResourceTemplate> {
    vec![
        RawResourceTemplate {
            uri_template: "{category}/{slug}".to_string(),
            name: "Framework Documentation".to_string(),
            title: Some("Framework Docs".to_string()),
            description: Some(format!(
                "Documentation page by category ({}) and topic slug",
                category_names().join(", ")
            )),
            mime_type: Some(MARKDOWN_MIME_TYPE.to_string()),
        }
        .no_annotation(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::resources::definitions::MarkdownDoc;

    fn total_documents() -> usize {
        Vue::documents().len() + React::documents().len() + Svelte::documents().len()
    }

    #[test]
    fn test_build_registry_registers_everything() {
        let registry = build_registry(&ResourcesConfig::default()).unwrap();
        assert_eq!(registry.len(), total_documents());
        assert_eq!(registry.categories(), vec!["react", "svelte", "vue"]);
    }

    #[tokio::test]
    async fn test_every_registered_key_resolves() {
        let registry = build_registry(&ResourcesConfig::default()).unwrap();
        for key in registry.keys() {
            let content = registry.resolve(key).await.unwrap();
            assert_eq!(content.contents.len(), 1);
            assert_eq!(content.contents[0].uri, key.uri());
            assert_eq!(content.contents[0].mime_type, MARKDOWN_MIME_TYPE);
        }
    }

    #[tokio::test]
    async fn test_vue_get_started() {
        let registry = build_registry(&ResourcesConfig::default()).unwrap();
        let key = ResourceKey::new("vue", "vue").unwrap();

        assert_eq!(registry.get(&key).unwrap().title(), "Vue: Get started");
        let content = registry.resolve(&key).await.unwrap();
        assert!(content.first_text().unwrap().starts_with("# Get started"));
    }

    #[tokio::test]
    async fn test_shared_slug_resolves_per_category() {
        let registry = build_registry(&ResourcesConfig::default()).unwrap();
        let vue = registry
            .resolve(&ResourceKey::new("vue", "animation").unwrap())
            .await
            .unwrap();
        let react = registry
            .resolve(&ResourceKey::new("react", "animation").unwrap())
            .await
            .unwrap();

        assert_ne!(vue.first_text(), react.first_text());
        assert!(vue.first_text().unwrap().contains("<Transition>"));
        assert!(react.first_text().unwrap().contains("useEffect"));
    }

    #[tokio::test]
    async fn test_no_cross_talk_between_documents() {
        let registry = build_registry(&ResourcesConfig::default()).unwrap();
        let mut seen = std::collections::HashMap::new();
        for key in registry.keys() {
            let content = registry.resolve(key).await.unwrap();
            let text = content.first_text().unwrap().to_string();
            if let Some(previous) = seen.insert(text, key.uri()) {
                panic!("{} and {} share the same body", previous, key);
            }
        }
    }

    #[test]
    fn test_catalogue_size() {
        assert_eq!(Vue::documents().len(), 20);
        assert_eq!(React::documents().len(), 20);
        assert_eq!(Svelte::documents().len(), 20);
        assert_eq!(resource_uris().unwrap().len(), 60);
    }

    #[test]
    fn test_build_registry_filters_categories() {
        let config = ResourcesConfig {
            enabled_categories: Some(vec!["react".to_string()]),
            ..Default::default()
        };
        let registry = build_registry(&config).unwrap();
        assert_eq!(registry.len(), React::documents().len());
        assert_eq!(registry.categories(), vec!["react"]);
    }

    #[test]
    fn test_build_registry_rejects_unknown_category() {
        let config = ResourcesConfig {
            enabled_categories: Some(vec!["vue".to_string(), "angular".to_string()]),
            ..Default::default()
        };
        let err = build_registry(&config).unwrap_err();
        assert_eq!(err, ResourceError::UnknownCategory("angular".to_string()));
    }

    struct RepeatedSlug;

    impl DocCategory for RepeatedSlug {
        const CATEGORY: &'static str = "repeated";
        const LABEL: &'static str = "Repeated";

        fn documents() -> &'static [MarkdownDoc] {
            &[
                MarkdownDoc {
                    slug: "intro",
                    title: "Intro",
                    description: "First",
                    body: "# Intro",
                },
                MarkdownDoc {
                    slug: "intro",
                    title: "Intro again",
                    description: "Second",
                    body: "# Intro again",
                },
            ]
        }
    }

    #[test]
    fn test_resource_uris_reports_broken_table() {
        let categories: &[(&str, Registrar)] = &[
            (Vue::CATEGORY, register_category::<Vue>),
            (RepeatedSlug::CATEGORY, register_category::<RepeatedSlug>),
        ];
        let err = uris_from(categories).unwrap_err();
        assert_eq!(err, ResourceError::DuplicateKey("repeated/intro".to_string()));
    }

    #[test]
    fn test_resource_uris() {
        let uris = resource_uris().unwrap();
        assert_eq!(uris.len(), total_documents());
        assert!(uris.contains(&"vue/vue".to_string()));
        assert!(uris.contains(&"react/animation".to_string()));
        assert!(uris.contains(&"svelte/stores".to_string()));
    }

    #[test]
    fn test_resource_templates() {
        let templates = resource_templates();
        assert_eq!(templates.len(), 1);
        assert_eq!(templates[0].raw.uri_template, "{category}/{slug}");
        assert_eq!(
            templates[0].raw.mime_type.as_deref(),
            Some(MARKDOWN_MIME_TYPE)
        );
    }

    #[test]
    fn test_category_names() {
        assert_eq!(category_names(), vec!["vue", "react", "svelte"]);
    }
}
