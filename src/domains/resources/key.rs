//! Composite resource keys.
//!
//! A key is a `(category, slug)` pair. Its external form, which doubles as
//! the MCP resource URI, is `category/slug`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ResourceError;

/// Separator between the category and the slug in the external form.
pub const KEY_SEPARATOR: char = '/';

/// Identifier of a registered resource.
///
/// Neither component may be empty or contain [`KEY_SEPARATOR`], so distinct
/// pairs never collide once joined.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceKey {
    category: String,
    slug: String,
}

impl ResourceKey {
    /// Build a key from its two components.
    pub fn new(category: impl Into<String>, slug: impl Into<String>) -> Result<Self, ResourceError> {
        let category = category.into();
        let slug = slug.into();
        validate_component("category", &category)?;
        validate_component("slug", &slug)?;
        Ok(Self { category, slug })
    }

    /// The grouping component (e.g. a framework name).
    pub fn category(&self) -> &str {
        &self.category
    }

    /// The topic component.
    pub fn slug(&self) -> &str {
        &self.slug
    }

    /// The canonical external form, `category/slug`.
    pub fn uri(&self) -> String {
        self.to_string()
    }

    /// Split the key back into its components.
    pub fn into_parts(self) -> (String, String) {
        (self.category, self.slug)
    }
}

fn validate_component(name: &str, value: &str) -> Result<(), ResourceError> {
    if value.is_empty() {
        return Err(ResourceError::invalid_key(format!("{} must not be empty", name)));
    }
    if value.contains(KEY_SEPARATOR) {
        return Err(ResourceError::invalid_key(format!(
            "{} '{}' contains reserved separator '{}'",
            name, value, KEY_SEPARATOR
        )));
    }
    Ok(())
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.category, KEY_SEPARATOR, self.slug)
    }
}

impl FromStr for ResourceKey {
    type Err = ResourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (category, slug) = s
            .split_once(KEY_SEPARATOR)
            .ok_or_else(|| ResourceError::invalid_uri(s))?;
        Self::new(category, slug).map_err(|_| ResourceError::invalid_uri(s))
    }
}

impl TryFrom<String> for ResourceKey {
    type Error = ResourceError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ResourceKey> for String {
    fn from(key: ResourceKey) -> Self {
        key.to_string()
    }
}
