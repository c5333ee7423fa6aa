//! Documentation catalogue definitions.
//!
//! Each framework lives in its own file with:
//! - its category name and display label
//! - a table of documents, whose bodies are embedded from `content/`
//!
//! ## Adding a New Document
//!
//! 1. Write the Markdown under `content/<category>/<slug>.md`
//! 2. Add a `MarkdownDoc` entry to the category's table
//!
//! ## Adding a New Category
//!
//! 1. Create a new file (e.g., `solid.rs`) implementing `DocCategory`
//! 2. Export it here
//! 3. Add it to `catalogue.rs`

mod react;
mod svelte;
mod vue;

pub use react::React;
pub use svelte::Svelte;
pub use vue::Vue;

/// One documentation page of a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownDoc {
    /// Topic component of the resource key.
    pub slug: &'static str,

    /// Short title, without the category label.
    pub title: &'static str,

    /// Summary shown in resource listings.
    pub description: &'static str,

    /// The Markdown document.
    pub body: &'static str,
}

/// Trait for documentation categories.
///
/// Each category must implement this trait to provide its name and pages.
pub trait DocCategory {
    /// Category component of every resource key in this category.
    const CATEGORY: &'static str;

    /// Human-readable framework name used to prefix titles.
    const LABEL: &'static str;

    /// Every page of the category.
    fn documents() -> &'static [MarkdownDoc];

    /// Full display title of a page, e.g. `Vue: Get started`.
    fn title_of(doc: &MarkdownDoc) -> String {
        format!("{}: {}", Self::LABEL, doc.title)
    }
}
