//! Svelte documentation.

use super::{DocCategory, MarkdownDoc};

/// Svelte and SvelteKit guides.
pub struct Svelte;

impl DocCategory for Svelte {
    const CATEGORY: &'static str = "svelte";
    const LABEL: &'static str = "Svelte";

    fn documents() -> &'static [MarkdownDoc] {
        DOCUMENTS
    }
}

const DOCUMENTS: &[MarkdownDoc] = &[
    MarkdownDoc {
        slug: "svelte",
        title: "Get started",
        description: "Create a Svelte or SvelteKit project and write a first component",
        body: include_str!("../../../../content/svelte/svelte.md"),
    },
    MarkdownDoc {
        slug: "components",
        title: "Components",
        description: "Props, template syntax, event handlers, snippets and bindings",
        body: include_str!("../../../../content/svelte/components.md"),
    },
    MarkdownDoc {
        slug: "reactivity",
        title: "Reactivity with runes",
        description: "$state, $derived, $effect, $props and $bindable",
        body: include_str!("../../../../content/svelte/reactivity.md"),
    },
    MarkdownDoc {
        slug: "stores",
        title: "Stores",
        description: "Writable, readable and derived stores and the store contract",
        body: include_str!("../../../../content/svelte/stores.md"),
    },
    MarkdownDoc {
        slug: "animation",
        title: "Animation",
        description: "Transitions, the animate directive and motion utilities",
        body: include_str!("../../../../content/svelte/animation.md"),
    },
    MarkdownDoc {
        slug: "routing",
        title: "Routing",
        description: "SvelteKit filesystem routing, load functions, layouts and server routes",
        body: include_str!("../../../../content/svelte/routing.md"),
    },
    MarkdownDoc {
        slug: "testing",
        title: "Testing",
        description: "Unit, component and end-to-end testing",
        body: include_str!("../../../../content/svelte/testing.md"),
    },
    MarkdownDoc {
        slug: "basic-markup",
        title: "Basic markup",
        description: "Tags, attributes, spread props and text expressions",
        body: include_str!("../../../../content/svelte/basic-markup.md"),
    },
    MarkdownDoc {
        slug: "props",
        title: "Props",
        description: "Read props with $props, fallbacks and $bindable",
        body: include_str!("../../../../content/svelte/props.md"),
    },
    MarkdownDoc {
        slug: "logic-blocks",
        title: "Logic blocks",
        description: "if, each, await and key blocks",
        body: include_str!("../../../../content/svelte/logic-blocks.md"),
    },
    MarkdownDoc {
        slug: "events",
        title: "Event handlers",
        description: "Event attributes, delegation and callback props",
        body: include_str!("../../../../content/svelte/events.md"),
    },
    MarkdownDoc {
        slug: "bindings",
        title: "Bindings",
        description: "bind: for inputs, groups, selects, elements and dimensions",
        body: include_str!("../../../../content/svelte/bindings.md"),
    },
    MarkdownDoc {
        slug: "lifecycle",
        title: "Lifecycle hooks",
        description: "onMount, onDestroy and tick",
        body: include_str!("../../../../content/svelte/lifecycle.md"),
    },
    MarkdownDoc {
        slug: "context",
        title: "Context",
        description: "setContext, getContext and type-safe context",
        body: include_str!("../../../../content/svelte/context.md"),
    },
    MarkdownDoc {
        slug: "transitions",
        title: "Transitions",
        description: "transition:, in: and out: directives and built-in transitions",
        body: include_str!("../../../../content/svelte/transitions.md"),
    },
    MarkdownDoc {
        slug: "actions",
        title: "Actions",
        description: "Run code when an element mounts with use:",
        body: include_str!("../../../../content/svelte/actions.md"),
    },
    MarkdownDoc {
        slug: "special-elements",
        title: "Special elements",
        description: "svelte:window, svelte:head, svelte:element and svelte:boundary",
        body: include_str!("../../../../content/svelte/special-elements.md"),
    },
    MarkdownDoc {
        slug: "snippets",
        title: "Snippets",
        description: "Reusable markup with snippet and render tags",
        body: include_str!("../../../../content/svelte/snippets.md"),
    },
    MarkdownDoc {
        slug: "motion",
        title: "Motion",
        description: "Tween and Spring values",
        body: include_str!("../../../../content/svelte/motion.md"),
    },
    MarkdownDoc {
        slug: "forms",
        title: "Forms",
        description: "SvelteKit form actions, validation and progressive enhancement",
        body: include_str!("../../../../content/svelte/forms.md"),
    },
];
