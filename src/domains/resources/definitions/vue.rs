//! Vue documentation.

use super::{DocCategory, MarkdownDoc};

/// Vue.js guides.
pub struct Vue;

impl DocCategory for Vue {
    const CATEGORY: &'static str = "vue";
    const LABEL: &'static str = "Vue";

    fn documents() -> &'static [MarkdownDoc] {
        DOCUMENTS
    }
}

const DOCUMENTS: &[MarkdownDoc] = &[
    MarkdownDoc {
        slug: "vue",
        title: "Get started",
        description: "Create a Vue project, use Vue from a CDN and pick an API style",
        body: include_str!("../../../../content/vue/vue.md"),
    },
    MarkdownDoc {
        slug: "components",
        title: "Components basics",
        description: "Define and use components, pass props, emit events and use slots",
        body: include_str!("../../../../content/vue/components.md"),
    },
    MarkdownDoc {
        slug: "reactivity",
        title: "Reactivity fundamentals",
        description: "ref(), reactive(), computed properties, watchers and DOM update timing",
        body: include_str!("../../../../content/vue/reactivity.md"),
    },
    MarkdownDoc {
        slug: "composables",
        title: "Composables",
        description: "Encapsulate and reuse stateful logic with the Composition API",
        body: include_str!("../../../../content/vue/composables.md"),
    },
    MarkdownDoc {
        slug: "animation",
        title: "Animation",
        description: "Transition, TransitionGroup, class-based and state-driven animations",
        body: include_str!("../../../../content/vue/animation.md"),
    },
    MarkdownDoc {
        slug: "routing",
        title: "Routing",
        description: "Map URLs to components with the official router",
        body: include_str!("../../../../content/vue/routing.md"),
    },
    MarkdownDoc {
        slug: "state-management",
        title: "State management",
        description: "Share state with reactive stores and Pinia",
        body: include_str!("../../../../content/vue/state-management.md"),
    },
    MarkdownDoc {
        slug: "template-syntax",
        title: "Template syntax",
        description: "Text interpolation, attribute bindings, expressions and directives",
        body: include_str!("../../../../content/vue/template-syntax.md"),
    },
    MarkdownDoc {
        slug: "computed",
        title: "Computed properties",
        description: "Cached derived state and writable computed refs",
        body: include_str!("../../../../content/vue/computed.md"),
    },
    MarkdownDoc {
        slug: "class-and-style",
        title: "Class and style bindings",
        description: "Bind classes and inline styles with objects and arrays",
        body: include_str!("../../../../content/vue/class-and-style.md"),
    },
    MarkdownDoc {
        slug: "conditional",
        title: "Conditional rendering",
        description: "v-if, v-else-if, v-else and v-show",
        body: include_str!("../../../../content/vue/conditional.md"),
    },
    MarkdownDoc {
        slug: "list",
        title: "List rendering",
        description: "v-for over arrays, objects and ranges, keys and array change detection",
        body: include_str!("../../../../content/vue/list.md"),
    },
    MarkdownDoc {
        slug: "event-handling",
        title: "Event handling",
        description: "v-on handlers, event modifiers and key modifiers",
        body: include_str!("../../../../content/vue/event-handling.md"),
    },
    MarkdownDoc {
        slug: "forms",
        title: "Form input bindings",
        description: "v-model on inputs, checkboxes, radios and selects, and its modifiers",
        body: include_str!("../../../../content/vue/forms.md"),
    },
    MarkdownDoc {
        slug: "lifecycle",
        title: "Lifecycle hooks",
        description: "onMounted, onUpdated, onUnmounted and cleanup",
        body: include_str!("../../../../content/vue/lifecycle.md"),
    },
    MarkdownDoc {
        slug: "watchers",
        title: "Watchers",
        description: "watch and watchEffect for side effects on state changes",
        body: include_str!("../../../../content/vue/watchers.md"),
    },
    MarkdownDoc {
        slug: "props",
        title: "Props",
        description: "Declare, validate and pass props with one-way data flow",
        body: include_str!("../../../../content/vue/props.md"),
    },
    MarkdownDoc {
        slug: "slots",
        title: "Slots",
        description: "Default, named and scoped slots",
        body: include_str!("../../../../content/vue/slots.md"),
    },
    MarkdownDoc {
        slug: "provide-inject",
        title: "Provide / inject",
        description: "Share data with deep descendants without prop drilling",
        body: include_str!("../../../../content/vue/provide-inject.md"),
    },
    MarkdownDoc {
        slug: "testing",
        title: "Testing",
        description: "Unit, component and end-to-end testing with Vitest and Vue Test Utils",
        body: include_str!("../../../../content/vue/testing.md"),
    },
];
