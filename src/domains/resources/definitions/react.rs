//! React documentation.

use super::{DocCategory, MarkdownDoc};

/// React guides.
pub struct React;

impl DocCategory for React {
    const CATEGORY: &'static str = "react";
    const LABEL: &'static str = "React";

    fn documents() -> &'static [MarkdownDoc] {
        DOCUMENTS
    }
}

const DOCUMENTS: &[MarkdownDoc] = &[
    MarkdownDoc {
        slug: "react",
        title: "Get started",
        description: "Start a React project and write your first components",
        body: include_str!("../../../../content/react/react.md"),
    },
    MarkdownDoc {
        slug: "components",
        title: "Components and props",
        description: "Define components, pass props and children, render conditionally and in lists",
        body: include_str!("../../../../content/react/components.md"),
    },
    MarkdownDoc {
        slug: "hooks",
        title: "Hooks",
        description: "Rules of hooks, built-in hooks and custom hooks",
        body: include_str!("../../../../content/react/hooks.md"),
    },
    MarkdownDoc {
        slug: "effects",
        title: "Synchronizing with effects",
        description: "Write effects, declare dependencies, clean up and fetch data",
        body: include_str!("../../../../content/react/effects.md"),
    },
    MarkdownDoc {
        slug: "animation",
        title: "Animation",
        description: "CSS transitions, Web Animations, view transitions and exit animations",
        body: include_str!("../../../../content/react/animation.md"),
    },
    MarkdownDoc {
        slug: "context",
        title: "Passing data deeply with context",
        description: "Create, provide and consume context",
        body: include_str!("../../../../content/react/context.md"),
    },
    MarkdownDoc {
        slug: "state-management",
        title: "Managing state",
        description: "Structure state, lift it up, reset it and extract it into reducers",
        body: include_str!("../../../../content/react/state-management.md"),
    },
    MarkdownDoc {
        slug: "jsx",
        title: "Writing markup with JSX",
        description: "The rules of JSX and embedding JavaScript with curly braces",
        body: include_str!("../../../../content/react/jsx.md"),
    },
    MarkdownDoc {
        slug: "props",
        title: "Passing props",
        description: "Pass data to components, default values and children",
        body: include_str!("../../../../content/react/props.md"),
    },
    MarkdownDoc {
        slug: "conditional-rendering",
        title: "Conditional rendering",
        description: "Render JSX conditionally with if, ternaries and &&",
        body: include_str!("../../../../content/react/conditional-rendering.md"),
    },
    MarkdownDoc {
        slug: "lists-and-keys",
        title: "Rendering lists",
        description: "Render arrays with map and filter, and choose stable keys",
        body: include_str!("../../../../content/react/lists-and-keys.md"),
    },
    MarkdownDoc {
        slug: "events",
        title: "Responding to events",
        description: "Event handlers, propagation and preventing default behavior",
        body: include_str!("../../../../content/react/events.md"),
    },
    MarkdownDoc {
        slug: "state",
        title: "State",
        description: "useState, state snapshots, updater functions and immutable updates",
        body: include_str!("../../../../content/react/state.md"),
    },
    MarkdownDoc {
        slug: "reducers",
        title: "Reducers",
        description: "Consolidate state logic with useReducer",
        body: include_str!("../../../../content/react/reducers.md"),
    },
    MarkdownDoc {
        slug: "refs",
        title: "Refs",
        description: "Remember values without re-rendering and reach DOM nodes with useRef",
        body: include_str!("../../../../content/react/refs.md"),
    },
    MarkdownDoc {
        slug: "custom-hooks",
        title: "Custom hooks",
        description: "Share stateful logic between components",
        body: include_str!("../../../../content/react/custom-hooks.md"),
    },
    MarkdownDoc {
        slug: "forms",
        title: "Forms",
        description: "Controlled inputs, checkboxes, selects and form actions",
        body: include_str!("../../../../content/react/forms.md"),
    },
    MarkdownDoc {
        slug: "suspense",
        title: "Suspense",
        description: "Loading fallbacks, lazy components and nested boundaries",
        body: include_str!("../../../../content/react/suspense.md"),
    },
    MarkdownDoc {
        slug: "memo",
        title: "Memoization",
        description: "memo, useMemo and useCallback",
        body: include_str!("../../../../content/react/memo.md"),
    },
    MarkdownDoc {
        slug: "testing",
        title: "Testing",
        description: "Test components with React Testing Library",
        body: include_str!("../../../../content/react/testing.md"),
    },
];
