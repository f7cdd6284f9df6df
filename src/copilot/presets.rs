use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::{KeywordClassifier, KeywordRule, KnowledgeBase, RuleTable, Suggestion};

/// Built-in knowledge base and rule table pairs.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// react / performance / api, used by the interview room.
    #[default]
    Interview,
    /// react / next / css, used by the standalone copilot panel.
    Copilot,
}

static INTERVIEW_CLASSIFIER: Lazy<KeywordClassifier> = Lazy::new(|| {
    KeywordClassifier::new(Arc::new(interview_knowledge_base()), interview_rules())
        .expect("built-in interview rules reference known topics")
});

static COPILOT_CLASSIFIER: Lazy<KeywordClassifier> = Lazy::new(|| {
    KeywordClassifier::new(Arc::new(copilot_knowledge_base()), copilot_rules())
        .expect("built-in copilot rules reference known topics")
});

impl Preset {
    /// Shared classifier for this preset; the tables are built once per process.
    pub fn classifier(self) -> KeywordClassifier {
        match self {
            Preset::Interview => INTERVIEW_CLASSIFIER.clone(),
            Preset::Copilot => COPILOT_CLASSIFIER.clone(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Interview => "interview",
            Preset::Copilot => "copilot",
        }
    }
}

pub fn interview_rules() -> RuleTable {
    RuleTable::new(vec![
        KeywordRule::new("react", ["react", "component", "hook"]),
        KeywordRule::new("performance", ["slow", "fast", "optimize", "performance"]),
        KeywordRule::new("api", ["api", "rest", "graphql", "backend"]),
    ])
}

pub fn copilot_rules() -> RuleTable {
    RuleTable::new(vec![
        KeywordRule::new("react", ["react", "hook", "component"]),
        KeywordRule::new("next", ["next", "server", "render"]),
        KeywordRule::new("css", ["css", "style", "layout"]),
    ])
}

pub fn interview_knowledge_base() -> KnowledgeBase {
    let fallback = Suggestion::new(
        "General Interview Helper",
        [
            "Keep answers structured (STAR method).",
            "If you don't know, admit it but explain how you'd find out.",
            "Maintain eye contact with the camera.",
        ],
        100,
        ["System", "Ready"],
    )
    .with_id("def-1")
    .with_description("Listening for technical keywords...");

    KnowledgeBase::with_fallback(
        fallback,
        [
            (
                "react",
                Suggestion::new(
                    "React Core Concepts",
                    [
                        "Virtual DOM: Minimizes direct DOM manipulation for performance.",
                        "Hooks: Use 'useEffect' for side effects and 'useState' for data.",
                        "Unidirectional Data Flow: Data flows down from parent to child.",
                    ],
                    98,
                    ["React", "Frontend", "Virtual DOM"],
                )
                .with_id("react-1")
                .with_description("Key concepts to mention when asked about React basics."),
            ),
            (
                "performance",
                Suggestion::new(
                    "Web Performance Optimization",
                    [
                        "Code Splitting: Use React.lazy() to load chunks on demand.",
                        "Image Optimization: Use Next.js <Image> component.",
                        "Caching: Implement SWR or TanStack Query for server state.",
                    ],
                    94,
                    ["Performance", "Optimization", "Lighthouse"],
                )
                .with_id("perf-1")
                .with_description("Strategies to optimize frontend speed."),
            ),
            (
                "api",
                Suggestion::new(
                    "REST vs GraphQL",
                    [
                        "REST: Standard HTTP methods, caching is easier.",
                        "GraphQL: Fetch exact data needed, avoids over-fetching.",
                        "Mention standard status codes (200, 404, 500).",
                    ],
                    92,
                    ["Backend", "API", "Architecture"],
                )
                .with_id("api-1")
                .with_description("Comparison of API architectural styles."),
            ),
        ],
    )
}

pub fn copilot_knowledge_base() -> KnowledgeBase {
    let fallback = Suggestion::new(
        "General Interview Tip",
        [
            "Use the STAR method (Situation, Task, Action, Result).",
            "Keep answers concise but detailed.",
            "Ask clarifying questions if stuck.",
        ],
        85,
        ["Soft Skills", "General"],
    );

    KnowledgeBase::with_fallback(
        fallback,
        [
            (
                "react",
                Suggestion::new(
                    "React Core Concepts",
                    [
                        "Virtual DOM ensures efficient updates.",
                        "Hooks (useState, useEffect) manage state/lifecycle.",
                        "One-way data flow (Parent to Child).",
                    ],
                    98,
                    ["React", "Frontend", "Virtual DOM"],
                ),
            ),
            (
                "next",
                Suggestion::new(
                    "Next.js Rendering Methods",
                    [
                        "SSR (Server-Side Rendering) for dynamic data.",
                        "SSG (Static Generation) for best performance.",
                        "ISR (Incremental Static Regeneration) for hybrid.",
                    ],
                    95,
                    ["Next.js", "SSR", "Performance"],
                ),
            ),
            (
                "css",
                Suggestion::new(
                    "Modern CSS Techniques",
                    [
                        "Flexbox for 1D layouts, Grid for 2D layouts.",
                        "Tailwind CSS for utility-first styling.",
                        "CSS Variables for theming support.",
                    ],
                    92,
                    ["CSS", "Design", "Flexbox"],
                ),
            ),
        ],
    )
}
