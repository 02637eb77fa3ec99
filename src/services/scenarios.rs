//! Built-in probe scenarios.
//!
//! A static table of (name, description, query, expectation) tuples,
//! iterated in table order. The queries exercise the endpoint's informal
//! grammar: plain terms, exact-match markers, wildcards, boolean
//! connectives, grouping and field scoping.

use crate::domain::models::{Rewrite, ScenarioInfo, SearchQuery};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// Items non-empty and the query executed as submitted.
    NonEmptyUnmodified,
    /// Items empty.
    Empty,
    /// Items non-empty, query unmodified, and every item's detail document
    /// contains the query's literal text.
    ExactMatch,
    /// Items empty, or the server rewrote the query into something else.
    /// Covers impossible exact phrases the server silently rewrites into a
    /// satisfiable query instead of returning an empty page.
    EmptyOrRewritten,
}

impl Expectation {
    pub fn label(&self) -> &'static str {
        match self {
            Expectation::NonEmptyUnmodified => "non_empty_unmodified",
            Expectation::Empty => "empty",
            Expectation::ExactMatch => "exact_match",
            Expectation::EmptyOrRewritten => "empty_or_rewritten",
        }
    }

    /// Whether evaluating this expectation requires fetching item details.
    pub fn needs_containment_check(&self) -> bool {
        matches!(self, Expectation::ExactMatch)
    }

    pub fn passes(&self, observed: &Observed) -> bool {
        match self {
            Expectation::NonEmptyUnmodified => {
                observed.items_found > 0 && observed.rewrite.is_none()
            }
            Expectation::Empty => observed.items_found == 0,
            Expectation::ExactMatch => {
                observed.items_found > 0
                    && observed.rewrite.is_none()
                    && observed.satisfied == Some(true)
            }
            Expectation::EmptyOrRewritten => {
                observed.items_found == 0 || observed.rewrite.is_some()
            }
        }
    }
}

/// What one executed scenario actually observed. `satisfied` is only
/// populated when the expectation required the containment check.
pub struct Observed {
    pub items_found: usize,
    pub rewrite: Option<Rewrite>,
    pub satisfied: Option<bool>,
}

pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub query: &'static str,
    pub expectation: Expectation,
}

impl Scenario {
    pub fn to_query(&self) -> SearchQuery {
        SearchQuery::new(self.query)
    }
}

pub const BUILTIN: &[Scenario] = &[
    Scenario {
        name: "good-query",
        description: "Plain keyword search returns matches",
        query: "Java",
        expectation: Expectation::NonEmptyUnmodified,
    },
    Scenario {
        name: "bad-query",
        description: "Nonsense keyword returns no matches",
        query: "Javapioakieoau",
        expectation: Expectation::Empty,
    },
    Scenario {
        name: "multiple-words",
        description: "Multi-word search returns matches",
        query: "Java проспект",
        expectation: Expectation::NonEmptyUnmodified,
    },
    Scenario {
        name: "exact-word",
        description: "Exact-match results must actually contain the word",
        query: "!хедхантер",
        expectation: Expectation::ExactMatch,
    },
    Scenario {
        name: "exact-phrase",
        description: "Exact match on a real phrase returns matches",
        query: "!\"Программист Python\"",
        expectation: Expectation::NonEmptyUnmodified,
    },
    Scenario {
        name: "wrong-exact-phrase",
        description: "Impossible exact phrase returns nothing, or the server rewrites it",
        query: "\"Java проспект\"",
        expectation: Expectation::EmptyOrRewritten,
    },
    Scenario {
        name: "good-wildcard",
        description: "Prefix wildcard returns matches",
        query: "Java*",
        expectation: Expectation::NonEmptyUnmodified,
    },
    Scenario {
        name: "bad-wildcard",
        description: "Nonsense prefix wildcard returns no matches",
        query: "Jtpglm*",
        expectation: Expectation::Empty,
    },
    Scenario {
        name: "good-or",
        description: "OR query returns matches",
        query: "Java OR Python",
        expectation: Expectation::NonEmptyUnmodified,
    },
    Scenario {
        name: "bad-or",
        description: "OR over nonsense terms returns no matches",
        query: "Jtvgln OR Plmfgtn",
        expectation: Expectation::Empty,
    },
    Scenario {
        name: "good-and",
        description: "AND query returns matches",
        query: "Java AND Python",
        expectation: Expectation::NonEmptyUnmodified,
    },
    Scenario {
        name: "bad-and",
        description: "AND over nonsense terms returns no matches",
        query: "Jtvgln AND Plmfgtn",
        expectation: Expectation::Empty,
    },
    Scenario {
        name: "good-not",
        description: "NOT query returns matches",
        query: "Java NOT PHP",
        expectation: Expectation::NonEmptyUnmodified,
    },
    Scenario {
        name: "bad-not",
        description: "NOT over nonsense terms returns no matches",
        query: "Jtvgln NOT Plmfgtn",
        expectation: Expectation::Empty,
    },
    Scenario {
        name: "good-complex",
        description: "Parenthesized boolean query returns matches",
        query: "(Java AND Python) NOT (PHP OR 1С)",
        expectation: Expectation::NonEmptyUnmodified,
    },
    Scenario {
        name: "bad-complex",
        description: "Parenthesized boolean query over nonsense terms returns no matches",
        query: "(Jtvgln AND Plmfgtn) NOT (PHP OR 1С)",
        expectation: Expectation::Empty,
    },
    Scenario {
        name: "good-fields",
        description: "Field-scoped query returns matches",
        query: "(Java OR Python) AND COMPANY_NAME:HeadHunter",
        expectation: Expectation::NonEmptyUnmodified,
    },
    Scenario {
        name: "bad-fields",
        description: "Malformed field scoping returns no matches",
        query: "HeadHunter AND COMPANY_NAME:(Java OR Python)",
        expectation: Expectation::Empty,
    },
];

pub fn catalog() -> Vec<ScenarioInfo> {
    BUILTIN
        .iter()
        .map(|s| ScenarioInfo {
            name: s.name.to_string(),
            description: s.description.to_string(),
            query: s.query.to_string(),
            expectation: s.expectation.label().to_string(),
        })
        .collect()
}
