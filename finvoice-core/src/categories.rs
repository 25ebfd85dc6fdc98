//! Keyword category table and substring categorization.
//!
//! Categories are checked in table order and keywords in list order; the
//! first keyword contained in the lower-cased description decides. A
//! description matching nothing lands in the fallback category.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::error::{Error, Result};

pub const FALLBACK_CATEGORY: &str = "misc";

/// One category and the keywords that select it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryRule {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl CategoryRule {
    pub fn new(name: impl Into<String>, keywords: &[&str]) -> Self {
        Self {
            name: name.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Ordered, immutable category table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    rules: Vec<CategoryRule>,
    fallback: String,
}

impl CategoryTable {
    /// Build a table from ordered rules.
    ///
    /// Keywords are lower-cased. Names must be unique ignoring case. The
    /// fallback is appended with no keywords when the rules don't already
    /// name it; a listed fallback must have none.
    pub fn new(rules: Vec<CategoryRule>, fallback: impl Into<String>) -> Result<Self> {
        let fallback = fallback.into();
        if fallback.trim().is_empty() {
            return Err(Error::invalid_input("fallback category name is empty"));
        }

        let mut seen = HashSet::new();
        let mut normalized = Vec::with_capacity(rules.len() + 1);
        for rule in rules {
            let name = rule.name.trim().to_string();
            if name.is_empty() {
                return Err(Error::invalid_input("category name is empty"));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(Error::invalid_input(format!("duplicate category '{name}'")));
            }
            let mut keywords = Vec::with_capacity(rule.keywords.len());
            for kw in rule.keywords {
                let kw = kw.to_lowercase();
                if kw.trim().is_empty() {
                    return Err(Error::invalid_input(format!(
                        "category '{name}' has an empty keyword"
                    )));
                }
                keywords.push(kw);
            }
            if name == fallback && !keywords.is_empty() {
                return Err(Error::invalid_input(format!(
                    "fallback category '{name}' cannot have keywords"
                )));
            }
            normalized.push(CategoryRule { name, keywords });
        }

        if !normalized.iter().any(|r| r.name == fallback) {
            if seen.contains(&fallback.to_lowercase()) {
                return Err(Error::invalid_input(format!(
                    "duplicate category '{fallback}'"
                )));
            }
            normalized.push(CategoryRule {
                name: fallback.clone(),
                keywords: Vec::new(),
            });
        }

        Ok(Self {
            rules: normalized,
            fallback,
        })
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn rules(&self) -> &[CategoryRule] {
        &self.rules
    }

    /// Category names in table order
    pub fn names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name.as_str()).collect()
    }

    /// Name and keyword list pairs in table order
    pub fn keywords_by_category(&self) -> Vec<(&str, &[String])> {
        self.rules
            .iter()
            .map(|r| (r.name.as_str(), r.keywords.as_slice()))
            .collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.iter().any(|r| r.name == name)
    }

    /// Return the first category with a keyword contained in `description`.
    pub fn categorize(&self, description: &str) -> &str {
        let desc = description.to_lowercase();
        for rule in &self.rules {
            if let Some(kw) = rule.keywords.iter().find(|kw| desc.contains(kw.as_str())) {
                debug!("'{}' matched keyword '{}' -> {}", description, kw, rule.name);
                return &rule.name;
            }
        }
        debug!("Falling back to '{}' for '{}'", self.fallback, description);
        &self.fallback
    }
}

impl Default for CategoryTable {
    fn default() -> Self {
        let rules = vec![
            CategoryRule::new(
                "food",
                &[
                    "grocery", "restaurant", "dinner", "lunch", "breakfast", "food", "meal",
                    "snack", "coffee", "pizza", "burger",
                ],
            ),
            CategoryRule::new(
                "travel",
                &[
                    "uber", "lyft", "taxi", "flight", "hotel", "airbnb", "car rental", "gas",
                    "fuel", "train", "bus", "travel",
                ],
            ),
            CategoryRule::new(
                "bills",
                &[
                    "rent", "electricity", "water", "internet", "phone", "utility",
                    "insurance", "bill", "subscription",
                ],
            ),
            CategoryRule::new(
                "entertainment",
                &[
                    "movie", "netflix", "spotify", "concert", "game", "entertainment", "music",
                    "show", "theater", "streaming",
                ],
            ),
            CategoryRule::new(
                "shopping",
                &[
                    "amazon", "clothing", "shoes", "electronics", "furniture", "shopping",
                    "store", "mall", "online",
                ],
            ),
            CategoryRule::new(
                "health",
                &[
                    "doctor", "medicine", "pharmacy", "hospital", "clinic", "health", "medical",
                    "fitness", "gym",
                ],
            ),
            CategoryRule::new(
                "education",
                &[
                    "book", "course", "tuition", "school", "college", "university", "education",
                    "learning",
                ],
            ),
        ];
        Self {
            rules: rules
                .into_iter()
                .chain(std::iter::once(CategoryRule::new(FALLBACK_CATEGORY, &[])))
                .collect(),
            fallback: FALLBACK_CATEGORY.to_string(),
        }
    }
}

/// Categorize a description against `table`.
pub fn categorize<'a>(description: &str, table: &'a CategoryTable) -> &'a str {
    table.categorize(description)
}
