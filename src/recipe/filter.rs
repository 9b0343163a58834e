//! Ingredient filtering
//!
//! A query is a comma-separated list of ingredient terms. A recipe matches
//! when its ingredient text contains every term, case-insensitively, as a
//! plain substring. There is no ranking: matches keep the input order.

use super::model::Recipe;

/// Lowercased, trimmed terms parsed from raw user input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterQuery {
    terms: Vec<String>,
}

impl FilterQuery {
    /// Parse raw input such as `"Banana, Milk"`.
    ///
    /// Empty segments (`""`, `"a,,b"`, `" , "`) are dropped. An empty term
    /// would match every recipe anyway, so dropping it changes nothing, and a
    /// query with no terms at all matches everything.
    pub fn parse(raw: &str) -> Self {
        let terms = raw
            .split(',')
            .map(|term| term.trim().to_lowercase())
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// True when the query places no constraint on results
    pub fn is_blank(&self) -> bool {
        self.terms.is_empty()
    }

    /// Check whether every term occurs in the recipe's ingredient text
    pub fn matches(&self, recipe: &Recipe) -> bool {
        let haystack = recipe.ingredients().to_lowercase();
        self.terms.iter().all(|term| haystack.contains(term.as_str()))
    }

    /// Apply the query to a recipe list, preserving order
    pub fn apply<'a, I>(&self, recipes: I) -> Vec<Recipe>
    where
        I: IntoIterator<Item = &'a Recipe>,
    {
        recipes.into_iter().filter(|recipe| self.matches(recipe)).cloned().collect()
    }
}

/// Filter `recipes` by the comma-separated ingredient terms in `raw_query`
pub fn filter(recipes: &[Recipe], raw_query: &str) -> Vec<Recipe> {
    FilterQuery::parse(raw_query).apply(recipes)
}
