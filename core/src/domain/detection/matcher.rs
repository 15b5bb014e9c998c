//! Term matching over ingredient text.
//!
//! Terms and text are compared after Unicode lower-casing. The default
//! [`MatchMode::Substring`] reports a term wherever it occurs, including
//! inside a longer word ("egg" matches "eggplant").
//! [`MatchMode::WholeWord`] additionally requires the occurrence to be
//! bounded by non-alphanumeric characters or the ends of the text.

use std::{collections::BTreeSet, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    allergen::entities::AllergyDefinition, common::entities::app_errors::CoreError,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    #[default]
    Substring,
    WholeWord,
}

impl MatchMode {
    pub fn as_str(&self) -> &str {
        match self {
            MatchMode::Substring => "substring",
            MatchMode::WholeWord => "whole-word",
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "substring" => Ok(MatchMode::Substring),
            "whole-word" | "whole_word" => Ok(MatchMode::WholeWord),
            other => Err(CoreError::Configuration(format!(
                "unknown match mode '{other}', expected 'substring' or 'whole-word'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TermMatcher {
    mode: MatchMode,
}

impl TermMatcher {
    pub fn new(mode: MatchMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Identifiers of every allergy with at least one term present in at
    /// least one ingredient text. The result does not depend on the order of
    /// `ingredient_texts` or `allergies`.
    pub fn detect<S: AsRef<str>>(
        &self,
        ingredient_texts: &[S],
        allergies: &[AllergyDefinition],
    ) -> BTreeSet<String> {
        let mut detected = BTreeSet::new();

        for text in ingredient_texts {
            let text = text.as_ref().to_lowercase();

            for allergy in allergies {
                if detected.contains(&allergy.id) {
                    continue;
                }

                if allergy
                    .terms
                    .iter()
                    .any(|term| self.contains_term(&text, &term.to_lowercase()))
                {
                    detected.insert(allergy.id.clone());
                }
            }
        }

        detected
    }

    /// Both arguments must already be lower-cased.
    fn contains_term(&self, text: &str, term: &str) -> bool {
        match self.mode {
            MatchMode::Substring => text.contains(term),
            MatchMode::WholeWord => contains_whole_word(text, term),
        }
    }
}

fn contains_whole_word(text: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }

    let is_boundary = |c: Option<char>| !c.is_some_and(char::is_alphanumeric);

    let mut from = 0;
    while let Some(offset) = text[from..].find(term) {
        let start = from + offset;
        let end = start + term.len();

        if is_boundary(text[..start].chars().next_back()) && is_boundary(text[end..].chars().next())
        {
            return true;
        }

        // Overlapping occurrences are possible, so advance by one character only.
        from = start + text[start..].chars().next().map_or(1, char::len_utf8);
    }

    false
}
