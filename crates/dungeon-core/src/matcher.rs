//! Resolving free-text tokens to entities.
//!
//! Matching happens in two steps. [`find_matches`] asks a [`NameMatcher`]
//! which candidates answer to the tokens and counts the distinct display
//! names among them. [`disambiguate`] then picks one entity or gives up:
//!
//! 1. no matches: not found;
//! 2. one match, or every match shares one name: the first match;
//! 3. exactly two names and one of them is the resolving agent's: the first
//!    match not named like the agent;
//! 4. anything else: ambiguous.

use std::collections::BTreeSet;

use dungeon_types::Name;
use dungeon_world::{Creature, Item};

/// Something with a display name.
pub trait Named {
    /// The display name.
    fn name(&self) -> &Name;
}

impl Named for Item {
    fn name(&self) -> &Name {
        &self.name
    }
}

impl Named for Creature {
    fn name(&self) -> &Name {
        &self.name
    }
}

/// The fuzzy name-match primitive.
pub trait NameMatcher {
    /// Whether `name` fully answers to `tokens`.
    fn is_complete_match(&self, name: &Name, tokens: &[&str]) -> bool;
}

/// Default matcher: case-insensitive word prefixes.
///
/// Every token must be a prefix of a different word of the singular name,
/// in any order. No tokens match every name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrefixMatcher;

impl NameMatcher for PrefixMatcher {
    fn is_complete_match(&self, name: &Name, tokens: &[&str]) -> bool {
        let mut words: Vec<String> = name
            .singular
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        tokens.iter().all(|token| {
            let token = token.to_lowercase();
            let found = words.iter().position(|word| word.starts_with(&token));
            found.is_some_and(|index| {
                words.remove(index);
                true
            })
        })
    }
}

/// The candidates that answered to a token list.
#[derive(Debug)]
pub struct MatchResult<'a, T> {
    /// Matches in candidate order.
    matches: Vec<&'a T>,
    /// Number of distinct display names among the matches.
    different_names: usize,
}

impl<'a, T: Named> MatchResult<'a, T> {
    /// Wrap a list of already-selected entities.
    pub fn from_entities(matches: Vec<&'a T>) -> Self {
        let different_names = count_distinct_names(matches.iter().copied());
        Self {
            matches,
            different_names,
        }
    }

    /// Number of matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Number of distinct display names among the matches.
    pub const fn different_names(&self) -> usize {
        self.different_names
    }

    /// Whether any match is named `name`.
    pub fn has_match_with_name(&self, name: &Name) -> bool {
        self.matches.iter().any(|entity| entity.name() == name)
    }

    /// The first match.
    pub fn first(&self) -> Option<&'a T> {
        self.matches.first().copied()
    }

    /// All matches in candidate order.
    pub fn matches(&self) -> &[&'a T] {
        &self.matches
    }
}

/// Outcome of disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<T> {
    /// Exactly one entity was chosen.
    Found(T),
    /// Nothing answered to the tokens.
    NotFound,
    /// Several differently named entities answered.
    Ambiguous,
}

impl<T> Selection<T> {
    /// Transform the chosen entity, if any.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Selection<U> {
        match self {
            Self::Found(value) => Selection::Found(f(value)),
            Self::NotFound => Selection::NotFound,
            Self::Ambiguous => Selection::Ambiguous,
        }
    }
}

/// Keep the candidates whose names fully answer to `tokens`.
pub fn find_matches<'a, T, I>(
    matcher: &dyn NameMatcher,
    candidates: I,
    tokens: &[&str],
) -> MatchResult<'a, T>
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let matches = candidates
        .into_iter()
        .filter(|entity| matcher.is_complete_match(entity.name(), tokens))
        .collect();
    MatchResult::from_entities(matches)
}

/// Pick a single entity out of a match result.
///
/// `agent_name` is the name of whoever is resolving the selection; pass
/// `None` when the agent cannot be among the candidates (item searches).
pub fn disambiguate<'a, T: Named>(
    result: &MatchResult<'a, T>,
    agent_name: Option<&Name>,
) -> Selection<&'a T> {
    let Some(first) = result.first() else {
        return Selection::NotFound;
    };
    if result.len() == 1 || result.different_names() == 1 {
        return Selection::Found(first);
    }
    let tie_with_agent = agent_name
        .filter(|name| result.different_names() == 2 && result.has_match_with_name(name));
    let Some(agent_name) = tie_with_agent else {
        return Selection::Ambiguous;
    };
    result
        .matches()
        .iter()
        .find(|entity| entity.name() != agent_name)
        .map_or(Selection::Ambiguous, |entity| Selection::Found(*entity))
}

/// Whether every candidate shares one display name.
///
/// An empty list does not qualify: there is nothing to pick.
pub fn all_share_one_name<'a, T, I>(candidates: I) -> bool
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    count_distinct_names(candidates) == 1
}

/// Number of distinct display names in `entities`.
fn count_distinct_names<'a, T, I>(entities: I) -> usize
where
    T: Named + 'a,
    I: IntoIterator<Item = &'a T>,
{
    entities
        .into_iter()
        .map(Named::name)
        .collect::<BTreeSet<&Name>>()
        .len()
}
