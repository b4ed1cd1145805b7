use std::cmp::Ordering;
use std::collections::BinaryHeap;

use strsim::jaro_winkler;

use crate::error::{CatalogError, Result};

const CUTOFF: f64 = 0.75;
pub const CLEAR_LEAD: f64 = 0.1;

#[derive(PartialEq)]
struct ScoredStr {
    score: f64,
    string: String,
}

impl Eq for ScoredStr {}

impl Ord for ScoredStr {
    fn cmp(&self, other: &Self) -> Ordering {
        other.score.total_cmp(&self.score)
    }
}

impl PartialOrd for ScoredStr {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn scored_matches(word: &str, possibilities: &[String], cutoff: f64) -> Vec<ScoredStr> {
    let mut heap: BinaryHeap<ScoredStr> = BinaryHeap::new();

    for possibility in possibilities {
        let score = jaro_winkler(word, &possibility.to_lowercase());
        if score >= cutoff {
            heap.push(ScoredStr {
                score,
                string: possibility.clone(),
            });
        }
    }

    heap.into_sorted_vec()
}

/// Candidates scoring at least `cutoff`, best first.
pub fn get_close_matches(word: &str, possibilities: &[String], cutoff: f64) -> Vec<String> {
    scored_matches(word, possibilities, cutoff)
        .into_iter()
        .map(|scored| scored.string)
        .collect()
}

/// Resolves a user's choice against the loaded names: a case-insensitive
/// exact match wins, otherwise the best close match is accepted when it is
/// the only one or leads the runner-up by [`CLEAR_LEAD`].
pub fn get_match(query: &str, items: &[String], kind: &'static str) -> Result<String> {
    let query = query.trim().to_lowercase();

    if let Some(item) = items.iter().find(|item| item.to_lowercase() == query) {
        return Ok(item.clone());
    }

    let mut matches = scored_matches(&query, items, CUTOFF);
    let clear_winner = match matches.as_slice() {
        [_] => true,
        [best, runner_up, ..] => best.score - runner_up.score >= CLEAR_LEAD,
        [] => false,
    };

    if matches.is_empty() {
        Err(CatalogError::NoMatch { kind, query })
    } else if clear_winner {
        Ok(matches.remove(0).string)
    } else {
        Err(CatalogError::Ambiguous {
            query,
            candidates: matches.into_iter().map(|scored| scored.string).collect(),
        })
    }
}
