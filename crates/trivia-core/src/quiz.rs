//! Quiz question selection.
//!
//! A quiz session is driven entirely by the client: each request carries
//! the full set of already-served question ids, and the server picks one
//! unseen question at random from the requested category. No session
//! state lives on the server between requests.

use std::collections::HashSet;

use rand::Rng;

use crate::types::Question;

/// Which questions are candidates for the next quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Draw from every category.
    AllCategories,
    /// Draw only from the given category.
    ByCategory(i64),
}

/// Pick one not-yet-served question uniformly at random.
///
/// The eligible pool is computed up front by removing every candidate
/// whose id appears in `previous_ids`, then a single `gen_range` draw
/// selects from it. An empty eligible pool means the quiz is exhausted
/// and `None` is returned.
pub fn next_question(
    candidates: Vec<Question>,
    previous_ids: &HashSet<i64>,
    rng: &mut impl Rng,
) -> Option<Question> {
    let mut eligible: Vec<Question> = candidates
        .into_iter()
        .filter(|q| !previous_ids.contains(&q.id))
        .collect();

    if eligible.is_empty() {
        return None;
    }

    let index = rng.gen_range(0..eligible.len());
    Some(eligible.swap_remove(index))
}
