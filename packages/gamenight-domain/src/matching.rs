use strsim::levenshtein;

use crate::types::{ScoredCandidate, SearchCandidate};

/// Detail payloads are heavy, so one resolution fetches at most this many
/// candidates in its batched call.
pub const MAX_CANDIDATES: usize = 5;

/// Edit distance between candidate name and query, case-insensitively.
pub fn score(name: &str, query: &str) -> usize {
	levenshtein(&name.to_lowercase(), &query.to_lowercase())
}

/// Scores every candidate against the query and keeps the closest matches,
/// best first. The sort is stable: candidates with equal scores retain the
/// order the search endpoint returned them in.
pub fn rank_candidates(candidates: Vec<SearchCandidate>, query: &str) -> Vec<ScoredCandidate> {
	let mut scored = candidates
		.into_iter()
		.map(|candidate| {
			let score = score(&candidate.name, query);

			ScoredCandidate { id: candidate.id, name: candidate.name, score }
		})
		.collect::<Vec<_>>();

	scored.sort_by_key(|candidate| candidate.score);
	scored.truncate(MAX_CANDIDATES);

	scored
}
