//! Guard for overlapping resolutions of the same form field.
//!
//! Responses do not necessarily arrive in request order. A ticket taken
//! before the fetch lets the caller detect that a newer attempt started while
//! this one was in flight, so a stale response never overwrites a newer one.

use std::sync::atomic::{AtomicU64, Ordering};

use gamenight_domain::types::ResolvedMetadata;

use crate::ResolverService;

#[derive(Debug, Default)]
pub struct ResolutionSequence {
	latest: AtomicU64,
}

/// Handle for one resolution attempt. Stale once a newer attempt begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionTicket(u64);

impl ResolutionSequence {
	pub fn new() -> Self {
		Self::default()
	}

	/// Starts a new attempt, invalidating every earlier ticket.
	pub fn begin(&self) -> ResolutionTicket {
		ResolutionTicket(self.latest.fetch_add(1, Ordering::SeqCst) + 1)
	}

	pub fn is_current(&self, ticket: ResolutionTicket) -> bool {
		self.latest.load(Ordering::SeqCst) == ticket.0
	}
}

impl ResolverService {
	/// Like [`ResolverService::resolve_game_metadata`], but tied to a
	/// sequence: when a newer attempt began while this one was fetching, the
	/// response is discarded and `None` is returned.
	pub async fn resolve_game_metadata_latest(
		&self,
		sequence: &ResolutionSequence,
		title: &str,
	) -> Option<ResolvedMetadata> {
		let ticket = sequence.begin();
		let resolved = self.resolve_game_metadata(title).await;

		if !sequence.is_current(ticket) {
			return None;
		}

		resolved
	}
}
