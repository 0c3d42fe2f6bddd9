use crate::types::{DetailRecord, ResolvedMetadata};

/// Name of the rank-list entry that carries the overall board-game rank.
pub const OVERALL_RANK_NAME: &str = "boardgame";
/// Link type that marks a category link.
pub const CATEGORY_LINK_KIND: &str = "boardgamecategory";

/// The record's overall catalog rank, when it has a numeric one. Expansions
/// and unranked accessories have none.
pub fn overall_rank(record: &DetailRecord) -> Option<i64> {
	record.ranks.iter().find(|rank| rank.name == OVERALL_RANK_NAME).and_then(|rank| rank.value)
}

/// Picks the record with the numerically lowest overall rank (rank 1 is the
/// most popular entry). Records without a parseable overall rank never win;
/// on a tie the earliest record is kept.
pub fn select_best(records: &[DetailRecord]) -> Option<&DetailRecord> {
	let mut best: Option<(&DetailRecord, i64)> = None;

	for record in records {
		let Some(rank) = overall_rank(record) else {
			continue;
		};

		if best.map(|(_, best_rank)| rank < best_rank).unwrap_or(true) {
			best = Some((record, rank));
		}
	}

	best.map(|(record, _)| record)
}

pub fn round_to_tenth(value: f64) -> f64 {
	(value * 10.0).round() / 10.0
}

/// Projects one detail record into the normalized output shape. Every source
/// field is optional; categories follow the record's own link order.
pub fn project(record: &DetailRecord) -> ResolvedMetadata {
	ResolvedMetadata {
		image: record.image.clone(),
		playtime_minutes: record.playtime_minutes,
		complexity: record.average_weight.map(round_to_tenth),
		average_rating: record.average_rating.map(round_to_tenth),
		categories: record
			.links
			.iter()
			.filter(|link| link.kind == CATEGORY_LINK_KIND)
			.map(|link| link.value.clone())
			.collect(),
	}
}
