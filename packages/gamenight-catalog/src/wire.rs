//! Wire-format mapping for the catalog's XML responses.
//!
//! The upstream schema is versionless and best-effort. Every branch below is
//! optional or defaulted, so a missing element or attribute degrades to an
//! absent field instead of a parse error; only a document that is not XML at
//! all fails. Nothing outside this module sees the wire shapes.

use serde::Deserialize;

use gamenight_domain::types::{CatalogLink, DetailRecord, RankEntry, SearchCandidate};

use crate::Result;

#[derive(Debug, Deserialize)]
struct SearchDoc {
	#[serde(default, rename = "item")]
	items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
	#[serde(default, rename = "@id")]
	id: String,
	#[serde(default, rename = "name")]
	names: Vec<NameElem>,
}

#[derive(Debug, Deserialize)]
struct NameElem {
	#[serde(default, rename = "@value")]
	value: String,
}

#[derive(Debug, Deserialize)]
struct DetailDoc {
	#[serde(default, rename = "item")]
	items: Vec<DetailItem>,
}

#[derive(Debug, Deserialize)]
struct DetailItem {
	#[serde(default, rename = "@id")]
	id: String,
	#[serde(default)]
	image: Option<String>,
	#[serde(default)]
	playingtime: Option<ValueAttr>,
	#[serde(default)]
	statistics: Option<Statistics>,
	#[serde(default, rename = "link")]
	links: Vec<LinkElem>,
}

#[derive(Debug, Deserialize)]
struct ValueAttr {
	#[serde(default, rename = "@value")]
	value: String,
}

#[derive(Debug, Deserialize)]
struct Statistics {
	#[serde(default)]
	ratings: Option<Ratings>,
}

#[derive(Debug, Deserialize)]
struct Ratings {
	#[serde(default)]
	average: Option<ValueAttr>,
	#[serde(default)]
	averageweight: Option<ValueAttr>,
	#[serde(default)]
	ranks: Option<RankList>,
}

#[derive(Debug, Deserialize)]
struct RankList {
	#[serde(default, rename = "rank")]
	entries: Vec<RankElem>,
}

#[derive(Debug, Deserialize)]
struct RankElem {
	#[serde(default, rename = "@name")]
	name: String,
	#[serde(default, rename = "@value")]
	value: String,
}

#[derive(Debug, Deserialize)]
struct LinkElem {
	#[serde(default, rename = "@type")]
	kind: String,
	#[serde(default, rename = "@value")]
	value: String,
}

pub fn parse_search_response(xml: &str) -> Result<Vec<SearchCandidate>> {
	let doc: SearchDoc = quick_xml::de::from_str(xml)?;
	let candidates = doc
		.items
		.into_iter()
		.filter_map(|item| {
			if item.id.is_empty() {
				return None;
			}

			// An item may list alternate names; the first is the display name.
			let name = item.names.into_iter().next()?.value;

			Some(SearchCandidate { id: item.id, name })
		})
		.collect();

	Ok(candidates)
}

pub fn parse_detail_response(xml: &str) -> Result<Vec<DetailRecord>> {
	let doc: DetailDoc = quick_xml::de::from_str(xml)?;

	Ok(doc.items.into_iter().map(into_record).collect())
}

fn into_record(item: DetailItem) -> DetailRecord {
	let ratings = item.statistics.and_then(|statistics| statistics.ratings);
	let (average_rating, average_weight, ranks) = match ratings {
		Some(ratings) => (
			ratings.average.and_then(|attr| attr.value.parse().ok()),
			ratings.averageweight.and_then(|attr| attr.value.parse().ok()),
			ratings
				.ranks
				.map(|list| list.entries)
				.unwrap_or_default()
				.into_iter()
				.map(|rank| RankEntry { name: rank.name, value: rank.value.parse().ok() })
				.collect(),
		),
		None => (None, None, Vec::new()),
	};

	DetailRecord {
		id: item.id,
		image: item.image.filter(|url| !url.trim().is_empty()),
		playtime_minutes: item.playingtime.and_then(|attr| attr.value.parse().ok()),
		average_rating,
		average_weight,
		ranks,
		links: item
			.links
			.into_iter()
			.map(|link| CatalogLink { kind: link.kind, value: link.value })
			.collect(),
	}
}
