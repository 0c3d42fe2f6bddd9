/// One hit from the catalog search endpoint, before scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
	pub id: String,
	pub name: String,
}

/// A search candidate with its edit-distance score. Lower is closer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate {
	pub id: String,
	pub name: String,
	pub score: usize,
}

/// Typed projection of one catalog detail item. The upstream document is
/// best-effort; every branch that can be missing on the wire is optional here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailRecord {
	pub id: String,
	pub image: Option<String>,
	pub playtime_minutes: Option<u32>,
	pub average_rating: Option<f64>,
	pub average_weight: Option<f64>,
	pub ranks: Vec<RankEntry>,
	pub links: Vec<CatalogLink>,
}

/// One entry of a detail item's rank list. `value` is `None` when the catalog
/// reports the entry as unranked or the wire value is not numeric.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankEntry {
	pub name: String,
	pub value: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogLink {
	pub kind: String,
	pub value: String,
}

/// The normalized record a resolution produces. Serialized verbatim into the
/// caller's event document; absent fields are omitted rather than null.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedMetadata {
	#[serde(skip_serializing_if = "Option::is_none")]
	pub image: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub playtime_minutes: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub complexity: Option<f64>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub average_rating: Option<f64>,
	pub categories: Vec<String>,
}
