use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Display;

use crate::error::{AppError, AppResult};

/// Identifier of a movie, as the recommendation API hands it out
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieId {
    /// TMDB numeric ID (e.g. 27205)
    Numeric(i64),
    /// Any other identifier the API uses
    Text(String),
}

impl MovieId {
    /// Whether the ID can be used to look a movie up (non-zero, non-empty)
    pub fn is_usable(&self) -> bool {
        match self {
            MovieId::Numeric(id) => *id != 0,
            MovieId::Text(id) => !id.is_empty(),
        }
    }

    /// Encodes the ID for a form field, keeping the number/string distinction
    pub fn to_form_value(&self) -> String {
        match self {
            MovieId::Numeric(id) => id.to_string(),
            MovieId::Text(id) => Value::String(id.clone()).to_string(),
        }
    }

    /// Decodes an ID written by [`MovieId::to_form_value`]
    pub fn from_form_value(raw: &str) -> AppResult<Self> {
        serde_json::from_str::<MovieId>(raw.trim())
            .ok()
            .filter(MovieId::is_usable)
            .ok_or_else(|| AppError::InvalidInput(format!("Invalid movie id {}", raw)))
    }
}

impl Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovieId::Numeric(id) => write!(f, "{}", id),
            MovieId::Text(id) => write!(f, "{}", id),
        }
    }
}

impl From<i64> for MovieId {
    fn from(id: i64) -> Self {
        MovieId::Numeric(id)
    }
}

/// Minimal movie representation shown in a poster grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Card {
    pub id: MovieId,
    pub title: String,
    pub poster_url: Option<String>,
}

impl Card {
    pub fn new(id: MovieId, title: impl Into<String>, poster_url: Option<String>) -> Self {
        Self {
            id,
            title: title.into(),
            poster_url,
        }
    }
}

// ============================================================================
// Recommendation API card shapes
// ============================================================================

/// Card as served by `/home`, genre recommendations and nested `tmdb` objects
#[derive(Debug, Clone, Deserialize)]
pub struct ApiCard {
    #[serde(default)]
    pub tmdb_id: Option<MovieId>,
    #[serde(default)]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl ApiCard {
    /// Converts into a `Card`, or `None` when the ID or title is missing
    pub fn into_card(self) -> Option<Card> {
        let id = self.tmdb_id.or(self.id).filter(MovieId::is_usable)?;
        let title = self.title.filter(|t| !t.is_empty())?;

        Some(Card {
            id,
            title,
            poster_url: self.poster_url.filter(|p| !p.is_empty()),
        })
    }
}

/// Raw TMDB search result as relayed by `/tmdb/search`
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbSearchResult {
    #[serde(default)]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl TmdbSearchResult {
    /// Converts into a `Card`, prefixing `poster_path` with the image CDN base
    pub fn into_card(self, image_base: &str) -> Option<Card> {
        let id = self.id.filter(MovieId::is_usable)?;
        let title = self.title.filter(|t| !t.is_empty())?;
        let poster_url = self
            .poster_path
            .filter(|p| !p.is_empty())
            .map(|p| format!("{}{}", image_base, p));

        Some(Card {
            id,
            title,
            poster_url,
        })
    }
}

/// Parses a JSON list of API cards, skipping entries that don't make a card
pub fn cards_from_list(entries: &[Value]) -> Vec<Card> {
    entries
        .iter()
        .filter_map(|entry| {
            serde_json::from_value::<ApiCard>(entry.clone())
                .ok()
                .and_then(ApiCard::into_card)
        })
        .collect()
}

/// Normalizes a `/tmdb/search` payload into at most `limit` cards
///
/// The endpoint answers either with a bare list of cards or with a raw TMDB
/// object carrying a `results` list.
pub fn cards_from_search_payload(payload: &Value, image_base: &str, limit: usize) -> AppResult<Vec<Card>> {
    match payload {
        Value::Array(entries) => Ok(cards_from_list(&entries[..entries.len().min(limit)])),
        Value::Object(map) => {
            let results = map.get("results").and_then(Value::as_array).ok_or_else(|| {
                AppError::MalformedPayload("Search response has no results list".to_string())
            })?;

            Ok(results
                .iter()
                .take(limit)
                .filter_map(|result| {
                    serde_json::from_value::<TmdbSearchResult>(result.clone())
                        .ok()
                        .and_then(|r| r.into_card(image_base))
                })
                .collect())
        }
        _ => Err(AppError::MalformedPayload(
            "Search response is neither a list nor an object".to_string(),
        )),
    }
}

/// Normalizes a `/home` payload into at most `limit` cards
pub fn cards_from_feed_payload(payload: &Value, limit: usize) -> AppResult<Vec<Card>> {
    let entries = payload
        .as_array()
        .ok_or_else(|| AppError::MalformedPayload("Home feed is not a list".to_string()))?;

    Ok(cards_from_list(&entries[..entries.len().min(limit)]))
}
