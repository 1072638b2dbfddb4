use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::card::{cards_from_list, ApiCard, Card, MovieId};
use crate::error::{AppError, AppResult};

const OVERVIEW_PLACEHOLDER: &str = "No overview available.";
const MISSING_FIELD: &str = "-";

/// A genre attached to a movie
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Genre {
    #[serde(default)]
    pub name: Option<String>,
}

/// Movie details as returned by `/movie/id/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct MovieDetails {
    #[serde(default)]
    pub tmdb_id: Option<MovieId>,
    #[serde(default)]
    pub id: Option<MovieId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub genres: Option<Vec<Genre>>,
    #[serde(default)]
    pub poster_url: Option<String>,
}

impl MovieDetails {
    /// Parses a details payload; an empty or non-object body counts as no data
    pub fn from_payload(payload: &Value) -> AppResult<Self> {
        match payload {
            Value::Object(map) if !map.is_empty() => serde_json::from_value(payload.clone())
                .map_err(|e| AppError::MalformedPayload(format!("Invalid movie details: {}", e))),
            _ => Err(AppError::MalformedPayload(
                "Movie details response is empty".to_string(),
            )),
        }
    }

    /// Title used for display and for the recommendation query
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    pub fn display_release_date(&self) -> &str {
        self.release_date
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or(MISSING_FIELD)
    }

    /// Comma-joined genre names, or `-` when there are none
    pub fn display_genres(&self) -> String {
        let names: Vec<&str> = self
            .genres
            .iter()
            .flatten()
            .filter_map(|g| g.name.as_deref())
            .filter(|n| !n.is_empty())
            .collect();

        if names.is_empty() {
            MISSING_FIELD.to_string()
        } else {
            names.join(", ")
        }
    }

    pub fn display_overview(&self) -> &str {
        self.overview
            .as_deref()
            .filter(|o| !o.is_empty())
            .unwrap_or(OVERVIEW_PLACEHOLDER)
    }
}

/// Entry of `tfidf_recommendations`; the card lives in the nested `tmdb` object
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfRecommendation {
    #[serde(default)]
    pub tmdb: Option<ApiCard>,
}

/// Recommendations returned by `/movie/search`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RecommendationBundle {
    pub tfidf_recommendations: Vec<Card>,
    pub genre_recommendations: Vec<Card>,
}

impl RecommendationBundle {
    /// Builds a bundle from the raw `/movie/search` payload
    pub fn from_payload(payload: &Value) -> AppResult<Self> {
        let map = payload.as_object().ok_or_else(|| {
            AppError::MalformedPayload("Recommendation response is not an object".to_string())
        })?;

        let tfidf_recommendations = list_field(map.get("tfidf_recommendations"))
            .iter()
            .filter_map(|entry| {
                serde_json::from_value::<TfidfRecommendation>(entry.clone())
                    .ok()
                    .and_then(|rec| rec.tmdb)
                    .and_then(ApiCard::into_card)
            })
            .collect();

        let genre_recommendations = cards_from_list(list_field(map.get("genre_recommendations")));

        Ok(Self {
            tfidf_recommendations,
            genre_recommendations,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.tfidf_recommendations.is_empty() && self.genre_recommendations.is_empty()
    }
}

fn list_field(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
