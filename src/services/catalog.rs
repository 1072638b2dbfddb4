use std::sync::Arc;

use crate::{
    config::TMDB_IMAGE_BASE,
    error::AppResult,
    models::{
        cards_from_feed_payload, cards_from_search_payload, Card, Category, MovieDetails, MovieId,
        RecommendationBundle,
    },
    services::client::{ApiRequest, JsonSource},
};

/// Cards shown per home feed or search
pub const FEED_LIMIT: usize = 12;
/// Size of each recommendation list requested for the details view
pub const RECOMMENDATION_LIMIT: usize = 6;

/// Typed access to the recommendation API endpoints
///
/// Maps each endpoint's payload onto the card and details models. Errors are
/// passed through untouched so the views can decide what to show instead.
#[derive(Clone)]
pub struct MovieCatalog {
    source: Arc<dyn JsonSource>,
    image_base: String,
}

impl MovieCatalog {
    pub fn new(source: Arc<dyn JsonSource>) -> Self {
        Self {
            source,
            image_base: TMDB_IMAGE_BASE.to_string(),
        }
    }

    /// `GET /home?category=..&limit=12`
    pub async fn home_feed(&self, category: Category) -> AppResult<Vec<Card>> {
        let request = ApiRequest::new("/home")
            .param("category", category)
            .param("limit", FEED_LIMIT);

        let payload = self.source.get_json(&request).await?;
        cards_from_feed_payload(&payload, FEED_LIMIT)
    }

    /// `GET /tmdb/search?query=..`
    pub async fn search(&self, query: &str) -> AppResult<Vec<Card>> {
        let request = ApiRequest::new("/tmdb/search").param("query", query);

        let payload = self.source.get_json(&request).await?;
        let cards = cards_from_search_payload(&payload, &self.image_base, FEED_LIMIT)?;

        tracing::info!(query = %query, results = cards.len(), "Movie search completed");
        Ok(cards)
    }

    /// `GET /movie/id/{id}`
    pub async fn movie_details(&self, id: &MovieId) -> AppResult<MovieDetails> {
        let segment = urlencoding::encode(&id.to_string()).into_owned();
        let request = ApiRequest::new(format!("/movie/id/{}", segment));

        let payload = self.source.get_json(&request).await?;
        MovieDetails::from_payload(&payload)
    }

    /// `GET /movie/search?query=<title>&tfidf_top_n=6&genre_limit=6`
    pub async fn recommendations(&self, title: &str) -> AppResult<RecommendationBundle> {
        let request = ApiRequest::new("/movie/search")
            .param("query", title)
            .param("tfidf_top_n", RECOMMENDATION_LIMIT)
            .param("genre_limit", RECOMMENDATION_LIMIT);

        let payload = self.source.get_json(&request).await?;
        let bundle = RecommendationBundle::from_payload(&payload)?;

        tracing::info!(
            title = %title,
            tfidf = bundle.tfidf_recommendations.len(),
            genre = bundle.genre_recommendations.len(),
            "Recommendations fetched"
        );
        Ok(bundle)
    }
}
