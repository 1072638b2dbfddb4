use super::{
    grid::{poster_grid, DEFAULT_COLUMNS},
    page::{Block, DetailsPanel, Page},
};
use crate::{models::MovieId, services::MovieCatalog};

const NO_RECOMMENDATIONS: &str = "No recommendations available.";

/// Details view for one movie, followed by its recommendations
pub async fn render(id: &MovieId, catalog: &MovieCatalog) -> Page {
    let mut page = Page::new();
    page.push(Block::BackButton);

    let details = match catalog.movie_details(id).await {
        Ok(details) => details,
        Err(e) => {
            tracing::warn!(movie_id = %id, error = %e, "Movie details unavailable");
            page.error("Failed to load movie details.");
            return page;
        }
    };

    page.push(Block::Details(DetailsPanel::from(&details)));
    page.push(Block::Divider);
    page.push(Block::Subheader("Recommendations".to_string()));

    let bundle = match catalog.recommendations(details.display_title()).await {
        Ok(bundle) => bundle,
        Err(e) => {
            tracing::warn!(movie_id = %id, error = %e, "Recommendations unavailable");
            page.info(NO_RECOMMENDATIONS);
            return page;
        }
    };

    if bundle.is_empty() {
        page.info(NO_RECOMMENDATIONS);
        return page;
    }

    if !bundle.tfidf_recommendations.is_empty() {
        page.push(Block::Label("Similar Movies".to_string()));
        poster_grid(&mut page, bundle.tfidf_recommendations, DEFAULT_COLUMNS);
    }

    if !bundle.genre_recommendations.is_empty() {
        page.push(Block::Label("More Like This".to_string()));
        poster_grid(&mut page, bundle.genre_recommendations, DEFAULT_COLUMNS);
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::services::client::MockJsonSource;
    use crate::ui::page::NoticeLevel;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn source_with(details: Option<Value>, bundle: Option<Value>) -> MockJsonSource {
        let mut source = MockJsonSource::new();
        source
            .expect_get_json()
            .withf(|request| request.path.starts_with("/movie/id/"))
            .returning(move |_| details.clone().ok_or(AppError::UpstreamStatus(404)));
        source
            .expect_get_json()
            .withf(|request| request.path == "/movie/search")
            .returning(move |_| bundle.clone().ok_or(AppError::UpstreamStatus(502)));
        source
    }

    #[tokio::test]
    async fn test_details_failure_stops_rendering() {
        let catalog = MovieCatalog::new(Arc::new(source_with(None, None)));
        let page = render(&MovieId::Numeric(42), &catalog).await;

        assert_eq!(page.blocks[0], Block::BackButton);
        let notices = page.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Failed to load movie details.");
        assert_eq!(page.blocks.len(), 2);
    }

    #[tokio::test]
    async fn test_details_panel_fields() {
        let details = json!({
            "title": "X",
            "genres": [{"name": "Drama"}, {"name": "War"}],
            "poster_url": "https://img/x.jpg"
        });
        let catalog = MovieCatalog::new(Arc::new(source_with(Some(details), None)));
        let page = render(&MovieId::Numeric(42), &catalog).await;

        let panel = page
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Details(panel) => Some(panel),
                _ => None,
            })
            .unwrap();
        assert_eq!(panel.title, "X");
        assert_eq!(panel.genres, "Drama, War");
        assert_eq!(panel.release_date, "-");
        assert_eq!(panel.overview, "No overview available.");
        assert_eq!(panel.poster_url.as_deref(), Some("https://img/x.jpg"));
    }

    #[tokio::test]
    async fn test_similar_movies_without_more_like_this() {
        let details = json!({"title": "X"});
        let bundle = json!({
            "tfidf_recommendations": [{"tmdb": {"tmdb_id": 5, "title": "Y", "poster_url": "u"}}],
            "genre_recommendations": []
        });
        let catalog = MovieCatalog::new(Arc::new(source_with(Some(details), Some(bundle))));
        let page = render(&MovieId::Numeric(42), &catalog).await;

        assert!(page.has_label("Similar Movies"));
        assert!(!page.has_label("More Like This"));
        let grids = page.grids();
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].len(), 1);
        assert_eq!(grids[0][0].title, "Y");
        assert!(page.notices().is_empty());
    }

    #[tokio::test]
    async fn test_both_recommendation_lists() {
        let details = json!({"title": "X"});
        let bundle = json!({
            "tfidf_recommendations": [{"tmdb": {"tmdb_id": 5, "title": "Y"}}],
            "genre_recommendations": [{"tmdb_id": 6, "title": "Z"}, {"tmdb_id": 7, "title": "W"}]
        });
        let catalog = MovieCatalog::new(Arc::new(source_with(Some(details), Some(bundle))));
        let page = render(&MovieId::Numeric(42), &catalog).await;

        assert!(page.has_label("Similar Movies"));
        assert!(page.has_label("More Like This"));
        let grids = page.grids();
        assert_eq!(grids[1].len(), 2);
    }

    #[tokio::test]
    async fn test_tfidf_entries_without_id_hide_section() {
        let details = json!({"title": "X"});
        let bundle = json!({
            "tfidf_recommendations": [{"tmdb": {"title": "No id"}}, {"tmdb": null}],
            "genre_recommendations": [{"tmdb_id": 6, "title": "Z"}]
        });
        let catalog = MovieCatalog::new(Arc::new(source_with(Some(details), Some(bundle))));
        let page = render(&MovieId::Numeric(42), &catalog).await;

        assert!(!page.has_label("Similar Movies"));
        assert!(page.has_label("More Like This"));
    }

    #[tokio::test]
    async fn test_bundle_failure_shows_info() {
        let details = json!({"title": "X"});
        let catalog = MovieCatalog::new(Arc::new(source_with(Some(details), None)));
        let page = render(&MovieId::Numeric(42), &catalog).await;

        let notices = page.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(notices[0].message, "No recommendations available.");
        assert!(!page.has_label("Similar Movies"));
        assert!(!page.has_label("More Like This"));
    }
}
