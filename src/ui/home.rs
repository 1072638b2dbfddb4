use super::{
    grid::{poster_grid, DEFAULT_COLUMNS},
    page::{Block, Page},
};
use crate::{models::ViewState, services::MovieCatalog};

pub const APP_TITLE: &str = "🎬 Movie Recommender";

/// Queries shorter than this fall back to the category feed
const MIN_QUERY_CHARS: usize = 2;

/// Home view: search results when a query is typed, the category feed otherwise
pub async fn render(state: &ViewState, catalog: &MovieCatalog) -> Page {
    let mut page = Page::new();
    page.push(Block::Title(APP_TITLE.to_string()));
    page.push(Block::SearchForm {
        query: state.search_query.clone(),
        category: state.category,
    });

    let query = state.search_query.as_str();
    if query.chars().count() >= MIN_QUERY_CHARS {
        match catalog.search(query).await {
            Ok(cards) => poster_grid(&mut page, cards, DEFAULT_COLUMNS),
            Err(e) => {
                tracing::warn!(query = %query, error = %e, "Search unavailable");
                page.warning("Search failed.");
            }
        }
        return page;
    }

    page.push(Block::Subheader(state.category.label()));
    match catalog.home_feed(state.category).await {
        Ok(cards) => poster_grid(&mut page, cards, DEFAULT_COLUMNS),
        Err(e) => {
            tracing::warn!(category = %state.category, error = %e, "Home feed unavailable");
            page.warning("Failed to load home feed.");
        }
    }

    page
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::{Category, MovieId, UiEvent};
    use crate::services::client::MockJsonSource;
    use crate::ui::page::NoticeLevel;
    use serde_json::json;
    use std::sync::Arc;

    fn searching(query: &str) -> ViewState {
        ViewState::default().apply(UiEvent::Browse {
            query: Some(query.to_string()),
            category: Some(Category::Popular),
        })
    }

    #[tokio::test]
    async fn test_short_query_renders_category_feed() {
        let mut source = MockJsonSource::new();
        source
            .expect_get_json()
            .withf(|request| request.path == "/home" && request.get("category") == Some("popular"))
            .times(1)
            .returning(|_| Ok(json!([{"tmdb_id": 1, "title": "A", "poster_url": "https://img/a.jpg"}])));

        let catalog = MovieCatalog::new(Arc::new(source));
        let page = render(&searching("a"), &catalog).await;

        assert!(page.blocks.contains(&Block::Subheader("Popular".to_string())));
        assert_eq!(page.grids()[0][0].id, MovieId::Numeric(1));
        assert!(page.notices().is_empty());
    }

    #[tokio::test]
    async fn test_long_query_renders_search_results() {
        let mut source = MockJsonSource::new();
        source
            .expect_get_json()
            .withf(|request| request.path == "/tmdb/search" && request.get("query") == Some("up"))
            .times(1)
            .returning(|_| {
                Ok(json!({"results": [
                    {"id": 1, "title": "A", "poster_path": "/a.jpg"},
                    {"id": 2, "title": "B"}
                ]}))
            });

        let catalog = MovieCatalog::new(Arc::new(source));
        let page = render(&searching("up"), &catalog).await;

        let cards = &page.grids()[0];
        assert_eq!(cards.len(), 2);
        assert_eq!(
            cards[0].poster_url.as_deref(),
            Some("https://image.tmdb.org/t/p/w342/a.jpg")
        );
        assert_eq!(cards[1].poster_url, None);
        assert!(!page
            .blocks
            .iter()
            .any(|b| matches!(b, Block::Subheader(_))));
    }

    #[tokio::test]
    async fn test_search_failure_shows_warning() {
        let mut source = MockJsonSource::new();
        source
            .expect_get_json()
            .returning(|_| Err(AppError::UpstreamStatus(500)));

        let catalog = MovieCatalog::new(Arc::new(source));
        let page = render(&searching("matrix"), &catalog).await;

        let notices = page.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Warning);
        assert_eq!(notices[0].message, "Search failed.");
    }

    #[tokio::test]
    async fn test_feed_failure_shows_warning() {
        let mut source = MockJsonSource::new();
        source
            .expect_get_json()
            .returning(|_| Err(AppError::MalformedPayload("not json".to_string())));

        let catalog = MovieCatalog::new(Arc::new(source));
        let page = render(&ViewState::default(), &catalog).await;

        assert_eq!(page.notices()[0].message, "Failed to load home feed.");
        assert!(page.grids().is_empty());
    }

    #[tokio::test]
    async fn test_empty_feed_is_not_a_failure() {
        let mut source = MockJsonSource::new();
        source.expect_get_json().returning(|_| Ok(json!([])));

        let catalog = MovieCatalog::new(Arc::new(source));
        let page = render(&ViewState::default(), &catalog).await;

        let notices = page.notices();
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(notices[0].message, "No movies to show.");
    }
}
