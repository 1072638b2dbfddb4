use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};

use super::card::MovieId;
use crate::error::AppError;

/// Home feed category offered in the sidebar
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Trending,
    Popular,
    TopRated,
    NowPlaying,
    Upcoming,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Trending,
        Category::Popular,
        Category::TopRated,
        Category::NowPlaying,
        Category::Upcoming,
    ];

    /// Wire name sent to `/home`
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Trending => "trending",
            Category::Popular => "popular",
            Category::TopRated => "top_rated",
            Category::NowPlaying => "now_playing",
            Category::Upcoming => "upcoming",
        }
    }

    /// Human label, e.g. "Top Rated"
    pub fn label(&self) -> String {
        self.as_str()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::InvalidInput(format!("Unknown category: {}", s)))
    }
}

/// Which view a render produces
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Home,
    Details(MovieId),
}

/// Something the user did in the browser
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// Clicked a card's title button
    SelectMovie(MovieId),
    /// Clicked "Back" on the details view
    Back,
    /// Submitted the search box / category select; absent fields are kept
    Browse {
        query: Option<String>,
        category: Option<Category>,
    },
}

/// Per-session UI state, kept between renders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    pub selected_movie_id: Option<MovieId>,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub search_query: String,
}

impl ViewState {
    /// Applies one event, returning the next state
    pub fn apply(self, event: UiEvent) -> Self {
        match event {
            UiEvent::SelectMovie(id) => Self {
                selected_movie_id: Some(id),
                ..self
            },
            UiEvent::Back => Self {
                selected_movie_id: None,
                ..self
            },
            UiEvent::Browse { query, category } => Self {
                search_query: query.unwrap_or(self.search_query),
                category: category.unwrap_or(self.category),
                ..self
            },
        }
    }

    pub fn view(&self) -> View {
        match &self.selected_movie_id {
            Some(id) => View::Details(id.clone()),
            None => View::Home,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_shows_home() {
        let state = ViewState::default();
        assert_eq!(state.view(), View::Home);
        assert_eq!(state.category, Category::Trending);
        assert!(state.search_query.is_empty());
    }

    #[test]
    fn test_select_then_back() {
        let state = ViewState::default().apply(UiEvent::SelectMovie(MovieId::Numeric(42)));
        assert_eq!(state.selected_movie_id, Some(MovieId::Numeric(42)));
        assert_eq!(state.view(), View::Details(MovieId::Numeric(42)));

        let state = state.apply(UiEvent::Back);
        assert_eq!(state.selected_movie_id, None);
        assert_eq!(state.view(), View::Home);
    }

    #[test]
    fn test_browse_keeps_selection_and_back_keeps_search() {
        let state = ViewState::default()
            .apply(UiEvent::Browse {
                query: Some("matrix".to_string()),
                category: Some(Category::Upcoming),
            })
            .apply(UiEvent::SelectMovie(MovieId::Numeric(603)))
            .apply(UiEvent::Back);

        assert_eq!(state.search_query, "matrix");
        assert_eq!(state.category, Category::Upcoming);
        assert_eq!(state.view(), View::Home);
    }

    #[test]
    fn test_browse_keeps_fields_left_out() {
        let state = ViewState::default()
            .apply(UiEvent::Browse {
                query: Some("alien".to_string()),
                category: None,
            })
            .apply(UiEvent::Browse {
                query: None,
                category: Some(Category::Popular),
            });

        assert_eq!(state.search_query, "alien");
        assert_eq!(state.category, Category::Popular);
    }

    #[test]
    fn test_category_label() {
        assert_eq!(Category::TopRated.label(), "Top Rated");
        assert_eq!(Category::NowPlaying.label(), "Now Playing");
        assert_eq!(Category::Trending.label(), "Trending");
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("top_rated".parse::<Category>().unwrap(), Category::TopRated);
        assert!("documentary".parse::<Category>().is_err());
    }

    #[test]
    fn test_view_state_serialization() {
        let state = ViewState::default().apply(UiEvent::SelectMovie(MovieId::Numeric(42)));
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["selected_movie_id"], 42);
        assert_eq!(json["category"], "trending");

        let back: ViewState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }
}
