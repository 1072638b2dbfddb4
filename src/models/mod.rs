mod card;
mod movie;
mod view_state;

pub use card::{
    cards_from_feed_payload, cards_from_list, cards_from_search_payload, ApiCard, Card, MovieId,
    TmdbSearchResult,
};
pub use movie::{Genre, MovieDetails, RecommendationBundle, TfidfRecommendation};
pub use view_state::{Category, UiEvent, View, ViewState};
