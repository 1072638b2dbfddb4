pub mod details;
pub mod grid;
pub mod home;
pub mod page;
pub mod templates;

pub use page::{Block, Notice, NoticeLevel, Page};

use crate::{
    models::{View, ViewState},
    services::MovieCatalog,
};

/// Renders whichever view the session state points at
pub async fn render(state: &ViewState, catalog: &MovieCatalog) -> Page {
    match state.view() {
        View::Home => home::render(state, catalog).await,
        View::Details(id) => details::render(&id, catalog).await,
    }
}
