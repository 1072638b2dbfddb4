use super::page::{Block, Page};
use crate::models::Card;

pub const DEFAULT_COLUMNS: usize = 4;

const EMPTY_GRID_MESSAGE: &str = "No movies to show.";

/// Appends `cards` to the page as rows of `columns` posters
///
/// An empty list renders an info placeholder. Input order is preserved and
/// the last row may be short.
pub fn poster_grid(page: &mut Page, cards: Vec<Card>, columns: usize) {
    let cards: Vec<Card> = cards.into_iter().filter(|c| !c.title.is_empty()).collect();
    if cards.is_empty() {
        page.info(EMPTY_GRID_MESSAGE);
        return;
    }

    let rows = cards
        .chunks(columns.max(1))
        .map(|row| row.to_vec())
        .collect();

    page.push(Block::Grid { rows });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MovieId;
    use crate::ui::page::NoticeLevel;

    fn cards(n: i64) -> Vec<Card> {
        (1..=n)
            .map(|i| Card::new(MovieId::Numeric(i), format!("Movie {}", i), None))
            .collect()
    }

    #[test]
    fn test_empty_input_renders_info() {
        let mut page = Page::new();
        poster_grid(&mut page, vec![], DEFAULT_COLUMNS);

        let notices = page.notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Info);
        assert_eq!(notices[0].message, "No movies to show.");
        assert!(page.grids().is_empty());
    }

    #[test]
    fn test_rows_preserve_order() {
        let mut page = Page::new();
        poster_grid(&mut page, cards(10), 4);

        match &page.blocks[0] {
            Block::Grid { rows } => {
                let sizes: Vec<usize> = rows.iter().map(Vec::len).collect();
                assert_eq!(sizes, vec![4, 4, 2]);
                assert_eq!(rows[0][0].title, "Movie 1");
                assert_eq!(rows[1][0].title, "Movie 5");
                assert_eq!(rows[2][1].title, "Movie 10");
            }
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_columns_means_one_per_row() {
        let mut page = Page::new();
        poster_grid(&mut page, cards(3), 0);

        match &page.blocks[0] {
            Block::Grid { rows } => assert_eq!(rows.len(), 3),
            other => panic!("expected grid, got {:?}", other),
        }
    }

    #[test]
    fn test_untitled_cards_are_skipped() {
        let mut page = Page::new();
        let mut input = cards(2);
        input.push(Card::new(MovieId::Numeric(3), "", None));

        poster_grid(&mut page, input, 4);
        assert_eq!(page.grids()[0].len(), 2);
    }
}
