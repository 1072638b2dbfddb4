use crate::models::{Card, Category, MovieDetails};

/// Severity of a message shown in place of missing content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

/// Movie details as they are laid out next to the poster
#[derive(Debug, Clone, PartialEq)]
pub struct DetailsPanel {
    pub poster_url: Option<String>,
    pub title: String,
    pub release_date: String,
    pub genres: String,
    pub overview: String,
}

impl From<&MovieDetails> for DetailsPanel {
    fn from(details: &MovieDetails) -> Self {
        Self {
            poster_url: details.poster_url.clone().filter(|p| !p.is_empty()),
            title: details.display_title().to_string(),
            release_date: details.display_release_date().to_string(),
            genres: details.display_genres(),
            overview: details.display_overview().to_string(),
        }
    }
}

/// One element of a rendered page, top to bottom
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Title(String),
    Subheader(String),
    Label(String),
    Notice(Notice),
    /// Cards laid out row by row
    Grid { rows: Vec<Vec<Card>> },
    Details(DetailsPanel),
    SearchForm { query: String, category: Category },
    BackButton,
    Divider,
}

/// A rendered view, ready to be turned into HTML
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub blocks: Vec<Block>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn info(&mut self, message: &str) {
        self.notice(NoticeLevel::Info, message);
    }

    pub fn warning(&mut self, message: &str) {
        self.notice(NoticeLevel::Warning, message);
    }

    pub fn error(&mut self, message: &str) {
        self.notice(NoticeLevel::Error, message);
    }

    fn notice(&mut self, level: NoticeLevel, message: &str) {
        self.blocks.push(Block::Notice(Notice {
            level,
            message: message.to_string(),
        }));
    }

    /// Every notice on the page, in order
    pub fn notices(&self) -> Vec<&Notice> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Notice(n) => Some(n),
                _ => None,
            })
            .collect()
    }

    /// Cards of every grid on the page, flattened in display order
    pub fn grids(&self) -> Vec<Vec<&Card>> {
        self.blocks
            .iter()
            .filter_map(|b| match b {
                Block::Grid { rows } => Some(rows.iter().flatten().collect()),
                _ => None,
            })
            .collect()
    }

    pub fn has_label(&self, label: &str) -> bool {
        self.blocks
            .iter()
            .any(|b| matches!(b, Block::Label(l) if l == label))
    }
}
