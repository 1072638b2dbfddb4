//! HTML rendering of pages.
//!
//! Every interaction is a plain form post, so the UI works without scripts.

use super::page::{Block, DetailsPanel, Notice, NoticeLevel, Page};
use crate::models::{Card, Category};

const PAGE_TITLE: &str = "Movie Recommender";

/// Renders a full HTML document for `page`
pub fn render_page(page: &Page) -> String {
    let sidebar: String = page
        .blocks
        .iter()
        .filter_map(|b| match b {
            Block::SearchForm { query, category } => Some(category_select(query, *category)),
            _ => None,
        })
        .collect();

    let content: String = page.blocks.iter().map(render_block).collect();

    let layout = if sidebar.is_empty() {
        format!(r#"<main class="content">{}</main>"#, content)
    } else {
        format!(
            r#"<aside class="sidebar">{}</aside>
    <main class="content">{}</main>"#,
            sidebar, content
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <link rel="icon" href="data:image/svg+xml,<svg xmlns=%22http://www.w3.org/2000/svg%22 viewBox=%220 0 100 100%22><text y=%22.9em%22 font-size=%2290%22>🎬</text></svg>">
    <style>{}</style>
</head>
<body>
    {}
</body>
</html>"#,
        PAGE_TITLE, CSS, layout
    )
}

fn render_block(block: &Block) -> String {
    match block {
        Block::Title(title) => format!("<h1>{}</h1>", html_escape(title)),
        Block::Subheader(text) => format!("<h2>{}</h2>", html_escape(text)),
        Block::Label(text) => format!(r#"<p class="label">{}</p>"#, html_escape(text)),
        Block::Notice(notice) => render_notice(notice),
        Block::Grid { rows } => render_grid(rows),
        Block::Details(panel) => render_details(panel),
        Block::SearchForm { query, category } => search_box(query, *category),
        Block::BackButton => r#"<form method="post" action="/back" class="back">
            <button type="submit">← Back</button>
        </form>"#
            .to_string(),
        Block::Divider => "<hr>".to_string(),
    }
}

fn render_notice(notice: &Notice) -> String {
    let class = match notice.level {
        NoticeLevel::Info => "info",
        NoticeLevel::Warning => "warning",
        NoticeLevel::Error => "error",
    };
    format!(
        r#"<div class="notice {}">{}</div>"#,
        class,
        html_escape(&notice.message)
    )
}

fn render_grid(rows: &[Vec<Card>]) -> String {
    rows.iter()
        .map(|row| {
            let cells: String = row.iter().map(render_card).collect();
            format!(r#"<div class="grid-row">{}</div>"#, cells)
        })
        .collect()
}

fn render_card(card: &Card) -> String {
    let poster = match &card.poster_url {
        Some(url) => format!(
            r#"<img src="{}" alt="{}" loading="lazy">"#,
            html_escape(url),
            html_escape(&card.title)
        ),
        None => r#"<div class="poster-slot"></div>"#.to_string(),
    };

    format!(
        r#"<div class="card">
            {}
            <form method="post" action="/select">
                <input type="hidden" name="id" value="{}">
                <button type="submit">{}</button>
            </form>
        </div>"#,
        poster,
        html_escape(&card.id.to_form_value()),
        html_escape(&card.title)
    )
}

fn render_details(panel: &DetailsPanel) -> String {
    let poster = panel
        .poster_url
        .as_ref()
        .map(|url| {
            format!(
                r#"<img src="{}" alt="{}">"#,
                html_escape(url),
                html_escape(&panel.title)
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="details">
            <div class="details-poster">{}</div>
            <div class="details-info">
                <h1>{}</h1>
                <p><strong>Release:</strong> {}</p>
                <p><strong>Genres:</strong> {}</p>
                <h3>Overview</h3>
                <p>{}</p>
            </div>
        </div>"#,
        poster,
        html_escape(&panel.title),
        html_escape(&panel.release_date),
        html_escape(&panel.genres),
        html_escape(&panel.overview)
    )
}

fn search_box(query: &str, category: Category) -> String {
    format!(
        r#"<form method="post" action="/browse" class="search">
            <label for="query">Search Movie</label>
            <input type="text" id="query" name="query" value="{}">
            <input type="hidden" name="category" value="{}">
        </form>"#,
        html_escape(query),
        category.as_str()
    )
}

fn category_select(query: &str, selected: Category) -> String {
    let options: String = Category::ALL
        .iter()
        .map(|c| {
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                c.as_str(),
                if *c == selected { " selected" } else { "" },
                c.as_str()
            )
        })
        .collect();

    format!(
        r#"<form method="post" action="/browse">
            <label for="category">Home Category</label>
            <select id="category" name="category">{}</select>
            <input type="hidden" name="query" value="{}">
            <button type="submit">Show</button>
        </form>"#,
        options,
        html_escape(query)
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const CSS: &str = r#"
body { margin: 0; font-family: sans-serif; background: #0e1117; color: #fafafa; display: flex; }
.sidebar { width: 240px; padding: 1.5rem; background: #262730; min-height: 100vh; }
.content { flex: 1; padding: 1.5rem 3rem; }
.grid-row { display: grid; grid-template-columns: repeat(4, 1fr); gap: 1rem; margin-bottom: 1rem; }
.card img, .details-poster img { width: 100%; border-radius: 4px; }
.poster-slot { width: 100%; aspect-ratio: 2 / 3; }
.card button { width: 100%; margin-top: .5rem; }
.notice { padding: .75rem 1rem; border-radius: 4px; margin: 1rem 0; }
.notice.info { background: #172d43; }
.notice.warning { background: #3e3a16; }
.notice.error { background: #3e1c1c; }
.details { display: grid; grid-template-columns: 1fr 2fr; gap: 2rem; }
.search input[type=text] { width: 100%; padding: .5rem; }
.label { font-weight: bold; }
"#;
