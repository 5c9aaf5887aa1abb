//! Pure HTML renderers. Each takes snapshot data and returns markup; none of
//! them keeps state.

pub mod header_view;
pub mod stats_view;
pub mod tile_view;

use crate::game::round_state::RoundPhase;
use crate::game::snapshot::GameSnapshot;
use serde::{Deserialize, Serialize};

/// Fragments the page script swaps into place after every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedView {
    pub intro: String,
    pub header: String,
    pub tiles: String,
    pub stats: String,
    pub phase: RoundPhase,
}

pub fn render_view(snapshot: &GameSnapshot) -> RenderedView {
    RenderedView {
        intro: header_view::render_intro(snapshot.is_intro_visible),
        header: header_view::render_header(),
        tiles: tile_view::render_tiles(&snapshot.tiles),
        stats: stats_view::render_stats(snapshot.elapsed_seconds, snapshot.move_count),
        phase: snapshot.phase,
    }
}

/// Smallest square grid that holds `tile_count` tiles.
pub fn grid_columns(tile_count: usize) -> usize {
    let mut columns = 1;
    while columns * columns < tile_count {
        columns += 1;
    }
    columns
}

pub fn render_page(session_id: &str, snapshot: &GameSnapshot) -> String {
    let view = render_view(snapshot);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>Memory Game</title>
<link rel="stylesheet" href="/static/style.css">
</head>
<body data-session="{session_id}">
<div id="intro">{intro}</div>
<div class="container">
<div class="header" id="header">{header}</div>
<div class="gameArea" id="tiles" style="--columns: {columns}">{tiles}</div>
<div class="information" id="stats">{stats}</div>
</div>
<script src="/static/app.js"></script>
</body>
</html>
"#,
        session_id = session_id,
        intro = view.intro,
        header = view.header,
        columns = grid_columns(snapshot.tiles.len()),
        tiles = view.tiles,
        stats = view.stats,
    )
}
