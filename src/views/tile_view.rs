use crate::game::snapshot::TileSnapshot;

/// Display class for a tile. Matched wins over revealed.
pub fn tile_class(is_matched: bool, is_revealed: bool) -> &'static str {
    if is_matched {
        "tile matched"
    } else if is_revealed {
        "tile selected"
    } else {
        "tile"
    }
}

/// One clickable tile. `data-index` is the click intent the page script posts back.
pub fn render_tile(index: usize, tile: &TileSnapshot) -> String {
    let glyph = tile.symbol.map(|symbol| symbol.glyph()).unwrap_or("");
    format!(
        r#"<button type="button" class="{}" data-index="{}"><span>{}</span></button>"#,
        tile_class(tile.is_matched, tile.is_revealed),
        index,
        glyph
    )
}

pub fn render_tiles(tiles: &[TileSnapshot]) -> String {
    tiles
        .iter()
        .enumerate()
        .map(|(index, tile)| render_tile(index, tile))
        .collect()
}
