pub fn render_header() -> String {
    concat!(
        r#"<div class="logo" aria-label="memoryGameLogo">🧠 Memory</div>"#,
        r#"<div class="gameOptions">"#,
        r#"<button type="button" data-intent="restart">Restart</button>"#,
        r#"<button type="button" data-intent="new-game">New Game</button>"#,
        r#"</div>"#
    )
    .to_string()
}

/// Start overlay; empty once the player has started.
pub fn render_intro(is_visible: bool) -> String {
    if !is_visible {
        return String::new();
    }
    concat!(
        r#"<div class="modal"><div class="modalContent">"#,
        r#"<h1>Memory Game</h1>"#,
        r#"<button type="button" data-intent="start">Start Game</button>"#,
        r#"</div></div>"#
    )
    .to_string()
}
