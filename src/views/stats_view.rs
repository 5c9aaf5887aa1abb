/// Elapsed time as minutes with two decimals, e.g. 90 seconds -> "1.50".
pub fn format_minutes(elapsed_seconds: u64) -> String {
    format!("{:.2}", elapsed_seconds as f64 / 60.0)
}

pub fn render_stats(elapsed_seconds: u64, move_count: u32) -> String {
    format!(
        concat!(
            r#"<div class="time"><h4>Time</h4><h3>{}</h3></div>"#,
            r#"<div class="moves"><h4>Moves</h4><h3>{}</h3></div>"#
        ),
        format_minutes(elapsed_seconds),
        move_count
    )
}
