//! Multi-line text layout.
//!
//! One fragment per `\n`-separated line, all sharing the same absolute `y`
//! and stepping down by a relative `dy` in `em`. Because the step is in `em`,
//! later font-size changes rescale spacing without a re-layout.

use crate::config::CanvasConfig;
use crate::model::LineFragment;
use smallvec::SmallVec;

/// Lay out `content` at `font_size_px` with every fragment at horizontal `x`.
///
/// Empty lines are kept as empty fragments, so `""` yields one fragment.
pub fn layout_lines(
    content: &str,
    font_size_px: u32,
    x: f64,
    config: &CanvasConfig,
) -> SmallVec<[LineFragment; 4]> {
    let lines: SmallVec<[&str; 4]> = content.split('\n').collect();
    let y = start_y(lines.len(), font_size_px, config);

    let fragments: SmallVec<[LineFragment; 4]> = lines
        .iter()
        .enumerate()
        .map(|(index, line)| LineFragment {
            content: (*line).to_string(),
            x,
            y,
            dy_em: config.line_height * index as f64,
            anchor: None,
        })
        .collect();

    log::debug!(
        "laid out {} line(s) at {}px, start y = {y}",
        fragments.len(),
        font_size_px
    );
    fragments
}

/// Shared baseline for a block of `line_count` lines.
pub fn start_y(line_count: usize, font_size_px: u32, config: &CanvasConfig) -> f64 {
    let total_height =
        line_count.saturating_sub(1) as f64 * config.line_height * f64::from(font_size_px);
    config.center_y - total_height / 2.0
}
