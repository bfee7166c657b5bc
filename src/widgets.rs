//! Reusable clickable UI building blocks.
//!
//! [`ClickableList`] pairs rendered [`Line`]s with semantic click actions so
//! page renderers never compute row offsets by hand: annotate a line as
//! clickable when pushing it, then register all targets once after layout.
//! Registration is wrap-aware — wizard pages are prose-heavy and always
//! render with `Wrap`, so a long paragraph pushes every later button down by
//! however many visual rows it occupies.

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::text::Line;

use crate::input::ClickState;

pub struct ClickableList<'a> {
    lines: Vec<Line<'a>>,
    /// `(line_index, action_id)` pairs into `lines`.
    actions: Vec<(usize, u16)>,
}

impl<'a> ClickableList<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            actions: Vec::new(),
        }
    }

    /// Add a non-clickable line.
    pub fn push(&mut self, line: impl Into<Line<'a>>) {
        self.lines.push(line.into());
    }

    /// Add a clickable line. The action is bound to whatever visual rows the
    /// line ends up on — inserting or wrapping lines above it moves the
    /// target automatically.
    pub fn push_clickable(&mut self, line: impl Into<Line<'a>>, action_id: u16) {
        self.actions.push((self.lines.len(), action_id));
        self.lines.push(line.into());
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the builder, returning the lines for `Paragraph::new`.
    pub fn into_lines(self) -> Vec<Line<'a>> {
        self.lines
    }

    /// Register click targets for all clickable lines.
    ///
    /// * `area` — the widget area including borders.
    /// * `top_offset` — rows before content (1 for a top border).
    /// * `inner_width` — content width used for wrap calculation; each
    ///   logical line occupies `ceil(width / inner_width)` visual rows.
    ///
    /// Targets that would land past the bottom border are clipped.
    pub fn register_targets(
        &self,
        area: Rect,
        cs: &mut ClickState,
        top_offset: u16,
        inner_width: u16,
    ) {
        if inner_width == 0 {
            return;
        }
        let content_y = area.y + top_offset;
        let content_end = area.y + area.height.saturating_sub(top_offset);
        let w = inner_width as usize;

        // Visual start row of every logical line, accounting for wrapping.
        let mut visual_starts: Vec<u16> = Vec::with_capacity(self.lines.len());
        let mut cumulative: u16 = 0;
        for line in &self.lines {
            visual_starts.push(cumulative);
            let lw = line.width();
            cumulative += if lw <= w { 1 } else { lw.div_ceil(w) as u16 };
        }

        for &(line_idx, action_id) in &self.actions {
            let vstart = visual_starts[line_idx];
            let next_start = visual_starts
                .get(line_idx + 1)
                .copied()
                .unwrap_or(cumulative);

            // One target per visual row the line spans.
            for vr in vstart..next_start {
                let screen_row = content_y + vr;
                if screen_row >= content_end {
                    break;
                }
                cs.add_row_target(area, screen_row, action_id);
            }
        }
    }
}
