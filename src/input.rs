//! Shared input handling: normalized events, click targets, and the
//! pixel→cell conversion used by the mouse handler.
//!
//! This module knows nothing about wizard pages; dispatch lives in
//! `wizard::WizardApp`.

use ratzilla::ratatui::layout::Rect;

/// All input events, normalized from keyboard, mouse, and touch sources.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A printable key press.
    Key(char),
    /// A click/tap on a registered target, identified by a semantic action ID
    /// (constants in `wizard::actions`).
    Click(u16),
    /// Backspace — deletes in the code editor.
    Backspace,
    /// Enter — newline in the code editor, "next" while browsing.
    Enter,
    /// Escape — leaves the code editor.
    Escape,
}

/// A screen region (terminal cell coordinates) that triggers an action on tap.
#[derive(Debug, Clone)]
pub struct ClickTarget {
    pub rect: Rect,
    pub action_id: u16,
}

/// Shared between the render loop (which registers targets every frame) and
/// the mouse handler (which hit-tests against them).
pub struct ClickState {
    pub targets: Vec<ClickTarget>,
    pub terminal_cols: u16,
    pub terminal_rows: u16,
}

impl ClickState {
    pub fn new() -> Self {
        Self {
            targets: Vec::new(),
            terminal_cols: 0,
            terminal_rows: 0,
        }
    }

    /// Drop all targets; called at the top of every frame before re-registering.
    pub fn clear_targets(&mut self) {
        self.targets.clear();
    }

    pub fn add_click_target(&mut self, rect: Rect, action_id: u16) {
        self.targets.push(ClickTarget { rect, action_id });
    }

    /// Register a full-width target on one row of `area`; rows outside the
    /// area are silently ignored (clipped content).
    pub fn add_row_target(&mut self, area: Rect, row: u16, action_id: u16) {
        if row >= area.y && row < area.y + area.height {
            self.targets.push(ClickTarget {
                rect: Rect::new(area.x, row, area.width, 1),
                action_id,
            });
        }
    }

    /// Convert a pixel coordinate (relative to the grid container) into a
    /// terminal cell. `None` when the point lies outside the grid or the
    /// terminal dimensions are not known yet.
    pub fn cell_at(&self, px_x: f64, px_y: f64, grid_w: f64, grid_h: f64) -> Option<(u16, u16)> {
        if self.terminal_cols == 0 || self.terminal_rows == 0 {
            return None;
        }
        if grid_w <= 0.0 || grid_h <= 0.0 || px_x < 0.0 || px_y < 0.0 {
            return None;
        }

        let col = (px_x / (grid_w / self.terminal_cols as f64)) as u16;
        let row = (px_y / (grid_h / self.terminal_rows as f64)) as u16;

        if col >= self.terminal_cols || row >= self.terminal_rows {
            return None;
        }
        Some((col, row))
    }

    /// Hit-test a cell against all registered targets. When targets overlap,
    /// the last-registered one wins (later widgets are rendered on top).
    pub fn hit_test(&self, col: u16, row: u16) -> Option<u16> {
        self.targets.iter().rev().find_map(|t| {
            let r = &t.rect;
            if col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height {
                Some(t.action_id)
            } else {
                None
            }
        })
    }
}

/// Whether a screen width (in columns) should use the stacked narrow layout.
pub fn is_narrow_layout(width: u16) -> bool {
    width < 60
}
