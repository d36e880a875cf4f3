//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainAreas {
    pub header: Rect,
    pub report: Rect,
    pub form: Rect,
    pub footer: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into header, report panel, form and footer.
    ///
    /// Header and footer take one line each; the report panel is docked left
    /// with `report_width` columns, clamped so the form keeps some room.
    #[must_use]
    pub fn main_layout(area: Rect, report_width: u16) -> MainAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let body = rows[1];
        let report_width = report_width.min(body.width / 2);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(report_width), Constraint::Min(0)])
            .split(body);

        MainAreas {
            header: rows[0],
            report: columns[0],
            form: columns[1],
            footer: rows[2],
        }
    }

    /// Stack form fields from the top of `area`, each taking its own height.
    ///
    /// Fields that no longer fit get an empty rectangle at the bottom edge.
    #[must_use]
    pub fn form_layout(area: Rect, heights: &[u16]) -> Vec<Rect> {
        let mut y = area.y;
        let bottom = area.y + area.height;
        heights
            .iter()
            .map(|&height| {
                let height = height.min(bottom - y);
                let rect = Rect::new(area.x, y, area.width, height);
                y += height;
                rect
            })
            .collect()
    }

    /// Check whether a terminal cell lies inside a rectangle
    #[must_use]
    pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
        column >= rect.x && column < rect.x + rect.width && row >= rect.y && row < rect.y + rect.height
    }
}
