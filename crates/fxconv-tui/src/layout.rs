//! Screen layout for the converter form
//!
//! The form is a fixed column of rows. Everything below the convert button
//! is filler, and the hint bar takes the last row when enabled.

use ratatui::layout::{Constraint, Layout, Rect};

/// Width of the swap button next to the amount field
pub const SWAP_WIDTH: u16 = 12;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Title and catalog status
    pub header: Rect,
    pub amount: Rect,
    pub swap: Rect,
    /// Single line under the amount field
    pub error: Rect,
    pub source: Rect,
    pub target: Rect,
    /// Converted value and countdown
    pub result: Rect,
    pub convert: Rect,
    /// Zero height when hints are off
    pub hints: Rect,
}

/// Split `area` into the form rows
pub fn create(area: Rect, show_hints: bool) -> ScreenAreas {
    let hint_height = if show_hints { 1 } else { 0 };

    let rows = Layout::vertical([
        Constraint::Length(3), // Header (glass container)
        Constraint::Length(3), // Amount + swap
        Constraint::Length(1), // Inline error
        Constraint::Length(3), // Source + target
        Constraint::Length(4), // Result panel
        Constraint::Length(3), // Convert button
        Constraint::Min(0),
        Constraint::Length(hint_height),
    ])
    .split(area);

    let amount_row =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(SWAP_WIDTH)]).split(rows[1]);

    let select_row =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[3]);

    ScreenAreas {
        header: rows[0],
        amount: amount_row[0],
        swap: amount_row[1],
        error: rows[2],
        source: select_row[0],
        target: select_row[1],
        result: rows[4],
        convert: rows[5],
        hints: rows[7],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_stack_in_order() {
        let layout = create(Rect::new(0, 0, 80, 24), true);

        assert_eq!(layout.header.y, 0);
        assert_eq!(layout.header.height, 3);
        assert_eq!(layout.amount.y, 3);
        assert_eq!(layout.error.y, 6);
        assert_eq!(layout.error.height, 1);
        assert_eq!(layout.source.y, 7);
        assert_eq!(layout.result.y, 10);
        assert_eq!(layout.result.height, 4);
        assert_eq!(layout.convert.y, 14);
    }

    #[test]
    fn test_hint_bar_takes_last_row() {
        let layout = create(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.hints.y, 23);
        assert_eq!(layout.hints.height, 1);

        let layout = create(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.hints.height, 0);
    }

    #[test]
    fn test_swap_sits_right_of_amount() {
        let layout = create(Rect::new(0, 0, 80, 24), true);

        assert_eq!(layout.swap.width, SWAP_WIDTH);
        assert_eq!(layout.amount.width + layout.swap.width, 80);
        assert_eq!(layout.swap.x, layout.amount.x + layout.amount.width);
        assert_eq!(layout.swap.y, layout.amount.y);
    }

    #[test]
    fn test_selects_split_evenly() {
        let layout = create(Rect::new(0, 0, 80, 24), true);

        assert_eq!(layout.source.width, 40);
        assert_eq!(layout.target.width, 40);
        assert_eq!(layout.target.x, 40);
    }
}
