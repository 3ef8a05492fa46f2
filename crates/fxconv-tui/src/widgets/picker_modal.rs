//! Currency picker modal
//!
//! Filter line on top, matching `CODE (Name)` rows below, highlighted row
//! kept in view.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use fxconv_app::PickerState;

use super::modal_overlay;
use crate::theme::styles;

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 16;

pub struct PickerModal<'a> {
    picker: &'a PickerState,
}

impl<'a> PickerModal<'a> {
    pub fn new(picker: &'a PickerState) -> Self {
        Self { picker }
    }
}

/// First visible row so that `selected` stays inside a window of `height`
fn scroll_offset(selected: usize, height: usize) -> usize {
    if height == 0 {
        0
    } else {
        selected.saturating_sub(height - 1)
    }
}

impl Widget for PickerModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        modal_overlay::dim_background(buf, area);

        let modal = modal_overlay::centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);
        modal_overlay::clear_area(buf, modal);
        modal_overlay::render_shadow(buf, modal);

        let title = format!(" {} ", self.picker.side.title());
        let block = styles::modal_block(&title);
        let inner = block.inner(modal);
        block.render(modal, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let filter = Line::from(vec![
            Span::styled(" / ", styles::keybinding()),
            Span::styled(self.picker.query.as_str(), styles::text_primary()),
            Span::styled("_", styles::accent()),
        ]);
        buf.set_line(inner.x, inner.y, &filter, inner.width);

        let list_y = inner.y + 1;
        let list_height = (inner.height - 1) as usize;

        if self.picker.visible_count() == 0 {
            let empty = Line::styled("  No matching currencies", styles::text_muted());
            buf.set_line(inner.x, list_y, &empty, inner.width);
            return;
        }

        let selected = self.picker.selected_index();
        let offset = scroll_offset(selected, list_height);

        for (row, (index, option)) in self
            .picker
            .visible()
            .enumerate()
            .skip(offset)
            .take(list_height)
            .enumerate()
        {
            let y = list_y + row as u16;
            let line = if index == selected {
                let row_area = Rect::new(inner.x, y, inner.width, 1);
                buf.set_style(row_area, styles::focused_selected());
                Line::styled(format!(" ▸ {}", option.label), styles::focused_selected())
            } else {
                Line::styled(format!("   {}", option.label), Style::default())
            };
            buf.set_line(inner.x, y, &line, inner.width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{code, test_catalog, TestTerminal};
    use fxconv_app::PickerSide;

    #[test]
    fn test_picker_lists_options() {
        let mut term = TestTerminal::new();
        let picker = PickerState::new(PickerSide::Source, &test_catalog(), &code("USD"));
        let area = term.area();
        term.render_widget(PickerModal::new(&picker), area);

        assert!(term.buffer_contains("Convert from"));
        assert!(term.buffer_contains("EUR (Euro)"));
        assert!(term.buffer_contains("▸ USD (United States Dollar)"));
    }

    #[test]
    fn test_picker_shows_query() {
        let mut term = TestTerminal::new();
        let mut picker = PickerState::new(PickerSide::Target, &test_catalog(), &code("EUR"));
        for c in "yen".chars() {
            picker.push_char(c);
        }
        let area = term.area();
        term.render_widget(PickerModal::new(&picker), area);

        assert!(term.buffer_contains("Convert to"));
        assert!(term.buffer_contains("/ yen_"));
        assert!(term.buffer_contains("JPY (Japanese Yen)"));
        assert!(!term.buffer_contains("EUR (Euro)"));
    }

    #[test]
    fn test_picker_without_matches() {
        let mut term = TestTerminal::new();
        let mut picker = PickerState::new(PickerSide::Source, &test_catalog(), &code("USD"));
        for c in "zzzz".chars() {
            picker.push_char(c);
        }
        let area = term.area();
        term.render_widget(PickerModal::new(&picker), area);

        assert!(term.buffer_contains("No matching currencies"));
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(7, 5), 3);
        assert_eq!(scroll_offset(3, 0), 0);
    }
}
