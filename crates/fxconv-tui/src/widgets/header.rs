//! Header bar: title plus catalog status

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use fxconv_app::AppState;

use crate::theme::{palette, styles};

/// Braille spinner frames, advanced once per tick
pub const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub fn spinner_frame(animation_frame: u64) -> &'static str {
    SPINNER[(animation_frame as usize) % SPINNER.len()]
}

pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn status(&self) -> Span<'static> {
        let catalog = &self.state.catalog;
        if !catalog.is_empty() {
            Span::styled(
                format!("● {} currencies", catalog.len()),
                styles::status_green(),
            )
        } else if self.state.catalog_requested {
            Span::styled("○ loading currencies", styles::status_yellow())
        } else {
            Span::styled("○ offline", styles::text_muted())
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let title = Line::from(vec![
            Span::raw(" "),
            Span::styled("Currency Converter", styles::accent_bold()),
        ]);
        buf.set_line(inner.x, inner.y, &title, inner.width);

        let status = Line::from(vec![self.status(), Span::raw(" ")]);
        let status_width = status.width() as u16;
        let title_width = title.width() as u16;
        if title_width + status_width + 2 <= inner.width {
            let x = inner.x + inner.width - status_width;
            buf.set_line(x, inner.y, &status, status_width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_app_state, TestTerminal};

    #[test]
    fn test_header_renders_title_and_count() {
        let mut term = TestTerminal::new();
        let state = test_app_state();

        term.render_widget(Header::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.line_contains(1, "Currency Converter"));
        assert!(term.line_contains(1, "4 currencies"));
    }

    #[test]
    fn test_header_while_catalog_loads() {
        let mut term = TestTerminal::new();
        let mut state = AppState::new();
        state.catalog_requested = true;

        term.render_widget(Header::new(&state), Rect::new(0, 0, 80, 3));

        assert!(term.buffer_contains("loading currencies"));
    }

    #[test]
    fn test_narrow_header_drops_status() {
        let mut term = TestTerminal::with_size(24, 3);
        let state = test_app_state();

        term.render_widget(Header::new(&state), Rect::new(0, 0, 24, 3));

        assert!(term.buffer_contains("Currency Converter"));
        assert!(!term.buffer_contains("currencies"));
    }

    #[test]
    fn test_spinner_wraps() {
        assert_eq!(spinner_frame(0), spinner_frame(SPINNER.len() as u64));
    }
}
