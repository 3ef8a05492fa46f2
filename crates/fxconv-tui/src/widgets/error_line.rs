//! Inline error message under the amount field

use ratatui::{buffer::Buffer, layout::Rect, text::Line, widgets::Widget};

use fxconv_app::InlineError;

use crate::theme::styles;

pub struct ErrorLine<'a> {
    error: Option<&'a InlineError>,
}

impl<'a> ErrorLine<'a> {
    pub fn new(error: Option<&'a InlineError>) -> Self {
        Self { error }
    }
}

impl Widget for ErrorLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(error) = self.error else {
            return;
        };
        if area.height == 0 {
            return;
        }

        let line = Line::styled(format!(" {}", error), styles::status_red());
        buf.set_line(area.x, area.y, &line, area.width);
    }
}
