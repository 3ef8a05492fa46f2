//! Closed currency selection box
//!
//! Shows the current selection as `CODE/Name`. Opening it is the picker
//! modal's job.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct CurrencySelect<'a> {
    title: &'a str,
    label: &'a str,
    focused: bool,
}

impl<'a> CurrencySelect<'a> {
    pub fn new(title: &'a str, label: &'a str) -> Self {
        Self {
            title,
            label,
            focused: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for CurrencySelect<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused).title(format!(" {} ", self.title));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width < 2 || inner.height == 0 {
            return;
        }

        let label = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.label, styles::text_primary()),
        ]);
        Paragraph::new(label).render(
            Rect {
                width: inner.width - 2,
                ..inner
            },
            buf,
        );

        let arrow_style = if self.focused {
            styles::accent()
        } else {
            styles::text_muted()
        };
        buf.set_string(inner.x + inner.width - 2, inner.y, "▾", arrow_style);
    }
}
