//! Amount text field

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct AmountField<'a> {
    text: &'a str,
    focused: bool,
    invalid: bool,
}

impl<'a> AmountField<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            focused: false,
            invalid: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Red border while the text does not parse
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.invalid = invalid;
        self
    }
}

impl Widget for AmountField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut block = styles::glass_block(self.focused).title(" Amount ");
        if self.invalid {
            block = block.border_style(styles::border_error());
        }

        let mut spans = vec![Span::raw(" "), Span::styled(self.text, styles::text_primary())];
        if self.focused {
            spans.push(Span::styled("_", styles::accent()));
        }

        Paragraph::new(Line::from(spans))
            .block(block)
            .render(area, buf);
    }
}
