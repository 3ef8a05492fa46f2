//! Swap and Convert buttons

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

pub struct Button<'a> {
    label: &'a str,
    focused: bool,
    enabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            focused: false,
            enabled: true,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = match (self.enabled, self.focused) {
            (false, _) => styles::text_muted(),
            (true, true) => styles::focused_selected(),
            (true, false) => styles::text_secondary(),
        };

        Paragraph::new(self.label)
            .style(style)
            .alignment(Alignment::Center)
            .block(styles::glass_block(self.focused && self.enabled))
            .render(area, buf);
    }
}
