//! Keybinding hints along the bottom row

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

pub struct HintBar {
    picker_open: bool,
}

impl HintBar {
    pub fn new(picker_open: bool) -> Self {
        Self { picker_open }
    }

    fn hints(&self) -> &'static [(&'static str, &'static str)] {
        if self.picker_open {
            &[("type", "filter"), ("↑↓", "move"), ("Enter", "select"), ("Esc", "cancel")]
        } else {
            &[
                ("Tab", "next"),
                ("Enter", "activate"),
                ("^X", "swap"),
                ("^U", "clear"),
                ("Esc", "quit"),
            ]
        }
    }
}

impl Widget for HintBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, action) in self.hints() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {}  ", action), styles::text_muted()));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
