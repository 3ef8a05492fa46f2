//! Conversion result with its expiry countdown

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use fxconv_app::ConversionState;

use super::header::spinner_frame;
use crate::theme::styles;

pub struct ResultPanel<'a> {
    conversion: &'a ConversionState,
    animation_frame: u64,
}

impl<'a> ResultPanel<'a> {
    pub fn new(conversion: &'a ConversionState) -> Self {
        Self {
            conversion,
            animation_frame: 0,
        }
    }

    pub fn animation_frame(mut self, frame: u64) -> Self {
        self.animation_frame = frame;
        self
    }

    fn lines(&self) -> Vec<Line<'static>> {
        // A pending request outranks an older result still counting down
        if self.conversion.is_converting() {
            return vec![Line::from(vec![
                Span::raw(" "),
                Span::styled(spinner_frame(self.animation_frame), styles::accent()),
                Span::styled(" Converting...", styles::text_secondary()),
            ])];
        }

        match (self.conversion.visible_result(), self.conversion.expires_in()) {
            (Some(result), Some(remaining)) => vec![
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(result.summary(), styles::accent_bold()),
                ]),
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled(format!("Expires in: {}", remaining), styles::text_muted()),
                ]),
            ],
            _ => Vec::new(),
        }
    }
}

impl Widget for ResultPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        Paragraph::new(lines)
            .block(styles::glass_block(false).title(" Result "))
            .render(area, buf);
    }
}
