//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use fxconv_app::{AppState, Focus, PickerSide};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads the state and draws it, nothing else.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area, state.settings.ui.show_hints);
    let conversion = &state.conversion;
    // Focus highlights are hidden behind the picker
    let focus = state.picker.is_none().then_some(state.focus);

    frame.render_widget(widgets::Header::new(state), areas.header);

    frame.render_widget(
        widgets::AmountField::new(&conversion.amount_text)
            .focused(focus == Some(Focus::Amount))
            .invalid(conversion.conversion_disabled()),
        areas.amount,
    );
    frame.render_widget(
        widgets::Button::new("⇄ Swap").focused(focus == Some(Focus::Swap)),
        areas.swap,
    );

    frame.render_widget(widgets::ErrorLine::new(conversion.error.as_ref()), areas.error);

    let source_label = state.source_label();
    frame.render_widget(
        widgets::CurrencySelect::new(PickerSide::Source.title(), &source_label)
            .focused(focus == Some(Focus::Source)),
        areas.source,
    );
    let target_label = state.target_label();
    frame.render_widget(
        widgets::CurrencySelect::new(PickerSide::Target.title(), &target_label)
            .focused(focus == Some(Focus::Target)),
        areas.target,
    );

    frame.render_widget(
        widgets::ResultPanel::new(conversion).animation_frame(state.animation_frame),
        areas.result,
    );

    frame.render_widget(
        widgets::Button::new("Convert")
            .focused(focus == Some(Focus::Convert))
            .enabled(!conversion.conversion_disabled()),
        areas.convert,
    );

    if state.settings.ui.show_hints {
        frame.render_widget(widgets::HintBar::new(state.picker.is_some()), areas.hints);
    }

    // Modal last so it sits on top of the form
    if let Some(picker) = &state.picker {
        frame.render_widget(widgets::PickerModal::new(picker), area);
    }
}
