//! Focus and currency picker handlers

use crate::message::Message;
use crate::picker::{PickerSide, PickerState};
use crate::state::AppState;

use super::UpdateResult;

pub fn handle_focus_next(state: &mut AppState) -> UpdateResult {
    state.focus = state.focus.next();
    UpdateResult::none()
}

pub fn handle_focus_prev(state: &mut AppState) -> UpdateResult {
    state.focus = state.focus.prev();
    UpdateResult::none()
}

pub fn handle_open(state: &mut AppState, side: PickerSide) -> UpdateResult {
    let current = match side {
        PickerSide::Source => &state.conversion.source,
        PickerSide::Target => &state.conversion.target,
    };
    state.picker = Some(PickerState::new(side, &state.catalog, current));
    UpdateResult::none()
}

pub fn handle_close(state: &mut AppState) -> UpdateResult {
    state.picker = None;
    UpdateResult::none()
}

pub fn handle_input(state: &mut AppState, c: char) -> UpdateResult {
    if let Some(picker) = state.picker.as_mut() {
        picker.push_char(c);
    }
    UpdateResult::none()
}

pub fn handle_backspace(state: &mut AppState) -> UpdateResult {
    if let Some(picker) = state.picker.as_mut() {
        picker.backspace();
    }
    UpdateResult::none()
}

pub fn handle_up(state: &mut AppState) -> UpdateResult {
    if let Some(picker) = state.picker.as_mut() {
        picker.move_up();
    }
    UpdateResult::none()
}

pub fn handle_down(state: &mut AppState) -> UpdateResult {
    if let Some(picker) = state.picker.as_mut() {
        picker.move_down();
    }
    UpdateResult::none()
}

/// Close the picker and forward its choice; an empty match forwards `None`
pub fn handle_confirm(state: &mut AppState) -> UpdateResult {
    let Some(picker) = state.picker.take() else {
        return UpdateResult::none();
    };

    let code = picker.selected_code();
    UpdateResult::message(match picker.side {
        PickerSide::Source => Message::SetSource(code),
        PickerSide::Target => Message::SetTarget(code),
    })
}
