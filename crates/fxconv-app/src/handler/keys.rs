//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::picker::PickerSide;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on focus and the open picker
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => return Some(Message::Quit),
        InputKey::CharCtrl('x') => return Some(Message::Swap),
        _ => {}
    }

    if state.picker.is_some() {
        return handle_key_picker(key);
    }

    match key {
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Esc => Some(Message::Quit),
        _ => match state.focus {
            Focus::Amount => handle_key_amount(state, key),
            Focus::Swap => activate(key, Message::Swap),
            Focus::Source => handle_key_selection(key, PickerSide::Source),
            Focus::Target => handle_key_selection(key, PickerSide::Target),
            Focus::Convert => activate(key, Message::Convert),
        },
    }
}

/// Handle key events while the currency picker is open
fn handle_key_picker(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::ClosePicker),
        InputKey::Enter => Some(Message::PickerConfirm),
        InputKey::Up => Some(Message::PickerUp),
        InputKey::Down | InputKey::Tab => Some(Message::PickerDown),
        InputKey::BackTab => Some(Message::PickerUp),
        InputKey::Backspace => Some(Message::PickerBackspace),
        InputKey::Char(c) => Some(Message::PickerInput(c)),
        _ => None,
    }
}

/// Handle key events in the amount field.
///
/// Every edit sends the whole new text, even when it will be rejected, so the
/// field always shows what was typed.
fn handle_key_amount(state: &AppState, key: InputKey) -> Option<Message> {
    let text = &state.conversion.amount_text;
    match key {
        InputKey::Enter => Some(Message::Convert),
        InputKey::Char(c) => {
            let mut next = text.clone();
            next.push(c);
            Some(Message::AmountChanged(next))
        }
        InputKey::Backspace if !text.is_empty() => {
            let mut next = text.clone();
            next.pop();
            Some(Message::AmountChanged(next))
        }
        InputKey::CharCtrl('u') if !text.is_empty() => Some(Message::AmountChanged(String::new())),
        _ => None,
    }
}

fn handle_key_selection(key: InputKey, side: PickerSide) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') | InputKey::Down => Some(Message::OpenPicker(side)),
        _ => None,
    }
}

/// Enter or Space on a button
fn activate(key: InputKey, message: Message) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') => Some(message),
        _ => None,
    }
}
