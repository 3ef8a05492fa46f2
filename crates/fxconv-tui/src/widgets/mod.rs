//! Custom widget components

mod amount_field;
mod button;
mod currency_select;
mod error_line;
mod header;
mod hint_bar;
pub mod modal_overlay;
mod picker_modal;
mod result_panel;

pub use amount_field::AmountField;
pub use button::Button;
pub use currency_select::CurrencySelect;
pub use error_line::ErrorLine;
pub use header::{spinner_frame, Header};
pub use hint_bar::HintBar;
pub use picker_modal::PickerModal;
pub use result_panel::ResultPanel;
