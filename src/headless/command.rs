//! Stdin command parsing for headless mode
//!
//! One command per line:
//!
//! ```text
//! amount <text>   set the amount field (text may be empty or invalid)
//! from <CODE>     set the source currency
//! to <CODE>       set the target currency
//! swap
//! convert
//! quit
//! ```

use fxconv_app::Message;
use fxconv_core::CurrencyCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessCommand {
    Amount(String),
    From(CurrencyCode),
    To(CurrencyCode),
    Swap,
    Convert,
    Quit,
}

impl HeadlessCommand {
    /// Parse one trimmed stdin line. `None` means the line is not a command.
    pub fn parse(line: &str) -> Option<Self> {
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word {
            "amount" => Some(Self::Amount(rest.to_string())),
            "from" => CurrencyCode::parse(rest).ok().map(Self::From),
            "to" => CurrencyCode::parse(rest).ok().map(Self::To),
            "swap" if rest.is_empty() => Some(Self::Swap),
            "convert" if rest.is_empty() => Some(Self::Convert),
            "q" | "quit" if rest.is_empty() => Some(Self::Quit),
            _ => None,
        }
    }

    pub fn into_message(self) -> Message {
        match self {
            Self::Amount(text) => Message::AmountChanged(text),
            Self::From(code) => Message::SetSource(Some(code)),
            Self::To(code) => Message::SetTarget(Some(code)),
            Self::Swap => Message::Swap,
            Self::Convert => Message::Convert,
            Self::Quit => Message::Quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(raw: &str) -> CurrencyCode {
        CurrencyCode::parse(raw).unwrap()
    }

    #[test]
    fn test_amount_keeps_raw_text() {
        assert_eq!(
            HeadlessCommand::parse("amount 12a"),
            Some(HeadlessCommand::Amount("12a".into()))
        );
        assert_eq!(
            HeadlessCommand::parse("amount"),
            Some(HeadlessCommand::Amount(String::new()))
        );
        assert_eq!(
            HeadlessCommand::parse("amount   -5.5"),
            Some(HeadlessCommand::Amount("-5.5".into()))
        );
    }

    #[test]
    fn test_currency_commands_normalise_codes() {
        assert_eq!(
            HeadlessCommand::parse("from eur"),
            Some(HeadlessCommand::From(code("EUR")))
        );
        assert_eq!(
            HeadlessCommand::parse("to USD"),
            Some(HeadlessCommand::To(code("USD")))
        );
        assert_eq!(HeadlessCommand::parse("to"), None);
    }

    #[test]
    fn test_bare_commands() {
        assert_eq!(HeadlessCommand::parse("swap"), Some(HeadlessCommand::Swap));
        assert_eq!(
            HeadlessCommand::parse("convert"),
            Some(HeadlessCommand::Convert)
        );
        assert_eq!(HeadlessCommand::parse("q"), Some(HeadlessCommand::Quit));
        assert_eq!(HeadlessCommand::parse("quit"), Some(HeadlessCommand::Quit));
        assert_eq!(HeadlessCommand::parse("swap now"), None);
    }

    #[test]
    fn test_unknown_lines() {
        assert_eq!(HeadlessCommand::parse("reload"), None);
        assert_eq!(HeadlessCommand::parse("AMOUNT 5"), None);
    }

    #[test]
    fn test_into_message() {
        assert!(matches!(
            HeadlessCommand::Amount("7".into()).into_message(),
            Message::AmountChanged(text) if text == "7"
        ));
        assert!(matches!(
            HeadlessCommand::To(code("JPY")).into_message(),
            Message::SetTarget(Some(c)) if c == code("JPY")
        ));
        assert!(matches!(HeadlessCommand::Quit.into_message(), Message::Quit));
    }
}
