//! Currency picker modal state
//!
//! A filterable list of `CODE (Name)` options. The picker never touches the
//! conversion state itself; confirming produces the code (or `None`) for a
//! `SetSource`/`SetTarget` message.

use fxconv_core::{CurrencyCatalog, CurrencyCode, CurrencyOption};

use crate::fuzzy::fuzzy_filter;

/// Which selection the picker edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerSide {
    Source,
    Target,
}

impl PickerSide {
    pub fn title(&self) -> &'static str {
        match self {
            PickerSide::Source => "Convert from",
            PickerSide::Target => "Convert to",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PickerState {
    pub side: PickerSide,
    pub query: String,
    options: Vec<CurrencyOption>,
    labels: Vec<String>,
    /// Indices into `options`, best match first
    filtered: Vec<usize>,
    /// Position within `filtered`
    selected: usize,
}

impl PickerState {
    /// Open over `catalog`, with `current` highlighted when listed
    pub fn new(side: PickerSide, catalog: &CurrencyCatalog, current: &CurrencyCode) -> Self {
        let options = catalog.options();
        let labels = options.iter().map(|o| o.label.clone()).collect();
        let selected = options
            .iter()
            .position(|o| &o.code == current)
            .unwrap_or(0);

        Self {
            side,
            query: String::new(),
            filtered: (0..options.len()).collect(),
            options,
            labels,
            selected,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn backspace(&mut self) {
        if self.query.pop().is_some() {
            self.refilter();
        }
    }

    fn refilter(&mut self) {
        self.filtered = fuzzy_filter(&self.query, &self.labels);
        self.selected = 0;
    }

    pub fn move_up(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.filtered.len() - 1);
        }
    }

    pub fn move_down(&mut self) {
        if !self.filtered.is_empty() {
            self.selected = (self.selected + 1) % self.filtered.len();
        }
    }

    /// Visible options in display order
    pub fn visible(&self) -> impl Iterator<Item = &CurrencyOption> {
        self.filtered.iter().map(|&i| &self.options[i])
    }

    pub fn visible_count(&self) -> usize {
        self.filtered.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Highlighted code; `None` when nothing matches
    pub fn selected_code(&self) -> Option<CurrencyCode> {
        self.filtered
            .get(self.selected)
            .map(|&i| self.options[i].code.clone())
    }
}
