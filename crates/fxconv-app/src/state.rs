//! Application state (Model in TEA pattern)

use fxconv_core::CurrencyCatalog;

use crate::config::Settings;
use crate::conversion::ConversionState;
use crate::picker::PickerState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Focusable controls, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Amount,
    Swap,
    Source,
    Target,
    Convert,
}

impl Focus {
    const ORDER: [Focus; 5] = [
        Focus::Amount,
        Focus::Swap,
        Focus::Source,
        Focus::Target,
        Focus::Convert,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Code to display name, empty until the catalog loads
    pub catalog: CurrencyCatalog,

    /// Set once the catalog fetch has been issued
    pub catalog_requested: bool,

    pub conversion: ConversionState,

    pub focus: Focus,

    /// Open currency picker modal
    pub picker: Option<PickerState>,

    pub settings: Settings,

    /// Advanced on every Tick; drives the busy marker
    pub animation_frame: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    /// State seeded from the configured defaults
    pub fn with_settings(settings: Settings) -> Self {
        let conversion = ConversionState::new(
            settings.defaults.source.clone(),
            settings.defaults.target.clone(),
            settings.defaults.amount.clone(),
        );

        Self {
            phase: AppPhase::Running,
            catalog: CurrencyCatalog::new(),
            catalog_requested: false,
            conversion,
            focus: Focus::Amount,
            picker: None,
            settings,
            animation_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// `"CODE/Name"` label for the source selection
    pub fn source_label(&self) -> String {
        self.catalog.selection_label(&self.conversion.source)
    }

    /// `"CODE/Name"` label for the target selection
    pub fn target_label(&self) -> String {
        self.catalog.selection_label(&self.conversion.target)
    }
}
