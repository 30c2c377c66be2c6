use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Top-level page sections.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, StrumDisplay, EnumIter, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Trade,
    Dashboard,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Self::Trade => "Trade",
            Self::Dashboard => "Dashboard",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Trade => "📈",
            Self::Dashboard => "📊",
        }
    }
}

/// Which tab the page shell shows. Mutated only through `set_active_tab`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    active_tab: Tab,
}

impl NavigationState {
    pub fn active_tab(&self) -> Tab {
        self.active_tab
    }

    pub fn set_active_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}
