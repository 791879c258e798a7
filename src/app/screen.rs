// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

use crate::ui::navbar::Tab;

/// Screens the user can navigate between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Upload,
    Scene,
}

impl From<Tab> for Screen {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Upload => Screen::Upload,
            Tab::Scene => Screen::Scene,
        }
    }
}

impl From<Screen> for Tab {
    fn from(screen: Screen) -> Self {
        match screen {
            Screen::Upload => Tab::Upload,
            Screen::Scene => Tab::Scene,
        }
    }
}
