/* This file is part of the Download Master project - https://github.com/download-master/download-master
*
*  Copyright (C) 2025 Download Master contributors
*
*  This program is free software: you can redistribute it and/or modify
*  it under the terms of the GNU Affero General Public License as published by
*  the Free Software Foundation, either version 3 of the License, or
*  (at your option) any later version.
*
*  This program is distributed in the hope that it will be useful,
*  but WITHOUT ANY WARRANTY; without even the implied warranty of
*  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
*  GNU Affero General Public License for more details.
*
*  You should have received a copy of the GNU Affero General Public License
*  along with this program.  If not, see <https://www.gnu.org/licenses/>.
*/
use std::time::Duration;

use strum::IntoStaticStr;

use crate::constants::{ANIMATION_DURATION, SPINNER_RESET_DELAY, SPINNER_SUCCESS_DELAY};
use crate::errors::UiError;

/// Doubles as the CSS modifier class of the button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum ButtonState {
    #[default]
    Idle,
    Loading,
    Success,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonStyle {
    /// Animated arrow that morphs into a check mark, success is final
    Path,
    /// Spinner icon, the button returns to idle after showing success
    Spinner,
}

impl ButtonStyle {
    pub fn success_delay(self) -> Duration {
        match self {
            ButtonStyle::Path => ANIMATION_DURATION / 2,
            ButtonStyle::Spinner => SPINNER_SUCCESS_DELAY,
        }
    }

    pub fn reset_delay(self) -> Option<Duration> {
        match self {
            ButtonStyle::Path => None,
            ButtonStyle::Spinner => Some(SPINNER_RESET_DELAY),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The button was busy, nothing happened
    Ignored,
    Rejected(UiError),
    Navigate(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DownloadButtonController {
    pub style: ButtonStyle,
    pub state: ButtonState,
}

impl DownloadButtonController {
    pub fn new(style: ButtonStyle) -> Self {
        Self { style, state: ButtonState::Idle }
    }

    /// Handles a click, moving to loading only when a link could be built
    pub fn click<F>(&mut self, build_link: F) -> ClickOutcome
    where F: FnOnce() -> Result<String, UiError>
    {
        if self.state != ButtonState::Idle {
            return ClickOutcome::Ignored;
        }
        match build_link() {
            Err(err) => ClickOutcome::Rejected(err),
            Ok(url) => {
                self.state = ButtonState::Loading;
                ClickOutcome::Navigate(url)
            },
        }
    }

    pub fn finish(&mut self) -> bool {
        if self.state != ButtonState::Loading {
            return false;
        }
        self.state = ButtonState::Success;
        true
    }

    pub fn reset(&mut self) {
        self.state = ButtonState::Idle;
    }

    pub fn label(&self) -> &'static str {
        match (self.state, self.style) {
            (ButtonState::Idle, _) | (ButtonState::Loading, ButtonStyle::Path) => "Download Now",
            (ButtonState::Loading, ButtonStyle::Spinner) => "Downloading...",
            (ButtonState::Success, _) => "Success!",
        }
    }

    pub fn disabled(&self) -> bool {
        self.state != ButtonState::Idle
    }

    /// Whether the spinner style shows its icon, the path style always draws its arrow
    pub fn icon_visible(&self) -> bool {
        self.state != ButtonState::Success
    }

    pub fn css_class(&self) -> &'static str {
        self.state.into()
    }
}
