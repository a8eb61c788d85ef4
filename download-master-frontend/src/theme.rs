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
use gloo_console::warn;
use strum::{EnumString, IntoStaticStr};
use web_sys::window;

use crate::constants::{DARK_SCHEME_QUERY, DARK_THEME_CLASS, THEME_STORAGE_KEY};

#[derive(Clone, Copy, Debug, PartialEq, Eq, IntoStaticStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Picks the theme from the stored preference, falling back to the system color scheme
    pub fn resolve(stored: Option<&str>, prefers_dark: bool) -> Theme {
        match stored.and_then(|s| s.parse().ok()) {
            Some(theme) => theme,
            None if prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn load() -> Theme {
        let Some(window) = window() else {
            return Theme::Light;
        };
        let stored = match window.local_storage() {
            Ok(Some(storage)) => storage.get_item(THEME_STORAGE_KEY).ok().flatten(),
            _ => None,
        };
        let prefers_dark = window
            .match_media(DARK_SCHEME_QUERY)
            .ok()
            .flatten()
            .is_some_and(|query| query.matches());
        Theme::resolve(stored.as_deref(), prefers_dark)
    }

    pub fn store(self) {
        let storage = window().and_then(|w| w.local_storage().ok().flatten());
        let Some(storage) = storage else {
            warn!("localStorage is unavailable, theme preference will not persist");
            return;
        };
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, self.as_str()) {
            warn!("Failed to save theme preference", err);
        }
    }

    /// Toggles the dark class on the document root
    pub fn apply(self) {
        let Some(root) = window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if let Err(err) = root.class_list().toggle_with_force(DARK_THEME_CLASS, self == Theme::Dark) {
            warn!("Failed to apply theme", err);
        }
    }
}
