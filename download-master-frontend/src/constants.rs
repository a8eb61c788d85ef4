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
use std::{sync::LazyLock, time::Duration};

use reqwest::Client;

use crate::button_state::ButtonStyle;
use crate::download_link::LinkPolicy;

pub static REQWEST_CLIENT: LazyLock<Client> = LazyLock::new(Client::new);

// Backend endpoints

pub const FETCH_INFO_ENDPOINT: &[&str] = &["api", "fetch_info"];
pub const DOWNLOAD_ENDPOINT:   &str    = "/api/download";

// User-facing messages

pub const EMPTY_URL_MESSAGE:      &str = "Please paste a URL first.";
pub const NO_FORMAT_MESSAGE:      &str = "Please select a format to download.";
pub const FETCH_FALLBACK_MESSAGE: &str = "An unexpected error occurred. Please try again.";

// Download button

pub const DOWNLOAD_LINK_POLICY:  LinkPolicy  = LinkPolicy::DirectPreferred;
pub const DOWNLOAD_BUTTON_STYLE: ButtonStyle = ButtonStyle::Path;
/// Length of the full arrow animation, the button reports success halfway through it
pub const ANIMATION_DURATION:    Duration    = Duration::from_millis(3000);
pub const ANIMATION_FRAME:       Duration    = Duration::from_millis(16);
pub const SPINNER_SUCCESS_DELAY: Duration    = Duration::from_secs(15);
pub const SPINNER_RESET_DELAY:   Duration    = Duration::from_secs(3);

// Theme

pub const THEME_STORAGE_KEY: &str = "theme";
pub const DARK_THEME_CLASS:  &str = "dark";
pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

pub const VERSION_STRING: &str = env!("CARGO_PKG_VERSION");
