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
use std::sync::LazyLock;

use regex::Regex;

pub const URL_REQUIRED: &str = "URL is required";
pub const INVALID_REQUEST_BODY: &str = "Invalid request body";
pub const INFO_UNAVAILABLE: &str = "Could not fetch video information. The URL might be invalid, private, or unsupported.";
pub const MISSING_PARAMETERS: &str = "Missing required parameters";
pub const INVALID_EXTENSION: &str = "Invalid file extension";
pub const DOWNLOAD_FAILED: &str = "Error during download process";

pub static EXTENSION_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{1,8}$").expect("EXTENSION_REGEX should be valid"));
