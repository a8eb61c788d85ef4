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

// NOTE: This file is used as a template for download-master-api::sync and ::unsync modules.
//       The RcStr type will be defined externally with the correct smart pointer variant for the
//       module.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, IntoStaticStr};

/// Kind of media a [`FormatOption`] produces, used for grouping in the format selector
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, IntoStaticStr, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    Video,
    Audio,
}

/// One downloadable quality/codec/container combination
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct FormatOption {
    pub label: RcStr,
    /// Pre-formatted size, like `~12.34 MB` or `N/A`
    pub filesize: RcStr,
    pub format_id: RcStr,
    pub filename: RcStr,
    pub ext: RcStr,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
    /// A link that can be navigated to directly, bypassing `/api/download`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direct_url: Option<RcStr>,
}

/// Response of `POST /api/fetch_info`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VideoInfo {
    pub title: RcStr,
    #[serde(rename = "thumbnail")]
    pub thumbnail_url: RcStr,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploader: Option<RcStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<RcStr>,
    pub original_url: RcStr,
    pub formats: Vec<FormatOption>,
}

/// Body of `POST /api/fetch_info`
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct FetchInfoRequest {
    pub url: Option<RcStr>,
}

/// Query string of `GET /api/download`
///
/// All fields are required by the endpoint, they are optional here so that a missing one can be
/// reported with a proper message instead of a generic deserialization failure.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(default)]
pub struct DownloadQuery {
    pub url: Option<RcStr>,
    pub format_id: Option<RcStr>,
    pub filename: Option<RcStr>,
    pub ext: Option<RcStr>,
}

/// Body of every non-2xx JSON response
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: RcStr,
}
