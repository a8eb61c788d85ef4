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
use download_master_api::unsync::{FormatOption, VideoInfo};

use crate::constants::{DOWNLOAD_ENDPOINT, NO_FORMAT_MESSAGE};
use crate::errors::UiError;
use crate::utils::encode_uri_component;

/// Where the download button sends the browser
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkPolicy {
    /// Use the format's `direct_url` when it has one, the backend otherwise
    DirectPreferred,
    /// Always go through `/api/download`
    AlwaysInternal,
}

pub fn internal_download_url(info: &VideoInfo, format: &FormatOption) -> String {
    format!(
        "{DOWNLOAD_ENDPOINT}?url={}&format_id={}&filename={}&ext={}",
        encode_uri_component(&info.original_url),
        encode_uri_component(&format.format_id),
        encode_uri_component(&format.filename),
        encode_uri_component(&format.ext),
    )
}

pub fn build_download_url(policy: LinkPolicy, info: Option<&VideoInfo>, selected: Option<usize>) -> Result<String, UiError> {
    let format = info
        .zip(selected)
        .and_then(|(info, index)| info.formats.get(index).map(|format| (info, format)));
    let Some((info, format)) = format else {
        return Err(UiError::Validation(NO_FORMAT_MESSAGE));
    };
    let direct = format.direct_url.as_deref().filter(|url| !url.is_empty());
    Ok(match (policy, direct) {
        (LinkPolicy::DirectPreferred, Some(url)) => url.to_owned(),
        _ => internal_download_url(info, format),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use download_master_api::unsync::MediaType;

    fn info(direct_url: Option<&str>) -> VideoInfo {
        VideoInfo {
            title: "A/B test: 100%".into(),
            thumbnail_url: "https://i.ytimg.com/vi/abc/hq.jpg".into(),
            uploader: Some("Someone".into()),
            duration: Some("1:00".into()),
            original_url: "https://www.youtube.com/watch?v=abc&t=5".into(),
            formats: vec![
                FormatOption {
                    label: "720p".into(),
                    filesize: "~1.00 MB".into(),
                    format_id: "22+140".into(),
                    filename: "AB test 100".into(),
                    ext: "mp4".into(),
                    media_type: Some(MediaType::Video),
                    direct_url: direct_url.map(Into::into),
                },
            ],
        }
    }

    #[test]
    fn internal_link_is_fully_encoded() {
        let url = build_download_url(LinkPolicy::DirectPreferred, Some(&info(None)), Some(0)).unwrap();
        assert_eq!(
            url,
            "/api/download?url=https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3Dabc%26t%3D5&format_id=22%2B140&filename=AB%20test%20100&ext=mp4",
        );
    }

    #[test]
    fn direct_links_are_preferred() {
        let info = info(Some("https://cdn.example.com/v.mp4"));
        assert_eq!(
            build_download_url(LinkPolicy::DirectPreferred, Some(&info), Some(0)).unwrap(),
            "https://cdn.example.com/v.mp4",
        );
        assert!(build_download_url(LinkPolicy::AlwaysInternal, Some(&info), Some(0)).unwrap().starts_with("/api/download?url="));
    }

    #[test]
    fn empty_direct_link_is_ignored() {
        let url = build_download_url(LinkPolicy::DirectPreferred, Some(&info(Some(""))), Some(0)).unwrap();
        assert!(url.starts_with("/api/download?"));
    }

    #[test]
    fn nothing_selected() {
        let expected = Err(UiError::Validation(NO_FORMAT_MESSAGE));
        assert_eq!(build_download_url(LinkPolicy::DirectPreferred, None, Some(0)), expected);
        assert_eq!(build_download_url(LinkPolicy::DirectPreferred, Some(&info(None)), None), expected);
        assert_eq!(build_download_url(LinkPolicy::DirectPreferred, Some(&info(None)), Some(1)), expected);
    }
}
