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
use download_master_api::unsync::{FormatOption, MediaType, VideoInfo};

pub const META_SEPARATOR: &str = " · ";

/// The "By uploader · duration" line, if there is anything to show
pub fn meta_line(info: &VideoInfo) -> Option<String> {
    let uploader = info.uploader.as_deref()
        .filter(|u| !u.is_empty())
        .map(|u| format!("By {u}"));
    let duration = info.duration.as_deref()
        .filter(|d| !d.is_empty())
        .map(str::to_owned);
    let parts: Vec<String> = uploader.into_iter().chain(duration).collect();
    (!parts.is_empty()).then(|| parts.join(META_SEPARATOR))
}

pub fn option_label(format: &FormatOption) -> String {
    format!("{} ({})", format.label, format.filesize)
}

/// A run of selector entries, rendered as an optgroup when labelled
pub struct FormatGroup<'a> {
    pub label: Option<&'static str>,
    /// Entries paired with their index in the original format list
    pub entries: Vec<(usize, &'a FormatOption)>,
}

/// Splits formats into untyped entries, then Video and Audio groups
///
/// Empty groups are omitted. Entries keep their original relative order.
pub fn group_formats(formats: &[FormatOption]) -> Vec<FormatGroup<'_>> {
    let mut ungrouped = FormatGroup { label: None, entries: Vec::new() };
    let mut video = FormatGroup { label: Some("Video"), entries: Vec::new() };
    let mut audio = FormatGroup { label: Some("Audio"), entries: Vec::new() };
    for (index, format) in formats.iter().enumerate() {
        let group = match format.media_type {
            None => &mut ungrouped,
            Some(MediaType::Video) => &mut video,
            Some(MediaType::Audio) => &mut audio,
        };
        group.entries.push((index, format));
    }
    [ungrouped, video, audio]
        .into_iter()
        .filter(|group| !group.entries.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn format(label: &str, media_type: Option<MediaType>) -> FormatOption {
        FormatOption {
            label: label.into(),
            filesize: "~12.34 MB".into(),
            format_id: label.into(),
            filename: "My Video".into(),
            ext: "mp4".into(),
            media_type,
            direct_url: None,
        }
    }

    fn info(uploader: Option<&str>, duration: Option<&str>) -> VideoInfo {
        VideoInfo {
            title: "My Video".into(),
            thumbnail_url: String::new().into(),
            uploader: uploader.map(Into::into),
            duration: duration.map(Into::into),
            original_url: "https://youtu.be/abc".into(),
            formats: Vec::new(),
        }
    }

    #[test]
    fn meta_line_parts() {
        assert_eq!(meta_line(&info(Some("Someone"), Some("3:21"))).as_deref(), Some("By Someone · 3:21"));
        assert_eq!(meta_line(&info(Some("Someone"), None)).as_deref(), Some("By Someone"));
        assert_eq!(meta_line(&info(None, Some("3:21"))).as_deref(), Some("3:21"));
        assert_eq!(meta_line(&info(None, None)), None);
        assert_eq!(meta_line(&info(Some(""), Some(""))), None);
    }

    #[test]
    fn option_labels_include_size() {
        assert_eq!(option_label(&format("1080p", None)), "1080p (~12.34 MB)");
    }

    #[test]
    fn groups_keep_original_indices() {
        let formats = vec![
            format("Audio MP3 (128k)", Some(MediaType::Audio)),
            format("1080p", Some(MediaType::Video)),
            format("best", None),
            format("720p", Some(MediaType::Video)),
        ];
        let groups = group_formats(&formats);
        let summary: Vec<(Option<&str>, Vec<usize>)> = groups.iter()
            .map(|g| (g.label, g.entries.iter().map(|(i, _)| *i).collect()))
            .collect();
        assert_eq!(summary, vec![
            (None, vec![2]),
            (Some("Video"), vec![1, 3]),
            (Some("Audio"), vec![0]),
        ]);
    }

    #[test]
    fn empty_groups_are_skipped() {
        let formats = vec![format("1080p", Some(MediaType::Video))];
        let groups = group_formats(&formats);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, Some("Video"));
        assert!(group_formats(&[]).is_empty());
    }
}
