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

#[cfg(feature = "sync")]
pub mod sync {
    pub type RcStr = std::sync::Arc<str>;

    include!("api.rs");
}

#[cfg(feature = "unsync")]
pub mod unsync {
    pub type RcStr = std::rc::Rc<str>;

    include!("api.rs");
}

#[cfg(all(test, feature = "sync"))]
mod tests {
    use crate::sync::*;

    #[test]
    fn info_without_optional_fields() {
        let info: VideoInfo = serde_json::from_str(r#"{
            "title": "A video",
            "thumbnail": "https://example.com/t.jpg",
            "original_url": "https://example.com/watch?v=1",
            "formats": [{
                "label": "720p",
                "filesize": "~1.00 MB",
                "format_id": "22",
                "filename": "A video_720p.mp4",
                "ext": "mp4"
            }]
        }"#).unwrap();
        assert_eq!(info.uploader, None);
        assert_eq!(info.duration, None);
        assert_eq!(info.formats.len(), 1);
        assert_eq!(info.formats[0].media_type, None);
        assert_eq!(info.formats[0].direct_url, None);
        assert_eq!(&*info.thumbnail_url, "https://example.com/t.jpg");
    }

    #[test]
    fn format_wire_names() {
        let format: FormatOption = serde_json::from_str(r#"{
            "label": "Audio MP3 (128k)",
            "filesize": "N/A",
            "format_id": "140",
            "filename": "A video.mp3",
            "ext": "mp3",
            "type": "audio",
            "direct_url": "https://cdn.example.com/a.mp3"
        }"#).unwrap();
        assert_eq!(format.media_type, Some(MediaType::Audio));
        assert_eq!(format.direct_url.as_deref(), Some("https://cdn.example.com/a.mp3"));

        let value = serde_json::to_value(&format).unwrap();
        assert_eq!(value["type"], "audio");
        assert!(value.get("media_type").is_none());
    }

    #[test]
    fn absent_options_are_not_serialized() {
        let info = VideoInfo {
            title: "t".into(),
            thumbnail_url: "".into(),
            uploader: None,
            duration: Some("1:00".into()),
            original_url: "u".into(),
            formats: Vec::new(),
        };
        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("uploader").is_none());
        assert_eq!(value["duration"], "1:00");
        assert_eq!(value["thumbnail"], "");
    }

    #[test]
    fn media_type_names() {
        let name: &'static str = MediaType::Video.into();
        assert_eq!(name, "video");
        assert_eq!(MediaType::Audio.as_ref(), "audio");
    }

    #[test]
    fn download_query_allows_missing_fields() {
        let query: DownloadQuery = serde_json::from_str(r#"{"url": "x"}"#).unwrap();
        assert_eq!(query.url.as_deref(), Some("x"));
        assert_eq!(query.ext, None);
    }
}
