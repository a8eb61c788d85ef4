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
use std::{collections::HashSet, ffi::OsStr, path::Path, process::Output, time::Duration};

use cloneable_errors::{bail, ErrContext, ErrorContext, ResContext};
use download_master_api::sync::{FormatOption, MediaType, VideoInfo};
use log::debug;
use serde::Deserialize;
use tokio::process::Command;

use crate::state::YtDlpConfig;

const MAX_FILENAME_CHARS: usize = 100;
const BYTES_PER_MB: f64 = 1024. * 1024.;

/// The subset of `yt-dlp --dump-json` output used to build a [`VideoInfo`]
#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct RawInfo {
    pub title: Option<String>,
    pub thumbnail: Option<String>,
    pub uploader: Option<String>,
    pub duration_string: Option<String>,
    pub formats: Vec<RawFormat>,
}

#[derive(Deserialize, Default, Debug)]
#[serde(default)]
pub struct RawFormat {
    pub format_id: String,
    pub acodec: Option<String>,
    pub vcodec: Option<String>,
    pub height: Option<u64>,
    pub abr: Option<f64>,
    pub filesize: Option<f64>,
    pub filesize_approx: Option<f64>,
}

impl RawFormat {
    fn has_audio(&self) -> bool {
        self.acodec.as_deref() != Some("none")
    }

    fn has_video(&self) -> bool {
        self.vcodec.as_deref() != Some("none")
    }

    fn filesize_label(&self) -> String {
        match self.filesize.filter(|s| *s > 0.).or(self.filesize_approx.filter(|s| *s > 0.)) {
            Some(bytes) => format!("~{:.2} MB", bytes / BYTES_PER_MB),
            None => "N/A".to_owned(),
        }
    }
}

/// A validated `/api/download` request
pub struct DownloadRequest<'a> {
    pub url: &'a str,
    pub format_id: &'a str,
    pub ext: &'a str,
}

/// Keeps alphanumerics, spaces, dashes and underscores
pub fn sanitize_filename(title: &str) -> String {
    let sanitized: String = title.chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    sanitized.trim_end().chars().take(MAX_FILENAME_CHARS).collect()
}

/// Builds the list of offered formats: one entry per video height (tallest first), followed by
/// the best audio-only stream converted to mp3
pub fn parse_formats(info: &RawInfo) -> Vec<FormatOption> {
    let title = sanitize_filename(info.title.as_deref().unwrap_or("video"));
    let mut formats = Vec::new();

    let mut seen_heights = HashSet::new();
    let mut videos: Vec<(u64, &RawFormat)> = info.formats.iter().rev()
        .filter(|f| f.has_video())
        .filter_map(|f| f.height.filter(|h| *h > 0).map(|h| (h, f)))
        .filter(|(h, _)| seen_heights.insert(*h))
        .collect();
    videos.sort_by(|(a, _), (b, _)| b.cmp(a));
    for (height, f) in videos {
        formats.push(FormatOption {
            label: format!("{height}p").into(),
            filesize: f.filesize_label().into(),
            format_id: format!("bestvideo[height<={height}]+bestaudio/best[height<={height}]").into(),
            filename: format!("{title}_{height}p.mp4").into(),
            ext: "mp4".into(),
            media_type: Some(MediaType::Video),
            direct_url: None,
        });
    }

    let best_audio = info.formats.iter().rev().find(|f| f.has_audio() && !f.has_video());
    if let Some(audio) = best_audio {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let abr = audio.abr.map_or(0, |abr| abr.round() as u64);
        formats.push(FormatOption {
            label: format!("Audio MP3 ({abr}k)").into(),
            filesize: audio.filesize_label().into(),
            format_id: audio.format_id.as_str().into(),
            filename: format!("{title}.mp3").into(),
            ext: "mp3".into(),
            media_type: Some(MediaType::Audio),
            direct_url: None,
        });
    }

    formats
}

pub fn video_info(raw: &RawInfo, original_url: &str) -> VideoInfo {
    VideoInfo {
        title: raw.title.as_deref().unwrap_or("No Title").into(),
        thumbnail_url: raw.thumbnail.as_deref().unwrap_or("").into(),
        uploader: raw.uploader.as_deref().map(Into::into),
        duration: raw.duration_string.as_deref().map(Into::into),
        original_url: original_url.into(),
        formats: parse_formats(raw),
    }
}

impl YtDlpConfig {
    /// Every yt-dlp child is killed when its future is dropped, timeouts included
    fn base_command(&self) -> Command {
        let mut cmd = Command::new(&self.path);
        cmd.kill_on_drop(true);
        cmd
    }

    fn command(&self) -> Command {
        let mut cmd = self.base_command();
        if self.force_ipv4 {
            cmd.arg("-4");
        }
        cmd
    }

    pub async fn version(&self) -> Result<String, ErrorContext> {
        let mut cmd = self.base_command();
        cmd.arg("--version");
        let output = run(cmd, Duration::from_secs(10)).await?;
        Ok(String::from_utf8_lossy(&output.stdout).trim().to_owned())
    }

    pub async fn fetch_info(&self, url: &str) -> Result<RawInfo, ErrorContext> {
        let mut cmd = self.command();
        cmd.args(["--dump-json", "--no-warnings", "--quiet", "--"]).arg(url);
        let output = run(cmd, self.info_timeout()).await?;
        serde_json::from_slice(&output.stdout).context("Failed to deserialize yt-dlp output")
    }

    /// Downloads the requested format using the given output template
    ///
    /// The template should end in `.%(ext)s`. Video is remuxed to mp4 and audio extracted to mp3,
    /// but the produced extension is up to yt-dlp.
    pub async fn download(&self, request: &DownloadRequest<'_>, output_template: &Path) -> Result<(), ErrorContext> {
        let mut cmd = self.command();
        cmd.args(["--no-warnings", "-f", request.format_id]);
        if request.ext == "mp3" {
            cmd.args(["-x", "--audio-format", "mp3"]);
        } else {
            cmd.args(["--merge-output-format", "mp4", "--remux-video", "mp4"]);
        }
        cmd.arg("-o").arg(output_template).arg("--").arg(request.url);
        run(cmd, self.download_timeout()).await?;
        Ok(())
    }
}

async fn run(mut cmd: Command, timeout: Duration) -> Result<Output, ErrorContext> {
    let program = cmd.as_std().get_program().to_string_lossy().into_owned();
    debug!("Running {program} {:?}", cmd.as_std().get_args().map(OsStr::to_string_lossy).collect::<Vec<_>>());
    let output = tokio::time::timeout(timeout, cmd.output()).await
        .map_err(|e| e.context(format!("{program} timed out after {}s", timeout.as_secs())))?
        .with_context(|| format!("Failed to run {program}"))?;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{program} exited with {}: {}", output.status, stderr.trim());
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawInfo {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn sanitizing() {
        assert_eq!(sanitize_filename("Hello, World! (Official Video)"), "Hello World Official Video");
        assert_eq!(sanitize_filename("a/b\\c:d  "), "abcd");
        assert_eq!(sanitize_filename("zażółć_gęślą-jaźń"), "zażółć_gęślą-jaźń");
        assert_eq!(sanitize_filename(&"x".repeat(150)).chars().count(), 100);
    }

    #[test]
    fn formats_from_ytdlp_output() {
        let info = raw(r#"{
            "title": "My: Video",
            "formats": [
                {"format_id": "139", "acodec": "mp4a.40.5", "vcodec": "none", "abr": 48.8, "filesize": 1048576},
                {"format_id": "140", "acodec": "mp4a.40.2", "vcodec": "none", "abr": 129.5, "filesize_approx": 3145728},
                {"format_id": "160", "acodec": "none", "vcodec": "avc1", "height": 144},
                {"format_id": "136", "acodec": "none", "vcodec": "avc1", "height": 720, "filesize": 10485760},
                {"format_id": "18", "acodec": "mp4a.40.2", "vcodec": "avc1", "height": 360, "filesize": null},
                {"format_id": "22", "acodec": "mp4a.40.2", "vcodec": "avc1", "height": 720, "filesize": 20971520},
                {"format_id": "sb0", "acodec": "none", "vcodec": "none"}
            ]
        }"#);
        let formats = parse_formats(&info);
        let labels: Vec<&str> = formats.iter().map(|f| &*f.label).collect();
        assert_eq!(labels, ["720p", "360p", "144p", "Audio MP3 (130k)"]);

        // last listed format wins for a given height
        assert_eq!(&*formats[0].filesize, "~20.00 MB");
        assert_eq!(&*formats[0].format_id, "bestvideo[height<=720]+bestaudio/best[height<=720]");
        assert_eq!(&*formats[0].filename, "My Video_720p.mp4");
        assert_eq!(&*formats[0].ext, "mp4");
        assert_eq!(formats[0].media_type, Some(MediaType::Video));
        assert_eq!(&*formats[1].filesize, "N/A");

        let audio = &formats[3];
        assert_eq!(&*audio.format_id, "140");
        assert_eq!(&*audio.filesize, "~3.00 MB");
        assert_eq!(&*audio.filename, "My Video.mp3");
        assert_eq!(&*audio.ext, "mp3");
        assert_eq!(audio.media_type, Some(MediaType::Audio));
    }

    #[test]
    fn no_formats() {
        let info = raw(r#"{"title": "Nothing"}"#);
        assert!(parse_formats(&info).is_empty());
    }

    #[test]
    fn audio_without_bitrate() {
        let info = raw(r#"{"formats": [{"format_id": "a", "acodec": "opus", "vcodec": "none"}]}"#);
        let formats = parse_formats(&info);
        assert_eq!(formats.len(), 1);
        assert_eq!(&*formats[0].label, "Audio MP3 (0k)");
        assert_eq!(&*formats[0].filename, "video.mp3");
    }

    #[test]
    fn info_defaults() {
        let info = video_info(&raw("{}"), "https://example.com/v");
        assert_eq!(&*info.title, "No Title");
        assert_eq!(&*info.thumbnail_url, "");
        assert_eq!(info.uploader, None);
        assert_eq!(info.duration, None);
        assert_eq!(&*info.original_url, "https://example.com/v");

        let info = video_info(&raw(r#"{"title": "T", "uploader": "U", "duration_string": "3:21"}"#), "x");
        assert_eq!(info.uploader.as_deref(), Some("U"));
        assert_eq!(info.duration.as_deref(), Some("3:21"));
    }

    #[actix_web::test]
    async fn missing_binary_is_an_error() {
        let config = YtDlpConfig {
            path: "/nonexistent/yt-dlp".into(),
            ..YtDlpConfig::default()
        };
        assert!(config.fetch_info("https://example.com").await.is_err());
        assert!(config.version().await.is_err());
    }

    #[cfg(unix)]
    fn script(dir: &Path, body: &str) -> std::path::PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = dir.join("fake-yt-dlp");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[cfg(unix)]
    #[actix_web::test]
    async fn version_is_trimmed() {
        let dir = tempfile::tempdir().unwrap();
        let config = YtDlpConfig {
            path: script(dir.path(), "echo ' 2025.06.30 '"),
            ..YtDlpConfig::default()
        };
        assert_eq!(config.version().await.unwrap(), "2025.06.30");
    }

    #[cfg(unix)]
    #[actix_web::test]
    async fn timed_out_process_is_killed() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("still-running");
        let config = YtDlpConfig {
            path: script(dir.path(), &format!("sleep 2\ntouch '{}'", marker.display())),
            force_ipv4: false,
            info_timeout_secs: 1,
            ..YtDlpConfig::default()
        };
        assert!(config.fetch_info("https://example.com").await.is_err());
        tokio::time::sleep(Duration::from_secs(3)).await;
        assert!(!marker.exists());
    }
}
