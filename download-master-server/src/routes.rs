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
#![allow(clippy::needless_pass_by_value)]
use std::{ffi::OsStr, fs, path::{Path, PathBuf}, sync::Arc};

use actix_files::NamedFile;
use actix_web::{get, http::{header::{Charset, ContentDisposition, DispositionParam, DispositionType, ExtendedValue}, StatusCode}, post, web, HttpRequest, HttpResponse};
use cloneable_errors::{anyhow, ErrContext, ResContext};
use download_master_api::sync::{DownloadQuery, FetchInfoRequest, VideoInfo};
use log::{debug, info, warn};
use uuid::Uuid;

use crate::{constants::*, errors::{Error, Result}, state::AppConfig, ytdlp::{self, DownloadRequest}};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _| {
        debug!("Rejected request body: {err}");
        Error::from(anyhow!(INVALID_REQUEST_BODY)).set_status(StatusCode::BAD_REQUEST).into()
    }))
       .service(fetch_info)
       .service(download);
}

type JsonResult<T> = Result<web::Json<T>>;

fn non_empty(value: Option<&Arc<str>>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

#[post("/fetch_info")]
async fn fetch_info(config: web::Data<AppConfig>, body: web::Json<FetchInfoRequest>) -> JsonResult<VideoInfo> {
    let Some(url) = non_empty(body.url.as_ref()) else {
        return Err(Error::from(anyhow!(URL_REQUIRED)).set_status(StatusCode::BAD_REQUEST));
    };
    let raw = match config.ytdlp.fetch_info(url).await {
        Ok(raw) => raw,
        Err(err) => {
            warn!("Failed to fetch info for {url}: {err:?}");
            return Err(Error::from(err.context(INFO_UNAVAILABLE)).set_status(StatusCode::NOT_FOUND));
        }
    };
    let info = ytdlp::video_info(&raw, url);
    info!("Fetched info for {url}: {} formats", info.formats.len());
    Ok(web::Json(info))
}

#[get("/download")]
async fn download(req: HttpRequest, config: web::Data<AppConfig>, query: web::Query<DownloadQuery>) -> Result<HttpResponse> {
    let (Some(url), Some(format_id), Some(filename), Some(ext)) = (
        non_empty(query.url.as_ref()),
        non_empty(query.format_id.as_ref()),
        non_empty(query.filename.as_ref()),
        non_empty(query.ext.as_ref()),
    ) else {
        return Err(Error::from(anyhow!(MISSING_PARAMETERS)).set_status(StatusCode::BAD_REQUEST).plaintext());
    };
    if !EXTENSION_REGEX.is_match(ext) {
        return Err(Error::from(anyhow!(INVALID_EXTENSION)).set_status(StatusCode::BAD_REQUEST).plaintext());
    }

    let temp = TempFiles::new(&config.tmp_path);
    info!("Downloading format {format_id} of {url} as {}", temp.stem);

    let request = DownloadRequest { url, format_id, ext };
    config.ytdlp.download(&request, &temp.template()).await
        .map_err(|err| Error::from(err.context(DOWNLOAD_FAILED)).plaintext())?;
    let Some(path) = temp.output(ext) else {
        return Err(Error::from(anyhow!("yt-dlp did not produce an output file").context(DOWNLOAD_FAILED)).plaintext());
    };
    if path.extension() != Some(OsStr::new(ext)) {
        debug!("yt-dlp produced {} instead of a .{ext} file", path.display());
    }
    let file = NamedFile::open_async(&path).await
        .context("Failed to open the downloaded file")
        .map_err(|err| Error::from(err.context(DOWNLOAD_FAILED)).plaintext())?;

    // `temp` unlinks the file when this returns, the open handle keeps it readable while streaming
    Ok(file
        .set_content_disposition(attachment(filename))
        .into_response(&req))
}

fn attachment(filename: &str) -> ContentDisposition {
    let mut parameters = vec![DispositionParam::Filename(filename.to_owned())];
    if !filename.is_ascii() {
        parameters.push(DispositionParam::FilenameExt(ExtendedValue {
            charset: Charset::Ext(String::from("UTF-8")),
            language_tag: None,
            value: filename.as_bytes().to_vec(),
        }));
    }
    ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters,
    }
}

/// Everything yt-dlp writes for one download, all named `<stem>.*`
///
/// Removed on drop, whichever way the request ends.
struct TempFiles {
    dir: PathBuf,
    stem: String,
}

impl TempFiles {
    fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_owned(),
            stem: Uuid::new_v4().to_string(),
        }
    }

    fn template(&self) -> PathBuf {
        self.dir.join(format!("{}.%(ext)s", self.stem))
    }

    fn list(&self) -> Vec<PathBuf> {
        let prefix = format!("{}.", self.stem);
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        entries
            .flatten()
            .filter(|entry| entry.file_name().to_str().is_some_and(|name| name.starts_with(&prefix)))
            .map(|entry| entry.path())
            .collect()
    }

    fn output(&self, ext: &str) -> Option<PathBuf> {
        pick_output(self.list(), &self.dir.join(format!("{}.{ext}", self.stem)))
    }
}

impl Drop for TempFiles {
    fn drop(&mut self) {
        for path in self.list() {
            if let Err(err) = fs::remove_file(&path) {
                warn!("Failed to clean up {}: {err}", path.display());
            }
        }
    }
}

/// The finished file, preferring the requested name over whatever else yt-dlp produced
fn pick_output(files: Vec<PathBuf>, expected: &Path) -> Option<PathBuf> {
    if files.iter().any(|file| file == expected) {
        return Some(expected.to_owned());
    }
    files.into_iter().find(|file| {
        file.extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| !matches!(ext, "part" | "ytdl" | "temp"))
    })
}
