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
use std::rc::Rc;

use cloneable_errors::{ErrorContext, ResContext};
use download_master_api::unsync::{ErrorResponse, FetchInfoRequest, VideoInfo};
use gloo_console::{error, warn};
use reqwest::{StatusCode, Url};

use crate::constants::{EMPTY_URL_MESSAGE, FETCH_FALLBACK_MESSAGE, REQWEST_CLIENT};
use crate::errors::UiError;

/// Trims the pasted URL, rejecting blank input before any request is made
pub fn validate_url(input: &str) -> Result<&str, UiError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(UiError::Validation(EMPTY_URL_MESSAGE))
    } else {
        Ok(trimmed)
    }
}

/// Extracts the server's `error` message from a failed response body
pub fn rejection_message(body: &str) -> Option<Rc<str>> {
    serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .map(|response| response.error)
        .filter(|message| !message.trim().is_empty())
}

enum FetchFailure {
    Rejected {
        status: StatusCode,
        message: Option<Rc<str>>,
    },
    Transport(ErrorContext),
}

impl From<ErrorContext> for FetchFailure {
    fn from(value: ErrorContext) -> Self {
        FetchFailure::Transport(value)
    }
}

async fn request_info(endpoint: Url, url: &str) -> Result<VideoInfo, FetchFailure> {
    let response = REQWEST_CLIENT.post(endpoint)
        .json(&FetchInfoRequest { url: Some(url.into()) })
        .send()
        .await
        .context("Failed to send the request")?;
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(FetchFailure::Rejected {
            status,
            message: rejection_message(&body),
        });
    }
    Ok(response.json().await.context("Failed to deserialize response")?)
}

/// Asks the backend for the metadata of `url`
///
/// Failures are logged and turned into a message fit for the error panel.
pub async fn fetch_info(endpoint: Url, url: &str) -> Result<VideoInfo, UiError> {
    match request_info(endpoint, url).await {
        Ok(info) => Ok(info),
        Err(FetchFailure::Rejected { status, message }) => {
            warn!(format!("Metadata request for {url} was rejected with status {status}"));
            Err(UiError::Fetch(message.unwrap_or_else(|| FETCH_FALLBACK_MESSAGE.into())))
        },
        Err(FetchFailure::Transport(err)) => {
            error!(format!("Metadata request for {url} failed: {err:?}"));
            Err(UiError::Fetch(FETCH_FALLBACK_MESSAGE.into()))
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_urls_are_rejected() {
        assert_eq!(validate_url(""), Err(UiError::Validation(EMPTY_URL_MESSAGE)));
        assert_eq!(validate_url("  \t\n"), Err(UiError::Validation(EMPTY_URL_MESSAGE)));
    }

    #[test]
    fn urls_are_trimmed() {
        assert_eq!(validate_url("  https://youtu.be/abc \n"), Ok("https://youtu.be/abc"));
    }

    #[test]
    fn server_messages_are_surfaced() {
        assert_eq!(
            rejection_message(r#"{"error":"URL is required"}"#).as_deref(),
            Some("URL is required"),
        );
    }

    #[test]
    fn unusable_bodies_give_no_message() {
        assert_eq!(rejection_message(""), None);
        assert_eq!(rejection_message("<html>Bad Gateway</html>"), None);
        assert_eq!(rejection_message(r#"{"detail":"nope"}"#), None);
        assert_eq!(rejection_message(r#"{"error":"  "}"#), None);
    }
}
