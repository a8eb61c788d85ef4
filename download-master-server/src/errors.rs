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

use std::fmt::{Debug, Display};

use actix_web::{http::{header::ContentType, StatusCode}, HttpResponse, ResponseError};
use cloneable_errors::ErrorContext;
use download_master_api::sync::ErrorResponse;
use log::warn;

/// How an [`Error`] is rendered in the response body
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Representation {
    /// `{"error": "<message>"}`, for endpoints called by the frontend
    Json,
    /// The bare message, for endpoints the browser navigates to
    Plaintext,
}

/// An error returned by a route handler
///
/// Only the outermost context message is sent to the client, the full chain gets logged.
pub struct Error {
    pub context: ErrorContext,
    pub status: StatusCode,
    pub representation: Representation,
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {:?}", self.status, self.context)
    }
}
impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.context, f)
    }
}
impl From<ErrorContext> for Error {
    fn from(value: ErrorContext) -> Self {
        Error {
            context: value,
            status: StatusCode::INTERNAL_SERVER_ERROR,
            representation: Representation::Json,
        }
    }
}
impl std::error::Error for Error {}
impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        self.status
    }

    fn error_response(&self) -> HttpResponse {
        if self.status.is_server_error() {
            warn!("Request failed: {self:?}");
        }
        let mut builder = HttpResponse::build(self.status);
        match self.representation {
            Representation::Json => builder.json(ErrorResponse { error: self.context.to_string().into() }),
            Representation::Plaintext => builder.insert_header(ContentType::plaintext()).body(self.context.to_string()),
        }
    }
}

impl Error {
    pub fn set_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    pub fn plaintext(mut self) -> Self {
        self.representation = Representation::Plaintext;
        self
    }
}

pub type Result<T> = std::result::Result<T, Error>;
