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
use reqwest::Url;
use web_sys::window;

#[derive(Clone, PartialEq)]
pub struct WindowContext {
    pub origin: Url,
}

impl WindowContext {
    pub fn from_window() -> Option<Self> {
        let origin = window()?.location().origin().ok()?;
        Some(Self {
            origin: Url::parse(&origin).ok()?,
        })
    }

    /// Builds an absolute URL on this origin, replacing the whole path
    pub fn origin_join_segments(&self, segments: &[&str]) -> Url {
        let mut url = self.origin.clone();
        url.path_segments_mut()
            .expect("origin URL should be a base")
            .clear()
            .extend(segments);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_urls_live_on_the_origin() {
        let context = WindowContext {
            origin: Url::parse("http://localhost:10000").unwrap(),
        };
        let url = context.origin_join_segments(&["api", "fetch_info"]);
        assert_eq!(url.as_str(), "http://localhost:10000/api/fetch_info");
    }
}
