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

use std::borrow::Cow;
use std::time::Duration;

use gloo_console::error;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, Window};

/// Bytes left alone by `encodeURIComponent`
const URI_COMPONENT_SAFE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-').remove(b'_').remove(b'.').remove(b'!')
    .remove(b'~').remove(b'*').remove(b'\'').remove(b'(').remove(b')');

pub fn encode_uri_component(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, URI_COMPONENT_SAFE).into()
}

fn get_window() -> Window {
    window().expect("should be running in a browser window")
}

fn as_millis(duration: Duration) -> i32 {
    i32::try_from(duration.as_millis()).unwrap_or(i32::MAX)
}

/// Represents a registered timeout
///
/// Automatically cancelled when this object is dropped
pub struct Timeout {
    _callback: Closure<dyn FnMut()>,
    handle: i32,
}

impl Timeout {
    pub fn new<F: FnOnce() + 'static>(delay: Duration, callback: F) -> Timeout {
        let callback = Closure::once(callback);
        Timeout {
            handle: get_window()
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), as_millis(delay))
                .expect("should be able to register a timeout"),
            _callback: callback,
        }
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        get_window().clear_timeout_with_handle(self.handle);
    }
}

/// Represents a registered interval
///
/// Automatically cancelled when this object is dropped
pub struct Interval {
    _callback: Closure<dyn FnMut()>,
    handle: i32,
}

impl Interval {
    pub fn new<F: FnMut() + 'static>(period: Duration, callback: F) -> Interval {
        let callback: Closure<dyn FnMut()> = Closure::new(callback);
        Interval {
            handle: get_window()
                .set_interval_with_callback_and_timeout_and_arguments_0(callback.as_ref().unchecked_ref(), as_millis(period))
                .expect("should be able to register an interval"),
            _callback: callback,
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        get_window().clear_interval_with_handle(self.handle);
    }
}

/// Milliseconds since the epoch, as reported by the browser
pub fn now_millis() -> f64 {
    web_sys::js_sys::Date::now()
}

/// Points the current tab at `url`, letting the browser handle the download
pub fn navigate(url: &str) {
    if let Err(err) = get_window().location().set_href(url) {
        error!(format!("Failed to navigate to {url}"), err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_like_encode_uri_component() {
        assert_eq!(
            encode_uri_component("https://www.youtube.com/watch?v=abc&t=1"),
            "https%3A%2F%2Fwww.youtube.com%2Fwatch%3Fv%3Dabc%26t%3D1",
        );
        assert_eq!(encode_uri_component("My Video (live)!"), "My%20Video%20(live)!");
        assert_eq!(encode_uri_component("it's ~*fine*"), "it's%20~*fine*");
        assert_eq!(encode_uri_component("zażółć"), "za%C5%BC%C3%B3%C5%82%C4%87");
    }
}
