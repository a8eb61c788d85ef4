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

use download_master_api::unsync::VideoInfo;
use yew::prelude::*;

use crate::errors::UiError;

/// What the area below the URL form shows
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Panel {
    #[default]
    Empty,
    Loading,
    Result,
    Error(Rc<str>),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageState {
    /// Metadata of the last successful fetch
    ///
    /// Left in place when a later fetch fails.
    pub current: Option<Rc<VideoInfo>>,
    pub selected: Option<usize>,
    pub fetching: bool,
    pub panel: Panel,
}

pub enum PageAction {
    FetchStarted,
    FetchSucceeded(VideoInfo),
    FetchFailed(UiError),
    ShowError(UiError),
    SelectFormat(usize),
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PageAction::FetchStarted if self.fetching => self,
            PageAction::FetchStarted => Rc::new(PageState {
                fetching: true,
                panel: Panel::Loading,
                ..(*self).clone()
            }),
            PageAction::FetchSucceeded(info) => Rc::new(PageState {
                selected: (!info.formats.is_empty()).then_some(0),
                current: Some(Rc::new(info)),
                fetching: false,
                panel: Panel::Result,
            }),
            PageAction::FetchFailed(err) => Rc::new(PageState {
                fetching: false,
                panel: Panel::Error(err.message()),
                ..(*self).clone()
            }),
            PageAction::ShowError(err) => Rc::new(PageState {
                panel: Panel::Error(err.message()),
                ..(*self).clone()
            }),
            PageAction::SelectFormat(index) => {
                let exists = self.current.as_ref().is_some_and(|info| index < info.formats.len());
                if !exists || self.selected == Some(index) {
                    return self;
                }
                Rc::new(PageState {
                    selected: Some(index),
                    ..(*self).clone()
                })
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use download_master_api::unsync::FormatOption;

    fn format(label: &str) -> FormatOption {
        FormatOption {
            label: label.into(),
            filesize: "N/A".into(),
            format_id: label.into(),
            filename: "video".into(),
            ext: "mp4".into(),
            media_type: None,
            direct_url: None,
        }
    }

    fn info(title: &str, formats: Vec<FormatOption>) -> VideoInfo {
        VideoInfo {
            title: title.into(),
            thumbnail_url: "https://i.ytimg.com/vi/abc/hq.jpg".into(),
            uploader: None,
            duration: None,
            original_url: "https://youtu.be/abc".into(),
            formats,
        }
    }

    fn reduce(state: Rc<PageState>, action: PageAction) -> Rc<PageState> {
        state.reduce(action)
    }

    #[test]
    fn fetch_shows_loading_then_result() {
        let state = reduce(Rc::default(), PageAction::FetchStarted);
        assert!(state.fetching);
        assert_eq!(state.panel, Panel::Loading);

        let state = reduce(state, PageAction::FetchSucceeded(info("a", vec![format("720p"), format("360p")])));
        assert!(!state.fetching);
        assert_eq!(state.panel, Panel::Result);
        assert_eq!(state.selected, Some(0));
        assert_eq!(&*state.current.as_ref().unwrap().title, "a");
    }

    #[test]
    fn only_one_fetch_at_a_time() {
        let started = reduce(Rc::default(), PageAction::FetchStarted);
        let again = reduce(started.clone(), PageAction::FetchStarted);
        assert!(Rc::ptr_eq(&started, &again));
    }

    #[test]
    fn failure_keeps_stale_metadata() {
        let state = reduce(Rc::default(), PageAction::FetchSucceeded(info("old", vec![format("720p")])));
        let state = reduce(state, PageAction::FetchStarted);
        let state = reduce(state, PageAction::FetchFailed(UiError::Fetch("URL is required".into())));
        assert!(!state.fetching);
        assert_eq!(state.panel, Panel::Error("URL is required".into()));
        assert_eq!(&*state.current.as_ref().unwrap().title, "old");
    }

    #[test]
    fn new_fetch_resets_selection() {
        let state = reduce(Rc::default(), PageAction::FetchSucceeded(info("a", vec![format("720p"), format("360p")])));
        let state = reduce(state, PageAction::SelectFormat(1));
        assert_eq!(state.selected, Some(1));
        let state = reduce(state, PageAction::FetchSucceeded(info("b", vec![format("1080p"), format("480p")])));
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn no_formats_means_no_selection() {
        let state = reduce(Rc::default(), PageAction::FetchSucceeded(info("a", Vec::new())));
        assert_eq!(state.panel, Panel::Result);
        assert_eq!(state.selected, None);
    }

    #[test]
    fn selection_must_point_at_a_format() {
        let state = reduce(Rc::default(), PageAction::SelectFormat(0));
        assert_eq!(state.selected, None);
        let state = reduce(state, PageAction::FetchSucceeded(info("a", vec![format("720p")])));
        let state = reduce(state, PageAction::SelectFormat(3));
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn errors_replace_the_result_panel() {
        let state = reduce(Rc::default(), PageAction::FetchSucceeded(info("a", vec![format("720p")])));
        let state = reduce(state, PageAction::ShowError(UiError::Validation("Please select a format to download.")));
        assert_eq!(state.panel, Panel::Error("Please select a format to download.".into()));
        assert!(state.current.is_some());
    }
}
