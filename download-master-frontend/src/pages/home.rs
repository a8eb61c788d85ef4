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

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::components::download_button::DownloadButton;
use crate::components::result_panel::{ErrorPanel, LoadingSkeleton, ResultPanel};
use crate::components::url_form::UrlForm;
use crate::constants::FETCH_INFO_ENDPOINT;
use crate::contexts::WindowContext;
use crate::errors::UiError;
use crate::fetcher::{fetch_info, validate_url};
use crate::state::{PageAction, PageState, Panel};

#[function_component]
pub fn HomePage() -> Html {
    let window_context: Rc<WindowContext> = use_context().expect("WindowContext should be defined");
    let state = use_reducer(PageState::default);

    let on_submit = {
        let state = state.clone();
        Callback::from(move |input: String| {
            if state.fetching {
                return;
            }
            let url = match validate_url(&input) {
                Ok(url) => url.to_owned(),
                Err(err) => return state.dispatch(PageAction::ShowError(err)),
            };
            state.dispatch(PageAction::FetchStarted);
            let endpoint = window_context.origin_join_segments(FETCH_INFO_ENDPOINT);
            let state = state.clone();
            spawn_local(async move {
                match fetch_info(endpoint, &url).await {
                    Ok(info) => state.dispatch(PageAction::FetchSucceeded(info)),
                    Err(err) => state.dispatch(PageAction::FetchFailed(err)),
                }
            });
        })
    };
    let on_select = use_callback(state.dispatcher(), |index: usize, dispatcher| {
        dispatcher.dispatch(PageAction::SelectFormat(index));
    });
    let on_error = use_callback(state.dispatcher(), |err: UiError, dispatcher| {
        dispatcher.dispatch(PageAction::ShowError(err));
    });

    let panel = match (&state.panel, &state.current) {
        (Panel::Empty, _) | (Panel::Result, None) => html! {},
        (Panel::Loading, _) => html! { <LoadingSkeleton /> },
        (Panel::Error(message), _) => html! { <ErrorPanel message={AttrValue::from(message.clone())} /> },
        (Panel::Result, Some(info)) => html! {
            <ResultPanel info={info.clone()} selected={state.selected} {on_select}>
                <DownloadButton info={Some(info.clone())} selected={state.selected} {on_error} />
            </ResultPanel>
        },
    };

    html! {
        <div id="home">
            <UrlForm fetching={state.fetching} {on_submit} />
            <div id="result-container">
                {panel}
            </div>
        </div>
    }
}
