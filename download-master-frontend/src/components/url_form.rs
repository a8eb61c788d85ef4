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
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct UrlFormProps {
    pub fetching: bool,
    /// Receives the raw input, validation is left to the page
    pub on_submit: Callback<String>,
}

#[function_component]
pub fn UrlForm(props: &UrlFormProps) -> Html {
    let input_ref = use_node_ref();
    let onsubmit = use_callback((input_ref.clone(), props.on_submit.clone()), |e: SubmitEvent, (input_ref, on_submit)| {
        e.prevent_default();
        let Some(input) = input_ref.cast::<HtmlInputElement>() else {
            return;
        };
        on_submit.emit(input.value());
    });

    html! {
        <form id="url-form" {onsubmit}>
            <input
                ref={input_ref}
                id="videoUrl"
                type="text"
                placeholder="Paste a video URL"
                autocomplete="off"
            />
            <button type="submit" id="fetchButton" disabled={props.fetching}>
                if props.fetching { {"Fetching..."} } else { {"Fetch"} }
            </button>
        </form>
    }
}
