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

use download_master_api::unsync::{FormatOption, VideoInfo};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::icon::*;
use crate::presenter::{group_formats, meta_line, option_label};

#[derive(Properties, PartialEq)]
pub struct ResultPanelProps {
    pub info: Rc<VideoInfo>,
    pub selected: Option<usize>,
    pub on_select: Callback<usize>,
    #[prop_or_default]
    pub children: Html,
}

#[function_component]
pub fn ResultPanel(props: &ResultPanelProps) -> Html {
    let onchange = use_callback(props.on_select.clone(), |e: Event, on_select| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        if let Ok(index) = select.value().parse() {
            on_select.emit(index);
        }
    });

    let info = &props.info;
    let render_option = |(index, format): &(usize, &FormatOption)| html! {
        <option value={index.to_string()} selected={props.selected == Some(*index)}>{option_label(format)}</option>
    };
    let options: Html = group_formats(&info.formats)
        .iter()
        .map(|group| match group.label {
            Some(label) => html! {
                <optgroup {label}>{for group.entries.iter().map(render_option)}</optgroup>
            },
            None => group.entries.iter().map(render_option).collect(),
        })
        .collect();

    html! {
        <div id="result">
            <img id="thumbnail" src={AttrValue::from(info.thumbnail_url.clone())} alt="Video thumbnail" />
            <div class="result-details">
                <h2 id="title">{info.title.to_string()}</h2>
                if let Some(meta) = meta_line(info) {
                    <p id="meta">{meta}</p>
                }
                <select id="formatSelector" {onchange}>
                    {options}
                </select>
                {props.children.clone()}
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorPanelProps {
    pub message: AttrValue,
}

#[function_component]
pub fn ErrorPanel(props: &ErrorPanelProps) -> Html {
    html! {
        <div id="error" class="error-panel">
            <Icon r#type={IconType::Warning} />
            <span>{props.message.clone()}</span>
        </div>
    }
}

/// Placeholder shown while metadata is being fetched
#[function_component]
pub fn LoadingSkeleton() -> Html {
    html! {
        <div id="loading" class="skeleton">
            <div class="skeleton-thumbnail"></div>
            <div class="result-details">
                <div class="skeleton-line skeleton-title"></div>
                <div class="skeleton-line"></div>
                <div class="skeleton-line skeleton-short"></div>
            </div>
        </div>
    }
}
