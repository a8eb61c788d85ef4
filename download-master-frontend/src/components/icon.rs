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

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconType {
    Logo,
    Download,
    Spinner,
    Warning,
    Sun,
    Moon,
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub r#type: IconType,
    #[prop_or_default]
    pub tooltip: Option<AttrValue>,
}

#[function_component]
pub fn Icon(props: &IconProps) -> Html {
    let class = match props.r#type {
        IconType::Logo     => classes!("icon", "icon-logo"),
        IconType::Download => classes!("icon", "icon-download"),
        IconType::Spinner  => classes!("icon", "icon-spinner", "spin"),
        IconType::Warning  => classes!("icon", "icon-warning"),
        IconType::Sun      => classes!("icon", "icon-sun"),
        IconType::Moon     => classes!("icon", "icon-moon"),
    };

    html! {
        <span {class} title={props.tooltip.clone()}></span>
    }
}
