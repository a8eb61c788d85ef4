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

use crate::components::icon::*;
use crate::constants::VERSION_STRING;
use crate::theme::Theme;

#[function_component]
pub fn ThemeToggle() -> Html {
    let theme = use_state(Theme::load);
    use_effect_with(*theme, |theme| theme.apply());
    let toggle = use_callback(theme.clone(), |_: MouseEvent, theme| {
        let next = theme.toggled();
        next.store();
        theme.set(next);
    });

    let (icon, tooltip) = match *theme {
        Theme::Light => (IconType::Moon, "Switch to dark theme"),
        Theme::Dark => (IconType::Sun, "Switch to light theme"),
    };
    html! {
        <span id="theme-toggle" class="clickable" onclick={toggle}><Icon r#type={icon} {tooltip} /></span>
    }
}

#[function_component]
pub fn Header() -> Html {
    html! {
        <div id="header">
            <Icon r#type={IconType::Logo} />
            <div>
                <h1>{"Download Master"}</h1>
                <ThemeToggle />
            </div>
        </div>
    }
}

#[function_component]
pub fn Footer() -> Html {
    html! {
        <div id="footer">
            <span>
                <a href="https://github.com/download-master/download-master">{"Download Master"}</a>
                {format!(" v{VERSION_STRING}, licensed under ")}
                <a href="https://www.gnu.org/licenses/agpl-3.0.en.html">{"AGPL v3"}</a>
            </span>
            <span>{"Only download media you have the right to."}</span>
        </div>
    }
}
