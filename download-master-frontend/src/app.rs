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

use yew::prelude::*;

mod button_state;
mod components;
mod constants;
mod contexts;
mod download_link;
mod errors;
mod fetcher;
mod pages;
mod path_animation;
mod presenter;
mod state;
mod theme;
mod utils;

use components::header_footer::{Footer, Header};
use contexts::WindowContext;
use pages::HomePage;
use theme::Theme;

#[function_component]
fn App() -> Html {
    let window_context = use_memo((), |()| WindowContext::from_window().expect("should be able to read the page origin"));

    html! {
        <ContextProvider<Rc<WindowContext>> context={window_context}>
            <Header />
            <div id="content">
                <HomePage />
            </div>
            <Footer />
        </ContextProvider<Rc<WindowContext>>>
    }
}

fn main() {
    // applied before the first render
    Theme::load().apply();
    yew::Renderer::<App>::new().render();
}
