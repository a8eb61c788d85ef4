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
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use download_master_api::unsync::VideoInfo;
use yew::prelude::*;

use crate::button_state::{ButtonState, ButtonStyle, ClickOutcome, DownloadButtonController};
use crate::components::icon::*;
use crate::constants::{ANIMATION_DURATION, ANIMATION_FRAME, DOWNLOAD_BUTTON_STYLE, DOWNLOAD_LINK_POLICY};
use crate::download_link::build_download_url;
use crate::errors::UiError;
use crate::path_animation::{arrow_frame, arrow_path, check_mark_path, ARROW_START_Y};
use crate::utils::{navigate, now_millis, Interval, Timeout};

#[derive(Properties, PartialEq)]
pub struct DownloadButtonProps {
    pub info: Option<Rc<VideoInfo>>,
    pub selected: Option<usize>,
    pub on_error: Callback<UiError>,
}

type Shared<T> = Rc<RefCell<T>>;

struct Feedback {
    controller: Shared<DownloadButtonController>,
    path: Shared<String>,
    animation: Shared<Option<Interval>>,
    redraw: UseForceUpdateHandle,
}

impl Feedback {
    fn start_animation(&self) {
        let started = now_millis();
        let path = self.path.clone();
        let redraw = self.redraw.clone();
        *self.animation.borrow_mut() = Some(Interval::new(ANIMATION_FRAME, move || {
            let elapsed = Duration::from_secs_f64((now_millis() - started).max(0.) / 1000.);
            let (y, smoothing) = arrow_frame(elapsed, ANIMATION_DURATION);
            *path.borrow_mut() = arrow_path(y, smoothing);
            redraw.force_update();
        }));
    }

    /// Schedules the loading -> success (-> idle) transitions
    fn schedule(&self, style: ButtonStyle) -> Vec<Timeout> {
        let success_delay = style.success_delay();
        let mut timers = Vec::with_capacity(2);

        let controller = self.controller.clone();
        let path = self.path.clone();
        let animation = self.animation.clone();
        let redraw = self.redraw.clone();
        timers.push(Timeout::new(success_delay, move || {
            animation.borrow_mut().take();
            if controller.borrow_mut().finish() {
                *path.borrow_mut() = check_mark_path();
                redraw.force_update();
            }
        }));

        if let Some(reset_delay) = style.reset_delay() {
            let controller = self.controller.clone();
            let path = self.path.clone();
            let redraw = self.redraw.clone();
            timers.push(Timeout::new(success_delay + reset_delay, move || {
                controller.borrow_mut().reset();
                *path.borrow_mut() = arrow_path(ARROW_START_Y, 0.);
                redraw.force_update();
            }));
        }
        timers
    }
}

#[function_component]
pub fn DownloadButton(props: &DownloadButtonProps) -> Html {
    let controller = use_mut_ref(|| DownloadButtonController::new(DOWNLOAD_BUTTON_STYLE));
    let path = use_mut_ref(|| arrow_path(ARROW_START_Y, 0.));
    let animation = use_mut_ref(|| None::<Interval>);
    let timers = use_mut_ref(Vec::<Timeout>::new);
    let redraw = use_force_update();

    // pending transitions must not outlive the button
    {
        let timers = timers.clone();
        let animation = animation.clone();
        use_effect_with((), move |()| move || {
            timers.borrow_mut().clear();
            animation.borrow_mut().take();
        });
    }

    let onclick = {
        let feedback = Feedback {
            controller: controller.clone(),
            path: path.clone(),
            animation: animation.clone(),
            redraw: redraw.clone(),
        };
        let timers = timers.clone();
        let info = props.info.clone();
        let selected = props.selected;
        let on_error = props.on_error.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let outcome = feedback.controller
                .borrow_mut()
                .click(|| build_download_url(DOWNLOAD_LINK_POLICY, info.as_deref(), selected));
            match outcome {
                ClickOutcome::Ignored => {},
                ClickOutcome::Rejected(err) => on_error.emit(err),
                ClickOutcome::Navigate(url) => {
                    let style = feedback.controller.borrow().style;
                    if style == ButtonStyle::Path {
                        feedback.start_animation();
                    }
                    *timers.borrow_mut() = feedback.schedule(style);
                    feedback.redraw.force_update();
                    navigate(&url);
                },
            }
        })
    };

    let button = *controller.borrow();
    let icon = match (button.style, button.state) {
        (ButtonStyle::Path, _) => html! {
            <svg class="download-button-arrow" viewBox="0 0 24 24">
                <path d={path.borrow().clone()} />
            </svg>
        },
        (ButtonStyle::Spinner, _) if !button.icon_visible() => html! {},
        (ButtonStyle::Spinner, ButtonState::Loading) => html! { <Icon r#type={IconType::Spinner} /> },
        (ButtonStyle::Spinner, _) => html! { <Icon r#type={IconType::Download} /> },
    };

    html! {
        <button
            id="downloadButton"
            class={classes!("download-button", button.css_class())}
            disabled={button.disabled()}
            {onclick}
        >
            <span class="download-button-icon">{icon}</span>
            <span class="download-button-text">{button.label()}</span>
        </button>
    }
}
