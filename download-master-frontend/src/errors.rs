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
use std::fmt::{self, Display};
use std::rc::Rc;

/// An error the page shows to the user
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiError {
    /// Input rejected before anything was sent
    Validation(&'static str),
    /// The metadata request failed
    Fetch(Rc<str>),
}

impl Display for UiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UiError::Validation(message) => f.write_str(message),
            UiError::Fetch(message) => f.write_str(message),
        }
    }
}

impl UiError {
    pub fn message(&self) -> Rc<str> {
        match self {
            UiError::Validation(message) => Rc::from(*message),
            UiError::Fetch(message) => message.clone(),
        }
    }
}
