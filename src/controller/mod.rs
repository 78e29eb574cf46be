// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Segmented passcode input controller.
//!
//! [`PasscodeController`] owns a [`PasscodeState`] and feeds every input event
//! through the pure [`Reducer`]. Completion is delivered to the `on_complete`
//! callback; focus changes are handed back to the caller as [`Command`]s so a
//! thin view adapter can move focus between its input targets.
//!
//! # Organization
//!
//! * [`focus`]: where focus goes after each event.
//! * [`completion`]: edge-triggered completion detection.
//! * [`paste`]: paste and bulk-fill policy.
//! * [`reducer`]: the state machine tying them together.

pub mod completion;
pub mod focus;
pub mod paste;
pub mod reducer;

use std::fmt;

use tracing::debug;

pub use focus::Focus;
pub use paste::PastePolicy;
pub use reducer::{Command, PasscodeEvent, PasscodeState, Reducer, Transition};

use crate::{config::PasscodeConfig, error::PasscodeError, model::Phase};

/// Receives the assembled code once per completion.
pub type CompletionHandler = Box<dyn FnMut(&str)>;

/// What the view layer needs to draw one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView {
    pub index: usize,
    pub value: Option<char>,
    pub focused: bool,
    /// An error message is currently shown beneath the slots.
    pub error: bool,
}

pub struct PasscodeController {
    state: PasscodeState,
    reducer: Reducer,
    on_complete: Option<CompletionHandler>,
    error_message: Option<String>,
}

impl fmt::Debug for PasscodeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PasscodeController")
            .field("state", &self.state)
            .field("reducer", &self.reducer)
            .field("on_complete", &self.on_complete.is_some())
            .field("error_message", &self.error_message)
            .finish()
    }
}

impl PasscodeController {
    pub fn builder() -> PasscodeBuilder {
        PasscodeBuilder::default()
    }

    /// Creates a numeric controller with `length` slots and no callback.
    ///
    /// # Errors
    ///
    /// Returns [`PasscodeError::InvalidLength`] if `length` is zero.
    pub fn new(length: usize) -> Result<Self, PasscodeError> {
        Self::builder().length(length).build()
    }

    /// Applies one event and returns the view commands it produced.
    ///
    /// A completion is delivered to the `on_complete` callback before this
    /// returns and is not included in the returned commands.
    pub fn dispatch(&mut self, event: PasscodeEvent) -> Vec<Command> {
        let Transition { state, commands } = self.reducer.reduce(&self.state, &event);
        self.state = state;

        debug!(?event, focus = ?self.state.focus, phase = ?self.state.phase(), "passcode event applied");

        commands
            .into_iter()
            .filter_map(|command| match command {
                Command::Complete(value) => {
                    debug!(len = value.chars().count(), "passcode complete");
                    if let Some(on_complete) = self.on_complete.as_mut() {
                        on_complete(&value);
                    }
                    None
                }
                command => Some(command),
            })
            .collect()
    }

    pub fn input(&mut self, index: usize, text: impl Into<String>) -> Vec<Command> {
        self.dispatch(PasscodeEvent::Input {
            index,
            text: text.into(),
        })
    }

    pub fn backspace(&mut self, index: usize) -> Vec<Command> {
        self.dispatch(PasscodeEvent::Backspace { index })
    }

    pub fn paste(&mut self, text: impl Into<String>) -> Vec<Command> {
        self.dispatch(PasscodeEvent::Paste { text: text.into() })
    }

    pub fn focus(&mut self, index: usize) -> Vec<Command> {
        self.dispatch(PasscodeEvent::Focus { index })
    }

    pub fn blur(&mut self) -> Vec<Command> {
        self.dispatch(PasscodeEvent::Blur)
    }

    pub fn reset(&mut self) -> Vec<Command> {
        self.dispatch(PasscodeEvent::Reset)
    }

    pub fn state(&self) -> &PasscodeState {
        &self.state
    }

    pub fn len(&self) -> usize {
        self.state.slots.len()
    }

    pub fn value(&self) -> String {
        self.state.value()
    }

    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub fn current_focus(&self) -> Focus {
        self.state.focus
    }

    pub fn active_index(&self) -> Option<usize> {
        self.state.focus.index()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Replaces the text shown beneath the slots. The controller never reads it.
    pub fn set_error_message(&mut self, message: Option<String>) {
        self.error_message = message;
    }

    pub fn slot_views(&self) -> Vec<SlotView> {
        let error = self.error_message.is_some();
        self.state
            .slots
            .iter()
            .enumerate()
            .map(|(index, value)| SlotView {
                index,
                value,
                focused: self.state.focus.is_slot(index),
                error,
            })
            .collect()
    }
}

#[derive(Default)]
pub struct PasscodeBuilder {
    config: PasscodeConfig,
    on_complete: Option<CompletionHandler>,
    error_message: Option<String>,
}

impl PasscodeBuilder {
    pub fn config(mut self, config: PasscodeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn length(mut self, length: usize) -> Self {
        self.config.length = length;
        self
    }

    pub fn charset(mut self, charset: crate::charset::Charset) -> Self {
        self.config.charset = charset;
        self
    }

    pub fn paste_policy(mut self, paste_policy: PastePolicy) -> Self {
        self.config.paste_policy = paste_policy;
        self
    }

    pub fn blur_on_complete(mut self, blur_on_complete: bool) -> Self {
        self.config.blur_on_complete = blur_on_complete;
        self
    }

    pub fn on_complete(mut self, on_complete: impl FnMut(&str) + 'static) -> Self {
        self.on_complete = Some(Box::new(on_complete));
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    /// # Errors
    ///
    /// Fails if the configuration does not pass [`PasscodeConfig::validate`].
    pub fn build(self) -> Result<PasscodeController, PasscodeError> {
        self.config.validate()?;

        debug!(length = self.config.length, charset = ?self.config.charset, "passcode controller created");

        Ok(PasscodeController {
            state: PasscodeState::new(self.config.length, self.config.validator())?,
            reducer: self.config.reducer(),
            on_complete: self.on_complete,
            error_message: self.error_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn recording(length: usize) -> (PasscodeController, Rc<RefCell<Vec<String>>>) {
        let completions = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&completions);
        let controller = PasscodeController::builder()
            .length(length)
            .on_complete(move |code| sink.borrow_mut().push(code.to_string()))
            .build()
            .unwrap();
        (controller, completions)
    }

    #[test]
    fn zero_length_fails_fast() {
        assert_eq!(PasscodeController::new(0).unwrap_err(), PasscodeError::InvalidLength(0));
    }

    #[test]
    fn completion_is_delivered_not_returned() {
        let (mut controller, completions) = recording(2);
        assert_eq!(controller.input(0, "1"), vec![Command::Focus(1)]);
        assert!(controller.input(1, "2").is_empty());
        assert_eq!(*completions.borrow(), vec!["12".to_string()]);
    }

    #[test]
    fn slot_views_reflect_state() {
        let (mut controller, _) = recording(3);
        controller.input(0, "4");
        controller.set_error_message(Some("Invalid code".to_string()));

        let views = controller.slot_views();
        assert_eq!(views.len(), 3);
        assert_eq!(views[0].value, Some('4'));
        assert!(!views[0].focused);
        assert!(views[1].focused);
        assert!(views.iter().all(|v| v.error));
        assert_eq!(controller.error_message(), Some("Invalid code"));
    }

    #[test]
    fn builder_applies_config() {
        let controller = PasscodeController::builder()
            .config(PasscodeConfig {
                length: 4,
                charset: crate::charset::Charset::Hex,
                ..PasscodeConfig::default()
            })
            .error_message("expired")
            .build()
            .unwrap();
        assert_eq!(controller.len(), 4);
        assert_eq!(controller.error_message(), Some("expired"));
        assert_eq!(controller.active_index(), Some(0));
    }
}
