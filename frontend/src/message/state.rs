use std::rc::Rc;

use yew::prelude::*;

use crate::config::DEFAULT_MESSAGE;

/// How a pending hide interacts with a newer message.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HidePolicy {
    /// Every show schedules an unconditional hide and nothing is cancelled,
    /// so a message shown while an older timer is pending disappears when
    /// that older timer fires.
    #[default]
    FirstTimerWins,
    /// A show cancels the pending hide and only the hide scheduled by the
    /// latest show may clear the message.
    RestartOnShow,
}

/// Identifies one show, so the hide it scheduled can be matched to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HideTicket(u64);

impl HideTicket {
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

/// Reducer input. Whether a hide is still wanted is decided by the
/// `HideController` before it is dispatched.
#[derive(Clone, Debug, PartialEq)]
pub enum MessageAction {
    Show { text: String, is_error: bool },
    Hide,
}

/// Transient banner state read by the UI.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationState {
    pub text: String,
    pub is_error: bool,
    pub visible: bool,
}

impl Default for NotificationState {
    fn default() -> Self {
        Self {
            text: DEFAULT_MESSAGE.to_string(),
            is_error: false,
            visible: false,
        }
    }
}

impl Reducible for NotificationState {
    type Action = MessageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            MessageAction::Show { text, is_error } => Rc::new(Self {
                text,
                is_error,
                visible: true,
            }),
            MessageAction::Hide if !self.visible => self,
            MessageAction::Hide => Rc::new(Self {
                visible: false,
                ..(*self).clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn show(text: &str, is_error: bool) -> MessageAction {
        MessageAction::Show {
            text: text.to_string(),
            is_error,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = NotificationState::default();
        assert_eq!(state.text, "Configuration Saved Successfully");
        assert!(!state.is_error);
        assert!(!state.visible);
    }

    #[test]
    fn test_show_sets_all_fields() {
        let state = Rc::new(NotificationState::default()).reduce(show("Saved", true));
        assert_eq!(state.text, "Saved");
        assert!(state.is_error);
        assert!(state.visible);
    }

    #[test]
    fn test_hide_keeps_text_and_flag() {
        let state = Rc::new(NotificationState::default())
            .reduce(show("Failed", true))
            .reduce(MessageAction::Hide);
        assert!(!state.visible);
        assert_eq!(state.text, "Failed");
        assert!(state.is_error);
    }

    #[test]
    fn test_hide_is_unconditional() {
        let state = Rc::new(NotificationState::default())
            .reduce(show("one", false))
            .reduce(show("two", false))
            .reduce(MessageAction::Hide);
        assert!(!state.visible);
        assert_eq!(state.text, "two");
    }

    #[test]
    fn test_hide_when_hidden_returns_same_state() {
        let state = Rc::new(NotificationState::default());
        let after = Rc::clone(&state).reduce(MessageAction::Hide);
        assert!(Rc::ptr_eq(&state, &after));
    }

    #[test]
    fn test_tickets_are_ordered() {
        let first = HideTicket::default().next();
        assert!(first.next() > first);
    }
}
