use log::warn;
use shared::SharedError;
use yew::prelude::*;

use super::state::NotificationState;

/// Notification state plus the show operation, handed to components.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageContext {
    pub state: NotificationState,
    show: Callback<(String, bool)>,
}

impl MessageContext {
    pub fn new(state: NotificationState, show: Callback<(String, bool)>) -> Self {
        Self { state, show }
    }

    pub fn text(&self) -> &str {
        &self.state.text
    }

    pub fn is_error(&self) -> bool {
        self.state.is_error
    }

    pub fn visible(&self) -> bool {
        self.state.visible
    }

    pub fn show(&self, text: impl Into<String>, is_error: bool) {
        self.show.emit((text.into(), is_error));
    }

    /// Shows a success message.
    pub fn show_message(&self, text: impl Into<String>) {
        self.show(text, false);
    }

    pub fn show_error(&self, text: impl Into<String>) {
        self.show(text, true);
    }

    /// Reports the outcome of a device call.
    pub fn show_result(&self, result: Result<String, SharedError>) {
        match result {
            Ok(text) => self.show_message(text),
            Err(e) => {
                warn!("Device call failed: {}", e);
                self.show_error(e.user_message());
            }
        }
    }
}

/// Access to the nearest `MessageProvider`.
#[hook]
pub fn use_message() -> MessageContext {
    use_context::<MessageContext>().expect("Message context not found")
}

#[function_component(MessageToast)]
pub fn message_toast() -> Html {
    let messages = use_message();
    if !messages.visible() {
        return html! {};
    }

    let (tone, icon) = if messages.is_error() {
        ("bg-red-500 border-red-600", "✕")
    } else {
        ("bg-green-500 border-green-600", "✓")
    };

    html! {
        <div class="fixed top-4 right-4 z-50" role="status">
            <div class={classes!(
                "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
                tone
            )}>
                <div class="flex-shrink-0 mr-3">
                    <span class="text-lg font-bold">{icon}</span>
                </div>
                <p class="text-sm font-medium">{&messages.state.text}</p>
            </div>
        </div>
    }
}
