//! Transient notification banner.
//!
//! A `MessageProvider` owns one `NotificationState` and injects it, with the
//! show operation, as a `MessageContext`. Every show schedules a hide after
//! `HIDE_DELAY_MS`; how overlapping shows interact is set by `HidePolicy`.

pub mod context;
pub mod controller;
#[cfg(target_arch = "wasm32")]
pub mod provider;
pub mod scheduler;
pub mod state;

pub use context::{use_message, MessageContext, MessageToast};
pub use controller::{Dispatch, HideController};
#[cfg(target_arch = "wasm32")]
pub use provider::{MessageProvider, MessageProviderProps};
#[cfg(target_arch = "wasm32")]
pub use scheduler::BrowserScheduler;
pub use scheduler::{PendingHide, Scheduler};
pub use state::{HidePolicy, HideTicket, MessageAction, NotificationState};
