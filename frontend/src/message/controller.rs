use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::debug;

use super::scheduler::{PendingHide, Scheduler};
use super::state::{HidePolicy, HideTicket, MessageAction};
use crate::config::HIDE_DELAY_MS;

/// Sink for message actions, usually a reducer dispatcher.
pub type Dispatch = Rc<dyn Fn(MessageAction)>;

/// Issues shows and schedules the matching auto-hide.
///
/// Owns the hide policy and the ticket counter. A timer consults both when it
/// fires, so a policy change also governs hides scheduled before it.
pub struct HideController<S: Scheduler> {
    scheduler: S,
    policy: Rc<Cell<HidePolicy>>,
    delay_ms: u32,
    latest: Rc<Cell<HideTicket>>,
    pending: RefCell<Option<S::Pending>>,
}

impl<S: Scheduler> HideController<S> {
    pub fn new(scheduler: S, policy: HidePolicy) -> Self {
        Self {
            scheduler,
            policy: Rc::new(Cell::new(policy)),
            delay_ms: HIDE_DELAY_MS,
            latest: Rc::new(Cell::new(HideTicket::default())),
            pending: RefCell::new(None),
        }
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn policy(&self) -> HidePolicy {
        self.policy.get()
    }

    pub fn set_policy(&self, policy: HidePolicy) {
        if self.policy.replace(policy) == policy {
            return;
        }
        debug!("Hide policy changed to {:?}", policy);
        if policy == HidePolicy::FirstTimerWins {
            if let Some(pending) = self.pending.borrow_mut().take() {
                pending.detach();
            }
        }
    }

    /// Ticket of the most recent show.
    pub fn latest_ticket(&self) -> HideTicket {
        self.latest.get()
    }

    /// Shows `text` right away and schedules its hide.
    pub fn show(&self, text: String, is_error: bool, dispatch: &Dispatch) -> HideTicket {
        let ticket = self.latest.get().next();
        self.latest.set(ticket);
        debug!("Showing message {:?} (error: {}) as {:?}", text, is_error, ticket);
        dispatch(MessageAction::Show { text, is_error });

        let on_fire: Box<dyn FnOnce()> = {
            let dispatch = Rc::clone(dispatch);
            let policy = Rc::clone(&self.policy);
            let latest = Rc::clone(&self.latest);
            Box::new(move || {
                if policy.get() == HidePolicy::RestartOnShow && latest.get() != ticket {
                    debug!("Ignoring hide for {:?}, latest is {:?}", ticket, latest.get());
                    return;
                }
                dispatch(MessageAction::Hide);
            })
        };
        let pending = self.scheduler.schedule(self.delay_ms, on_fire);

        match self.policy.get() {
            HidePolicy::FirstTimerWins => pending.detach(),
            HidePolicy::RestartOnShow => {
                if let Some(previous) = self.pending.replace(Some(pending)) {
                    previous.cancel();
                }
            }
        }
        ticket
    }
}
