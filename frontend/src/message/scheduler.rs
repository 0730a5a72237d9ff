/// Something that runs a callback once after a delay.
pub trait Scheduler {
    type Pending: PendingHide;

    fn schedule(&self, delay_ms: u32, on_fire: Box<dyn FnOnce()>) -> Self::Pending;
}

/// Handle to a scheduled hide.
pub trait PendingHide {
    /// Stops the callback from running.
    fn cancel(self);

    /// Lets the callback run even after the handle is gone.
    fn detach(self);
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserScheduler;

#[cfg(target_arch = "wasm32")]
mod browser {
    use gloo_timers::callback::Timeout;

    use super::{PendingHide, Scheduler};

    /// Browser timers via `setTimeout`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct BrowserScheduler;

    impl Scheduler for BrowserScheduler {
        type Pending = Timeout;

        fn schedule(&self, delay_ms: u32, on_fire: Box<dyn FnOnce()>) -> Timeout {
            Timeout::new(delay_ms, on_fire)
        }
    }

    impl PendingHide for Timeout {
        fn cancel(self) {
            drop(Timeout::cancel(self));
        }

        fn detach(self) {
            self.forget();
        }
    }
}

#[cfg(test)]
pub(crate) use manual::ManualScheduler;
