//! Contact message delivery.
//!
//! Client-side (hydrate): [`SimulatedTransport`] waits out a fixed delay on a
//! browser timer ([`TimerDelay`]) and reports success. There is no delivery endpoint; a real
//! transport plugs in behind [`ContactTransport`].
//! Server-side (SSR): sends resolve immediately, since a form is never
//! submitted during rendering.
//!
//! ERROR HANDLING
//! ==============
//! Transports report failure as [`SubmitError`], which the form shows as a
//! banner while keeping the typed fields.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use crate::state::contact_form::{ContactMessage, SubmitError};

/// How long the simulated send takes.
pub const SUBMIT_DELAY: Duration = Duration::from_secs(2);

pub trait ContactTransport {
    /// Deliver one validated message.
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Waits out a fixed duration before a simulated send completes.
pub trait Delay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// Browser timer on hydrate; resolves at once on the server.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerDelay;

impl Delay for TimerDelay {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
            std::future::ready(())
        }
    }
}

/// Stand-in transport that always succeeds after `delay`.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedTransport<D = TimerDelay> {
    pub delay: Duration,
    pub timer: D,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self { delay: SUBMIT_DELAY, timer: TimerDelay }
    }
}

impl<D: Delay> ContactTransport for SimulatedTransport<D> {
    fn send(&self, message: &ContactMessage) -> impl Future<Output = Result<(), SubmitError>> {
        let summary = describe(message);
        let wait = self.timer.wait(self.delay);
        async move {
            log::info!("sending contact message ({summary})");
            wait.await;
            Ok(())
        }
    }
}

/// Log-safe summary: subject and length, never the body or address.
fn describe(message: &ContactMessage) -> String {
    format!("subject {:?}, {} chars", message.subject.trim(), message.message.trim().chars().count())
}
