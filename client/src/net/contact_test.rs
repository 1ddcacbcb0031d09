use std::cell::Cell;
use std::pin::pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

use super::*;
use crate::state::contact_form::{ContactField, ContactForm, FormStatus, SubmitOutcome};

fn sample() -> ContactMessage {
    ContactMessage {
        name: "A".to_owned(),
        email: "a@b.co".to_owned(),
        subject: " Hi ".to_owned(),
        message: "1234567890".to_owned(),
    }
}

fn poll_once<F: Future>(fut: F) -> Poll<F::Output> {
    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    fut.as_mut().poll(&mut cx)
}

/// Delay that stays pending until the test opens it.
#[derive(Clone, Default)]
struct Gate {
    open: Rc<Cell<bool>>,
    requested: Rc<Cell<Option<Duration>>>,
}

impl Delay for Gate {
    fn wait(&self, duration: Duration) -> impl Future<Output = ()> {
        self.requested.set(Some(duration));
        let open = Rc::clone(&self.open);
        std::future::poll_fn(move |_| if open.get() { Poll::Ready(()) } else { Poll::Pending })
    }
}

#[test]
fn default_delay_is_two_seconds() {
    assert_eq!(SimulatedTransport::default().delay, Duration::from_secs(2));
    assert_eq!(SUBMIT_DELAY, Duration::from_secs(2));
}

#[test]
fn simulated_send_succeeds_without_a_browser_timer() {
    let transport = SimulatedTransport::default();
    assert_eq!(poll_once(transport.send(&sample())), Poll::Ready(Ok(())));
}

#[test]
fn send_waits_for_the_configured_delay() {
    let gate = Gate::default();
    let transport = SimulatedTransport { delay: SUBMIT_DELAY, timer: gate.clone() };
    let submission = sample();
    let mut send = pin!(transport.send(&submission));
    let mut cx = Context::from_waker(Waker::noop());

    assert_eq!(gate.requested.get(), Some(SUBMIT_DELAY));
    assert!(send.as_mut().poll(&mut cx).is_pending());
    assert!(send.as_mut().poll(&mut cx).is_pending());
    gate.open.set(true);
    assert_eq!(send.as_mut().poll(&mut cx), Poll::Ready(Ok(())));
}

#[test]
fn form_stays_submitting_until_the_send_resolves() {
    let mut form = ContactForm::default();
    let fields = sample();
    form.set_field(ContactField::Name, fields.name);
    form.set_field(ContactField::Email, fields.email);
    form.set_field(ContactField::Subject, fields.subject);
    form.set_field(ContactField::Message, fields.message);

    let SubmitOutcome::Started(ticket, message) = form.submit() else {
        panic!("valid form should start a submission");
    };
    let gate = Gate::default();
    let transport = SimulatedTransport { delay: SUBMIT_DELAY, timer: gate.clone() };
    let mut send = pin!(transport.send(&message));
    let mut cx = Context::from_waker(Waker::noop());

    assert!(send.as_mut().poll(&mut cx).is_pending());
    assert!(form.is_submitting());
    assert_eq!(form.submit(), SubmitOutcome::Ignored);

    gate.open.set(true);
    let Poll::Ready(result) = send.as_mut().poll(&mut cx) else {
        panic!("send should resolve once the delay elapses");
    };
    assert!(form.complete(ticket, result));
    assert_eq!(form.status(), &FormStatus::Sent);
    assert!(!form.is_submitting());
}

#[test]
fn describe_omits_body_and_address() {
    let summary = describe(&sample());
    assert_eq!(summary, "subject \"Hi\", 10 chars");
    assert!(!summary.contains("a@b.co"));
}
