//! Outbound delivery for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `contact` defines the transport seam the form submits through and the
//! simulated transport that ships today.

pub mod contact;
