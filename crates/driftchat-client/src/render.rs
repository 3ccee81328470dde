//! Rendering seam between the exchange driver and a front-end.

use crate::session::ExchangeStatus;

/// Receives exchange progress for display.
///
/// `awaiting(false)` is guaranteed once the exchange settles, on both the
/// success and the failure path.
pub trait ReplySink {
    /// Show or hide the awaiting indicator.
    fn awaiting(&mut self, visible: bool);

    /// A decoded text increment for the placeholder, in arrival order.
    fn delta(&mut self, text: &str);

    /// The exchange settled.
    fn settled(&mut self, status: &ExchangeStatus);
}

/// Sink that drops everything.
pub struct NullSink;

impl ReplySink for NullSink {
    fn awaiting(&mut self, _visible: bool) {}
    fn delta(&mut self, _text: &str) {}
    fn settled(&mut self, _status: &ExchangeStatus) {}
}
