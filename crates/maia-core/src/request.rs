//! Request tickets.
//!
//! Every load or send the client starts gets a fresh `RequestId`. State only
//! accepts a response carrying the ticket it is waiting for, so a response
//! that arrives after the user moved on is recognised and dropped.

/// Ticket identifying one in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(u64);

/// Hands out increasing `RequestId`s.
#[derive(Debug, Clone, Default)]
pub struct RequestCounter {
    last: u64,
}

impl RequestCounter {
    pub fn next(&mut self) -> RequestId {
        self.last += 1;
        RequestId(self.last)
    }
}
