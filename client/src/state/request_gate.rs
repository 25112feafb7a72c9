//! Stale-response guard for route-scoped fetches.
//!
//! DESIGN
//! ======
//! Every fetch takes a ticket from `begin`. When the route parameter changes a
//! new fetch takes a newer ticket; when the page unmounts `cancel` bumps the
//! counter without issuing one. A response is applied only if its ticket is
//! still current, so a late answer for a previous id never overwrites the
//! page.

#[cfg(test)]
#[path = "request_gate_test.rs"]
mod request_gate_test;

/// Monotonic ticket counter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RequestGate {
    current: u64,
}

impl RequestGate {
    /// Start a new request, invalidating all earlier tickets.
    pub fn begin(&mut self) -> u64 {
        self.current += 1;
        self.current
    }

    /// Invalidate all outstanding tickets.
    pub fn cancel(&mut self) {
        self.current += 1;
    }

    #[must_use]
    pub fn is_current(&self, ticket: u64) -> bool {
        ticket == self.current
    }
}
