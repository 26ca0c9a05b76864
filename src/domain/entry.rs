use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// Arrival ticket handed out by the counter, unique per customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct SerialNumber(pub u32);

impl SerialNumber {
    pub const FIRST: Self = Self(1);

    /// `None` once `u32::MAX` has been handed out.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Urgency class. Lower value = served sooner, 1 is the most urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Priority(pub u32);

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer waiting at the counter.
///
/// Entries are immutable once queued. They order by `priority` first and
/// `serial_number` second, so the smallest entry is the next one to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub serial_number: SerialNumber,
    pub priority: Priority,
}

impl Entry {
    pub fn new(serial_number: SerialNumber, priority: Priority) -> Self {
        Self {
            serial_number,
            priority,
        }
    }
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.serial_number.cmp(&other.serial_number))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
