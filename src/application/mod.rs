//! Application layer containing the service counter.
//!
//! This module defines the `ServiceCounter`, the context object that pairs the
//! queue store with the serial number counter. The console session holds it
//! by mutable reference for the whole run.

pub mod counter;
