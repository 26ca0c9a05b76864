//! Everything that talks to the outside world: the interactive console and the
//! CSV rendering of the waiting queue.

pub mod console;
pub mod csv;
