//! Progressive load module
//!
//! Policy layered on top of remote sync that decides whether, and when, to
//! fetch the next page automatically.
//!
//! - **Append**: keep requesting pages after a fixed delay until the last
//!   page has arrived.
//! - **Scroll**: keep requesting pages while the rendered rows do not yet
//!   fill the viewport plus a margin.
//!
//! Reaching the last page ends the sequence; it is never reported as a
//! range error.

mod strategy;

pub use strategy::{Continuation, ProgressiveStrategy};
