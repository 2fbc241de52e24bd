//! Outbound adapters implementing domain ports.
//!
//! - **memory**: in-process stores seeded from the example dataset.

pub mod memory;
