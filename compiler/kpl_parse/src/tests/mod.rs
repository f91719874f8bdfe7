//! Parser tests.
//!
//! - `support`: fabricated token streams for tests
//! - `accept`: programs the grammar derives
//! - `reject`: the first defect is reported at the right token
//! - `session`: echo, lexical failures, tracing and idempotence
//! - `properties`: generated programs (proptest)

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod accept;
pub(crate) mod support;
