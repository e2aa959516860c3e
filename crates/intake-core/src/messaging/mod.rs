//! Outbound messaging lives behind a port so the core never touches
//! transport types.

pub mod port;
