//! Domain types for payment processing: requests, fee rates, settlement
//! results and the gateway port.

pub mod fees;
pub mod payment;
pub mod ports;
pub mod settlement;
