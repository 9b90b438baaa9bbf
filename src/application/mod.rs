//! Application layer orchestrating a payment through validation, fee
//! calculation and settlement.
//!
//! `PaymentProcessor` is the entry point. It runs each request as a linear
//! fail-fast sequence and never calls the gateway for a request that did not
//! pass `PaymentValidator`.

pub mod processor;
pub mod validator;
