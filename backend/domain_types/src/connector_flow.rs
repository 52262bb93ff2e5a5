//! Marker types for the payment flows a connector can implement.

#[derive(Debug, Clone, Copy)]
pub struct Charge;

#[derive(Debug, Clone, Copy)]
pub struct Refund;

#[derive(Debug, Clone, Copy)]
pub struct Void;

#[derive(Debug, Clone, Copy)]
pub struct Query;
