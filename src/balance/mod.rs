//! Supply/demand balancing.
//!
//! Every allocation method assumes total supply equals total demand. The
//! balancer restores that by adding a single zero-cost dummy origin or
//! dummy destination.

mod balancer;

pub use balancer::balance;
