pub mod correlator;
pub mod flow;
pub mod input;
pub mod payment;
pub mod session;
