pub mod checkout;
pub mod phase;
pub mod session;
pub mod today;
pub mod user;
