pub mod auth;
pub mod clock;
pub mod controller;
pub mod history;
pub mod log;
pub mod lunch;
