pub mod history;
pub mod messages;
pub mod tracking_box;
