pub mod logging;
pub mod notification;
pub mod repositories;
pub mod time;
