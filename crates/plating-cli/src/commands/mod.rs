pub mod dispatch;
pub mod dump;
pub mod prepare;
