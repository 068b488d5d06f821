pub mod demo_notice;
pub mod message;
pub mod spinner;
