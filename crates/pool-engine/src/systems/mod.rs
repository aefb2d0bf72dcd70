pub mod collision;
pub mod motion;
