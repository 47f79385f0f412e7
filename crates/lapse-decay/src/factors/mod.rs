pub mod adjustment;
pub mod display;
pub mod temporal;
