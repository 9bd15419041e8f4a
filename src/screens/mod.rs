//! Screen features. Each one pairs a pure reducer with an effect handler.

pub mod cart;
pub mod dish;
pub mod dishes;
