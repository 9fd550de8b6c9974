pub mod models;
pub mod shop;

pub use models::{BicycleType, Order};
pub use shop::OrderShop;
