pub mod cart_item;
pub mod class;
pub mod instructor;
pub mod payment;
pub mod user;
