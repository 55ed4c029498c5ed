pub mod cart_items;
pub mod home;
pub mod login;
pub mod products;
pub mod signup;
