pub mod products;
pub mod taxes;
pub mod transport;
