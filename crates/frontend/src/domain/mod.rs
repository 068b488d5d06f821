pub mod customer;
pub mod order;
