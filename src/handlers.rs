pub mod billboards;
pub mod health;
pub mod predictions;
