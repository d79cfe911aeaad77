pub mod db_init;
pub mod employee;
pub mod ticket;
