//! PostgreSQL implementation of the `ticketing-db` repository traits.

pub mod config;
pub mod postgres_repositories;
pub mod repository;
pub mod utils;

pub use config::{ConfigError, PostgresConfig};
pub use postgres_repositories::{PostgresRepositories, RepositorySession};
pub use repository::employee::EmployeeRepositoryImpl;
pub use repository::ticket::TicketRepositoryImpl;

#[cfg(test)]
pub mod test_helper;
