pub mod repo_impl;
pub mod aggregate;
pub mod count;
pub mod create;
pub mod delete;
pub mod find;
pub mod load;
pub mod max_sequence;
pub mod update;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::TicketRepositoryImpl;
