pub mod repo_impl;
pub mod create;
pub mod deactivate;
pub mod find;
pub mod load;
pub mod purge;
pub mod update;
#[cfg(test)]
pub mod test_utils;

pub use repo_impl::EmployeeRepositoryImpl;
