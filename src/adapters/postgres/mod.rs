//! PostgreSQL adapters.

mod results_repository;

pub use results_repository::PostgresResultsRepository;
