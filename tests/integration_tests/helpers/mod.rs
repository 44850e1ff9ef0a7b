
pub use test_postgres::TestPostgres;
