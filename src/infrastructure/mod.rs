pub mod llm;
pub mod observability;
pub mod payments;
pub mod persistence;
