mod db_engine;
mod vector_store;

pub use db_engine::{DbClient, DbEngine};

pub use vector_store::{PgVectorProvider, QdrantProvider, VectorDbProviderFactory};
