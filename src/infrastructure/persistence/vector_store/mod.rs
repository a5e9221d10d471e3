mod pgvector_provider;
mod qdrant_provider;
mod vectordb_provider_factory;

pub use pgvector_provider::PgVectorProvider;
pub use qdrant_provider::QdrantProvider;
pub use vectordb_provider_factory::VectorDbProviderFactory;
