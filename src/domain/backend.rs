use std::fmt;
use std::str::FromStr;

/// The capability a backend is selected for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderDomain {
    Generation,
    Embedding,
    VectorStorage,
}

impl ProviderDomain {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderDomain::Generation => "generation",
            ProviderDomain::Embedding => "embedding",
            ProviderDomain::VectorStorage => "vector-storage",
        }
    }
}

impl fmt::Display for ProviderDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A configured backend name paired with the domain it serves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackendIdentifier {
    pub domain: ProviderDomain,
    pub name: String,
}

impl BackendIdentifier {
    pub fn new(domain: ProviderDomain, name: impl Into<String>) -> Self {
        Self {
            domain,
            name: name.into(),
        }
    }
}

impl fmt::Display for BackendIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.domain, self.name)
    }
}

/// Registered generation/embedding vendors. Names match case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmBackend {
    OpenAi,
    Cohere,
}

impl LlmBackend {
    pub const ALL: [LlmBackend; 2] = [LlmBackend::OpenAi, LlmBackend::Cohere];

    pub fn as_str(&self) -> &'static str {
        match self {
            LlmBackend::OpenAi => "OPENAI",
            LlmBackend::Cohere => "COHERE",
        }
    }
}

impl FromStr for LlmBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|backend| backend.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for LlmBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Registered vector-storage vendors. Names match case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorDbBackend {
    Qdrant,
    PgVector,
}

impl VectorDbBackend {
    pub const ALL: [VectorDbBackend; 2] = [VectorDbBackend::Qdrant, VectorDbBackend::PgVector];

    pub fn as_str(&self) -> &'static str {
        match self {
            VectorDbBackend::Qdrant => "QDRANT",
            VectorDbBackend::PgVector => "PGVECTOR",
        }
    }
}

impl FromStr for VectorDbBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|backend| backend.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for VectorDbBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
