#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionInfo {
    pub name: String,
    pub vector_size: Option<u64>,
    pub record_count: u64,
}
