/// Whether a text being embedded is stored content or a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentType {
    #[default]
    Document,
    Query,
}
