/// Result alias with `anyhow::Error`, used by every fallible operation
/// outside the parser and filter (which cannot fail).
pub type Result<T> = std::result::Result<T, anyhow::Error>;
