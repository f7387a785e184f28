/// Domain layer for dependency trees
///
/// Pure logic with no I/O: the report parser, the search filter and the
/// value objects they work on.
pub mod domain;
pub mod policies;
pub mod services;
