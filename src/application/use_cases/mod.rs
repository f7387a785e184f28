/// Use cases module containing application workflow orchestration
mod view_dependency_tree;

pub use view_dependency_tree::ViewDependencyTreeUseCase;
