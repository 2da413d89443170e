// Base Extractor Types and Traits
//
// - types.rs: outline records and the persisted entities (CodeEntity, Executable)
// - extractor.rs: BaseExtractor implementation (file text, node text)
// - tree_methods.rs: Tree navigation helpers
// - creation_methods.rs: outline record construction

pub mod creation_methods;
pub mod extractor;
pub mod tree_methods;
pub mod types;

// Re-export key types for external use
pub use extractor::BaseExtractor;
pub use types::{
    CodeEntity, Executable, FileOutline, FunctionDeclaration, TypeDeclaration, TypeKind,
};
