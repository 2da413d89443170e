//! Service discovery
//!
//! - `tree` - Tree Builder: scans directories into a `ServiceTree`
//! - `finder` - Service Boundary Classifier
//! - `printer` - human-readable tree rendering

pub mod finder;
pub mod printer;
pub mod tree;

pub use finder::{classify, Classification, ServiceFinder};
pub use printer::render_tree;
pub use tree::{NodeId, ServiceNode, ServiceTree};
