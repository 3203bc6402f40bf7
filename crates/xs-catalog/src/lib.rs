mod catalog;
mod resolver;

pub use catalog::SyntaxCatalog;
pub use resolver::{BoundArgument, NoObjects, ObjectLookup, Resolution, Resolver};
