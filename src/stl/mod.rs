pub mod ascii;
pub mod document;
pub mod facet;
pub mod file;

pub use document::StlDocument;
pub use facet::Facet;
