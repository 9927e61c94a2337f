pub mod publication;

pub use publication::{Author, CitationMeta, Publication, Venue};
