pub mod catalogue;

pub use catalogue::{EndpointCatalogue, EndpointDescriptor, EndpointEntry, ScopeSection};
