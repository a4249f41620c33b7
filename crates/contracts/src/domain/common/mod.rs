pub mod kind;
pub mod params;
pub mod resource;

pub use kind::ResourceKind;
pub use params::{DetailParams, ListParams};
pub use resource::{RecordFormat, ResourceDetail, ResourceSummary};
