pub mod attributes;
pub mod derive;
pub mod join;
pub mod quantile;
pub mod scale;
pub mod sources;
pub mod types;

pub use attributes::{AttributeDescriptor, AttributeRegistry};
pub use derive::{ScaleSet, derive_scales};
pub use join::join_data;
pub use quantile::QuantileClassifier;
pub use scale::PositionScale;
pub use sources::SourceBundle;
pub use types::{AttributeValue, ChartFrame, Entity, GeometryFeature, TabularRecord};
