use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ChoroplethError, ChoroplethResult};

/// Static description of one selectable attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    pub id: String,
    pub display_name: String,
    /// Static axis upper bound. When set, the position scale uses it instead
    /// of the sampled maximum so axes stay comparable across attributes.
    pub domain_max: Option<f64>,
}

impl AttributeDescriptor {
    /// Creates a descriptor whose display name is derived from the id by
    /// replacing underscores with spaces.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_owned(),
            display_name: id.replace('_', " "),
            domain_max: None,
        }
    }

    #[must_use]
    pub fn with_domain_max(mut self, domain_max: f64) -> Self {
        self.domain_max = Some(domain_max);
        self
    }
}

/// Ordered set of selectable attributes, keyed by id.
///
/// Registration order is preserved and drives dropdown population in the
/// renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeRegistry {
    descriptors: IndexMap<String, AttributeDescriptor>,
}

impl AttributeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry for the severe-weather event data set this engine was built
    /// around, with the static axis bounds of the source data.
    #[must_use]
    pub fn severe_weather() -> Self {
        let mut registry = Self::new();
        let bounds = [
            ("dust_devil_count", 4.0),
            ("flash_flood_count", 2228.0),
            ("flood_count", 2095.0),
            ("funnel_cloud_count", 360.0),
            ("hail_count", 9961.0),
            ("thunderstorm_wind_count", 17885.0),
        ];
        for (id, domain_max) in bounds {
            registry.register(AttributeDescriptor::new(id).with_domain_max(domain_max));
        }
        registry
    }

    /// Registers a descriptor, replacing any previous one with the same id.
    pub fn register(&mut self, descriptor: AttributeDescriptor) {
        self.descriptors.insert(descriptor.id.clone(), descriptor);
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.descriptors.contains_key(id)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&AttributeDescriptor> {
        self.descriptors.get(id)
    }

    /// Looks up a descriptor, rejecting unregistered ids.
    pub fn resolve(&self, id: &str) -> ChoroplethResult<&AttributeDescriptor> {
        self.descriptors
            .get(id)
            .ok_or_else(|| ChoroplethError::UnknownAttribute { id: id.to_owned() })
    }

    /// Descriptors in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &AttributeDescriptor> {
        self.descriptors.values()
    }

    /// Attribute ids in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    #[must_use]
    pub fn first(&self) -> Option<&AttributeDescriptor> {
        self.descriptors.values().next()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
