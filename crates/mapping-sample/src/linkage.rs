//! Resource identifiers read through a frozen configuration.
//!
//! This is the kind of lookup a document writer performs for every resource it emits:
//! the `(type, id)` pair of the resource itself and of everything it links to. A
//! relationship with an id accessor is answered from the parent alone; otherwise each
//! related instance is visited and identified through its own mapping.

use resource_mapping::{Configuration, MappingError, TypeKey};
use serde::Serialize;
use serde_json::Value;
use std::any::Any;

/// The `(type, id)` pair naming one resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIdentifier {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: Option<String>,
}

pub fn identify<T: Any>(
    config: &Configuration,
    instance: &T,
) -> Result<ResourceIdentifier, MappingError> {
    let mapping = config.mapping(&TypeKey::of::<T>())?;
    Ok(ResourceIdentifier {
        resource_type: mapping.resource_type().to_string(),
        id: mapping.identifier(instance)?,
    })
}

/// Identifiers of the resources `instance` links to through `relationship`.
///
/// Returns `Ok(None)` when the type has no relationship of that name.
pub fn related_identifiers<T: Any>(
    config: &Configuration,
    instance: &T,
    relationship: &str,
) -> Result<Option<Vec<ResourceIdentifier>>, MappingError> {
    let mapping = config.mapping_for::<T>()?;
    let Some(descriptor) = mapping.relationship(relationship) else {
        return Ok(None);
    };
    let resource_type = descriptor.related_resource_type().to_string();

    if let Some(ids) = descriptor.related_ids(instance)? {
        let ids = match ids {
            Value::Null => Vec::new(),
            Value::Array(items) => items.into_iter().map(render_id).collect(),
            other => vec![render_id(other)],
        };
        return Ok(Some(
            ids.into_iter()
                .map(|id| ResourceIdentifier {
                    resource_type: resource_type.clone(),
                    id,
                })
                .collect(),
        ));
    }

    let related_mapping = config.related_mapping(descriptor)?;
    descriptor
        .related(instance)?
        .instances()
        .into_iter()
        .map(|related| {
            Ok(ResourceIdentifier {
                resource_type: resource_type.clone(),
                id: related_mapping.identifier(related)?,
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Some)
}

fn render_id(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(id) => Some(id),
        other => Some(other.to_string()),
    }
}
