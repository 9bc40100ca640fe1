//! # Blog Catalog
//!
//! Declares how the blog types map to resources. This is the startup code an application
//! runs once; the resulting [`Configuration`] is then shared read-only.
//!
//! Inclusion rules come from an [`InclusionPolicy`], which can be read from JSON so that
//! operators can change which related data is embedded without touching the declarations.

use crate::model::{Author, Comment, Post, Tag};
use resource_mapping::conventions::ForeignKeyLinkIdConvention;
use resource_mapping::{
    member, Configuration, ConfigurationBuilder, InclusionRule, LinkOptions, MappingError,
};
use serde::Deserialize;
use tracing::debug;

/// Inclusion rule per relationship of `Post`.
///
/// ```json
/// { "author": "always", "comments": "smart", "tags": "never" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct InclusionPolicy {
    pub author: InclusionRule,
    pub comments: InclusionRule,
    pub tags: InclusionRule,
}

impl InclusionPolicy {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Declarations for the blog, not yet built.
pub fn blog_builder(policy: &InclusionPolicy) -> Result<ConfigurationBuilder, MappingError> {
    debug!(?policy, "declaring blog resources");

    let mut builder = ConfigurationBuilder::with_default_conventions();
    builder.with_convention(ForeignKeyLinkIdConvention::new());

    // ===== Post =====
    builder
        .resource::<Post>()
        .with_all_properties()?
        .with_linked_resource(
            member!(Post => author => one Author),
            LinkOptions::new().include(policy.author),
        )?
        .with_linked_resource(
            member!(Post => comments => many Comment),
            LinkOptions::new().include(policy.comments),
        )?
        .with_linked_resource(
            member!(Post => tags => many Tag),
            LinkOptions::new().named("labels").include(policy.tags),
        )?;

    // ===== Author =====
    builder
        .resource::<Author>()
        .with_all_properties()?
        .with_all_linked_resources()?;

    // ===== Comment =====
    builder
        .resource::<Comment>()
        .with_resource_type("remarks")
        .with_all_properties()?;

    // ===== Tag =====
    builder.resource::<Tag>().with_all_properties()?;

    Ok(builder)
}

/// The frozen blog configuration with the default inclusion policy.
pub fn blog_configuration() -> Result<Configuration, MappingError> {
    blog_builder(&InclusionPolicy::default())?.build()
}
