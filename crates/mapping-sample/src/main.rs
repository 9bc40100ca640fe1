//! # Mapping Sample
//!
//! Builds the blog configuration once at startup and hands it to concurrent reader
//! tasks, the way a web server would share it between request handlers.
//!
//! ## 📚 Quick Start
//!
//! ```bash
//! # Build summary and one line per resource
//! RUST_LOG=info cargo run
//!
//! # Every declaration and convention decision
//! RUST_LOG=debug cargo run
//! ```

use mapping_sample::catalog::{blog_builder, InclusionPolicy};
use mapping_sample::linkage::{identify, related_identifiers};
use mapping_sample::model::sample_posts;
use resource_mapping::tracing::setup_tracing;
use std::sync::Arc;
use tracing::{error, info, Instrument};

const INCLUSION_POLICY: &str = r#"{ "author": "always", "tags": "never" }"#;

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let policy = InclusionPolicy::from_json(INCLUSION_POLICY).map_err(|e| e.to_string())?;
    info!(?policy, "Loaded inclusion policy");

    let config = blog_builder(&policy)
        .and_then(|builder| builder.build())
        .map_err(|e| e.to_string())?;
    let config = Arc::new(config);

    for mapping in config.mappings() {
        info!(
            resource_type = mapping.resource_type(),
            attributes = mapping.attributes().len(),
            relationships = mapping.relationships().len(),
            "Mapping ready"
        );
    }

    // Readers share the frozen configuration; none of them can mutate it.
    let mut handles = Vec::new();
    for post in sample_posts() {
        let config = Arc::clone(&config);
        let span = tracing::info_span!("reader", post_id = post.id);
        handles.push(tokio::spawn(
            async move {
                let this = identify(&config, &post)?;
                let author = related_identifiers(&config, &post, "author")?;
                let comments = related_identifiers(&config, &post, "comments")?;
                let labels = related_identifiers(&config, &post, "labels")?;

                let document = serde_json::json!({
                    "data": this,
                    "relationships": {
                        "author": author,
                        "comments": comments,
                        "labels": labels,
                    },
                });
                info!(%document, "Resolved linkage");
                Ok::<_, resource_mapping::MappingError>(())
            }
            .instrument(span),
        ));
    }

    for handle in handles {
        match handle.await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => error!(error = %e, "Reader failed"),
            Err(e) => error!(error = %e, "Reader task panicked"),
        }
    }

    info!("Application completed successfully");
    Ok(())
}
