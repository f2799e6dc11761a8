//! # Resource Sample
//!
//! Walks a `project` resource through every verb:
//! 1.  Starting the [`ProjectSystem`].
//! 2.  Creating a few projects and listing the first page.
//! 3.  Editing, updating and showing one of them.
//! 4.  Asking for a project that does not exist.
//!
//! ```bash
//! RUST_LOG=info cargo run -p resource-sample
//! RUST_LOG=debug RESOURCE_MOUNT_PATH=/api cargo run -p resource-sample
//! ```

use resource_framework::tracing::setup_tracing;
use resource_framework::{Resource, ResourceConfig, ViewEngine};
use resource_sample::lifecycle::ProjectSystem;
use resource_sample::model::{ProjectId, ProjectParams};
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let config = ResourceConfig::from_env()?;
    info!(?config, "Starting application");

    let system = ProjectSystem::new(&config);
    let projects = &system.projects;
    let views = projects.view_engine();

    let seed = [
        ("Apollo", "Crewed lunar landings"),
        ("Gemini", "Two-person orbital flights"),
        ("Mercury", "First crewed flights"),
    ];
    let span = tracing::info_span!("seeding");
    async {
        for (name, description) in seed {
            let params = ProjectParams::named(name).with_description(description);
            let id = projects.create(params).await?;
            info!(%id, name, "Project created");
        }
        Ok::<_, Box<dyn std::error::Error>>(())
    }
    .instrument(span)
    .await?;

    let page = projects.list(2, 0).await?;
    print!("{}", views.render("list", &serde_json::to_value(&page)?)?);

    let id = page.rows.first().map(|p| p.id).ok_or("no projects listed")?;
    projects.edit(id).await?;
    let updated = projects
        .update(
            id,
            ProjectParams {
                name: None,
                description: Some("Six crewed lunar landings".to_string()),
            },
        )
        .await?;
    info!(id = %updated.id, "Project updated");

    if let Some(project) = projects.show(id).await? {
        print!("{}", views.render("show", &serde_json::to_value(&project)?)?);
    }

    let draft = projects.new_record();
    print!("{}", views.render("new", &serde_json::to_value(&draft)?)?);

    match projects.edit(ProjectId(404)).await {
        Ok(()) => warn!("Unexpected project 404"),
        Err(e) => info!(status = e.status(), error = %e, "Edit rejected"),
    }

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
