use resource_framework::{Entity, Links, Record};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl From<u32> for ProjectId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A project tracked by the sample application.
///
/// # Resource Framework
/// This struct implements [`Record`] and [`Entity`], so it can be stored in a
/// [`StoreActor`](resource_framework::StoreActor) and served through a
/// [`ModelResource`](resource_framework::ModelResource).
///
/// Creation and updates both take [`ProjectParams`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Links::is_empty")]
    pub links: Links,
}

/// Attribute map for creating or updating a project.
///
/// Absent fields are left unchanged on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectParams {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectParams {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

impl Record for Project {
    type Id = ProjectId;

    fn id(&self) -> ProjectId {
        self.id
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

impl Entity for Project {
    type Params = ProjectParams;

    fn from_params(id: ProjectId, params: ProjectParams) -> Result<Self, String> {
        let name = match params.name {
            Some(name) if !name.trim().is_empty() => name,
            _ => return Err("Project name is required".to_string()),
        };
        Ok(Self {
            id,
            name,
            description: params.description.unwrap_or_default(),
            links: Links::new(),
        })
    }

    fn blank() -> Self {
        Self {
            id: ProjectId::default(),
            name: String::new(),
            description: String::new(),
            links: Links::new(),
        }
    }

    /// # Fields Updated
    /// - `name`: must not be blank
    /// - `description`
    fn apply(&mut self, params: ProjectParams) -> Result<(), String> {
        if let Some(name) = params.name {
            if name.trim().is_empty() {
                return Err("Project name cannot be blank".to_string());
            }
            self.name = name;
        }
        if let Some(description) = params.description {
            self.description = description;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_params_requires_name() {
        let err = Project::from_params(ProjectId(1), ProjectParams::default()).unwrap_err();
        assert_eq!(err, "Project name is required");

        let err = Project::from_params(ProjectId(1), ProjectParams::named("  ")).unwrap_err();
        assert_eq!(err, "Project name is required");
    }

    #[test]
    fn test_apply_keeps_absent_fields() {
        let mut project =
            Project::from_params(ProjectId(1), ProjectParams::named("Apollo").with_description("moon"))
                .unwrap();
        project
            .apply(ProjectParams {
                name: None,
                description: Some("lunar".to_string()),
            })
            .unwrap();
        assert_eq!(project.name, "Apollo");
        assert_eq!(project.description, "lunar");
    }

    #[test]
    fn test_serializes_links_only_when_present() {
        let mut project = Project::from_params(ProjectId(3), ProjectParams::named("Gemini")).unwrap();
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["id"], 3);
        assert!(json.get("links").is_none());

        project
            .links_mut()
            .insert("show".to_string(), "/project/3".to_string());
        let json = serde_json::to_value(&project).unwrap();
        assert_eq!(json["links"]["show"], "/project/3");
    }
}
