//! # Registration Descriptor
//!
//! A composition root wires resources without knowing their concrete types up front. A
//! [`Registration`] tells it everything it needs:
//!
//! - **type_name** - key of the model to inject (e.g. `"Project"`).
//! - **dependency** - key of the view engine to inject ([`VIEW_ENGINE`]).
//! - **builder** - turns the resolved model and view engine into a [`ModelResource`].
//!
//! ```rust
//! use resource_framework::mock::{MockModel, MockViews};
//! use resource_framework::{Links, ModelResource, Record, Resource};
//!
//! # #[derive(Clone, Debug)] struct Row { id: u32, links: Links }
//! # impl Record for Row {
//! #     type Id = u32;
//! #     fn id(&self) -> u32 { self.id }
//! #     fn links_mut(&mut self) -> &mut Links { &mut self.links }
//! # }
//! let registration =
//!     ModelResource::<MockModel<Row, String>, MockViews>::registration("project", None);
//! assert_eq!(registration.type_name(), "Project");
//!
//! let resource = registration.build(MockModel::new(), MockViews::default());
//! assert_eq!(resource.name(), "project");
//! ```

use crate::adapter::ModelResource;
use crate::base::ViewEngine;
use crate::model::Model;
use std::fmt;

/// Dependency key of the view engine.
pub const VIEW_ENGINE: &str = "view_engine";

type Builder<M, V> = Box<dyn Fn(M, V) -> ModelResource<M, V> + Send + Sync>;

/// Everything a composition root needs to construct one resource.
pub struct Registration<M, V> {
    type_name: String,
    dependency: &'static str,
    builder: Builder<M, V>,
}

impl<M, V> Registration<M, V>
where
    M: Model + 'static,
    V: ViewEngine + 'static,
{
    /// Describes the resource `name`, backed by the model `model_name`.
    ///
    /// Without a `model_name` the model key is `name` capitalized.
    pub fn new(name: &str, model_name: Option<&str>) -> Self {
        let type_name = match model_name {
            Some(model_name) => model_name.to_string(),
            None => capitalize(name),
        };
        let name = name.to_string();

        Self {
            type_name,
            dependency: VIEW_ENGINE,
            builder: Box::new(move |model, view_engine| {
                ModelResource::new(model, name.clone(), view_engine)
            }),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn dependency(&self) -> &'static str {
        self.dependency
    }

    /// Builds the resource from its resolved dependencies.
    pub fn build(&self, model: M, view_engine: V) -> ModelResource<M, V> {
        (self.builder)(model, view_engine)
    }
}

impl<M, V> fmt::Debug for Registration<M, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("type_name", &self.type_name)
            .field("dependency", &self.dependency)
            .finish_non_exhaustive()
    }
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockModel, MockViews};
    use crate::model::{Links, Record};
    use crate::resource::Resource;

    #[derive(Clone, Debug)]
    struct Row {
        id: u32,
        links: Links,
    }

    impl Record for Row {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
        fn links_mut(&mut self) -> &mut Links {
            &mut self.links
        }
    }

    type Reg = Registration<MockModel<Row, String>, MockViews>;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("project"), "Project");
        assert_eq!(capitalize("blogPost"), "Blogpost");
        assert_eq!(capitalize("éclair"), "Éclair");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_default_type_name() {
        let registration = Reg::new("project", None);
        assert_eq!(registration.type_name(), "Project");
        assert_eq!(registration.dependency(), VIEW_ENGINE);
    }

    #[test]
    fn test_explicit_type_name() {
        let registration = Reg::new("task", Some("TodoItem"));
        assert_eq!(registration.type_name(), "TodoItem");
    }

    #[test]
    fn test_build_binds_name() {
        let registration = Reg::new("project", None);
        let resource = registration.build(MockModel::new(), MockViews::default());
        assert_eq!(resource.name(), "project");
        assert_eq!(resource.show_link(&3), "/project/3");

        // Builders are reusable.
        let again = registration.build(MockModel::new(), MockViews::default());
        assert_eq!(again.name(), "project");
    }

    #[test]
    fn test_debug_omits_builder() {
        let registration = Reg::new("project", None);
        let rendered = format!("{:?}", registration);
        assert!(rendered.contains("Project"));
        assert!(rendered.contains("view_engine"));
    }
}
