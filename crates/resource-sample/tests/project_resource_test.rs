use resource_framework::mock::{MockError, MockModel, MockViews, ModelCall};
use resource_framework::{
    Entity, FindAndCount, FindOptions, HttpError, ModelResource, Resource, ResourceError,
};
use resource_sample::model::{Project, ProjectId, ProjectParams};

type MockProjects = MockModel<Project, ProjectParams>;

fn project(id: u32, name: &str) -> Project {
    Project::from_params(ProjectId(id), ProjectParams::named(name)).unwrap()
}

/// The `project` resource built through its registration, backed by a mock model.
fn resource(mock: &MockProjects) -> ModelResource<MockProjects, MockViews> {
    let registration = ModelResource::<MockProjects, MockViews>::registration("project", None);
    assert_eq!(registration.type_name(), "Project");
    registration.build(mock.clone(), MockViews::default())
}

#[tokio::test]
async fn test_list_decorates_project_rows() {
    let mock = MockProjects::new();
    let mut tagged = project(1, "Apollo");
    tagged
        .links
        .insert("docs".to_string(), "https://example.org/apollo".to_string());
    mock.expect_find_and_count_all().return_ok(FindAndCount {
        rows: vec![tagged, project(2, "Gemini")],
        count: 40,
    });
    let projects = resource(&mock);

    let page = projects.list(2, 20).await.unwrap();

    assert_eq!(
        mock.calls(),
        vec![ModelCall::FindAndCountAll(FindOptions {
            limit: 2,
            offset: 20
        })]
    );
    assert_eq!((page.limit, page.offset, page.count), (2, 20, 40));
    assert_eq!(page.rows[0].links["docs"], "https://example.org/apollo");
    assert_eq!(page.rows[0].links["edit"], "/project/1/edit");
    assert_eq!(page.rows[1].links["show"], "/project/2");
    mock.verify();
}

#[tokio::test]
async fn test_edit_rejects_missing_project() {
    let mock = MockProjects::new();
    mock.expect_find().return_ok(None);
    let projects = resource(&mock);

    let err = projects.edit(ProjectId(777)).await.unwrap_err();

    assert_eq!(err.as_http(), Some(&HttpError::not_found()));
    assert_eq!(mock.calls(), vec![ModelCall::Find(ProjectId(777))]);
}

#[tokio::test]
async fn test_create_and_update_forward_params_unchanged() {
    let params = ProjectParams::named("Artemis").with_description("Return to the moon");
    let mock = MockProjects::new();
    mock.expect_create().return_ok(project(5, "Artemis"));
    mock.expect_find().return_ok(Some(project(5, "Artemis")));
    mock.expect_update_attributes()
        .return_ok(project(5, "Artemis II"));
    let projects = resource(&mock);

    let id = projects.create(params.clone()).await.unwrap();
    assert_eq!(id, ProjectId(5));

    let rename = ProjectParams::named("Artemis II");
    let updated = projects.update(id, rename.clone()).await.unwrap();
    assert_eq!(updated.name, "Artemis II");

    assert_eq!(
        mock.calls(),
        vec![
            ModelCall::Create(params),
            ModelCall::Find(ProjectId(5)),
            ModelCall::UpdateAttributes {
                id: ProjectId(5),
                params: rename
            },
        ]
    );
    mock.verify();
}

#[tokio::test]
async fn test_show_relays_model_failure() {
    let mock = MockProjects::new();
    mock.expect_find().return_err(MockError::new("connection refused"));
    let projects = resource(&mock);

    let err = projects.show(ProjectId(1)).await.unwrap_err();

    assert!(matches!(err, ResourceError::Model(ref e) if e == &MockError::new("connection refused")));
}

#[test]
fn test_new_record_is_built_by_the_model() {
    let mock = MockProjects::new();
    mock.expect_build(Project::blank());
    let projects = resource(&mock);

    assert_eq!(projects.new_record(), Project::blank());
    assert_eq!(mock.calls(), vec![ModelCall::Build]);
}
