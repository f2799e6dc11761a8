use resource_framework::mock::MockViews;
use resource_framework::{
    Entity, Links, Model, ModelResource, Record, Resource, ResourceError, StoreActor, StoreError,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// --- Test Entity ---

#[derive(Clone, Debug, PartialEq)]
struct Task {
    id: u32,
    title: String,
    done: bool,
    links: Links,
}

#[derive(Clone, Debug, Default)]
struct TaskParams {
    title: Option<String>,
    done: Option<bool>,
}

impl Record for Task {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn links_mut(&mut self) -> &mut Links {
        &mut self.links
    }
}

impl Entity for Task {
    type Params = TaskParams;

    fn from_params(id: u32, params: TaskParams) -> Result<Self, String> {
        let title = params.title.ok_or("title is required")?;
        Ok(Self {
            id,
            title,
            done: params.done.unwrap_or(false),
            links: Links::new(),
        })
    }

    fn blank() -> Self {
        Self {
            id: 0,
            title: String::new(),
            done: false,
            links: Links::new(),
        }
    }

    fn apply(&mut self, params: TaskParams) -> Result<(), String> {
        if let Some(title) = params.title {
            if title.is_empty() {
                return Err("title cannot be empty".to_string());
            }
            self.title = title;
        }
        if let Some(done) = params.done {
            self.done = done;
        }
        Ok(())
    }
}

fn titled(title: &str) -> TaskParams {
    TaskParams {
        title: Some(title.to_string()),
        done: None,
    }
}

fn start() -> ModelResource<resource_framework::StoreModel<Task>, MockViews> {
    let counter = Arc::new(AtomicU32::new(1));
    let (actor, model) = StoreActor::<Task>::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
    tokio::spawn(actor.run());
    ModelResource::new(model, "task", MockViews::default())
}

// --- Tests ---

#[tokio::test]
async fn test_resource_full_lifecycle() {
    let tasks = start();

    // 1. Create
    let id = tasks.create(titled("write docs")).await.unwrap();
    assert_eq!(id, 1); // First ID should be 1

    // 2. Edit form lookup succeeds
    tasks.edit(id).await.unwrap();

    // 3. Update
    let updated = tasks
        .update(
            id,
            TaskParams {
                title: None,
                done: Some(true),
            },
        )
        .await
        .unwrap();
    assert!(updated.done);
    assert_eq!(updated.title, "write docs");

    // 4. Show reflects the update
    let shown = tasks.show(id).await.unwrap().unwrap();
    assert_eq!(shown, updated);

    // 5. New is unsaved
    let fresh = tasks.new_record();
    assert_eq!(fresh, Task::blank());
    assert_eq!(tasks.list(10, 0).await.unwrap().count, 1);
}

#[tokio::test]
async fn test_list_pages_in_id_order() {
    let tasks = start();
    for title in ["a", "b", "c", "d", "e"] {
        tasks.create(titled(title)).await.unwrap();
    }

    let page = tasks.list(2, 1).await.unwrap();

    assert_eq!(page.limit, 2);
    assert_eq!(page.offset, 1);
    assert_eq!(page.count, 5);
    let ids: Vec<u32> = page.rows.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3]);
    assert_eq!(page.rows[0].links["edit"], "/task/2/edit");
    assert_eq!(page.rows[1].links["show"], "/task/3");

    let tail = tasks.list(10, 4).await.unwrap();
    assert_eq!(tail.rows.len(), 1);
    assert!(tasks.list(10, 5).await.unwrap().rows.is_empty());
}

#[tokio::test]
async fn test_missing_entities() {
    let tasks = start();

    let err = tasks.edit(42).await.unwrap_err();
    assert_eq!(err.status(), 404);

    assert_eq!(tasks.show(42).await.unwrap(), None);

    let err = tasks.update(42, titled("x")).await.unwrap_err();
    assert!(matches!(err, ResourceError::Missing(_)));
}

#[tokio::test]
async fn test_model_rejections_pass_through() {
    let tasks = start();

    let err = tasks.create(TaskParams::default()).await.unwrap_err();
    assert!(matches!(
        err,
        ResourceError::Model(StoreError::Rejected(ref msg)) if msg == "title is required"
    ));

    let id = tasks.create(titled("keep me")).await.unwrap();
    let err = tasks.update(id, titled("")).await.unwrap_err();
    assert!(matches!(err, ResourceError::Model(StoreError::Rejected(_))));

    // A rejected update leaves the row untouched.
    let shown = tasks.show(id).await.unwrap().unwrap();
    assert_eq!(shown.title, "keep me");
}

#[tokio::test]
async fn test_update_of_deleted_row_is_not_found() {
    let counter = Arc::new(AtomicU32::new(1));
    let (actor, model) = StoreActor::<Task>::new(10, move || counter.fetch_add(1, Ordering::SeqCst));
    tokio::spawn(actor.run());

    // A record that was never stored, as if deleted between find and update.
    let ghost = Task::from_params(99, titled("ghost")).unwrap();
    let err = model.update_attributes(ghost, titled("boo")).await.unwrap_err();
    assert_eq!(err, StoreError::NotFound("99".to_string()));
}

#[tokio::test]
async fn test_duplicate_ids_are_rejected() {
    let (actor, model) = StoreActor::<Task>::new(10, || 7);
    tokio::spawn(actor.run());

    model.create(titled("first")).await.unwrap();
    let err = model.create(titled("second")).await.unwrap_err();
    assert_eq!(err, StoreError::Rejected("duplicate id 7".to_string()));
}

#[tokio::test]
async fn test_closed_store() {
    let (actor, model) = StoreActor::<Task>::new(10, || 1);
    drop(actor);

    let err = model.find(1).await.unwrap_err();
    assert_eq!(err, StoreError::Closed);
}
