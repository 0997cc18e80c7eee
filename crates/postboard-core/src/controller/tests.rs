use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use super::*;
use crate::error::{Field, FieldError};

/// Store double that records the last saved collection.
#[derive(Default)]
struct RecordingStore {
    saved: Mutex<Option<Vec<Post>>>,
    initial: Mutex<Option<Result<Vec<Post>, StoreError>>>,
    saves: AtomicUsize,
    fail_writes: AtomicBool,
}

impl RecordingStore {
    fn with_load(result: Result<Vec<Post>, StoreError>) -> Self {
        Self {
            initial: Mutex::new(Some(result)),
            ..Self::default()
        }
    }

    fn saved(&self) -> Option<Vec<Post>> {
        self.saved.lock().unwrap().clone()
    }

    fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

impl PostStore for RecordingStore {
    fn load(&self) -> Result<Vec<Post>, StoreError> {
        if let Some(result) = self.initial.lock().unwrap().clone() {
            return result;
        }
        Ok(self.saved().unwrap_or_default())
    }

    fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Io("quota exceeded".to_string()));
        }
        *self.saved.lock().unwrap() = Some(posts.to_vec());
        Ok(())
    }
}

fn controller() -> (PostController, Arc<RecordingStore>) {
    let store = Arc::new(RecordingStore::default());
    (PostController::open(store.clone()), store)
}

fn created(outcome: SubmitOutcome) -> PostId {
    match outcome {
        SubmitOutcome::Created(id) => id,
        other => panic!("expected a created post, got {other:?}"),
    }
}

#[test]
fn test_load_absent_data_starts_empty() {
    let (controller, store) = controller();
    assert!(controller.posts().is_empty());
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_load_corrupt_data_starts_empty() {
    let store = Arc::new(RecordingStore::with_load(Err(StoreError::Corrupt(
        "expected value at line 1".to_string(),
    ))));
    let controller = PostController::open(store);

    assert!(controller.posts().is_empty());
    assert_eq!(controller.mode(), &FormMode::Create);
}

#[test]
fn test_blank_submit_changes_nothing() {
    let (mut controller, store) = controller();
    controller.submit("Keep", "me").unwrap();

    for (title, content) in [("", "body"), ("title", "   "), (" ", "\n\t")] {
        let errors = controller.submit(title, content).unwrap_err();

        assert_eq!(errors.title.is_some(), title.trim().is_empty());
        assert_eq!(errors.content.is_some(), content.trim().is_empty());
        assert_eq!(controller.posts().len(), 1);
        assert_eq!(controller.form().errors, errors);
    }
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_rejected_submit_keeps_form_input() {
    let (mut controller, _) = controller();
    controller.submit("Draft title", "").unwrap_err();

    assert_eq!(controller.form().title, "Draft title");
    assert_eq!(
        controller.form().errors.get(Field::Content),
        Some(&FieldError::Required(Field::Content))
    );
    assert_eq!(controller.form().errors.get(Field::Title), None);
}

#[test]
fn test_create_inserts_at_front_and_persists() {
    let (mut controller, store) = controller();
    let first = created(controller.submit("First", "one").unwrap());
    let second = created(controller.submit("Hello", "World").unwrap());

    let head = &controller.posts()[0];
    assert_eq!(head.id, second);
    assert_eq!(head.title, "Hello");
    assert_eq!(head.content, "World");
    assert!(!head.is_edited());
    assert_ne!(first, second);

    assert_eq!(store.saved().unwrap(), controller.posts());
    assert_eq!(controller.mode(), &FormMode::Create);
    assert_eq!(controller.form(), &PostForm::default());
}

#[test]
fn test_edit_updates_in_place() {
    let (mut controller, store) = controller();
    let older = created(controller.submit("Older", "a").unwrap());
    let target = created(controller.submit("Title", "before").unwrap());
    let newest = created(controller.submit("Newest", "c").unwrap());

    assert!(controller.begin_edit(&target));
    assert_eq!(controller.mode(), &FormMode::Edit(target.clone()));
    assert_eq!(controller.form().title, "Title");
    assert_eq!(controller.form().content, "before");

    let outcome = controller.submit("Title", "after").unwrap();
    assert_eq!(outcome, SubmitOutcome::Updated(target.clone()));

    let ids: Vec<&PostId> = controller.posts().iter().map(|p| &p.id).collect();
    assert_eq!(ids, vec![&newest, &target, &older]);

    let post = controller.find(&target).unwrap();
    assert_eq!(post.title, "Title");
    assert_eq!(post.content, "after");
    assert!(post.is_edited());
    assert_eq!(store.saved().unwrap(), controller.posts());
    assert_eq!(controller.mode(), &FormMode::Create);
}

#[test]
fn test_begin_edit_unknown_id_is_noop() {
    let (mut controller, _) = controller();
    controller.submit("Only", "post").unwrap();

    assert!(!controller.begin_edit(&PostId::from("missing")));
    assert_eq!(controller.mode(), &FormMode::Create);
    assert_eq!(controller.form(), &PostForm::default());
}

#[test]
fn test_begin_edit_unknown_id_keeps_current_edit() {
    let (mut controller, _) = controller();
    let a = created(controller.submit("Title A", "Content A").unwrap());
    controller.submit("Title B", "Content B").unwrap();
    assert!(controller.begin_edit(&a));

    assert!(!controller.begin_edit(&PostId::from("missing")));

    assert_eq!(controller.mode(), &FormMode::Edit(a));
    assert_eq!(controller.form().title, "Title A");
    assert_eq!(controller.form().content, "Content A");
}

#[test]
fn test_cancel_edit_resets_form() {
    let (mut controller, _) = controller();
    let id = created(controller.submit("A", "B").unwrap());
    controller.begin_edit(&id);

    controller.cancel_edit();

    assert_eq!(controller.mode(), &FormMode::Create);
    assert_eq!(controller.form(), &PostForm::default());
    assert_eq!(controller.find(&id).unwrap().content, "B");
}

#[test]
fn test_cancel_delete_keeps_collection() {
    let (mut controller, store) = controller();
    let id = created(controller.submit("A", "B").unwrap());

    controller.request_delete(&id);
    assert_eq!(controller.pending_delete(), Some(&id));
    controller.cancel_delete();

    assert_eq!(controller.pending_delete(), None);
    assert_eq!(controller.posts().len(), 1);
    assert_eq!(store.save_count(), 1);
}

#[test]
fn test_confirm_delete_removes_exactly_one() {
    let (mut controller, store) = controller();
    let keep = created(controller.submit("Keep", "1").unwrap());
    let doomed = created(controller.submit("Drop", "2").unwrap());

    controller.request_delete(&doomed);
    let removed = controller.confirm_delete().unwrap();

    assert_eq!(removed.id, doomed);
    assert_eq!(controller.pending_delete(), None);
    assert_eq!(controller.posts().len(), 1);
    assert_eq!(controller.posts()[0].id, keep);
    assert_eq!(store.saved().unwrap(), controller.posts());
}

#[test]
fn test_deleting_edit_target_returns_to_create_mode() {
    let (mut controller, _) = controller();
    let id = created(controller.submit("A", "B").unwrap());
    controller.begin_edit(&id);

    controller.request_delete(&id);
    controller.confirm_delete();

    assert_eq!(controller.mode(), &FormMode::Create);
    assert_eq!(controller.form(), &PostForm::default());
}

#[test]
fn test_deleting_other_post_keeps_edit_mode() {
    let (mut controller, _) = controller();
    let editing = created(controller.submit("A", "B").unwrap());
    let other = created(controller.submit("C", "D").unwrap());
    controller.begin_edit(&editing);

    controller.request_delete(&other);
    controller.confirm_delete();

    assert_eq!(controller.mode(), &FormMode::Edit(editing));
    assert_eq!(controller.form().title, "A");
}

#[test]
fn test_confirm_delete_unknown_id_clears_pending() {
    let (mut controller, store) = controller();
    controller.submit("A", "B").unwrap();

    controller.request_delete(&PostId::from("gone"));
    assert!(controller.confirm_delete().is_none());

    assert_eq!(controller.pending_delete(), None);
    assert_eq!(controller.posts().len(), 1);
    assert_eq!(store.save_count(), 1);
    assert!(controller.confirm_delete().is_none());
}

#[test]
fn test_submit_after_edit_target_deleted() {
    let (mut controller, store) = controller();
    let id = created(controller.submit("A", "B").unwrap());
    controller.begin_edit(&id);
    controller.posts.clear();

    let outcome = controller.submit("A", "changed").unwrap();

    assert_eq!(outcome, SubmitOutcome::TargetMissing(id));
    assert!(controller.posts().is_empty());
    assert_eq!(controller.mode(), &FormMode::Create);
    assert_eq!(store.save_count(), 2);
    assert_eq!(store.saved().unwrap(), Vec::<Post>::new());
}

#[test]
fn test_submit_with_missing_target_retries_failed_write() {
    let (mut controller, store) = controller();
    let id = created(controller.submit("A", "B").unwrap());
    controller.begin_edit(&id);

    store.fail_writes.store(true, Ordering::SeqCst);
    controller.request_delete(&id);
    controller.confirm_delete();
    assert!(controller.last_persist_error().is_some());

    store.fail_writes.store(false, Ordering::SeqCst);
    controller.mode = FormMode::Edit(id.clone());
    controller.submit("A", "C").unwrap();

    assert!(controller.last_persist_error().is_none());
    assert!(store.saved().unwrap().is_empty());
}

#[test]
fn test_reload_reproduces_collection() {
    let (mut controller, store) = controller();
    controller.submit("One", "1").unwrap();
    let two = created(controller.submit("Two", "2").unwrap());
    controller.begin_edit(&two);
    controller.submit("Two", "2b").unwrap();

    let reopened = PostController::open(store.clone());

    assert_eq!(reopened.posts(), controller.posts());
}

#[test]
fn test_write_failure_keeps_change_and_reports() {
    let (mut controller, store) = controller();
    store.fail_writes.store(true, Ordering::SeqCst);

    controller.submit("Unsaved", "post").unwrap();

    assert_eq!(controller.posts().len(), 1);
    assert!(matches!(
        controller.last_persist_error(),
        Some(StoreError::Io(_))
    ));

    store.fail_writes.store(false, Ordering::SeqCst);
    controller.submit("Saved", "post").unwrap();

    assert!(controller.last_persist_error().is_none());
    assert_eq!(store.saved().unwrap().len(), 2);
}
