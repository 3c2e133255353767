use cadence_core::db::establish_connection;
use cadence_core::error::{CalcError, CoreError, ParseError};
use cadence_core::models::*;
use cadence_core::recurrence::Scheduler;
use cadence_core::repository::{SqliteRepository, TaskRepository};
use chrono::NaiveDate;
use tempfile::TempDir;

/// Helper function to create a test database
async fn setup_test_db() -> (SqliteRepository, TempDir) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let db_path = temp_dir.path().join("nested").join("test.db");

    let pool = establish_connection(&db_path.to_string_lossy())
        .await
        .expect("Failed to establish test database connection");

    let repository = SqliteRepository::new(pool, Scheduler::with_defaults());
    (repository, temp_dir)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn new_task(title: &str, date: Option<&str>, repeat: &str) -> NewTaskData {
    NewTaskData {
        title: title.to_string(),
        date: date.map(str::to_string),
        comment: format!("Test task: {}", title),
        repeat: repeat.to_string(),
    }
}

#[tokio::test]
async fn test_basic_task_crud_workflow() {
    let (repo, _temp_dir) = setup_test_db().await;

    let task = repo
        .add_task(new_task("Water plants", Some("20240120"), ""), today())
        .await
        .expect("Failed to add task");
    assert_eq!(task.date, "20240120");
    assert_eq!(task.title, "Water plants");
    assert!(task.id > 0);

    let found = repo.find_task_by_id(task.id).await.unwrap();
    assert_eq!(found, Some(task.clone()));

    let updated = repo
        .update_task(
            task.id,
            UpdateTaskData {
                title: "Water all plants".to_string(),
                date: Some("20240125".to_string()),
                comment: String::new(),
                repeat: "d 2".to_string(),
            },
            today(),
        )
        .await
        .expect("Failed to update task");
    assert_eq!(updated.title, "Water all plants");
    assert_eq!(updated.date, "20240125");
    assert_eq!(updated.repeat, "d 2");

    repo.delete_task(task.id).await.expect("Failed to delete task");
    assert!(repo.find_task_by_id(task.id).await.unwrap().is_none());
    assert!(matches!(repo.delete_task(task.id).await, Err(CoreError::NotFound(_))));
}

#[tokio::test]
async fn test_update_without_date_keeps_overdue_date() {
    let (repo, _temp_dir) = setup_test_db().await;
    let earlier = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let one_off = repo.add_task(new_task("Once", Some("20240105"), ""), earlier).await.unwrap();
    let weekly = repo.add_task(new_task("Weekly", Some("20240105"), "w 5"), earlier).await.unwrap();

    for task in [&one_off, &weekly] {
        let updated = repo
            .update_task(
                task.id,
                UpdateTaskData {
                    title: task.title.clone(),
                    date: None,
                    comment: "moved nothing".to_string(),
                    repeat: task.repeat.clone(),
                },
                today(),
            )
            .await
            .unwrap();
        assert_eq!(updated.date, "20240105");
        assert_eq!(updated.comment, "moved nothing");
    }

    // An explicit past date is still resolved against today.
    let explicit = repo
        .update_task(
            weekly.id,
            UpdateTaskData {
                title: "Weekly".to_string(),
                date: Some("20240105".to_string()),
                comment: String::new(),
                repeat: "w 5".to_string(),
            },
            today(),
        )
        .await
        .unwrap();
    assert_eq!(explicit.date, "20240119");

    let invalid = repo
        .update_task(
            one_off.id,
            UpdateTaskData { title: " ".to_string(), ..Default::default() },
            today(),
        )
        .await;
    assert!(matches!(invalid, Err(CoreError::InvalidInput(_))));
}

#[tokio::test]
async fn test_add_task_date_rules() {
    let (repo, _temp_dir) = setup_test_db().await;

    let no_date = repo.add_task(new_task("No date", None, ""), today()).await.unwrap();
    assert_eq!(no_date.date, "20240115");

    let empty_date = repo.add_task(new_task("Empty date", Some(""), ""), today()).await.unwrap();
    assert_eq!(empty_date.date, "20240115");

    let past_one_off = repo
        .add_task(new_task("Past one-off", Some("20231201"), ""), today())
        .await
        .unwrap();
    assert_eq!(past_one_off.date, "20240115");

    let past_recurring = repo
        .add_task(new_task("Past weekly", Some("20231201"), "w 1"), today())
        .await
        .unwrap();
    // 2024-01-15 is a Monday and not before today.
    assert_eq!(past_recurring.date, "20240115");

    let future_recurring = repo
        .add_task(new_task("Future monthly", Some("20240301"), "m -1"), today())
        .await
        .unwrap();
    assert_eq!(future_recurring.date, "20240301");
}

#[tokio::test]
async fn test_add_task_rejects_bad_input() {
    let (repo, _temp_dir) = setup_test_db().await;

    let blank_title = repo.add_task(new_task("   ", None, ""), today()).await;
    assert!(matches!(blank_title, Err(CoreError::InvalidInput(_))));

    let bad_date = repo.add_task(new_task("Bad date", Some("15.01.2024"), ""), today()).await;
    assert!(matches!(bad_date, Err(CoreError::InvalidDate(_))));

    let bad_rule = repo.add_task(new_task("Bad rule", None, "k 1"), today()).await;
    assert!(matches!(bad_rule, Err(CoreError::Parse(ParseError::UnknownKind(_)))));

    let out_of_range = repo.add_task(new_task("Out of range", None, "d 500"), today()).await;
    assert!(matches!(out_of_range, Err(CoreError::Validation(_))));

    let unsatisfiable = repo
        .add_task(new_task("Never", Some("20230101"), "m 31 2"), today())
        .await;
    assert!(matches!(unsatisfiable, Err(CoreError::Calc(CalcError::NoOccurrence { .. }))));

    assert!(repo.find_tasks(&TaskFilter::default()).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_complete_one_off_task_removes_it() {
    let (repo, _temp_dir) = setup_test_db().await;
    let task = repo.add_task(new_task("Once", Some("20240120"), ""), today()).await.unwrap();

    match repo.complete_task(task.id, today()).await.unwrap() {
        CompletionResult::Removed(removed) => assert_eq!(removed.id, task.id),
        other => panic!("Expected removal, got {:?}", other),
    }
    assert!(repo.find_task_by_id(task.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_complete_recurring_task_reschedules_it() {
    let (repo, _temp_dir) = setup_test_db().await;
    let task = repo
        .add_task(new_task("Every third day", Some("20240120"), "d 3"), today())
        .await
        .unwrap();

    let (first, previous) = match repo.complete_task(task.id, today()).await.unwrap() {
        CompletionResult::Rescheduled { task, previous_date } => (task, previous_date),
        other => panic!("Expected reschedule, got {:?}", other),
    };
    assert_eq!(previous, "20240120");
    assert_eq!(first.date, "20240123");

    let second = match repo.complete_task(task.id, today()).await.unwrap() {
        CompletionResult::Rescheduled { task, .. } => task,
        other => panic!("Expected reschedule, got {:?}", other),
    };
    assert_eq!(second.date, "20240126");
    assert_eq!(repo.find_task_by_id(task.id).await.unwrap(), Some(second));
}

#[tokio::test]
async fn test_complete_overdue_recurring_task_catches_up() {
    let (repo, _temp_dir) = setup_test_db().await;
    let task = repo
        .add_task(new_task("Yearly", Some("20240301"), "y"), today())
        .await
        .unwrap();

    let much_later = NaiveDate::from_ymd_opt(2027, 6, 1).unwrap();
    match repo.complete_task(task.id, much_later).await.unwrap() {
        CompletionResult::Rescheduled { task, .. } => assert_eq!(task.date, "20280301"),
        other => panic!("Expected reschedule, got {:?}", other),
    }
}

#[tokio::test]
async fn test_complete_missing_task() {
    let (repo, _temp_dir) = setup_test_db().await;
    assert!(matches!(
        repo.complete_task(42, today()).await,
        Err(CoreError::NotFound(_))
    ));
    assert!(matches!(
        repo.update_task(42, UpdateTaskData { title: "x".to_string(), ..Default::default() }, today()).await,
        Err(CoreError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_task_listing_and_search() {
    let (repo, _temp_dir) = setup_test_db().await;

    repo.add_task(new_task("Dentist", Some("20240301"), ""), today()).await.unwrap();
    repo.add_task(new_task("Pay rent", Some("20240201"), "m 1"), today()).await.unwrap();
    repo.add_task(new_task("Rent car", Some("20240120"), ""), today()).await.unwrap();
    repo.add_task(new_task("100% done", Some("20240201"), ""), today()).await.unwrap();

    let all = repo.find_tasks(&TaskFilter::default()).await.unwrap();
    let dates: Vec<&str> = all.iter().map(|t| t.date.as_str()).collect();
    assert_eq!(dates, vec!["20240120", "20240201", "20240201", "20240301"]);

    let limited = repo
        .find_tasks(&TaskFilter { search: None, limit: 2 })
        .await
        .unwrap();
    assert_eq!(limited.len(), 2);

    let by_text = repo
        .find_tasks(&TaskFilter { search: TaskSearch::from_input("rent"), ..Default::default() })
        .await
        .unwrap();
    let titles: Vec<&str> = by_text.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles, vec!["Rent car", "Pay rent"]);

    let by_date = repo
        .find_tasks(&TaskFilter { search: TaskSearch::from_input("01.02.2024"), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(by_date.len(), 2);

    let by_percent = repo
        .find_tasks(&TaskFilter { search: TaskSearch::from_input("0%"), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(by_percent.len(), 1);
    assert_eq!(by_percent[0].title, "100% done");

    // Comments are searched too.
    let by_comment = repo
        .find_tasks(&TaskFilter { search: TaskSearch::from_input("Test task: Dent"), ..Default::default() })
        .await
        .unwrap();
    assert_eq!(by_comment.len(), 1);
}
