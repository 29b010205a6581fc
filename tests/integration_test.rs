use chrono::NaiveDate;
use listkeeper::lifecycle::{TodoConfig, TodoSystem};
use listkeeper::model::{TodoCreate, TodoUpdate};
use tempfile::TempDir;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
}

async fn start_system(dir: &TempDir) -> TodoSystem {
    TodoSystem::start(TodoConfig::new(dir.path()))
        .await
        .expect("system should start")
}

/// Concurrent resolves of one unseen name must create exactly one list
/// server, with every caller receiving a handle to it.
#[tokio::test]
async fn concurrent_resolves_create_exactly_one_list_server() {
    let dir = TempDir::new().unwrap();
    let system = start_system(&dir).await;

    let mut handles = Vec::new();
    for _ in 0..8 {
        let registry = system.registry.clone();
        handles.push(tokio::spawn(async move { registry.resolve("alice").await }));
    }

    let mut clients = Vec::new();
    for handle in handles {
        clients.push(handle.await.unwrap().expect("resolve should succeed"));
    }

    for pair in clients.windows(2) {
        assert!(pair[0].same_actor(&pair[1]), "resolves returned different actors");
    }
    assert_eq!(system.registry.len().await.unwrap(), 1);

    system.shutdown();
}

#[tokio::test]
async fn repeated_and_distinct_resolves() {
    let dir = TempDir::new().unwrap();
    let system = start_system(&dir).await;

    let first = system.registry.resolve("alice").await.unwrap();
    let second = system.registry.resolve("alice").await.unwrap();
    let other = system.registry.resolve("bob").await.unwrap();

    assert!(first.same_actor(&second));
    assert!(!first.same_actor(&other));
    assert_eq!(system.registry.len().await.unwrap(), 2);

    system.shutdown();
}

/// Adds across two dates get sequential ids and filter by date in insertion
/// order; deleting an entry empties its date.
#[tokio::test]
async fn adds_filter_by_date_with_sequential_ids_then_delete() {
    let dir = TempDir::new().unwrap();
    let system = start_system(&dir).await;
    let list = system.registry.resolve("family").await.unwrap();

    list.add(TodoCreate::new("Dentist", day(1))).await.unwrap();
    list.add(TodoCreate::new("Shopping", day(2))).await.unwrap();
    list.add(TodoCreate::new("Movies", day(1))).await.unwrap();

    let d1 = list.entries(day(1)).await.unwrap();
    let d1_view: Vec<(u64, &str)> = d1.iter().map(|e| (e.id, e.title.as_str())).collect();
    assert_eq!(d1_view, vec![(1, "Dentist"), (3, "Movies")]);

    let d2 = list.entries(day(2)).await.unwrap();
    let d2_view: Vec<(u64, &str)> = d2.iter().map(|e| (e.id, e.title.as_str())).collect();
    assert_eq!(d2_view, vec![(2, "Shopping")]);

    list.delete(2).await.unwrap();
    assert!(list.entries(day(2)).await.unwrap().is_empty());

    system.shutdown();
}

/// A read issued after a burst of casts from the same caller reflects every
/// one of them, in issue order.
#[tokio::test]
async fn read_after_casts_reflects_all_of_them_in_order() {
    let dir = TempDir::new().unwrap();
    let system = start_system(&dir).await;
    let list = system.registry.resolve("burst").await.unwrap();

    for n in 1..=20 {
        list.add(TodoCreate::new(format!("task {n}"), day(5)))
            .await
            .unwrap();
    }

    let entries = list.entries(day(5)).await.unwrap();
    let ids: Vec<u64> = entries.iter().map(|e| e.id).collect();
    assert_eq!(ids, (1..=20).collect::<Vec<u64>>());

    system.shutdown();
}

#[tokio::test]
async fn update_patches_an_entry() {
    let dir = TempDir::new().unwrap();
    let system = start_system(&dir).await;
    let list = system.registry.resolve("patchwork").await.unwrap();

    list.add(TodoCreate::new("Dentist", day(1))).await.unwrap();
    list.update(
        1,
        TodoUpdate {
            title: Some("Orthodontist".into()),
            date: Some(day(3)),
        },
    )
    .await
    .unwrap();

    assert!(list.entries(day(1)).await.unwrap().is_empty());
    let moved = list.entries(day(3)).await.unwrap();
    assert_eq!(moved.len(), 1);
    assert_eq!(moved[0].title, "Orthodontist");

    system.shutdown();
}

#[tokio::test]
async fn fresh_list_reads_empty() {
    let dir = TempDir::new().unwrap();
    let system = start_system(&dir).await;
    let list = system.registry.resolve("untouched").await.unwrap();

    assert!(list.entries(day(1)).await.unwrap().is_empty());

    system.shutdown();
}

#[tokio::test]
async fn lists_are_isolated_from_each_other() {
    let dir = TempDir::new().unwrap();
    let system = start_system(&dir).await;

    let work = system.registry.resolve("work").await.unwrap();
    let home = system.registry.resolve("home").await.unwrap();

    work.add(TodoCreate::new("Standup", day(1))).await.unwrap();
    home.add(TodoCreate::new("Laundry", day(1))).await.unwrap();

    let work_entries = work.entries(day(1)).await.unwrap();
    assert_eq!(work_entries.len(), 1);
    assert_eq!(work_entries[0].title, "Standup");
    // Ids count per list, not globally.
    assert_eq!(work_entries[0].id, 1);

    let home_entries = home.entries(day(1)).await.unwrap();
    assert_eq!(home_entries.len(), 1);
    assert_eq!(home_entries[0].title, "Laundry");
    assert_eq!(home_entries[0].id, 1);

    system.shutdown();
}

/// A second system over the same storage root hydrates the state the first
/// one persisted, and id assignment continues where it left off.
#[tokio::test]
async fn state_survives_a_system_restart() {
    let dir = TempDir::new().unwrap();

    {
        let system = start_system(&dir).await;
        let list = system.registry.resolve("persistent").await.unwrap();
        list.add(TodoCreate::new("Dentist", day(1))).await.unwrap();
        list.add(TodoCreate::new("Shopping", day(2))).await.unwrap();
        // The read queues behind both stores, so the files are on disk once
        // it returns.
        assert_eq!(list.entries(day(1)).await.unwrap().len(), 1);
        system.shutdown();
    }

    let system = start_system(&dir).await;
    let list = system.registry.resolve("persistent").await.unwrap();

    let d1 = list.entries(day(1)).await.unwrap();
    assert_eq!(d1.len(), 1);
    assert_eq!((d1[0].id, d1[0].title.as_str()), (1, "Dentist"));

    list.add(TodoCreate::new("Movies", day(1))).await.unwrap();
    let d1 = list.entries(day(1)).await.unwrap();
    let ids: Vec<u64> = d1.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 3], "id sequence continues across restarts");

    system.shutdown();
}
