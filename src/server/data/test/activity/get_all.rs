use super::*;

/// Tests listing the seeded store.
///
/// Verifies every seed activity is returned in seed order with its fields intact.
///
/// Expected: 9 activities, Chess Club first with its two seeded participants
#[tokio::test]
async fn returns_seed_in_order() {
    let store = ActivityStore::seeded();
    let repo = ActivityRepository::new(&store);

    let activities = repo.get_all().await;

    let names: Vec<_> = activities.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Chess Club",
            "Programming Class",
            "Gym Class",
            "Soccer Team",
            "Basketball Club",
            "Art Club",
            "Drama Club",
            "Debate Team",
            "Math Club",
        ]
    );

    let chess = &activities[0];
    assert_eq!(chess.description, "Learn strategies and compete in chess tournaments");
    assert_eq!(chess.schedule, "Fridays, 3:30 PM - 5:00 PM");
    assert_eq!(chess.max_participants, 12);
    assert_eq!(
        chess.participants,
        vec!["michael@mergington.edu", "daniel@mergington.edu"]
    );
}

/// Tests that listing returns a snapshot.
///
/// Verifies mutating the returned vector does not touch the store.
///
/// Expected: store still holds the original roster
#[tokio::test]
async fn returns_detached_snapshot() {
    let store = small_store();
    let repo = ActivityRepository::new(&store);

    let mut snapshot = repo.get_all().await;
    snapshot[0].participants.clear();

    let chess = repo.get_by_name("Chess Club").await.unwrap();
    assert_eq!(chess.participants, vec!["michael@mergington.edu"]);
}

/// Tests exact-match lookup by name.
///
/// Expected: Some for the exact name, None for a different case
#[tokio::test]
async fn get_by_name_is_case_sensitive() {
    let store = small_store();
    let repo = ActivityRepository::new(&store);

    assert!(repo.get_by_name("Chess Club").await.is_some());
    assert!(repo.get_by_name("chess club").await.is_none());
    assert!(repo.get_by_name("Chess Club ").await.is_none());
}

#[tokio::test]
async fn counts_activities() {
    let store = ActivityStore::seeded();
    let repo = ActivityRepository::new(&store);

    assert_eq!(repo.count().await, 9);
}

/// Tests that seeded stores are independent.
///
/// Expected: a signup in one store is not visible in another
#[tokio::test]
async fn seeded_stores_are_isolated() -> Result<(), ActivityError> {
    let first = ActivityStore::seeded();
    let second = ActivityStore::seeded();

    ActivityRepository::new(&first)
        .add_participant("Chess Club", "new@mergington.edu".to_string())
        .await?;

    let untouched = ActivityRepository::new(&second)
        .get_by_name("Chess Club")
        .await
        .unwrap();
    assert_eq!(untouched.participants.len(), 2);

    Ok(())
}
