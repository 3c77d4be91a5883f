use super::*;

/// Tests removing a participant.
///
/// Expected: Ok with the removed entry, remaining order preserved
#[tokio::test]
async fn removes_participant() -> Result<(), ActivityError> {
    let store = ActivityStore::seeded();
    let repo = ActivityRepository::new(&store);

    let removed = repo
        .remove_participant("Chess Club", "daniel@mergington.edu")
        .await?;

    assert_eq!(removed, "daniel@mergington.edu");
    let chess = repo.get_by_name("Chess Club").await.unwrap();
    assert_eq!(chess.participants, vec!["michael@mergington.edu"]);

    Ok(())
}

/// Tests removing from an unknown activity.
///
/// Expected: Err(ActivityNotFound)
#[tokio::test]
async fn fails_for_unknown_activity() {
    let store = small_store();
    let repo = ActivityRepository::new(&store);

    let result = repo
        .remove_participant("Nonexistent Club", "michael@mergington.edu")
        .await;

    assert_eq!(result, Err(ActivityError::ActivityNotFound));
}

/// Tests removing an email that is not on the roster.
///
/// Expected: Err(ParticipantNotFound) and roster unchanged
#[tokio::test]
async fn fails_for_missing_participant() {
    let store = small_store();
    let repo = ActivityRepository::new(&store);

    let result = repo
        .remove_participant("Chess Club", "nobody@mergington.edu")
        .await;

    assert_eq!(result, Err(ActivityError::ParticipantNotFound));
    let chess = repo.get_by_name("Chess Club").await.unwrap();
    assert_eq!(chess.participants, vec!["michael@mergington.edu"]);
}

/// Tests removing twice.
///
/// Expected: first Ok, second Err(ParticipantNotFound)
#[tokio::test]
async fn second_removal_fails() -> Result<(), ActivityError> {
    let store = small_store();
    let repo = ActivityRepository::new(&store);

    repo.remove_participant("Chess Club", "michael@mergington.edu")
        .await?;
    let again = repo
        .remove_participant("Chess Club", "michael@mergington.edu")
        .await;

    assert_eq!(again, Err(ActivityError::ParticipantNotFound));

    Ok(())
}
