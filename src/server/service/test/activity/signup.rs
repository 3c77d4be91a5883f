use super::*;

/// Tests signing up with a mixed-case email.
///
/// Verifies the email is normalized before being stored and echoed back.
///
/// Expected: Ok with "newstudent@mergington.edu" appended to Chess Club
#[tokio::test]
async fn normalizes_and_appends() -> Result<(), AppError> {
    let store = ActivityStore::seeded();
    let service = ActivityService::new(&store);

    let signup = service
        .signup("Chess Club", "NewStudent@Mergington.edu")
        .await?;

    assert_eq!(
        signup,
        Signup {
            activity_name: "Chess Club".to_string(),
            email: "newstudent@mergington.edu".to_string(),
        }
    );
    assert_eq!(
        participants(&service, "Chess Club").await,
        vec![
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "newstudent@mergington.edu"
        ]
    );

    Ok(())
}

/// Tests signing up a seeded participant again.
///
/// Expected: Err(AlreadySignedUp) and roster unchanged
#[tokio::test]
async fn rejects_existing_participant() {
    let store = ActivityStore::seeded();
    let service = ActivityService::new(&store);

    let result = service.signup("Chess Club", "michael@mergington.edu").await;

    assert!(matches!(
        result,
        Err(AppError::ActivityErr(ActivityError::AlreadySignedUp))
    ));
    assert_eq!(participants(&service, "Chess Club").await.len(), 2);
}

/// Tests that duplicates are detected after normalization.
///
/// Expected: Err(AlreadySignedUp) for a padded upper-case variant
#[tokio::test]
async fn rejects_duplicate_in_other_case() -> Result<(), AppError> {
    let store = ActivityStore::seeded();
    let service = ActivityService::new(&store);

    service.signup("Chess Club", "dup@mergington.edu").await?;
    let second = service.signup("Chess Club", "  DUP@Mergington.EDU ").await;

    assert!(matches!(
        second,
        Err(AppError::ActivityErr(ActivityError::AlreadySignedUp))
    ));
    assert_eq!(participants(&service, "Chess Club").await.len(), 3);

    Ok(())
}

/// Tests signing up with a whitespace-only email.
///
/// Expected: Ok storing "", then Err(AlreadySignedUp) for an empty email
#[tokio::test]
async fn blank_email_normalizes_to_empty() -> Result<(), AppError> {
    let store = ActivityStore::seeded();
    let service = ActivityService::new(&store);

    let signup = service.signup("Chess Club", " \t ").await?;
    assert_eq!(signup.email, "");

    let second = service.signup("Chess Club", "").await;

    assert!(matches!(
        second,
        Err(AppError::ActivityErr(ActivityError::AlreadySignedUp))
    ));
    assert_eq!(
        participants(&service, "Chess Club").await.last().map(String::as_str),
        Some("")
    );

    Ok(())
}

/// Tests signing up for an activity that does not exist.
///
/// Expected: Err(ActivityNotFound) and collection unchanged
#[tokio::test]
async fn rejects_unknown_activity() {
    let store = ActivityStore::seeded();
    let service = ActivityService::new(&store);
    let before = service.list().await;

    let result = service.signup("Nonexistent Club", "a@b.edu").await;

    assert!(matches!(
        result,
        Err(AppError::ActivityErr(ActivityError::ActivityNotFound))
    ));
    assert_eq!(service.list().await, before);
}

/// Tests that activity names are not normalized.
///
/// Expected: Err(ActivityNotFound) for a lower-cased name
#[tokio::test]
async fn activity_name_is_case_sensitive() {
    let store = ActivityStore::seeded();
    let service = ActivityService::new(&store);

    let result = service.signup("chess club", "a@mergington.edu").await;

    assert!(matches!(
        result,
        Err(AppError::ActivityErr(ActivityError::ActivityNotFound))
    ));
}

/// Tests signups beyond the advisory capacity.
///
/// Expected: Ok for every signup even past max_participants
#[tokio::test]
async fn capacity_is_not_enforced() -> Result<(), AppError> {
    let store = ActivityStore::seeded();
    let service = ActivityService::new(&store);

    // Chess Club seats 12 and starts with 2.
    for i in 0..15 {
        service
            .signup("Chess Club", &format!("student{}@mergington.edu", i))
            .await?;
    }

    assert_eq!(participants(&service, "Chess Club").await.len(), 17);

    Ok(())
}

/// Tests that a signup only touches the targeted activity.
///
/// Expected: other rosters unchanged
#[tokio::test]
async fn leaves_other_activities_untouched() -> Result<(), AppError> {
    let store = ActivityStore::seeded();
    let service = ActivityService::new(&store);
    let before = service.list().await;

    service.signup("Art Club", &normalize_email(" New@M.edu")).await?;

    let after = service.list().await;
    for (old, new) in before.iter().zip(after.iter()) {
        if old.name != "Art Club" {
            assert_eq!(old, new);
        }
    }

    Ok(())
}
