use super::*;

/// Tests overwriting a student's fields.
///
/// Expected: Ok with new values stored and creation time unchanged
#[tokio::test]
async fn updates_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.insert(&new_student("taro@example.com")).await?;

    let mut changed = fields("hanako@example.com");
    changed.full_name = "Suzuki Hanako".to_string();
    let updated = repo.update(&student.clone().with_fields(changed)).await?;

    assert_eq!(updated.full_name, "Suzuki Hanako");
    assert_eq!(updated.email, "hanako@example.com");
    assert_eq!(updated.created_at, student.created_at);

    Ok(())
}

/// Tests persisting a soft delete and a restore.
///
/// Verifies that the deletion flag and timestamp are written together.
///
/// Expected: Ok with flag and timestamp consistent after each transition
#[tokio::test]
async fn persists_deletion_state() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let student = repo.insert(&new_student("taro@example.com")).await?;

    let deleted = repo.update(&student.soft_deleted(Utc::now())).await?;
    let row = entity::prelude::Student::find_by_id(deleted.id.to_vec())
        .one(db)
        .await?
        .unwrap();
    assert!(row.is_deleted);
    assert!(row.deleted_at.is_some());

    let restored = repo.update(&deleted.restored()).await?;
    let row = entity::prelude::Student::find_by_id(restored.id.to_vec())
        .one(db)
        .await?
        .unwrap();
    assert!(!row.is_deleted);
    assert!(row.deleted_at.is_none());

    Ok(())
}

/// Tests updating a student that does not exist.
///
/// Expected: Err(RecordNotUpdated)
#[tokio::test]
async fn fails_for_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let result = repo.update(&new_student("taro@example.com")).await;

    assert!(matches!(result, Err(DbErr::RecordNotUpdated)));

    Ok(())
}
