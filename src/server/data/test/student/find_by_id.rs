use super::*;

/// Tests finding an existing student by identifier.
///
/// Expected: Ok(Some) with matching student
#[tokio::test]
async fn finds_existing_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::StudentFactory::new(db)
        .full_name("Suzuki Hanako")
        .build()
        .await?;
    let id = identifier::id_from_slice(&created.student_id).unwrap();

    let repo = StudentRepository::new(db);
    let found = repo.find_by_id(&id).await?.unwrap();

    assert_eq!(found.id, id);
    assert_eq!(found.full_name, "Suzuki Hanako");

    Ok(())
}

/// Tests that soft-deleted students are still found by identifier.
///
/// Expected: Ok(Some) with deletion state set
#[tokio::test]
async fn finds_soft_deleted_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::student::StudentFactory::new(db)
        .deleted(true)
        .build()
        .await?;
    let id = identifier::id_from_slice(&created.student_id).unwrap();

    let repo = StudentRepository::new(db);
    let found = repo.find_by_id(&id).await?.unwrap();

    assert!(found.is_deleted());

    Ok(())
}

/// Tests looking up an unknown identifier.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);
    let found = repo
        .find_by_id(&identifier::generate_new_identifier_bytes())
        .await?;

    assert!(found.is_none());

    Ok(())
}
