use super::*;

/// Tests permanently deleting a student with courses.
///
/// Expected: Ok with student and courses gone
#[tokio::test]
async fn removes_student_and_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let removed = service
        .register(params("taro@example.com", &["Java Course", "AWS Course"]))
        .await?;
    service
        .register(params("hanako@example.com", &["Java Course"]))
        .await?;

    service.force_delete(&removed.student.id).await?;

    assert_eq!(
        service.find_by_id(&removed.student.id).await.unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(entity::prelude::StudentCourse::find().count(db).await?, 1);

    Ok(())
}

/// Tests permanently deleting a soft-deleted student.
///
/// Expected: Ok
#[tokio::test]
async fn removes_soft_deleted_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service.register(params("taro@example.com", &[])).await?;
    service.soft_delete(&registered.student.id).await?;

    service.force_delete(&registered.student.id).await?;

    assert_eq!(entity::prelude::Student::find().count(db).await?, 0);

    Ok(())
}

/// Tests permanently deleting an unknown student.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let err = service
        .force_delete(&identifier::generate_new_identifier_bytes())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}
