use super::*;

/// Tests that an update overwrites fields and replaces the course list.
///
/// Expected: Ok with new fields and only the submitted courses
#[tokio::test]
async fn replaces_fields_and_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service
        .register(params("taro@example.com", &["Java Course", "AWS Course"]))
        .await?;

    let mut request = params("taro@example.com", &["Design Course"]);
    request.fields.nickname = "Taro-kun".to_string();
    let updated = service.update(&registered.student.id, request).await?;

    assert_eq!(updated.student.nickname, "Taro-kun");
    assert_eq!(updated.student.created_at, registered.student.created_at);
    assert_eq!(course_names(&updated.courses), vec!["Design Course"]);

    Ok(())
}

/// Tests that an empty course list in replace mode removes all courses.
///
/// Expected: Ok with no courses
#[tokio::test]
async fn replace_with_empty_list_clears_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service
        .register(params("taro@example.com", &["Java Course"]))
        .await?;

    let updated = service
        .update(&registered.student.id, params("taro@example.com", &[]))
        .await?;

    assert!(updated.courses.is_empty());

    Ok(())
}

/// Tests append mode.
///
/// Verifies that existing courses are kept, names the student already has are
/// skipped and duplicates within the request are added once.
///
/// Expected: Ok with the union of old and new course names
#[tokio::test]
async fn appends_new_course_names_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service
        .register(params("taro@example.com", &["Java Course"]))
        .await?;
    let original_id = registered.courses[0].id;

    let mut request = params(
        "taro@example.com",
        &["Java Course", "AWS Course", "AWS Course"],
    );
    request.append_courses = true;
    let updated = service.update(&registered.student.id, request).await?;

    let mut names = course_names(&updated.courses);
    names.sort();
    assert_eq!(names, vec!["AWS Course", "Java Course"]);
    assert!(updated.courses.iter().any(|c| c.id == original_id));

    Ok(())
}

/// Tests soft deletion and restoration through the update flag.
///
/// Expected: Ok with deletion state following the flag
#[tokio::test]
async fn applies_deleted_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service.register(params("taro@example.com", &[])).await?;
    let id = registered.student.id;

    let mut request = params("taro@example.com", &[]);
    request.deleted = true;
    let deleted = service.update(&id, request).await?;
    assert!(deleted.student.is_deleted());
    assert!(deleted.student.deleted_at.is_some());

    let restored = service.update(&id, params("taro@example.com", &[])).await?;
    assert!(!restored.student.is_deleted());
    assert!(restored.student.deleted_at.is_none());

    Ok(())
}

/// Tests updating a student that does not exist.
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
        .update(
            &identifier::generate_new_identifier_bytes(),
            params("taro@example.com", &[]),
        )
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}

/// Tests a payload identifier that differs from the target student.
///
/// Expected: Err with INVALID_REQUEST
#[tokio::test]
async fn rejects_mismatched_payload_id() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service.register(params("taro@example.com", &[])).await?;

    let mut request = params("taro@example.com", &[]);
    request.student_id = Some(identifier::generate_new_identifier_bytes());
    let err = service
        .update(&registered.student.id, request)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidRequest);

    Ok(())
}

/// Tests taking another student's email address.
///
/// Verifies that the update is rejected and rolled back, courses included.
///
/// Expected: Err(Validation) with stored aggregate unchanged
#[tokio::test]
async fn rejects_email_of_other_student_and_rolls_back() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    service.register(params("hanako@example.com", &[])).await?;
    let registered = service
        .register(params("taro@example.com", &["Java Course"]))
        .await?;

    let err = service
        .update(
            &registered.student.id,
            params("hanako@example.com", &["AWS Course"]),
        )
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);

    let stored = service.find_by_id(&registered.student.id).await?;
    assert_eq!(stored.student.email, "taro@example.com");
    assert_eq!(course_names(&stored.courses), vec!["Java Course"]);

    Ok(())
}

/// Tests keeping the student's own email address.
///
/// Expected: Ok
#[tokio::test]
async fn allows_keeping_own_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service
        .register(params("taro@example.com", &[]))
        .await
        .unwrap();

    let result = service
        .update(&registered.student.id, params("taro@example.com", &[]))
        .await;

    assert!(result.is_ok());

    Ok(())
}

/// Tests that a replace-mode update failing on course insert changes nothing.
///
/// The old courses are deleted and the student row overwritten before the insert
/// fails, so both writes must be rolled back.
///
/// Expected: Err(DbErr) with the stored aggregate unchanged
#[tokio::test]
async fn replace_failure_keeps_student_and_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service
        .register(params("taro@example.com", &["Java Course", "AWS Course"]))
        .await?;
    reject_course_inserts(db).await?;

    let mut request = params("taro@example.com", &["Design Course"]);
    request.fields.nickname = "Taro-kun".to_string();
    request.deleted = true;
    let err = service
        .update(&registered.student.id, request)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InternalServerError);
    assert_eq!(service.find_by_id(&registered.student.id).await?, registered);

    Ok(())
}

/// Tests that an append-mode update failing on course insert changes nothing.
///
/// Expected: Err(DbErr) with the stored aggregate unchanged
#[tokio::test]
async fn append_failure_keeps_student_and_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service
        .register(params("taro@example.com", &["Java Course"]))
        .await?;
    reject_course_inserts(db).await?;

    let mut request = params("taro@example.com", &["AWS Course"]);
    request.fields.nickname = "Taro-kun".to_string();
    request.append_courses = true;
    let err = service
        .update(&registered.student.id, request)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InternalServerError);
    assert_eq!(service.find_by_id(&registered.student.id).await?, registered);

    Ok(())
}

/// Tests that storage rejects a negative age on update.
///
/// Expected: Err(Validation) on `student.age` with the stored age unchanged
#[tokio::test]
async fn reports_storage_age_check_on_update() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let registered = service.register(params("taro@example.com", &[])).await?;

    let mut request = params("taro@example.com", &[]);
    request.fields.age = -5;
    let err = service
        .update(&registered.student.id, request)
        .await
        .unwrap_err();

    assert_age_rejected(err);
    assert_eq!(service.find_by_id(&registered.student.id).await?.student.age, 21);

    Ok(())
}
