use super::*;

/// Tests listing courses of one student.
///
/// Expected: Ok with only that student's courses
#[tokio::test]
async fn lists_courses_for_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let taro = service
        .register(params("taro@example.com", &["Java Course", "AWS Course"]))
        .await?;
    service
        .register(params("hanako@example.com", &["Design Course"]))
        .await?;

    let courses = service.list_courses_for_student(&taro.student.id).await?;

    assert_eq!(course_names(&courses), vec!["AWS Course", "Java Course"]);

    Ok(())
}

/// Tests listing courses of an unknown student.
///
/// Expected: Err(NotFound)
#[tokio::test]
async fn returns_not_found_for_unknown_student() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let err = service
        .list_courses_for_student(&identifier::generate_new_identifier_bytes())
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);

    Ok(())
}

/// Tests listing courses across all students.
///
/// Expected: Ok with every stored course
#[tokio::test]
async fn lists_all_courses() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    service
        .register(params("taro@example.com", &["Java Course"]))
        .await?;
    service
        .register(params("hanako@example.com", &["Design Course"]))
        .await?;

    assert_eq!(service.list_all_courses().await?.len(), 2);

    Ok(())
}
