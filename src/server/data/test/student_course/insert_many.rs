use super::*;

/// Tests inserting several courses at once.
///
/// Expected: Ok with every course stored under the student
#[tokio::test]
async fn inserts_all_courses() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let student_id = student_id(db).await?;

    let repo = StudentCourseRepository::new(db);
    repo.insert_many(&[
        course(student_id, "Java Course"),
        course(student_id, "AWS Course"),
    ])
    .await?;

    assert_eq!(course_count(db, &student_id).await?, 2);

    Ok(())
}

/// Tests that an empty list performs no insert.
///
/// Expected: Ok with no rows
#[tokio::test]
async fn accepts_empty_list() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let student_id = student_id(db).await?;

    let repo = StudentCourseRepository::new(db);
    repo.insert_many(&[]).await?;

    assert_eq!(course_count(db, &student_id).await?, 0);

    Ok(())
}

/// Tests that courses cannot reference a missing student.
///
/// Expected: Err from the foreign key constraint
#[tokio::test]
async fn rejects_unknown_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentCourseRepository::new(db);
    let result = repo
        .insert_many(&[course(
            identifier::generate_new_identifier_bytes(),
            "Java Course",
        )])
        .await;

    assert!(result.is_err());

    Ok(())
}
