use super::*;

/// Tests that search hides soft-deleted students unless asked.
///
/// Expected: Ok with active matches only, then all matches
#[tokio::test]
async fn respects_deletion_filter() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let service = StudentService::new(db);
    let kept = service.register(params("taro@example.com", &[])).await?;
    let removed = service.register(params("jiro@example.com", &[])).await?;
    service.soft_delete(&removed.student.id).await?;

    let active = service
        .search(StudentSearchParams {
            furigana: Some("ヤマダ".to_string()),
            deletion: DeletionFilter::ActiveOnly,
        })
        .await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, kept.student.id);

    let all = service
        .search(StudentSearchParams {
            furigana: Some("ヤマダ".to_string()),
            deletion: DeletionFilter::IncludeDeleted,
        })
        .await?;
    assert_eq!(all.len(), 2);

    Ok(())
}
