use super::*;

async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let now = Utc::now();

    factory::student::StudentFactory::new(db)
        .furigana("ヤマダタロウ")
        .created_at(now - Duration::hours(2))
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .furigana("ヤマモトハナコ")
        .created_at(now - Duration::hours(1))
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .furigana("ヤマダジロウ")
        .created_at(now)
        .deleted(true)
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .furigana("スズキイチロウ")
        .created_at(now - Duration::hours(3))
        .build()
        .await?;

    Ok(())
}

fn furigana(students: &[Student]) -> Vec<&str> {
    students.iter().map(|s| s.furigana.as_str()).collect()
}

/// Tests that search without filters returns active students newest first.
///
/// Expected: Ok with soft-deleted students excluded
#[tokio::test]
async fn returns_active_students_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo.search(&StudentSearchParams::default()).await?;

    assert_eq!(
        furigana(&result),
        vec!["ヤマモトハナコ", "ヤマダタロウ", "スズキイチロウ"]
    );

    Ok(())
}

/// Tests filtering by a furigana substring.
///
/// Expected: Ok with only matching active students
#[tokio::test]
async fn filters_by_furigana_substring() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .search(&StudentSearchParams {
            furigana: Some("ヤマダ".to_string()),
            deletion: DeletionFilter::ActiveOnly,
        })
        .await?;

    assert_eq!(furigana(&result), vec!["ヤマダタロウ"]);

    Ok(())
}

/// Tests including soft-deleted students.
///
/// Expected: Ok with active and deleted matches
#[tokio::test]
async fn includes_deleted_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .search(&StudentSearchParams {
            furigana: Some("ヤマダ".to_string()),
            deletion: DeletionFilter::IncludeDeleted,
        })
        .await?;

    assert_eq!(furigana(&result), vec!["ヤマダジロウ", "ヤマダタロウ"]);

    Ok(())
}

/// Tests returning only soft-deleted students.
///
/// Expected: Ok with deleted students only
#[tokio::test]
async fn returns_deleted_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = StudentRepository::new(db);
    let result = repo
        .search(&StudentSearchParams {
            furigana: None,
            deletion: DeletionFilter::DeletedOnly,
        })
        .await?;

    assert_eq!(furigana(&result), vec!["ヤマダジロウ"]);
    assert!(result.iter().all(Student::is_deleted));

    Ok(())
}

/// Tests searching an empty table.
///
/// Expected: Ok with empty list
#[tokio::test]
async fn returns_empty_when_no_students() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StudentRepository::new(db);

    assert!(repo.search(&StudentSearchParams::default()).await?.is_empty());

    Ok(())
}

/// Tests that `%` and `_` in the search text match only themselves.
///
/// Expected: Ok with only students whose furigana contains the literal characters
#[tokio::test]
async fn treats_like_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_student_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;
    factory::student::StudentFactory::new(db)
        .furigana("タナカ_100%")
        .created_at(Utc::now() - Duration::hours(4))
        .build()
        .await?;
    factory::student::StudentFactory::new(db)
        .furigana(r"サトウ\ケン")
        .created_at(Utc::now() - Duration::hours(5))
        .build()
        .await?;

    let repo = StudentRepository::new(db);
    let search = |text: &str| StudentSearchParams {
        furigana: Some(text.to_string()),
        deletion: DeletionFilter::ActiveOnly,
    };

    assert_eq!(furigana(&repo.search(&search("%")).await?), vec!["タナカ_100%"]);
    assert_eq!(furigana(&repo.search(&search("_")).await?), vec!["タナカ_100%"]);
    assert_eq!(furigana(&repo.search(&search("_1")).await?), vec!["タナカ_100%"]);
    assert_eq!(furigana(&repo.search(&search(r"\")).await?), vec![r"サトウ\ケン"]);
    assert!(repo.search(&search("ヤマ_")).await?.is_empty());

    Ok(())
}
