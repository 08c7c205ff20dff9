//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique names and emails in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Generates a fresh random 16-byte identifier in storage form.
pub fn new_binary_id() -> Vec<u8> {
    uuid::Uuid::new_v4().as_bytes().to_vec()
}

/// Creates a student with the given number of default courses.
///
/// # Arguments
/// - `db` - Database connection
/// - `course_count` - Number of courses to attach to the student
///
/// # Returns
/// - `Ok((student, courses))` - The student and its courses in insertion order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_student_with_courses(
    db: &DatabaseConnection,
    course_count: usize,
) -> Result<
    (
        entity::student::Model,
        Vec<entity::student_course::Model>,
    ),
    DbErr,
> {
    let student = crate::factory::student::create_student(db).await?;

    let mut courses = Vec::with_capacity(course_count);
    for _ in 0..course_count {
        courses.push(crate::factory::student_course::create_course(db, &student.student_id).await?);
    }

    Ok((student, courses))
}
