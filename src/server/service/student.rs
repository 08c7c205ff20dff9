use std::collections::HashSet;

use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, RuntimeErr, SqlErr, TransactionTrait};

use crate::server::{
    data::{student::StudentRepository, student_course::StudentCourseRepository},
    error::{validation::FieldError, AppError},
    model::{
        course::{Course, CourseParams},
        student::{RegistrationParams, Student, StudentAggregate, StudentSearchParams},
    },
    util::identifier::{self, BinaryId},
};

const EMAIL_TAKEN: &str = "is already registered to another student";

fn email_taken() -> AppError {
    AppError::Validation(vec![FieldError::new("student.email", EMAIL_TAKEN)])
}

fn student_not_found(id: &BinaryId) -> AppError {
    AppError::NotFound(format!("Student {} not found", identifier::encode_id(id)))
}

/// Returns true when the database rejected a row through a `CHECK` constraint.
///
/// The only `CHECK` on the student tables is `age >= 0`.
fn is_check_violation(err: &DbErr) -> bool {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(e)) | DbErr::Query(RuntimeErr::SqlxError(e)) => e
            .as_database_error()
            .is_some_and(|db_err| db_err.is_check_violation()),
        _ => false,
    }
}

/// Maps storage constraint violations on writes to client-facing errors.
fn map_write_err(err: DbErr) -> AppError {
    if is_check_violation(&err) {
        return AppError::Validation(vec![FieldError::new(
            "student.age",
            "must be greater than or equal to 0",
        )]);
    }

    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => email_taken(),
        Some(SqlErr::ForeignKeyConstraintViolation(detail)) => {
            AppError::NotFound(format!("Referenced student does not exist: {}", detail))
        }
        _ => AppError::DbErr(err),
    }
}

/// Drops courses whose name already appeared earlier in the list.
fn dedupe_by_name(courses: Vec<CourseParams>) -> Vec<CourseParams> {
    let mut seen = HashSet::new();

    courses
        .into_iter()
        .filter(|course| seen.insert(course.course_name.clone()))
        .collect()
}

/// Operations on the student aggregate: a student and its course enrollments.
///
/// Every write touching more than one row runs in a single transaction. Returning
/// early with `?` drops the transaction, which rolls it back.
pub struct StudentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StudentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new student with its initial courses.
    ///
    /// The requested deletion flag and any identifier in the payload are ignored;
    /// a new student is always active and gets a fresh identifier.
    ///
    /// # Returns
    /// - `Ok(StudentAggregate)` - The stored student and courses
    /// - `Err(AppError::Validation)` - The email address is already registered
    /// - `Err(AppError::DbErr)` - Database error; nothing was written
    pub async fn register(&self, params: RegistrationParams) -> Result<StudentAggregate, AppError> {
        let now = Utc::now();
        let student = Student::register(
            identifier::generate_new_identifier_bytes(),
            params.fields,
            now,
        );
        let courses: Vec<Course> = params
            .courses
            .into_iter()
            .map(|course| Course::enroll(student.id, course, now))
            .collect();

        let txn = self.db.begin().await?;
        let student_repo = StudentRepository::new(&txn);
        let course_repo = StudentCourseRepository::new(&txn);

        if student_repo.email_taken(&student.email, None).await? {
            return Err(email_taken());
        }

        let student = student_repo.insert(&student).await.map_err(map_write_err)?;
        course_repo
            .insert_many(&courses)
            .await
            .map_err(map_write_err)?;
        let courses = course_repo.list_by_student(&student.id).await?;

        txn.commit().await?;

        tracing::info!(
            student_id = %identifier::encode_id(&student.id),
            courses = courses.len(),
            "Registered student"
        );

        Ok(StudentAggregate { student, courses })
    }

    /// Gets a student with its courses, regardless of deletion state.
    pub async fn find_by_id(&self, id: &BinaryId) -> Result<StudentAggregate, AppError> {
        let student = StudentRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| student_not_found(id))?;
        let courses = StudentCourseRepository::new(self.db)
            .list_by_student(id)
            .await?;

        Ok(StudentAggregate { student, courses })
    }

    /// Searches students by furigana and deletion state, newest first.
    pub async fn search(&self, params: StudentSearchParams) -> Result<Vec<Student>, AppError> {
        Ok(StudentRepository::new(self.db).search(&params).await?)
    }

    /// Updates a student and its courses in one transaction.
    ///
    /// Every mutable field is overwritten. Courses are replaced by the submitted
    /// list, or with `append_courses` the submitted courses are added unless the
    /// student already has a course of that name. The `deleted` flag moves the
    /// student to the requested deletion state.
    ///
    /// # Returns
    /// - `Ok(StudentAggregate)` - The updated student and its full course list
    /// - `Err(AppError::BadRequest)` - The payload names a different student
    /// - `Err(AppError::NotFound)` - No student with this identifier exists
    /// - `Err(AppError::Validation)` - The email address belongs to another student
    pub async fn update(
        &self,
        id: &BinaryId,
        params: RegistrationParams,
    ) -> Result<StudentAggregate, AppError> {
        if let Some(body_id) = params.student_id {
            if &body_id != id {
                return Err(AppError::BadRequest(format!(
                    "Student identifier in body ({}) does not match the path ({})",
                    identifier::encode_id(&body_id),
                    identifier::encode_id(id)
                )));
            }
        }

        let now = Utc::now();
        let txn = self.db.begin().await?;
        let student_repo = StudentRepository::new(&txn);
        let course_repo = StudentCourseRepository::new(&txn);

        let existing = student_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| student_not_found(id))?;

        if student_repo
            .email_taken(&params.fields.email, Some(id))
            .await?
        {
            return Err(email_taken());
        }

        let was_deleted = existing.is_deleted();
        let updated = existing
            .with_fields(params.fields)
            .with_deletion(params.deleted, now);

        let student = student_repo.update(&updated).await.map_err(|err| match err {
            DbErr::RecordNotUpdated => student_not_found(id),
            err => map_write_err(err),
        })?;

        if params.append_courses {
            let mut added = 0;
            for course in dedupe_by_name(params.courses) {
                let course = Course::enroll(*id, course, now);
                if course_repo
                    .insert_if_not_exists(&course)
                    .await
                    .map_err(map_write_err)?
                {
                    added += 1;
                }
            }
            tracing::debug!(added, "Appended courses");
        } else {
            let courses: Vec<Course> = params
                .courses
                .into_iter()
                .map(|course| Course::enroll(*id, course, now))
                .collect();
            course_repo.delete_by_student(id).await?;
            course_repo
                .insert_many(&courses)
                .await
                .map_err(map_write_err)?;
        }

        let courses = course_repo.list_by_student(id).await?;

        txn.commit().await?;

        let student_id = identifier::encode_id(id);
        match (was_deleted, student.is_deleted()) {
            (false, true) => tracing::info!(%student_id, "Soft-deleted student on update"),
            (true, false) => tracing::info!(%student_id, "Restored student on update"),
            _ => {}
        }
        tracing::info!(%student_id, courses = courses.len(), "Updated student");

        Ok(StudentAggregate { student, courses })
    }

    /// Lists a student's courses in enrollment order.
    ///
    /// # Returns
    /// - `Ok(Vec<Course>)` - Courses, possibly empty
    /// - `Err(AppError::NotFound)` - No student with this identifier exists
    pub async fn list_courses_for_student(&self, id: &BinaryId) -> Result<Vec<Course>, AppError> {
        if StudentRepository::new(self.db).find_by_id(id).await?.is_none() {
            return Err(student_not_found(id));
        }

        Ok(StudentCourseRepository::new(self.db)
            .list_by_student(id)
            .await?)
    }

    /// Soft-deletes a student.
    ///
    /// Deleting an already deleted student succeeds and keeps the original
    /// deletion timestamp.
    pub async fn soft_delete(&self, id: &BinaryId) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);
        let student = repo.find_by_id(id).await?.ok_or_else(|| student_not_found(id))?;

        if student.is_deleted() {
            return Ok(student);
        }

        let student = repo
            .update(&student.soft_deleted(Utc::now()))
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => student_not_found(id),
                err => AppError::DbErr(err),
            })?;

        tracing::info!(student_id = %identifier::encode_id(id), "Soft-deleted student");

        Ok(student)
    }

    /// Restores a soft-deleted student. Restoring an active student is a no-op.
    pub async fn restore(&self, id: &BinaryId) -> Result<Student, AppError> {
        let repo = StudentRepository::new(self.db);
        let student = repo.find_by_id(id).await?.ok_or_else(|| student_not_found(id))?;

        if !student.is_deleted() {
            return Ok(student);
        }

        let student = repo
            .update(&student.restored())
            .await
            .map_err(|err| match err {
                DbErr::RecordNotUpdated => student_not_found(id),
                err => AppError::DbErr(err),
            })?;

        tracing::info!(student_id = %identifier::encode_id(id), "Restored student");

        Ok(student)
    }

    /// Permanently removes a student and all of its courses.
    ///
    /// # Returns
    /// - `Ok(())` - Student and courses removed
    /// - `Err(AppError::NotFound)` - No student with this identifier exists
    pub async fn force_delete(&self, id: &BinaryId) -> Result<(), AppError> {
        let txn = self.db.begin().await?;
        let student_repo = StudentRepository::new(&txn);
        let course_repo = StudentCourseRepository::new(&txn);

        if student_repo.find_by_id(id).await?.is_none() {
            return Err(student_not_found(id));
        }

        let removed_courses = course_repo.delete_by_student(id).await?;
        student_repo.delete(id).await?;

        txn.commit().await?;

        tracing::info!(
            student_id = %identifier::encode_id(id),
            removed_courses,
            "Permanently deleted student"
        );

        Ok(())
    }

    /// Lists every course of every student, newest first.
    pub async fn list_all_courses(&self) -> Result<Vec<Course>, AppError> {
        Ok(StudentCourseRepository::new(self.db).list_all().await?)
    }
}
