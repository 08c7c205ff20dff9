use sea_orm::{
    sea_query::LikeExpr, ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    model::student::{DeletionFilter, Student, StudentSearchParams},
    util::identifier::BinaryId,
};

const LIKE_ESCAPE: char = '\\';

/// Builds a `LIKE` pattern matching `value` literally anywhere in the column.
fn substring_pattern(value: &str) -> LikeExpr {
    let mut escaped = String::with_capacity(value.len() + 2);
    escaped.push('%');
    for c in value.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped.push('%');

    LikeExpr::new(escaped).escape(LIKE_ESCAPE)
}

/// Repository for the `students` table.
///
/// Generic over the connection so the same queries run on a plain connection or
/// inside a transaction opened by the service layer.
pub struct StudentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StudentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    fn active_model(student: &Student) -> entity::student::ActiveModel {
        entity::student::ActiveModel {
            student_id: ActiveValue::Set(student.id.to_vec()),
            full_name: ActiveValue::Set(student.full_name.clone()),
            furigana: ActiveValue::Set(student.furigana.clone()),
            nickname: ActiveValue::Set(student.nickname.clone()),
            email: ActiveValue::Set(student.email.clone()),
            location: ActiveValue::Set(student.location.clone()),
            age: ActiveValue::Set(student.age),
            gender: ActiveValue::Set(student.gender.clone()),
            remarks: ActiveValue::Set(student.remarks.clone()),
            created_at: ActiveValue::Set(student.created_at),
            deleted_at: ActiveValue::Set(student.deleted_at),
            is_deleted: ActiveValue::Set(student.is_deleted()),
        }
    }

    /// Inserts a new student row.
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student
    /// - `Err(DbErr)` - Database error, including a unique violation on `email`
    pub async fn insert(&self, student: &Student) -> Result<Student, DbErr> {
        let entity = Self::active_model(student).insert(self.db).await?;

        Student::from_entity(entity)
    }

    pub async fn find_by_id(&self, id: &BinaryId) -> Result<Option<Student>, DbErr> {
        entity::prelude::Student::find_by_id(id.to_vec())
            .one(self.db)
            .await?
            .map(Student::from_entity)
            .transpose()
    }

    /// Checks whether another student already uses the email address.
    ///
    /// # Arguments
    /// - `email` - Address to look up
    /// - `exclude` - Student to ignore, used when a student keeps its own address
    pub async fn email_taken(&self, email: &str, exclude: Option<&BinaryId>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Student::find().filter(entity::student::Column::Email.eq(email));

        if let Some(id) = exclude {
            query = query.filter(entity::student::Column::StudentId.ne(id.to_vec()));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Overwrites every column of an existing student, deletion state included.
    ///
    /// # Returns
    /// - `Ok(Student)` - The stored student after the update
    /// - `Err(DbErr::RecordNotUpdated)` - No student with this id exists
    pub async fn update(&self, student: &Student) -> Result<Student, DbErr> {
        let entity = Self::active_model(student).update(self.db).await?;

        Student::from_entity(entity)
    }

    /// Permanently removes a student row.
    ///
    /// # Returns
    /// - `Ok(true)` - A row was deleted
    /// - `Ok(false)` - No student with this id existed
    pub async fn delete(&self, id: &BinaryId) -> Result<bool, DbErr> {
        let result = entity::prelude::Student::delete_by_id(id.to_vec())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Searches students by furigana substring and deletion state.
    ///
    /// Results are ordered newest first, ties broken by furigana.
    pub async fn search(&self, params: &StudentSearchParams) -> Result<Vec<Student>, DbErr> {
        let mut query = entity::prelude::Student::find();

        if let Some(furigana) = &params.furigana {
            query = query
                .filter(entity::student::Column::Furigana.like(substring_pattern(furigana)));
        }

        query = match params.deletion {
            DeletionFilter::ActiveOnly => {
                query.filter(entity::student::Column::IsDeleted.eq(false))
            }
            DeletionFilter::DeletedOnly => {
                query.filter(entity::student::Column::IsDeleted.eq(true))
            }
            DeletionFilter::IncludeDeleted => query,
        };

        query
            .order_by_desc(entity::student::Column::CreatedAt)
            .order_by_asc(entity::student::Column::Furigana)
            .all(self.db)
            .await?
            .into_iter()
            .map(Student::from_entity)
            .collect()
    }
}

