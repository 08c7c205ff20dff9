use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorResponseDto, student::CourseDto},
    server::{
        error::AppError, model::course::Course, service::student::StudentService,
        state::AppState,
    },
};

/// Tag for grouping course endpoints in OpenAPI documentation
pub static COURSE_TAG: &str = "course";

/// List every course of every student.
///
/// Includes courses of soft-deleted students.
///
/// # Returns
/// - `200 OK` - All courses, newest first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "All courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_all_courses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = StudentService::new(&state.db);
    let courses = service.list_all_courses().await?;

    let dtos: Vec<CourseDto> = courses.into_iter().map(Course::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
