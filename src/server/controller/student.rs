use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorResponseDto,
        student::{
            CourseDto, RegistrationRequestDto, StudentDetailDto, StudentDto,
            StudentSearchQueryDto,
        },
    },
    server::{
        error::AppError,
        middleware::body::InspectedJson,
        model::{course::Course, student::StudentSearchParams},
        service::{student::StudentService, validation},
        state::AppState,
        util::identifier::{self, BinaryId},
    },
};

/// Tag for grouping student endpoints in OpenAPI documentation
pub static STUDENT_TAG: &str = "student";

fn parse_student_id(id: &str) -> Result<BinaryId, AppError> {
    Ok(identifier::decode_to_bytes(Some(id))?)
}

/// Register a new student.
///
/// Validates the student and its initial courses, assigns a fresh identifier and
/// stores everything in one transaction. The `deleted` flag is ignored.
///
/// # Access Control
/// - `Write` - Requires the API token when one is configured
///
/// # Returns
/// - `200 OK` - The registered student with its courses
/// - `400 Bad Request` - Empty body, malformed JSON or failed validation
/// - `401 Unauthorized` / `403 Forbidden` - Missing or wrong API token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = RegistrationRequestDto,
    responses(
        (status = 200, description = "Successfully registered student", body = StudentDetailDto),
        (status = 400, description = "Invalid request body", body = ErrorResponseDto),
        (status = 401, description = "Missing API token", body = ErrorResponseDto),
        (status = 403, description = "Wrong API token", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn register_student(
    State(state): State<AppState>,
    InspectedJson(payload): InspectedJson<RegistrationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let params = validation::validate_into_params(payload)?;

    let service = StudentService::new(&state.db);
    let aggregate = service.register(params).await?;

    Ok((StatusCode::OK, Json(aggregate.into_dto())))
}

/// Search students.
///
/// Filters by a furigana substring. Soft-deleted students are excluded unless
/// `includeDeleted` or `deletedOnly` is set; `deletedOnly` wins when both are.
///
/// # Returns
/// - `200 OK` - Matching students, newest first
/// - `400 Bad Request` - A query parameter has the wrong type
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    params(StudentSearchQueryDto),
    responses(
        (status = 200, description = "Matching students", body = Vec<StudentDto>),
        (status = 400, description = "Invalid query parameter", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn search_students(
    State(state): State<AppState>,
    query: Result<Query<StudentSearchQueryDto>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query.map_err(|rejection| AppError::TypeMismatch(rejection.body_text()))?;

    let service = StudentService::new(&state.db);
    let students = service
        .search(StudentSearchParams::from_dto(query))
        .await?;

    let dtos: Vec<StudentDto> = students.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a student with its courses.
///
/// Soft-deleted students are returned as well, flagged through `isDeleted`.
///
/// # Returns
/// - `200 OK` - The student and its courses
/// - `400 Bad Request` - Identifier is not a UUID
/// - `404 Not Found` - No student with this identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student UUID")
    ),
    responses(
        (status = 200, description = "Student with courses", body = StudentDetailDto),
        (status = 400, description = "Malformed identifier", body = ErrorResponseDto),
        (status = 404, description = "Student not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&id)?;

    let service = StudentService::new(&state.db);
    let aggregate = service.find_by_id(&id).await?;

    Ok((StatusCode::OK, Json(aggregate.into_dto())))
}

/// Update a student and its courses.
///
/// Overwrites every student field. Courses are replaced by the submitted list, or
/// added to the existing ones when `appendCourses` is true. The `deleted` flag
/// soft-deletes or restores the student.
///
/// # Access Control
/// - `Write` - Requires the API token when one is configured
///
/// # Returns
/// - `200 OK` - The updated student with its full course list
/// - `400 Bad Request` - Malformed identifier, invalid body or failed validation
/// - `404 Not Found` - No student with this identifier
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student UUID")
    ),
    request_body = RegistrationRequestDto,
    responses(
        (status = 200, description = "Successfully updated student", body = StudentDetailDto),
        (status = 400, description = "Invalid request", body = ErrorResponseDto),
        (status = 401, description = "Missing API token", body = ErrorResponseDto),
        (status = 403, description = "Wrong API token", body = ErrorResponseDto),
        (status = 404, description = "Student not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    InspectedJson(payload): InspectedJson<RegistrationRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&id)?;
    let params = validation::validate_into_params(payload)?;

    let service = StudentService::new(&state.db);
    let aggregate = service.update(&id, params).await?;

    Ok((StatusCode::OK, Json(aggregate.into_dto())))
}

/// Soft-delete a student.
///
/// # Access Control
/// - `Write` - Requires the API token when one is configured
///
/// # Returns
/// - `200 OK` - The student in its deleted state
/// - `404 Not Found` - No student with this identifier
#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student UUID")
    ),
    responses(
        (status = 200, description = "Student soft-deleted", body = StudentDto),
        (status = 400, description = "Malformed identifier", body = ErrorResponseDto),
        (status = 401, description = "Missing API token", body = ErrorResponseDto),
        (status = 403, description = "Wrong API token", body = ErrorResponseDto),
        (status = 404, description = "Student not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&id)?;

    let service = StudentService::new(&state.db);
    let student = service.soft_delete(&id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Restore a soft-deleted student.
///
/// # Access Control
/// - `Write` - Requires the API token when one is configured
///
/// # Returns
/// - `200 OK` - The student in its active state
/// - `404 Not Found` - No student with this identifier
#[utoipa::path(
    post,
    path = "/api/students/{id}/restore",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student UUID")
    ),
    responses(
        (status = 200, description = "Student restored", body = StudentDto),
        (status = 400, description = "Malformed identifier", body = ErrorResponseDto),
        (status = 401, description = "Missing API token", body = ErrorResponseDto),
        (status = 403, description = "Wrong API token", body = ErrorResponseDto),
        (status = 404, description = "Student not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn restore_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&id)?;

    let service = StudentService::new(&state.db);
    let student = service.restore(&id).await?;

    Ok((StatusCode::OK, Json(student.into_dto())))
}

/// Permanently delete a student and its courses.
///
/// # Access Control
/// - `Write` - Requires the API token when one is configured
///
/// # Returns
/// - `204 No Content` - Student and courses removed
/// - `404 Not Found` - No student with this identifier
#[utoipa::path(
    delete,
    path = "/api/students/{id}/force",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student UUID")
    ),
    responses(
        (status = 204, description = "Student permanently deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorResponseDto),
        (status = 401, description = "Missing API token", body = ErrorResponseDto),
        (status = 403, description = "Wrong API token", body = ErrorResponseDto),
        (status = 404, description = "Student not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn force_delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&id)?;

    let service = StudentService::new(&state.db);
    service.force_delete(&id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// List a student's courses.
///
/// # Returns
/// - `200 OK` - Courses ordered by enrollment time, then name
/// - `404 Not Found` - No student with this identifier
#[utoipa::path(
    get,
    path = "/api/students/{id}/courses",
    tag = STUDENT_TAG,
    params(
        ("id" = String, Path, description = "Student UUID")
    ),
    responses(
        (status = 200, description = "Courses of the student", body = Vec<CourseDto>),
        (status = 400, description = "Malformed identifier", body = ErrorResponseDto),
        (status = 404, description = "Student not found", body = ErrorResponseDto),
        (status = 500, description = "Internal server error", body = ErrorResponseDto)
    ),
)]
pub async fn get_student_courses(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_student_id(&id)?;

    let service = StudentService::new(&state.db);
    let courses = service.list_courses_for_student(&id).await?;

    let dtos: Vec<CourseDto> = courses.into_iter().map(Course::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
