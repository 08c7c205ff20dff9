use axum::{
    http::{Method, Uri},
    middleware,
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::{ErrorResponseDto, FieldErrorDto},
        student::{
            CourseDto, CoursePayloadDto, RegistrationRequestDto, StudentDetailDto, StudentDto,
            StudentPayloadDto,
        },
    },
    server::{
        controller::{
            course::{self, COURSE_TAG},
            student::{self, STUDENT_TAG},
        },
        error::AppError,
        middleware::auth::require_token,
        state::AppState,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        student::register_student,
        student::search_students,
        student::get_student,
        student::update_student,
        student::delete_student,
        student::restore_student,
        student::force_delete_student,
        student::get_student_courses,
        course::get_all_courses,
    ),
    components(schemas(
        StudentPayloadDto,
        CoursePayloadDto,
        RegistrationRequestDto,
        StudentDto,
        CourseDto,
        StudentDetailDto,
        ErrorResponseDto,
        FieldErrorDto,
    )),
    tags(
        (name = STUDENT_TAG, description = "Student registration and lifecycle"),
        (name = COURSE_TAG, description = "Course enrollments"),
    )
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// Every `/api` route passes the bearer-token guard. Unmatched paths answer with a
/// `NOT_FOUND` error body and unsupported methods with `METHOD_NOT_ALLOWED`.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route(
            "/api/students",
            get(student::search_students).post(student::register_student),
        )
        .route(
            "/api/students/{id}",
            get(student::get_student)
                .put(student::update_student)
                .delete(student::delete_student),
        )
        .route("/api/students/{id}/restore", post(student::restore_student))
        .route(
            "/api/students/{id}/force",
            delete(student::force_delete_student),
        )
        .route(
            "/api/students/{id}/courses",
            get(student::get_student_courses),
        )
        .route("/api/courses", get(course::get_all_courses))
        .method_not_allowed_fallback(method_not_allowed)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_token));

    Router::new()
        .merge(api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route matches {}", uri.path()))
}

async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::MethodNotAllowed(format!("{} is not supported on {}", method, uri.path()))
}
