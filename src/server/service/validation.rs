//! Validation of student registration and update requests.
//!
//! The validator walks the whole nested request and reports every violated rule
//! as a `(path, message)` pair, student fields first and then each course in list
//! order. It never mutates its input.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::{
    model::student::{CoursePayloadDto, RegistrationRequestDto, StudentPayloadDto},
    server::{
        error::{validation::FieldError, AppError},
        model::{
            course::CourseParams,
            student::{RegistrationParams, StudentFields},
        },
        util::identifier,
    },
};

/// Maximum number of characters in a full name.
pub const FULL_NAME_MAX_CHARS: usize = 100;

/// Date format accepted for course start and end dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

const MUST_NOT_BE_BLANK: &str = "must not be blank";

/// Returns the trimmed value when it is present and not blank.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Returns the trimmed value, or `None` when absent or blank.
fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).ok()
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Validates a registration or update request.
///
/// # Returns
/// Field errors in report order; an empty vector means the request is valid.
pub fn validate_registration(request: &RegistrationRequestDto) -> Vec<FieldError> {
    let mut errors = validate_student(&request.student);

    for (index, course) in request.courses.iter().enumerate() {
        errors.extend(validate_course(index, course));
    }

    errors
}

fn validate_student(student: &StudentPayloadDto) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if let Some(id) = student.student_id.as_deref() {
        if let Err(e) = identifier::decode_to_bytes(Some(id.trim())) {
            errors.push(FieldError::new("student.studentId", e.to_string()));
        }
    }

    match non_blank(&student.full_name) {
        None => errors.push(FieldError::new("student.fullName", MUST_NOT_BE_BLANK)),
        Some(name) if name.chars().count() > FULL_NAME_MAX_CHARS => errors.push(FieldError::new(
            "student.fullName",
            format!("must be at most {} characters", FULL_NAME_MAX_CHARS),
        )),
        Some(_) => {}
    }

    if non_blank(&student.furigana).is_none() {
        errors.push(FieldError::new("student.furigana", MUST_NOT_BE_BLANK));
    }

    if non_blank(&student.nickname).is_none() {
        errors.push(FieldError::new("student.nickname", MUST_NOT_BE_BLANK));
    }

    match non_blank(&student.email) {
        None => errors.push(FieldError::new("student.email", MUST_NOT_BE_BLANK)),
        Some(email) if !is_valid_email(email) => errors.push(FieldError::new(
            "student.email",
            "must be a well-formed email address",
        )),
        Some(_) => {}
    }

    if non_blank(&student.gender).is_none() {
        errors.push(FieldError::new("student.gender", MUST_NOT_BE_BLANK));
    }

    if student.age < 0 {
        errors.push(FieldError::new(
            "student.age",
            "must be greater than or equal to 0",
        ));
    }

    errors
}

fn validate_course(index: usize, course: &CoursePayloadDto) -> Vec<FieldError> {
    let mut errors = Vec::new();
    let path = |field: &str| format!("courses[{}].{}", index, field);

    if non_blank(&course.course_name).is_none() {
        errors.push(FieldError::new(path("courseName"), MUST_NOT_BE_BLANK));
    }

    let start_date = match non_blank(&course.start_date) {
        None => {
            errors.push(FieldError::new(path("startDate"), MUST_NOT_BE_BLANK));
            None
        }
        Some(value) => {
            let parsed = parse_date(value);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    path("startDate"),
                    "must be a date in YYYY-MM-DD format",
                ));
            }
            parsed
        }
    };

    if let Some(value) = non_blank(&course.end_date) {
        match (parse_date(value), start_date) {
            (None, _) => errors.push(FieldError::new(
                path("endDate"),
                "must be a date in YYYY-MM-DD format",
            )),
            (Some(end), Some(start)) if end < start => errors.push(FieldError::new(
                path("endDate"),
                "must not be before startDate",
            )),
            _ => {}
        }
    }

    errors
}

/// Validates a request and converts it into typed parameters.
///
/// Runs before any storage access so that an invalid request never opens a
/// transaction.
///
/// # Returns
/// - `Ok(RegistrationParams)` - Trimmed, parsed parameters
/// - `Err(AppError::Validation)` - One or more field rules failed
pub fn validate_into_params(
    request: RegistrationRequestDto,
) -> Result<RegistrationParams, AppError> {
    let errors = validate_registration(&request);
    if !errors.is_empty() {
        return Err(AppError::Validation(errors));
    }

    let student_id = request
        .student
        .student_id
        .as_deref()
        .map(|id| identifier::decode_to_bytes(Some(id.trim())))
        .transpose()?;

    let student = request.student;
    let required = |value: Option<String>, field: &str| {
        optional_text(value).ok_or_else(|| {
            AppError::Validation(vec![FieldError::new(field, MUST_NOT_BE_BLANK)])
        })
    };

    let fields = StudentFields {
        full_name: required(student.full_name, "student.fullName")?,
        furigana: required(student.furigana, "student.furigana")?,
        nickname: required(student.nickname, "student.nickname")?,
        email: required(student.email, "student.email")?,
        location: optional_text(student.location),
        age: student.age,
        gender: required(student.gender, "student.gender")?,
        remarks: optional_text(student.remarks),
    };

    let courses = request
        .courses
        .into_iter()
        .enumerate()
        .map(|(index, course)| {
            let invalid = |field: &str| {
                AppError::Validation(vec![FieldError::new(
                    format!("courses[{}].{}", index, field),
                    "is invalid",
                )])
            };

            let start_date = course
                .start_date
                .as_deref()
                .and_then(parse_date)
                .ok_or_else(|| invalid("startDate"))?;
            let end_date = match optional_text(course.end_date) {
                Some(value) => Some(parse_date(&value).ok_or_else(|| invalid("endDate"))?),
                None => None,
            };

            Ok(CourseParams {
                course_name: optional_text(course.course_name)
                    .ok_or_else(|| invalid("courseName"))?,
                start_date,
                end_date,
            })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    Ok(RegistrationParams {
        student_id,
        fields,
        courses,
        deleted: request.deleted,
        append_courses: request.append_courses,
    })
}
