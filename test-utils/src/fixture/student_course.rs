use chrono::{NaiveDate, TimeZone, Utc};

/// Fixed binary identifier `ffeeddcc-bbaa-9988-7766-554433221100`.
pub const COURSE_ID: [u8; 16] = [
    0xff, 0xee, 0xdd, 0xcc, 0xbb, 0xaa, 0x99, 0x88, 0x77, 0x66, 0x55, 0x44, 0x33, 0x22, 0x11, 0x00,
];

/// Creates an ongoing course entity owned by `student_id`.
pub fn entity(student_id: &[u8]) -> entity::student_course::Model {
    entity::student_course::Model {
        course_id: COURSE_ID.to_vec(),
        student_id: student_id.to_vec(),
        course_name: "Java Course".to_string(),
        start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap_or_default(),
        end_date: None,
        created_at: Utc
            .with_ymd_and_hms(2025, 4, 1, 9, 30, 0)
            .single()
            .unwrap_or_default(),
    }
}
