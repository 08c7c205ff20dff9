use chrono::{TimeZone, Utc};

/// Fixed binary identifier `00112233-4455-6677-8899-aabbccddeeff`.
pub const STUDENT_ID: [u8; 16] = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];

/// Creates an active student entity with deterministic values.
pub fn entity() -> entity::student::Model {
    entity::student::Model {
        student_id: STUDENT_ID.to_vec(),
        full_name: "Yamada Taro".to_string(),
        furigana: "ヤマダタロウ".to_string(),
        nickname: "Taro".to_string(),
        email: "taro@example.com".to_string(),
        location: Some("Osaka".to_string()),
        age: 21,
        gender: "Male".to_string(),
        remarks: None,
        created_at: Utc
            .with_ymd_and_hms(2025, 4, 1, 9, 0, 0)
            .single()
            .unwrap_or_default(),
        deleted_at: None,
        is_deleted: false,
    }
}
