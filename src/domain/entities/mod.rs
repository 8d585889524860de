//! # Entities
//!
//! 영속성 계층에 저장되는 도메인 엔티티들입니다.
//!
//! ```text
//! entities/
//! ├── users/          ← User
//! ├── publications/   ← Publication (author_id → User)
//! └── comments/       ← Comment (user_id → User, publication_id → Publication)
//! ```
//!
//! ## 설계 원칙
//!
//! - **ID 참조**: 엔티티 간 양방향 객체 그래프 대신 외래 키 필드를 사용합니다.
//!   "다" 쪽이 "일" 쪽을 ID로 가리키며 소유 관계는 순환하지 않습니다.
//! - **서버 타임스탬프**: 생성/수정 시간은 엔티티 생성자와 수정 메서드에서만 설정됩니다.
//! - **바이너리 이미지**: `Option<Vec<u8>>` 로 표현하며 MongoDB 에는 BSON binary 로 저장됩니다.

pub mod users;
pub mod publications;
pub mod comments;

pub use users::User;
pub use publications::Publication;
pub use comments::Comment;

/// BSON `DateTime` 을 API 응답용 `chrono` 시간으로 변환합니다.
pub fn to_utc(value: mongodb::bson::DateTime) -> chrono::DateTime<chrono::Utc> {
    chrono::DateTime::from_timestamp_millis(value.timestamp_millis()).unwrap_or_default()
}

/// `Option<Vec<u8>>` 를 BSON binary 로 직렬화하는 serde 모듈
pub(crate) mod optional_binary {
    use mongodb::bson::spec::BinarySubtype;
    use mongodb::bson::Binary;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => Binary {
                subtype: BinarySubtype::Generic,
                bytes: bytes.clone(),
            }
            .serialize(serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Binary>::deserialize(deserializer)?.map(|binary| binary.bytes))
    }
}
