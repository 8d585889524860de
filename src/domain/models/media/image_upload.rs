//! 업로드 이미지 소스
//!
//! 게시물과 댓글에 첨부되는 이미지는 외부 입력(HTTP 본문 등)에서 읽어야 하며,
//! 읽기는 실패할 수 있습니다. [`ImageSource`] 는 그 읽기를 `io::Result` 로 모델링합니다.
//!
//! ## 크기/존재 계약
//!
//! - 소스가 없거나 비어 있으면 이미지는 저장되지 않습니다 (`None`).
//! - 읽기 실패는 `AppError::PayloadError` 로 변환되며 원인 I/O 에러를 보존합니다.
//! - 읽은 바이트가 제한(`MediaConfig::max_image_bytes`)을 넘으면 `ValidationError` 입니다.

use std::io;
use base64::{Engine as _, engine::general_purpose};
use crate::core::errors::{AppError, AppResult};

/// 이미지 바이트를 제공하는 입력
pub trait ImageSource: Send + Sync {
    /// 제공할 내용이 없는지 여부
    fn is_empty(&self) -> bool;

    /// 이미지 바이트를 읽습니다.
    fn read_bytes(&self) -> io::Result<Vec<u8>>;
}

/// JSON 본문에 base64 문자열로 실린 이미지
#[derive(Debug, Clone)]
pub struct Base64Image(String);

impl Base64Image {
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// `data:image/png;base64,` 형태의 data URL 접두사를 제거한 본문
    fn payload(&self) -> &str {
        let trimmed = self.0.trim();
        match trimmed.split_once(";base64,") {
            Some((prefix, body)) if prefix.starts_with("data:") => body,
            _ => trimmed,
        }
    }
}

impl ImageSource for Base64Image {
    fn is_empty(&self) -> bool {
        self.payload().is_empty()
    }

    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        general_purpose::STANDARD
            .decode(self.payload())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

/// 이미 메모리에 있는 이미지 바이트
#[derive(Debug, Clone)]
pub struct RawImage(pub Vec<u8>);

impl ImageSource for RawImage {
    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn read_bytes(&self) -> io::Result<Vec<u8>> {
        Ok(self.0.clone())
    }
}

/// 선택적 이미지 소스를 읽어 저장할 바이트로 만듭니다.
///
/// 엔티티 저장 전에 호출되어야 하며, 실패하면 아무것도 저장되지 않습니다.
pub fn load_image(source: Option<&dyn ImageSource>, max_bytes: usize) -> AppResult<Option<Vec<u8>>> {
    let source = match source {
        Some(source) if !source.is_empty() => source,
        _ => return Ok(None),
    };

    let bytes = source
        .read_bytes()
        .map_err(|e| AppError::payload("이미지를 읽는 중 오류가 발생했습니다", e))?;

    if bytes.len() > max_bytes {
        return Err(AppError::ValidationError(format!(
            "이미지 크기({} bytes)가 허용 한도({} bytes)를 초과합니다",
            bytes.len(),
            max_bytes
        )));
    }

    Ok(Some(bytes))
}
