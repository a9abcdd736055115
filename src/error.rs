use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

use crate::storage::StorageError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Link ảnh đã tồn tại!")]
    DuplicateLink,
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Sai tài khoản hoặc mật khẩu!")]
    InvalidCredentials,
    #[error("Không thể xóa Label mặc định!")]
    ProtectedLabel,
    #[error("Label không tồn tại")]
    UnknownLabel,
    #[error("Hành động không hợp lệ: {0}")]
    UnknownAction(String),
    #[error("Thiếu thông tin: {0}")]
    MissingField(&'static str),
    #[error("Lỗi khi lưu dữ liệu: {0}")]
    Storage(#[from] StorageError),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::DuplicateLink | Error::UnknownAction(_) | Error::MissingField(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            // Label rejections are reported in the body only.
            Error::ProtectedLabel | Error::UnknownLabel => StatusCode::OK,
            Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        if let Error::Storage(e) = &self {
            warn!("storage failure: {e}");
        }
        let message = self.to_string();
        let body = if message.is_empty() {
            json!({"success": false})
        } else {
            json!({"success": false, "message": message})
        };
        (status, Json(body)).into_response()
    }
}
