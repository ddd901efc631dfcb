use axum::{http::StatusCode, response::IntoResponse};
use itertools::Itertools;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("Error occurred in processing the database operation.")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("No rows affected: {0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    ConvertToUuidError(#[from] uuid::Error),
}

// garde のレポートからメッセージ部分だけを取り出してクライアントに返す
impl From<garde::Report> for AppError {
    fn from(report: garde::Report) -> Self {
        AppError::ValidationError(report.iter().map(|(_, e)| e.to_string()).join(", "))
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            // 不正な ID もストアでの検索失敗として扱う
            AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::ConvertToUuidError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status_code = self.status_code();

        if status_code.is_server_error() {
            tracing::error!(
                error.cause_chain = ?self,
                error.message = %self,
                "Unexpected error happend"
            );
        }

        (status_code, self.to_string()).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_4xx() {
        assert_eq!(
            AppError::ValidationError("Title is required".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::EntityNotFound("No book found".into()).status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn store_errors_map_to_500() {
        let malformed = "not-a-uuid".parse::<uuid::Uuid>().unwrap_err();

        for e in [
            AppError::SpecificOperationError(sqlx::Error::PoolTimedOut),
            AppError::NoRowsAffectedError("No book record has been updated".into()),
            AppError::ConvertToUuidError(malformed),
        ] {
            assert_eq!(e.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn not_found_becomes_404_response() {
        let res = AppError::EntityNotFound("No book found".into()).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }
}
