use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use kernel::model::{book::Book, id::BookId};
use registry::AppRegistry;
use shared::error::AppError;

/// `/books/:book_id` に対応する書籍。
///
/// 各ハンドラの前に一度だけ検索を行い、見つからなければ 404、
/// ID が不正な場合や検索に失敗した場合は 500 としてハンドラを呼ばずに応答する。
pub struct ResolvedBook(pub Book);

#[async_trait]
impl FromRequestParts<AppRegistry> for ResolvedBook {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw_book_id) = Path::<String>::from_request_parts(parts, registry)
            .await
            .map_err(|_| not_found())?;

        let book_id: BookId = raw_book_id.parse()?;

        registry
            .book_repository()
            .find_by_id(book_id)
            .await?
            .map(Self)
            .ok_or_else(not_found)
    }
}

fn not_found() -> AppError {
    AppError::EntityNotFound("No book found".to_string())
}
