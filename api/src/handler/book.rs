use axum::{
    extract::{Host, Query, State},
    http::StatusCode,
    Json,
};
use garde::Validate;
use kernel::model::book::event::DeleteBook;

use crate::{
    extractor::ResolvedBook,
    model::book::{
        BookListQuery, BookResponse, CreateBookRequest, PatchBookRequest, UpdateBookRequest,
    },
};
use registry::AppRegistry;
use shared::error::AppResult;

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        post,
        path = "/api/books",
        request_body = CreateBookRequest,
        responses(
            (status = 201, description = "書籍の登録に成功した場合。", body = BookResponse),
            (status = 400, description = "タイトルが指定されていない場合。"),
            (status = 500, description = "サーバーサイドエラーが発生した場合。")
        )
    )
)]
pub async fn register_book(
    State(registry): State<AppRegistry>,
    Json(req): Json<CreateBookRequest>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    req.validate()?;

    registry
        .book_repository()
        .create(req.into())
        .await
        .map(|book| (StatusCode::CREATED, Json(BookResponse::from(book))))
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        get,
        path = "/api/books",
        params(BookListQuery),
        responses(
            (status = 200, description = "書籍の一覧を取得できた場合。", body = [BookResponse]),
            (status = 500, description = "サーバーサイドエラーが発生した場合。")
        )
    )
)]
pub async fn show_book_list(
    State(registry): State<AppRegistry>,
    host: Option<Host>,
    Query(query): Query<BookListQuery>,
) -> AppResult<Json<Vec<BookResponse>>> {
    let host = host.map(|Host(host)| host);

    registry
        .book_repository()
        .find_all(query.into())
        .await
        .map(|books| {
            books
                .into_iter()
                .map(|book| BookResponse::from(book).with_links(host.as_deref()))
                .collect()
        })
        .map(Json)
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        get,
        path = "/api/books/{book_id}",
        params(("book_id" = String, Path, description = "書籍 ID")),
        responses(
            (status = 200, description = "書籍を取得できた場合。", body = BookResponse),
            (status = 404, description = "書籍が存在しない場合。"),
            (status = 500, description = "サーバーサイドエラーが発生した場合。")
        )
    )
)]
pub async fn show_book(
    host: Option<Host>,
    ResolvedBook(book): ResolvedBook,
) -> Json<BookResponse> {
    let host = host.map(|Host(host)| host);

    Json(BookResponse::from(book).with_links(host.as_deref()))
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        put,
        path = "/api/books/{book_id}",
        params(("book_id" = String, Path, description = "書籍 ID")),
        request_body = UpdateBookRequest,
        responses(
            (status = 200, description = "書籍の置き換えに成功した場合。", body = BookResponse),
            (status = 404, description = "書籍が存在しない場合。"),
            (status = 500, description = "サーバーサイドエラーが発生した場合。")
        )
    )
)]
pub async fn update_book(
    State(registry): State<AppRegistry>,
    ResolvedBook(book): ResolvedBook,
    Json(req): Json<UpdateBookRequest>,
) -> AppResult<Json<BookResponse>> {
    registry
        .book_repository()
        .update(book.replaced_with(req.into()))
        .await
        .map(BookResponse::from)
        .map(Json)
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        patch,
        path = "/api/books/{book_id}",
        params(("book_id" = String, Path, description = "書籍 ID")),
        request_body = PatchBookRequest,
        responses(
            (status = 200, description = "書籍の部分更新に成功した場合。", body = BookResponse),
            (status = 404, description = "書籍が存在しない場合。"),
            (status = 500, description = "サーバーサイドエラーが発生した場合。")
        )
    )
)]
pub async fn patch_book(
    State(registry): State<AppRegistry>,
    ResolvedBook(book): ResolvedBook,
    Json(req): Json<PatchBookRequest>,
) -> AppResult<Json<BookResponse>> {
    registry
        .book_repository()
        .update(book.patched_with(req.into()))
        .await
        .map(BookResponse::from)
        .map(Json)
}

#[cfg_attr(
    debug_assertions,
    utoipa::path(
        delete,
        path = "/api/books/{book_id}",
        params(("book_id" = String, Path, description = "書籍 ID")),
        responses(
            (status = 204, description = "書籍の削除に成功した場合。"),
            (status = 404, description = "書籍が存在しない場合。"),
            (status = 500, description = "サーバーサイドエラーが発生した場合。")
        )
    )
)]
pub async fn delete_book(
    State(registry): State<AppRegistry>,
    ResolvedBook(book): ResolvedBook,
) -> AppResult<StatusCode> {
    registry
        .book_repository()
        .delete(DeleteBook { book_id: book.id })
        .await
        .map(|_| StatusCode::NO_CONTENT)
}
