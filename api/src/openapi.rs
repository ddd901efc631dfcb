use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Rusty Book API",
        description = "書籍コレクションを管理する REST API。タイトル・著者・ジャンル・既読状態を扱う。"
    ),
    paths(
        crate::handler::health::health_check,
        crate::handler::health::health_check_db,
        crate::handler::book::register_book,
        crate::handler::book::show_book_list,
        crate::handler::book::show_book,
        crate::handler::book::update_book,
        crate::handler::book::patch_book,
        crate::handler::book::delete_book,
    ),
    components(schemas(
        crate::model::book::CreateBookRequest,
        crate::model::book::UpdateBookRequest,
        crate::model::book::PatchBookRequest,
        crate::model::book::BookResponse,
        crate::model::book::BookLinks,
    ))
)]
pub struct ApiDoc;
