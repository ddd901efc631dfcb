use axum::{routing::get, Router};

use registry::AppRegistry;

use crate::handler::book::{
    delete_book, patch_book, register_book, show_book, show_book_list, update_book,
};

pub fn build_book_routes() -> Router<AppRegistry> {
    let books_routers = Router::new()
        .route("/", get(show_book_list).post(register_book))
        .route(
            "/:book_id",
            get(show_book)
                .put(update_book)
                .patch(patch_book)
                .delete(delete_book),
        );

    Router::new().nest("/books", books_routers)
}
