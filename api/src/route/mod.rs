use axum::Router;
use registry::AppRegistry;

use book::build_book_routes;
use health::build_health_check_routes;

pub mod book;
pub mod health;

pub fn routes() -> Router<AppRegistry> {
    let router = Router::new()
        .merge(build_health_check_routes())
        .merge(build_book_routes());

    Router::new().nest("/api", router)
}
