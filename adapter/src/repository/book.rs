use async_trait::async_trait;
use derive_new::new;
use kernel::{
    model::{
        book::{
            event::{CreateBook, DeleteBook, UpdateBook},
            Book, BookListOptions,
        },
        id::BookId,
    },
    repository::book::BookRepository,
};
use shared::error::{AppError, AppResult};

use crate::database::{model::book::BookRow, ConnectionPool};

#[derive(new)]
pub struct BookRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl BookRepository for BookRepositoryImpl {
    async fn create(&self, event: CreateBook) -> AppResult<Book> {
        let book_id = BookId::new();

        sqlx::query_as::<_, BookRow>(
            r#"
                INSERT INTO books (book_id, title, author, genre, is_read)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING book_id, title, author, genre, is_read;
            "#,
        )
        .bind(book_id)
        .bind(event.title)
        .bind(event.author)
        .bind(event.genre)
        .bind(event.read)
        .fetch_one(self.db.inner_ref())
        .await
        .map(Book::from)
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_all(&self, options: BookListOptions) -> AppResult<Vec<Book>> {
        // genre が NULL の場合は絞り込まない。並び順はストアに任せる
        sqlx::query_as::<_, BookRow>(
            r#"
                SELECT book_id, title, author, genre, is_read
                FROM books
                WHERE $1::TEXT IS NULL OR genre = $1;
            "#,
        )
        .bind(options.genre)
        .fetch_all(self.db.inner_ref())
        .await
        .map(|rows| rows.into_iter().map(Book::from).collect())
        .map_err(AppError::SpecificOperationError)
    }

    async fn find_by_id(&self, book_id: BookId) -> AppResult<Option<Book>> {
        sqlx::query_as::<_, BookRow>(
            r#"
                SELECT book_id, title, author, genre, is_read
                FROM books
                WHERE book_id = $1;
            "#,
        )
        .bind(book_id)
        .fetch_optional(self.db.inner_ref())
        .await
        .map(|row| row.map(Book::from))
        .map_err(AppError::SpecificOperationError)
    }

    async fn update(&self, event: UpdateBook) -> AppResult<Book> {
        sqlx::query_as::<_, BookRow>(
            r#"
                UPDATE books
                SET title = $2, author = $3, genre = $4, is_read = $5
                WHERE book_id = $1
                RETURNING book_id, title, author, genre, is_read;
            "#,
        )
        .bind(event.book_id)
        .bind(event.title)
        .bind(event.author)
        .bind(event.genre)
        .bind(event.read)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .map(Book::from)
        // 解決後に別リクエストで削除された場合
        .ok_or_else(|| {
            AppError::NoRowsAffectedError(format!(
                "No book record has been updated: book_id={}",
                event.book_id
            ))
        })
    }

    async fn delete(&self, event: DeleteBook) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM books WHERE book_id = $1;
            "#,
        )
        .bind(event.book_id)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() == 0 {
            return Err(AppError::NoRowsAffectedError(format!(
                "No book record has been deleted: book_id={}",
                event.book_id
            )));
        }

        Ok(())
    }
}
