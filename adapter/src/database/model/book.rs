use kernel::model::{book::Book, id::BookId};

#[derive(Debug, sqlx::FromRow)]
pub struct BookRow {
    pub book_id: BookId,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub is_read: bool,
}

impl From<BookRow> for Book {
    fn from(value: BookRow) -> Self {
        let BookRow {
            book_id,
            title,
            author,
            genre,
            is_read,
        } = value;
        Self {
            id: book_id,
            title,
            author,
            genre,
            read: is_read,
        }
    }
}
