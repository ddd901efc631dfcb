use event::{PatchBook, ReplaceBook, UpdateBook};

use super::id::BookId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub read: bool,
}

impl Book {
    /// 全項目を置き換える。ID は変わらない。
    ///
    /// title の必須チェックは行わないため、空のタイトルで保存され得る。
    pub fn replaced_with(self, fields: ReplaceBook) -> UpdateBook {
        UpdateBook {
            book_id: self.id,
            title: fields.title.unwrap_or_default(),
            author: fields.author,
            genre: fields.genre,
            read: fields.read.unwrap_or_default(),
        }
    }

    /// 指定された項目だけを上書きし、それ以外は現在の値を保つ。
    pub fn patched_with(self, fields: PatchBook) -> UpdateBook {
        UpdateBook {
            book_id: self.id,
            title: fields.title.unwrap_or(self.title),
            author: fields.author.unwrap_or(self.author),
            genre: fields.genre.unwrap_or(self.genre),
            read: fields.read.unwrap_or(self.read),
        }
    }
}

impl From<UpdateBook> for Book {
    fn from(event: UpdateBook) -> Self {
        let UpdateBook {
            book_id,
            title,
            author,
            genre,
            read,
        } = event;
        Self {
            id: book_id,
            title,
            author,
            genre,
            read,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookListOptions {
    pub genre: Option<String>,
}
