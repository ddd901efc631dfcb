use derive_new::new;

use crate::model::id::BookId;

#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct CreateBook {
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub read: bool,
}

/// 永続化される書籍の最終的な状態。全項目を上書きする。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBook {
    pub book_id: BookId,
    pub title: String,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub read: bool,
}

/// PUT 用。指定されなかった項目は空になる。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplaceBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub read: Option<bool>,
}

/// PATCH 用。指定された項目だけを書き換える。
///
/// `author` と `genre` は `Some(None)` で値を消去する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatchBook {
    pub title: Option<String>,
    pub author: Option<Option<String>>,
    pub genre: Option<Option<String>>,
    pub read: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteBook {
    pub book_id: BookId,
}
