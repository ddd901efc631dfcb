use garde::Validate;
use kernel::model::{
    book::{
        event::{CreateBook, PatchBook, ReplaceBook},
        Book, BookListOptions,
    },
    id::BookId,
};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookRequest {
    #[garde(custom(is_present_title))]
    pub title: Option<String>,
    #[garde(skip)]
    pub author: Option<String>,
    #[garde(skip)]
    pub genre: Option<String>,
    #[garde(skip)]
    pub read: Option<bool>,
}

fn is_present_title(value: &Option<String>, _: &()) -> garde::Result {
    match value.as_deref() {
        Some(title) if !title.is_empty() => Ok(()),
        _ => Err(garde::Error::new("Title is required")),
    }
}

// validate() を通過した後に呼ぶ前提
impl From<CreateBookRequest> for CreateBook {
    fn from(value: CreateBookRequest) -> Self {
        let CreateBookRequest {
            title,
            author,
            genre,
            read,
        } = value;
        CreateBook::new(
            title.unwrap_or_default(),
            author,
            genre,
            read.unwrap_or_default(),
        )
    }
}

/// PUT のリクエスト。省略された項目は空で上書きされる。
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub read: Option<bool>,
}

impl From<UpdateBookRequest> for ReplaceBook {
    fn from(value: UpdateBookRequest) -> Self {
        let UpdateBookRequest {
            title,
            author,
            genre,
            read,
        } = value;
        ReplaceBook {
            title,
            author,
            genre,
            read,
        }
    }
}

/// PATCH のリクエスト。受け付けるのはこの 4 項目だけで、`id` や `_id` は読み捨てる。
///
/// キーが省略された項目は `None`、`null` が指定された項目は `Some(None)` になる。
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PatchBookRequest {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub title: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub author: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub genre: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<bool>)]
    pub read: Option<Option<bool>>,
}

// キーが存在する場合にだけ呼ばれるため、値が null でも Some で包む
fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// null の title と read は PUT で省略した場合と同じ値になる
impl From<PatchBookRequest> for PatchBook {
    fn from(value: PatchBookRequest) -> Self {
        let PatchBookRequest {
            title,
            author,
            genre,
            read,
        } = value;
        PatchBook {
            title: title.map(Option::unwrap_or_default),
            author,
            genre,
            read: read.map(Option::unwrap_or_default),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BookListQuery {
    pub genre: Option<String>,
}

impl From<BookListQuery> for BookListOptions {
    fn from(value: BookListQuery) -> Self {
        Self {
            genre: value.genre.filter(|genre| !genre.is_empty()),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[schema(value_type = String)]
    pub id: BookId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    pub read: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<BookLinks>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct BookLinks {
    #[serde(rename = "self")]
    pub self_link: String,
}

impl BookResponse {
    /// リクエストの Host を元に自身への URL を付与する。保存はされない。
    pub fn with_links(mut self, host: Option<&str>) -> Self {
        self.links = host.map(|host| BookLinks {
            self_link: format!("http://{}/api/books/{}", host, self.id),
        });
        self
    }
}

impl From<Book> for BookResponse {
    fn from(value: Book) -> Self {
        let Book {
            id,
            title,
            author,
            genre,
            read,
        } = value;
        Self {
            id,
            title,
            author,
            genre,
            read,
            links: None,
        }
    }
}
