pub mod article;
pub mod site;

pub use article::{
    Article, ArticlePage, ContentIndex, ContentType, fetch_article, fetch_index,
};
