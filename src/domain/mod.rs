//! Core types: ArticleMeta, ArticleId, Tag, keyword extraction, id sequence

mod article;
mod article_id;
mod id_sequence;
mod keywords;
mod tag;

pub use article::{ArticleMeta, ArticleSummary, content_length};
pub use article_id::{ArticleId, ParseArticleIdError};
pub use id_sequence::IdSequence;
pub use keywords::{DEFAULT_KEYWORD_COUNT, DEFAULT_STOPWORDS, KeywordExtractor};
pub use tag::{ParseTagError, Tag};
