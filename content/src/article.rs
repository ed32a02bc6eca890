use std::fmt;

use gloo_net::http::Request;

use serde::{Deserialize, Serialize};

pub const URL_CONTENT_INDEX: &str = "/content/index.json";
pub const URL_ARTICLE_ROOT: &str = "/content/articles";

pub type ArticleId = u64;
pub type UnixTime = u64;

// the front-matter tag that classifies an article
//
// parsing is total on purpose -- front matter is not validated upstream, so
// a tag the site does not know about lands on Uncategorized instead of
// failing the whole content load
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum ContentType {
    Essay,
    Tutorial,
    Project,
    Other,
    Uncategorized,
}

impl ContentType {
    pub fn from_tag(tag: &str) -> ContentType {
        match tag {
            "essay" => ContentType::Essay,
            "tutorial" => ContentType::Tutorial,
            "project" => ContentType::Project,
            "other" => ContentType::Other,
            _ => ContentType::Uncategorized,
        }
    }
}

impl From<String> for ContentType {
    fn from(string: String) -> ContentType {
        ContentType::from_tag(&string)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContentType::Essay => "essay",
            ContentType::Tutorial => "tutorial",
            ContentType::Project => "project",
            ContentType::Other => "other",
            ContentType::Uncategorized => "uncategorized",
        };
        write!(f, "{}", name)
    }
}

// the core article record
//
// everything except the type tag is opaque display data; the pipeline that
// publishes the json owns the field contents
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub slug: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ContentType,
    pub excerpt: String,
    pub date: UnixTime,
    #[serde(default)]
    pub title_image: Option<String>,
}

// the listing document published alongside the app
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentIndex {
    pub articles: Vec<Article>,
}

impl ContentIndex {
    // most recent first
    pub fn by_recency(&self) -> Vec<Article> {
        let mut articles = self.articles.clone();
        articles.sort_by(|a, b| b.date.cmp(&a.date));
        articles
    }

    pub fn recent(&self, limit: usize) -> Vec<Article> {
        let mut articles = self.by_recency();
        articles.truncate(limit);
        articles
    }

    pub fn find(&self, slug: &str) -> Option<&Article> {
        self.articles.iter().find(|article| article.slug == slug)
    }
}

// a single article plus its pre-rendered body, one document per slug
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArticlePage {
    pub article: Article,
    pub html: String,
}

pub async fn fetch_index() -> anyhow::Result<ContentIndex> {
    let index: ContentIndex = Request::get(URL_CONTENT_INDEX).send().await?.json().await?;

    Ok(index)
}

pub async fn fetch_article(slug: &str) -> anyhow::Result<ArticlePage> {
    let url = format!("{}/{}.json", URL_ARTICLE_ROOT, slug);

    let page: ArticlePage = Request::get(&url).send().await?.json().await?;

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_index() -> ContentIndex {
        serde_json::from_str(
            r#"{
                "articles": [
                    {
                        "id": 1,
                        "slug": "first-light",
                        "title": "First Light",
                        "type": "essay",
                        "excerpt": "On starting over.",
                        "date": 1577836800
                    },
                    {
                        "id": 2,
                        "slug": "signals-from-scratch",
                        "title": "Signals from Scratch",
                        "type": "tutorial",
                        "excerpt": "Building reactivity by hand.",
                        "date": 1593561600,
                        "title_image": "/assets/img/signals.jpg"
                    },
                    {
                        "id": 3,
                        "slug": "field-notes",
                        "title": "Field Notes",
                        "type": "musings",
                        "excerpt": "Assorted notes.",
                        "date": 1585699200
                    }
                ]
            }"#,
        )
        .expect("sample index should parse")
    }

    #[test]
    fn known_tags_parse() {
        assert_eq!(ContentType::from_tag("essay"), ContentType::Essay);
        assert_eq!(ContentType::from_tag("tutorial"), ContentType::Tutorial);
        assert_eq!(ContentType::from_tag("project"), ContentType::Project);
        assert_eq!(ContentType::from_tag("other"), ContentType::Other);
    }

    #[test]
    fn unknown_tags_fall_back() {
        assert_eq!(ContentType::from_tag(""), ContentType::Uncategorized);
        assert_eq!(ContentType::from_tag("musings"), ContentType::Uncategorized);
        assert_eq!(ContentType::from_tag("Essay"), ContentType::Uncategorized);
    }

    #[test]
    fn unknown_tag_deserializes_without_error() {
        let index = sample_index();

        assert_eq!(index.find("field-notes").unwrap().kind, ContentType::Uncategorized);
    }

    #[test]
    fn title_image_is_optional() {
        let index = sample_index();

        assert_eq!(index.find("first-light").unwrap().title_image, None);
        assert_eq!(
            index.find("signals-from-scratch").unwrap().title_image,
            Some(String::from("/assets/img/signals.jpg"))
        );
    }

    #[test]
    fn by_recency_orders_newest_first() {
        let index = sample_index();

        let ordered: Vec<_> = index
            .by_recency()
            .into_iter()
            .map(|article| article.slug)
            .collect();

        assert_eq!(ordered, ["signals-from-scratch", "field-notes", "first-light"]);
    }

    #[test]
    fn recent_truncates() {
        let index = sample_index();

        let recent = index.recent(1);

        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].slug, "signals-from-scratch");
    }

    #[test]
    fn find_misses_cleanly() {
        assert!(sample_index().find("no-such-slug").is_none());
    }
}
