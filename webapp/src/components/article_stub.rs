use dioxus::prelude::*;

use content::Article;

use crate::common::colors::AccentColor;

#[derive(Clone, PartialEq, Props)]
pub struct ArticleStubProps {
    article: Article,
}

// the listing entry for an article: accent box, accent-bordered front
// matter, title, excerpt
//
// the accent box only appears on wide viewports; on narrow ones the top
// border of the front matter carries the accent instead
#[component]
pub fn ArticleStub(props: ArticleStubProps) -> Element {
    let article = props.article;
    let accent = AccentColor::from(article.kind);

    rsx! {
        div { class: "article-stub",
            div {
                class: "stub-accent",
                style: "background-color: {accent.to_css_color()};",
            }
            div {
                class: "stub-text",
                style: "border-color: {accent.to_css_color()};",
                div {
                    class: "stub-front-matter",
                    style: "border-color: {accent.to_css_color()};",
                    h2 { class: "stub-title", "{article.title}" }
                    p { class: "stub-excerpt", "{article.excerpt}" }
                }
            }
        }
    }
}

#[component]
pub fn ArticleStubSkeleton() -> Element {
    rsx! {
        div { class: "skeleton stub-skeleton" }
    }
}
