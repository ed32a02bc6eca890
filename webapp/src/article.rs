use dioxus::prelude::*;

use gloo_console::error as console_error;

use crate::common::{self, colors::AccentColor};

#[derive(Clone, PartialEq, Props)]
pub struct ArticleDetailProps {
    // this is a String because we get it from the Router
    slug: String,
}

#[component]
pub fn ArticleDetail(props: ArticleDetailProps) -> Element {
    let slug = props.slug;

    let page = use_resource(move || {
        let slug = slug.clone();
        async move {
            content::fetch_article(&slug)
                .await
                .inspect_err(|err| console_error!(format!("failed to fetch article: {err}")))
        }
    });

    let page = match &*page.read() {
        Some(Ok(page)) => page.clone(),
        Some(Err(_)) => {
            return rsx! {
                div { class: "page-container",
                    p { class: "load-error",
                        "Could not load this article.  Try a link at the top instead."
                    }
                }
            };
        }
        None => {
            return rsx! {
                div { class: "page-container",
                    div { class: "skeleton", style: "width: 100%; height: 32px; margin: 8rem 0 2rem 0;" }
                    div { class: "skeleton", style: "width: 100%; height: 16px; margin-bottom: 1rem;" }
                    div { class: "skeleton", style: "width: 90%; height: 16px;" }
                }
            };
        }
    };

    let article = page.article;
    let accent = AccentColor::from(article.kind);
    let date = common::publish_date(article.date);

    let lead_image = match &article.title_image {
        Some(src) => rsx! {
            img { class: "lead-image", src: "{src}", alt: "" }
        },
        None => rsx! {},
    };

    rsx! {
        div { class: "article-hero",
            {lead_image}
            div { class: "title-container",
                h1 {
                    class: "article-title",
                    style: "border-right-color: {accent.to_css_color()};",
                    "{article.title}"
                }
                h3 {
                    class: "article-date",
                    style: "color: {accent.to_css_color()};",
                    "{date}"
                }
            }
        }
        div { class: "page-container",
            div { class: "article-body", dangerous_inner_html: "{page.html}" }
        }
    }
}
