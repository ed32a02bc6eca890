use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_console::error as console_error;

use crate::Route;
use crate::components::{
    article_stub::{ArticleStub, ArticleStubSkeleton},
    section::Section,
};

#[component]
pub fn Articles() -> Element {
    let index = use_resource(move || async move {
        content::fetch_index()
            .await
            .inspect_err(|err| console_error!(format!("failed to fetch content index: {err}")))
    });

    let listing = match &*index.read() {
        Some(Ok(index)) => rsx! {
            for article in index.by_recency() {
                Link {
                    class: "article-link",
                    to: Route::ArticleDetail { slug: article.slug.clone() },
                    ArticleStub { article: article.clone() }
                }
            }
        },
        Some(Err(_)) => rsx! {
            p { class: "load-error", "Could not load articles.  Try refreshing the page." }
        },
        None => rsx! {
            ArticleStubSkeleton {}
            ArticleStubSkeleton {}
            ArticleStubSkeleton {}
        },
    };

    rsx! {
        Section { title: "Articles".to_owned(),
            {listing}
        }
    }
}
