use dioxus::prelude::*;

use gloo_console::error as console_error;

use crate::components::{
    article_stub::{ArticleStub, ArticleStubSkeleton},
    footer::SiteFooter,
    hero::Hero,
    section::Section,
    social::SocialIcons,
};

#[component]
pub fn Home() -> Element {
    let index = use_resource(move || async move {
        content::fetch_index()
            .await
            .inspect_err(|err| console_error!(format!("failed to fetch content index: {err}")))
    });

    let recent_articles = match &*index.read() {
        Some(Ok(index)) => rsx! {
            for article in index.recent(10) {
                ArticleStub { article }
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
        Hero {}
        Section { title: "About".to_owned(), highlight: true,
            div { class: "about-text",
                p {
                    "I build software for a living and write about it when something "
                    "refuses to leave my head.  Most of my time goes into systems work "
                    "and the occasional visual experiment, and most of what ends up "
                    "here started as a note I couldn't keep short."
                }
                p {
                    "If you want the formal version, my CV is linked at the top."
                }
            }
            SocialIcons {}
        }
        Section { title: "Recent Articles".to_owned(),
            {recent_articles}
        }
        SiteFooter {}
    }
}
