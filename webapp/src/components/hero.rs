use dioxus::prelude::*;

use content::site;

#[component]
pub fn Hero() -> Element {
    let site_title = site::SITE_TITLE;
    let author = site::AUTHOR_NAME;
    let tagline = site::AUTHOR_TAGLINE;

    rsx! {
        div { class: "hero-main",
            div { class: "hero-logo",
                img { src: "/assets/logo.svg", alt: "{site_title}" }
            }
            h1 { class: "hero-title", "{author}" }
            h2 { class: "hero-tagline", "{tagline}" }
        }
        img {
            class: "hero-image",
            src: "/assets/img/background.jpg",
            alt: "",
        }
    }
}
