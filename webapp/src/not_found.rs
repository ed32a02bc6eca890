use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!("unmatched route: /{}", segments.join("/"));

    rsx! {
        div { class: "notfound-container",
            div { class: "notfound-message",
                div { class: "notfound-logo",
                    img { src: "/assets/logo.svg", alt: "" }
                }
                div { class: "notfound-text",
                    h1 { "Oops... Page Not Found!" }
                    p {
                        "I'm afraid the page you're looking for doesn't seem to exist! "
                        "Try a link at the top instead."
                    }
                }
            }
        }
    }
}
