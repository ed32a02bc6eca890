use dioxus::prelude::*;

use content::site;

#[component]
pub fn SiteFooter() -> Element {
    let author = site::AUTHOR_NAME;

    rsx! {
        footer { class: "site-footer",
            p { "©2026 {author}." }
            p {
                "Made with "
                a { href: "https://dioxuslabs.com/", "Dioxus" }
                "."
            }
        }
    }
}
