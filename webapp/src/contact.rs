use dioxus::prelude::*;

use content::site;

use crate::components::{
    section::Section,
    social::{GitHubIcon, LinkedInIcon, MailIcon, TwitterIcon},
};

#[component]
pub fn Contact() -> Element {
    let twitter = site::TWITTER_URL;
    let linkedin = site::LINKEDIN_URL;
    let github = site::GITHUB_URL;
    let email = site::AUTHOR_EMAIL;

    rsx! {
        Section { title: "Contact".to_owned(),
            div { class: "contacts-container",
                div { class: "single-link",
                    h1 { "Twitter:" }
                    a {
                        class: "contact-icon",
                        href: "{twitter}",
                        aria_label: "Twitter",
                        TwitterIcon {}
                    }
                }
                div { class: "single-link",
                    h1 { "LinkedIn:" }
                    a {
                        class: "contact-icon",
                        href: "{linkedin}",
                        aria_label: "LinkedIn",
                        LinkedInIcon {}
                    }
                }
                div { class: "single-link",
                    h1 { "GitHub:" }
                    a {
                        class: "contact-icon",
                        href: "{github}",
                        aria_label: "GitHub",
                        GitHubIcon {}
                    }
                }
                div { class: "single-link",
                    h1 { "Email:" }
                    a {
                        class: "contact-icon",
                        href: "mailto:{email}",
                        aria_label: "Email",
                        MailIcon {}
                    }
                }
            }
        }
    }
}
