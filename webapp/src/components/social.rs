use dioxus::prelude::*;

use content::site;

// stroke-based inline icons; color comes from the surrounding class via
// currentColor so the hover styling works the same everywhere

#[component]
pub fn TwitterIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "100%",
            height: "100%",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-10.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z" }
        }
    }
}

#[component]
pub fn GitHubIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "100%",
            height: "100%",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M9 19c-5 1.5-5-2.5-7-3m14 6v-3.87a3.37 3.37 0 0 0-.94-2.61c3.14-.35 6.44-1.54 6.44-7A5.44 5.44 0 0 0 20 4.77 5.07 5.07 0 0 0 19.91 1S18.73.65 16 2.48a13.38 13.38 0 0 0-7 0C6.27.65 5.09 1 5.09 1A5.07 5.07 0 0 0 5 4.77a5.44 5.44 0 0 0-1.5 3.78c0 5.42 3.3 6.61 6.44 7A3.37 3.37 0 0 0 9 18.13V22" }
        }
    }
}

#[component]
pub fn LinkedInIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "100%",
            height: "100%",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4V9h4v1.57A6 6 0 0 1 16 8z" }
            rect { x: "2", y: "9", width: "4", height: "12" }
            circle { cx: "4", cy: "4", r: "2" }
        }
    }
}

#[component]
pub fn MailIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "100%",
            height: "100%",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            rect { x: "2", y: "4", width: "20", height: "16", rx: "2" }
            path { d: "M22 6l-10 7L2 6" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct IconLinkProps {
    href: String,
    label: String,
    children: Element,
}

#[component]
fn IconLink(props: IconLinkProps) -> Element {
    rsx! {
        a {
            class: "social-icon",
            href: "{props.href}",
            aria_label: "{props.label}",
            {props.children}
        }
    }
}

#[component]
pub fn SocialIcons() -> Element {
    rsx! {
        div { class: "social-icons",
            IconLink { href: site::TWITTER_URL.to_owned(), label: "Twitter".to_owned(),
                TwitterIcon {}
            }
            IconLink { href: site::LINKEDIN_URL.to_owned(), label: "LinkedIn".to_owned(),
                LinkedInIcon {}
            }
            IconLink { href: site::GITHUB_URL.to_owned(), label: "GitHub".to_owned(),
                GitHubIcon {}
            }
        }
    }
}
