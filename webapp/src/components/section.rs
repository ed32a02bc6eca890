use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct SectionProps {
    title: String,
    #[props(default)]
    highlight: bool,
    children: Element,
}

// a full-width titled band, optionally on the highlighted background
#[component]
pub fn Section(props: SectionProps) -> Element {
    rsx! {
        section {
            class: if props.highlight { "section-wrapper highlight" } else { "section-wrapper" },
            div { class: "section-title",
                h1 { "{props.title}" }
            }
            {props.children}
        }
    }
}
