use dioxus::prelude::*;

use crate::components::section::Section;

#[component]
pub fn Cv() -> Element {
    rsx! {
        Section { title: "personal-statement".to_owned(), highlight: true,
            div { class: "personal-statement",
                p {
                    "A systems-minded software engineer with a strong visual design "
                    "background.  I like building tools that make complicated data "
                    "legible, and teams where shipping and explaining carry equal "
                    "weight."
                }
            }
        }
        Section { title: "Core Skills".to_owned(),
            div { class: "page-prose",
                ul {
                    li { "Programming languages including Rust, TypeScript and C++." }
                    li {
                        "Web frontends from first principles: component frameworks, "
                        "WebAssembly, CSS design systems."
                    }
                    li { "Backend services, HTTP APIs and content pipelines." }
                    li { "Comfortable owning a feature from design sketch to deploy." }
                    li { "Strong grounding in typography, layout and colour theory." }
                    li { "Clear written and spoken communication." }
                }
            }
        }
        div { class: "page-prose",
            h2 { "Work History:" }
            h3 { "2021 - present: Senior Engineer, Halftone Systems" }
            p {
                "Small product company building collaborative documentation tooling."
            }
            ul {
                li {
                    "Lead developer on the rendering layer, including the move of the "
                    "editor canvas to WebAssembly."
                }
                li {
                    "Designed the content storage format and the migration tooling "
                    "that moved customers onto it without downtime."
                }
                li { "Mentored three engineers through to senior roles." }
            }
            h3 { "2017 - 2021: Software Engineer, Brightline Analytics" }
            p {
                "Data visualisation consultancy working with newsroom and research "
                "clients."
            }
            ul {
                li {
                    "Built interactive visualisations for datasets in the hundreds of "
                    "millions of rows."
                }
                li {
                    "Developed an internal charting library used across every client "
                    "project."
                }
                li { "Ran workshops on visual design for data-heavy interfaces." }
            }
            h3 { "2014 - 2017: Web Developer, Fold Creative" }
            p { "Design studio producing campaign sites and brand work." }
            ul {
                li { "Delivered bespoke sites on tight print-style deadlines." }
                li { "Introduced version control and a build pipeline to the studio." }
            }
            h2 { "Education:" }
            p {
                "2014: BSc(Hons) Computer Science, 2:1, University of Edinburgh."
            }
            h2 { "Personal Projects:" }
            h3 { "This site" }
            ul {
                li { "Client-rendered site built in Rust and WebAssembly." }
                li { "Designed from scratch using custom css and typography." }
            }
            h3 { "tidelines" }
            ul {
                li {
                    "A small generative-art tool that renders coastal tide tables as "
                    "plotter-ready line drawings."
                }
                li { "Custom geometry pipeline with SVG export." }
            }
            hr {}
            p { "References available on request." }
        }
    }
}
