use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::viewport::{NavState, use_nav_state};

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let name = props.name;
    let target = props.target;

    let current_path: Route = use_route();
    rsx! {
        Link {
            class: if current_path.is_child_of(&target) || current_path == (target) { "nav-link active" } else { "nav-link" },
            to: target,
            "{name}"
        }
    }
}

#[component]
fn HamburgerIcon() -> Element {
    rsx! {
        svg {
            view_box: "0 0 24 24",
            width: "24",
            height: "24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            path { d: "M3 6h18M3 12h18M3 18h18" }
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let mut nav_state = use_nav_state();
    let state = nav_state();

    let site_title = content::site::SITE_TITLE;

    let toggle_menu = move |_| {
        let next = nav_state.peek().toggle_menu();
        nav_state.set(next);
    };

    rsx! {
        // while the overlay menu is up, the rest of the viewport is covered
        // by a dismiss layer so any outside click closes it
        if state.menu_open() {
            div { class: "menu-overlay", onclick: toggle_menu }
            nav { class: "floating-menu",
                Link { class: "nav-link menu-link", to: Route::Articles {}, "Articles" }
                Link { class: "nav-link menu-link", to: Route::Contact {}, "Contact" }
                Link { class: "nav-link menu-link", to: Route::Cv {}, "CV" }
            }
        }
        header { class: "app-header",
            div { class: "nav-container",
                Link { class: "logo", to: Route::Home {},
                    img { src: "/assets/logo.svg", alt: "{site_title}" }
                }
                if state == NavState::Wide {
                    nav { class: "nav-links",
                        NavBarButton {
                            name: "Articles".to_owned(),
                            target: Route::Articles {},
                        }
                        NavBarButton {
                            name: "Contact".to_owned(),
                            target: Route::Contact {},
                        }
                        NavBarButton {
                            name: "CV".to_owned(),
                            target: Route::Cv {},
                        }
                    }
                } else {
                    button {
                        class: "menu-button",
                        aria_label: "toggle navigation menu",
                        onclick: toggle_menu,
                        HamburgerIcon {}
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
