#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod articles;
use articles::Articles;

mod article;
use article::ArticleDetail;

mod contact;
use contact::Contact;

mod cv;
use cv::Cv;

mod not_found;
use not_found::NotFound;

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/articles")]
        Articles {},
        #[route("/articles/:slug")]
        ArticleDetail { slug: String },
        #[route("/contact")]
        Contact {},
        #[route("/cv")]
        Cv {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        style { "{common::style::HOME_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
