use maud::{html, Markup, DOCTYPE};

use crate::{names, utils};

fn header() -> Markup {
    html! {
        header {
            nav {
                ul {
                    li."secondary" {
                        a href=(names::INDEX_URL) {
                            strong { "Flashquiz" }
                        }
                    }
                }
                ul {
                    li { a href=(names::CREATE_SET_URL) { "New set" } }
                    li { a href=(names::SETTINGS_URL) { "Settings" } }
                    li."secondary" { (utils::VERSION) }
                }
            }
        }
    }
}

fn main(body: Markup) -> Markup {
    html! {
        main { (body) }
    }
}

pub fn page(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light dark";

                title { (format!("{title} - Flashquiz")) }
            }

            body."container" {
                (header())
                (main(body))
            }
        }
    }
}
