//! Hello World Entry Point
//!
//! Smallest possible mount of the component library.

use leptos::prelude::*;

#[component]
fn HelloWorld() -> impl IntoView {
    view! { <p>"Hello world, Leptos here!"</p> }
}

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(HelloWorld);
}
