//! Landing page hosting the theme toggle.

use leptos::prelude::*;

use crate::components::theme_toggle::ThemeToggle;

/// Single page: a toolbar with the toggle and a short themed body.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <span class="toolbar__title">"Nightswitch"</span>
                <span class="toolbar__spacer"></span>
                <ThemeToggle/>
            </header>

            <main class="home-page__body">
                <section class="card">
                    <h2>"Pick a side"</h2>
                    <p>
                        "The page follows your stored choice first and the system "
                        "color scheme otherwise. Flip the toggle and reload: it "
                        "comes back the way you left it."
                    </p>
                </section>
            </main>
        </div>
    }
}
