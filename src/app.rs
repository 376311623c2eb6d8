mod about;
mod contact;
mod dom;
mod footer;
mod hero;
mod navbar;
mod projects;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_window_scroll;

use crate::content::site_content;

use about::About;
use contact::ContactSection;
use dom::scroll_to_offset;
use footer::Footer;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

/// Vertical window scroll offset, shared by every scroll-driven component.
#[derive(Debug, Clone, Copy)]
pub struct WindowScroll(pub Signal<f64>);

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="icon" type="image/svg+xml" href="/favicon.svg" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[component]
fn PortfolioPage() -> impl IntoView {
    let content = match site_content() {
        Ok(content) => content,
        Err(e) => {
            log::error!("{e}");
            return view! {
                <Title text="Unavailable" />
                <main class="min-h-screen flex items-center justify-center">
                    <p class="text-muted">"This page is unavailable right now."</p>
                </main>
            }
            .into_any();
        }
    };
    provide_context(content);
    provide_context(content.settings);

    let (_, scroll_y) = use_window_scroll();
    provide_context(WindowScroll(scroll_y));

    view! {
        <Title text=content.owner.name.clone() />
        <div class="min-h-screen w-full overflow-x-hidden">
            <Navbar />
            <div class="md:ml-72 flex flex-col min-h-screen">
                <main class="flex-1 w-full">
                    <Hero />
                    <About />
                    <Skills />
                    <Projects />
                    <ContactSection />
                </main>
                <Footer />
            </div>
            <BackToTop />
        </div>
    }
    .into_any()
}

#[component]
fn BackToTop() -> impl IntoView {
    let settings = expect_context::<crate::page::SiteSettings>();
    let WindowScroll(scroll_y) = expect_context::<WindowScroll>();

    view! {
        <Show when=move || settings.page.shows_back_to_top(scroll_y.get())>
            <button
                on:click=move |_| scroll_to_offset(0.0)
                class="fixed bottom-8 right-8 z-50 p-4 rounded-full shadow-lg bg-purple/80 hover:bg-purple border border-white/10"
                aria-label="Back to top"
            >
                <i class="extra-arrow-up"></i>
            </button>
        </Show>
    }
}
