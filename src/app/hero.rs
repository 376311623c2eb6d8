use leptos::{ev::MouseEvent, prelude::*};

use crate::content::SiteContent;
use crate::page::SiteSettings;
use crate::sections::SectionId;

use super::dom::scroll_to_section;
use super::WindowScroll;

#[component]
pub fn Hero() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let settings = expect_context::<SiteSettings>();
    let WindowScroll(scroll_y) = expect_context::<WindowScroll>();
    let hero = &content.hero;

    let jump = |id: SectionId| {
        move |ev: MouseEvent| {
            ev.prevent_default();
            scroll_to_section(id);
        }
    };
    let indicator_style =
        move || format!("opacity: {}", settings.page.indicator_opacity(scroll_y.get()));

    view! {
        <section
            id="home"
            class="min-h-screen flex items-center justify-center pt-20 md:pt-0 relative overflow-hidden"
        >
            <div class="container mx-auto px-6 z-10">
                <div class="max-w-4xl mx-auto text-center section-content">
                    <div class="inline-block px-4 py-1.5 mb-6 rounded-full border border-muted">
                        <span class="text-sm font-medium">{hero.badge.clone()}</span>
                    </div>
                    <h1 class="text-5xl md:text-7xl font-bold mb-6 tracking-tight leading-tight">
                        {hero.headline.clone()}
                        <span class="block text-purple">{hero.highlight.clone()}</span>
                    </h1>
                    <p class="text-xl text-muted mb-10 max-w-2xl mx-auto leading-relaxed">
                        {hero.intro.clone()}
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href=SectionId::Projects.href()
                            on:click=jump(SectionId::Projects)
                            class="px-8 py-4 rounded-lg bg-foreground text-background font-bold w-full sm:w-auto"
                        >
                            "View Work"
                        </a>
                        <a
                            href=SectionId::Contact.href()
                            on:click=jump(SectionId::Contact)
                            class="px-8 py-4 rounded-lg border border-muted w-full sm:w-auto font-medium"
                        >
                            "Contact Me"
                        </a>
                    </div>
                    <div class="mt-16 flex justify-center space-x-6">
                        {content
                            .socials
                            .iter()
                            .map(|social| {
                                view! {
                                    <a
                                        href=social.url.clone()
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="p-3 rounded-full border border-muted/50 text-muted hover:text-foreground"
                                        aria-label=social.platform.clone()
                                    >
                                        <i class=social.icon.clone()></i>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>

            <div
                style=indicator_style
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center gap-2 pointer-events-none"
            >
                <span class="text-xs font-medium tracking-widest text-muted uppercase">"Scroll"</span>
                <i class="extra-chevrons-down text-purple"></i>
            </div>
        </section>
    }
}
