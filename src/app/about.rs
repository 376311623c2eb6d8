use leptos::prelude::*;

use crate::content::SiteContent;

#[component]
pub fn About() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let about = &content.about;

    view! {
        <section id="about" class="py-24 relative">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center gap-16 section-content">
                    <div class="w-full md:w-1/2">
                        <img
                            src=about.image.clone()
                            alt="Profile"
                            loading="lazy"
                            class="rounded-2xl shadow-2xl w-full aspect-square object-cover"
                        />
                    </div>
                    <div class="w-full md:w-1/2">
                        <h2 class="text-3xl md:text-4xl font-bold mb-6">"About Me"</h2>
                        <div class="h-1 w-20 bg-purple mb-8 rounded-full"></div>
                        <div class="space-y-6 text-muted leading-relaxed text-lg">
                            {about
                                .paragraphs
                                .iter()
                                .map(|p| view! { <p>{p.clone()}</p> })
                                .collect_view()}
                        </div>
                        <div class="mt-8 grid grid-cols-2 gap-4">
                            {about
                                .stats
                                .iter()
                                .map(|stat| {
                                    view! {
                                        <div>
                                            <h3 class="font-semibold mb-2">{stat.label.clone()}</h3>
                                            <p class="text-muted">{stat.value.clone()}</p>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
