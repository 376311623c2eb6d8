use leptos::prelude::*;

use crate::content::{SiteContent, SkillCategory};

#[component]
pub fn Skills() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let skills = &content.skills;

    view! {
        <section id="skills" class="py-24">
            <div class="container mx-auto px-6">
                <div class="text-center mb-16 section-content">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Technical Skills"</h2>
                    <p class="text-muted max-w-2xl mx-auto">{skills.intro.clone()}</p>
                </div>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {skills
                        .categories
                        .iter()
                        .map(|category| view! { <CategoryCard category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn CategoryCard(category: &'static SkillCategory) -> impl IntoView {
    view! {
        <div class="p-6 rounded-2xl border border-muted/30 hover:border-purple/50 transition-colors">
            <div class="w-12 h-12 rounded-lg flex items-center justify-center mb-6 bg-purple/10 text-purple">
                <i class=category.icon.clone()></i>
            </div>
            <h3 class="text-xl font-bold mb-4">{category.title.clone()}</h3>
            <div class="flex flex-wrap gap-2">
                {category
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="px-3 py-1 text-sm rounded-full bg-brightBlack border border-muted/50">
                                {skill.clone()}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
