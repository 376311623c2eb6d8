use leptos::{ev::MouseEvent, prelude::*};

use crate::content::{Project, SiteContent};
use crate::page::SiteSettings;
use crate::sections::SectionId;

use super::dom::{scroll_to_offset, section_viewport_top};
use super::WindowScroll;

#[component]
pub fn Projects() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let settings = expect_context::<SiteSettings>();
    let WindowScroll(scroll_y) = expect_context::<WindowScroll>();
    let projects = &content.projects;
    let (initial, more) = settings.page.split_projects(&projects.items);
    let has_more = !more.is_empty();

    let (show_all, set_show_all) = signal(false);

    let toggle = move |_: MouseEvent| {
        if show_all.get_untracked() {
            // collapsing: bring the section top back under the navbar
            if let Some(top) = section_viewport_top(SectionId::Projects) {
                scroll_to_offset(
                    settings
                        .page
                        .section_scroll_target(top, scroll_y.get_untracked()),
                );
            }
        }
        set_show_all.update(|v| *v = !*v);
    };

    view! {
        <section id="projects" class="py-24">
            <div class="container mx-auto px-6">
                <div class="mb-16 section-content">
                    <h2 class="text-3xl md:text-4xl font-bold mb-4">"Featured Projects"</h2>
                    <p class="text-muted max-w-2xl">{projects.intro.clone()}</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                    {initial.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>

                <Show when=move || show_all.get()>
                    <div class="pt-8 grid grid-cols-1 md:grid-cols-2 gap-8">
                        {more.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                    </div>
                </Show>

                <div class="mt-12 text-center">
                    <Show when=move || has_more>
                        <button
                            on:click=toggle
                            class="inline-flex items-center gap-2 px-6 py-3 border border-muted rounded-full font-medium hover:border-purple/50 transition-all"
                        >
                            {move || if show_all.get() { "Show Less" } else { "View All Projects" }}
                            <i class=move || {
                                if show_all.get() { "extra-chevron-up" } else { "extra-chevron-down" }
                            }></i>
                        </button>
                    </Show>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <div class="group relative rounded-2xl overflow-hidden border border-muted/30 hover:border-muted transition-all h-full">
            <div class="aspect-video overflow-hidden">
                <img
                    src=project.image.clone()
                    alt=project.title.clone()
                    loading="lazy"
                    class="w-full h-full object-cover"
                />
                <div class="absolute inset-0 bg-background/80 opacity-0 group-hover:opacity-100 transition-opacity flex items-center justify-center gap-4">
                    <a
                        href=project.link.clone()
                        class="p-3 rounded-full bg-foreground text-background"
                        title="View Live"
                    >
                        <i class="extra-link"></i>
                    </a>
                    <a
                        href=project.github.clone()
                        class="p-3 rounded-full border border-foreground/20"
                        title="View Code"
                    >
                        <i class="devicon-github-plain"></i>
                    </a>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-bold mb-2">{project.title.clone()}</h3>
                <p class="text-muted mb-4 line-clamp-2">{project.description.clone()}</p>
                <div class="flex flex-wrap gap-2">
                    {project
                        .tags
                        .iter()
                        .map(|tag| {
                            view! {
                                <span class="px-2 py-1 text-xs font-medium rounded text-purple bg-purple/10">
                                    {tag.clone()}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
