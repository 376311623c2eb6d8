use leptos::{ev::MouseEvent, prelude::*};
use leptos_use::{use_window_size, UseWindowSizeReturn};

use crate::content::SiteContent;
use crate::page::SiteSettings;
use crate::sections::{ScrollTracker, SectionId};

use super::dom::{scroll_to_section, DomLayout};
use super::WindowScroll;

fn nav_icon(id: SectionId) -> &'static str {
    match id {
        SectionId::Home => "extra-home",
        SectionId::About => "extra-user",
        SectionId::Skills => "extra-cpu",
        SectionId::Projects => "extra-laptop",
        SectionId::Contact => "extra-email",
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let settings = expect_context::<SiteSettings>();
    let WindowScroll(scroll_y) = expect_context::<WindowScroll>();
    let UseWindowSizeReturn { height, .. } = use_window_size();

    let (is_open, set_is_open) = signal(false);
    let (active, set_active) = signal(SectionId::Home);
    let tracker = StoredValue::new(ScrollTracker::new(settings.scroll));

    // effects only run in the browser: once on mount, then on every scroll or resize
    Effect::new(move |_| {
        let y = scroll_y.get();
        height.track();
        let changed = tracker
            .try_update_value(|t| t.observe(y, &DomLayout))
            .flatten();
        if let Some(next) = changed {
            set_active.set(next);
        }
    });

    let on_navigate = Callback::new(move |id: SectionId| {
        set_is_open.set(false);
        scroll_to_section(id);
    });

    view! {
        <button
            class="fixed top-5 right-5 z-50 p-3 rounded-full bg-background/80 border border-muted text-foreground shadow-xl md:hidden"
            on:click=move |_| set_is_open.update(|open| *open = !*open)
            aria-label="Toggle menu"
        >
            <i class=move || if is_open.get() { "extra-close" } else { "extra-menu" }></i>
        </button>

        <aside class="hidden md:flex fixed left-0 top-0 h-screen w-72 bg-background border-r border-muted/50 z-40 flex-col overflow-y-auto">
            <SidebarContent active on_navigate />
        </aside>

        <Show when=move || is_open.get()>
            <div
                class="fixed inset-0 bg-black/60 z-40 md:hidden"
                on:click=move |_| set_is_open.set(false)
            ></div>
            <aside class="fixed left-0 top-0 h-screen w-72 bg-background border-r border-muted z-50 md:hidden overflow-y-auto">
                <SidebarContent active on_navigate />
            </aside>
        </Show>
    }
}

#[component]
fn SidebarContent(active: ReadSignal<SectionId>, on_navigate: Callback<SectionId>) -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let owner = &content.owner;

    let link = move |id: SectionId| {
        let is_active = move || active.get() == id;
        view! {
            <a
                href=id.href()
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    on_navigate.run(id);
                }
                class=move || {
                    if is_active() {
                        "relative flex items-center space-x-3 p-4 rounded-xl transition-all duration-300 text-purple bg-purple/10"
                    } else {
                        "relative flex items-center space-x-3 p-4 rounded-xl transition-all duration-300 text-muted hover:bg-white/5 hover:text-foreground"
                    }
                }
                aria-current=move || is_active().then_some("true")
            >
                <i class=nav_icon(id)></i>
                <span class="font-medium tracking-wide">{id.label()}</span>
            </a>
        }
    };

    view! {
        <div class="flex flex-col h-full p-6">
            <a
                href=SectionId::Home.href()
                class="flex items-center space-x-3 mb-10"
                on:click=move |ev: MouseEvent| {
                    ev.prevent_default();
                    on_navigate.run(SectionId::Home);
                }
            >
                <div class="p-2.5 rounded-xl bg-purple/20">
                    <i class="extra-code text-foreground"></i>
                </div>
                <div>
                    <span class="block text-xl font-bold leading-none">{owner.brand.clone()}</span>
                    <span class="text-xs text-muted font-medium">"Portfolio"</span>
                </div>
            </a>

            <nav class="flex-1 flex flex-col space-y-2">
                {SectionId::ALL.into_iter().map(link).collect_view()}
            </nav>

            <div class="pt-6 border-t border-muted/50">
                <div class="flex items-center space-x-3 mb-6">
                    <img
                        src=owner.avatar.clone()
                        alt=owner.name.clone()
                        loading="lazy"
                        class="w-10 h-10 rounded-full object-cover"
                    />
                    <div>
                        <p class="text-sm font-semibold">{owner.name.clone()}</p>
                        <p class="text-xs text-muted">{owner.role.clone()}</p>
                    </div>
                </div>
                <div class="flex justify-center items-center gap-2 mb-6">
                    {content
                        .socials
                        .iter()
                        .map(|social| {
                            view! {
                                <a
                                    href=social.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="p-2 rounded-lg text-muted hover:text-foreground hover:bg-white/5 transition-colors"
                                    aria-label=social.platform.clone()
                                >
                                    <i class=social.icon.clone()></i>
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
                <p class="text-xs text-muted text-center">
                    {format!("© {} {}. All rights reserved.", env!("BUILD_YEAR"), owner.brand)}
                </p>
            </div>
        </div>
    }
}
