use std::collections::HashMap;
use std::time::Duration;

use leptos::{either::Either, ev::SubmitEvent, prelude::*};

use crate::contact::{ContactForm, Field, SubmitOutcome, TimerKind, Timers};
use crate::content::SiteContent;
use crate::page::SiteSettings;

/// `Timers` backed by `setTimeout`; an elapsed timer is fed back into the form.
#[derive(Clone, Copy)]
struct BrowserTimers {
    form: RwSignal<ContactForm>,
    handles: StoredValue<HashMap<TimerKind, TimeoutHandle>>,
}

impl BrowserTimers {
    fn fire(self, kind: TimerKind) {
        self.handles.try_update_value(|h| h.remove(&kind));
        let mut timers = self;
        self.form.try_update(|form| form.on_timer(kind, &mut timers));
    }

    fn dispose(self) {
        let mut timers = self;
        self.form.try_with_untracked(|form| form.dispose(&mut timers));
    }
}

impl Timers for BrowserTimers {
    fn start(&mut self, kind: TimerKind, delay: Duration) {
        self.cancel(kind);
        let this = *self;
        match set_timeout_with_handle(move || this.fire(kind), delay) {
            Ok(handle) => {
                self.handles.try_update_value(|h| h.insert(kind, handle));
            }
            Err(e) => log::error!("couldn't start {kind:?} timer: {e:?}"),
        }
    }

    fn cancel(&mut self, kind: TimerKind) {
        if let Some(Some(handle)) = self.handles.try_update_value(|h| h.remove(&kind)) {
            handle.clear();
        }
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();
    let settings = expect_context::<SiteSettings>();
    let info = &content.contact;

    let form = RwSignal::new(ContactForm::new(settings.contact));
    let timers = BrowserTimers {
        form,
        handles: StoredValue::new(HashMap::new()),
    };
    on_cleanup(move || timers.dispose());

    let on_edit = Callback::new(move |(field, value): (Field, String)| {
        let mut timers = timers;
        form.update(|f| f.edit(field, value, &mut timers));
    });

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let mut timers = timers;
        let outcome = form.try_update(|f| f.submit(&mut timers));
        if outcome == Some(SubmitOutcome::Busy) {
            log::debug!("contact form already sending");
        }
    };

    let is_submitting = move || form.with(ContactForm::is_submitting);

    view! {
        <section id="contact" class="py-24">
            <div class="container mx-auto px-6">
                <div class="max-w-5xl mx-auto">
                    <div class="text-center mb-16 section-content">
                        <h2 class="text-3xl md:text-4xl font-bold mb-4">"Get In Touch"</h2>
                        <p class="text-muted">{info.intro.clone()}</p>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-12">
                        <div>
                            <h3 class="text-2xl font-bold mb-6">"Contact Information"</h3>
                            <div class="space-y-6">
                                <InfoRow icon="extra-email" title="Email" value=info.email.clone() />
                                <InfoRow icon="extra-phone" title="Phone" value=info.phone.clone() />
                                <InfoRow
                                    icon="extra-location"
                                    title="Location"
                                    value=info.location.clone()
                                />
                            </div>
                            <div class="mt-12 p-6 rounded-2xl border border-muted/30">
                                <p class="italic">{format!("\"{}\"", info.quote)}</p>
                                <p class="text-muted mt-2">{format!("- {}", info.quote_author)}</p>
                            </div>
                        </div>

                        <div class="p-8 rounded-2xl border border-muted/30 shadow-xl">
                            <form class="space-y-6" on:submit=on_submit novalidate=true>
                                <FormField
                                    form
                                    on_edit
                                    field=Field::Name
                                    label="Name"
                                    placeholder="Your name"
                                />
                                <FormField
                                    form
                                    on_edit
                                    field=Field::Email
                                    label="Email"
                                    placeholder="your@email.com"
                                />
                                <FormField
                                    form
                                    on_edit
                                    field=Field::Message
                                    label="Message"
                                    placeholder="How can I help you?"
                                />

                                <button
                                    type="submit"
                                    disabled=is_submitting
                                    class=move || {
                                        if is_submitting() {
                                            "w-full py-3.5 font-bold rounded-lg bg-brightBlack text-muted cursor-not-allowed"
                                        } else {
                                            "w-full py-3.5 font-bold rounded-lg bg-purple/80 hover:bg-purple text-foreground transition-all"
                                        }
                                    }
                                >
                                    {move || if is_submitting() { "Sending..." } else { "Send Message" }}
                                </button>

                                <Show when=move || form.with(ContactForm::is_success)>
                                    <div
                                        class="p-4 rounded-lg flex items-center gap-3 bg-green/10 border border-green/20 text-green"
                                        role="status"
                                    >
                                        <i class="extra-check"></i>
                                        <span class="font-medium">"Message sent successfully!"</span>
                                    </div>
                                </Show>
                            </form>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn InfoRow(icon: &'static str, title: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="p-3 rounded-lg bg-purple/10 text-purple">
                <i class=icon></i>
            </div>
            <div>
                <h4 class="text-lg font-medium">{title}</h4>
                <p class="text-muted">{value}</p>
            </div>
        </div>
    }
}

#[component]
fn FormField(
    form: RwSignal<ContactForm>,
    on_edit: Callback<(Field, String)>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
) -> impl IntoView {
    let id = field.as_str();
    let value = move || form.with(|f| f.fields().get(field).to_string());
    let error = move || form.with(|f| f.errors().message(field));
    let has_error = move || form.with(|f| f.errors().has(field));
    let class = move || {
        if has_error() {
            "w-full px-4 py-3 rounded-lg border bg-background text-foreground focus:outline-none focus:ring-2 border-red focus:ring-red/50"
        } else {
            "w-full px-4 py-3 rounded-lg border bg-background text-foreground focus:outline-none focus:ring-2 border-muted focus:ring-purple/50"
        }
    };

    let input = if field == Field::Message {
        Either::Left(view! {
            <textarea
                id=id
                rows="4"
                class=move || format!("{} resize-none", class())
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_edit.run((field, event_target_value(&ev)))
                aria-invalid=move || has_error().then_some("true")
            ></textarea>
        })
    } else {
        Either::Right(view! {
            <input
                id=id
                type=if field == Field::Email { "email" } else { "text" }
                class=class
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| on_edit.run((field, event_target_value(&ev)))
                aria-invalid=move || has_error().then_some("true")
            />
        })
    };

    view! {
        <div>
            <label for=id class="block text-sm font-medium text-muted mb-2">
                {label}
            </label>
            <div class="relative">
                {input}
                <Show when=has_error>
                    <i class="extra-alert absolute right-4 top-3 text-red"></i>
                </Show>
            </div>
            <Show when=has_error>
                <p class="text-sm text-red mt-1">{error}</p>
            </Show>
        </div>
    }
}
