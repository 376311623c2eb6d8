use leptos::prelude::*;

use crate::content::SiteContent;

#[component]
pub fn Footer() -> impl IntoView {
    let content = expect_context::<&'static SiteContent>();

    view! {
        <footer class="border-t border-muted/50 py-8">
            <div class="container mx-auto px-6 text-center">
                <p class="flex items-center justify-center gap-2 text-muted">
                    "Made with " <i class="extra-heart text-red"></i> " by "
                    {content.owner.name.clone()}
                </p>
                <p class="text-muted text-sm mt-2">
                    {format!("© {} All rights reserved.", env!("BUILD_YEAR"))}
                </p>
            </div>
        </footer>
    }
}
