use leptos::{html, prelude::*};

use crate::portfolio::ProfileInfo;
use crate::state::image_load_failed;

#[component]
pub fn ProfileHeader(profile: &'static ProfileInfo) -> impl IntoView {
    view! {
        <header class="mb-12 text-center">
            <Avatar profile />
            <h1 class="text-4xl font-bold mb-2">{profile.name}</h1>
            <p class="text-xl text-muted-foreground mb-4">{profile.title}</p>
            <div class="flex justify-center space-x-4">
                <span class="inline-flex items-center rounded-md border border-muted px-3 py-1 text-sm">
                    <i class="devicon-linkedin-plain mr-2" />
                    {format!("{}+ connections", profile.connections)}
                </span>
                <span class="inline-flex items-center rounded-md border border-muted px-3 py-1 text-sm">
                    <span class="mr-2" aria-hidden="true">"📖"</span>
                    {format!("{} endorsements", profile.endorsements)}
                </span>
            </div>
        </header>
    }
}

/// Profile picture, replaced by the name's initials if the image can't be loaded.
#[component]
fn Avatar(profile: &'static ProfileInfo) -> impl IntoView {
    let (broken, set_broken) = signal(false);
    let img_ref = NodeRef::<html::Img>::new();

    // the error event may have fired before hydration attached `on:error`
    Effect::new(move |_| {
        if let Some(img) = img_ref.get() {
            if image_load_failed(img.complete(), img.natural_width()) {
                log::debug!("avatar failed to load before hydration, showing initials");
                set_broken.set(true);
            }
        }
    });

    view! {
        <div class="w-24 h-24 mx-auto mb-4 rounded-full overflow-hidden bg-muted flex items-center justify-center">
            <Show
                when=move || !broken.get()
                fallback=move || {
                    view! { <span class="text-2xl font-semibold">{profile.initials()}</span> }
                }
            >
                <img
                    node_ref=img_ref
                    src=profile.avatar
                    alt=profile.name
                    class="w-full h-full object-cover"
                    on:error=move |_| set_broken.set(true)
                />
            </Show>
        </div>
    }
}
