use std::time::Duration;

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::carousel::{ScheduledTask, Scheduler};
use crate::portfolio::Project;
use crate::state::PortfolioState;

/// Browser `setInterval`, cleared when the task is cancelled.
struct IntervalScheduler;

struct IntervalTask(Option<IntervalHandle>);

impl ScheduledTask for IntervalTask {
    fn cancel(&mut self) {
        if let Some(handle) = self.0.take() {
            handle.clear();
        }
    }
}

impl Scheduler for IntervalScheduler {
    type Task = IntervalTask;
    type Error = JsValue;

    fn repeat<F>(&self, period: Duration, tick: F) -> Result<IntervalTask, JsValue>
    where
        F: Fn() + Clone + 'static,
    {
        set_interval_with_handle(tick, period).map(|handle| IntervalTask(Some(handle)))
    }
}

const SLIDE_VISIBLE: &str = "absolute inset-0 w-full h-full object-cover transition-opacity duration-500 ease-in-out opacity-100";
const SLIDE_HIDDEN: &str = "absolute inset-0 w-full h-full object-cover transition-opacity duration-500 ease-in-out opacity-0";

#[component]
pub fn FeaturedProjects(projects: &'static [Project]) -> impl IntoView {
    let state = expect_context::<PortfolioState>();
    let carousel = state.carousel();

    // effects only run in the browser, so the interval never exists during SSR
    Effect::new(move |_| match state.start_autoplay(&IntervalScheduler) {
        Ok(Some(autoplay)) => on_cleanup(move || drop(autoplay)),
        Ok(None) => {}
        Err(e) => log::error!("couldn't start carousel interval: {e:?}"),
    });

    let active = move || carousel.with(|c| c.active(projects).copied());

    view! {
        <section class="mb-12">
            <h2 class="text-2xl font-semibold mb-4">"Featured Projects"</h2>
            <div class="relative h-[400px] rounded-lg overflow-hidden bg-muted">
                // every slide stays mounted so the outgoing one fades out while the next fades in
                {projects
                    .iter()
                    .enumerate()
                    .map(|(index, project)| {
                        view! {
                            <img
                                src=project.image
                                alt=project.title
                                aria-hidden=move || (!carousel.get().is_active(index)).to_string()
                                class=move || {
                                    if carousel.get().is_active(index) {
                                        SLIDE_VISIBLE
                                    } else {
                                        SLIDE_HIDDEN
                                    }
                                }
                            />
                        }
                    })
                    .collect_view()}
                <div class="absolute inset-0 bg-gradient-to-t from-black to-transparent" />
                {move || {
                    active()
                        .map(|project| {
                            view! {
                                <div class="absolute bottom-0 left-0 p-6 text-white">
                                    <h3 class="text-2xl font-bold mb-2">{project.title}</h3>
                                    <p class="mb-4">{project.description}</p>
                                    <a
                                        href=project.live_link
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="inline-flex items-center rounded-md bg-secondary px-3 py-1.5 text-sm text-secondary-foreground hover:bg-secondary/80"
                                    >
                                        "View Project"
                                        <span class="ml-2" aria-hidden="true">
                                            "›"
                                        </span>
                                    </a>
                                </div>
                            }
                        })
                }}
            </div>
        </section>
    }
}
