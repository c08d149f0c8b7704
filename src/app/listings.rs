use leptos::{either::Either, prelude::*};

use crate::portfolio::{BlogPost, Project};
use crate::state::PortfolioState;
use crate::tab::Tab;

const TAB_ACTIVE: &str = "rounded-sm px-3 py-1.5 text-sm font-medium bg-background text-foreground shadow";
const TAB_INACTIVE: &str =
    "rounded-sm px-3 py-1.5 text-sm font-medium text-muted-foreground hover:text-foreground";

#[component]
pub fn Listings(projects: &'static [Project], posts: &'static [BlogPost]) -> impl IntoView {
    let state = expect_context::<PortfolioState>();

    view! {
        <div class="space-y-4">
            <div role="tablist" class="grid w-full grid-cols-2 rounded-md bg-muted p-1">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                type="button"
                                role="tab"
                                id=format!("tab-{}", tab.value())
                                aria-selected=move || (state.active_tab() == tab).to_string()
                                class=move || {
                                    if state.active_tab() == tab { TAB_ACTIVE } else { TAB_INACTIVE }
                                }
                                on:click=move |_| state.select_tab(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div role="tabpanel" class="space-y-4">
                {move || match state.active_tab() {
                    Tab::Projects => {
                        Either::Left(
                            projects
                                .iter()
                                .map(|project| view! { <ProjectCard project=*project /> })
                                .collect_view(),
                        )
                    }
                    Tab::Blog => {
                        Either::Right(
                            posts
                                .iter()
                                .map(|post| view! { <BlogCard post=*post /> })
                                .collect_view(),
                        )
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    view! {
        <div class="overflow-hidden rounded-lg border border-muted shadow-sm">
            <div class="md:flex h-[300px]">
                <div class="md:w-1/3 relative h-full">
                    <img
                        src=project.image
                        alt=project.title
                        class="absolute inset-0 w-full h-full object-cover object-center"
                    />
                </div>
                <div class="md:w-2/3 flex flex-col h-full p-6">
                    <h3 class="text-2xl font-semibold">{project.title}</h3>
                    <p class="text-sm text-muted-foreground mt-1">{project.description}</p>
                    <div class="flex-grow mt-4">
                        <div class="flex flex-wrap gap-2 mb-4">
                            {project
                                .tools
                                .iter()
                                .map(|tool| {
                                    view! {
                                        <span class="rounded-md px-2 py-1 bg-secondary text-xs font-semibold">
                                            {*tool}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                        <div class="flex space-x-4">
                            <a
                                href=project.github_link
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center rounded-md border border-muted px-3 py-1.5 text-sm"
                            >
                                <i class="devicon-github-plain mr-2" />
                                "GitHub"
                            </a>
                            <a
                                href=project.live_link
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center rounded-md border border-muted px-3 py-1.5 text-sm"
                            >
                                <span class="mr-2" aria-hidden="true">"↗"</span>
                                "Live Demo"
                            </a>
                        </div>
                    </div>
                    <div class="flex space-x-4 text-sm text-muted-foreground">
                        <span class="flex items-center">
                            <span class="mr-1" aria-hidden="true">"★"</span>
                            {format!("{} stars", project.metrics.stars)}
                        </span>
                        <span class="flex items-center">
                            <span class="mr-1" aria-hidden="true">"👁"</span>
                            {format!("{} views", project.metrics.views)}
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn BlogCard(post: BlogPost) -> impl IntoView {
    let (day, month) = match post.published() {
        Ok(date) => (date.format("%d").to_string(), date.format("%B %Y").to_string()),
        Err(e) => {
            log::warn!("{e}");
            (String::new(), post.date.to_string())
        }
    };

    view! {
        <div class="group rounded-lg border border-muted hover:shadow-lg transition-all duration-300">
            <div class="md:flex items-center">
                <div class="md:w-1/4 p-6 flex flex-col items-center justify-center border-r border-muted">
                    <div class="text-3xl font-bold text-primary">{day}</div>
                    <div class="text-sm text-muted-foreground">{month}</div>
                </div>
                <div class="md:w-3/4 p-6">
                    <h3 class="text-2xl font-semibold group-hover:text-primary transition-colors">
                        {post.title}
                    </h3>
                    <p class="mt-2 line-clamp-2 text-sm text-muted-foreground">{post.excerpt}</p>
                    <div class="flex justify-between items-center mt-4">
                        <div class="flex items-center space-x-4">
                            <span class="inline-flex items-center rounded-md px-2 py-1 bg-secondary text-xs font-semibold">
                                <span class="mr-2" aria-hidden="true">"📖"</span>
                                "5 min read"
                            </span>
                            <span class="rounded-md px-2 py-1 border border-muted text-xs font-semibold">
                                {post.tag()}
                            </span>
                        </div>
                        <span class="inline-flex items-center text-sm group-hover:translate-x-1 transition-transform">
                            "Read more"
                            <span class="ml-2" aria-hidden="true">"›"</span>
                        </span>
                    </div>
                </div>
            </div>
        </div>
    }
}
