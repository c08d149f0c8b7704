mod contact;
mod listings;
mod profile;
mod showcase;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;

use crate::portfolio::{BLOG_POSTS, PROFILE, PROJECTS, SKILLS};
use crate::state::PortfolioState;
use contact::ContactSection;
use listings::Listings;
use profile::ProfileHeader;
use showcase::FeaturedProjects;
use skills::SkillsChart;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-background text-foreground font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(PortfolioState::new(PROJECTS.len()));

    view! {
        <Title formatter=|title| format!("{} - {title}", PROFILE.name) />
        <Title text="Portfolio" />
        <Meta name="description" content=PROFILE.title />
        <main class="container mx-auto px-4 py-8">
            <ProfileHeader profile=&PROFILE />
            <FeaturedProjects projects=PROJECTS />
            <SkillsChart skills=SKILLS />
            <Listings projects=PROJECTS posts=BLOG_POSTS />
            <ContactSection />
        </main>
    }
}
