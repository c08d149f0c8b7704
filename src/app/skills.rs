use leptos::prelude::*;

use crate::portfolio::Skill;

#[component]
pub fn SkillsChart(skills: &'static [Skill]) -> impl IntoView {
    // bars render at 0% and grow once hydrated
    let (grown, set_grown) = signal(false);
    Effect::new(move |_| set_grown.set(true));

    view! {
        <section class="mb-12">
            <h2 class="text-2xl font-semibold mb-4">"Skills"</h2>
            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                {skills
                    .iter()
                    .map(|skill| {
                        let level = skill.level();
                        view! {
                            <div class="bg-muted rounded-lg p-4">
                                <div class="flex justify-between mb-2">
                                    <span class="font-medium">{skill.name}</span>
                                    <span>{format!("{level}%")}</span>
                                </div>
                                <div class="w-full bg-muted-foreground/20 rounded-full h-2.5">
                                    <div
                                        class="bg-primary h-2.5 rounded-full transition-[width] duration-1000 delay-500 ease-out"
                                        style:width=move || {
                                            if grown.get() { format!("{level}%") } else { "0%".to_string() }
                                        }
                                    />
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
