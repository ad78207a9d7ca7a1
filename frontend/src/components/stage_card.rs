use shared::InformationalRecord;
use yew::prelude::*;

use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct StageCardProps {
    pub record: InformationalRecord,
    #[prop_or_default]
    pub show_title: bool,
}

#[derive(Properties, PartialEq)]
struct StageSectionProps {
    heading: AttrValue,
    items: Vec<String>,
}

#[function_component(StageSection)]
fn stage_section(props: &StageSectionProps) -> Html {
    html! {
        <h3 class="border-2 rounded-lg py-6 px-6 text-white font-semibold">
            <strong class="text-gray-700">{format!("{}:", props.heading)}</strong>
            <ul>
                { for props.items.iter().map(|item| html! { <li>{item}</li> }) }
            </ul>
        </h3>
    }
}

/// Revealed stage card with a fade-in entrance.
#[function_component(StageCard)]
pub fn stage_card(props: &StageCardProps) -> Html {
    let record = &props.record;
    html! {
        <div class="bg-gradient-to-r from-green-300 via-blue-500 mt-16 to-purple-600 py-4">
            <div class="mt-12 min-h-screen">
                <div class={classes!(
                    Config::FONT_CLASS, "stage-card", "animate-fade-in-down",
                    "flex", "flex-col", "justify-center", "items-center", "text-xl", "mx-20", "gap-10", "mt-10"
                )}>
                    if props.show_title {
                        <h1 class="text-4xl font-extrabold">{&record.title}</h1>
                    }
                    <h2 class="border-2 rounded-lg py-6 px-6 text-white font-semibold">
                        <strong class="text-gray-700">{"Short Description:"}</strong>
                        {" "}{&record.short_description}
                    </h2>
                    <StageSection heading="Symptoms" items={record.symptoms.clone()} />
                    <StageSection heading="Suggestions" items={record.suggestions.clone()} />
                    <StageSection heading="Future Precautions" items={record.future_precautions.clone()} />
                </div>
            </div>
        </div>
    }
}
