//! Static Pages
//!
//! Renders the fixed content of reports, analytics, help and about.

use leptos::*;

use health_monitor::pages::{Card, Layout};
use health_monitor::StaticPage;

/// Fixed page content laid out as a list, grid or accented cards
#[component]
pub fn StaticContent(content: StaticPage) -> impl IntoView {
    let container = match content.layout {
        Layout::Grid => "grid grid-cols-1 md:grid-cols-2 gap-4",
        Layout::List | Layout::Accented => "space-y-4",
    };

    view! {
        <div class="space-y-4">
            {content.group.map(|group| view! {
                <h2 class="text-lg font-semibold text-gray-900">{group}</h2>
            })}
            <div class=container>
                {content
                    .cards
                    .iter()
                    .map(|card| view! { <InfoCard card=*card layout=content.layout /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn InfoCard(card: Card, layout: Layout) -> impl IntoView {
    let accent = match (layout, card.accent) {
        (Layout::Accented, Some(color)) => format!(" border-l-4 border-{}-500", color),
        _ => String::new(),
    };

    view! {
        <div class=format!("bg-white rounded-xl shadow-sm border border-gray-200 p-5{}", accent)>
            <div class="flex items-center justify-between gap-4">
                <div>
                    <h3 class="font-semibold text-gray-900">{card.heading}</h3>
                    <p class="text-sm text-gray-600 mt-1">{card.body}</p>
                </div>
                {card.action.map(|action| view! {
                    <button class="px-4 py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg text-sm font-medium transition-colors">
                        {action}
                    </button>
                })}
            </div>
        </div>
    }
}
