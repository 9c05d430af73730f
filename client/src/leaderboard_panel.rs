use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use watchranks_shared::{RankSnapshot, rank_color};

use crate::api::Api;
use crate::config::OverlayConfig;
use crate::format::{fmt_xp, medal, tier_class};
use crate::overlay::{Loadable, LoadingIndicator};

fn load(api: Api, data: RwSignal<Loadable<Vec<RankSnapshot>>>) {
    spawn_local(async move {
        match api.fetch_leaderboard().await {
            Ok(entries) => data.set(Loadable::Ready(entries)),
            Err(e) => data.set(Loadable::Failed(format!("Could not load leaderboard ({e})."))),
        }
    });
}

#[component]
pub fn LeaderboardPanel(active: Memo<bool>, config: OverlayConfig) -> impl IntoView {
    let api = Api::new(&config);
    let my_id = api.user_id().to_string();
    let data = RwSignal::new(Loadable::Loading);
    let requested = RwSignal::new(false);

    Effect::new({
        let api = api.clone();
        move || {
            if active.get() && !requested.get_untracked() {
                requested.set(true);
                load(api.clone(), data);
            }
        }
    });

    let on_refresh = move |_| {
        data.set(Loadable::Loading);
        load(api.clone(), data);
    };

    view! {
        <div class="wr-section-title">"🏆 Server Leaderboard"</div>
        {move || match data.get() {
            Loadable::Loading => view! { <LoadingIndicator /> }.into_any(),
            Loadable::Failed(msg) => view! { <p class="wr-error">{msg}</p> }.into_any(),
            Loadable::Ready(entries) if entries.is_empty() => {
                view! { <p class="wr-lb-empty">"No watch activity recorded yet."</p> }.into_any()
            }
            Loadable::Ready(entries) => {
                // Backend order is authoritative; positions are just the
                // row numbers.
                let my_id = my_id.clone();
                view! {
                    <div class="wr-lb-header">
                        <span>"#"</span>
                        <span>"Player"</span>
                        <span>"Rank"</span>
                        <span>"XP"</span>
                    </div>
                    {entries
                        .into_iter()
                        .enumerate()
                        .map(|(i, entry)| leaderboard_row(i + 1, entry, &my_id))
                        .collect_view()}
                }
                    .into_any()
            }
        }}
        <div class="wr-btn-row">
            <button class="wr-btn wr-btn-secondary" on:click=on_refresh>
                "↻ Refresh"
            </button>
        </div>
    }
}

fn leaderboard_row(position: usize, entry: RankSnapshot, my_id: &str) -> impl IntoView + use<> {
    let is_me = !my_id.is_empty() && entry.user_id == my_id;
    let color = rank_color(&entry.rank_name);

    view! {
        <div class="wr-lb-row" class:me=is_me>
            <span class=format!("wr-lb-pos {}", tier_class(position))>{medal(position)}</span>
            <div class="wr-lb-user">
                <span class="wr-lb-avatar">{entry.rank_icon.clone()}</span>
                <span class="wr-lb-name">{entry.username.clone()}</span>
                {is_me.then(|| view! { <span class="wr-lb-you">"(you)"</span> })}
                {(entry.prestige_count > 0)
                    .then(|| {
                        view! {
                            <span class="wr-lb-pbadge">
                                {format!("P{}", entry.prestige_count)}
                            </span>
                        }
                    })}
            </div>
            <span class="wr-lb-rank" style:color=color>
                {entry.rank_name.clone()}
            </span>
            <span class="wr-lb-xp">{format!("{} XP", fmt_xp(entry.total_xp))}</span>
        </div>
    }
}
