use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use watchranks_shared::{BingeStats, RankSnapshot, TERMINAL_RANK, rank_color};

use crate::api::Api;
use crate::config::OverlayConfig;
use crate::format::fmt_xp;
use crate::overlay::{Loadable, LoadingIndicator};
use crate::sync;

#[derive(Debug, Clone, PartialEq)]
struct RankView {
    me: RankSnapshot,
    /// Binge stats are best-effort; the card is simply omitted when the
    /// endpoint fails.
    binge: Option<BingeStats>,
}

/// Fetch the snapshot and binge stats in parallel. Only the snapshot is
/// required; a successful fetch also feeds the badges, the state store,
/// and (on a transition) the celebration, exactly like a background tick.
fn load(api: Api, data: RwSignal<Loadable<RankView>>, show_celebration: bool) {
    spawn_local(async move {
        let (me, binge) = futures::join!(api.fetch_me(), api.fetch_binge_stats());
        match me {
            Ok(me) => {
                sync::apply_snapshot(&me, show_celebration);
                data.set(Loadable::Ready(RankView {
                    me,
                    binge: binge.ok(),
                }));
            }
            Err(e) => {
                data.set(Loadable::Failed(format!(
                    "Could not load rank data ({e}). Is the backend running at {}?",
                    api.base()
                )));
            }
        }
    });
}

fn prestige(api: Api, data: RwSignal<Loadable<RankView>>, show_celebration: bool) {
    let Some(window) = web_sys::window() else {
        return;
    };
    // Declining the prompt is a normal no-op, not an error.
    let confirmed = window
        .confirm_with_message("Prestige resets your XP to the lowest rank. Continue?")
        .unwrap_or(false);
    if !confirmed {
        return;
    }

    spawn_local(async move {
        let message = match api.prestige().await {
            Ok(resp) => resp.message,
            Err(_) => "Prestige failed.".to_string(),
        };
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&message);
        }
        data.set(Loadable::Loading);
        load(api, data, show_celebration);
    });
}

#[component]
pub fn RankPanel(
    active: Memo<bool>,
    config: OverlayConfig,
    show_celebration: bool,
) -> impl IntoView {
    let api = Api::new(&config);
    let data = RwSignal::new(Loadable::Loading);
    let requested = RwSignal::new(false);

    // Lazy first load: the rank tab is active when the overlay opens, so
    // this fires immediately; other panels wait for their first switch.
    Effect::new({
        let api = api.clone();
        move || {
            if active.get() && !requested.get_untracked() {
                requested.set(true);
                load(api.clone(), data, show_celebration);
            }
        }
    });

    view! {
        {move || match data.get() {
            Loadable::Loading => view! { <LoadingIndicator /> }.into_any(),
            Loadable::Failed(msg) => view! { <p class="wr-error">{msg}</p> }.into_any(),
            Loadable::Ready(v) => {
                let api = api.clone();
                rank_details(v, api, data, show_celebration).into_any()
            }
        }}
    }
}

fn rank_details(
    v: RankView,
    api: Api,
    data: RwSignal<Loadable<RankView>>,
    show_celebration: bool,
) -> impl IntoView {
    let me = v.me;
    let color = rank_color(&me.rank_name);
    let at_terminal = me.rank_name == TERMINAL_RANK;
    let progress = me.progress_percent.clamp(0.0, 100.0);
    let xp_to_next = me.xp_to_next;

    let on_refresh = {
        let api = api.clone();
        move |_| {
            data.set(Loadable::Loading);
            load(api.clone(), data, show_celebration);
        }
    };
    let on_prestige = move |_| prestige(api.clone(), data, show_celebration);

    view! {
        <div class="wr-rank-grid">
            <div class="wr-hero">
                <div class="wr-rank-icon">{me.rank_icon.clone()}</div>
                <div class="wr-rank-name" style:color=color style:text-shadow=format!("0 0 20px {color}")>
                    {me.rank_name.clone()}
                </div>
                {(me.prestige_count > 0)
                    .then(|| {
                        view! {
                            <span class="wr-prestige-badge">
                                {format!("✨ Prestige {}", me.prestige_count)}
                            </span>
                        }
                    })}
                <div class="wr-progress-wrap">
                    <div class="wr-progress-labels">
                        <span>{me.rank_name.clone()}</span>
                        <span>{if xp_to_next > 0 { "Next rank" } else { "MAX" }}</span>
                    </div>
                    <div class="wr-progress-bar">
                        <div class="wr-progress-fill" style:width=format!("{progress}%")></div>
                    </div>
                    <div class="wr-progress-sub">
                        {if xp_to_next > 0 {
                            format!("{} XP to go", fmt_xp(xp_to_next))
                        } else {
                            format!("🎊 {TERMINAL_RANK}!")
                        }}
                    </div>
                </div>
            </div>

            <div class="wr-stats">
                <div class="wr-stat">
                    <div class="wr-stat-label">"Total XP"</div>
                    <div class="wr-stat-value">{format!("{} XP", fmt_xp(me.total_xp))}</div>
                </div>
                <div class="wr-stat">
                    <div class="wr-stat-label">"Leaderboard"</div>
                    <div class="wr-stat-value">{format!("#{}", me.leaderboard_position)}</div>
                </div>
                <div class="wr-stat">
                    <div class="wr-stat-label">"XP to next rank"</div>
                    <div class="wr-stat-value">
                        {if xp_to_next > 0 {
                            format!("{} XP", fmt_xp(xp_to_next))
                        } else {
                            "—".to_string()
                        }}
                    </div>
                    <div class="wr-stat-sub">
                        {if xp_to_next > 0 {
                            format!("{progress:.1}% progress")
                        } else {
                            format!("{TERMINAL_RANK}!")
                        }}
                    </div>
                </div>
                {v.binge
                    .map(|binge| {
                        view! {
                            <div class="wr-stat binge">
                                <div class="wr-stat-label">"🔥 Binge Days"</div>
                                <div class="wr-stat-value">
                                    {format!("{} days", binge.binge_days_total)}
                                </div>
                                <div class="wr-stat-sub">
                                    {format!("{} binge XP total", fmt_xp(binge.total_binge_xp))}
                                </div>
                            </div>
                        }
                    })}
                <div class="wr-stat">
                    <div class="wr-stat-label">"Prestige"</div>
                    <div class="wr-stat-value">{me.prestige_count}</div>
                </div>
                <div class="wr-btn-row">
                    <button class="wr-btn wr-btn-primary" on:click=on_refresh>
                        "↻ Refresh"
                    </button>
                    {at_terminal
                        .then(|| {
                            view! {
                                <button class="wr-btn wr-btn-warning" on:click=on_prestige>
                                    "😈 Prestige!"
                                </button>
                            }
                        })}
                </div>
            </div>
        </div>
    }
}
