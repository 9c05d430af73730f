use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use watchranks_shared::{NO_DATA_XP, RankDefinition, RankSnapshot, classify, rank_color};

use crate::api::Api;
use crate::config::OverlayConfig;
use crate::format::fmt_xp;
use crate::overlay::{Loadable, LoadingIndicator};

#[derive(Debug, Clone, PartialEq)]
struct CatalogView {
    ranks: Vec<RankDefinition>,
    current_rank: Option<String>,
    total_xp: i64,
}

/// Rank and XP used for classification. A failed snapshot fetch yields the
/// sentinel, which locks every entry; stale data must never mark a rank
/// achieved.
fn identity_fields(me: Option<&RankSnapshot>) -> (Option<String>, i64) {
    match me {
        Some(m) => (Some(m.rank_name.clone()), m.total_xp),
        None => (None, NO_DATA_XP),
    }
}

/// The ladder itself is required; the caller's own snapshot is best-effort.
fn load(api: Api, data: RwSignal<Loadable<CatalogView>>) {
    spawn_local(async move {
        let (ranks, me) = futures::join!(api.fetch_ranks(), api.fetch_me());
        match ranks {
            Ok(ranks) => {
                let (current_rank, total_xp) = identity_fields(me.ok().as_ref());
                data.set(Loadable::Ready(CatalogView {
                    current_rank,
                    total_xp,
                    ranks,
                }));
            }
            Err(e) => data.set(Loadable::Failed(format!("Could not load the rank list ({e})."))),
        }
    });
}

#[component]
pub fn CatalogPanel(active: Memo<bool>, config: OverlayConfig) -> impl IntoView {
    let api = Api::new(&config);
    let data = RwSignal::new(Loadable::Loading);
    let requested = RwSignal::new(false);

    Effect::new(move || {
        if active.get() && !requested.get_untracked() {
            requested.set(true);
            load(api.clone(), data);
        }
    });

    view! {
        <div class="wr-section-title">"📋 All Ranks"</div>
        {move || match data.get() {
            Loadable::Loading => view! { <LoadingIndicator /> }.into_any(),
            Loadable::Failed(msg) => view! { <p class="wr-error">{msg}</p> }.into_any(),
            Loadable::Ready(v) => {
                let current_rank = v.current_rank.clone();
                let total_xp = v.total_xp;
                view! {
                    <div class="wr-ranks-grid">
                        {v.ranks
                            .into_iter()
                            .map(|def| rank_card(def, current_rank.as_deref(), total_xp))
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }
        }}
    }
}

fn rank_card(def: RankDefinition, current_rank: Option<&str>, total_xp: i64) -> impl IntoView + use<> {
    let status = classify(&def, current_rank, total_xp);
    let color = rank_color(&def.name);

    view! {
        <div class=format!("wr-rank-card {}", status.css_class())>
            <div class="wr-rc-icon">{def.icon.clone()}</div>
            <div class="wr-rc-name" style:color=color>
                {def.name.clone()}
            </div>
            <div class="wr-rc-xp">{format!("{} XP", fmt_xp(def.xp_required))}</div>
            <span class=format!("wr-rc-badge {}", status.css_class())>{status.badge_label()}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use watchranks_shared::{NO_DATA_XP, RankDefinition, RankSnapshot, RankStatus, classify};

    use super::identity_fields;

    fn snapshot(rank: &str, xp: i64) -> RankSnapshot {
        RankSnapshot {
            user_id: "u1".to_string(),
            username: "zer0".to_string(),
            total_xp: xp,
            rank_name: rank.to_string(),
            rank_icon: "🥇".to_string(),
            xp_to_next: 100,
            progress_percent: 50.0,
            prestige_count: 0,
            leaderboard_position: 1,
        }
    }

    #[test]
    fn snapshot_feeds_classification() {
        let snap = snapshot("Gold", 1500);
        assert_eq!(
            identity_fields(Some(&snap)),
            (Some("Gold".to_string()), 1500)
        );
    }

    #[test]
    fn failed_fetch_locks_every_rank() {
        // No fallback to older data: a fetch failure must degrade to the
        // sentinel so already-passed ranks never render as achieved.
        let (current_rank, total_xp) = identity_fields(None);
        assert_eq!(current_rank, None);
        assert_eq!(total_xp, NO_DATA_XP);

        let ladder = [
            RankDefinition {
                name: "Bronze".to_string(),
                icon: "🥉".to_string(),
                xp_required: 0,
            },
            RankDefinition {
                name: "Silver".to_string(),
                icon: "🥈".to_string(),
                xp_required: 300,
            },
        ];
        for def in &ladder {
            assert_eq!(
                classify(def, current_rank.as_deref(), total_xp),
                RankStatus::Locked
            );
        }
    }
}
