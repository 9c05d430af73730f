//! Admin editor for the backend's XP tuning knobs. The form edits a local
//! draft and writes the whole record back in one POST; the completion
//! threshold is a 0-1 fraction on the wire but a percentage in the UI.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use watchranks_shared::XpConfig;

use crate::api::Api;
use crate::config::OverlayConfig;
use crate::format::{fmt_hours, fmt_secs, fmt_xp};
use crate::overlay::{Loadable, LoadingIndicator};
use crate::state;

const SAVE_MSG_CLEAR_MS: u32 = 3000;

fn threshold_percent(fraction: f64) -> f64 {
    (fraction * 100.0).round()
}

fn threshold_fraction(percent: f64) -> f64 {
    percent / 100.0
}

/// One sentence describing the currently drafted binge rule.
fn binge_preview(bonus: i64, hours: f64, gap_secs: i64) -> String {
    format!(
        "Watch {}+ hours in a day (gaps under {} allowed) and earn a +{} XP bonus.",
        fmt_hours(hours),
        fmt_secs(gap_secs),
        fmt_xp(bonus),
    )
}

/// The editable draft. Signals live for the panel's lifetime; a load
/// overwrites them, save reads them back untracked.
#[derive(Clone, Copy)]
struct Draft {
    xp_per_minute: RwSignal<f64>,
    xp_per_episode: RwSignal<f64>,
    xp_per_movie: RwSignal<f64>,
    completion_pct: RwSignal<f64>,
    episode_min_secs: RwSignal<f64>,
    movie_min_secs: RwSignal<f64>,
    binge_enabled: RwSignal<bool>,
    binge_hours: RwSignal<f64>,
    binge_bonus: RwSignal<f64>,
    binge_gap_secs: RwSignal<f64>,
}

impl Draft {
    fn new() -> Self {
        let cfg = XpConfig::default();
        Self {
            xp_per_minute: RwSignal::new(cfg.xp_per_minute as f64),
            xp_per_episode: RwSignal::new(cfg.xp_per_episode as f64),
            xp_per_movie: RwSignal::new(cfg.xp_per_movie as f64),
            completion_pct: RwSignal::new(threshold_percent(cfg.completion_threshold)),
            episode_min_secs: RwSignal::new(cfg.episode_min_watch_seconds as f64),
            movie_min_secs: RwSignal::new(cfg.movie_min_watch_seconds as f64),
            binge_enabled: RwSignal::new(cfg.binge_enabled),
            binge_hours: RwSignal::new(cfg.binge_threshold_hours),
            binge_bonus: RwSignal::new(cfg.binge_xp_bonus as f64),
            binge_gap_secs: RwSignal::new(cfg.binge_gap_tolerance_seconds as f64),
        }
    }

    fn fill_from(&self, cfg: &XpConfig) {
        self.xp_per_minute.set(cfg.xp_per_minute as f64);
        self.xp_per_episode.set(cfg.xp_per_episode as f64);
        self.xp_per_movie.set(cfg.xp_per_movie as f64);
        self.completion_pct
            .set(threshold_percent(cfg.completion_threshold));
        self.episode_min_secs.set(cfg.episode_min_watch_seconds as f64);
        self.movie_min_secs.set(cfg.movie_min_watch_seconds as f64);
        self.binge_enabled.set(cfg.binge_enabled);
        self.binge_hours.set(cfg.binge_threshold_hours);
        self.binge_bonus.set(cfg.binge_xp_bonus as f64);
        self.binge_gap_secs.set(cfg.binge_gap_tolerance_seconds as f64);
    }

    fn to_config(self) -> XpConfig {
        XpConfig {
            xp_per_minute: self.xp_per_minute.get_untracked() as u32,
            xp_per_episode: self.xp_per_episode.get_untracked() as u32,
            xp_per_movie: self.xp_per_movie.get_untracked() as u32,
            completion_threshold: threshold_fraction(self.completion_pct.get_untracked()),
            episode_min_watch_seconds: self.episode_min_secs.get_untracked() as u32,
            movie_min_watch_seconds: self.movie_min_secs.get_untracked() as u32,
            binge_enabled: self.binge_enabled.get_untracked(),
            binge_threshold_hours: self.binge_hours.get_untracked(),
            binge_xp_bonus: self.binge_bonus.get_untracked() as u32,
            binge_gap_tolerance_seconds: self.binge_gap_secs.get_untracked() as u32,
        }
    }
}

/// Form state once the first load settled. `stale` marks values that came
/// from the in-page cache because the backend could not be reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FormMeta {
    stale: bool,
}

fn load(api: Api, draft: Draft, data: RwSignal<Loadable<FormMeta>>) {
    spawn_local(async move {
        match api.fetch_config().await {
            Ok(cfg) => {
                state::record_config(&cfg);
                draft.fill_from(&cfg);
                data.set(Loadable::Ready(FormMeta { stale: false }));
            }
            Err(e) => {
                // Editing cached values is still useful; the save will
                // fail loudly if the backend is really gone.
                if let Some(cfg) = state::latest_config() {
                    draft.fill_from(&cfg);
                    data.set(Loadable::Ready(FormMeta { stale: true }));
                } else {
                    data.set(Loadable::Failed(format!("Could not load XP settings ({e}).")));
                }
            }
        }
    });
}

#[component]
pub fn SettingsPanel(active: Memo<bool>, config: OverlayConfig) -> impl IntoView {
    let api = Api::new(&config);
    let draft = Draft::new();
    let data = RwSignal::new(Loadable::Loading);
    let requested = RwSignal::new(false);
    // Some((ok, text)) renders the inline save outcome, None hides it.
    let save_msg: RwSignal<Option<(bool, String)>> = RwSignal::new(None);

    Effect::new({
        let api = api.clone();
        move || {
            if active.get() && !requested.get_untracked() {
                requested.set(true);
                load(api.clone(), draft, data);
            }
        }
    });

    let on_save = move |_| {
        let api = api.clone();
        let cfg = draft.to_config();
        spawn_local(async move {
            let outcome = match api.save_config(&cfg).await {
                Ok(()) => {
                    state::record_config(&cfg);
                    (true, "✓ Saved! Active on the next backend sync.".to_string())
                }
                Err(e) => (false, format!("Save failed: {e}")),
            };
            save_msg.set(Some(outcome));
            Timeout::new(SAVE_MSG_CLEAR_MS, move || save_msg.set(None)).forget();
        });
    };

    let preview = Memo::new(move |_| {
        binge_preview(
            draft.binge_bonus.get() as i64,
            draft.binge_hours.get(),
            draft.binge_gap_secs.get() as i64,
        )
    });

    view! {
        <div class="wr-section-title">"🔥 XP Settings"</div>
        {move || match data.get() {
            Loadable::Loading => view! { <LoadingIndicator /> }.into_any(),
            Loadable::Failed(msg) => view! { <p class="wr-error">{msg}</p> }.into_any(),
            Loadable::Ready(meta) => {
                view! {
                    {meta
                        .stale
                        .then(|| {
                            view! {
                                <p class="wr-error">
                                    "Backend unreachable; showing the last loaded values."
                                </p>
                            }
                        })}

                    <div class="wr-xp-section-title">"Watching"</div>
                    <div class="wr-slider-grid">
                        <SliderRow
                            label="XP per minute watched"
                            signal=draft.xp_per_minute
                            min=0.0
                            max=10.0
                            step=1.0
                            display=|v| format!("{} XP", v as i64)
                        />
                        <SliderRow
                            label="Bonus per finished episode"
                            signal=draft.xp_per_episode
                            min=0.0
                            max=100.0
                            step=5.0
                            display=|v| format!("{} XP", v as i64)
                        />
                        <SliderRow
                            label="Bonus per finished movie"
                            signal=draft.xp_per_movie
                            min=0.0
                            max=100.0
                            step=5.0
                            display=|v| format!("{} XP", v as i64)
                        />
                    </div>

                    <div class="wr-xp-section-title">"Completion"</div>
                    <div class="wr-slider-grid">
                        <SliderRow
                            label="Counts as finished at"
                            signal=draft.completion_pct
                            min=50.0
                            max=100.0
                            step=5.0
                            display=|v| format!("{}%", v as i64)
                        />
                        <SliderRow
                            label="Minimum episode watch time"
                            signal=draft.episode_min_secs
                            min=0.0
                            max=1800.0
                            step=60.0
                            display=|v| fmt_secs(v as i64)
                        />
                        <SliderRow
                            label="Minimum movie watch time"
                            signal=draft.movie_min_secs
                            min=0.0
                            max=5400.0
                            step=300.0
                            display=|v| fmt_secs(v as i64)
                        />
                    </div>

                    <div class="wr-xp-section-title">"🔥 Binge bonus"</div>
                    <ToggleRow
                        label="Binge bonus enabled"
                        desc="Award bonus XP for long daily watch sessions"
                        signal=draft.binge_enabled
                    />
                    <div class="wr-slider-grid">
                        <SliderRow
                            label="Hours per binge day"
                            signal=draft.binge_hours
                            min=1.0
                            max=8.0
                            step=0.5
                            display=|v| format!("{}h", fmt_hours(v))
                            binge=true
                        />
                        <SliderRow
                            label="Bonus XP per binge day"
                            signal=draft.binge_bonus
                            min=0.0
                            max=2000.0
                            step=100.0
                            display=|v| format!("{} XP", fmt_xp(v as i64))
                            binge=true
                        />
                        <SliderRow
                            label="Allowed gap between sessions"
                            signal=draft.binge_gap_secs
                            min=0.0
                            max=1800.0
                            step=60.0
                            display=|v| fmt_secs(v as i64)
                            binge=true
                        />
                    </div>
                    <div
                        class="wr-binge-preview"
                        style:opacity=move || {
                            if draft.binge_enabled.get() { "1" } else { "0.4" }
                        }
                    >
                        <span class="wr-fire">"🔥"</span>
                        <div>
                            <h4>"Binge rule"</h4>
                            <p>{move || preview.get()}</p>
                        </div>
                    </div>

                    <div class="wr-save-bar">
                        <button class="wr-btn wr-btn-green" on:click=on_save.clone()>
                            "💾 Save settings"
                        </button>
                        {move || {
                            save_msg
                                .get()
                                .map(|(ok, text)| {
                                    view! {
                                        <span class=if ok {
                                            "wr-save-msg ok"
                                        } else {
                                            "wr-save-msg err"
                                        }>{text}</span>
                                    }
                                })
                        }}
                    </div>
                    <p class="wr-save-note">
                        "Changes take effect on the backend's next sync cycle. \
                         Not persisted across backend restarts."
                    </p>
                }
                    .into_any()
            }
        }}
    }
}

#[component]
fn SliderRow(
    label: &'static str,
    signal: RwSignal<f64>,
    min: f64,
    max: f64,
    step: f64,
    display: fn(f64) -> String,
    #[prop(default = false)] binge: bool,
) -> impl IntoView {
    view! {
        <div class="wr-slider-row">
            <div class="wr-slider-head">
                <span class="wr-slider-lbl">{label}</span>
                <span class="wr-slider-val" class:binge=binge>
                    {move || display(signal.get())}
                </span>
            </div>
            <input
                type="range"
                class="wr-range"
                class:binge=binge
                min=min
                max=max
                step=step
                prop:value=move || signal.get()
                on:input=move |e| {
                    if let Ok(v) = event_target_value(&e).parse::<f64>() {
                        signal.set(v);
                    }
                }
            />
        </div>
    }
}

#[component]
fn ToggleRow(label: &'static str, desc: &'static str, signal: RwSignal<bool>) -> impl IntoView {
    view! {
        <div class="wr-toggle-row">
            <div>
                <div class="wr-toggle-name">{label}</div>
                <div class="wr-toggle-desc">{desc}</div>
            </div>
            <input
                type="checkbox"
                prop:checked=move || signal.get()
                on:change=move |e| signal.set(event_target_checked(&e))
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{binge_preview, threshold_fraction, threshold_percent};

    #[test]
    fn threshold_round_trips_between_wire_and_ui() {
        assert_eq!(threshold_percent(0.80), 80.0);
        assert_eq!(threshold_percent(0.85), 85.0);
        assert!((threshold_fraction(80.0) - 0.80).abs() < 1e-12);
        assert_eq!(threshold_percent(threshold_fraction(95.0)), 95.0);
    }

    #[test]
    fn binge_preview_reads_as_a_sentence() {
        assert_eq!(
            binge_preview(500, 3.0, 600),
            "Watch 3+ hours in a day (gaps under 10 min allowed) and earn a +500 XP bonus."
        );
        assert_eq!(
            binge_preview(1500, 2.5, 90),
            "Watch 2.5+ hours in a day (gaps under 2 min allowed) and earn a +1,500 XP bonus."
        );
    }
}
