//! One injected stylesheet for every element the overlay owns. Pure
//! presentation; all selectors are prefixed so nothing can collide with
//! host rules.

const STYLE_ID: &str = "watchranks-styles";

/// Append the stylesheet to `<head>` once. Safe to call repeatedly.
pub fn ensure_styles() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(STYLE_ID);
    style.set_text_content(Some(STYLE_SHEET));
    let _ = head.append_child(&style);
}

const STYLE_SHEET: &str = r#"
:root {
    --wr-bg: #0f0f17;
    --wr-surface: #1a1a2e;
    --wr-surf2: #16213e;
    --wr-accent: #e94560;
    --wr-acc2: #0f3460;
    --wr-text: #e0e0e0;
    --wr-muted: #888;
    --wr-gold: #ffd700;
    --wr-green: #00e676;
    --wr-orange: #ff9800;
    --wr-radius: 12px;
}

/* Injected affordances */
#watchranks-sidebar-btn {
    display: flex; align-items: center; gap: 10px;
    width: 100%; padding: 10px 20px;
    background: transparent; border: none;
    color: var(--wr-text); font-size: 14px; text-align: left;
    cursor: pointer; transition: background .2s;
}
#watchranks-sidebar-btn:hover { background: rgba(233,69,96,.15); }
#watchranks-sidebar-btn .wr-badge {
    margin-left: auto; background: var(--wr-accent); color: #fff;
    font-size: 10px; font-weight: 700; padding: 2px 7px;
    border-radius: 999px; white-space: nowrap;
}
#watchranks-nav-badge {
    display: inline-flex; align-items: center; gap: 5px;
    padding: 3px 10px; margin: 0 6px;
    background: rgba(255,215,0,.12);
    border: 1px solid var(--wr-gold); border-radius: 999px;
    font-size: 12px; font-weight: 700; color: var(--wr-gold);
    cursor: pointer; white-space: nowrap; transition: background .2s;
}
#watchranks-nav-badge:hover { background: rgba(255,215,0,.22); }

/* Dashboard overlay */
#watchranks-backdrop {
    position: fixed; inset: 0; z-index: 99999;
    background: rgba(0,0,0,.85); backdrop-filter: blur(6px);
    display: flex; align-items: center; justify-content: center;
    animation: wrFadeIn .2s ease;
}
@keyframes wrFadeIn { from { opacity: 0 } to { opacity: 1 } }
.wr-modal {
    background: var(--wr-bg); border-radius: 20px;
    border: 1px solid rgba(255,255,255,.08);
    width: min(96vw, 960px); max-height: 90vh; overflow: hidden;
    display: flex; flex-direction: column;
    box-shadow: 0 25px 80px rgba(0,0,0,.6);
    animation: wrSlideUp .3s cubic-bezier(.34,1.56,.64,1);
}
@keyframes wrSlideUp {
    from { opacity: 0; transform: translateY(40px) scale(.96) }
    to   { opacity: 1; transform: translateY(0) scale(1) }
}
.wr-header {
    background: linear-gradient(135deg, var(--wr-surf2), var(--wr-acc2));
    padding: 18px 24px; display: flex; align-items: center; gap: 12px;
    border-bottom: 2px solid var(--wr-accent);
}
.wr-header h2 {
    margin: 0; font-size: 1.3rem; font-weight: 800;
    background: linear-gradient(90deg, var(--wr-accent), var(--wr-gold));
    -webkit-background-clip: text; background-clip: text;
    -webkit-text-fill-color: transparent;
}
.wr-header-sub { color: var(--wr-muted); font-size: .8rem; }
.wr-close-btn {
    margin-left: auto; width: 34px; height: 34px;
    background: rgba(255,255,255,.08); border: none; border-radius: 50%;
    color: var(--wr-text); font-size: 18px; cursor: pointer;
    display: flex; align-items: center; justify-content: center;
    transition: background .2s;
}
.wr-close-btn:hover { background: var(--wr-accent); }
.wr-tabs {
    display: flex; gap: 4px; padding: 12px 20px 0;
    background: var(--wr-surface);
    border-bottom: 1px solid rgba(255,255,255,.06);
}
.wr-tab {
    padding: 8px 16px; border: none; background: transparent;
    color: var(--wr-muted); font-size: .85rem; cursor: pointer;
    border-bottom: 2px solid transparent; white-space: nowrap;
    transition: color .2s, border-color .2s;
}
.wr-tab:hover { color: var(--wr-text); }
.wr-tab.active { color: var(--wr-gold); border-bottom-color: var(--wr-gold); font-weight: 700; }
.wr-body { flex: 1; overflow-y: auto; padding: 22px; background: var(--wr-bg); }
.wr-panel { display: none; }
.wr-panel.active { display: block; }
.wr-error { color: var(--wr-accent); padding: 1rem; }
.wr-section-title { font-size: 1.2rem; font-weight: 800; margin-bottom: 14px; }

/* Rank panel */
.wr-rank-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
@media (max-width: 600px) { .wr-rank-grid { grid-template-columns: 1fr; } }
.wr-hero {
    position: relative; overflow: hidden; text-align: center;
    background: var(--wr-surface); border-radius: var(--wr-radius);
    border: 1px solid rgba(255,255,255,.06); padding: 28px;
}
.wr-rank-icon { font-size: 5rem; line-height: 1.1; }
.wr-rank-name { font-size: 2rem; font-weight: 900; margin: 4px 0; }
.wr-prestige-badge {
    display: inline-block; margin-top: 4px; padding: 3px 10px;
    background: linear-gradient(135deg, #6a0dad, #b8860b);
    color: #fff; border-radius: 999px; font-size: .72rem; font-weight: 700;
}
.wr-progress-wrap { margin-top: 14px; }
.wr-progress-labels {
    display: flex; justify-content: space-between;
    font-size: .75rem; color: var(--wr-muted); margin-bottom: 5px;
}
.wr-progress-bar { height: 8px; background: var(--wr-surf2); border-radius: 999px; overflow: hidden; }
.wr-progress-fill {
    height: 100%; border-radius: 999px;
    background: linear-gradient(90deg, var(--wr-accent), var(--wr-gold));
    transition: width .6s ease;
}
.wr-progress-sub { font-size: .72rem; color: var(--wr-muted); text-align: right; margin-top: 4px; }
.wr-stats { display: grid; gap: 10px; }
.wr-stat {
    background: var(--wr-surf2); border-radius: var(--wr-radius);
    padding: 14px 18px; border: 1px solid rgba(255,255,255,.05);
}
.wr-stat-label {
    font-size: .73rem; color: var(--wr-muted);
    text-transform: uppercase; letter-spacing: .07em;
}
.wr-stat-value { font-size: 1.5rem; font-weight: 700; color: var(--wr-gold); margin-top: 3px; }
.wr-stat-sub { font-size: .73rem; color: var(--wr-muted); }
.wr-stat.binge .wr-stat-value { color: var(--wr-orange); }

/* Buttons */
.wr-btn {
    display: inline-flex; align-items: center; gap: 6px;
    padding: 8px 18px; border: none; border-radius: 8px;
    cursor: pointer; font-size: .88rem; font-weight: 600;
    transition: filter .2s, transform .1s;
}
.wr-btn:hover { filter: brightness(1.15); }
.wr-btn:active { transform: scale(.97); }
.wr-btn-primary { background: var(--wr-accent); color: #fff; }
.wr-btn-warning { background: #f57c00; color: #fff; }
.wr-btn-green { background: #2e7d32; color: #fff; }
.wr-btn-secondary { background: var(--wr-acc2); color: #fff; }
.wr-btn-row { display: flex; gap: 8px; flex-wrap: wrap; margin-top: 10px; }

/* Leaderboard */
.wr-lb-header {
    display: grid; grid-template-columns: 3rem 1fr auto auto;
    padding: 6px 14px; font-size: .72rem; color: var(--wr-muted);
    text-transform: uppercase; letter-spacing: .07em;
}
.wr-lb-row {
    display: grid; grid-template-columns: 3rem 1fr auto auto;
    align-items: center; gap: 6px; padding: 10px 14px; margin-bottom: 6px;
    background: var(--wr-surface); border-radius: var(--wr-radius);
    border: 1px solid rgba(255,255,255,.05); transition: background .2s;
}
.wr-lb-row:hover { background: var(--wr-surf2); }
.wr-lb-row.me { border-color: var(--wr-accent); background: rgba(233,69,96,.08); }
.wr-lb-pos { font-size: 1.1rem; font-weight: 800; color: var(--wr-muted); text-align: center; }
.wr-lb-pos.t1 { color: var(--wr-gold); }
.wr-lb-pos.t2 { color: #c0c0c0; }
.wr-lb-pos.t3 { color: #cd7f32; }
.wr-lb-user { display: flex; align-items: center; gap: 8px; min-width: 0; }
.wr-lb-avatar {
    width: 34px; height: 34px; border-radius: 50%; flex-shrink: 0;
    background: var(--wr-acc2); display: flex;
    align-items: center; justify-content: center; font-size: .95rem;
}
.wr-lb-name { font-weight: 600; overflow: hidden; text-overflow: ellipsis; white-space: nowrap; }
.wr-lb-you { color: var(--wr-accent); font-size: .7rem; }
.wr-lb-pbadge {
    font-size: .68rem; padding: 1px 6px; border-radius: 999px;
    background: linear-gradient(135deg, #6a0dad, #b8860b);
    color: #fff; white-space: nowrap;
}
.wr-lb-rank { text-align: right; white-space: nowrap; font-weight: 700; }
.wr-lb-xp { text-align: right; color: var(--wr-gold); font-weight: 600; font-size: .88rem; white-space: nowrap; }
.wr-lb-empty { color: var(--wr-muted); text-align: center; padding: 30px; }

/* Rank catalog */
.wr-ranks-grid {
    display: grid; gap: 10px;
    grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
}
.wr-rank-card {
    background: var(--wr-surface); border-radius: var(--wr-radius);
    padding: 16px; text-align: center;
    border: 1px solid rgba(255,255,255,.05);
    transition: transform .2s, border-color .2s;
}
.wr-rank-card:hover { transform: translateY(-3px); }
.wr-rank-card.achieved, .wr-rank-card.current { border-color: var(--wr-gold); }
.wr-rank-card.locked { opacity: .4; }
.wr-rc-icon { font-size: 2.6rem; }
.wr-rc-name { font-weight: 700; font-size: .9rem; margin-top: 6px; }
.wr-rc-xp { font-size: .7rem; color: var(--wr-muted); margin-top: 2px; }
.wr-rc-badge { display: inline-block; margin-top: 6px; font-size: .68rem; padding: 2px 7px; border-radius: 999px; }
.wr-rc-badge.achieved { background: rgba(0,200,83,.2); color: var(--wr-green); }
.wr-rc-badge.locked { background: rgba(255,255,255,.07); color: var(--wr-muted); }
.wr-rc-badge.current { background: var(--wr-accent); color: #fff; }

/* XP settings */
.wr-xp-section-title {
    font-size: .8rem; font-weight: 700; color: var(--wr-muted);
    text-transform: uppercase; letter-spacing: .1em;
    padding-bottom: 8px; margin-bottom: 12px;
    border-bottom: 1px solid rgba(255,255,255,.07);
}
.wr-slider-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(240px, 1fr)); gap: 10px; }
.wr-slider-row {
    background: var(--wr-surf2); border-radius: var(--wr-radius);
    padding: 12px 14px; border: 1px solid rgba(255,255,255,.05);
}
.wr-slider-head { display: flex; justify-content: space-between; align-items: center; margin-bottom: 7px; }
.wr-slider-lbl { font-size: .85rem; font-weight: 600; }
.wr-slider-val { font-size: 1.05rem; font-weight: 800; color: var(--wr-gold); min-width: 3rem; text-align: right; }
.wr-slider-val.binge { color: var(--wr-orange); }
input[type=range].wr-range { width: 100%; cursor: pointer; accent-color: var(--wr-gold); }
input[type=range].wr-range.binge { accent-color: var(--wr-orange); }
.wr-toggle-row {
    display: flex; align-items: center; justify-content: space-between;
    background: var(--wr-surf2); border-radius: var(--wr-radius);
    padding: 12px 14px; margin-bottom: 10px;
    border: 1px solid rgba(255,255,255,.05);
}
.wr-toggle-name { font-weight: 600; font-size: .88rem; }
.wr-toggle-desc { font-size: .72rem; color: var(--wr-muted); margin-top: 2px; }
.wr-binge-preview {
    display: flex; align-items: center; gap: 14px; margin-bottom: 16px;
    background: linear-gradient(135deg, #1a1400, #261c00);
    border: 1px solid rgba(255,152,0,.3); border-radius: var(--wr-radius);
    padding: 14px 18px; transition: opacity .2s;
}
.wr-fire { font-size: 2.2rem; animation: wrFlick .5s ease infinite alternate; }
@keyframes wrFlick { to { transform: scale(1.12) rotate(3deg); } }
.wr-binge-preview h4 { color: var(--wr-orange); margin: 0 0 3px; font-size: .95rem; }
.wr-binge-preview p { color: var(--wr-muted); font-size: .78rem; margin: 0; }
.wr-save-bar {
    display: flex; align-items: center; justify-content: space-between;
    background: var(--wr-surf2); border-radius: var(--wr-radius);
    padding: 12px 16px; margin-top: 14px; flex-wrap: wrap; gap: 8px;
}
.wr-save-note { font-size: .78rem; color: var(--wr-muted); }
.wr-save-msg { font-size: .83rem; min-height: 1.2em; }
.wr-save-msg.ok { color: var(--wr-green); }
.wr-save-msg.err { color: var(--wr-accent); }

/* Rank-up celebration */
#watchranks-rankup {
    position: fixed; inset: 0; z-index: 999999;
    background: rgba(0,0,0,.75); backdrop-filter: blur(5px);
    display: flex; align-items: center; justify-content: center;
}
.wr-rankup-box {
    position: relative; overflow: hidden; text-align: center;
    background: var(--wr-surface); border: 2px solid var(--wr-gold);
    border-radius: 20px; padding: 40px 60px;
    box-shadow: 0 0 60px rgba(255,215,0,.3);
    animation: wrPop .5s cubic-bezier(.34,1.56,.64,1);
}
@keyframes wrPop {
    from { opacity: 0; transform: scale(.4) rotate(-5deg); }
    to   { opacity: 1; transform: scale(1) rotate(0); }
}
.wr-rankup-title {
    font-size: .9rem; color: var(--wr-muted);
    letter-spacing: .15em; text-transform: uppercase;
}
.wr-rankup-icon { font-size: 5.5rem; margin: 8px 0; animation: wrBounce .9s ease infinite alternate; }
@keyframes wrBounce { to { transform: scale(1.1); } }
.wr-rankup-name { font-size: 2.2rem; font-weight: 900; color: var(--wr-gold); text-shadow: 0 0 25px var(--wr-gold); }
.wr-rankup-actions { margin-top: 20px; }
.wr-particle {
    position: absolute; border-radius: 50%; pointer-events: none;
    animation: wrFloat 1.4s ease-out forwards;
}
@keyframes wrFloat {
    to { transform: translateY(-110px) translateX(var(--dx, 0)) scale(0); opacity: 0; }
}

/* Loading */
.wr-loading {
    display: flex; align-items: center; justify-content: center;
    gap: 10px; color: var(--wr-muted); padding: 40px;
}
.wr-spinner {
    width: 24px; height: 24px; border-radius: 50%;
    border: 3px solid rgba(255,255,255,.1);
    border-top-color: var(--wr-accent);
    animation: wrSpin .7s linear infinite;
}
@keyframes wrSpin { to { transform: rotate(360deg); } }
"#;
