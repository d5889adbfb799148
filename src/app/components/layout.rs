//! Layout component: document head and page chrome.

use dioxus::prelude::*;

/// Shell stylesheet. Light colours by default; dark colours when the root
/// carries `data-theme="dark"`, or when it carries no override and the OS
/// prefers dark.
const CUSTOM_STYLES: &str = r#"
:root {
    --bg: #f4f6fa; --surface: #fff; --text: #1c2430; --muted: #6b7585;
    --border: #dde2ea; --accent: #2f6fed; --accent-text: #fff;
    --overlay: rgba(15, 20, 30, .55);
    color-scheme: light;
}
:root[data-theme="dark"] {
    --bg: #10141b; --surface: #1a202b; --text: #e6e9ef; --muted: #98a2b3;
    --border: #2a3240; --accent: #5b8cff; --overlay: rgba(0, 0, 0, .7);
    color-scheme: dark;
}
@media (prefers-color-scheme: dark) {
    :root:not([data-theme]) {
        --bg: #10141b; --surface: #1a202b; --text: #e6e9ef; --muted: #98a2b3;
        --border: #2a3240; --accent: #5b8cff; --overlay: rgba(0, 0, 0, .7);
        color-scheme: dark;
    }
}
* { box-sizing: border-box; }
body { margin: 0; font-family: system-ui, sans-serif; background: var(--bg); color: var(--text); }
button { font: inherit; cursor: pointer; border: 1px solid var(--border); background: var(--surface); color: var(--text); border-radius: 8px; padding: .45rem .9rem; }
button.primary { background: var(--accent); color: var(--accent-text); border-color: var(--accent); }
input, select { font: inherit; padding: .45rem .6rem; border: 1px solid var(--border); border-radius: 8px; background: var(--surface); color: var(--text); }
.app-shell { display: flex; min-height: 100vh; }
.drawer { width: 64px; transition: width .2s; background: var(--surface); border-right: 1px solid var(--border); overflow: hidden; position: sticky; top: 0; height: 100vh; }
.drawer.open { width: 260px; }
.drawer-header { padding: 1rem; font-weight: 600; white-space: nowrap; }
.drawer-nav { display: flex; flex-direction: column; gap: .25rem; padding: .5rem; }
.nav-link { display: flex; justify-content: space-between; gap: .5rem; white-space: nowrap; border: none; text-align: left; }
.content { flex: 1; padding: 0 1.5rem 2rem; min-width: 0; }
.topbar { display: flex; align-items: center; gap: .75rem; padding: .75rem 0; position: sticky; top: 0; background: var(--bg); z-index: 5; }
.brand { font-weight: 700; }
.spacer { flex: 1; }
.control { display: flex; align-items: center; gap: .4rem; font-size: .85rem; color: var(--muted); }
.icon-button { background: transparent; }
.menu { position: relative; }
.menu-content { display: none; position: absolute; right: 0; top: 100%; flex-direction: column; gap: .25rem; padding: .5rem; background: var(--surface); border: 1px solid var(--border); border-radius: 8px; min-width: 180px; }
.menu:hover .menu-content, .menu:focus-within .menu-content { display: flex; }
.hero { padding: 1.5rem 0; }
.eyebrow { text-transform: uppercase; letter-spacing: .08em; font-size: .75rem; color: var(--muted); margin: 0; }
.cards-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.card { background: var(--surface); border: 1px solid var(--border); border-radius: 12px; padding: 1rem; cursor: pointer; }
.card-hint { color: var(--muted); font-size: .85rem; }
.pill { display: inline-block; padding: 0 .5rem; border-radius: 999px; background: var(--accent); color: var(--accent-text); font-size: .8rem; }
.panel { background: var(--surface); border: 1px solid var(--border); border-radius: 12px; margin-top: 1.5rem; padding: 1rem 1.25rem; }
.panel-header { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
.form-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(200px, 1fr)); gap: .75rem; }
.form-grid label { display: flex; flex-direction: column; gap: .25rem; font-size: .85rem; }
.form-actions { display: flex; gap: .5rem; margin-top: 1rem; }
.badge { font-size: .75rem; color: var(--muted); border: 1px solid var(--border); border-radius: 6px; padding: .1rem .4rem; }
.map-frame iframe, .map-picker iframe { width: 100%; height: 360px; border: 0; border-radius: 8px; }
.map-modal, .auth-overlay { position: fixed; inset: 0; background: var(--overlay); display: flex; align-items: center; justify-content: center; z-index: 20; }
.auth-overlay { z-index: 30; }
.map-modal__card, .auth-card { background: var(--surface); border-radius: 12px; padding: 1.25rem; width: min(720px, 94vw); }
.auth-card { width: min(420px, 94vw); }
.map-modal__header { display: flex; justify-content: space-between; align-items: center; }
.map-helper, .auth-hint { color: var(--muted); font-size: .85rem; }
.map-modal__body { display: grid; gap: 1rem; }
.auth-form { display: flex; flex-direction: column; gap: .75rem; }
.auth-form label { display: flex; flex-direction: column; gap: .25rem; }
.auth-actions { display: flex; gap: .5rem; }
"#;

#[derive(Props, Clone, PartialEq)]
pub struct LayoutProps {
    /// Page title (shown in browser tab)
    pub title: String,
    /// Page content
    pub children: Element,
}

/// Layout wrapping the shell.
#[component]
pub fn Layout(props: LayoutProps) -> Element {
    rsx! {
        // Head elements - Dioxus hoists these to the real <head>
        document::Title { "{props.title}" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Style { {CUSTOM_STYLES} }

        div { class: "app-shell",
            {props.children}
        }
    }
}
