use leptos::*;

use crate::application::{NavigationStore, ViewportStore};
use crate::domain::{
    logging::{LogComponent, get_logger},
    navigation::Tab,
};

pub mod dashboard;
pub mod trade;

use dashboard::DashboardView;
use trade::TradeView;

const APP_STYLE: &str = r#"
    .radbot-app {
        font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
        background: #000;
        color: #fff;
        min-height: 100vh;
        padding: 32px;
        display: flex;
        flex-direction: column;
        gap: 48px;
    }
    .nav { display: flex; justify-content: space-between; align-items: center; width: 100%; }
    .nav-left { display: flex; align-items: center; gap: 16px; }
    .logo { width: 50px; height: 50px; border-radius: 12px; background: #1f2937; display: flex;
            align-items: center; justify-content: center; font-weight: 800; font-size: 24px; }
    .tabs { display: flex; gap: 4px; background: rgba(255,255,255,0.05); border-radius: 12px; padding: 4px; }
    .tab { background: none; border: none; color: #9ca3af; padding: 8px 16px; border-radius: 8px; cursor: pointer; }
    .tab.active { background: rgba(217,70,239,0.9); color: #fff; }
    .btn { border: none; border-radius: 10px; padding: 10px 16px; cursor: pointer; font-weight: 600; color: #fff;
           background: rgba(255,255,255,0.1); }
    .btn:disabled { opacity: 0.4; cursor: not-allowed; }
    .btn.primary { background: rgba(217,70,239,0.9); }
    .btn.success { background: rgba(34,197,94,0.9); }
    .btn.danger { background: none; color: #f87171; }
    .btn.full { width: 100%; }
    .card { background: rgba(17,17,17,0.6); border: 1px solid rgba(255,255,255,0.1); border-radius: 16px; padding: 24px; }
    .tile { background: rgba(255,255,255,0.05); border-radius: 10px; padding: 12px; }
    .muted { color: #9ca3af; font-size: 14px; }
    .value { font-size: 20px; font-weight: 700; }
    .value.success { color: #4ade80; }
    .value.danger { color: #f87171; }
    .chip { font-size: 12px; padding: 2px 10px; border-radius: 9999px; background: rgba(234,179,8,0.2); color: #facc15; }
    .chip.success { background: rgba(34,197,94,0.2); color: #4ade80; }
    .chip.danger { background: rgba(239,68,68,0.2); color: #f87171; }
    .progress { height: 6px; border-radius: 9999px; background: rgba(255,255,255,0.1); overflow: hidden; }
    .progress > div { height: 100%; background: #22c55e; }
    .progress.warning > div { background: #f59e0b; }
    .grid-2 { display: grid; grid-template-columns: 1fr 1fr; gap: 16px; }
    .grid-4 { display: grid; grid-template-columns: repeat(4, 1fr); gap: 16px; }
    .stack { display: flex; flex-direction: column; gap: 16px; }
    .row { display: flex; justify-content: space-between; align-items: center; gap: 8px; }
    .modal-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,0.7); display: flex;
                      align-items: center; justify-content: center; z-index: 50; }
    .modal { width: min(560px, 92vw); background: rgba(10,10,10,0.95); border: 1px solid rgba(255,255,255,0.1);
             border-radius: 16px; padding: 24px; display: flex; flex-direction: column; gap: 12px; }
    .drawer { position: fixed; top: 0; left: 0; bottom: 0; width: 260px; background: #0a0a0a; padding: 24px;
              border-right: 1px solid rgba(255,255,255,0.1); z-index: 40; display: flex; flex-direction: column; gap: 8px; }
    .footer { display: flex; flex-direction: column; align-items: center; gap: 16px; }
    .footer a { color: #fff; text-decoration: none; background: rgba(255,255,255,0.05); padding: 8px 12px; border-radius: 8px; }
    .mono { font-family: 'Courier New', monospace; }
"#;

/// Page shell: owns the navigation and viewport stores and switches views.
#[component]
pub fn App() -> impl IntoView {
    let navigation = NavigationStore::new();
    let viewport = ViewportStore::new();
    navigation.provide();
    viewport.provide();

    let resize_binding = viewport.bind_to_window();
    on_cleanup(move || drop(resize_binding));

    get_logger().info(LogComponent::Presentation("App"), "🚀 RADBOT dashboard mounted");

    view! {
        <style>{APP_STYLE}</style>
        <div class="radbot-app">
            <NavBar />
            <main>
                {move || match navigation.active_tab() {
                    Tab::Trade => view! { <TradeView /> }.into_view(),
                    Tab::Dashboard => view! { <DashboardView /> }.into_view(),
                }}
            </main>
            <Footer />
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let viewport = ViewportStore::from_context();

    view! {
        <nav class="nav">
            <div class="nav-left">
                <Show when=move || viewport.is_mobile()>
                    <MobileNavigation />
                </Show>
                <div class="logo">"R"</div>
                <Show when=move || !viewport.is_mobile()>
                    <TabNavigation />
                </Show>
            </div>
            <ConnectWallet />
        </nav>
    }
}

#[component]
fn TabNavigation() -> impl IntoView {
    let navigation = NavigationStore::from_context();

    view! {
        <div class="tabs" role="tablist">
            {[Tab::Trade, Tab::Dashboard]
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            class="tab"
                            class:active=move || navigation.active_tab() == tab
                            role="tab"
                            on:click=move |_| navigation.set_active_tab(tab)
                        >
                            {format!("{} {}", tab.icon(), tab.title())}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Hamburger button plus a slide-in drawer; picking a tab closes it.
#[component]
fn MobileNavigation() -> impl IntoView {
    let navigation = NavigationStore::from_context();
    let (is_open, set_open) = create_signal(false);

    view! {
        <button class="btn" aria-label="Open menu" on:click=move |_| set_open.set(true)>"☰"</button>
        <Show when=move || is_open.get()>
            <div class="modal-backdrop" on:click=move |_| set_open.set(false)></div>
            <div class="drawer">
                <div class="row">
                    <div class="logo">"R"</div>
                    <button class="btn" aria-label="Close menu" on:click=move |_| set_open.set(false)>"✕"</button>
                </div>
                {[Tab::Trade, Tab::Dashboard]
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class="tab"
                                class:active=move || navigation.active_tab() == tab
                                on:click=move |_| {
                                    navigation.set_active_tab(tab);
                                    set_open.set(false);
                                }
                            >
                                {format!("{} {}", tab.icon(), tab.title())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}

/// Wallet connection is not implemented; the button only logs.
#[component]
fn ConnectWallet() -> impl IntoView {
    view! {
        <button
            class="btn primary"
            on:click=move |_| {
                get_logger().info(LogComponent::Presentation("ConnectWallet"), "Wallet connect requested");
            }
        >
            "Connect Wallet"
        </button>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let links = [
        ("GitHub", "https://github.com/radbot"),
        ("Discord", "https://discord.gg/radbot"),
        ("X", "https://x.com/radbot_pro"),
        ("Docs", "https://docs.radbot.com"),
    ];

    view! {
        <footer class="footer">
            <div class="row">
                {links
                    .into_iter()
                    .map(|(label, href)| {
                        view! {
                            <a href=href target="_blank" rel="noopener noreferrer" aria-label=label>
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="muted">"© 2025 Radbot. All rights reserved."</div>
        </footer>
    }
}
