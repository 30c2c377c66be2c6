use leptos::*;

use crate::application::{ShareDashboardUseCase, ViewportStore};
use crate::domain::{
    logging::{LogComponent, get_logger},
    portfolio::{Transaction, UserPortfolio},
};
use crate::format_utils::{format_grouped, format_usd};
use crate::infrastructure::rendering::PerformanceChartRenderer;

const CHART_CANVAS_ID: &str = "performance-chart";
const CHART_WIDTH: u32 = 640;
const CHART_HEIGHT: u32 = 240;

#[component]
pub fn DashboardView() -> impl IntoView {
    let portfolio = store_value(UserPortfolio::mock());
    let viewport = ViewportStore::from_context();
    let share_open = create_rw_signal(false);

    let (name, wallet) = portfolio.with_value(|p| (p.name.clone(), p.wallet_address.clone()));

    view! {
        <section class="stack">
            <div class="row">
                <div>
                    <h2>{format!("Welcome back, {}", name)}</h2>
                    <div class="muted mono">{wallet}</div>
                </div>
                <button class="btn primary" on:click=move |_| share_open.set(true)>"📤 Share"</button>
            </div>
            <div class=move || if viewport.is_mobile() { "grid-2" } else { "grid-4" }>
                {portfolio.with_value(|p| {
                    let profit_class = if p.is_profitable() { "value success" } else { "value danger" };
                    view! {
                        <StatCard label="Total Shares" value=format_grouped(p.total_shares) />
                        <StatCard label="Current Value" value=format_usd(p.current_value) />
                        <div class="card">
                            <div class="muted">"Profit / Loss"</div>
                            <div class=profit_class>
                                {format!("{} ({:+.1}%)", format_usd(p.profit_loss), p.profit_percentage)}
                            </div>
                        </div>
                        <StatCard label="Referral Earnings" value=format_usd(p.referral_earnings) />
                    }
                })}
            </div>
            <div class=move || if viewport.is_mobile() { "stack" } else { "grid-2" }>
                <PerformanceChart portfolio=portfolio />
                <ReferralCard portfolio=portfolio />
            </div>
            <TransactionList transactions=portfolio.with_value(|p| p.recent_transactions.clone()) />
        </section>

        <Show when=move || share_open.get()>
            <ShareModal portfolio=portfolio on_close=move |_| share_open.set(false) />
        </Show>
    }
}

#[component]
fn StatCard(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="card">
            <div class="muted">{label}</div>
            <div class="value">{value}</div>
        </div>
    }
}

/// Monthly value bars drawn on a canvas once the element is mounted.
#[component]
fn PerformanceChart(portfolio: StoredValue<UserPortfolio>) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        if canvas_ref.get().is_none() {
            return;
        }
        let renderer = PerformanceChartRenderer::new(CHART_CANVAS_ID, CHART_WIDTH, CHART_HEIGHT);
        if let Err(e) = portfolio.with_value(|p| renderer.render(&p.performance_data)) {
            get_logger().error(
                LogComponent::Presentation("PerformanceChart"),
                &format!("❌ Chart render failed: {:?}", e),
            );
        }
    });

    view! {
        <div class="card stack">
            <h3>"Portfolio Performance"</h3>
            <canvas
                id=CHART_CANVAS_ID
                node_ref=canvas_ref
                width=CHART_WIDTH
                height=CHART_HEIGHT
                style="width: 100%; max-width: 640px;"
            ></canvas>
        </div>
    }
}

#[component]
fn ReferralCard(portfolio: StoredValue<UserPortfolio>) -> impl IntoView {
    let (code, count, earnings) =
        portfolio.with_value(|p| (p.referral_code.clone(), p.total_referrals, p.referral_earnings));

    view! {
        <div class="card stack">
            <h3>"Referral Program"</h3>
            <div class="tile row">
                <span class="mono">{code}</span>
                <span class="muted">"Your code"</span>
            </div>
            <div class="grid-2">
                <div class="tile">
                    <div class="muted">"Referrals"</div>
                    <div class="value">{count}</div>
                </div>
                <div class="tile">
                    <div class="muted">"Earned"</div>
                    <div class="value">{format_usd(earnings)}</div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn TransactionList(transactions: Vec<Transaction>) -> impl IntoView {
    view! {
        <div class="card stack">
            <h3>"Recent Transactions"</h3>
            {transactions
                .into_iter()
                .map(|tx| {
                    let chip_class = format!("chip {}", tx.status.color());
                    let shares = if tx.shares > 0.0 {
                        format!("{} sRADB", format_grouped(tx.shares))
                    } else {
                        String::new()
                    };
                    view! {
                        <div class="tile row">
                            <span>{format!("{} {}", tx.kind.icon(), tx.kind)}</span>
                            <span class="mono">{format_usd(tx.amount)}</span>
                            <span class="muted">{shares}</span>
                            <span class="muted">{tx.date}</span>
                            <span class=chip_class>{tx.status.to_string()}</span>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Preview of the share card plus the PNG download action.
#[component]
fn ShareModal(portfolio: StoredValue<UserPortfolio>, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let is_generating = create_rw_signal(false);
    let snapshot = portfolio.with_value(|p| p.snapshot());

    let download = move |_| {
        if is_generating.get_untracked() {
            return;
        }
        is_generating.set(true);

        let current = portfolio.get_value();
        spawn_local(async move {
            let use_case = ShareDashboardUseCase::default();
            if let Err(e) = use_case.execute(&current).await {
                crate::log_error!(LogComponent::Presentation("ShareModal"), "❌ Failed to generate image: {}", e);
            }
            is_generating.set(false);
            on_close.call(());
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="row">
                    <h3>"Share Your Dashboard"</h3>
                    <button class="btn" aria-label="Close" on:click=move |_| on_close.call(())>"✕"</button>
                </div>
                <div class="tile stack">
                    <strong>{snapshot.name.clone()}</strong>
                    <div class="grid-2">
                        <div><div class="muted">"Value"</div><div>{format_usd(snapshot.current_value)}</div></div>
                        <div><div class="muted">"Profit"</div><div>{format!("{:+.1}%", snapshot.profit_percentage)}</div></div>
                        <div><div class="muted">"Shares"</div><div>{format_grouped(snapshot.share_count)}</div></div>
                        <div><div class="muted">"Referrals"</div><div>{snapshot.referral_count}</div></div>
                    </div>
                </div>
                <button class="btn primary full" prop:disabled=move || is_generating.get() on:click=download>
                    {move || if is_generating.get() { "Generating..." } else { "📥 Download PNG" }}
                </button>
            </div>
        </div>
    }
}
