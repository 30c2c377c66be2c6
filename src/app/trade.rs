use leptos::*;

use crate::application::{AVAILABLE_SHARES, CountdownTicker, PurchaseForm, USER_BALANCE_USD, ViewportStore};
use crate::domain::{
    logging::{LogComponent, get_logger, get_time_provider},
    shares::{
        MarketPrices, PackageId, PurchaseQuote, RedemptionQuote, SharePackage, SharePackageLedger,
        Timestamp,
    },
};
use crate::format_utils::{format_grouped, format_short_date, format_time_remaining, format_usd};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TradeMode {
    Buy,
    Redeem,
}

/// Trade page. Owns the share package ledger so the countdown keeps running
/// while the user switches between buying and redeeming.
#[component]
pub fn TradeView() -> impl IntoView {
    let now = Timestamp::from_millis(get_time_provider().current_timestamp());
    let ledger = create_rw_signal(SharePackageLedger::sample(now));
    let mode = create_rw_signal(TradeMode::Buy);

    let ticker = CountdownTicker::every_second(move || {
        ledger.update(|l| {
            l.tick();
        });
    });
    on_cleanup(move || ticker.stop());

    let mode_button = move |target: TradeMode, label: &'static str| {
        view! {
            <button
                class="tab"
                class:active=move || mode.get() == target
                on:click=move |_| mode.set(target)
            >
                {label}
            </button>
        }
    };

    view! {
        <section class="stack">
            <div class="tabs">
                {mode_button(TradeMode::Buy, "Buy")}
                {mode_button(TradeMode::Redeem, "Redeem")}
            </div>
            {move || match mode.get() {
                TradeMode::Buy => view! { <BuyShares /> }.into_view(),
                TradeMode::Redeem => view! { <RedeemShares ledger=ledger /> }.into_view(),
            }}
        </section>
    }
}

#[component]
fn BuyShares() -> impl IntoView {
    let prices = MarketPrices::mock();
    let form = create_rw_signal(PurchaseForm::new(USER_BALANCE_USD, prices.share_price.value()));
    let pending_quote = create_rw_signal(None::<PurchaseQuote>);

    let open_confirmation = move |_| match form.with(|f| f.quote()) {
        Ok(quote) => pending_quote.set(Some(quote)),
        Err(e) => {
            crate::log_warn!(LogComponent::Presentation("BuyShares"), "{}", e);
        }
    };

    let confirm = move |_| {
        if let Err(e) = form.with(|f| f.confirm()) {
            get_logger().error(LogComponent::Presentation("BuyShares"), &e.to_string());
        }
        pending_quote.set(None);
        form.update(|f| f.reset());
    };

    view! {
        <div class="card stack">
            <div class="row">
                <h2>"Buy sRADB"</h2>
                <span class="muted">{format!("Price: {}", format_usd(prices.share_price.value()))}</span>
            </div>
            <div class="grid-2">
                <div class="tile">
                    <div class="muted">"Balance"</div>
                    <div class="value">{format_usd(USER_BALANCE_USD)}</div>
                </div>
                <div class="tile">
                    <div class="muted">"Available shares"</div>
                    <div class="value">{format_grouped(AVAILABLE_SHARES)}</div>
                </div>
            </div>
            <label class="stack">
                <span class="muted">"Amount (USD)"</span>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="0.00"
                    prop:value=move || form.with(|f| f.amount_text().to_string())
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        form.update(|f| f.set_amount_text(&text));
                    }
                />
            </label>
            <label class="stack">
                <span class="muted">
                    {move || format!("{:.0}% of balance", form.with(|f| f.percentage()))}
                </span>
                <input
                    type="range"
                    min="0"
                    max="100"
                    step="25"
                    prop:value=move || form.with(|f| f.percentage().to_string())
                    on:input=move |ev| {
                        if let Ok(value) = event_target_value(&ev).parse::<f64>() {
                            form.update(|f| f.set_percentage(value));
                        }
                    }
                />
            </label>
            <div class="row">
                <span class="muted">"You receive"</span>
                <span class="mono">
                    {move || {
                        form.with(|f| f.shares_to_buy())
                            .map(|s| format!("{} sRADB", format_grouped(s)))
                            .unwrap_or_else(|| "0 sRADB".to_string())
                    }}
                </span>
            </div>
            <button
                class="btn primary full"
                prop:disabled=move || !form.with(|f| f.can_buy())
                on:click=open_confirmation
            >
                "Buy Shares"
            </button>
        </div>

        {move || {
            pending_quote
                .get()
                .map(|quote| {
                    view! {
                        <div class="modal-backdrop">
                            <div class="modal">
                                <h3>"Confirm Purchase"</h3>
                                <div class="row"><span class="muted">"Amount"</span><span>{format_usd(quote.amount.value())}</span></div>
                                <div class="row"><span class="muted">"Shares"</span><span>{format_grouped(quote.shares.value())}</span></div>
                                <div class="row"><span class="muted">"Price per share"</span><span>{format_usd(quote.price_per_share.value())}</span></div>
                                <div class="row"><span class="muted">"Network fee"</span><span>{format_usd(quote.fee.value())}</span></div>
                                <div class="row"><strong>"Total"</strong><strong>{format_usd(quote.total_cost.value())}</strong></div>
                                <div class="row">
                                    <button class="btn danger" on:click=move |_| pending_quote.set(None)>"Cancel"</button>
                                    <button class="btn primary" on:click=confirm>"Confirm"</button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn RedeemShares(ledger: RwSignal<SharePackageLedger>) -> impl IntoView {
    let viewport = ViewportStore::from_context();
    let selected = create_rw_signal(None::<PackageId>);
    let prices = MarketPrices::mock();

    let quote = move || {
        selected.get().and_then(|id| {
            ledger.with(|l| l.get(&id).map(|p| (id.clone(), RedemptionQuote::for_package(p, &prices))))
        })
    };

    let confirm = move |id: PackageId| {
        match ledger.with(|l| l.redeem(&id)) {
            Ok(intent) => get_logger().info(
                LogComponent::Presentation("RedeemShares"),
                &format!("💱 Redemption submitted for {} ({} shares)", intent.package_id, intent.shares.value()),
            ),
            Err(e) => get_logger().warn(LogComponent::Presentation("RedeemShares"), &e.to_string()),
        }
        selected.set(None);
    };

    view! {
        <div class="stack">
            <div class="card stack">
                <h2>"Your Share Packages"</h2>
                <div class="grid-2">
                    <div class="tile">
                        <div class="muted">"Total shares"</div>
                        <div class="value">{move || format_grouped(ledger.with(|l| l.total_shares()))}</div>
                    </div>
                    <div class="tile">
                        <div class="muted">"Redeemable"</div>
                        <div class="value">{move || format_grouped(ledger.with(|l| l.redeemable_shares()))}</div>
                    </div>
                </div>
                <div class="progress">
                    <div style:width=move || format!("{:.1}%", ledger.with(|l| l.redeemable_ratio()))></div>
                </div>
            </div>
            <div class=move || if viewport.is_mobile() { "stack" } else { "grid-2" }>
                {move || {
                    ledger
                        .with(|l| l.packages().to_vec())
                        .into_iter()
                        .map(|package| view! { <PackageCard package=package selected=selected /> })
                        .collect_view()
                }}
            </div>
        </div>

        {move || {
            quote()
                .map(|(id, quote)| {
                    view! {
                        <div class="modal-backdrop">
                            <div class="modal">
                                <h3>{format!("Redeem Package {}", id)}</h3>
                                <div class="row"><span class="muted">"Shares"</span><span>{format_grouped(quote.shares.value())}</span></div>
                                <div class="row"><span class="muted">"Purchase price"</span><span>{format_usd(quote.purchase_price.value())}</span></div>
                                <div class="row"><span class="muted">"SRDBT value"</span><span>{format_usd(quote.srdbt_value.value())}</span></div>
                                <div class="row"><span class="muted">"USDC value"</span><span>{format_usd(quote.usdc_value.value())}</span></div>
                                <div class="row"><span class="muted">"Network fee"</span><span>{format_usd(quote.fee.value())}</span></div>
                                <div class="row"><strong>"You receive"</strong><strong>{format!("{} USDC", format_usd(quote.usdc_to_receive.value()))}</strong></div>
                                <div class="row">
                                    <button class="btn danger" on:click=move |_| selected.set(None)>"Cancel"</button>
                                    <button class="btn success" on:click=move |_| confirm(id.clone())>"Confirm Redemption"</button>
                                </div>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

#[component]
fn PackageCard(package: SharePackage, selected: RwSignal<Option<PackageId>>) -> impl IntoView {
    let redeemable = package.is_redeemable();
    let progress = format!("{:.1}%", package.maturity_progress());
    let id = package.id.clone();

    view! {
        <div class="card stack">
            <div class="row">
                <strong>{format!("Package {}", package.id)}</strong>
                {if redeemable {
                    view! { <span class="chip success">"Ready"</span> }
                } else {
                    view! { <span class="chip">"Locked"</span> }
                }}
            </div>
            <div class="grid-2">
                <div><div class="muted">"Shares"</div><div>{format_grouped(package.shares.value())}</div></div>
                <div><div class="muted">"Paid"</div><div>{format_usd(package.total_paid.value())}</div></div>
                <div><div class="muted">"Price"</div><div>{format_usd(package.purchase_price.value())}</div></div>
                <div><div class="muted">"Purchased"</div><div>{format_short_date(package.purchase_date.value())}</div></div>
            </div>
            <div class="row">
                <span class="muted">"Time remaining"</span>
                <span class="mono">
                    {if redeemable { "Ready to redeem".to_string() } else { format_time_remaining(package.time_remaining()) }}
                </span>
            </div>
            <div class="progress" class:warning=!redeemable>
                <div style:width=progress></div>
            </div>
            <button
                class="btn success full"
                prop:disabled=!redeemable
                on:click=move |_| selected.set(Some(id.clone()))
            >
                "Redeem"
            </button>
        </div>
    }
}
