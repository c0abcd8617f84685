use api::stats;
use api::{Consumable, Expenditure, Livestock, ProduceRecord, ProduceType, Sale, Worker};
use dioxus::prelude::*;
use ui::components::Spinner;
use ui::icons::*;
use ui::{platform, use_collection, Icon};

use crate::Route;

/// Farm overview: headline numbers and recent commerce activity, all derived
/// from the fetched collections on the fly.
#[component]
pub fn Dashboard() -> Element {
    let livestock = use_collection::<Livestock>();
    let workers = use_collection::<Worker>();
    let sales = use_collection::<Sale>();
    let expenses = use_collection::<Expenditure>();
    let produce = use_collection::<ProduceRecord>();
    let consumables = use_collection::<Consumable>();

    if livestock.loading()
        || workers.loading()
        || sales.loading()
        || expenses.loading()
        || produce.loading()
        || consumables.loading()
    {
        return rsx! {
            div { class: "flex-center page-loading",
                Spinner { size: 40 }
            }
        };
    }

    let sales_items = sales.items();
    let expense_items = expenses.items();
    let produce_items = produce.items();

    let today = platform::today();
    let total_revenue = stats::total_sales(&sales_items);
    let total_expenses = stats::total_expenditure(&expense_items);
    let net_profit = total_revenue - total_expenses;
    let daily_milk = stats::daily_yield(&produce_items, ProduceType::Milk, &today);
    let daily_eggs = stats::daily_yield(&produce_items, ProduceType::Eggs, &today);
    let consumable_items = consumables.items();
    let low_stock = stats::low_stock(&consumable_items).len();

    let recent_sales: Vec<Sale> = sales_items.iter().take(5).cloned().collect();
    let recent_expenses: Vec<Expenditure> = expense_items.iter().take(5).cloned().collect();

    rsx! {
        div { class: "page-header",
            h2 { "Dashboard" }
        }
        div { class: "stat-grid",
            StatCard { label: "Total Livestock", value: stats::total_livestock(&livestock.items()).to_string(), to: Route::Livestock {}, icon: rsx! { Icon { icon: FaCow, width: 24, height: 24 } } }
            StatCard { label: "Farm Workers", value: workers.items().len().to_string(), to: Route::Workforce {}, icon: rsx! { Icon { icon: FaUsers, width: 24, height: 24 } } }
            StatCard { label: "Today's Milk", value: format!("{daily_milk:.1} L"), to: Route::Produce {}, icon: rsx! { Icon { icon: FaWheatAwn, width: 24, height: 24 } } }
            StatCard { label: "Today's Eggs", value: daily_eggs.to_string(), to: Route::Produce {}, icon: rsx! { Icon { icon: FaEgg, width: 24, height: 24 } } }
            StatCard { label: "Total Revenue", value: format!("KES {total_revenue:.0}"), to: Route::Commerce {}, icon: rsx! { Icon { icon: FaArrowTrendUp, width: 24, height: 24 } } }
            StatCard { label: "Total Expenses", value: format!("KES {total_expenses:.0}"), to: Route::Commerce {}, icon: rsx! { Icon { icon: FaArrowTrendDown, width: 24, height: 24 } } }
            StatCard { label: "Net Profit", value: format!("KES {net_profit:.0}"), to: Route::Commerce {}, icon: rsx! { Icon { icon: FaScaleBalanced, width: 24, height: 24 } } }
            StatCard { label: "Low Stock Items", value: low_stock.to_string(), to: Route::Inventory {}, icon: rsx! { Icon { icon: FaTriangleExclamation, width: 24, height: 24 } } }
        }
        div { class: "dashboard-panels",
            div { class: "card",
                div { class: "panel-header",
                    h3 { "Recent Sales" }
                    Link { to: Route::Commerce {}, class: "panel-link", "View All" }
                }
                if recent_sales.is_empty() {
                    p { class: "muted", "No sales recorded yet." }
                } else {
                    for sale in recent_sales {
                        div { key: "{sale.id}", class: "activity-row",
                            div {
                                div { class: "activity-title", "{sale.product}" }
                                div { class: "activity-date", "{sale.date}" }
                            }
                            div { class: "activity-amount", "KES {sale.total_amount}" }
                        }
                    }
                }
            }
            div { class: "card",
                div { class: "panel-header",
                    h3 { "Recent Expenses" }
                    Link { to: Route::Commerce {}, class: "panel-link", "View All" }
                }
                if recent_expenses.is_empty() {
                    p { class: "muted", "No expenses recorded yet." }
                } else {
                    for expense in recent_expenses {
                        div { key: "{expense.id}", class: "activity-row",
                            div {
                                div { class: "activity-title", "{expense.category}" }
                                div { class: "activity-date", "{expense.date}" }
                            }
                            div { class: "activity-amount expense", "KES {expense.amount}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn StatCard(label: String, value: String, to: Route, icon: Element) -> Element {
    rsx! {
        Link { class: "stat-card card", to,
            div { class: "stat-icon", {icon} }
            div {
                p { class: "stat-label", "{label}" }
                p { class: "stat-value", "{value}" }
            }
        }
    }
}
