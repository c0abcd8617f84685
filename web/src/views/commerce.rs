use api::stats;
use api::{Expenditure, ExpenditureFields, ExpenseCategory, PaymentStatus, Product, Sale, SaleFields};
use dioxus::prelude::*;
use ui::components::{Modal, Spinner};
use ui::icons::*;
use ui::{csv, platform, use_collection, Icon};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Sales,
    Expenditures,
}

/// Sales and expenditures with a shared date-range filter and CSV export.
#[component]
pub fn Commerce() -> Element {
    let sales = use_collection::<Sale>();
    let expenses = use_collection::<Expenditure>();
    let mut active_tab = use_signal(|| Tab::Sales);
    let mut date_from = use_signal(String::new);
    let mut date_to = use_signal(String::new);

    let mut show_sale_modal = use_signal(|| false);
    let mut editing_sale = use_signal(|| Option::<String>::None);
    let mut sale_form = use_signal(SaleFields::default);

    let mut show_expense_modal = use_signal(|| false);
    let mut editing_expense = use_signal(|| Option::<String>::None);
    let mut expense_form = use_signal(ExpenditureFields::default);

    let mut save_error = use_signal(String::new);

    let tab = active_tab();
    let from = date_from();
    let to = date_to();
    let loading = sales.loading() || expenses.loading();

    let sale_items: Vec<Sale> = sales
        .items()
        .iter()
        .filter(|s| stats::in_date_range(&s.date, &from, &to))
        .cloned()
        .collect();
    let expense_items: Vec<Expenditure> = expenses
        .items()
        .iter()
        .filter(|e| stats::in_date_range(&e.date, &from, &to))
        .cloned()
        .collect();

    let revenue = stats::total_sales(&sale_items);
    let spend = stats::total_expenditure(&expense_items);
    let net = revenue - spend;
    let revenue_label = format!("KES {revenue:.0}");
    let spend_label = format!("KES {spend:.0}");
    let net_label = format!("KES {net:.0}");
    let net_class = if net < 0.0 { "stat-value expense" } else { "stat-value" };

    let submit_sales = sales.clone();
    let handle_sale_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let collection = submit_sales.clone();
        spawn(async move {
            let mut fields = sale_form();
            if fields.total_amount.is_empty() {
                let total = stats::parse_amount(&fields.quantity) * stats::parse_amount(&fields.unit_price);
                fields.total_amount = format!("{total:.2}");
            }
            let result = match editing_sale() {
                Some(id) => collection.update(&id, &fields).await,
                None => collection.create(&fields).await,
            };
            match result {
                Ok(()) => show_sale_modal.set(false),
                Err(_) => save_error.set("Could not save this sale.".to_string()),
            }
        });
    };

    let submit_expenses = expenses.clone();
    let handle_expense_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let collection = submit_expenses.clone();
        spawn(async move {
            let fields = expense_form();
            let result = match editing_expense() {
                Some(id) => collection.update(&id, &fields).await,
                None => collection.create(&fields).await,
            };
            match result {
                Ok(()) => show_expense_modal.set(false),
                Err(_) => save_error.set("Could not save this expense.".to_string()),
            }
        });
    };

    let export_sales = sale_items.clone();
    let export_expenses = expense_items.clone();
    let handle_export = move |_| {
        let (content, name) = if active_tab() == Tab::Sales {
            let rows: Vec<Vec<String>> = export_sales
                .iter()
                .map(|s| {
                    vec![
                        s.date.clone(),
                        s.product.label().to_string(),
                        s.quantity.clone(),
                        s.unit_price.clone(),
                        s.total_amount.clone(),
                        s.customer_name.clone(),
                        s.payment_status.label().to_string(),
                    ]
                })
                .collect();
            let headers = ["Date", "Product", "Quantity", "Unit Price", "Total", "Customer", "Status"];
            (csv::to_csv(&headers, &rows), "sales")
        } else {
            let rows: Vec<Vec<String>> = export_expenses
                .iter()
                .map(|e| {
                    vec![
                        e.date.clone(),
                        e.category.label().to_string(),
                        e.amount.clone(),
                        e.description.clone(),
                    ]
                })
                .collect();
            (csv::to_csv(&["Date", "Category", "Amount", "Description"], &rows), "expenditure")
        };
        csv::download(&format!("{name}_{}.csv", platform::today()), &content);
    };

    let sale_rows = sale_items.into_iter().map(|sale| {
        let delete_collection = sales.clone();
        let delete_id = sale.id.clone();
        let edit_sale = sale.clone();
        let status_class = format!("badge badge-{}", sale.payment_status.value());
        rsx! {
            tr { key: "{sale.id}",
                td { "{sale.date}" }
                td { {sale.product.label()} }
                td { "{sale.quantity} {sale.unit}" }
                td { class: "mono", "{sale.total_amount}" }
                td { class: "muted", "{sale.customer_name}" }
                td { span { class: "{status_class}", {sale.payment_status.label()} } }
                td { class: "row-actions",
                    button {
                        class: "btn btn-icon",
                        title: "Edit",
                        onclick: move |_| {
                            editing_sale.set(Some(edit_sale.id.clone()));
                            sale_form.set(SaleFields::from(&edit_sale));
                            save_error.set(String::new());
                            show_sale_modal.set(true);
                        },
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-icon danger",
                        title: "Delete",
                        onclick: move |_| {
                            if !platform::confirm("Delete this sale?") {
                                return;
                            }
                            let collection = delete_collection.clone();
                            let id = delete_id.clone();
                            spawn(async move {
                                let _ = collection.delete(&id).await;
                            });
                        },
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    });

    let expense_rows = expense_items.into_iter().map(|expense| {
        let delete_collection = expenses.clone();
        let delete_id = expense.id.clone();
        let edit_expense = expense.clone();
        rsx! {
            tr { key: "{expense.id}",
                td { "{expense.date}" }
                td { span { class: "badge", {expense.category.label()} } }
                td { class: "mono", "{expense.amount}" }
                td { class: "muted", "{expense.description}" }
                td { class: "row-actions",
                    button {
                        class: "btn btn-icon",
                        title: "Edit",
                        onclick: move |_| {
                            editing_expense.set(Some(edit_expense.id.clone()));
                            expense_form.set(ExpenditureFields::from(&edit_expense));
                            save_error.set(String::new());
                            show_expense_modal.set(true);
                        },
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-icon danger",
                        title: "Delete",
                        onclick: move |_| {
                            if !platform::confirm("Delete this expense?") {
                                return;
                            }
                            let collection = delete_collection.clone();
                            let id = delete_id.clone();
                            spawn(async move {
                                let _ = collection.delete(&id).await;
                            });
                        },
                        Icon { icon: FaTrash, width: 14, height: 14 }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "page-header",
            h2 { "Commerce" }
            div { class: "page-actions",
                button { class: "btn", onclick: handle_export,
                    Icon { icon: FaDownload, width: 16, height: 16 }
                    "Export"
                }
                if tab == Tab::Sales {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing_sale.set(None);
                            sale_form.set(SaleFields {
                                date: platform::today(),
                                ..SaleFields::default()
                            });
                            save_error.set(String::new());
                            show_sale_modal.set(true);
                        },
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        "Record Sale"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing_expense.set(None);
                            expense_form.set(ExpenditureFields {
                                date: platform::today(),
                                ..ExpenditureFields::default()
                            });
                            save_error.set(String::new());
                            show_expense_modal.set(true);
                        },
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        "Record Expense"
                    }
                }
            }
        }

        div { class: "stat-grid",
            div { class: "stat-card",
                span { class: "stat-label", "Revenue" }
                span { class: "stat-value", "{revenue_label}" }
            }
            div { class: "stat-card",
                span { class: "stat-label", "Expenses" }
                span { class: "stat-value expense", "{spend_label}" }
            }
            div { class: "stat-card",
                span { class: "stat-label", "Net" }
                span { class: "{net_class}", "{net_label}" }
            }
        }

        div { class: "tabs",
            button {
                class: if tab == Tab::Sales { "tab tab-active" } else { "tab" },
                onclick: move |_| active_tab.set(Tab::Sales),
                "Sales"
            }
            button {
                class: if tab == Tab::Expenditures { "tab tab-active" } else { "tab" },
                onclick: move |_| active_tab.set(Tab::Expenditures),
                "Expenditures"
            }
        }

        div { class: "filter-bar",
            label { class: "form-label inline", "From"
                input {
                    class: "input",
                    r#type: "date",
                    value: date_from(),
                    oninput: move |evt| date_from.set(evt.value()),
                }
            }
            label { class: "form-label inline", "To"
                input {
                    class: "input",
                    r#type: "date",
                    value: date_to(),
                    oninput: move |evt| date_to.set(evt.value()),
                }
            }
        }

        if loading {
            div { class: "flex-center page-loading", Spinner { size: 40 } }
        } else if tab == Tab::Sales {
            div { class: "card table-card",
                table { class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Product" }
                            th { "Quantity" }
                            th { "Total" }
                            th { "Customer" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody { {sale_rows} }
                }
            }
        } else {
            div { class: "card table-card",
                table { class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Category" }
                            th { "Amount" }
                            th { "Description" }
                            th { "" }
                        }
                    }
                    tbody { {expense_rows} }
                }
            }
        }

        if show_sale_modal() {
            Modal {
                title: if editing_sale().is_some() { "Edit Sale".to_string() } else { "Record Sale".to_string() },
                on_close: move |_| show_sale_modal.set(false),
                form { class: "modal-form", onsubmit: handle_sale_submit,
                    div { class: "form-grid",
                        label { class: "form-label", "Date *"
                            input {
                                class: "input",
                                r#type: "date",
                                required: true,
                                value: sale_form().date,
                                oninput: move |evt| sale_form.write().date = evt.value(),
                            }
                        }
                        label { class: "form-label", "Product"
                            select {
                                class: "input",
                                value: sale_form().product.value(),
                                onchange: move |evt| {
                                    if let Some(product) = Product::from_value(&evt.value()) {
                                        sale_form.write().product = product;
                                    }
                                },
                                for product in Product::ALL {
                                    option { value: product.value(), {product.label()} }
                                }
                            }
                        }
                        label { class: "form-label", "Quantity *"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                required: true,
                                value: sale_form().quantity,
                                oninput: move |evt| sale_form.write().quantity = evt.value(),
                            }
                        }
                        label { class: "form-label", "Unit"
                            input {
                                class: "input",
                                placeholder: "liters, trays",
                                value: sale_form().unit,
                                oninput: move |evt| sale_form.write().unit = evt.value(),
                            }
                        }
                        label { class: "form-label", "Unit Price *"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                required: true,
                                value: sale_form().unit_price,
                                oninput: move |evt| sale_form.write().unit_price = evt.value(),
                            }
                        }
                        label { class: "form-label", "Customer"
                            input {
                                class: "input",
                                value: sale_form().customer_name,
                                oninput: move |evt| sale_form.write().customer_name = evt.value(),
                            }
                        }
                        label { class: "form-label", "Payment Status"
                            select {
                                class: "input",
                                value: sale_form().payment_status.value(),
                                onchange: move |evt| {
                                    if let Some(status) = PaymentStatus::from_value(&evt.value()) {
                                        sale_form.write().payment_status = status;
                                    }
                                },
                                for status in PaymentStatus::ALL {
                                    option { value: status.value(), {status.label()} }
                                }
                            }
                        }
                    }
                    if !save_error().is_empty() {
                        p { class: "error-text", "{save_error}" }
                    }
                    div { class: "modal-actions",
                        button { class: "btn", r#type: "button", onclick: move |_| show_sale_modal.set(false), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }

        if show_expense_modal() {
            Modal {
                title: if editing_expense().is_some() { "Edit Expense".to_string() } else { "Record Expense".to_string() },
                on_close: move |_| show_expense_modal.set(false),
                form { class: "modal-form", onsubmit: handle_expense_submit,
                    div { class: "form-grid",
                        label { class: "form-label", "Date *"
                            input {
                                class: "input",
                                r#type: "date",
                                required: true,
                                value: expense_form().date,
                                oninput: move |evt| expense_form.write().date = evt.value(),
                            }
                        }
                        label { class: "form-label", "Category"
                            select {
                                class: "input",
                                value: expense_form().category.value(),
                                onchange: move |evt| {
                                    if let Some(category) = ExpenseCategory::from_value(&evt.value()) {
                                        expense_form.write().category = category;
                                    }
                                },
                                for category in ExpenseCategory::ALL {
                                    option { value: category.value(), {category.label()} }
                                }
                            }
                        }
                        label { class: "form-label", "Amount *"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                required: true,
                                value: expense_form().amount,
                                oninput: move |evt| expense_form.write().amount = evt.value(),
                            }
                        }
                        label { class: "form-label wide", "Description"
                            textarea {
                                class: "input",
                                value: expense_form().description,
                                oninput: move |evt| expense_form.write().description = evt.value(),
                            }
                        }
                    }
                    if !save_error().is_empty() {
                        p { class: "error-text", "{save_error}" }
                    }
                    div { class: "modal-actions",
                        button { class: "btn", r#type: "button", onclick: move |_| show_expense_modal.set(false), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}
