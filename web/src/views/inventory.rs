use api::stats;
use api::{Condition, Consumable, ConsumableFields, Tool, ToolFields};
use dioxus::prelude::*;
use ui::components::{Modal, Spinner};
use ui::icons::*;
use ui::{platform, use_collection, Icon};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Tools,
    Consumables,
}

/// Tools and consumable stock, with low-stock rows flagged against their
/// reorder threshold.
#[component]
pub fn Inventory() -> Element {
    let tools = use_collection::<Tool>();
    let consumables = use_collection::<Consumable>();
    let mut active_tab = use_signal(|| Tab::Tools);
    let mut search = use_signal(String::new);

    let mut show_tool_modal = use_signal(|| false);
    let mut editing_tool = use_signal(|| Option::<String>::None);
    let mut tool_form = use_signal(ToolFields::default);

    let mut show_stock_modal = use_signal(|| false);
    let mut editing_stock = use_signal(|| Option::<String>::None);
    let mut stock_form = use_signal(ConsumableFields::default);

    let mut save_error = use_signal(String::new);

    let tab = active_tab();
    let query = search();
    let loading = tools.loading() || consumables.loading();

    let tool_items = tools.items();
    let stock_items = consumables.items();
    let low_count = stats::low_stock(&stock_items).len();

    let submit_tools = tools.clone();
    let handle_tool_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let collection = submit_tools.clone();
        spawn(async move {
            let fields = tool_form();
            let result = match editing_tool() {
                Some(id) => collection.update(&id, &fields).await,
                None => collection.create(&fields).await,
            };
            match result {
                Ok(()) => show_tool_modal.set(false),
                Err(_) => save_error.set("Could not save this tool.".to_string()),
            }
        });
    };

    let submit_stock = consumables.clone();
    let handle_stock_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let collection = submit_stock.clone();
        spawn(async move {
            let fields = stock_form();
            let result = match editing_stock() {
                Some(id) => collection.update(&id, &fields).await,
                None => collection.create(&fields).await,
            };
            match result {
                Ok(()) => show_stock_modal.set(false),
                Err(_) => save_error.set("Could not save this item.".to_string()),
            }
        });
    };

    let tool_rows = tool_items
        .iter()
        .filter(|t| stats::contains_ci(&t.name, &query) || stats::contains_ci(&t.category, &query))
        .cloned()
        .map(|tool| {
            let delete_collection = tools.clone();
            let delete_id = tool.id.clone();
            let edit_tool = tool.clone();
            let condition_class = format!("badge badge-{}", tool.condition.value());
            rsx! {
                tr { key: "{tool.id}",
                    td { "{tool.name}" }
                    td { class: "muted", "{tool.category}" }
                    td { "{tool.quantity}" }
                    td { span { class: "{condition_class}", {tool.condition.label()} } }
                    td { class: "muted", "{tool.location}" }
                    td { class: "row-actions",
                        button {
                            class: "btn btn-icon",
                            title: "Edit",
                            onclick: move |_| {
                                editing_tool.set(Some(edit_tool.id.clone()));
                                tool_form.set(ToolFields::from(&edit_tool));
                                save_error.set(String::new());
                                show_tool_modal.set(true);
                            },
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        }
                        button {
                            class: "btn btn-icon danger",
                            title: "Delete",
                            onclick: move |_| {
                                if !platform::confirm("Delete this tool?") {
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
        })
        .collect::<Vec<_>>();

    let stock_rows = stock_items
        .iter()
        .filter(|c| stats::contains_ci(&c.item_name, &query))
        .cloned()
        .map(|item| {
            let delete_collection = consumables.clone();
            let delete_id = item.id.clone();
            let edit_item = item.clone();
            let is_low = stats::parse_amount(&item.quantity_on_hand)
                <= stats::parse_amount(&item.reorder_threshold);
            let row_class = if is_low { "low-stock" } else { "" };
            rsx! {
                tr { key: "{item.id}", class: "{row_class}",
                    td {
                        "{item.item_name}"
                        if is_low {
                            span { class: "badge badge-warn",
                                Icon { icon: FaTriangleExclamation, width: 12, height: 12 }
                                "Low"
                            }
                        }
                    }
                    td { "{item.quantity_on_hand} {item.unit}" }
                    td { class: "muted", "{item.reorder_threshold} {item.unit}" }
                    td { class: "row-actions",
                        button {
                            class: "btn btn-icon",
                            title: "Edit",
                            onclick: move |_| {
                                editing_stock.set(Some(edit_item.id.clone()));
                                stock_form.set(ConsumableFields::from(&edit_item));
                                save_error.set(String::new());
                                show_stock_modal.set(true);
                            },
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        }
                        button {
                            class: "btn btn-icon danger",
                            title: "Delete",
                            onclick: move |_| {
                                if !platform::confirm("Delete this item?") {
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
        })
        .collect::<Vec<_>>();

    rsx! {
        div { class: "page-header",
            h2 { "Inventory" }
            div { class: "page-actions",
                if tab == Tab::Tools {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing_tool.set(None);
                            tool_form.set(ToolFields::default());
                            save_error.set(String::new());
                            show_tool_modal.set(true);
                        },
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        "Add Tool"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing_stock.set(None);
                            stock_form.set(ConsumableFields::default());
                            save_error.set(String::new());
                            show_stock_modal.set(true);
                        },
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        "Add Item"
                    }
                }
            }
        }

        div { class: "tabs",
            button {
                class: if tab == Tab::Tools { "tab tab-active" } else { "tab" },
                onclick: move |_| active_tab.set(Tab::Tools),
                "Tools"
            }
            button {
                class: if tab == Tab::Consumables { "tab tab-active" } else { "tab" },
                onclick: move |_| active_tab.set(Tab::Consumables),
                "Consumables"
                if low_count > 0 {
                    span { class: "badge badge-warn", "{low_count}" }
                }
            }
        }

        div { class: "search-bar",
            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
            input {
                class: "input",
                placeholder: "Search by name or category",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }
        }

        if loading {
            div { class: "flex-center page-loading", Spinner { size: 40 } }
        } else if tab == Tab::Tools {
            div { class: "card table-card",
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Category" }
                            th { "Qty" }
                            th { "Condition" }
                            th { "Location" }
                            th { "" }
                        }
                    }
                    tbody { {tool_rows.into_iter()} }
                }
            }
        } else {
            div { class: "card table-card",
                table { class: "table",
                    thead {
                        tr {
                            th { "Item" }
                            th { "On Hand" }
                            th { "Reorder At" }
                            th { "" }
                        }
                    }
                    tbody { {stock_rows.into_iter()} }
                }
            }
        }

        if show_tool_modal() {
            Modal {
                title: if editing_tool().is_some() { "Edit Tool".to_string() } else { "Add Tool".to_string() },
                on_close: move |_| show_tool_modal.set(false),
                form { class: "modal-form", onsubmit: handle_tool_submit,
                    div { class: "form-grid",
                        label { class: "form-label", "Name *"
                            input {
                                class: "input",
                                required: true,
                                value: tool_form().name,
                                oninput: move |evt| tool_form.write().name = evt.value(),
                            }
                        }
                        label { class: "form-label", "Category"
                            input {
                                class: "input",
                                value: tool_form().category,
                                oninput: move |evt| tool_form.write().category = evt.value(),
                            }
                        }
                        label { class: "form-label", "Quantity"
                            input {
                                class: "input",
                                r#type: "number",
                                min: "1",
                                value: "{tool_form().quantity}",
                                oninput: move |evt| {
                                    if let Ok(quantity) = evt.value().parse() {
                                        tool_form.write().quantity = quantity;
                                    }
                                },
                            }
                        }
                        label { class: "form-label", "Condition"
                            select {
                                class: "input",
                                value: tool_form().condition.value(),
                                onchange: move |evt| {
                                    if let Some(condition) = Condition::from_value(&evt.value()) {
                                        tool_form.write().condition = condition;
                                    }
                                },
                                for condition in Condition::ALL {
                                    option { value: condition.value(), {condition.label()} }
                                }
                            }
                        }
                        label { class: "form-label", "Location"
                            input {
                                class: "input",
                                value: tool_form().location,
                                oninput: move |evt| tool_form.write().location = evt.value(),
                            }
                        }
                        label { class: "form-label wide", "Notes"
                            textarea {
                                class: "input",
                                value: tool_form().notes,
                                oninput: move |evt| tool_form.write().notes = evt.value(),
                            }
                        }
                    }
                    if !save_error().is_empty() {
                        p { class: "error-text", "{save_error}" }
                    }
                    div { class: "modal-actions",
                        button { class: "btn", r#type: "button", onclick: move |_| show_tool_modal.set(false), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }

        if show_stock_modal() {
            Modal {
                title: if editing_stock().is_some() { "Edit Item".to_string() } else { "Add Item".to_string() },
                on_close: move |_| show_stock_modal.set(false),
                form { class: "modal-form", onsubmit: handle_stock_submit,
                    div { class: "form-grid",
                        label { class: "form-label", "Item Name *"
                            input {
                                class: "input",
                                required: true,
                                value: stock_form().item_name,
                                oninput: move |evt| stock_form.write().item_name = evt.value(),
                            }
                        }
                        label { class: "form-label", "Unit *"
                            input {
                                class: "input",
                                required: true,
                                placeholder: "kg, liters, bags",
                                value: stock_form().unit,
                                oninput: move |evt| stock_form.write().unit = evt.value(),
                            }
                        }
                        label { class: "form-label", "Quantity On Hand *"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                required: true,
                                value: stock_form().quantity_on_hand,
                                oninput: move |evt| stock_form.write().quantity_on_hand = evt.value(),
                            }
                        }
                        label { class: "form-label", "Reorder Threshold *"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                required: true,
                                value: stock_form().reorder_threshold,
                                oninput: move |evt| stock_form.write().reorder_threshold = evt.value(),
                            }
                        }
                        label { class: "form-label", "Unit Price"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                value: stock_form().unit_price.unwrap_or_default(),
                                oninput: move |evt| {
                                    let value = evt.value();
                                    stock_form.write().unit_price = Some(value).filter(|v| !v.is_empty());
                                },
                            }
                        }
                    }
                    if !save_error().is_empty() {
                        p { class: "error-text", "{save_error}" }
                    }
                    div { class: "modal-actions",
                        button { class: "btn", r#type: "button", onclick: move |_| show_stock_modal.set(false), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}
