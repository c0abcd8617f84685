use api::stats;
use api::{ProduceFields, ProduceRecord, ProduceType};
use dioxus::prelude::*;
use ui::components::{Modal, Spinner};
use ui::icons::*;
use ui::{csv, platform, use_collection, Icon};

/// Daily produce records, tabbed by type. Milk entries capture per-session
/// yields (the backend totals them); other types record a plain quantity.
#[component]
pub fn Produce() -> Element {
    let collection = use_collection::<ProduceRecord>();
    let mut active_tab = use_signal(|| ProduceType::Milk);
    let mut date_from = use_signal(String::new);
    let mut date_to = use_signal(String::new);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut form = use_signal(|| ProduceFields::for_type(ProduceType::Milk, platform::today()));
    let mut save_error = use_signal(String::new);

    let records = collection.items();
    let tab = active_tab();
    let from = date_from();
    let to = date_to();
    let filtered: Vec<ProduceRecord> = records
        .iter()
        .filter(|r| r.produce_type == tab && stats::in_date_range(&r.date, &from, &to))
        .cloned()
        .collect();

    let period_total: f64 = filtered.iter().map(|r| stats::parse_amount(&r.quantity)).sum();
    let period_label = format!("{period_total:.1} {}", filtered.first().map(|r| r.unit.clone()).unwrap_or_default());

    let submit_collection = collection.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let collection = submit_collection.clone();
        spawn(async move {
            let mut fields = form();
            // Only the fields this type uses go on the wire.
            if fields.produce_type == ProduceType::Milk {
                fields.quantity = None;
                fields.morning_yield = Some(fields.morning_yield.unwrap_or_else(|| "0".to_string()));
                fields.noon_yield = Some(fields.noon_yield.unwrap_or_else(|| "0".to_string()));
                fields.evening_yield = Some(fields.evening_yield.unwrap_or_else(|| "0".to_string()));
            } else {
                fields.morning_yield = None;
                fields.noon_yield = None;
                fields.evening_yield = None;
            }
            let result = match editing() {
                Some(id) => collection.update(&id, &fields).await,
                None => collection.create(&fields).await,
            };
            match result {
                Ok(()) => show_modal.set(false),
                Err(_) => save_error.set("Could not save this record.".to_string()),
            }
        });
    };

    let export_records = filtered.clone();
    let handle_export = move |_| {
        if export_records.is_empty() {
            return;
        }
        let rows: Vec<Vec<String>> = export_records
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.produce_type.label().to_string(),
                    r.quantity.clone(),
                    r.unit.clone(),
                ]
            })
            .collect();
        let content = csv::to_csv(&["Date", "Type", "Quantity", "Unit"], &rows);
        csv::download(&format!("produce_{}.csv", platform::today()), &content);
    };

    let rows = filtered.into_iter().map(|record| {
        let delete_collection = collection.clone();
        let delete_id = record.id.clone();
        let edit_record = record.clone();
        // Milk shows its session split; eggs show the server-computed crates.
        let detail = match record.produce_type {
            ProduceType::Milk => format!(
                "{} / {} / {}",
                record.morning_yield.clone().unwrap_or_else(|| "-".to_string()),
                record.noon_yield.clone().unwrap_or_else(|| "-".to_string()),
                record.evening_yield.clone().unwrap_or_else(|| "-".to_string()),
            ),
            ProduceType::Eggs => record
                .crates
                .clone()
                .map(|c| format!("{c} crates"))
                .unwrap_or_default(),
            _ => String::new(),
        };
        rsx! {
            tr { key: "{record.id}",
                td { "{record.date}" }
                td { "{record.quantity} {record.unit}" }
                td { class: "muted", "{detail}" }
                td { class: "row-actions",
                    button {
                        class: "btn btn-icon",
                        title: "Edit",
                        onclick: move |_| {
                            editing.set(Some(edit_record.id.clone()));
                            form.set(ProduceFields::from(&edit_record));
                            save_error.set(String::new());
                            show_modal.set(true);
                        },
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-icon danger",
                        title: "Delete",
                        onclick: move |_| {
                            if !platform::confirm("Delete this record?") {
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
            h2 { "Produce" }
            div { class: "page-actions",
                button { class: "btn", onclick: handle_export,
                    Icon { icon: FaDownload, width: 16, height: 16 }
                    "Export"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        form.set(ProduceFields::for_type(active_tab(), platform::today()));
                        save_error.set(String::new());
                        show_modal.set(true);
                    },
                    Icon { icon: FaPlus, width: 16, height: 16 }
                    "Record Produce"
                }
            }
        }

        div { class: "tabs",
            for produce_type in ProduceType::ALL {
                button {
                    key: "{produce_type.value()}",
                    class: if *produce_type == tab { "tab tab-active" } else { "tab" },
                    onclick: move |_| active_tab.set(*produce_type),
                    {produce_type.label()}
                }
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
            span { class: "muted", "Period total: {period_label}" }
        }

        if collection.loading() {
            div { class: "flex-center page-loading", Spinner { size: 40 } }
        } else {
            div { class: "card table-card",
                table { class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Quantity" }
                            th { "Details" }
                            th { "" }
                        }
                    }
                    tbody { {rows} }
                }
            }
        }

        if show_modal() {
            Modal {
                title: if editing().is_some() { "Edit Record".to_string() } else { "Record Produce".to_string() },
                on_close: move |_| show_modal.set(false),
                form { class: "modal-form", onsubmit: handle_submit,
                    div { class: "form-grid",
                        label { class: "form-label", "Date *"
                            input {
                                class: "input",
                                r#type: "date",
                                required: true,
                                value: form().date,
                                oninput: move |evt| form.write().date = evt.value(),
                            }
                        }
                        label { class: "form-label", "Type"
                            select {
                                class: "input",
                                value: form().produce_type.value(),
                                onchange: move |evt| {
                                    if let Some(produce_type) = ProduceType::from_value(&evt.value()) {
                                        form.write().produce_type = produce_type;
                                    }
                                },
                                for produce_type in ProduceType::ALL {
                                    option { value: produce_type.value(), {produce_type.label()} }
                                }
                            }
                        }
                        label { class: "form-label", "Unit"
                            input {
                                class: "input",
                                value: form().unit,
                                oninput: move |evt| form.write().unit = evt.value(),
                            }
                        }
                        if form().produce_type == ProduceType::Milk {
                            label { class: "form-label", "Morning Yield"
                                input {
                                    class: "input",
                                    r#type: "number",
                                    step: "0.01",
                                    value: form().morning_yield.unwrap_or_default(),
                                    oninput: move |evt| {
                                        let value = evt.value();
                                        form.write().morning_yield = Some(value).filter(|v| !v.is_empty());
                                    },
                                }
                            }
                            label { class: "form-label", "Noon Yield"
                                input {
                                    class: "input",
                                    r#type: "number",
                                    step: "0.01",
                                    value: form().noon_yield.unwrap_or_default(),
                                    oninput: move |evt| {
                                        let value = evt.value();
                                        form.write().noon_yield = Some(value).filter(|v| !v.is_empty());
                                    },
                                }
                            }
                            label { class: "form-label", "Evening Yield"
                                input {
                                    class: "input",
                                    r#type: "number",
                                    step: "0.01",
                                    value: form().evening_yield.unwrap_or_default(),
                                    oninput: move |evt| {
                                        let value = evt.value();
                                        form.write().evening_yield = Some(value).filter(|v| !v.is_empty());
                                    },
                                }
                            }
                        } else {
                            label { class: "form-label", "Quantity *"
                                input {
                                    class: "input",
                                    r#type: "number",
                                    step: "0.01",
                                    required: true,
                                    value: form().quantity.unwrap_or_default(),
                                    oninput: move |evt| {
                                        let value = evt.value();
                                        form.write().quantity = Some(value).filter(|v| !v.is_empty());
                                    },
                                }
                            }
                        }
                    }
                    if !save_error().is_empty() {
                        p { class: "error-text", "{save_error}" }
                    }
                    div { class: "modal-actions",
                        button { class: "btn", r#type: "button", onclick: move |_| show_modal.set(false), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}
