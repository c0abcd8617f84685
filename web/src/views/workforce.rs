use api::stats;
use api::{EmploymentType, Kibarua, KibaruaFields, Worker, WorkerFields};
use dioxus::prelude::*;
use ui::components::{Modal, Spinner};
use ui::icons::*;
use ui::{platform, use_collection, Icon};

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Workers,
    Kibarua,
}

/// Payroll workers and kibarua (day-labor) payment entries.
#[component]
pub fn Workforce() -> Element {
    let workers = use_collection::<Worker>();
    let kibarua = use_collection::<Kibarua>();
    let mut active_tab = use_signal(|| Tab::Workers);
    let mut search = use_signal(String::new);

    let mut show_worker_modal = use_signal(|| false);
    let mut editing_worker = use_signal(|| Option::<String>::None);
    let mut worker_form = use_signal(WorkerFields::default);

    let mut show_kibarua_modal = use_signal(|| false);
    let mut editing_kibarua = use_signal(|| Option::<String>::None);
    let mut kibarua_form = use_signal(KibaruaFields::default);

    let mut save_error = use_signal(String::new);

    let tab = active_tab();
    let query = search();
    let loading = workers.loading() || kibarua.loading();

    let worker_items = workers.items();
    let kibarua_items = kibarua.items();

    let monthly_salaries: f64 = worker_items
        .iter()
        .filter_map(|w| w.salary.as_deref())
        .map(stats::parse_amount)
        .sum();
    let kibarua_paid: f64 = kibarua_items.iter().map(|k| stats::parse_amount(&k.amount_paid)).sum();
    let monthly_label = format!("KES {monthly_salaries:.0}");
    let paid_label = format!("KES {kibarua_paid:.0}");

    let submit_workers = workers.clone();
    let handle_worker_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let collection = submit_workers.clone();
        spawn(async move {
            let fields = worker_form();
            let result = match editing_worker() {
                Some(id) => collection.update(&id, &fields).await,
                None => collection.create(&fields).await,
            };
            match result {
                Ok(()) => show_worker_modal.set(false),
                Err(_) => save_error.set("Could not save this worker.".to_string()),
            }
        });
    };

    let submit_kibarua = kibarua.clone();
    let handle_kibarua_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let collection = submit_kibarua.clone();
        spawn(async move {
            let fields = kibarua_form();
            let result = match editing_kibarua() {
                Some(id) => collection.update(&id, &fields).await,
                None => collection.create(&fields).await,
            };
            match result {
                Ok(()) => show_kibarua_modal.set(false),
                Err(_) => save_error.set("Could not save this entry.".to_string()),
            }
        });
    };

    let worker_rows = worker_items
        .iter()
        .filter(|w| stats::contains_ci(&w.full_name, &query) || stats::contains_ci(&w.role, &query))
        .cloned()
        .map(|worker| {
            let delete_collection = workers.clone();
            let delete_id = worker.id.clone();
            let edit_worker = worker.clone();
            let salary = worker.salary.clone().unwrap_or_else(|| "-".to_string());
            rsx! {
                tr { key: "{worker.id}",
                    td { "{worker.full_name}" }
                    td { class: "muted", "{worker.role}" }
                    td { span { class: "badge", {worker.employment_type.label()} } }
                    td { class: "muted", "{worker.phone}" }
                    td { class: "mono", "{salary}" }
                    td { class: "row-actions",
                        button {
                            class: "btn btn-icon",
                            title: "Edit",
                            onclick: move |_| {
                                editing_worker.set(Some(edit_worker.id.clone()));
                                worker_form.set(WorkerFields::from(&edit_worker));
                                save_error.set(String::new());
                                show_worker_modal.set(true);
                            },
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        }
                        button {
                            class: "btn btn-icon danger",
                            title: "Delete",
                            onclick: move |_| {
                                if !platform::confirm("Remove this worker?") {
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

    let kibarua_rows = kibarua_items
        .iter()
        .filter(|k| {
            stats::contains_ci(&k.worker_name, &query)
                || stats::contains_ci(&k.work_description, &query)
        })
        .cloned()
        .map(|entry| {
            let delete_collection = kibarua.clone();
            let delete_id = entry.id.clone();
            let edit_entry = entry.clone();
            rsx! {
                tr { key: "{entry.id}",
                    td { "{entry.date}" }
                    td { "{entry.worker_name}" }
                    td { class: "muted", "{entry.work_description}" }
                    td { class: "mono", "{entry.amount_paid}" }
                    td { class: "row-actions",
                        button {
                            class: "btn btn-icon",
                            title: "Edit",
                            onclick: move |_| {
                                editing_kibarua.set(Some(edit_entry.id.clone()));
                                kibarua_form.set(KibaruaFields::from(&edit_entry));
                                save_error.set(String::new());
                                show_kibarua_modal.set(true);
                            },
                            Icon { icon: FaPenToSquare, width: 14, height: 14 }
                        }
                        button {
                            class: "btn btn-icon danger",
                            title: "Delete",
                            onclick: move |_| {
                                if !platform::confirm("Delete this entry?") {
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
            h2 { "Workforce" }
            div { class: "page-actions",
                if tab == Tab::Workers {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing_worker.set(None);
                            worker_form.set(WorkerFields::default());
                            save_error.set(String::new());
                            show_worker_modal.set(true);
                        },
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        "Add Worker"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        onclick: move |_| {
                            editing_kibarua.set(None);
                            kibarua_form.set(KibaruaFields {
                                date: platform::today(),
                                ..KibaruaFields::default()
                            });
                            save_error.set(String::new());
                            show_kibarua_modal.set(true);
                        },
                        Icon { icon: FaPlus, width: 16, height: 16 }
                        "Record Kibarua"
                    }
                }
            }
        }

        div { class: "stat-grid",
            div { class: "stat-card",
                span { class: "stat-label", "Workers" }
                span { class: "stat-value", "{worker_items.len()}" }
            }
            div { class: "stat-card",
                span { class: "stat-label", "Monthly Salaries" }
                span { class: "stat-value", "{monthly_label}" }
            }
            div { class: "stat-card",
                span { class: "stat-label", "Kibarua Paid" }
                span { class: "stat-value", "{paid_label}" }
            }
        }

        div { class: "tabs",
            button {
                class: if tab == Tab::Workers { "tab tab-active" } else { "tab" },
                onclick: move |_| active_tab.set(Tab::Workers),
                "Workers"
            }
            button {
                class: if tab == Tab::Kibarua { "tab tab-active" } else { "tab" },
                onclick: move |_| active_tab.set(Tab::Kibarua),
                "Kibarua"
            }
        }

        div { class: "search-bar",
            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
            input {
                class: "input",
                placeholder: "Search by name or role",
                value: search(),
                oninput: move |evt| search.set(evt.value()),
            }
        }

        if loading {
            div { class: "flex-center page-loading", Spinner { size: 40 } }
        } else if tab == Tab::Workers {
            div { class: "card table-card",
                table { class: "table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Role" }
                            th { "Type" }
                            th { "Phone" }
                            th { "Salary" }
                            th { "" }
                        }
                    }
                    tbody { {worker_rows.into_iter()} }
                }
            }
        } else {
            div { class: "card table-card",
                table { class: "table",
                    thead {
                        tr {
                            th { "Date" }
                            th { "Name" }
                            th { "Work Done" }
                            th { "Paid" }
                            th { "" }
                        }
                    }
                    tbody { {kibarua_rows.into_iter()} }
                }
            }
        }

        if show_worker_modal() {
            Modal {
                title: if editing_worker().is_some() { "Edit Worker".to_string() } else { "Add Worker".to_string() },
                on_close: move |_| show_worker_modal.set(false),
                form { class: "modal-form", onsubmit: handle_worker_submit,
                    div { class: "form-grid",
                        label { class: "form-label", "Full Name *"
                            input {
                                class: "input",
                                required: true,
                                value: worker_form().full_name,
                                oninput: move |evt| worker_form.write().full_name = evt.value(),
                            }
                        }
                        label { class: "form-label", "National ID"
                            input {
                                class: "input",
                                value: worker_form().national_id,
                                oninput: move |evt| worker_form.write().national_id = evt.value(),
                            }
                        }
                        label { class: "form-label", "Role *"
                            input {
                                class: "input",
                                required: true,
                                placeholder: "Herdsman, Milker",
                                value: worker_form().role,
                                oninput: move |evt| worker_form.write().role = evt.value(),
                            }
                        }
                        label { class: "form-label", "Employment Type"
                            select {
                                class: "input",
                                value: worker_form().employment_type.value(),
                                onchange: move |evt| {
                                    if let Some(employment_type) = EmploymentType::from_value(&evt.value()) {
                                        worker_form.write().employment_type = employment_type;
                                    }
                                },
                                for employment_type in EmploymentType::ALL {
                                    option { value: employment_type.value(), {employment_type.label()} }
                                }
                            }
                        }
                        label { class: "form-label", "Phone"
                            input {
                                class: "input",
                                value: worker_form().phone,
                                oninput: move |evt| worker_form.write().phone = evt.value(),
                            }
                        }
                        label { class: "form-label", "Address"
                            input {
                                class: "input",
                                value: worker_form().address,
                                oninput: move |evt| worker_form.write().address = evt.value(),
                            }
                        }
                        label { class: "form-label", "Hired Date"
                            input {
                                class: "input",
                                r#type: "date",
                                value: worker_form().hired_date.unwrap_or_default(),
                                oninput: move |evt| {
                                    let value = evt.value();
                                    worker_form.write().hired_date = Some(value).filter(|v| !v.is_empty());
                                },
                            }
                        }
                        label { class: "form-label", "Monthly Salary"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                value: worker_form().salary.unwrap_or_default(),
                                oninput: move |evt| {
                                    let value = evt.value();
                                    worker_form.write().salary = Some(value).filter(|v| !v.is_empty());
                                },
                            }
                        }
                        label { class: "form-label wide", "Notes"
                            textarea {
                                class: "input",
                                value: worker_form().notes,
                                oninput: move |evt| worker_form.write().notes = evt.value(),
                            }
                        }
                    }
                    if !save_error().is_empty() {
                        p { class: "error-text", "{save_error}" }
                    }
                    div { class: "modal-actions",
                        button { class: "btn", r#type: "button", onclick: move |_| show_worker_modal.set(false), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }

        if show_kibarua_modal() {
            Modal {
                title: if editing_kibarua().is_some() { "Edit Kibarua".to_string() } else { "Record Kibarua".to_string() },
                on_close: move |_| show_kibarua_modal.set(false),
                form { class: "modal-form", onsubmit: handle_kibarua_submit,
                    div { class: "form-grid",
                        label { class: "form-label", "Date *"
                            input {
                                class: "input",
                                r#type: "date",
                                required: true,
                                value: kibarua_form().date,
                                oninput: move |evt| kibarua_form.write().date = evt.value(),
                            }
                        }
                        label { class: "form-label", "Worker Name *"
                            input {
                                class: "input",
                                required: true,
                                value: kibarua_form().worker_name,
                                oninput: move |evt| kibarua_form.write().worker_name = evt.value(),
                            }
                        }
                        label { class: "form-label", "Amount Paid *"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                required: true,
                                value: kibarua_form().amount_paid,
                                oninput: move |evt| kibarua_form.write().amount_paid = evt.value(),
                            }
                        }
                        label { class: "form-label wide", "Work Description *"
                            textarea {
                                class: "input",
                                required: true,
                                value: kibarua_form().work_description,
                                oninput: move |evt| kibarua_form.write().work_description = evt.value(),
                            }
                        }
                    }
                    if !save_error().is_empty() {
                        p { class: "error-text", "{save_error}" }
                    }
                    div { class: "modal-actions",
                        button { class: "btn", r#type: "button", onclick: move |_| show_kibarua_modal.set(false), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit", "Save" }
                    }
                }
            }
        }
    }
}
