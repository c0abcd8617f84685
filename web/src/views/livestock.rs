use api::stats;
use api::{Livestock as Animal, LivestockCategory, LivestockFields, LivestockStatus, Sex, Species};
use dioxus::prelude::*;
use ui::components::{Modal, Spinner};
use ui::icons::*;
use ui::{csv, platform, use_collection, Icon};

/// Livestock register: searchable table, per-species head counts, CSV
/// export, and an add/edit modal.
#[component]
pub fn Livestock() -> Element {
    let collection = use_collection::<Animal>();
    let mut filter = use_signal(String::new);
    let mut show_modal = use_signal(|| false);
    let mut editing = use_signal(|| Option::<String>::None);
    let mut form = use_signal(LivestockFields::default);
    let mut save_error = use_signal(String::new);

    let animals = collection.items();
    let query = filter();
    let filtered: Vec<Animal> = animals
        .iter()
        .filter(|a| {
            stats::contains_ci(&a.tag_id, &query)
                || stats::contains_ci(&a.name, &query)
                || stats::contains_ci(&a.breed, &query)
        })
        .cloned()
        .collect();

    let species_counts: Vec<(Species, u32)> = Species::ALL
        .iter()
        .map(|&s| (s, animals.iter().filter(|a| a.species == s).map(|a| a.quantity).sum()))
        .filter(|(_, count)| *count > 0)
        .collect();

    let submit_collection = collection.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let collection = submit_collection.clone();
        spawn(async move {
            let fields = form();
            let result = match editing() {
                Some(id) => collection.update(&id, &fields).await,
                None => collection.create(&fields).await,
            };
            match result {
                Ok(()) => show_modal.set(false),
                Err(_) => save_error.set("Could not save. Make sure the Tag ID is unique.".to_string()),
            }
        });
    };

    let export_collection = collection.clone();
    let handle_export = move |_| {
        let animals = export_collection.items();
        if animals.is_empty() {
            return;
        }
        let rows: Vec<Vec<String>> = animals
            .iter()
            .map(|a| {
                vec![
                    a.tag_id.clone(),
                    a.name.clone(),
                    a.species.label().to_string(),
                    a.category.label().to_string(),
                    a.breed.clone(),
                    a.sex.label().to_string(),
                    a.quantity.to_string(),
                    a.status.label().to_string(),
                    a.current_weight.clone().unwrap_or_default(),
                ]
            })
            .collect();
        let content = csv::to_csv(
            &["Tag ID", "Name", "Species", "Category", "Breed", "Sex", "Quantity", "Status", "Weight"],
            &rows,
        );
        csv::download(&format!("livestock_{}.csv", platform::today()), &content);
    };

    let rows = filtered.into_iter().map(|animal| {
        let delete_collection = collection.clone();
        let delete_id = animal.id.clone();
        let edit_animal = animal.clone();
        let status_class = format!("badge badge-{}", animal.status.value());
        rsx! {
            tr { key: "{animal.id}",
                td { class: "mono", "{animal.tag_id}" }
                td { "{animal.name}" }
                td { {animal.species.label()} }
                td { {animal.category.label()} }
                td { "{animal.breed}" }
                td { "{animal.quantity}" }
                td {
                    span { class: "{status_class}", {animal.status.label()} }
                }
                td { class: "row-actions",
                    button {
                        class: "btn btn-icon",
                        title: "Edit",
                        onclick: move |_| {
                            editing.set(Some(edit_animal.id.clone()));
                            form.set(LivestockFields::from(&edit_animal));
                            save_error.set(String::new());
                            show_modal.set(true);
                        },
                        Icon { icon: FaPenToSquare, width: 14, height: 14 }
                    }
                    button {
                        class: "btn btn-icon danger",
                        title: "Delete",
                        onclick: move |_| {
                            if !platform::confirm("Are you sure you want to delete this animal?") {
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
            h2 { "Livestock" }
            div { class: "page-actions",
                button { class: "btn", onclick: handle_export,
                    Icon { icon: FaDownload, width: 16, height: 16 }
                    "Export"
                }
                button {
                    class: "btn btn-primary",
                    onclick: move |_| {
                        editing.set(None);
                        form.set(LivestockFields::default());
                        save_error.set(String::new());
                        show_modal.set(true);
                    },
                    Icon { icon: FaPlus, width: 16, height: 16 }
                    "Add Animal"
                }
            }
        }

        if !species_counts.is_empty() {
            div { class: "chip-row",
                for (species, count) in species_counts {
                    span { key: "{species.value()}", class: "chip",
                        {species.label()}
                        ": {count}"
                    }
                }
            }
        }

        div { class: "search-bar",
            Icon { icon: FaMagnifyingGlass, width: 16, height: 16 }
            input {
                class: "input",
                placeholder: "Search by tag, name or breed...",
                value: filter(),
                oninput: move |evt| filter.set(evt.value()),
            }
        }

        if collection.loading() {
            div { class: "flex-center page-loading", Spinner { size: 40 } }
        } else {
            div { class: "card table-card",
                table { class: "table",
                    thead {
                        tr {
                            th { "Tag ID" }
                            th { "Name" }
                            th { "Species" }
                            th { "Category" }
                            th { "Breed" }
                            th { "Qty" }
                            th { "Status" }
                            th { "" }
                        }
                    }
                    tbody { {rows} }
                }
            }
        }

        if show_modal() {
            Modal {
                title: if editing().is_some() { "Edit Animal".to_string() } else { "Add Animal".to_string() },
                on_close: move |_| show_modal.set(false),
                form { class: "modal-form", onsubmit: handle_submit,
                    div { class: "form-grid",
                        label { class: "form-label", "Tag ID *"
                            input {
                                class: "input",
                                required: true,
                                value: form().tag_id,
                                oninput: move |evt| form.write().tag_id = evt.value(),
                            }
                        }
                        label { class: "form-label", "Name"
                            input {
                                class: "input",
                                value: form().name,
                                oninput: move |evt| form.write().name = evt.value(),
                            }
                        }
                        label { class: "form-label", "Species"
                            select {
                                class: "input",
                                value: form().species.value(),
                                onchange: move |evt| {
                                    if let Some(species) = Species::from_value(&evt.value()) {
                                        form.write().species = species;
                                    }
                                },
                                for species in Species::ALL {
                                    option { value: species.value(), {species.label()} }
                                }
                            }
                        }
                        label { class: "form-label", "Category"
                            select {
                                class: "input",
                                value: form().category.value(),
                                onchange: move |evt| {
                                    if let Some(category) = LivestockCategory::from_value(&evt.value()) {
                                        form.write().category = category;
                                    }
                                },
                                for category in LivestockCategory::ALL {
                                    option { value: category.value(), {category.label()} }
                                }
                            }
                        }
                        label { class: "form-label", "Breed"
                            input {
                                class: "input",
                                value: form().breed,
                                oninput: move |evt| form.write().breed = evt.value(),
                            }
                        }
                        label { class: "form-label", "Sex"
                            select {
                                class: "input",
                                value: form().sex.value(),
                                onchange: move |evt| {
                                    if let Some(sex) = Sex::from_value(&evt.value()) {
                                        form.write().sex = sex;
                                    }
                                },
                                for sex in Sex::ALL {
                                    option { value: sex.value(), {sex.label()} }
                                }
                            }
                        }
                        label { class: "form-label", "Quantity"
                            input {
                                class: "input",
                                r#type: "number",
                                min: "1",
                                value: "{form().quantity}",
                                oninput: move |evt| {
                                    if let Ok(quantity) = evt.value().parse() {
                                        form.write().quantity = quantity;
                                    }
                                },
                            }
                        }
                        label { class: "form-label", "Status"
                            select {
                                class: "input",
                                value: form().status.value(),
                                onchange: move |evt| {
                                    if let Some(status) = LivestockStatus::from_value(&evt.value()) {
                                        form.write().status = status;
                                    }
                                },
                                for status in LivestockStatus::ALL {
                                    option { value: status.value(), {status.label()} }
                                }
                            }
                        }
                        label { class: "form-label", "Date of Birth"
                            input {
                                class: "input",
                                r#type: "date",
                                value: form().dob.unwrap_or_default(),
                                oninput: move |evt| {
                                    let value = evt.value();
                                    form.write().dob = Some(value).filter(|v| !v.is_empty());
                                },
                            }
                        }
                        label { class: "form-label", "Purchase Date"
                            input {
                                class: "input",
                                r#type: "date",
                                value: form().purchase_date.unwrap_or_default(),
                                oninput: move |evt| {
                                    let value = evt.value();
                                    form.write().purchase_date = Some(value).filter(|v| !v.is_empty());
                                },
                            }
                        }
                        label { class: "form-label", "Purchase Price (KES)"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                value: form().purchase_price.unwrap_or_default(),
                                oninput: move |evt| {
                                    let value = evt.value();
                                    form.write().purchase_price = Some(value).filter(|v| !v.is_empty());
                                },
                            }
                        }
                        label { class: "form-label", "Current Weight (kg)"
                            input {
                                class: "input",
                                r#type: "number",
                                step: "0.01",
                                value: form().current_weight.unwrap_or_default(),
                                oninput: move |evt| {
                                    let value = evt.value();
                                    form.write().current_weight = Some(value).filter(|v| !v.is_empty());
                                },
                            }
                        }
                    }
                    label { class: "form-label", "Notes"
                        textarea {
                            class: "input",
                            rows: "3",
                            value: form().notes,
                            oninput: move |evt| form.write().notes = evt.value(),
                        }
                    }
                    if !save_error().is_empty() {
                        p { class: "error-text", "{save_error}" }
                    }
                    div { class: "modal-actions",
                        button { class: "btn", r#type: "button", onclick: move |_| show_modal.set(false), "Cancel" }
                        button { class: "btn btn-primary", r#type: "submit",
                            if editing().is_some() { "Save Changes" } else { "Add Animal" }
                        }
                    }
                }
            }
        }
    }
}
