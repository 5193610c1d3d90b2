use crate::gallery::controller::{CategoryGroup, FilterController};
use leptos::prelude::*;

/// Display label for a filter group: category name with the first letter
/// upper-cased.
fn group_label(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// The full filter bar: one button group per discovered category plus the
/// clear control.
#[component]
pub fn FilterBar() -> impl IntoView {
    let controller =
        use_context::<FilterController>().expect("FilterController not provided in context");

    let clear_class = move || {
        let config = controller.config();
        if controller.any_active() {
            format!("clear-filters {}", config.visible_class)
        } else {
            "clear-filters".to_string()
        }
    };

    view! {
        <div class="filter-bar">
            {controller
                .groups()
                .into_iter()
                .map(|group| view! { <FilterGroup group=group /> })
                .collect_view()}
            <button
                type="button"
                id="clear-filters"
                class=clear_class
                on:click=move |_| controller.reset()
            >
                "Clear filters"
            </button>
        </div>
    }
}

/// One category's toggle buttons. Exactly one value can be active; clicking
/// the active value deselects it.
#[component]
pub fn FilterGroup(group: CategoryGroup) -> impl IntoView {
    let controller =
        use_context::<FilterController>().expect("FilterController not provided in context");

    let CategoryGroup { category, values } = group;
    let group_id = controller.config().group_id(&category);
    let label = group_label(&category);

    view! {
        <div class="filter-group" id=group_id>
            <h4 class="filter-group__title">{label}</h4>
            <div class="filter-buttons">
                {values
                    .into_iter()
                    .map(|value| {
                        let category = category.clone();
                        view! { <FilterButton category=category value=value /> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn FilterButton(category: String, value: String) -> impl IntoView {
    let controller =
        use_context::<FilterController>().expect("FilterController not provided in context");

    let label = value.clone();
    let btn_class = {
        let category = category.clone();
        let value = value.clone();
        move || {
            if controller.is_selected(&category, &value) {
                format!("filter-btn {}", controller.config().active_class)
            } else {
                "filter-btn".to_string()
            }
        }
    };

    view! {
        <button
            type="button"
            class=btn_class
            on:click=move |_| controller.toggle(&category, &value)
        >
            {label}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_label() {
        assert_eq!(group_label("room"), "Room");
        assert_eq!(group_label("colour"), "Colour");
        assert_eq!(group_label(""), "");
    }
}
