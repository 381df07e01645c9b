use super::view_model::CategoryFilterVm;
use contracts::domain::a001_category_filter::FilterTag;
use contracts::shared::{CategoryBlock, PageConfig};
use leptos::prelude::*;

/// CSS class of a filter button.
pub fn button_class(active: bool) -> &'static str {
    if active {
        "cat-btn is-active"
    } else {
        "cat-btn"
    }
}

#[component]
fn FilterButton(vm: CategoryFilterVm, tag: FilterTag, label: String) -> impl IntoView {
    let filter_attr = tag.to_string();
    let tag_for_state = tag.clone();
    let is_active = Memo::new(move |_| vm.is_active(&tag_for_state));

    view! {
        <button
            type="button"
            class=move || button_class(is_active.get())
            data-filter=filter_attr
            aria-pressed=move || if is_active.get() { "true" } else { "false" }
            on:click=move |_| vm.select(tag.clone())
        >
            {label}
        </button>
    }
}

#[component]
fn CategoryBlockView(vm: CategoryFilterVm, block: CategoryBlock) -> impl IntoView {
    let CategoryBlock {
        category,
        title,
        body,
    } = block;
    let category_attr = category.clone();

    view! {
        <article
            class="category-block"
            data-category=category_attr
            hidden=move || !vm.is_visible(&category)
        >
            <h3 class="category-block__title">{title}</h3>
            <p class="category-block__body">{body}</p>
        </article>
    }
}

/// Filter buttons (the `all` sentinel first) followed by the category blocks.
#[component]
pub fn CategoryFilter(vm: CategoryFilterVm, config: PageConfig) -> impl IntoView {
    let PageConfig {
        all_label,
        categories,
        blocks,
        ..
    } = config;

    view! {
        <section class="category-filter">
            <div class="category-filter__buttons" role="group">
                <FilterButton vm=vm tag=FilterTag::All label=all_label />
                {categories
                    .into_iter()
                    .map(|c| view! {
                        <FilterButton vm=vm tag=FilterTag::parse(&c.tag) label=c.label />
                    })
                    .collect_view()}
            </div>
            <div class="category-filter__blocks">
                {blocks
                    .into_iter()
                    .map(|block| view! { <CategoryBlockView vm=vm block=block /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_class() {
        assert_eq!(button_class(true), "cat-btn is-active");
        assert_eq!(button_class(false), "cat-btn");
    }
}
