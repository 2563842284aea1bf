use catalog_core::view::{
    CatalogView, ProductRow, TableBody, TestId, ALL_LABEL, COLUMNS, FILTERS_HEADING,
    NO_MATCHES_MESSAGE, PAGE_TITLE, RESET_ALL_LABEL, SEARCH_PLACEHOLDER,
};
use catalog_core::{Catalog, FilterCriteria, FilterEvent};
use leptonic::prelude::{LeptonicTheme, Root};
use leptos::*;
use tracing::{info, Level};

fn main() {
    // Init logger
    tracing_wasm::set_as_global_default_with_config(
        tracing_wasm::WASMLayerConfigBuilder::new().set_max_level(Level::DEBUG).build(),
    );
    info!("starting app");

    // an inconsistent catalog must not be rendered at all
    let catalog = Catalog::seed().expect("bundled catalog should be consistent");
    logging::log!("Loaded {} products", catalog.records().len());

    mount_to_body(move || view! { <App catalog/> });
}

#[component]
fn App(catalog: Catalog) -> impl IntoView {
    let catalog = store_value(catalog);
    let criteria = create_rw_signal(FilterCriteria::new());
    let search_box = create_node_ref::<html::Input>();

    // only notify subscribers when the criteria actually changed. the search
    // box is written directly since its text can change even when the
    // criteria do not
    let on_event = Callback::new(move |event: FilterEvent| {
        let box_text = event.search_box_text();
        let mut next = criteria.get_untracked();
        if next.apply(event) {
            criteria.set(next);
        }
        if let (Some(text), Some(input)) = (box_text, search_box.get_untracked()) {
            if input.value() != text {
                input.set_value(&text);
            }
        }
    });

    let catalog_view = create_memo(move |_| {
        logging::log!("Recomputing visible products");
        criteria.with(|criteria| catalog.with_value(|catalog| CatalogView::derive(catalog, criteria)))
    });

    view! {
        <Root default_theme=LeptonicTheme::default()>
            <div class="section">
                <div class="container">
                    <h1 class="title">{PAGE_TITLE}</h1>

                    <div class="block">
                        <nav class="panel">
                            <p class="panel-heading">{FILTERS_HEADING}</p>
                            <UserTabs catalog_view on_event/>
                            <SearchBox search_box on_event/>
                            <CategoryButtons catalog_view on_event/>
                            <div class="panel-block">
                                <a
                                    data-cy=TestId::ResetAllButton.as_str()
                                    href="#/"
                                    class="button is-link is-outlined is-fullwidth"
                                    on:click=move |_| on_event.call(FilterEvent::ResetAll)
                                >
                                    {RESET_ALL_LABEL}
                                </a>
                            </div>
                        </nav>
                    </div>

                    <div class="box table-container">
                        {move || catalog_view.with(|catalog_view| match &catalog_view.body {
                            TableBody::NoMatches => view! {
                                <p data-cy=TestId::NoMatchingMessage.as_str()>{NO_MATCHES_MESSAGE}</p>
                            }.into_view(),
                            TableBody::Rows(rows) => view! {
                                <ProductTable rows=rows.clone()/>
                            }.into_view(),
                        })}
                    </div>
                </div>
            </div>
        </Root>
    }
}

#[component]
fn UserTabs(catalog_view: Memo<CatalogView>, on_event: Callback<FilterEvent>) -> impl IntoView {
    view! {
        <p class="panel-tabs has-text-weight-bold">
            <a
                data-cy=TestId::FilterAllUsers.as_str()
                href="#/"
                class=move || catalog_view.with(|catalog_view| catalog_view.all_users_class())
                on:click=move |_| on_event.call(FilterEvent::SelectAllUsers)
            >
                {ALL_LABEL}
            </a>
            <For
                each=move || catalog_view.with(|catalog_view| catalog_view.users.clone())
                key=|tab| (tab.name.clone(), tab.active)
                children=move |tab| {
                    let name = tab.name.clone();
                    view! {
                        <a
                            data-cy=TestId::FilterUser.as_str()
                            href="#/"
                            class=tab.class()
                            on:click=move |_| on_event.call(FilterEvent::SelectUser(name.clone()))
                        >
                            {tab.name}
                        </a>
                    }
                }
            />
        </p>
    }
}

#[component]
fn SearchBox(search_box: NodeRef<html::Input>, on_event: Callback<FilterEvent>) -> impl IntoView {
    view! {
        <div class="panel-block">
            <p class="control has-icons-left has-icons-right">
                <input
                    data-cy=TestId::SearchField.as_str()
                    type="text"
                    class="input"
                    placeholder=SEARCH_PLACEHOLDER
                    node_ref=search_box
                    on:input=move |ev| on_event.call(FilterEvent::Search(event_target_value(&ev)))
                />
                <span class="icon is-left">
                    <i class="fas fa-search" aria-hidden="true"></i>
                </span>
                <span class="icon is-right">
                    <button
                        data-cy=TestId::ClearButton.as_str()
                        type="button"
                        class="delete"
                        on:click=move |_| on_event.call(FilterEvent::ClearSearch)
                    ></button>
                </span>
            </p>
        </div>
    }
}

#[component]
fn CategoryButtons(
    catalog_view: Memo<CatalogView>,
    on_event: Callback<FilterEvent>,
) -> impl IntoView {
    view! {
        <div class="panel-block is-flex-wrap-wrap">
            <a
                data-cy=TestId::AllCategories.as_str()
                href="#/"
                class=move || catalog_view.with(|catalog_view| catalog_view.all_categories_class())
                on:click=move |_| on_event.call(FilterEvent::SelectAllCategories)
            >
                {ALL_LABEL}
            </a>
            <For
                each=move || catalog_view.with(|catalog_view| catalog_view.categories.clone())
                key=|button| (button.title.clone(), button.selected)
                children=move |button| {
                    let title = button.title.clone();
                    view! {
                        <a
                            data-cy=TestId::Category.as_str()
                            href="#/"
                            class=button.class()
                            on:click=move |_| on_event.call(FilterEvent::ToggleCategory(title.clone()))
                        >
                            {button.title}
                        </a>
                    }
                }
            />
        </div>
    }
}

/// Renders the visible products. The sort icons in the header are decoration
/// only; clicking them never reorders the rows.
#[component]
fn ProductTable(rows: Vec<ProductRow>) -> impl IntoView {
    let header = COLUMNS
        .iter()
        .map(|column| view! {
            <th>
                <span class="is-flex is-flex-wrap-nowrap">
                    {column.title}
                    <a href="#/">
                        <span class="icon">
                            <i data-cy=TestId::SortIcon.as_str() class=column.sort_icon.class()></i>
                        </span>
                    </a>
                </span>
            </th>
        })
        .collect_view();

    let body = rows
        .into_iter()
        .map(|row| view! {
            <tr data-cy=TestId::Product.as_str()>
                <td class="has-text-weight-bold" data-cy=TestId::ProductId.as_str()>{row.id.0}</td>
                <td data-cy=TestId::ProductName.as_str()>{row.name}</td>
                <td data-cy=TestId::ProductCategory.as_str()>{row.category}</td>
                <td data-cy=TestId::ProductUser.as_str() class=row.user_class>{row.user}</td>
            </tr>
        })
        .collect_view();

    view! {
        <table data-cy=TestId::ProductTable.as_str() class="table is-striped is-narrow is-fullwidth">
            <thead>
                <tr>{header}</tr>
            </thead>
            <tbody>{body}</tbody>
        </table>
    }
}
