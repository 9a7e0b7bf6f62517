use propview::app::BoundField;
use propview::domain::{Catalog, Property, PropertyType, SortKey, TypeFilter};
use propview::{handle_event, initialize, Action, AppState, Config, Event, InputMode, ViewMode};
use std::collections::BTreeMap;

fn listing(id: u64, title: &str, location: &str, price: f64, roi: f64, kind: PropertyType) -> Property {
    Property {
        id,
        title: title.to_string(),
        location: location.to_string(),
        price,
        roi,
        kind,
        image: format!("img/{id}.jpg"),
    }
}

fn loaded_state() -> AppState {
    let catalog = Catalog::new(vec![
        listing(1, "Modern Loft", "Downtown", 250_000.0, 7.5, PropertyType::Apartment),
        listing(2, "Beach Villa", "Coast", 900_000.0, 5.0, PropertyType::Villa),
        listing(3, "City Office", "Downtown", 400_000.0, 9.0, PropertyType::Office),
    ])
    .unwrap();

    let mut state = initialize(&Config::default());
    let (render, actions) = handle_event(&mut state, &Event::CatalogLoaded(catalog));
    assert!(render);
    assert!(actions.is_empty());
    state
}

fn ids(state: &AppState) -> Vec<u64> {
    state.results.as_slice().iter().map(|p| p.id).collect()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        handle_event(state, &Event::Char(c));
    }
}

#[test]
fn results_are_pending_until_catalog_arrives() {
    let mut state = initialize(&Config::default());
    assert!(state.results.is_pending());

    handle_event(&mut state, &Event::ResetFilters);
    assert!(state.results.is_pending());

    handle_event(
        &mut state,
        &Event::CatalogFailed {
            error: "IO error: not found".to_string(),
        },
    );
    assert!(state.results.is_pending());
    let vm = state.compute_viewmodel(24, 80);
    assert_eq!(vm.empty_state.unwrap().message, "Catalog unavailable");
}

#[test]
fn initial_pass_sorts_by_price() {
    let state = loaded_state();
    assert_eq!(ids(&state), vec![1, 3, 2]);
    let vm = state.compute_viewmodel(30, 120);
    assert_eq!(vm.header.summary.as_deref(), Some("Showing 3 of 3 properties"));
}

#[test]
fn unrecognized_sort_option_keeps_catalog_order() {
    let mut options = BTreeMap::new();
    options.insert("sort".to_string(), "newest".to_string());
    let mut state = initialize(&Config::from_zellij(&options));
    assert_eq!(state.view.spec().sort, SortKey::CatalogOrder);

    let catalog = Catalog::new(vec![
        listing(1, "Hill House", "North", 300_000.0, 6.0, PropertyType::Villa),
        listing(2, "Studio", "South", 100_000.0, 4.0, PropertyType::Apartment),
        listing(3, "Corner Suite", "East", 200_000.0, 8.0, PropertyType::Office),
    ])
    .unwrap();
    handle_event(&mut state, &Event::CatalogLoaded(catalog));
    assert_eq!(ids(&state), vec![1, 2, 3]);
}

#[test]
fn search_matches_title_or_location() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::SearchMode);
    type_text(&mut state, "DOWNTOWN");

    assert_eq!(ids(&state), vec![1, 3]);
    assert_eq!(state.input_mode, InputMode::Search);

    handle_event(&mut state, &Event::FinishInput);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.view.search(), "DOWNTOWN");

    // typed characters outside an input mode are ignored
    let (render, _) = handle_event(&mut state, &Event::Char('x'));
    assert!(!render);
    assert_eq!(state.view.search(), "DOWNTOWN");
}

#[test]
fn backspace_widens_the_search() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::SearchMode);
    type_text(&mut state, "villax");
    assert!(state.results.is_empty_result());

    handle_event(&mut state, &Event::Backspace);
    assert_eq!(ids(&state), vec![2]);
}

#[test]
fn bound_editing_filters_on_every_keystroke() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::EditBound(BoundField::PriceMax));
    assert_eq!(state.bound_input, "1000000");

    for _ in 0.."1000000".len() {
        handle_event(&mut state, &Event::Backspace);
    }
    // an empty field coerces to the default maximum
    assert_eq!(state.view.spec().price.max, 1_000_000.0);
    assert_eq!(ids(&state), vec![1, 3, 2]);

    type_text(&mut state, "3");
    assert!(state.results.is_empty_result());
    type_text(&mut state, "00000");
    assert_eq!(ids(&state), vec![1]);

    handle_event(&mut state, &Event::FinishInput);
    assert!(state.bound_input.is_empty());
    assert_eq!(state.view.spec().price.max, 300_000.0);
}

#[test]
fn malformed_bound_text_falls_back() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::EditBound(BoundField::RoiMin));
    type_text(&mut state, "8");
    assert_eq!(ids(&state), vec![3]);

    type_text(&mut state, "abc");
    assert_eq!(state.view.spec().roi.min, 0.0);
    assert_eq!(ids(&state), vec![1, 3, 2]);
}

#[test]
fn type_and_sort_cycle() {
    let mut state = loaded_state();

    handle_event(&mut state, &Event::CyclePropertyType);
    assert_eq!(
        state.view.spec().property_type,
        TypeFilter::Only(PropertyType::Apartment)
    );
    assert_eq!(ids(&state), vec![1]);

    handle_event(&mut state, &Event::CyclePropertyType);
    handle_event(&mut state, &Event::CyclePropertyType);
    handle_event(&mut state, &Event::CyclePropertyType);
    assert_eq!(state.view.spec().property_type, TypeFilter::All);

    handle_event(&mut state, &Event::CycleSortKey);
    assert_eq!(state.view.spec().sort, SortKey::PriceDescending);
    assert_eq!(ids(&state), vec![2, 3, 1]);

    handle_event(&mut state, &Event::CycleSortKey);
    assert_eq!(state.view.spec().sort, SortKey::RoiDescending);
    assert_eq!(ids(&state), vec![3, 1, 2]);
}

#[test]
fn reset_restores_defaults_but_keeps_layout() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::SetViewMode(ViewMode::List));
    handle_event(&mut state, &Event::SearchMode);
    type_text(&mut state, "zzz");
    handle_event(&mut state, &Event::CycleSortKey);
    assert!(state.results.is_empty_result());

    let (render, _) = handle_event(&mut state, &Event::ResetFilters);
    assert!(render);
    assert_eq!(state.input_mode, InputMode::Normal);
    assert_eq!(state.view.search(), "");
    assert_eq!(state.view.spec().sort, SortKey::PriceAscending);
    assert_eq!(state.view.view_mode(), ViewMode::List);
    assert_eq!(ids(&state), vec![1, 3, 2]);
}

#[test]
fn empty_result_is_shown_with_filters_visible() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::EditBound(BoundField::PriceMin));
    type_text(&mut state, "950000");

    let vm = state.compute_viewmodel(24, 80);
    assert!(vm.cards.is_empty());
    assert_eq!(vm.filter_panel.price_min, "950000");
    assert_eq!(
        vm.empty_state.unwrap().message,
        "No properties found matching your criteria."
    );
}

#[test]
fn open_detail_emits_route_for_selection() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::KeyDown);

    let (render, actions) = handle_event(&mut state, &Event::OpenDetail);
    assert!(!render);
    assert_eq!(
        actions,
        vec![Action::OpenDetail {
            id: 3,
            route: "/property/3".to_string()
        }]
    );
}

#[test]
fn open_detail_without_results_does_nothing() {
    let mut state = loaded_state();
    handle_event(&mut state, &Event::SearchMode);
    type_text(&mut state, "nothing matches");

    let (_, actions) = handle_event(&mut state, &Event::OpenDetail);
    assert!(actions.is_empty());
}

#[test]
fn view_mode_toggle_only_renders_on_change() {
    let mut state = loaded_state();
    let (render, _) = handle_event(&mut state, &Event::SetViewMode(ViewMode::Grid));
    assert!(!render);

    handle_event(&mut state, &Event::ToggleViewMode);
    assert_eq!(state.view.view_mode(), ViewMode::List);
    assert_eq!(state.compute_viewmodel(24, 120).columns, 1);
}

#[test]
fn close_focus_is_forwarded() {
    let mut state = loaded_state();
    let (_, actions) = handle_event(&mut state, &Event::CloseFocus);
    assert_eq!(actions, vec![Action::CloseFocus]);
}
