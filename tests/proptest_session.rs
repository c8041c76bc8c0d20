//! Property-based tests for the filter-sort session.
//!
//! Catalogs and action sequences are generated; the algebraic properties of
//! the toggles and of the visible list must hold for all of them.

use proptest::prelude::*;
use product_categories::filter::{FilterState, matches};
use product_categories::{
    Catalog, Category, Gender, Product, Session, SortColumn, SortDirection, SortState, User,
};

const USERS: [&str; 3] = ["Alice", "Bob", "Carol"];
const CATEGORIES: [&str; 3] = ["Dairy", "Bakery", "Fruits"];

#[derive(Debug, Clone)]
enum Action {
    ToggleUser(Option<usize>),
    ToggleCategory(usize),
    Search(String),
    ClearSearch,
    ClearCategories,
    ToggleSort(SortColumn),
    Reset,
}

fn column() -> impl Strategy<Value = SortColumn> {
    prop::sample::select(SortColumn::ALL.to_vec())
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        prop::option::of(0..USERS.len()).prop_map(Action::ToggleUser),
        (0..CATEGORIES.len()).prop_map(Action::ToggleCategory),
        "[a-zA-Z]{0,3}".prop_map(Action::Search),
        Just(Action::ClearSearch),
        Just(Action::ClearCategories),
        column().prop_map(Action::ToggleSort),
        Just(Action::Reset),
    ]
}

fn products() -> impl Strategy<Value = Vec<Product>> {
    prop::collection::vec(
        ("[a-zA-Z]{1,8}", 0..CATEGORIES.len(), 0..USERS.len()),
        0..30,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, category, user))| {
                Product::new(i as u32 + 1, name, CATEGORIES[category], USERS[user])
            })
            .collect()
    })
}

fn session(products: Vec<Product>) -> Session {
    let catalog = Catalog::new(
        vec![
            User::new(1, USERS[0], Gender::Female),
            User::new(2, USERS[1], Gender::Male),
            User::new(3, USERS[2], Gender::Female),
        ],
        CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, name)| Category::new(i as u32 + 1, *name, "*"))
            .collect(),
        products,
    )
    .unwrap();
    Session::new(catalog)
}

fn apply(session: &mut Session, action: &Action) {
    match action {
        Action::ToggleUser(user) => session.toggle_user_filter(user.map(|i| USERS[i])),
        Action::ToggleCategory(i) => session.toggle_category_filter(CATEGORIES[*i]),
        Action::Search(text) => session.set_search_text(text.as_str()),
        Action::ClearSearch => session.clear_search_text(),
        Action::ClearCategories => session.clear_categories(),
        Action::ToggleSort(column) => session.toggle_sort(*column),
        Action::Reset => session.reset_all(),
    }
}

fn visible_ids(session: &Session) -> Vec<u32> {
    session.visible_products().iter().map(|p| p.id).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn default_state_matches_everything(products in products()) {
        let state = FilterState::default();
        prop_assert!(products.iter().all(|p| matches(p, &state)));
        let session = session(products.clone());
        prop_assert_eq!(session.visible_products().len(), products.len());
    }

    #[test]
    fn user_toggle_twice_restores_selection(
        products in products(),
        actions in prop::collection::vec(action(), 0..12),
        user in 0..USERS.len(),
    ) {
        let mut session = session(products);
        for a in &actions {
            apply(&mut session, a);
        }
        let before = session.filter().clone();
        session.toggle_user_filter(Some(USERS[user]));
        session.toggle_user_filter(Some(USERS[user]));
        if before.selected_user.as_deref() == Some(USERS[user]) || before.selected_user.is_none() {
            prop_assert_eq!(session.filter(), &before);
        } else {
            // Selecting a different user replaces, and the second toggle unsets
            prop_assert_eq!(session.filter().selected_user.as_deref(), None);
        }
    }

    #[test]
    fn category_toggle_twice_restores_set(
        products in products(),
        actions in prop::collection::vec(action(), 0..12),
        category in 0..CATEGORIES.len(),
    ) {
        let mut session = session(products);
        for a in &actions {
            apply(&mut session, a);
        }
        let mut before: Vec<String> =
            session.filter().selected_categories.iter().cloned().collect();
        session.toggle_category_filter(CATEGORIES[category]);
        session.toggle_category_filter(CATEGORIES[category]);
        let mut after: Vec<String> =
            session.filter().selected_categories.iter().cloned().collect();
        before.sort();
        after.sort();
        prop_assert_eq!(after, before);
    }

    #[test]
    fn id_descending_is_reverse_of_ascending(
        products in products(),
        actions in prop::collection::vec(action(), 0..12),
    ) {
        let mut session = session(products);
        for a in &actions {
            apply(&mut session, a);
        }
        // Bring the id column to ascending from whatever state we are in
        while *session.sort() != SortState::new(SortColumn::Id, SortDirection::Ascending) {
            session.toggle_sort(SortColumn::Id);
        }
        let ascending = visible_ids(&session);
        session.toggle_sort(SortColumn::Id);
        let mut descending = visible_ids(&session);
        descending.reverse();
        prop_assert_eq!(ascending, descending);
    }

    #[test]
    fn sort_toggle_cycles_with_period_three(column in column()) {
        let mut state = SortState::default();
        let mut seen = Vec::new();
        for _ in 0..4 {
            state.toggle(column);
            seen.push(state.direction);
        }
        prop_assert_eq!(
            seen,
            vec![
                SortDirection::Ascending,
                SortDirection::Descending,
                SortDirection::None,
                SortDirection::Ascending,
            ]
        );
    }

    #[test]
    fn reset_all_yields_defaults(
        products in products(),
        actions in prop::collection::vec(action(), 0..20),
    ) {
        let mut session = session(products);
        for a in &actions {
            apply(&mut session, a);
        }
        session.reset_all();
        prop_assert_eq!(session.filter(), &FilterState::default());
        prop_assert_eq!(session.sort(), &SortState::default());
    }

    #[test]
    fn visible_list_is_permutation_of_filtered(
        products in products(),
        actions in prop::collection::vec(action(), 0..20),
    ) {
        let mut session = session(products);
        for a in &actions {
            apply(&mut session, a);
        }
        let mut visible = visible_ids(&session);
        let mut expected: Vec<u32> = session
            .catalog()
            .products()
            .iter()
            .filter(|p| matches(p, session.filter()))
            .map(|p| p.id)
            .collect();
        prop_assert_eq!(session.listing().has_matches(), !expected.is_empty());
        visible.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(visible, expected);
    }
}
