//! Integration tests for the project catalog and the Projects filter state.

use std::collections::HashSet;

use termfolio::models::ProjectCatalog;
use termfolio::tui::ProjectBrowser;

#[test]
fn catalog_loads_with_all_tab_first() {
    let catalog = ProjectCatalog::load().unwrap();
    assert_eq!(catalog.categories[0].value, "all");
    assert!(catalog.categories.len() > 1);
    assert!(!catalog.projects.is_empty());
}

#[test]
fn all_tab_preserves_declaration_order() {
    let catalog = ProjectCatalog::load().unwrap();
    let browser = ProjectBrowser::new();

    let ids: Vec<u32> = browser.filtered(&catalog).iter().map(|p| p.id).collect();
    let declared: Vec<u32> = catalog.projects.iter().map(|p| p.id).collect();
    assert_eq!(ids, declared);
}

#[test]
fn category_filter_is_exact_and_order_preserving() {
    let catalog = ProjectCatalog::load().unwrap();
    let mut browser = ProjectBrowser::new();

    for (index, tab) in catalog.categories.iter().enumerate().skip(1) {
        browser.select_tab(index, &catalog);
        let got: Vec<u32> = browser.filtered(&catalog).iter().map(|p| p.id).collect();

        let expected: Vec<u32> = catalog
            .projects
            .iter()
            .filter(|p| p.category.as_str() == tab.value)
            .map(|p| p.id)
            .collect();

        assert_eq!(got, expected, "category {}", tab.value);
    }
}

#[test]
fn category_results_union_to_full_collection_without_duplicates() {
    let catalog = ProjectCatalog::load().unwrap();
    let mut browser = ProjectBrowser::new();

    let mut union: Vec<u32> = Vec::new();
    for index in 1..catalog.categories.len() {
        browser.select_tab(index, &catalog);
        union.extend(browser.filtered(&catalog).iter().map(|p| p.id));
    }

    let unique: HashSet<u32> = union.iter().copied().collect();
    assert_eq!(unique.len(), union.len());

    let full: HashSet<u32> = catalog.projects.iter().map(|p| p.id).collect();
    assert_eq!(unique, full);
}

#[test]
fn detail_selection_is_a_single_slot() {
    let catalog = ProjectCatalog::load().unwrap();
    let mut browser = ProjectBrowser::new();

    browser.select_project(Some(catalog.projects[0].clone()));
    browser.select_project(Some(catalog.projects[1].clone()));
    assert_eq!(
        browser.selected_project().map(|p| p.id),
        Some(catalog.projects[1].id)
    );

    browser.select_project(None);
    assert!(browser.selected_project().is_none());
}

#[test]
fn filter_is_recomputed_on_read() {
    let catalog = ProjectCatalog::load().unwrap();
    let mut browser = ProjectBrowser::new();

    browser.select_tab(1, &catalog);
    let first = browser.filtered(&catalog).len();

    // Switching away and back yields the same derived view
    browser.select_tab(0, &catalog);
    browser.select_tab(1, &catalog);
    assert_eq!(browser.filtered(&catalog).len(), first);
}
