use super::*;

#[test]
fn all_filter_reads_all_projects() {
    assert_eq!(filter_label(Filter::All), "All Projects");
}

#[test]
fn category_filters_use_category_labels() {
    let labels: Vec<_> = Filter::<ProjectCategory>::options().into_iter().map(filter_label).collect();
    assert_eq!(labels, vec!["All Projects", "Frontend", "Backend", "Full Stack", "Mobile"]);
}
