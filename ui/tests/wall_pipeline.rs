//! End-to-end checks over the public pipeline: payload → memorial → session →
//! rendered surface.

use std::rc::Rc;

use ui::core::{
    dispatch,
    source::{parse_records, RecordSource},
    Filter, Memorial, Session, SortKey, Surface, ViewMode, WallEvent,
};

const PAYLOAD: &[u8] = br#"[
    {"name":"A","type":"model","company":"Lab","born":"2022-01-01","died":"2023-01-01",
     "description":"first","cause":"replaced"},
    {"name":"B","type":"product","company":"Shop","born":"2024-01-01","died":"2024-06-01",
     "description":"second","cause":"cancelled","link":"https://example.com/b"}
]"#;

fn memorial() -> Memorial {
    Memorial::new(parse_records(PAYLOAD).expect("payload parses"))
}

fn grid_names(surface: Surface) -> Vec<String> {
    match surface {
        Surface::Grid(records) => records.iter().map(|r| r.name.clone()).collect(),
        Surface::Timeline(_) => panic!("expected the grid surface"),
    }
}

#[test]
fn died_desc_and_lifespan_asc_both_put_b_first() {
    let m = memorial();
    let session = Session::default();
    assert_eq!(grid_names(dispatch(&session.view, &m)), ["B", "A"]);

    let session = session.apply(WallEvent::SortChanged(SortKey::LifespanAsc), &m);
    assert_eq!(grid_names(dispatch(&session.view, &m)), ["B", "A"]);
    assert_eq!(m.records[1].lifespan_days, 152);
    assert_eq!(m.records[0].lifespan_days, 365);
}

#[test]
fn stats_are_computed_once_from_the_full_collection() {
    let m = memorial();
    let stats = m.stats.as_ref().expect("non-empty collection");
    assert_eq!(stats.total, 2);
    assert_eq!(stats.count_of("model"), 1);
    assert_eq!(stats.count_of("product"), 1);
    assert_eq!(stats.shortest_lived.name, "B");
    assert_eq!(m.max_lifespan_days, 365);
}

#[test]
fn a_full_interaction_round() {
    let m = memorial();
    let mut session = Session::default();

    session = session.apply(WallEvent::FilterChanged(Filter::from_value("product")), &m);
    session = session.apply(WallEvent::ViewChanged(ViewMode::Timeline), &m);

    let record = match dispatch(&session.view, &m) {
        Surface::Timeline(groups) => {
            assert_eq!(groups.len(), 1);
            assert_eq!(groups[0].year, 2024);
            Rc::clone(&groups[0].records[0])
        }
        Surface::Grid(_) => panic!("expected the timeline surface"),
    };
    assert!(Rc::ptr_eq(&record, &m.records[1]));

    session = session.apply(WallEvent::RecordSelected(Rc::clone(&record)), &m);
    assert_eq!(session.modal.fill_pct(), 0.0);
    session = session.apply(WallEvent::RevealFrame(Rc::clone(&record)), &m);
    let pct = session.modal.fill_pct();
    assert!((pct - 100.0 * 152.0 / 365.0).abs() < 1e-9);

    session = session.apply(WallEvent::ModalDismissed, &m);
    assert!(!session.modal.is_open());
    assert_eq!(session.view.view, ViewMode::Timeline);
    assert_eq!(session.view.filter, Filter::Category("product".into()));
}

#[test]
fn unknown_filter_and_sort_degrade_gracefully() {
    let m = memorial();
    let session = Session::default()
        .apply(WallEvent::SortChanged(SortKey::from_value("vibes")), &m);
    assert_eq!(grid_names(dispatch(&session.view, &m)), ["A", "B"]);

    let session = session.apply(WallEvent::FilterChanged(Filter::from_value("gadget")), &m);
    assert!(grid_names(dispatch(&session.view, &m)).is_empty());
}

#[test]
fn embedded_source_loads_the_bundled_collection() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");
    let m = runtime
        .block_on(ui::core::source::load_memorial(&RecordSource::Embedded))
        .expect("bundled collection loads");
    assert!(m.stats.is_ok());
    assert!(!m.categories().is_empty());
}

#[test]
fn missing_remote_file_is_a_load_error() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("runtime");
    let source = RecordSource::Remote("/definitely/not/here/records.json".into());
    let err = runtime
        .block_on(ui::core::source::load_memorial(&source))
        .unwrap_err();
    assert!(matches!(err, ui::core::LoadError::Fetch { .. }));
}
