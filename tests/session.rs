//! End-to-end coverage of the picking session: click mapping, snapping,
//! toggling, finalization and export reproducibility.

use peak_picker::{
    ClickEffect, ClickPoint, PeakExport, PickConfig, PickError, PickSession, Spectrum,
};

fn wavy() -> Spectrum {
    Spectrum::new(
        vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        vec![0.0, 1.0, 3.0, 2.0, 4.0, 0.0, -1.0],
    )
    .unwrap()
}

fn session() -> PickSession {
    PickSession::new(wavy(), PickConfig::default())
}

#[test]
fn click_snaps_uphill_before_toggling() {
    let mut session = session();

    // Nearest point to the click is row 1; the walk carries it to row 2.
    let effect = session.handle_click(ClickPoint { x: 1.1, y: 0.9 });
    assert_eq!(effect, Some(ClickEffect::Selected(2)));
    assert_eq!(session.selected_indices(), vec![2]);
}

#[test]
fn repeated_click_deselects() {
    let mut session = session();

    session.handle_click(ClickPoint { x: 2.1, y: 2.9 });
    let effect = session.handle_click(ClickPoint { x: 2.1, y: 2.9 });
    assert_eq!(effect, Some(ClickEffect::Deselected(2)));
    assert!(session.selected_indices().is_empty());
}

#[test]
fn far_click_is_ignored() {
    let mut session = session();

    assert_eq!(session.handle_click(ClickPoint { x: 50.0, y: 50.0 }), None);
    assert!(session.selection().is_empty());
}

#[test]
fn failed_walk_leaves_state_unchanged() {
    // Monotonically rising data: every walk runs into the boundary.
    let spectrum = Spectrum::new(vec![0.0, 1.0, 2.0, 3.0], vec![0.0, 1.0, 2.0, 3.0]).unwrap();
    let mut session = PickSession::new(spectrum, PickConfig::default());

    assert_eq!(session.handle_click(ClickPoint { x: 2.0, y: 2.0 }), None);
    assert!(session.selection().is_empty());
}

#[test]
fn snap_disabled_picks_the_raw_nearest_point() {
    let config = PickConfig {
        snap_to_peak: false,
        ..PickConfig::default()
    };
    let mut session = PickSession::new(wavy(), config);

    let effect = session.handle_click(ClickPoint { x: 1.1, y: 0.9 });
    assert_eq!(effect, Some(ClickEffect::Selected(1)));
}

#[test]
fn annotated_view_tracks_the_selection() {
    let mut session = session();

    session.handle_click(ClickPoint { x: 2.1, y: 2.9 });
    session.handle_click(ClickPoint { x: 4.2, y: 3.8 });

    let annotated = session.annotated();
    assert_eq!(
        annotated.is_peak,
        vec![false, false, true, false, true, false, false]
    );
    assert_eq!(annotated.peak_count(), session.selection().len());
}

#[test]
fn toggle_index_validates_the_row() {
    let mut session = session();

    assert_eq!(session.toggle_index(4).unwrap(), ClickEffect::Selected(4));
    let err = session.toggle_index(7).unwrap_err();
    assert!(matches!(err, PickError::IndexOutOfRange { index: 7, len: 7 }));
    assert_eq!(session.selected_indices(), vec![4]);
}

#[test]
fn reset_drops_all_picks() {
    let mut session = session();

    session.handle_click(ClickPoint { x: 2.1, y: 2.9 });
    session.reset();
    assert!(session.selection().is_empty());
}

#[test]
fn finalize_reports_sorted_indices() {
    let mut session = session();

    session.handle_click(ClickPoint { x: 4.2, y: 3.8 });
    session.handle_click(ClickPoint { x: 1.1, y: 0.9 });

    let outcome = session.finalize();
    assert_eq!(outcome.indices, vec![2, 4]);
    assert_eq!(outcome.annotated.peak_indices(), vec![2, 4]);
}

#[test]
fn export_reproduces_the_annotation() {
    let spectrum = wavy();
    let mut session = PickSession::new(spectrum.clone(), PickConfig::default());

    session.handle_click(ClickPoint { x: 2.1, y: 2.9 });
    session.handle_click(ClickPoint { x: 4.2, y: 3.8 });
    let outcome = session.finalize();

    // Round-trip through the textual form, then re-apply without a session.
    let json = outcome.export().to_json().unwrap();
    let export = PeakExport::from_json(&json).unwrap();
    let replayed = export.apply(&spectrum).unwrap();
    assert_eq!(replayed, outcome.annotated);
}

#[test]
fn export_rejects_a_shorter_dataset() {
    let export = PeakExport::new(vec![2, 6]);
    let short = Spectrum::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 0.0]).unwrap();
    assert!(matches!(
        export.apply(&short),
        Err(PickError::IndexOutOfRange { index: 6, len: 3 })
    ));
}
