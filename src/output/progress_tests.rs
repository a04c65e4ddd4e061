use super::*;

#[test]
fn hidden_in_quiet_mode() {
    let progress = EstimateProgress::new(100, true);
    progress.set_found(1);
    progress.set_found(2);
    assert_eq!(progress.position(), 2);
    progress.finish();
}

#[test]
fn hidden_when_not_a_tty() {
    let progress = EstimateProgress::new_with_visibility(10, false, false);
    for found in 1..=10 {
        progress.set_found(found);
    }
    assert_eq!(progress.position(), 10);
    progress.finish();
}

#[test]
fn visible_bar_tracks_position() {
    let progress = EstimateProgress::new_with_visibility(10, false, true);
    progress.set_found(4);
    assert_eq!(progress.position(), 4);
    progress.finish();
}

#[test]
fn clones_share_state() {
    let progress = EstimateProgress::new(100, true);
    let cloned = progress.clone();
    cloned.set_found(7);
    assert_eq!(progress.position(), 7);
    progress.finish();
}
