//! Scenario tests for sharing, resolving, and navigating shared albums.

mod helpers;

use lumiere_core::error::ErrorKind;
use lumiere_core::events::{AccessOutcome, EventPayload, NavigationEvent, ShareEvent};
use lumiere_entity::share::AccessResult;
use lumiere_service::{
    AlbumStore, FaceMatchService, FixedScorer, NavigationHistory, SessionState,
};

use helpers::{TestApp, album_id, url};

#[test]
fn test_resolve_tracks_sharing_flag() {
    let mut app = TestApp::new();
    let id = app.album_with_id(1, "Anderson Wedding", true);
    let reference = app.controller.mint_reference(id);

    assert!(app.controller.resolve_access(&reference, &app.store).is_granted());

    app.controller.disable_sharing(&mut app.store, id).unwrap();
    assert!(matches!(
        app.controller.resolve_access(&reference, &app.store),
        AccessResult::Forbidden { .. }
    ));

    let missing = app.controller.mint_reference(album_id(999));
    assert_eq!(
        app.controller.resolve_access(&missing, &app.store),
        AccessResult::NotFound {
            album_id: album_id(999)
        }
    );
}

#[test]
fn test_enabling_a_draft_album_grants_access() {
    let mut app = TestApp::new();
    let id = app.album_with_id(5, "Fashion Week Milano", false);
    let reference = app.controller.mint_reference(id);

    match app.controller.resolve_access(&reference, &app.store) {
        AccessResult::Forbidden { title, .. } => assert_eq!(title, "Fashion Week Milano"),
        other => panic!("expected forbidden, got {other:?}"),
    }

    app.controller.enable_sharing(&mut app.store, id).unwrap();
    match app.controller.resolve_access(&reference, &app.store) {
        AccessResult::Granted { album } => {
            assert_eq!(album.id, id);
            assert_eq!(album.photos.len(), 4);
        }
        other => panic!("expected granted, got {other:?}"),
    }
}

#[test]
fn test_absent_album_is_not_found() {
    let app = TestApp::new();
    let reference = app.controller.mint_reference(album_id(42));
    assert_eq!(
        app.controller.resolve_access(&reference, &app.store),
        AccessResult::NotFound {
            album_id: album_id(42)
        }
    );
}

#[test]
fn test_encode_preserves_unrelated_params() {
    let app = TestApp::new();
    let reference = app.controller.mint_reference(album_id(7));
    let location = app
        .controller
        .encode_into_location(&reference, &url("https://app/?utm=x"));

    let pairs: Vec<(String, String)> = location.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("utm".to_string(), "x".to_string())));
    assert!(pairs.contains(&("album".to_string(), "7".to_string())));
    assert_eq!(
        app.controller.decode_from_location(&location).unwrap(),
        Some(reference)
    );
}

#[test]
fn test_guest_loses_access_on_next_navigation() {
    let mut app = TestApp::new();
    let id = app.album_with_id(1, "Corporate Gala 2026", true);
    let share_url = app.controller.share_url(id);
    assert_eq!(share_url.as_str(), "https://app/?album=1");

    let mut history = NavigationHistory::new(url("https://app/?lang=fr"));
    let location = history.push(share_url).clone();
    let state = app
        .session
        .observe(&location, &app.controller, &app.store, &mut app.router)
        .unwrap();
    assert_eq!(state.name(), "granted");

    // The open view keeps its snapshot until the guest navigates again.
    app.controller.disable_sharing(&mut app.store, id).unwrap();
    assert_eq!(app.session.state().name(), "granted");

    let location = history.back().unwrap().clone();
    app.session
        .observe(&location, &app.controller, &app.store, &mut app.router)
        .unwrap();
    assert_eq!(app.session.state(), &SessionState::Idle);

    let location = history.forward().unwrap().clone();
    let state = app
        .session
        .observe(&location, &app.controller, &app.store, &mut app.router)
        .unwrap();
    assert_eq!(state.name(), "forbidden");
    assert!(app.router.view_state().is_shared_preview());
}

#[test]
fn test_exit_preview_writes_cleared_location_to_history() {
    let mut app = TestApp::new();
    let id = app.album_with_id(2, "Lakeside Retreat", true);
    let reference = app.controller.mint_reference(id);

    let mut history = NavigationHistory::new(url("https://app/?utm=mail"));
    let shared = app
        .controller
        .encode_into_location(&reference, history.current());
    let location = history.push(shared).clone();
    app.session
        .observe(&location, &app.controller, &app.store, &mut app.router)
        .unwrap();

    let cleared = app
        .session
        .exit_preview(&location, &app.controller, &mut app.router);
    let current = history.push(cleared).clone();
    assert_eq!(current.as_str(), "https://app/?utm=mail");
    assert_eq!(app.session.state(), &SessionState::Idle);

    // Back restores the shared location and re-enters preview.
    let location = history.back().unwrap().clone();
    let state = app
        .session
        .observe(&location, &app.controller, &app.store, &mut app.router)
        .unwrap();
    assert_eq!(state.name(), "granted");
}

#[test]
fn test_malformed_reference_is_reported() {
    let mut app = TestApp::new();
    let err = app
        .session
        .observe(
            &url("https://app/?album=abc&utm=x"),
            &app.controller,
            &app.store,
            &mut app.router,
        )
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::MalformedReference);
    assert_eq!(app.session.state(), &SessionState::Idle);
}

#[test]
fn test_search_granted_album() {
    let mut app = TestApp::new();
    let id = app.album_with_id(1, "Birthday Celebration", true);
    let reference = app.controller.mint_reference(id);
    let access = app.controller.resolve_access(&reference, &app.store);

    let album = app.store.find(id).unwrap();
    let mut scorer = FixedScorer::new(60).with_score(album.photos[2].id, 97);
    let matches = FaceMatchService::default()
        .search(&access, &mut scorer)
        .unwrap();

    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].photo.name, "IMG_4202.jpg");
}

#[test]
fn test_event_trail() {
    let mut app = TestApp::new();
    let id = app.album_with_id(1, "Summer Collection", false);
    let location = app.controller.share_url(id);

    app.session
        .observe(&location, &app.controller, &app.store, &mut app.router)
        .unwrap();

    let first: Vec<EventPayload> = app.events.take().into_iter().map(|e| e.payload).collect();
    assert_eq!(
        first,
        vec![
            EventPayload::Share(ShareEvent::ReferenceMinted { album_id: id }),
            EventPayload::Share(ShareEvent::AccessResolved {
                album_id: id,
                outcome: AccessOutcome::Forbidden,
            }),
            EventPayload::Navigation(NavigationEvent::SharedPreviewEntered),
        ]
    );
    assert!(app.events.payloads().is_empty());

    app.controller.enable_sharing(&mut app.store, id).unwrap();
    app.session
        .observe(&location, &app.controller, &app.store, &mut app.router)
        .unwrap();

    // Still in preview, so no second "entered" event.
    assert_eq!(
        app.events.payloads(),
        vec![
            EventPayload::Share(ShareEvent::SharingEnabled { album_id: id }),
            EventPayload::Share(ShareEvent::AccessResolved {
                album_id: id,
                outcome: AccessOutcome::Granted,
            }),
        ]
    );
}
