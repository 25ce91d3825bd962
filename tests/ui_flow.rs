//! Keyboard-driven flows through the App, without a terminal.

mod common;

use brewlog::ui::input::{focusable, handle_key, Focus, InputAction, InputState};
use brewlog::ui::requests::{ApiRequest, RequestKind};
use brewlog::ui::view::Region;
use brewlog::ui::markup::to_plain_text;
use brewlog::ui::projector::ErrorBanner;
use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

fn type_text(app: &mut brewlog::ui::app::App, input: &mut InputState, text: &str) {
    for ch in text.chars() {
        handle_key(app, input, press(KeyCode::Char(ch)));
    }
}

#[test]
fn fresh_app_offers_landing_and_auth_forms() {
    let (_dir, session) = temp_session();
    let app = make_app(&session);
    assert_eq!(focusable(&app), vec![Focus::Landing, Focus::Login, Focus::Signup]);
}

#[test]
fn enter_on_landing_opens_search() {
    let (_dir, session) = temp_session();
    let mut app = make_app(&session);
    let mut input = InputState::default();

    let action = handle_key(&mut app, &mut input, press(KeyCode::Enter));

    assert!(matches!(action, InputAction::None));
    assert_eq!(input.focus(), Focus::Search);
    assert!(app.state().show_search_form());
    assert!(app.document().is_visible(Region::BeerForm));
    assert!(!app.document().is_visible(Region::StarterPage));
}

#[test]
fn typing_a_name_sends_a_search() {
    let (_dir, session) = temp_session();
    let mut app = make_app(&session);
    let mut input = InputState::default();
    handle_key(&mut app, &mut input, ctrl('f'));

    type_text(&mut app, &mut input, "Lager77");
    let action = handle_key(&mut app, &mut input, press(KeyCode::Enter));

    let InputAction::Send(dispatch) = action else {
        panic!("expected a request");
    };
    assert_eq!(dispatch.token.kind, RequestKind::Search);
    assert!(matches!(dispatch.request, ApiRequest::Search { ref query } if query == "Lager77"));
}

#[test]
fn ctrl_q_quits() {
    let (_dir, session) = temp_session();
    let mut app = make_app(&session);
    let mut input = InputState::default();
    assert!(matches!(
        handle_key(&mut app, &mut input, ctrl('q')),
        InputAction::Quit
    ));
}

#[test]
fn review_toggle_needs_a_beer() {
    let (_dir, session) = temp_session();
    let mut app = make_app(&session);
    let mut input = InputState::default();

    handle_key(&mut app, &mut input, ctrl('r'));

    assert!(!app.state().review_entry());
    assert_ne!(input.focus(), Focus::Review);
}

#[test]
fn logged_in_app_hides_auth_forms() {
    let (_dir, session) = temp_session();
    let app = logged_in_app(&session);
    assert_eq!(focusable(&app), vec![Focus::Landing]);
    assert!(app.document().is_visible(Region::LogoutButton));
}

#[test]
fn ctrl_l_logs_out() {
    let (_dir, session) = temp_session();
    let mut app = logged_in_app(&session);
    let mut input = InputState::default();

    handle_key(&mut app, &mut input, ctrl('l'));

    assert!(!app.is_authenticated());
    assert!(!session.exists());
    assert!(focusable(&app).contains(&Focus::Login));
}

#[tokio::test]
async fn unsent_review_keeps_typed_text() {
    let server = MockServer::start().await;
    server.enqueue(MockResponse::json(LAGER77)).await;
    let (_dir, session) = temp_session();
    let mut app = make_app(&session);
    let mut input = InputState::default();

    let dispatch = app.submit_search("Lager77");
    app.drive(&api_for(&server), dispatch).await;
    handle_key(&mut app, &mut input, ctrl('r'));
    assert_eq!(input.focus(), Focus::Review);

    type_text(&mut app, &mut input, "great");
    let action = handle_key(&mut app, &mut input, press(KeyCode::Enter));

    assert!(matches!(action, InputAction::None));
    assert_eq!(input.fields(Focus::Review)[0].value, "great");
    assert!(to_plain_text(app.document()).contains(ErrorBanner::LoginRequired.message()));
}
