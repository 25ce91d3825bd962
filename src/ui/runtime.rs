use crate::api::ApiClient;
use crate::config::Config;
use crate::session::SessionStore;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, InputAction, InputState};
use crate::ui::render::draw;
use crate::ui::requests::Dispatch;
use crate::ui::terminal_guard::setup_terminal;
use std::sync::mpsc::{RecvTimeoutError, Sender};
use tokio::runtime::Handle;

/// Run the interactive client until the user quits.
///
/// API calls run on `handle`; their completions come back through the
/// event channel so the [`App`] is only touched from this loop.
pub fn run(config: &Config, handle: Handle) -> anyhow::Result<()> {
    let api = ApiClient::new(&config.server)?;
    let server = api.base_url().to_string();
    let mut app = App::new(SessionStore::new(config.session.resolved_path()));
    if let Err(err) = app.restore_session() {
        tracing::warn!(error = %err, "ignoring unreadable session file");
    }

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate);
    let mut input = InputState::default();

    loop {
        terminal.draw(|frame| draw(frame, &app, &input, &server))?;

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => match handle_key(&mut app, &mut input, key) {
                InputAction::Quit => break,
                InputAction::Send(dispatch) => spawn(&handle, &api, dispatch, events.sender()),
                InputAction::None => {}
            },
            Ok(AppEvent::Api(completion)) => {
                if let Some(follow_up) = app.complete(completion) {
                    spawn(&handle, &api, follow_up, events.sender());
                }
            }
            Ok(AppEvent::Tick) | Ok(AppEvent::Resize(_, _)) => {}
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

fn spawn(handle: &Handle, api: &ApiClient, dispatch: Dispatch, tx: Sender<AppEvent>) {
    let api = api.clone();
    tracing::debug!(kind = ?dispatch.token.kind, "dispatching request");
    handle.spawn(async move {
        let completion = dispatch.execute(&api).await;
        if tx.send(AppEvent::Api(completion)).is_err() {
            tracing::debug!("ui loop gone; dropping completion");
        }
    });
}
