//! Keyboard handling for the terminal UI.
//!
//! Owns the text typed into the forms; everything that changes client
//! state is forwarded to the [`App`].

use crate::api::NewUser;
use crate::ui::app::App;
use crate::ui::requests::Dispatch;
use crate::ui::view::Region;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Which form has the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Starter page; Enter opens the search form.
    Landing,
    Search,
    Login,
    Signup,
    Review,
}

/// Action to take after processing a key event.
#[derive(Debug)]
pub enum InputAction {
    None,
    Quit,
    /// Execute this request and feed the completion back to the app.
    Send(Dispatch),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub label: &'static str,
    pub value: String,
    pub masked: bool,
}

impl TextField {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            value: String::new(),
            masked: false,
        }
    }

    fn masked(label: &'static str) -> Self {
        Self {
            masked: true,
            ..Self::new(label)
        }
    }

    /// Text as it should appear on screen.
    pub fn display(&self) -> String {
        if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

/// Form contents and keyboard focus.
#[derive(Debug, Clone)]
pub struct InputState {
    focus: Focus,
    field: usize,
    search: [TextField; 1],
    login: [TextField; 2],
    signup: [TextField; 4],
    review: [TextField; 1],
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            focus: Focus::Landing,
            field: 0,
            search: [TextField::new("Beer name")],
            login: [TextField::new("Username"), TextField::masked("Password")],
            signup: [
                TextField::new("Username"),
                TextField::masked("Password"),
                TextField::new("First name"),
                TextField::new("Last name"),
            ],
            review: [TextField::new("Review")],
        }
    }
}

impl InputState {
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Index of the focused field within the focused form.
    pub fn field(&self) -> usize {
        self.field
    }

    pub fn fields(&self, form: Focus) -> &[TextField] {
        match form {
            Focus::Landing => &[],
            Focus::Search => &self.search,
            Focus::Login => &self.login,
            Focus::Signup => &self.signup,
            Focus::Review => &self.review,
        }
    }

    fn fields_mut(&mut self, form: Focus) -> &mut [TextField] {
        match form {
            Focus::Landing => &mut [],
            Focus::Search => &mut self.search,
            Focus::Login => &mut self.login,
            Focus::Signup => &mut self.signup,
            Focus::Review => &mut self.review,
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.field = 0;
    }

    fn value(&self, form: Focus, index: usize) -> String {
        self.fields(form)
            .get(index)
            .map(|field| field.value.trim().to_string())
            .unwrap_or_default()
    }

    fn clear(&mut self, form: Focus) {
        for field in self.fields_mut(form) {
            field.value.clear();
        }
        self.field = 0;
    }
}

/// Forms the user can currently type into, in Tab order.
pub fn focusable(app: &App) -> Vec<Focus> {
    let document = app.document();
    let mut forms = Vec::new();
    if document.is_visible(Region::StarterPage) {
        forms.push(Focus::Landing);
    }
    if document.is_visible(Region::BeerForm) {
        forms.push(Focus::Search);
    }
    if app.state().review_entry() {
        forms.push(Focus::Review);
    }
    if document.is_visible(Region::LoginForm) {
        forms.push(Focus::Login);
    }
    if document.is_visible(Region::SignupForm) {
        forms.push(Focus::Signup);
    }
    forms
}

pub fn handle_key(app: &mut App, input: &mut InputState, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press {
        return InputAction::None;
    }

    if is_ctrl_char(key, 'q') {
        return InputAction::Quit;
    }
    if is_ctrl_char(key, 'f') {
        app.show_search_form();
        input.set_focus(Focus::Search);
        return InputAction::None;
    }
    if is_ctrl_char(key, 'r') {
        app.toggle_review_entry();
        let next = if app.state().review_entry() {
            Focus::Review
        } else {
            first_focusable(app)
        };
        input.set_focus(next);
        return InputAction::None;
    }
    if is_ctrl_char(key, 'l') {
        if app.is_authenticated() {
            if let Err(err) = app.logout() {
                tracing::warn!(error = %err, "logout failed");
            }
            input.set_focus(first_focusable(app));
        }
        return InputAction::None;
    }

    // Focus may point at a form the last render hid.
    let forms = focusable(app);
    if !forms.contains(&input.focus) {
        input.set_focus(forms.first().copied().unwrap_or(Focus::Landing));
    }

    match key.code {
        KeyCode::Tab => {
            cycle_focus(input, &forms);
            InputAction::None
        }
        KeyCode::Up => {
            input.field = input.field.saturating_sub(1);
            InputAction::None
        }
        KeyCode::Down => {
            let last = input.fields(input.focus).len().saturating_sub(1);
            input.field = (input.field + 1).min(last);
            InputAction::None
        }
        KeyCode::Enter => submit(app, input),
        KeyCode::Backspace => {
            let (focus, index) = (input.focus, input.field);
            if let Some(field) = input.fields_mut(focus).get_mut(index) {
                field.value.pop();
            }
            InputAction::None
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let (focus, index) = (input.focus, input.field);
            if let Some(field) = input.fields_mut(focus).get_mut(index) {
                field.value.push(ch);
            }
            InputAction::None
        }
        _ => InputAction::None,
    }
}

fn submit(app: &mut App, input: &mut InputState) -> InputAction {
    match input.focus {
        Focus::Landing => {
            app.show_search_form();
            input.set_focus(Focus::Search);
            InputAction::None
        }
        Focus::Search => {
            let query = input.value(Focus::Search, 0);
            if query.is_empty() {
                return InputAction::None;
            }
            InputAction::Send(app.submit_search(&query))
        }
        Focus::Login => {
            if input.field + 1 < input.login.len() {
                input.field += 1;
                return InputAction::None;
            }
            let username = input.value(Focus::Login, 0);
            let password = input.fields(Focus::Login)[1].value.clone();
            input.clear(Focus::Login);
            InputAction::Send(app.submit_login(&username, &password))
        }
        Focus::Signup => {
            if input.field + 1 < input.signup.len() {
                input.field += 1;
                return InputAction::None;
            }
            let user = NewUser {
                username: input.value(Focus::Signup, 0),
                password: input.fields(Focus::Signup)[1].value.clone(),
                first_name: input.value(Focus::Signup, 2),
                last_name: input.value(Focus::Signup, 3),
            };
            input.clear(Focus::Signup);
            InputAction::Send(app.submit_signup(user))
        }
        Focus::Review => {
            let text = input.value(Focus::Review, 0);
            if text.is_empty() {
                return InputAction::None;
            }
            match app.submit_review(&text) {
                Some(dispatch) => {
                    input.clear(Focus::Review);
                    InputAction::Send(dispatch)
                }
                None => InputAction::None,
            }
        }
    }
}

fn cycle_focus(input: &mut InputState, forms: &[Focus]) {
    if forms.is_empty() {
        return;
    }
    let current = forms.iter().position(|f| *f == input.focus).unwrap_or(0);
    input.set_focus(forms[(current + 1) % forms.len()]);
}

fn first_focusable(app: &App) -> Focus {
    focusable(app).first().copied().unwrap_or(Focus::Landing)
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
