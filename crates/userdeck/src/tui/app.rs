use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tracing::debug;
use userdeck_pager::{Pager, SwipeTracker};
use userdeck_types::ThemeMode;

/// Screen areas that respond to clicks, recorded on every draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hitboxes {
    pub theme: Rect,
    pub previous: Rect,
    pub next: Rect,
}

impl Hitboxes {
    fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        if self.previous.contains(position) {
            Some(Action::Previous)
        } else if self.next.contains(position) {
            Some(Action::Next)
        } else if self.theme.contains(position) {
            Some(Action::ToggleTheme)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Previous,
    Next,
    ToggleTheme,
    Quit,
}

#[derive(Debug)]
pub struct App {
    pub pager: Pager,
    pub theme: ThemeMode,
    pub hitboxes: Hitboxes,
    pub ticks: u64,
    swipe: SwipeTracker,
    should_quit: bool,
}

impl App {
    pub fn new(theme: ThemeMode) -> Self {
        Self {
            pager: Pager::new(),
            theme,
            hitboxes: Hitboxes::default(),
            ticks: 0,
            swipe: SwipeTracker::new(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        debug!(key_code = ?key.code, modifiers = ?key.modifiers, "Key event");

        let action = match key.code {
            KeyCode::Left | KeyCode::Char('h') => Some(Action::Previous),
            KeyCode::Right | KeyCode::Char('l') => Some(Action::Next),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::Quit)
            }
            _ => None,
        };
        if let Some(action) = action {
            self.perform(action);
        }
    }

    /// A left-button press starts a drag; the release either swipes or clicks.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.swipe.begin(i32::from(mouse.column));
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if !self.swipe.is_tracking() {
                    return;
                }
                match self.swipe.end(i32::from(mouse.column)) {
                    Some(swipe) => {
                        debug!(?swipe, "Swipe gesture");
                        swipe.apply(&mut self.pager);
                    }
                    None => {
                        if let Some(action) = self.hitboxes.action_at(mouse.column, mouse.row) {
                            self.perform(action);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    pub fn perform(&mut self, action: Action) {
        match action {
            Action::Previous => {
                self.pager.go_previous();
            }
            Action::Next => {
                self.pager.go_next();
            }
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                debug!(theme = ?self.theme, "Toggled theme");
            }
            Action::Quit => self.should_quit = true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdeck_types::User;

    fn app_with_users(n: u64) -> App {
        let mut app = App::new(ThemeMode::Light);
        app.pager.set_loaded(
            (0..n)
                .map(|id| User {
                    id,
                    uid: format!("uid-{id}"),
                    password: "pw".to_string(),
                    first_name: "First".to_string(),
                    last_name: format!("{id}"),
                    username: format!("user{id}"),
                    email: format!("user{id}@example.com"),
                    avatar: String::new(),
                })
                .collect(),
        );
        app
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_arrow_keys_navigate_within_bounds() {
        let mut app = app_with_users(3);
        app.handle_key(press(KeyCode::Left));
        assert_eq!(app.pager.index(), 0);
        app.handle_key(press(KeyCode::Right));
        app.handle_key(press(KeyCode::Char('l')));
        app.handle_key(press(KeyCode::Right));
        assert_eq!(app.pager.index(), 2);
        app.handle_key(press(KeyCode::Char('h')));
        assert_eq!(app.pager.index(), 1);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app_with_users(3);
        let mut key = press(KeyCode::Right);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.pager.index(), 0);
    }

    #[test]
    fn test_theme_toggle_and_quit() {
        let mut app = app_with_users(1);
        app.handle_key(press(KeyCode::Char('t')));
        assert_eq!(app.theme, ThemeMode::Dark);
        assert!(!app.should_quit());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_leftward_drag_goes_next() {
        let mut app = app_with_users(3);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 70, 5));
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 40, 5));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 19, 5));
        assert_eq!(app.pager.index(), 1);
    }

    #[test]
    fn test_drag_of_exact_threshold_does_not_navigate() {
        let mut app = app_with_users(3);
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 70, 5));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 20, 5));
        assert_eq!(app.pager.index(), 0);
    }

    #[test]
    fn test_rightward_drag_goes_previous() {
        let mut app = app_with_users(3);
        app.pager.go_next();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 5, 5));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 60, 5));
        assert_eq!(app.pager.index(), 0);
    }

    #[test]
    fn test_click_on_buttons() {
        let mut app = app_with_users(3);
        app.hitboxes = Hitboxes {
            theme: Rect::new(60, 0, 10, 1),
            previous: Rect::new(2, 20, 10, 1),
            next: Rect::new(40, 20, 10, 1),
        };

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 45, 20));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 45, 20));
        assert_eq!(app.pager.index(), 1);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 3, 20));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 3, 20));
        assert_eq!(app.pager.index(), 0);

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 61, 0));
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 61, 0));
        assert_eq!(app.theme, ThemeMode::Dark);
    }

    #[test]
    fn test_release_without_press_does_nothing() {
        let mut app = app_with_users(3);
        app.hitboxes.next = Rect::new(40, 20, 10, 1);
        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 45, 20));
        assert_eq!(app.pager.index(), 0);
    }
}
