//! Player screen: one mounted algorithm and its key routing
//!
//! The screen owns the [`StepPlayer`], so its pending auto-advance lives and
//! dies with it. Key presses reach the player only through
//! [`PlayerScreen::handle_key`]; while the goto-step field is open every key
//! goes to the field instead.

use crate::catalog::Algorithm;
use crate::input::{command_for_key, FieldEvent, PlayerCommand, TextField};
use crate::player::{Clock, Speed, StepPlayer};
use crate::ui::panes;
use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};
use std::rc::Rc;

/// What the player screen asks the app to do after a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    None,
    Back,
    Quit,
}

pub struct PlayerScreen<C: Clock> {
    player: StepPlayer<C>,
    /// Goto-step prompt; `Some` while it has focus
    goto: Option<TextField>,
    code_tab: usize,
    show_code: bool,
    show_help: bool,
    status: String,
}

impl<C: Clock> PlayerScreen<C> {
    pub fn mount(algorithm: Rc<Algorithm>, speed: Speed, clock: C, show_code: bool) -> Self {
        tracing::info!(slug = %algorithm.slug, speed = %speed, "player mounted");
        PlayerScreen {
            player: StepPlayer::with_clock(algorithm, speed, clock),
            goto: None,
            code_tab: 0,
            show_code,
            show_help: false,
            status: String::from("Ready! Press Space to play"),
        }
    }

    pub fn player(&self) -> &StepPlayer<C> {
        &self.player
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn code_tab(&self) -> usize {
        self.code_tab
    }

    pub fn is_code_visible(&self) -> bool {
        self.show_code
    }

    pub fn is_help_visible(&self) -> bool {
        self.show_help
    }

    /// Current goto-field contents, if the field has focus
    pub fn goto_prompt(&self) -> Option<&str> {
        self.goto.as_ref().map(TextField::value)
    }

    /// Fire a due auto-advance; true when the step changed
    pub fn tick(&mut self) -> bool {
        if !self.player.tick() {
            return false;
        }
        self.status = if self.player.is_at_end() {
            String::from("Playback complete")
        } else {
            String::from("Playing...")
        };
        true
    }

    pub fn take_dirty(&mut self) -> bool {
        self.player.take_dirty()
    }

    pub fn time_until_next(&self) -> Option<std::time::Duration> {
        self.player.time_until_next()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> ScreenAction {
        if let Some(field) = self.goto.as_mut() {
            let event = field.handle_key(key);
            self.handle_goto_event(event);
            return ScreenAction::None;
        }

        if self.show_help {
            self.show_help = false;
            return ScreenAction::None;
        }

        match command_for_key(key) {
            Some(command) => self.apply(command),
            None => ScreenAction::None,
        }
    }

    fn handle_goto_event(&mut self, event: FieldEvent) {
        match event {
            FieldEvent::Submitted => {
                let target = self
                    .goto
                    .take()
                    .and_then(|field| field.value().parse::<usize>().ok());
                match target {
                    Some(step) => {
                        self.player.seek(step.saturating_sub(1));
                        self.status = format!("Jumped to step {}", self.player.index() + 1);
                    }
                    None => self.status = String::from("Go to step cancelled"),
                }
            }
            FieldEvent::Cancelled => {
                self.goto = None;
                self.status = String::from("Go to step cancelled");
            }
            FieldEvent::Changed | FieldEvent::Ignored => {}
        }
    }

    fn apply(&mut self, command: PlayerCommand) -> ScreenAction {
        match command {
            PlayerCommand::TogglePlay => {
                self.player.toggle_play();
                self.status = if self.player.is_playing() {
                    String::from("Playing...")
                } else {
                    String::from("Paused")
                };
            }
            PlayerCommand::StepForward => {
                self.player.pause_and_next();
                self.status = if self.player.is_at_end() {
                    String::from("At last step")
                } else {
                    String::from("Stepped forward")
                };
            }
            PlayerCommand::StepBack => {
                self.player.pause_and_prev();
                self.status = if self.player.is_at_start() {
                    String::from("At first step")
                } else {
                    String::from("Stepped backward")
                };
            }
            PlayerCommand::Reset => {
                self.player.reset();
                self.status = String::from("Reset to start");
            }
            PlayerCommand::Faster => self.change_speed(self.player.speed().faster()),
            PlayerCommand::Slower => self.change_speed(self.player.speed().slower()),
            PlayerCommand::SetSpeed(speed) => self.change_speed(speed),
            PlayerCommand::First => {
                self.player.seek(0);
                self.status = String::from("Jumped to start");
            }
            PlayerCommand::Last => {
                self.player.seek(self.player.last_index());
                self.status = String::from("Jumped to end");
            }
            PlayerCommand::NextCodeTab => self.cycle_code_tab(true),
            PlayerCommand::PrevCodeTab => self.cycle_code_tab(false),
            PlayerCommand::ToggleCode => self.show_code = !self.show_code,
            PlayerCommand::OpenGoto => {
                self.goto = Some(TextField::digits());
            }
            PlayerCommand::ToggleHelp => self.show_help = !self.show_help,
            PlayerCommand::Back => return ScreenAction::Back,
            PlayerCommand::Quit => return ScreenAction::Quit,
        }
        ScreenAction::None
    }

    fn change_speed(&mut self, speed: Speed) {
        self.player.set_speed(speed);
        self.status = format!("Speed {}", speed);
        tracing::debug!(speed = %speed, "speed changed");
    }

    fn cycle_code_tab(&mut self, forward: bool) {
        let tabs = self.player.algorithm().code.len();
        if tabs == 0 {
            return;
        }
        self.code_tab = if forward {
            (self.code_tab + 1) % tabs
        } else {
            (self.code_tab + tabs - 1) % tabs
        };
    }

    pub fn render(&self, frame: &mut Frame) {
        let algorithm = self.player.algorithm();
        let view = self.player.view();

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(panes::HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(frame.area());

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        panes::render_header_pane(frame, rows[0], algorithm);
        panes::render_visual_pane(frame, columns[0], &view);

        if self.show_code && !algorithm.code.is_empty() {
            let right = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
                .split(columns[1]);
            panes::render_pseudocode_pane(frame, right[0], view.pseudocode, view.active_line);
            panes::render_code_pane(frame, right[1], &algorithm.code, self.code_tab);
        } else {
            panes::render_pseudocode_pane(frame, columns[1], view.pseudocode, view.active_line);
        }

        panes::render_status_bar(frame, rows[2], &view, &self.status, self.goto_prompt());

        if self.show_help {
            let area = frame.area();
            panes::render_help_overlay(frame, area);
        }
    }
}

impl<C: Clock> Drop for PlayerScreen<C> {
    fn drop(&mut self) {
        self.player.cancel_pending();
        tracing::info!(slug = %self.player.algorithm().slug, "player unmounted");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::player::ManualClock;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};
    use std::time::Duration;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mount(slug: &str) -> (PlayerScreen<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let algorithm = Catalog::builtin().get(slug).expect("builtin slug");
        let screen = PlayerScreen::mount(algorithm, Speed::Normal, clock.clone(), true);
        (screen, clock)
    }

    fn screen_text(screen: &PlayerScreen<ManualClock>) -> String {
        let backend = TestBackend::new(120, 36);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| screen.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn arrows_pause_and_move() {
        let (mut screen, _clock) = mount("bubble-sort");
        screen.handle_key(key(KeyCode::Char(' ')));
        assert!(screen.player().is_playing());

        screen.handle_key(key(KeyCode::Right));
        assert!(!screen.player().is_playing());
        assert_eq!(screen.player().index(), 1);

        screen.handle_key(key(KeyCode::Left));
        screen.handle_key(key(KeyCode::Left));
        assert_eq!(screen.player().index(), 0);
        assert_eq!(screen.status(), "At first step");
    }

    #[test]
    fn goto_field_swallows_player_keys() {
        let (mut screen, _clock) = mount("bubble-sort");
        screen.handle_key(key(KeyCode::Char('g')));
        assert_eq!(screen.goto_prompt(), Some(""));

        // Space and arrows go to the field, not the player
        screen.handle_key(key(KeyCode::Char(' ')));
        screen.handle_key(key(KeyCode::Right));
        screen.handle_key(key(KeyCode::Char('q')));
        assert!(!screen.player().is_playing());
        assert_eq!(screen.player().index(), 0);

        screen.handle_key(key(KeyCode::Char('5')));
        assert_eq!(screen.goto_prompt(), Some("5"));
        assert_eq!(screen.handle_key(key(KeyCode::Enter)), ScreenAction::None);

        assert_eq!(screen.goto_prompt(), None);
        assert_eq!(screen.player().index(), 4);
        assert_eq!(screen.status(), "Jumped to step 5");
    }

    #[test]
    fn goto_is_clamped_and_cancellable() {
        let (mut screen, _clock) = mount("binary-search");
        screen.handle_key(key(KeyCode::Char(':')));
        screen.handle_key(key(KeyCode::Char('9')));
        screen.handle_key(key(KeyCode::Char('9')));
        screen.handle_key(key(KeyCode::Enter));
        assert_eq!(screen.player().index(), 3);

        screen.handle_key(key(KeyCode::Char('g')));
        screen.handle_key(key(KeyCode::Char('1')));
        screen.handle_key(key(KeyCode::Esc));
        assert_eq!(screen.goto_prompt(), None);
        assert_eq!(screen.player().index(), 3);
    }

    #[test]
    fn help_closes_on_any_key() {
        let (mut screen, _clock) = mount("bubble-sort");
        screen.handle_key(key(KeyCode::Char('?')));
        assert!(screen.is_help_visible());

        screen.handle_key(key(KeyCode::Right));
        assert!(!screen.is_help_visible());
        assert_eq!(screen.player().index(), 0);
    }

    #[test]
    fn back_and_quit_are_reported() {
        let (mut screen, _clock) = mount("bubble-sort");
        assert_eq!(screen.handle_key(key(KeyCode::Esc)), ScreenAction::Back);
        assert_eq!(screen.handle_key(key(KeyCode::Char('q'))), ScreenAction::Quit);
        assert_eq!(
            screen.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            ScreenAction::Quit
        );
    }

    #[test]
    fn tick_updates_status() {
        let (mut screen, clock) = mount("linear-search");
        screen.handle_key(key(KeyCode::Char(' ')));

        clock.advance(Duration::from_millis(1200));
        assert!(screen.tick());
        assert_eq!(screen.status(), "Playing...");

        clock.advance(Duration::from_millis(1200));
        assert!(screen.tick());
        assert_eq!(screen.status(), "Playback complete");
        assert_eq!(screen.time_until_next(), None);
    }

    #[test]
    fn speed_keys_change_speed() {
        let (mut screen, _clock) = mount("bubble-sort");
        screen.handle_key(key(KeyCode::Char('3')));
        assert_eq!(screen.player().speed(), Speed::Double);
        screen.handle_key(key(KeyCode::Char('-')));
        assert_eq!(screen.player().speed(), Speed::Normal);
        assert_eq!(screen.status(), "Speed 1x");
    }

    #[test]
    fn code_tabs_wrap() {
        let (mut screen, _clock) = mount("merge-sort");
        screen.handle_key(key(KeyCode::BackTab));
        assert_eq!(screen.code_tab(), 1);
        screen.handle_key(key(KeyCode::Tab));
        assert_eq!(screen.code_tab(), 0);
    }

    #[test]
    fn renders_all_panes() {
        let (mut screen, _clock) = mount("bubble-sort");
        screen.handle_key(key(KeyCode::Right));
        let text = screen_text(&screen);

        assert!(text.contains("Bubble Sort"));
        assert!(text.contains("Visualizer"));
        assert!(text.contains("Pseudocode"));
        assert!(text.contains("Code"));
        assert!(text.contains("Step 2/7"));
        assert!(text.contains("STEP 2 / 7"));
    }

    #[test]
    fn hiding_code_drops_the_code_pane() {
        let (mut screen, _clock) = mount("bubble-sort");
        screen.handle_key(key(KeyCode::Char('c')));
        assert!(!screen.is_code_visible());
        assert!(!screen_text(&screen).contains(" Code "));
    }

    #[test]
    fn goto_prompt_shows_in_status_bar() {
        let (mut screen, _clock) = mount("bubble-sort");
        screen.handle_key(key(KeyCode::Char('g')));
        screen.handle_key(key(KeyCode::Char('3')));
        assert!(screen_text(&screen).contains("Go to step: 3"));
    }
}
