//! Converter application state and logic.

use crate::i18n::{self, Dictionary, Lang};
use crate::radix::Base;
use crate::sync::Converter;

/// Interactive converter state.
pub struct ConverterApp {
    /// The linked fields and their coordinator.
    pub converter: Converter,
    /// Current interface language.
    pub lang: Lang,
    /// Index of the focused field (into [`Base::ALL`]).
    pub focus: usize,
    /// Should we quit?
    pub should_quit: bool,
    /// Status message to display.
    pub status: String,
}

impl ConverterApp {
    /// Create an app with empty fields in the given language.
    pub fn new(lang: Lang) -> Self {
        let dict = Dictionary::get(lang);
        Self {
            converter: Converter::new(dict.error),
            lang,
            focus: 0,
            should_quit: false,
            status: dict.help.to_string(),
        }
    }

    /// The active dictionary.
    pub fn dict(&self) -> &'static Dictionary {
        Dictionary::get(self.lang)
    }

    /// The base of the focused field.
    pub fn focused_base(&self) -> Base {
        Base::ALL[self.focus]
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % Base::ALL.len();
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + Base::ALL.len() - 1) % Base::ALL.len();
    }

    /// Append a typed character to the focused field.
    pub fn type_char(&mut self, c: char) {
        let base = self.focused_base();
        let mut text = self.converter.field(base).text().to_string();
        text.push(c);
        self.edit(base, &text);
    }

    /// Delete the last character of the focused field.
    pub fn backspace(&mut self) {
        let base = self.focused_base();
        let mut text = self.converter.field(base).text().to_string();
        text.pop();
        self.edit(base, &text);
    }

    /// Clear the focused field (and with it, every other field).
    pub fn clear_field(&mut self) {
        let base = self.focused_base();
        self.edit(base, "");
    }

    /// Switch between Portuguese and English and persist the choice.
    pub fn toggle_language(&mut self) {
        self.lang = self.lang.toggle();
        i18n::save_pref(self.lang);
        let dict = self.dict();
        self.converter.set_error_token(dict.error);
        self.status = dict.help.to_string();
    }

    fn edit(&mut self, base: Base, text: &str) {
        self.converter.on_edit(base, text);
        let dict = self.dict();
        self.status = if self.converter.field(base).has_error() {
            format!("{}: {}", dict.label(base), dict.error)
        } else {
            dict.help.to_string()
        };
    }
}

/// Run the interactive converter.
pub fn run_converter(lang: Lang) -> std::io::Result<()> {
    use crossterm::{
        event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
        ExecutableCommand,
    };
    use ratatui::prelude::*;
    use std::io::stdout;
    use std::time::Duration;

    // Setup terminal
    enable_raw_mode()?;
    stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    // Create app
    let mut app = ConverterApp::new(lang);

    // Main loop
    loop {
        // Draw
        terminal.draw(|frame| {
            super::ui::draw(frame, &app);
        })?;

        // Handle input
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.clear_field();
                        }
                        KeyCode::F(2) => app.toggle_language(),
                        KeyCode::Tab | KeyCode::Down => app.focus_next(),
                        KeyCode::BackTab | KeyCode::Up => app.focus_prev(),
                        KeyCode::Backspace => app.backspace(),
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.type_char(c);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_fans_out() {
        let mut app = ConverterApp::new(Lang::En);
        // Focus decimal and type "42".
        app.focus = 4;
        assert_eq!(app.focused_base(), Base::Decimal);
        app.type_char('4');
        app.type_char('2');
        assert_eq!(app.converter.field(Base::Binary).text(), "101010");
        assert_eq!(app.status, Dictionary::get(Lang::En).help);
    }

    #[test]
    fn test_invalid_key_sets_status() {
        let mut app = ConverterApp::new(Lang::En);
        app.focus = 1; // binary
        app.type_char('2');
        assert!(app.converter.field(Base::Binary).has_error());
        assert!(app.status.contains("Error"));
    }

    #[test]
    fn test_backspace_to_empty_clears() {
        let mut app = ConverterApp::new(Lang::En);
        app.focus = 4;
        app.type_char('7');
        assert_eq!(app.converter.field(Base::Octal).text(), "7");
        app.backspace();
        assert_eq!(app.converter.field(Base::Octal).text(), "");
    }

    #[test]
    fn test_focus_wraps() {
        let mut app = ConverterApp::new(Lang::En);
        for _ in 0..Base::ALL.len() {
            app.focus_next();
        }
        assert_eq!(app.focus, 0);
        app.focus_prev();
        assert_eq!(app.focus, Base::ALL.len() - 1);
    }
}
