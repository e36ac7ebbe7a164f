//! Console adapter: startup prompts and the full-screen pet view.
//!
//! ```text
//! ------------------------------------------
//!            TAMAGOTCHI: Rex
//! ------------------------------------------
//! |                ///                     |
//! |               (0‿0)                    |
//! |             // | | \                   |
//! |                ---                     |
//! |              //   \                    |
//! |                                        |
//! |            Status: Healthy             |
//! ------------------------------------------
//!             Ignored: 0/3
//! ------------------------------------------
//! ```
//!
//! Status changes and new requests redraw the whole screen. Answers are
//! appended below the current frame. Fixed text comes from a [`ConsoleText`]
//! table selected by [`Language`]. Request prompts and replies are printed as
//! the pet says them.

use std::io::{self, BufRead, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{Clear, ClearType, SetTitle};
use log::warn;

use crate::app::events::{PetEvent, PetSnapshot};
use crate::app::ports::EventSink;
use crate::config::Language;
use crate::fsm::StateId;

/// Terminal window title.
pub const WINDOW_TITLE: &str = "Tamagotchi Game";

const RULE: &str = "------------------------------------------";

// ── Text ──────────────────────────────────────────────────────

/// Fixed console text for one language. Pet-specific lines are built as
/// `"{name} {fragment}"`.
#[derive(Debug)]
pub struct ConsoleText {
    pub welcome: &'static str,
    pub name_prompt: &'static str,
    pub born: &'static str,
    pub says: &'static str,
    pub sorry: &'static str,
    pub ignored: &'static str,
    pub status: &'static str,
    pub healthy: &'static str,
    pub sick: &'static str,
    pub dead: &'static str,
    pub fell_sick: &'static str,
    pub recovered: &'static str,
    pub died: &'static str,
    pub died_of_neglect: &'static str,
    pub lived: &'static str,
    pub first_wait: &'static str,
    pub next_wait: &'static str,
    pub question: &'static str,
    pub game_over: &'static str,
    pub exit_hint: &'static str,
}

impl ConsoleText {
    pub const ENGLISH: Self = Self {
        welcome: "Welcome to the game",
        name_prompt: "Enter a name for your tamagotchi: ",
        born: "was born! Take care of them!",
        says: "says",
        sorry: "sorry..",
        ignored: "Ignored",
        status: "Status",
        healthy: "Healthy",
        sick: "Sick",
        dead: "Dead",
        fell_sick: "sick!",
        recovered: "recovered!",
        died: "died",
        died_of_neglect: "died due to lack of care...",
        lived: "lived a long and happy life! :)",
        first_wait: "Waiting for the first request...",
        next_wait: "Waiting for the next request..",
        question: "Do the request? (y/n): ",
        game_over: "Game over",
        exit_hint: "Press Enter to exit...",
    };

    pub const UKRAINIAN: Self = Self {
        welcome: "Ласкаво просимо до гри",
        name_prompt: "Введіть ім'я для вашого тамагочі: ",
        born: "народився! Піклуйтеся про нього!",
        says: "каже",
        sorry: "вибач..",
        ignored: "Ігнорувань",
        status: "Стан",
        healthy: "Здоровий",
        sick: "Хворий",
        dead: "Помер",
        fell_sick: "захворів!",
        recovered: "одужав!",
        died: "помер",
        died_of_neglect: "помер через брак турботи...",
        lived: "прожив довге й щасливе життя! :)",
        first_wait: "Очікування першого запиту...",
        next_wait: "Очікування наступного запиту..",
        question: "Виконати запит? (y/так/n): ",
        game_over: "Гра закінчена",
        exit_hint: "Натисніть Enter, щоб вийти...",
    };

    pub fn for_language(language: Language) -> &'static Self {
        match language {
            Language::English => &Self::ENGLISH,
            Language::Ukrainian => &Self::UKRAINIAN,
        }
    }

    fn status_label(&self, status: StateId) -> &'static str {
        match status {
            StateId::Healthy => self.healthy,
            StateId::Sick => self.sick,
            StateId::Dead => self.dead,
        }
    }
}

// ── Startup ───────────────────────────────────────────────────

/// Trimmed name, or `default` when nothing printable was entered.
pub fn resolve_name(raw: &str, default: &str) -> String {
    let name = raw.trim();
    if name.is_empty() {
        default.to_string()
    } else {
        name.to_string()
    }
}

/// Read one line and resolve it to a pet name. EOF yields the default.
pub fn read_name(input: &mut impl BufRead, default: &str) -> io::Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(resolve_name(&line, default))
}

/// Set the window title, print the welcome banner and the name prompt.
pub fn print_banner(out: &mut impl Write, text: &ConsoleText) -> io::Result<()> {
    queue!(
        out,
        SetTitle(WINDOW_TITLE),
        Print(RULE),
        Print(format!("\n{:^42}\n", text.welcome)),
        Print(format!("{:^42}\n", "TAMAGOTCHI!")),
        Print(RULE),
        Print(format!("\n\n{}", text.name_prompt)),
    )?;
    out.flush()
}

pub fn print_exit_hint(out: &mut impl Write, text: &ConsoleText) -> io::Result<()> {
    queue!(out, Print(format!("\n{}", text.exit_hint)))?;
    out.flush()
}

// ── Renderer ──────────────────────────────────────────────────

/// [`EventSink`] that draws the pet on a terminal.
pub struct ConsoleRenderer<W: Write> {
    out: W,
    text: &'static ConsoleText,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self::with_text(out, &ConsoleText::ENGLISH)
    }

    pub fn with_text(out: W, text: &'static ConsoleText) -> Self {
        Self { out, text }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, pet: &PetSnapshot, event: &PetEvent) -> io::Result<()> {
        if redraws(event) {
            self.draw_frame(pet)?;
        }
        for line in event_lines(self.text, pet, event) {
            queue!(self.out, Print("\n"), Print(line), Print("\n"))?;
        }
        if let PetEvent::RequestIssued { .. } = event {
            queue!(self.out, Print("\n"), Print(self.text.question))?;
        }
        if event.is_terminal() {
            queue!(self.out, Print(self.text.game_over), Print("\n"))?;
        }
        self.out.flush()
    }

    fn draw_frame(&mut self, pet: &PetSnapshot) -> io::Result<()> {
        queue!(
            self.out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(RULE),
            Print(format!("\n{:^42}\n", format!("TAMAGOTCHI: {}", pet.name))),
            Print(RULE),
            Print("\n"),
            SetForegroundColor(status_colour(pet.status)),
        )?;
        for row in face(pet.status) {
            queue!(self.out, Print(format!("|{:^40}|\n", row)))?;
        }
        let status = format!("{}: {}", self.text.status, self.text.status_label(pet.status));
        queue!(
            self.out,
            Print(format!("|{:^40}|\n", "")),
            Print(format!("|{:^40}|\n", status)),
            ResetColor,
            Print(RULE),
            Print(format!(
                "\n{:^42}\n",
                format!("{}: {}/{}", self.text.ignored, pet.ignore_count, pet.max_ignored)
            )),
            Print(RULE),
            Print("\n"),
        )
    }
}

impl<W: Write> EventSink for ConsoleRenderer<W> {
    fn emit(&mut self, pet: &PetSnapshot, event: &PetEvent) {
        if let Err(e) = self.render(pet, event) {
            warn!("Console: render failed: {}", e);
        }
    }
}

fn redraws(event: &PetEvent) -> bool {
    !matches!(
        event,
        PetEvent::RequestSatisfied { .. } | PetEvent::RequestIgnored { .. }
    )
}

fn event_lines(text: &ConsoleText, pet: &PetSnapshot, event: &PetEvent) -> Vec<String> {
    let name = &pet.name;
    let next_wait = text.next_wait.to_string();
    match event {
        PetEvent::Born => vec![format!("{name} {}", text.born), text.first_wait.to_string()],
        PetEvent::RequestIssued { message, .. } => vec![format!("{name} {}: {message}", text.says)],
        PetEvent::RequestSatisfied { reply, .. } => vec![format!("{name}: {reply}"), next_wait],
        PetEvent::RequestIgnored { ignored, max } => vec![
            format!("{name} {} ({}: {ignored}/{max})", text.sorry, text.ignored),
            next_wait,
        ],
        PetEvent::StatusChanged { to, .. } => {
            let change = if *to == StateId::Healthy {
                text.recovered
            } else {
                text.fell_sick
            };
            vec![format!("{name} {change}"), next_wait]
        }
        PetEvent::Died { .. } => vec![
            format!("{name} {} :(", text.died),
            format!("{name} {}", text.died_of_neglect),
        ],
        PetEvent::LifeEnded { .. } => vec![format!("{name} {}", text.lived)],
    }
}

fn face(status: StateId) -> [&'static str; 5] {
    match status {
        StateId::Healthy => ["///", "(0‿0)", "// | | \\", "---", "//   \\"],
        StateId::Sick => ["|||", "(-_-)", "// | | \\", "---", "//   \\"],
        StateId::Dead => ["///", "(x_x)", "/ | | \\", "---", "/    \\"],
    }
}

fn status_colour(status: StateId) -> Color {
    match status {
        StateId::Healthy => Color::Green,
        StateId::Sick => Color::Yellow,
        StateId::Dead => Color::Red,
    }
}
