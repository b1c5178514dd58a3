use std::io::{self, BufRead, Write};

use log::info;

mod console;
mod err;
mod menu;
mod operations;
mod roster;
mod student;

pub use console::Console;
pub use err::EnrollmentError;
pub use roster::Roster;

/// Build the roster for a new session
pub fn build_roster(preload_students: bool) -> Result<Roster, EnrollmentError> {
    if preload_students {
        Roster::with_starter_records()
    } else {
        Ok(Roster::new())
    }
}

/// Announce preloaded records, then hand control to the menu
pub fn run_session<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<(), EnrollmentError> {
    if let (Some(first), Some(last)) = (roster.students().first(), roster.students().last()) {
        console.say(&format!(
            "Loaded {} starter student records (IDs {}-{}).",
            roster.len(),
            first.id,
            last.id
        ))?;
    }
    info!(
        "session started with {} students, next id {}",
        roster.len(),
        roster.peek_next_id()
    );
    menu::run(roster, console)
}

/// Run a session on the process's own stdin and stdout
pub fn run_interactive(preload_students: bool) -> Result<(), EnrollmentError> {
    let mut roster = build_roster(preload_students)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock());
    run_session(&mut roster, &mut console)
}
