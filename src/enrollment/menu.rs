use std::io::{BufRead, Write};

use log::info;

use super::console::Console;
use super::err::EnrollmentError;
use super::operations;
use super::roster::Roster;

const MAIN_MENU: &str = "--- SAIT Enrollment System ---\n\
                         1. Add New Student\n\
                         2. Display All Students\n\
                         3. Modify Student Record\n\
                         4. Remove Student\n\
                         5. Exit";

/// Top-level menu entries, numbered as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add = 1,
    Display = 2,
    Modify = 3,
    Remove = 4,
    Exit = 5,
}

impl TryFrom<i32> for MenuChoice {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::Display),
            3 => Ok(MenuChoice::Modify),
            4 => Ok(MenuChoice::Remove),
            5 => Ok(MenuChoice::Exit),
            other => Err(other),
        }
    }
}

/// Run the menu until the user picks Exit.
///
/// Returns early only when the terminal fails or input runs out.
pub fn run<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<(), EnrollmentError> {
    loop {
        console.section(MAIN_MENU)?;
        let number = console.read_integer_in_range(
            "Enter your choice: ",
            MenuChoice::Add as i32,
            MenuChoice::Exit as i32,
        )?;
        // the range check above only lets valid numbers through
        let Ok(choice) = MenuChoice::try_from(number) else {
            continue;
        };

        match choice {
            MenuChoice::Add => {
                operations::add_student(roster, console)?;
            }
            MenuChoice::Display => operations::display_students(roster, console)?,
            MenuChoice::Modify => operations::modify_student(roster, console)?,
            MenuChoice::Remove => {
                operations::remove_student(roster, console)?;
            }
            MenuChoice::Exit => {
                info!("session ended with {} students", roster.len());
                console.section("Exiting program. Goodbye!")?;
                return Ok(());
            }
        }
    }
}
