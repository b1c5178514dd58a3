use std::io::{BufRead, Write};

use log::info;

use super::console::{Console, YesNo};
use super::err::EnrollmentError;
use super::roster::Roster;
use super::student::{NewStudent, StudentId, StudentRecord};

/// Fields that can be changed after a student has been added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditableField {
    LastName,
    Gpa,
    Semester,
    Program,
    NumCourses,
}

impl EditableField {
    /// In sub-menu order; the entry at position `i` is option `i + 1`
    pub const ALL: [EditableField; 5] = [
        EditableField::LastName,
        EditableField::Gpa,
        EditableField::Semester,
        EditableField::Program,
        EditableField::NumCourses,
    ];

    /// Map a sub-menu number to a field; `0` and unknown numbers give `None`
    pub fn from_choice(choice: i32) -> Option<Self> {
        let index = usize::try_from(choice).ok()?.checked_sub(1)?;
        Self::ALL.get(index).copied()
    }

    pub fn label(self) -> &'static str {
        match self {
            EditableField::LastName => "Last Name",
            EditableField::Gpa => "GPA",
            EditableField::Semester => "Semester",
            EditableField::Program => "Program",
            EditableField::NumCourses => "Number of Courses",
        }
    }

    fn updated_message(self) -> &'static str {
        match self {
            EditableField::LastName => "Last Name updated.",
            EditableField::Gpa => "GPA updated.",
            EditableField::Semester => "Semester updated.",
            EditableField::Program => "Program updated.",
            EditableField::NumCourses => "Number of courses updated.",
        }
    }

    fn current_value(self, student: &StudentRecord) -> String {
        match self {
            EditableField::LastName => student.last_name.clone(),
            EditableField::Gpa => student.gpa.to_string(),
            EditableField::Semester => student.semester.clone(),
            EditableField::Program => student.program.clone(),
            EditableField::NumCourses => student.num_courses.to_string(),
        }
    }
}

fn read_new_student<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<NewStudent, EnrollmentError> {
    Ok(NewStudent {
        first_name: console.read_text("Enter First Name: ")?,
        last_name: console.read_text("Enter Last Name: ")?,
        dob: console.read_text("Enter Date of Birth (YYYY-MM-DD): ")?,
        gender: console.read_text("Enter Gender: ")?,
        gpa: console.read_decimal("Enter Previous GPA: ")?,
        semester: console.read_text("Enter Current Semester: ")?,
        program: console.read_text("Enter Program: ")?,
        num_courses: console.read_integer("Enter Number of Courses: ")?,
    })
}

/// Collect a new student's fields and append it with the next id
pub fn add_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<StudentId, EnrollmentError> {
    console.section("--- Add New Student ---")?;

    let fields = read_new_student(console)?;
    let id = roster.next_id();
    roster.append(StudentRecord::new(id, fields));
    info!("added student {}", id);

    console.say(&format!("Student added successfully with ID: {}", id))?;
    Ok(id)
}

pub fn display_students<R: BufRead, W: Write>(
    roster: &Roster,
    console: &mut Console<R, W>,
) -> Result<(), EnrollmentError> {
    if roster.is_empty() {
        return console.say("No students in the system.");
    }

    console.section("--- List of Enrolled Students ---")?;
    for student in roster.students() {
        console.section(&student.to_string())?;
    }
    Ok(())
}

/// Ask for a student id and look it up.
///
/// Prints the not-found message itself; callers just stop on `None`.
fn prompt_and_find<R: BufRead, W: Write>(
    roster: &Roster,
    console: &mut Console<R, W>,
) -> Result<Option<usize>, EnrollmentError> {
    let id = console.read_integer("Enter Student ID: ")?;
    let index = roster.find_index_by_id(id);
    if index.is_none() {
        console.say(&format!("Student with ID {} not found.", id))?;
    }
    Ok(index)
}

pub fn modify_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<(), EnrollmentError> {
    console.section("--- Modify Student Record ---")?;

    let Some(index) = prompt_and_find(roster, console)? else {
        return Ok(());
    };
    if let Some(student) = roster.get_mut(index) {
        modify_fields(student, console)?;
        info!("saved modifications to student {}", student.id);
        console.say("Modifications saved.")?;
    }
    Ok(())
}

fn modify_fields<R: BufRead, W: Write>(
    student: &mut StudentRecord,
    console: &mut Console<R, W>,
) -> Result<(), EnrollmentError> {
    loop {
        console.section(&format!("--- Modifying Student: {} ---", student.full_name()))?;
        for (i, field) in EditableField::ALL.iter().enumerate() {
            console.say(&format!(
                "{}. {} ({})",
                i + 1,
                field.label(),
                field.current_value(student)
            ))?;
        }
        console.say("0. Finish Modifying")?;

        let max = EditableField::ALL.len() as i32;
        let choice = console.read_integer_in_range("Enter field to modify: ", 0, max)?;
        let Some(field) = EditableField::from_choice(choice) else {
            return Ok(());
        };

        let prompt = format!("Enter new {}: ", field.label());
        match field {
            EditableField::LastName => student.last_name = console.read_text(&prompt)?,
            EditableField::Gpa => student.gpa = console.read_decimal(&prompt)?,
            EditableField::Semester => student.semester = console.read_text(&prompt)?,
            EditableField::Program => student.program = console.read_text(&prompt)?,
            EditableField::NumCourses => student.num_courses = console.read_integer(&prompt)?,
        }
        info!("student {}: {} updated", student.id, field.label());
        console.say(field.updated_message())?;
    }
}

/// Remove a student after an explicit `Y`; returns whether a record was removed
pub fn remove_student<R: BufRead, W: Write>(
    roster: &mut Roster,
    console: &mut Console<R, W>,
) -> Result<bool, EnrollmentError> {
    console.section("--- Remove Student ---")?;

    let Some(index) = prompt_and_find(roster, console)? else {
        return Ok(false);
    };
    let name = match roster.get(index) {
        Some(student) => student.full_name(),
        None => return Ok(false),
    };
    console.say(&format!("Found student: {}", name))?;

    match console.read_yes_no("Are you sure you want to remove? (Y/N): ")? {
        YesNo::Yes => {
            let removed = roster.remove_at(index);
            info!("removed student {}", removed.id);
            console.say("Student removed successfully.")?;
            Ok(true)
        }
        YesNo::No => {
            console.say("Removal cancelled.")?;
            Ok(false)
        }
    }
}
