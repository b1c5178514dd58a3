use std::fmt;

use serde::Deserialize;

pub type StudentId = i32;

/// One enrolled student.
///
/// `id` is handed out by the roster and never changes; every other field
/// is stored exactly as entered.
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StudentRecord {
    // 学号
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    // stored as typed, not parsed
    pub dob: String,
    pub gender: String,
    // 绩点
    pub gpa: f64,
    pub semester: String,
    pub program: String,
    pub num_courses: i32,
}

/// Field values collected for a student that has no id yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub dob: String,
    pub gender: String,
    pub gpa: f64,
    pub semester: String,
    pub program: String,
    pub num_courses: i32,
}

impl StudentRecord {
    pub fn new(id: StudentId, fields: NewStudent) -> Self {
        let NewStudent {
            first_name,
            last_name,
            dob,
            gender,
            gpa,
            semester,
            program,
            num_courses,
        } = fields;
        Self {
            id,
            first_name,
            last_name,
            dob,
            gender,
            gpa,
            semester,
            program,
            num_courses,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Student ID: {}", self.id)?;
        writeln!(f, "   Name: {}", self.full_name())?;
        writeln!(f, "   DOB: {}", self.dob)?;
        writeln!(f, "   Gender: {}", self.gender)?;
        writeln!(f, "   GPA: {:.2}", self.gpa)?;
        writeln!(f, "   Program: {}", self.program)?;
        writeln!(f, "   Semester: {}", self.semester)?;
        write!(f, "   Number of Courses: {}", self.num_courses)
    }
}
