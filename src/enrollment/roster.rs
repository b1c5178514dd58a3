use log::{debug, info};

use super::err::EnrollmentError;
use super::student::{StudentId, StudentRecord};

/// Id handed to the first student added to an empty roster
pub const FIRST_STUDENT_ID: StudentId = 1000;

/// Records available when the starter data is switched on
const STARTER_RECORDS: &str = "\
id,first_name,last_name,dob,gender,gpa,semester,program,num_courses
1000,Mihir,Gupta,2000-12-08,male,3.4,4,Bachelor of technology,15
1001,Umaya,Hewaarachchi,2001-12-24,female,3.5,3,bachelors of technology,15
1002,Jazmin,Horton,2003-04-07,female,3.4,4,bachelors of technology,15
1003,Nathan,Woyessa,2001-03-14,Male,3.8,4,bachelors of technology,15
";

/// Every student known to the running session, in insertion order,
/// together with the counter for the next id.
#[derive(Debug, Clone)]
pub struct Roster {
    students: Vec<StudentRecord>,
    next_id: StudentId,
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: FIRST_STUDENT_ID,
        }
    }

    /// Build a roster holding the embedded starter records.
    ///
    /// The counter continues one past the highest preloaded id.
    pub fn with_starter_records() -> Result<Self, EnrollmentError> {
        let mut roster = Self::new();
        let mut rdr = csv::Reader::from_reader(STARTER_RECORDS.as_bytes());
        for rd in rdr.deserialize() {
            let student: StudentRecord = rd?;
            if student.id >= roster.next_id {
                roster.next_id = student.id + 1;
            }
            roster.append(student);
        }
        info!("preloaded {} starter records", roster.len());
        Ok(roster)
    }

    /// Return the current counter value and advance it.
    ///
    /// Ids of removed students are never handed out again.
    pub fn next_id(&mut self) -> StudentId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// The id the next call to [`Roster::next_id`] will return
    pub fn peek_next_id(&self) -> StudentId {
        self.next_id
    }

    pub fn append(&mut self, student: StudentRecord) {
        self.students.push(student);
    }

    /// Position of the first student with `id`, scanning in insertion order
    pub fn find_index_by_id(&self, id: StudentId) -> Option<usize> {
        let index = self.students.iter().position(|s| s.id == id);
        debug!("lookup of id {} -> {:?}", id, index);
        index
    }

    /// Remove the student at `index`; later students shift down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds, like [`Vec::remove`].
    pub fn remove_at(&mut self, index: usize) -> StudentRecord {
        self.students.remove(index)
    }

    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.students.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut StudentRecord> {
        self.students.get_mut(index)
    }

    pub fn students(&self) -> &[StudentRecord] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrollment::student::NewStudent;

    fn named(first: &str) -> NewStudent {
        NewStudent {
            first_name: first.to_string(),
            last_name: "Test".to_string(),
            dob: "2001-02-03".to_string(),
            gender: "X".to_string(),
            gpa: 3.0,
            semester: "Winter 2026".to_string(),
            program: "ITS".to_string(),
            num_courses: 4,
        }
    }

    fn add(roster: &mut Roster, first: &str) -> StudentId {
        let id = roster.next_id();
        roster.append(StudentRecord::new(id, named(first)));
        id
    }

    #[test]
    fn test_ids_start_at_1000_and_increase_by_one() {
        let mut roster = Roster::new();
        assert_eq!(add(&mut roster, "A"), 1000);
        assert_eq!(add(&mut roster, "B"), 1001);
        assert_eq!(add(&mut roster, "C"), 1002);
        assert_eq!(roster.peek_next_id(), 1003);
    }

    #[test]
    fn test_removed_ids_are_not_reused() {
        let mut roster = Roster::new();
        let first = add(&mut roster, "A");
        let index = roster.find_index_by_id(first).unwrap();
        roster.remove_at(index);
        let second = add(&mut roster, "B");
        assert_eq!(second, first + 1);
        assert_eq!(roster.find_index_by_id(first), None);
    }

    #[test]
    fn test_find_index_by_id() {
        let mut roster = Roster::new();
        assert_eq!(roster.find_index_by_id(1000), None);

        add(&mut roster, "A");
        add(&mut roster, "B");
        add(&mut roster, "C");
        assert_eq!(roster.find_index_by_id(1001), Some(1));
        assert_eq!(roster.find_index_by_id(999), None);
        assert_eq!(roster.find_index_by_id(-1), None);
    }

    #[test]
    fn test_find_index_returns_first_match() {
        let mut roster = Roster::new();
        roster.append(StudentRecord::new(7, named("First")));
        roster.append(StudentRecord::new(7, named("Second")));
        assert_eq!(roster.find_index_by_id(7), Some(0));
    }

    #[test]
    fn test_remove_at_preserves_order_of_the_rest() {
        let mut roster = Roster::new();
        add(&mut roster, "A");
        add(&mut roster, "B");
        add(&mut roster, "C");

        let removed = roster.remove_at(1);
        assert_eq!(removed.first_name, "B");
        let ids: Vec<StudentId> = roster.students().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1000, 1002]);
        assert_eq!(roster.find_index_by_id(1002), Some(1));
    }

    #[test]
    fn test_starter_records() {
        let mut roster = Roster::with_starter_records().unwrap();
        assert_eq!(roster.len(), 4);
        let ids: Vec<StudentId> = roster.students().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1000, 1001, 1002, 1003]);

        let nathan = roster.get(3).unwrap();
        assert_eq!(nathan.full_name(), "Nathan Woyessa");
        assert_eq!(nathan.gpa, 3.8);
        assert_eq!(nathan.num_courses, 15);

        assert_eq!(roster.next_id(), 1004);
    }
}
