use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u64,
    /// External employee code, caller-supplied. The server enforces
    /// uniqueness; this client only requires it to be non-empty.
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceStatus::Present => f.write_str("Present"),
            AttendanceStatus::Absent => f.write_str("Absent"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: u64,
    /// Server id of the owning employee.
    pub employee_id: u64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Body for `POST /employees`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

/// Body for `POST /employees/{id}/attendance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAttendance {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// The four input fields of the add-employee form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeForm {
    /// All four fields must be non-empty before submission is allowed.
    pub fn is_complete(&self) -> bool {
        !self.employee_id.trim().is_empty()
            && !self.full_name.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.department.trim().is_empty()
    }

    pub fn to_payload(&self) -> NewEmployee {
        NewEmployee {
            employee_id: self.employee_id.trim().to_string(),
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            department: self.department.trim().to_string(),
        }
    }
}
