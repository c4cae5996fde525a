use crate::state::ViewState;
use std::fmt::Write;

/// Renders the whole screen from the view state. Pure: same state, same
/// text. Until the first load succeeds, a load in flight or a load
/// failure replaces the entire screen.
pub fn render(state: &ViewState) -> String {
    if !state.loaded_once {
        if state.loading {
            return "Loading...\n".to_string();
        }
        if let Some(err) = &state.error {
            return format!("Failed to load employees: {err}\n");
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "=== HRMS Lite ===");

    if let Some(err) = &state.error {
        let _ = writeln!(out, "error: {err}");
    }
    if state.loading {
        let _ = writeln!(out, "(refreshing...)");
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Employees:");
    if state.employees.is_empty() {
        let _ = writeln!(out, "  No employees yet.");
    } else {
        for (index, emp) in state.employees.iter().enumerate() {
            let _ = writeln!(
                out,
                "  {}. {} [{}]  {} / {}",
                index + 1,
                emp.full_name,
                emp.employee_id,
                emp.department,
                emp.email
            );
        }
    }

    if let Some(selected) = &state.selected {
        let _ = writeln!(out);
        let _ = writeln!(out, "Attendance for {}:", selected.full_name);
        if state.attendance.is_empty() {
            let _ = writeln!(out, "  No records yet.");
        } else {
            for record in &state.attendance {
                let _ = writeln!(out, "  {}  {}", record.date, record.status);
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AttendanceRecord, AttendanceStatus, Employee};
    use crate::state::Action;
    use chrono::NaiveDate;

    fn ada() -> Employee {
        Employee {
            id: 1,
            employee_id: "EMP-001".to_string(),
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            department: "Engineering".to_string(),
        }
    }

    #[test]
    fn initial_load_shows_loading_screen() {
        let state = ViewState::default().apply(Action::LoadStarted);
        assert_eq!(render(&state), "Loading...\n");
    }

    #[test]
    fn initial_failure_replaces_whole_screen() {
        let state = ViewState::default()
            .apply(Action::LoadStarted)
            .apply(Action::LoadFailed("network unreachable".to_string()));

        let screen = render(&state);
        assert_eq!(screen, "Failed to load employees: network unreachable\n");
    }

    #[test]
    fn empty_list_shows_empty_state_message() {
        let state = ViewState::default()
            .apply(Action::LoadStarted)
            .apply(Action::EmployeesLoaded(vec![]));

        let screen = render(&state);
        assert!(screen.contains("No employees yet."));
        assert!(!screen.contains("error:"));
    }

    #[test]
    fn list_renders_every_employee_in_order() {
        let mut bea = ada();
        bea.id = 2;
        bea.full_name = "Bea Byte".to_string();

        let state = ViewState::default()
            .apply(Action::LoadStarted)
            .apply(Action::EmployeesLoaded(vec![ada(), bea]));

        let screen = render(&state);
        let ada_at = screen.find("Ada Lovelace").unwrap();
        let bea_at = screen.find("Bea Byte").unwrap();
        assert!(ada_at < bea_at);
    }

    #[test]
    fn failure_after_first_load_renders_inline() {
        let state = ViewState::default()
            .apply(Action::LoadStarted)
            .apply(Action::EmployeesLoaded(vec![ada()]))
            .apply(Action::Failed("duplicate employee code".to_string()));

        let screen = render(&state);
        assert!(screen.contains("error: duplicate employee code"));
        assert!(screen.contains("Ada Lovelace"));
    }

    #[test]
    fn selection_renders_attendance_records() {
        let state = ViewState::default()
            .apply(Action::LoadStarted)
            .apply(Action::EmployeesLoaded(vec![ada()]))
            .apply(Action::Selected(ada()));
        let epoch = state.selection_epoch;
        let state = state.apply(Action::AttendanceLoaded {
            epoch,
            records: vec![AttendanceRecord {
                id: 7,
                employee_id: 1,
                date: NaiveDate::from_ymd_opt(2026, 8, 24).unwrap(),
                status: AttendanceStatus::Present,
            }],
        });

        let screen = render(&state);
        assert!(screen.contains("Attendance for Ada Lovelace:"));
        assert!(screen.contains("2026-08-24  Present"));
    }
}
