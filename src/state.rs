use crate::models::{AttendanceRecord, Employee, EmployeeForm};

/// Everything the screen is rendered from. Owned by the controller,
/// updated only through [`ViewState::apply`], discarded on exit.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub employees: Vec<Employee>,
    pub loading: bool,
    pub error: Option<String>,
    /// True once the first employee load has succeeded. Before that an
    /// error replaces the whole screen; after, it renders inline.
    pub loaded_once: bool,
    pub form: EmployeeForm,
    pub selected: Option<Employee>,
    /// Invariant: non-empty only while it belongs to `selected`.
    pub attendance: Vec<AttendanceRecord>,
    /// Bumped on every selection change. An attendance response tagged
    /// with an older epoch is stale and gets dropped.
    pub selection_epoch: u64,
}

#[derive(Debug, Clone)]
pub enum Action {
    LoadStarted,
    EmployeesLoaded(Vec<Employee>),
    LoadFailed(String),
    FormEdited(EmployeeForm),
    FormCleared,
    Selected(Employee),
    AttendanceLoaded {
        epoch: u64,
        records: Vec<AttendanceRecord>,
    },
    /// Any mutating action (add, delete, mark) that the API rejected.
    Failed(String),
}

impl ViewState {
    /// Pure transition: consumes the current state and an action, returns
    /// the next state. The only place view state changes.
    pub fn apply(mut self, action: Action) -> ViewState {
        match action {
            Action::LoadStarted => {
                self.loading = true;
                self.error = None;
            }
            Action::EmployeesLoaded(list) => {
                self.employees = list;
                self.loading = false;
                self.loaded_once = true;
                // A selection that no longer exists (deleted elsewhere or
                // just deleted here) must not keep its attendance around.
                if let Some(selected) = &self.selected {
                    if !self.employees.iter().any(|emp| emp.id == selected.id) {
                        self.selected = None;
                        self.attendance.clear();
                        self.selection_epoch += 1;
                    }
                }
            }
            Action::LoadFailed(message) => {
                self.loading = false;
                self.error = Some(message);
            }
            Action::FormEdited(form) => {
                self.form = form;
            }
            Action::FormCleared => {
                self.form = EmployeeForm::default();
            }
            Action::Selected(employee) => {
                self.selected = Some(employee);
                self.attendance.clear();
                self.selection_epoch += 1;
            }
            Action::AttendanceLoaded { epoch, records } => {
                if epoch == self.selection_epoch && self.selected.is_some() {
                    self.attendance = records;
                }
            }
            Action::Failed(message) => {
                self.error = Some(message);
            }
        }
        self
    }
}
