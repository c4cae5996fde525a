use crate::api::HrApi;
use crate::models::{AttendanceStatus, Employee, EmployeeForm, NewAttendance};
use crate::state::{Action, ViewState};
use chrono::Local;
use tracing::{info, warn};

/// Mediates between user input, the remote HR API, and the rendered
/// screen. Every outcome, success or failure, flows through the reducer;
/// nothing fails silently.
pub struct Controller {
    api: HrApi,
    state: ViewState,
}

impl Controller {
    pub fn new(api: HrApi) -> Self {
        Self {
            api,
            state: ViewState::default(),
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    fn dispatch(&mut self, action: Action) {
        self.state = std::mem::take(&mut self.state).apply(action);
    }

    /// Fetches the full employee list and replaces it in state. Runs at
    /// startup and again after every add or delete.
    pub async fn load_employees(&mut self) {
        self.dispatch(Action::LoadStarted);
        match self.api.list_employees().await {
            Ok(list) => {
                info!(count = list.len(), "employee list refreshed");
                self.dispatch(Action::EmployeesLoaded(list));
            }
            Err(err) => {
                warn!(error = %err, "employee list fetch failed");
                self.dispatch(Action::LoadFailed(err.message));
            }
        }
    }

    pub fn edit_form(&mut self, form: EmployeeForm) {
        self.dispatch(Action::FormEdited(form));
    }

    /// Submits the current form. On success the form is cleared and the
    /// list reloaded; the new entry appears only after the reload.
    pub async fn add_employee(&mut self) {
        if !self.state.form.is_complete() {
            self.dispatch(Action::Failed(
                "all four fields are required".to_string(),
            ));
            return;
        }

        match self.api.create_employee(&self.state.form.to_payload()).await {
            Ok(created) => {
                info!(id = created.id, "employee created");
                self.dispatch(Action::FormCleared);
                self.load_employees().await;
            }
            Err(err) => {
                warn!(error = %err, "employee create rejected");
                self.dispatch(Action::Failed(err.message));
            }
        }
    }

    /// Issues the delete only when the caller has confirmed it. A declined
    /// confirmation sends nothing at all.
    pub async fn delete_employee(&mut self, id: u64, confirmed: bool) {
        if !confirmed {
            return;
        }

        match self.api.delete_employee(id).await {
            Ok(()) => {
                info!(id, "employee deleted");
                self.load_employees().await;
            }
            Err(err) => {
                warn!(error = %err, "employee delete failed");
                self.dispatch(Action::Failed(err.message));
            }
        }
    }

    /// Sets the selection and fetches that employee's attendance. The
    /// fetch is tagged with the selection epoch so a response that lands
    /// after the user has moved on is dropped instead of applied.
    pub async fn select_employee(&mut self, employee: Employee) {
        let id = employee.id;
        self.dispatch(Action::Selected(employee));
        let epoch = self.state.selection_epoch;

        match self.api.list_attendance(id).await {
            Ok(records) => self.dispatch(Action::AttendanceLoaded { epoch, records }),
            Err(err) => {
                warn!(error = %err, "attendance fetch failed");
                self.dispatch(Action::Failed(err.message));
            }
        }
    }

    /// Records today's status for the selected employee, then re-selects
    /// the same employee to refresh the attendance list.
    pub async fn mark_attendance(&mut self, status: AttendanceStatus) {
        let Some(employee) = self.state.selected.clone() else {
            self.dispatch(Action::Failed("select an employee first".to_string()));
            return;
        };

        let entry = NewAttendance {
            date: Local::now().date_naive(),
            status,
        };

        match self.api.mark_attendance(employee.id, &entry).await {
            Ok(_) => self.select_employee(employee).await,
            Err(err) => {
                warn!(error = %err, "attendance mark rejected");
                self.dispatch(Action::Failed(err.message));
            }
        }
    }
}
