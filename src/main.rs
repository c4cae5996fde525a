use hrms_lite::models::{AttendanceStatus, Employee, EmployeeForm};
use hrms_lite::{Controller, HrApi};
use std::io::Write as _;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let api = HrApi::from_env();
    info!(base_url = api.base_url(), "connecting to HR API");

    let mut controller = Controller::new(api);
    controller.load_employees().await;
    print!("{}", hrms_lite::ui::render(controller.state()));
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        let line = line.trim();

        let (command, argument) = match line.split_once(' ') {
            Some((head, tail)) => (head, tail.trim()),
            None => (line, ""),
        };

        match command {
            "" => continue,
            "help" => {
                print_help();
                continue;
            }
            "quit" | "exit" => break,
            "list" => controller.load_employees().await,
            "add" => {
                let Some(form) = read_form(&mut lines).await? else {
                    break;
                };
                controller.edit_form(form);
                controller.add_employee().await;
            }
            "select" => match pick_employee(&controller, argument) {
                Some(employee) => controller.select_employee(employee).await,
                None => {
                    println!("usage: select <number from the list>");
                    continue;
                }
            },
            "delete" => match pick_employee(&controller, argument) {
                Some(employee) => {
                    let confirmed = confirm_delete(&mut lines, &employee).await?;
                    controller.delete_employee(employee.id, confirmed).await;
                }
                None => {
                    println!("usage: delete <number from the list>");
                    continue;
                }
            },
            "present" => controller.mark_attendance(AttendanceStatus::Present).await,
            "absent" => controller.mark_attendance(AttendanceStatus::Absent).await,
            _ => {
                println!("unknown command: {command} (try 'help')");
                continue;
            }
        }

        print!("{}", hrms_lite::ui::render(controller.state()));
    }

    Ok(())
}

fn print_help() {
    println!("commands:");
    println!("  list          reload the employee list");
    println!("  add           add an employee (prompts for the four fields)");
    println!("  select <n>    show attendance for employee n");
    println!("  delete <n>    delete employee n (asks for confirmation)");
    println!("  present       mark the selected employee present today");
    println!("  absent        mark the selected employee absent today");
    println!("  quit          exit");
}

fn pick_employee(controller: &Controller, argument: &str) -> Option<Employee> {
    let index: usize = argument.parse().ok()?;
    controller.state().employees.get(index.checked_sub(1)?).cloned()
}

/// Prompts for the four form fields. Each is required; an empty answer
/// re-prompts, so a submitted form is always complete. Returns None on
/// end of input.
async fn read_form(
    lines: &mut Lines<BufReader<Stdin>>,
) -> Result<Option<EmployeeForm>, std::io::Error> {
    let labels = ["Employee ID", "Full Name", "Email", "Department"];
    let mut answers = Vec::with_capacity(labels.len());

    for label in labels {
        loop {
            print!("{label}: ");
            std::io::stdout().flush()?;
            let Some(answer) = lines.next_line().await? else {
                return Ok(None);
            };
            let answer = answer.trim().to_string();
            if answer.is_empty() {
                println!("{label} is required");
                continue;
            }
            answers.push(answer);
            break;
        }
    }

    let mut fields = answers.into_iter();
    Ok(Some(EmployeeForm {
        employee_id: fields.next().unwrap_or_default(),
        full_name: fields.next().unwrap_or_default(),
        email: fields.next().unwrap_or_default(),
        department: fields.next().unwrap_or_default(),
    }))
}

async fn confirm_delete(
    lines: &mut Lines<BufReader<Stdin>>,
    employee: &Employee,
) -> Result<bool, std::io::Error> {
    print!(
        "Are you sure you want to delete {}? [y/N] ",
        employee.full_name
    );
    std::io::stdout().flush()?;
    let Some(answer) = lines.next_line().await? else {
        return Ok(false);
    };
    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}
