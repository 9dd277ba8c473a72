//! Server-rendered HTML pages.
//!
//! Pages are small enough to build with `format!`; every value that came
//! from a user goes through [`escape`].

use crate::domain::Employee;

const SKILL_OPTIONS: &[&str] = &["JavaScript", "TypeScript", "Python", "Go", "Rust", "Java", "SQL"];

/// Escape text for use inside HTML element content and quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        body = body,
    )
}

fn credential_form(action: &str, submit: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{action}\">\n\
         <label>Username <input name=\"username\" required></label>\n\
         <label>Password <input name=\"password\" type=\"password\" required></label>\n\
         <button type=\"submit\">{submit}</button>\n</form>"
    )
}

pub fn register_page() -> String {
    let body = format!(
        "{}\n<p>Already registered? <a href=\"/login\">Log in</a></p>",
        credential_form("/register", "Register")
    );
    layout("Register", &body)
}

pub fn login_page() -> String {
    let body = format!(
        "{}\n<p>No account? <a href=\"/register\">Register</a></p>",
        credential_form("/login", "Log in")
    );
    layout("Log in", &body)
}

/// Creation form. Posting it to `/employees/<id>` updates instead.
pub fn employee_form_page() -> String {
    let options: String = SKILL_OPTIONS
        .iter()
        .map(|skill| format!("<option value=\"{0}\">{0}</option>", skill))
        .collect();

    let body = format!(
        "<form method=\"post\" action=\"/employees\">\n\
         <label>Name <input name=\"name\"></label>\n\
         <label>Age <input name=\"age\" type=\"number\" min=\"0\"></label>\n\
         <label>Email <input name=\"email\" type=\"email\"></label>\n\
         <label>Date of birth <input name=\"dob\" type=\"date\"></label>\n\
         <label>Years of experience <input name=\"experience\" type=\"number\" min=\"0\"></label>\n\
         <label>Gender <select name=\"gender\">\
         <option value=\"\"></option><option>Female</option><option>Male</option><option>Other</option>\
         </select></label>\n\
         <label>Department <input name=\"department\"></label>\n\
         <label>Skills <select name=\"skills\" multiple>{options}</select></label>\n\
         <label>Address <textarea name=\"address\"></textarea></label>\n\
         <button type=\"submit\">Save</button>\n</form>\n\
         <p><a href=\"/employees\">Back to list</a></p>"
    );
    layout("Add employee", &body)
}

fn cell(value: Option<impl ToString>) -> String {
    value.map(|v| escape(&v.to_string())).unwrap_or_default()
}

fn employee_row(employee: &Employee) -> String {
    format!(
        "<tr><td>{name}</td><td>{age}</td><td>{email}</td><td>{dob}</td><td>{exp}</td>\
         <td>{gender}</td><td>{department}</td><td>{skills}</td><td>{address}</td>\
         <td><a href=\"/employees/{id}/edit\">Edit</a> \
         <form method=\"post\" action=\"/employees/{id}/delete\" style=\"display:inline\">\
         <button type=\"submit\">Delete</button></form></td></tr>",
        name = cell(employee.name.as_deref()),
        age = cell(employee.age),
        email = cell(employee.email.as_deref()),
        dob = cell(employee.date_of_birth),
        exp = cell(employee.years_experience),
        gender = cell(employee.gender.as_deref()),
        department = cell(employee.department.as_deref()),
        skills = escape(&employee.skills.join(", ")),
        address = cell(employee.address.as_deref()),
        id = employee.id,
    )
}

pub fn employee_list_page(employees: &[Employee], username: &str) -> String {
    let rows: String = employees.iter().map(employee_row).collect();

    let body = format!(
        "<p>Signed in as {user}. <a href=\"/logout\">Log out</a></p>\n\
         <p><a href=\"/employees/new\">Add employee</a></p>\n\
         <table>\n<thead><tr><th>Name</th><th>Age</th><th>Email</th><th>Date of birth</th>\
         <th>Experience</th><th>Gender</th><th>Department</th><th>Skills</th><th>Address</th>\
         <th></th></tr></thead>\n<tbody>{rows}</tbody>\n</table>",
        user = escape(username),
    );
    layout("Employees", &body)
}
