use colored::Colorize;
use roster::api::{CmdMessage, MessageLevel};
use roster::config::RosterConfig;
use roster::error::Result;
use roster::model::Student;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 20;
const ROLL_WIDTH: usize = 12;
const DEPT_WIDTH: usize = 15;
const GPA_WIDTH: usize = 6;
const CONTACT_WIDTH: usize = 20;
const RULE_WIDTH: usize = 73;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_students(students: &[Student]) {
    if students.is_empty() {
        return;
    }

    let header = [
        pad("Name", NAME_WIDTH),
        pad("Roll", ROLL_WIDTH),
        pad("Department", DEPT_WIDTH),
        pad("GPA", GPA_WIDTH),
        pad("Contact", CONTACT_WIDTH),
    ]
    .concat();
    println!("{}", header.trim_end().bold());
    println!("{}", "-".repeat(RULE_WIDTH));

    for student in students {
        println!("{}", format_row(student).trim_end());
    }
}

pub(crate) fn print_json(students: &[Student]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(students)?);
    Ok(())
}

pub(crate) fn print_config(config: &RosterConfig) {
    for (key, value) in config.entries() {
        println!("{} = {}", key, value);
    }
}

fn format_row(student: &Student) -> String {
    [
        pad(&student.name, NAME_WIDTH),
        pad(&student.roll, ROLL_WIDTH),
        pad(&student.department, DEPT_WIDTH),
        pad(&student.gpa.to_string(), GPA_WIDTH),
        pad(&student.contact, CONTACT_WIDTH),
    ]
    .concat()
}

/// Left-align `s` in a column of `width` cells, truncating with an ellipsis
/// and always leaving one cell of separation.
fn pad(s: &str, width: usize) -> String {
    let cell = truncate_to_width(s, width.saturating_sub(1));
    let padding = width.saturating_sub(cell.width());
    format!("{}{}", cell, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
