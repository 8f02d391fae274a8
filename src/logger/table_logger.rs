use crate::structs::contact_message::ContactMessage;
use crate::structs::course::Course;
use crate::structs::student::Student;

const MIN_COLUMN_WIDTH: usize = 6;
const FALLBACK_TERMINAL_WIDTH: usize = 100;

/// Plain-text tables for the admin console.
pub struct TableLogger {}

impl TableLogger {
    pub fn print_students(students: &[Student]) {
        if students.is_empty() {
            println!("\n📭 No students enrolled yet");
            return;
        }
        let rows: Vec<Vec<String>> = students
            .iter()
            .map(|s| vec![s.timestamp.clone(), s.name.clone(), s.email.clone(), s.phone.clone(), s.course.clone()])
            .collect();
        Self::print_table(&["Date", "Name", "Email", "Phone", "Course"], &rows);
    }

    pub fn print_messages(messages: &[ContactMessage]) {
        if messages.is_empty() {
            println!("\n📭 No messages yet");
            return;
        }
        let rows: Vec<Vec<String>> = messages
            .iter()
            .map(|m| vec![m.timestamp.clone(), m.name.clone(), m.email.clone(), m.message.clone()])
            .collect();
        Self::print_table(&["Date", "Name", "Email", "Message"], &rows);
    }

    pub fn print_courses(courses: &[Course]) {
        if courses.is_empty() {
            println!("\n📭 No courses yet");
            return;
        }
        let rows: Vec<Vec<String>> = courses
            .iter()
            .map(|c| vec![c.id.clone(), c.name.clone(), c.duration.clone(), format!("₹{}", c.formatted_fees())])
            .collect();
        Self::print_table(&["Id", "Name", "Duration", "Fees"], &rows);
    }

    pub fn print_load_failed() {
        println!("\n⚠️ Failed to load data");
    }

    fn print_table(headers: &[&str], rows: &[Vec<String>]) {
        let widths = column_widths(headers, rows, terminal_width());
        println!();
        println!("{}", format_row(headers.iter().map(|h| h.to_string()), &widths));
        println!("{}", widths.iter().map(|w| "─".repeat(*w)).collect::<Vec<_>>().join("─┼─"));
        for row in rows {
            println!("{}", format_row(row.iter().cloned(), &widths));
        }
    }
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(FALLBACK_TERMINAL_WIDTH)
}

/// Natural widths, with the widest columns shrunk until the table fits.
fn column_widths(headers: &[&str], rows: &[Vec<String>], available: usize) -> Vec<usize> {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate().take(widths.len()) {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let separators = 3 * widths.len().saturating_sub(1);
    let budget = available.saturating_sub(separators);
    while widths.iter().sum::<usize>() > budget {
        let Some((index, widest)) = widths.iter().copied().enumerate().max_by_key(|(_, w)| *w) else {
            break;
        };
        if widest <= MIN_COLUMN_WIDTH {
            break;
        }
        widths[index] = widest - 1;
    }
    widths
}

fn format_row(cells: impl Iterator<Item = String>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", truncate(&cell, *width), width = *width))
        .collect::<Vec<_>>()
        .join(" │ ")
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_fit_content_when_space_allows() {
        let rows = vec![vec!["Asha".to_string(), "asha@school.in".to_string()]];
        assert_eq!(column_widths(&["Name", "Email"], &rows, 80), vec![4, 14]);
    }

    #[test]
    fn widest_column_shrinks_first() {
        let rows = vec![vec!["Asha".to_string(), "x".repeat(60)]];
        let widths = column_widths(&["Name", "Message"], &rows, 40);
        assert_eq!(widths[0], 4);
        assert_eq!(widths.iter().sum::<usize>() + 3, 40);
    }

    #[test]
    fn truncation_marks_cut_text() {
        assert_eq!(truncate("Hello world", 6), "Hello…");
        assert_eq!(truncate("Hi", 6), "Hi");
        assert_eq!(format_row(vec!["ab".to_string(), "c".to_string()].into_iter(), &[3, 1]), "ab  │ c");
    }
}
