//! Terminal rendering of the customer table and the add-customer dialog

use ratatui::{prelude::*, widgets::*};

use crate::constants::APP_NAME;
use crate::messages::RenderState;
use crate::models::{Customer, DraftField};

/// Table column titles, in cell order
pub const COLUMNS: [&str; 6] = ["ID", "First Name", "Last Name", "Email", "Phone Number", "Address"];

/// Display cells for one customer; missing optional fields render empty
pub fn customer_cells(customer: &Customer) -> [String; 6] {
    [
        customer.id.clone().unwrap_or_default(),
        customer.first_name.clone(),
        customer.last_name.clone(),
        customer.email.clone(),
        customer.phone_number.clone().unwrap_or_default(),
        customer.address.clone().unwrap_or_default(),
    ]
}

/// Helper text shown under an invalid field
pub fn error_text(field: DraftField) -> &'static str {
    match field {
        DraftField::FirstName => "First name is required",
        DraftField::LastName => "Last name is required",
        DraftField::Email => "A valid email is required",
        DraftField::PhoneNumber | DraftField::Address => "",
    }
}

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(0),    // Customer table
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);
    draw_customer_table(f, state, chunks[1]);
    draw_status_bar(f, state, chunks[2]);

    if state.dialog.open {
        draw_add_dialog(f, state, area);
    }

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" "),
        Span::styled(
            format!("{} customers", state.customers.len()),
            Style::default().fg(Color::Gray),
        ),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn draw_customer_table(f: &mut Frame, state: &RenderState, area: Rect) {
    let focused = !state.dialog.open && !state.show_help;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        })
        .title(if state.is_loading { " Customers [...] " } else { " Customers " });

    if state.customers.is_empty() {
        let content = if state.is_loading {
            "Loading customers..."
        } else {
            "No customers yet. Press 'a' to add one."
        };
        let placeholder = Paragraph::new(content)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(Style::default().fg(Color::Yellow).bold());

    let rows: Vec<Row> = state
        .customers
        .iter()
        .map(|c| Row::new(customer_cells(c)))
        .collect();

    let widths = [
        Constraint::Length(14),
        Constraint::Percentage(15),
        Constraint::Percentage(15),
        Constraint::Percentage(25),
        Constraint::Percentage(15),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .row_highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .highlight_symbol("> ");

    let mut table_state = TableState::default();
    table_state.select(Some(state.selected_row));
    f.render_stateful_widget(table, area, &mut table_state);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_submitting {
        " Saving customer... "
    } else if state.dialog.open {
        " Tab/↓:next field | Shift+Tab/↑:prev | Enter:add | Esc:cancel "
    } else if state.is_loading {
        " Loading... "
    } else {
        " a:add customer | ↑/↓:select | ?:help | q:quit "
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_add_dialog(f: &mut Frame, state: &RenderState, area: Rect) {
    let dialog = &state.dialog;
    let popup_area = centered_fixed(60, 22, area);

    let title = if state.is_submitting {
        " Add Customer [saving...] "
    } else {
        " Add Customer (Enter:add  Esc:cancel) "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(popup_area);

    f.render_widget(Clear, popup_area);
    f.render_widget(block, popup_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            DraftField::ALL
                .iter()
                .flat_map(|_| [Constraint::Length(3), Constraint::Length(1)]),
        )
        .split(inner);

    for (i, field) in DraftField::ALL.iter().enumerate() {
        let (input_area, helper_area) = (rows[i * 2], rows[i * 2 + 1]);
        let is_active = *field == dialog.active_field;
        let has_error = dialog.errors.get(*field);

        let border_style = if has_error {
            Style::default().fg(Color::Red)
        } else if is_active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let label = if field.is_required() {
            format!(" {} * ", field.label())
        } else {
            format!(" {} ", field.label())
        };

        let input = Paragraph::new(dialog.draft.field(*field)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(label),
        );
        f.render_widget(input, input_area);

        if has_error {
            let helper = Paragraph::new(error_text(*field)).style(Style::default().fg(Color::Red));
            f.render_widget(helper, helper_area);
        }

        if is_active {
            let max_x = input_area.x.saturating_add(input_area.width.saturating_sub(2));
            let column = cursor_column(dialog.current_input(), dialog.cursor_position);
            let cursor_x = input_area.x.saturating_add(column).saturating_add(1).min(max_x);
            f.set_cursor_position(Position::new(cursor_x, input_area.y.saturating_add(1)));
        }
    }
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 60, area);

    let help_text = r#"
 CUSTOMER DESK - Keyboard Shortcuts

 CUSTOMERS
   a                  Add a customer
   ↑ / ↓              Select row

 ADD CUSTOMER
   Tab / ↓            Next field
   Shift+Tab / ↑      Previous field
   ← / →              Move cursor
   Enter              Add customer
   Esc                Cancel

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

/// Display column of a byte cursor within a single-line input
fn cursor_column(input: &str, cursor_position: usize) -> u16 {
    let chars = input
        .get(..cursor_position)
        .map(|before| before.chars().count())
        .unwrap_or_else(|| input.chars().count());
    u16::try_from(chars).unwrap_or(u16::MAX)
}

/// Centered popup with a fixed height, clamped to the available area
fn centered_fixed(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let width = (u32::from(r.width) * u32::from(percent_x.min(100)) / 100) as u16;
    Rect {
        x: r.x + (r.width - width) / 2,
        y: r.y + (r.height - height) / 2,
        width,
        height,
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::DialogState;
    use crate::models::{CustomerDraft, FieldErrors};
    use ratatui::backend::TestBackend;

    fn sample_customer() -> Customer {
        serde_json::from_str(r#"{"id":"1","firstName":"A","lastName":"B","email":"a@b.com"}"#).unwrap()
    }

    fn render(state: &RenderState, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    #[test]
    fn test_cells_fill_missing_optionals_with_empty() {
        let cells = customer_cells(&sample_customer());
        assert_eq!(cells, ["1", "A", "B", "a@b.com", "", ""].map(String::from));
    }

    #[test]
    fn test_table_renders_single_row() {
        let state = RenderState {
            customers: vec![sample_customer()],
            ..Default::default()
        };
        let lines = render(&state, 120, 12);
        let data_rows: Vec<&String> = lines.iter().filter(|l| l.contains("a@b.com")).collect();
        assert_eq!(data_rows.len(), 1);
        assert!(lines.iter().any(|l| l.contains("First Name")));
    }

    #[test]
    fn test_empty_list_placeholder() {
        let lines = render(&RenderState::default(), 80, 10);
        assert!(lines.iter().any(|l| l.contains("No customers yet")));

        let loading = RenderState {
            is_loading: true,
            ..Default::default()
        };
        let lines = render(&loading, 80, 10);
        assert!(lines.iter().any(|l| l.contains("Loading customers")));
    }

    #[test]
    fn test_dialog_shows_helper_text_for_errors() {
        let state = RenderState {
            dialog: DialogState {
                open: true,
                errors: FieldErrors { first_name: true, last_name: false, email: true },
                ..Default::default()
            },
            ..Default::default()
        };
        let lines = render(&state, 100, 30);
        assert!(lines.iter().any(|l| l.contains("First name is required")));
        assert!(lines.iter().any(|l| l.contains("A valid email is required")));
        assert!(!lines.iter().any(|l| l.contains("Last name is required")));
    }

    fn dialog_with_first_name(text: &str) -> RenderState {
        RenderState {
            dialog: DialogState {
                open: true,
                draft: CustomerDraft {
                    first_name: text.into(),
                    ..Default::default()
                },
                cursor_position: text.len(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    fn cursor_after_render(state: &RenderState) -> Position {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, state)).unwrap();
        terminal.get_cursor_position().unwrap()
    }

    #[test]
    fn test_cursor_counts_chars_not_bytes() {
        let ascii = cursor_after_render(&dialog_with_first_name("eee"));
        let accented = cursor_after_render(&dialog_with_first_name("ééé"));
        assert_eq!(ascii, accented);
    }

    #[test]
    fn test_cursor_column_mid_string() {
        assert_eq!(cursor_column("ééx", 2), 1);
        assert_eq!(cursor_column("ééx", 4), 2);
        assert_eq!(cursor_column("abc", 99), 3);
    }

    #[test]
    fn test_centered_fixed_wide_terminal() {
        let area = Rect::new(0, 0, 2000, 40);
        let popup = centered_fixed(60, 22, area);
        assert_eq!(popup.width, 1200);
        assert_eq!(popup.x, 400);
    }

    #[test]
    fn test_centered_fixed_clamps_height() {
        let area = Rect::new(0, 0, 100, 10);
        let popup = centered_fixed(60, 22, area);
        assert_eq!(popup.height, 10);
        assert_eq!(popup.width, 60);
        assert_eq!(popup.x, 20);
    }
}
