pub mod components;
pub mod layouts;
pub mod theme;

use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state::{AppState, FormField};
use components::account_input::{dropdown_geometry, AccountInput, DropdownGeometry};
use components::help_bar;

/// What sits under a terminal cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// An item row of an open dropdown
    DropdownItem { field: FormField, index: usize },
    /// Inside an open dropdown, but not on an item (header, divider, border)
    Dropdown(FormField),
    Field(FormField),
    Outside,
}

/// Pure render function, never mutates state
pub fn render_app(f: &mut Frame, state: &AppState) {
    let layout = layouts::form_layout(f.area());

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "New posting",
            theme::title_style(),
        ))),
        layout.title,
    );

    for field in FormField::ALL {
        let label_style = if state.focused_field == Some(field) {
            theme::header_style()
        } else {
            theme::help_text_style()
        };
        f.render_widget(
            Paragraph::new(field.label()).style(label_style),
            layout.label(field),
        );
        picker_widget(state, field).render_field(f, layout.input(field));
    }

    f.render_widget(Paragraph::new(status_line(state)), layout.status);
    help_bar::render_help_bar(f, layout.help, help_bar::HELP_TEXT_FORM);

    // Overlays last so they cover the rows below the field
    for field in FormField::ALL {
        picker_widget(state, field).render_dropdown(f, layout.input(field));
    }
}

fn picker_widget(state: &AppState, field: FormField) -> AccountInput<'_> {
    AccountInput::new(
        state.picker(field),
        &state.chart.accounts,
        &state.chart.account_types,
    )
    .max_height_percent(state.dropdown_height_percent)
}

fn status_line(state: &AppState) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, field) in FormField::ALL.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("   "));
        }
        let name = match field {
            FormField::Debit => "Debit: ",
            FormField::Credit => "Credit: ",
        };
        spans.push(Span::styled(name, theme::help_text_style()));
        match state.chosen_account(field) {
            Some(account) => spans.push(Span::raw(account.label())),
            None => spans.push(Span::styled("none", theme::muted_style())),
        }
    }
    Line::from(spans)
}

/// Geometry of a picker's dropdown as it would be drawn into `viewport`
pub fn dropdown_geometry_for(
    state: &AppState,
    field: FormField,
    viewport: Rect,
) -> Option<DropdownGeometry> {
    let picker = state.picker(field);
    let dropdown = picker.open_dropdown(&state.chart.accounts, &state.chart.account_types)?;
    let input_area = layouts::form_layout(viewport).input(field);

    Some(dropdown_geometry(
        &dropdown,
        picker.focus,
        input_area,
        viewport,
        state.dropdown_height_percent,
    ))
}

/// Resolve a mouse position against the last rendered frame.
///
/// Dropdowns are checked before fields because they are drawn on top.
pub fn hit_test(state: &AppState, column: u16, row: u16) -> Hit {
    let viewport = state.viewport;

    for field in FormField::ALL.into_iter().rev() {
        let Some(geometry) = dropdown_geometry_for(state, field, viewport) else {
            continue;
        };
        if !geometry.area.contains(Position::new(column, row)) {
            continue;
        }

        let index = geometry.row_at(column, row).and_then(|dropdown_row| {
            state
                .picker(field)
                .open_dropdown(&state.chart.accounts, &state.chart.account_types)?
                .item_at_row(dropdown_row)
        });
        return match index {
            Some(index) => Hit::DropdownItem { field, index },
            None => Hit::Dropdown(field),
        };
    }

    let layout = layouts::form_layout(viewport);
    FormField::ALL
        .into_iter()
        .find(|field| layout.input(*field).contains(Position::new(column, row)))
        .map_or(Hit::Outside, Hit::Field)
}
