//! Modal form model.
//!
//! A form is a list of labelled fields edited one at a time. Values are kept
//! as text while editing and converted when the form is submitted.

use chrono::NaiveDate;

use alpinedesk_core::models::{DateRange, Mountain, MountainForm, MAX_FORM_NUMBER};
use alpinedesk_core::utils::{format_query_date, parse_query_date};

use crate::pages::selector::NONE_SELECTED;

/// Longest value accepted by a number field.
const MAX_NUMBER_DIGITS: usize = 6;

/// Length of a `YYYY-MM-DD` date.
const DATE_LENGTH: usize = 10;

pub const NAME: &str = "Name";
pub const HEIGHT: &str = "Height";
pub const COUNTRY: &str = "Country";
pub const REGION: &str = "Region";
pub const DESCRIPTION: &str = "Description";
pub const MOUNTAIN: &str = "Mountain";
pub const LEADER_ID: &str = "Leader id";
pub const START: &str = "Start";
pub const END: &str = "End";

/// What submitting the form does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    AddMountain,
    EditMountain(i64),
    AddGroup,
    ClimberRange,
    AscentRange,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Date,
    Choice(Vec<Choice>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub label: &'static str,
    pub kind: FieldKind,
    pub value: String,
    /// Index into the choices of a `Choice` field.
    pub selected: usize,
}

impl Field {
    fn text(label: &'static str, value: impl Into<String>) -> Self {
        Self { label, kind: FieldKind::Text, value: value.into(), selected: 0 }
    }

    fn number(label: &'static str, value: i64) -> Self {
        Self { label, kind: FieldKind::Number, value: value.to_string(), selected: 0 }
    }

    fn date(label: &'static str, value: NaiveDate) -> Self {
        Self { label, kind: FieldKind::Date, value: format_query_date(value), selected: 0 }
    }

    fn choice(label: &'static str, choices: Vec<Choice>) -> Self {
        Self { label, kind: FieldKind::Choice(choices), value: String::new(), selected: 0 }
    }

    /// Text shown in the form row.
    pub fn display(&self) -> &str {
        match self.kind {
            FieldKind::Choice(ref choices) => choices
                .get(self.selected)
                .map(|c| c.label.as_str())
                .unwrap_or(""),
            _ => &self.value,
        }
    }

    fn accepts(&self, c: char) -> bool {
        match self.kind {
            FieldKind::Text => !c.is_control(),
            FieldKind::Number => c.is_ascii_digit() && self.value.len() < MAX_NUMBER_DIGITS,
            FieldKind::Date => (c.is_ascii_digit() || c == '-') && self.value.len() < DATE_LENGTH,
            FieldKind::Choice(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    pub kind: FormKind,
    pub title: &'static str,
    pub fields: Vec<Field>,
    pub focus: usize,
}

impl Form {
    fn new(kind: FormKind, title: &'static str, fields: Vec<Field>) -> Self {
        Self { kind, title, fields, focus: 0 }
    }

    pub fn add_mountain() -> Self {
        Self::mountain(FormKind::AddMountain, "Add mountain", &MountainForm::default())
    }

    pub fn edit_mountain(id: i64, mountain: &Mountain) -> Self {
        Self::mountain(
            FormKind::EditMountain(id),
            "Edit mountain",
            &MountainForm::from_mountain(mountain),
        )
    }

    fn mountain(kind: FormKind, title: &'static str, values: &MountainForm) -> Self {
        Self::new(
            kind,
            title,
            vec![
                Field::text(NAME, values.name.clone()),
                Field::number(HEIGHT, values.height),
                Field::text(COUNTRY, values.country.clone()),
                Field::text(REGION, values.region.clone()),
                Field::text(DESCRIPTION, values.description.clone()),
            ],
        )
    }

    /// Group creation form. The mountain choice starts at the "Select"
    /// sentinel; mountains without an id also carry the sentinel.
    pub fn add_group(mountains: &[Mountain], today: NaiveDate) -> Self {
        let mut choices = vec![Choice { label: "Select".to_string(), id: NONE_SELECTED }];
        choices.extend(mountains.iter().map(|m| Choice {
            label: m.picker_label(),
            id: m.id.filter(|id| *id > 0).unwrap_or(NONE_SELECTED),
        }));

        Self::new(
            FormKind::AddGroup,
            "Add group",
            vec![
                Field::text(NAME, ""),
                Field::choice(MOUNTAIN, choices),
                Field::number(LEADER_ID, 0),
                Field::date(START, today),
                Field::text(DESCRIPTION, ""),
            ],
        )
    }

    pub fn date_range(kind: FormKind, title: &'static str, today: NaiveDate) -> Self {
        let range = DateRange::last_month(today);
        Self::new(
            kind,
            title,
            vec![Field::date(START, range.start), Field::date(END, range.end)],
        )
    }

    fn field(&self, label: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.label == label)
    }

    pub fn text(&self, label: &str) -> String {
        self.field(label).map(|f| f.value.clone()).unwrap_or_default()
    }

    /// Integer value clamped to `0..=MAX_FORM_NUMBER`; blank reads as 0.
    pub fn number(&self, label: &str) -> i64 {
        self.field(label)
            .and_then(|f| f.value.parse::<i64>().ok())
            .unwrap_or(0)
            .clamp(0, MAX_FORM_NUMBER)
    }

    pub fn date(&self, label: &str) -> Option<NaiveDate> {
        self.field(label).and_then(|f| parse_query_date(&f.value))
    }

    /// Id of the selected choice, or the sentinel when nothing is chosen.
    pub fn choice_id(&self, label: &str) -> i64 {
        match self.field(label) {
            Some(Field { kind: FieldKind::Choice(choices), selected, .. }) => choices
                .get(*selected)
                .map(|c| c.id)
                .unwrap_or(NONE_SELECTED),
            _ => NONE_SELECTED,
        }
    }

    pub fn mountain_form(&self) -> MountainForm {
        MountainForm {
            name: self.text(NAME),
            height: self.number(HEIGHT),
            country: self.text(COUNTRY),
            region: self.text(REGION),
            description: self.text(DESCRIPTION),
        }
    }

    /// Both dates of a range form, or `None` if either does not parse.
    pub fn date_range_value(&self) -> Option<DateRange> {
        Some(DateRange::new(self.date(START)?, self.date(END)?))
    }

    // ===== Editing =====

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focus = (self.focus + self.fields.len() - 1) % self.fields.len();
        }
    }

    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if field.accepts(c) {
                field.value.push(c);
            }
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// Step through the choices of a focused choice field (wrapping).
    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if let FieldKind::Choice(ref choices) = field.kind {
                let len = choices.len();
                if len > 0 {
                    field.selected = if forward {
                        (field.selected + 1) % len
                    } else {
                        (field.selected + len - 1) % len
                    };
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn mountains() -> Vec<Mountain> {
        vec![
            Mountain {
                id: Some(1),
                name: Some("Everest".to_string()),
                country: Some("Nepal".to_string()),
                ..Default::default()
            },
            Mountain {
                id: Some(2),
                name: Some("K2".to_string()),
                country: Some("Pakistan".to_string()),
                ..Default::default()
            },
        ]
    }

    #[test]
    fn test_edit_form_is_prefilled() {
        let mountain = Mountain {
            id: Some(5),
            name: Some("Eiger".to_string()),
            height: Some(3967),
            region: Some("Bernese Alps".to_string()),
            ..Default::default()
        };
        let form = Form::edit_mountain(5, &mountain);
        assert_eq!(form.kind, FormKind::EditMountain(5));
        assert_eq!(form.text(NAME), "Eiger");
        assert_eq!(form.number(HEIGHT), 3967);
        assert_eq!(form.mountain_form().region, "Bernese Alps");
        assert_eq!(form.mountain_form().country, "");
    }

    #[test]
    fn test_number_field_accepts_digits_only() {
        let mut form = Form::add_mountain();
        form.focus_next();
        assert_eq!(form.fields[form.focus].label, HEIGHT);

        form.backspace();
        for c in "88x4-9".chars() {
            form.input(c);
        }
        assert_eq!(form.text(HEIGHT), "8849");

        for c in "999".chars() {
            form.input(c);
        }
        assert_eq!(form.text(HEIGHT), "884999");
        assert_eq!(form.number(HEIGHT), MAX_FORM_NUMBER);
    }

    #[test]
    fn test_blank_number_reads_as_zero() {
        let mut form = Form::add_mountain();
        form.focus = 1;
        form.backspace();
        assert_eq!(form.number(HEIGHT), 0);
    }

    #[test]
    fn test_group_form_starts_at_sentinel() {
        let mut form = Form::add_group(&mountains(), today());
        assert_eq!(form.choice_id(MOUNTAIN), NONE_SELECTED);
        assert_eq!(form.text(START), "2025-06-15");

        form.focus = 1;
        assert_eq!(form.fields[form.focus].display(), "Select");
        form.cycle_choice(true);
        assert_eq!(form.fields[form.focus].display(), "Everest (Nepal)");
        assert_eq!(form.choice_id(MOUNTAIN), 1);

        form.cycle_choice(false);
        form.cycle_choice(false);
        assert_eq!(form.choice_id(MOUNTAIN), 2);

        form.input('x');
        assert_eq!(form.choice_id(MOUNTAIN), 2);
    }

    #[test]
    fn test_group_form_mountain_without_id_is_sentinel() {
        let mountains = vec![
            Mountain { name: Some("Unnamed col".to_string()), ..Default::default() },
            Mountain { id: Some(0), name: Some("Zero".to_string()), ..Default::default() },
        ];
        let mut form = Form::add_group(&mountains, today());
        form.focus = 1;
        form.cycle_choice(true);
        assert_eq!(form.fields[form.focus].display(), "Unnamed col (—)");
        assert_eq!(form.choice_id(MOUNTAIN), NONE_SELECTED);
        form.cycle_choice(true);
        assert_eq!(form.choice_id(MOUNTAIN), NONE_SELECTED);
    }

    #[test]
    fn test_date_range_defaults_and_validation() {
        let mut form = Form::date_range(FormKind::ClimberRange, "Climbers by date range", today());
        let range = form.date_range_value().unwrap();
        assert_eq!(range.query(), "start=2025-05-15&end=2025-06-15");

        form.focus = 1;
        form.backspace();
        assert!(form.date_range_value().is_none());

        form.input('7');
        form.input('7');
        assert_eq!(form.text(END), "2025-06-17");
    }

    #[test]
    fn test_focus_wraps() {
        let mut form = Form::date_range(FormKind::AscentRange, "Ascents by date range", today());
        form.focus_prev();
        assert_eq!(form.focus, 1);
        form.focus_next();
        assert_eq!(form.focus, 0);
    }
}
