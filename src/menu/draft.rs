//! Uncommitted input of the add-item form.

use std::fmt;

use crate::menu::course::Course;
use crate::menu::error::ValidationError;

/// Form fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Name,
    Description,
    Course,
    Price,
}

impl DraftField {
    pub const ALL: [DraftField; 4] = [
        DraftField::Name,
        DraftField::Description,
        DraftField::Course,
        DraftField::Price,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Name => "Dish Name",
            DraftField::Description => "Dish Description",
            DraftField::Course => "Course",
            DraftField::Price => "Price ($)",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Add-item form contents. Price stays as typed until commit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Draft {
    pub name: String,
    pub description: String,
    pub course: Course,
    pub price: String,
}

impl Draft {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        course: Course,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            course,
            price: price.into(),
        }
    }

    /// Text buffer behind a field. `None` for the course picker.
    pub fn field_mut(&mut self, field: DraftField) -> Option<&mut String> {
        match field {
            DraftField::Name => Some(&mut self.name),
            DraftField::Description => Some(&mut self.description),
            DraftField::Price => Some(&mut self.price),
            DraftField::Course => None,
        }
    }

    pub fn field(&self, field: DraftField) -> Option<&str> {
        match field {
            DraftField::Name => Some(&self.name),
            DraftField::Description => Some(&self.description),
            DraftField::Price => Some(&self.price),
            DraftField::Course => None,
        }
    }

    /// Checks presence first, then the price. Returns the parsed price.
    pub fn validate(&self) -> Result<f64, ValidationError> {
        let required = [
            (DraftField::Name, &self.name),
            (DraftField::Description, &self.description),
            (DraftField::Price, &self.price),
        ];
        if let Some((field, _)) = required.iter().find(|(_, text)| text.is_empty()) {
            return Err(ValidationError::MissingField(*field));
        }
        parse_price(&self.price)
    }
}

/// Parses price text into a finite value strictly above zero.
///
/// Leading whitespace is skipped and the longest numeric prefix is used, so
/// `"7 euros"` is 7 and `"12,50"` is 12. Text with no numeric prefix fails.
pub fn parse_price(text: &str) -> Result<f64, ValidationError> {
    let text = text.trim_start();
    let value: f64 = text[..numeric_prefix_len(text)]
        .parse()
        .map_err(|_| ValidationError::InvalidPrice)?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ValidationError::InvalidPrice);
    }
    Ok(value)
}

/// Byte length of the leading `[+-]digits[.digits][e[+-]digits]` run.
/// Zero when there are no mantissa digits.
fn numeric_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let digits_from = |start: usize| {
        bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let int_digits = digits_from(end);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digits_from(end + 1);
        if int_digits + frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits + frac_digits == 0 {
        return 0;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    end
}
