use alloc::vec::Vec;

use crate::Document;

/// Outcome of validating a form's required fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Validation<N> {
    /// Required fields that are empty after trimming, in document order.
    pub invalid: Vec<N>,
    pub checked: usize,
}

impl<N> Validation<N> {
    pub fn is_valid(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Checks every required `input` / `textarea` inside `form`.
///
/// Empty fields get `error_class`; filled ones lose it. Every field is visited.
pub fn validate_form<D: Document>(
    doc: &mut D,
    form: D::Node,
    error_class: &str,
) -> Validation<D::Node> {
    let mut invalid = Vec::new();
    let mut checked = 0;
    for field in doc.descendants_with_attribute(form, "required") {
        let tag = doc.tag_name(field);
        if !tag.eq_ignore_ascii_case("input") && !tag.eq_ignore_ascii_case("textarea") {
            continue;
        }
        checked += 1;
        if doc.value(field).trim().is_empty() {
            doc.add_class(field, error_class);
            invalid.push(field);
        } else {
            doc.remove_class(field, error_class);
        }
    }
    fdebug!(checked, invalid = invalid.len(), "validate_form");
    Validation { invalid, checked }
}
