//! In-memory state of an order being composed.
//!
//! The draft owns the ordered line-item list and all derived totals.
//! Mutations run inside the form's reactive `update`, so every edit
//! deterministically recomputes the displayed subtotals and total.

use contracts::domain::order::{OrderCreate, OrderItemCreate};

use crate::shared::format::format_amount;

/// Numeric input carried as an explicit tri-state instead of a float
/// that silently coerces bad input to 0.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumberField {
    /// Initial state, or the input was cleared.
    #[default]
    Unset,
    /// Unparseable input; the raw text is kept so the input keeps
    /// echoing what the user typed.
    Invalid(String),
    Value(f64),
}

impl NumberField {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return NumberField::Unset;
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => NumberField::Value(value),
            _ => NumberField::Invalid(raw.to_string()),
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            NumberField::Value(value) => Some(*value),
            _ => None,
        }
    }

    /// Text to echo back into the bound input.
    pub fn text(&self) -> String {
        match self {
            NumberField::Unset => String::new(),
            NumberField::Invalid(raw) => raw.clone(),
            NumberField::Value(value) => value.to_string(),
        }
    }
}

/// One line of the draft.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItemDraft {
    pub name: String,
    pub unit_price: NumberField,
    pub quantity: i64,
}

impl Default for LineItemDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            unit_price: NumberField::Unset,
            quantity: 1,
        }
    }
}

impl LineItemDraft {
    /// Per-line subtotal, `None` while the price is unset or invalid so
    /// the view suppresses the display instead of showing 0.
    pub fn subtotal(&self) -> Option<f64> {
        self.unit_price
            .value()
            .map(|price| price * self.quantity as f64)
    }
}

/// The not-yet-persisted order being composed; owned by the form view
/// and discarded on navigation away.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    pub customer_id: Option<i64>,
    pub items: Vec<LineItemDraft>,
}

impl Default for OrderDraft {
    fn default() -> Self {
        Self {
            customer_id: None,
            items: vec![LineItemDraft::default()],
        }
    }
}

impl OrderDraft {
    /// Append a blank line item. No upper bound on the item count.
    pub fn add_item(&mut self) {
        self.items.push(LineItemDraft::default());
    }

    /// Remove the item at `index`. Removing the last remaining item or
    /// passing an out-of-range index is a silent no-op; the draft never
    /// holds fewer than one line.
    pub fn remove_item(&mut self, index: usize) {
        if self.items.len() > 1 && index < self.items.len() {
            self.items.remove(index);
        }
    }

    pub fn set_item_name(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.name = raw.to_string();
        }
    }

    pub fn set_item_price(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.unit_price = NumberField::parse(raw);
        }
    }

    /// Quantity falls back to 1 on unparseable or non-positive input;
    /// 1 is the minimum valid quantity, so a transient empty or zeroed
    /// field never shows a zero subtotal.
    pub fn set_item_quantity(&mut self, index: usize, raw: &str) {
        if let Some(item) = self.items.get_mut(index) {
            item.quantity = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|quantity| *quantity >= 1)
                .unwrap_or(1);
        }
    }

    /// Running total over all lines. A line with an unset or invalid
    /// price contributes 0 instead of suppressing the aggregate.
    pub fn total(&self) -> f64 {
        self.items
            .iter()
            .map(|item| item.subtotal().unwrap_or(0.0))
            .sum()
    }

    /// Running total formatted with exactly two decimal places.
    pub fn total_text(&self) -> String {
        format_amount(self.total())
    }

    /// Validate the draft and build the `POST /orders/` payload.
    ///
    /// The inputs are marked `required` in the form, but the guard here
    /// is what actually keeps an incomplete draft off the network.
    pub fn to_request(&self) -> Result<OrderCreate, String> {
        let customer_id = self
            .customer_id
            .ok_or_else(|| "Select a customer before submitting".to_string())?;

        let mut items = Vec::with_capacity(self.items.len());
        for (index, item) in self.items.iter().enumerate() {
            let line = index + 1;
            if item.name.trim().is_empty() {
                return Err(format!("Item #{} is missing a name", line));
            }
            let unit_price = item
                .unit_price
                .value()
                .ok_or_else(|| format!("Item #{} is missing a valid unit price", line))?;
            if unit_price < 0.0 {
                return Err(format!("Item #{} has a negative unit price", line));
            }
            if item.quantity < 1 {
                return Err(format!("Item #{} needs a quantity of at least 1", line));
            }
            items.push(OrderItemCreate {
                item_name: item.name.clone(),
                unit_price,
                quantity: item.quantity,
            });
        }

        Ok(OrderCreate { customer_id, items })
    }

    /// Back to the initial state: one blank item, no customer selected.
    pub fn reset(&mut self) {
        *self = OrderDraft::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: &str, quantity: &str) -> LineItemDraft {
        LineItemDraft {
            name: name.to_string(),
            unit_price: NumberField::parse(price),
            quantity: quantity.trim().parse().unwrap_or(1),
        }
    }

    #[test]
    fn new_draft_has_one_blank_item() {
        let draft = OrderDraft::default();
        assert_eq!(draft.customer_id, None);
        assert_eq!(draft.items.len(), 1);
        assert_eq!(draft.items[0], LineItemDraft::default());
    }

    #[test]
    fn removing_the_last_item_is_a_no_op() {
        let mut draft = OrderDraft::default();
        draft.set_item_name(0, "Widget");
        let before = draft.items.clone();
        draft.remove_item(0);
        assert_eq!(draft.items, before);
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut draft = OrderDraft::default();
        draft.set_item_name(0, "a");
        for name in ["b", "c", "d"] {
            draft.add_item();
            let last = draft.items.len() - 1;
            draft.set_item_name(last, name);
        }
        draft.remove_item(1);
        let names: Vec<&str> = draft.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn out_of_range_removal_is_ignored() {
        let mut draft = OrderDraft::default();
        draft.add_item();
        draft.remove_item(5);
        assert_eq!(draft.items.len(), 2);
    }

    #[test]
    fn price_parse_failure_becomes_invalid_not_zero() {
        let mut draft = OrderDraft::default();
        draft.set_item_price(0, "abc");
        assert_eq!(draft.items[0].unit_price, NumberField::Invalid("abc".to_string()));
        assert_eq!(draft.items[0].subtotal(), None);

        draft.set_item_price(0, "");
        assert_eq!(draft.items[0].unit_price, NumberField::Unset);
    }

    #[test]
    fn quantity_parse_failure_falls_back_to_one() {
        let mut draft = OrderDraft::default();
        draft.set_item_quantity(0, "three");
        assert_eq!(draft.items[0].quantity, 1);
        draft.set_item_quantity(0, "4");
        assert_eq!(draft.items[0].quantity, 4);
    }

    #[test]
    fn non_positive_quantity_falls_back_to_one() {
        let mut draft = OrderDraft::default();
        draft.set_item_price(0, "5");
        draft.set_item_quantity(0, "0");
        assert_eq!(draft.items[0].quantity, 1);
        assert_eq!(draft.items[0].subtotal(), Some(5.0));

        draft.set_item_quantity(0, "-2");
        assert_eq!(draft.items[0].quantity, 1);
    }

    #[test]
    fn editing_one_line_does_not_touch_others() {
        let mut draft = OrderDraft::default();
        draft.items = vec![item("Widget", "9.99", "2"), item("Gadget", "5", "3")];
        draft.set_item_price(1, "garbage");
        assert_eq!(draft.items[0].subtotal(), Some(19.98));
        assert_eq!(draft.items[1].subtotal(), None);
    }

    #[test]
    fn total_treats_invalid_price_as_zero_contribution() {
        let mut draft = OrderDraft::default();
        draft.items = vec![item("First", "5", "3"), item("Second", "", "1")];
        assert_eq!(draft.items[0].subtotal(), Some(15.0));
        assert_eq!(draft.items[1].subtotal(), None);
        assert_eq!(draft.total_text(), "15.00");
    }

    #[test]
    fn total_is_formatted_with_two_decimals() {
        let mut draft = OrderDraft::default();
        draft.items = vec![item("Widget", "9.99", "2")];
        assert_eq!(draft.total_text(), "19.98");

        draft.items = vec![item("Widget", "", "1")];
        assert_eq!(draft.total_text(), "0.00");
    }

    #[test]
    fn request_payload_preserves_values_and_order() {
        let mut draft = OrderDraft::default();
        draft.customer_id = Some(3);
        draft.items = vec![item("Widget", "9.99", "2")];

        let request = draft.to_request().unwrap();
        assert_eq!(request.customer_id, 3);
        assert_eq!(request.items.len(), 1);
        assert_eq!(request.items[0].item_name, "Widget");
        assert_eq!(request.items[0].unit_price, 9.99);
        assert_eq!(request.items[0].quantity, 2);
        assert_eq!(draft.total_text(), "19.98");
    }

    #[test]
    fn submission_requires_a_customer() {
        let mut draft = OrderDraft::default();
        draft.items = vec![item("Widget", "9.99", "2")];
        assert!(draft.to_request().is_err());
    }

    #[test]
    fn submission_rejects_incomplete_items() {
        let mut draft = OrderDraft::default();
        draft.customer_id = Some(1);

        draft.items = vec![item("", "2.50", "1")];
        assert!(draft.to_request().unwrap_err().contains("name"));

        draft.items = vec![item("Widget", "oops", "1")];
        assert!(draft.to_request().unwrap_err().contains("unit price"));

        draft.items = vec![item("Widget", "-1", "1")];
        assert!(draft.to_request().unwrap_err().contains("negative"));

        let mut zero_quantity = item("Widget", "2.50", "1");
        zero_quantity.quantity = 0;
        draft.items = vec![zero_quantity];
        assert!(draft.to_request().unwrap_err().contains("quantity"));
    }

    #[test]
    fn reset_restores_the_initial_state() {
        let mut draft = OrderDraft::default();
        draft.customer_id = Some(3);
        draft.add_item();
        draft.set_item_name(0, "Widget");
        draft.reset();
        assert_eq!(draft, OrderDraft::default());
    }

    #[test]
    fn number_field_echoes_raw_text() {
        assert_eq!(NumberField::parse("9.99").text(), "9.99");
        assert_eq!(NumberField::parse("abc").text(), "abc");
        assert_eq!(NumberField::parse("  ").text(), "");
        assert_eq!(NumberField::parse("NaN"), NumberField::Invalid("NaN".to_string()));
    }
}
