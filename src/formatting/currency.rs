//! Rupee formatting with Indian digit grouping (`12,34,567`) and the
//! lakh / crore shorthand used in savings summaries.

pub const RUPEE: &str = "₹";

const LAKH: f64 = 100_000.0;
const CRORE: f64 = 10_000_000.0;

/// Group an integer the Indian way: the last three digits, then pairs.
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, pair) = rest.split_at(rest.len() - 2);
        groups.push(pair);
        rest = front;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

/// Format an amount in whole rupees, e.g. `₹5,00,000`.
pub fn format_inr(amount: f64) -> String {
    let rounded = amount.abs().round();
    let sign = if amount < 0.0 && rounded > 0.0 { "-" } else { "" };
    format!("{}{}{}", sign, RUPEE, group_indian(rounded as u64))
}

/// Format a count (hours, people) with Indian grouping and no symbol.
pub fn format_count(value: f64) -> String {
    group_indian(value.abs().round() as u64)
}

/// Compact form for large amounts: crores (`₹1.2Cr`), lakhs (`₹3.3L`),
/// otherwise the full grouped amount.
pub fn format_compact_inr(amount: f64) -> String {
    if amount >= CRORE {
        format!("{}{:.1}Cr", RUPEE, amount / CRORE)
    } else if amount >= LAKH {
        format!("{}{:.1}L", RUPEE, amount / LAKH)
    } else {
        format_inr(amount)
    }
}

/// Whether the exact amount is worth printing next to the compact one.
pub fn needs_exact_amount(amount: f64) -> bool {
    amount >= LAKH
}
