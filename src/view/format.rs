//! Text formatting helpers for card content.

/// Format an amount with comma thousands separators.
///
/// # Arguments
/// * `amount` - Non-negative amount
///
/// # Returns
/// * `String` - Grouped amount (e.g., "1,250,000")
pub fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Reward badge text, e.g. "Reward: 50,000 ₽".
pub fn reward_label(amount: u64) -> String {
    format!("Reward: {} ₽", group_thousands(amount))
}

/// Card subtitle, e.g. "34 yrs • Case #001".
pub fn case_subtitle(age: u32, id: &str) -> String {
    format!("{} yrs • Case #{}", age, id)
}

/// Toolbar count badge, e.g. "Found: 3 cases".
pub fn found_label(count: usize) -> String {
    format!("Found: {} cases", count)
}
