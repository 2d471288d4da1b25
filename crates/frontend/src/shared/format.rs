//! Display formatting for table cells.

fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `$1,245.00`
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, group_thousands(cents / 100), cents % 100)
}

/// `$250,000`, whole units only.
pub fn format_budget(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}${}", sign, group_thousands(amount.abs().round() as u64))
}

/// Badge modifier for a status label.
pub fn status_badge_class(status: &str) -> &'static str {
    match status.to_lowercase().as_str() {
        "healthy" | "active" | "completed" | "published" | "used" | "in stock" => "badge badge--success",
        "monitoring" | "scheduled" | "planning" | "draft" | "on leave" | "low stock" => "badge badge--warning",
        "under treatment" | "in progress" | "in-progress" => "badge badge--info",
        "critical" | "expired" | "refunded" | "cancelled" | "overdue" | "on hold" | "on-hold"
        | "out of stock" => "badge badge--error",
        _ => "badge",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(45.0), "$45.00");
        assert_eq!(format_money(1245.5), "$1,245.50");
        assert_eq!(format_money(24890.0), "$24,890.00");
        assert_eq!(format_money(0.0), "$0.00");
    }

    #[test]
    fn test_format_budget() {
        assert_eq!(format_budget(250000.0), "$250,000");
        assert_eq!(format_budget(1_500_000.0), "$1,500,000");
        assert_eq!(format_budget(999.0), "$999");
    }

    #[test]
    fn test_status_badge_class() {
        assert_eq!(status_badge_class("Critical"), "badge badge--error");
        assert_eq!(status_badge_class("active"), "badge badge--success");
        assert_eq!(status_badge_class("Low Stock"), "badge badge--warning");
        assert_eq!(status_badge_class("Out of Stock"), "badge badge--error");
        assert_eq!(status_badge_class("unknown"), "badge");
    }
}
