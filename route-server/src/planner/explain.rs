//! Human-readable justification for a recommendation.

use crate::domain::{Preference, Route};

/// Format a duration in minutes, e.g. "2h 30m", "16h", "45m".
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        format!("{mins}m")
    } else if mins == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {mins}m")
    }
}

/// Format a rupee amount with Indian digit grouping, e.g. "₹1,00,000".
///
/// The last three digits form one group; higher digits are grouped in pairs.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{digits}");
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

/// Explain why `best` was chosen for `preference`.
///
/// `runner_up` is the next-ranked route, used to quantify the advantage.
pub fn justify(best: &Route, runner_up: Option<&Route>, preference: Preference) -> String {
    match preference {
        Preference::TimeEfficiency => {
            let mut text = format!(
                "It's the fastest option at only {}",
                format_duration(best.duration_minutes())
            );
            if let Some(next) = runner_up {
                let saved = next
                    .duration_minutes()
                    .saturating_sub(best.duration_minutes());
                if saved > 0 {
                    text.push_str(&format!(
                        ", saving {} compared to the next fastest option ({})",
                        format_duration(saved),
                        next.mode()
                    ));
                }
            }
            text
        }
        Preference::CostSavings => {
            let mut text = format!(
                "It's the most economical option at only {}",
                format_inr(best.cost_inr())
            );
            if let Some(next) = runner_up {
                let saved = next.cost_inr().saturating_sub(best.cost_inr());
                if saved > 0 {
                    text.push_str(&format!(
                        ", saving {} compared to the next cheapest option ({})",
                        format_inr(saved),
                        next.mode()
                    ));
                }
            }
            text
        }
        Preference::Comfort => {
            let mut text = format!(
                "It offers the highest comfort rating ({})",
                best.comfort()
            );
            if runner_up.is_some_and(|next| next.comfort() == best.comfort()) {
                text.push_str(", and beats equally comfortable options on price or journey time");
            }
            let description = best.details().description.as_deref().map(str::trim);
            if let Some(description) = description.filter(|d| !d.is_empty()) {
                text.push_str(". ");
                text.push_str(description);
            }
            text
        }
    }
}
