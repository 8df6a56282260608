use crate::models::{CategoryTotal, ExpenseRecord, ExpenseStats};

pub const STATUS_APPROVED: &str = "Approved";
pub const STATUS_REJECTED: &str = "Rejected";
pub const STATUS_MANUAL_REVIEW: &str = "Manual Review";

/// Bucket for records without a category. The workflow service writes its
/// vocabulary in English, so the fallback stays in that vocabulary too.
pub const FALLBACK_CATEGORY: &str = "Other";

/// Pure aggregation over the current expense list. Recomputed in full on
/// every view build; a missing amount counts as 0. Category buckets keep
/// first-seen order.
pub fn aggregate(expenses: &[ExpenseRecord]) -> ExpenseStats {
    let mut stats = ExpenseStats {
        total: 0.0,
        approved: 0,
        rejected: 0,
        pending_review: 0,
        by_category: Vec::new(),
    };

    for expense in expenses {
        let amount = expense.amount.unwrap_or(0.0);
        stats.total += amount;

        match expense.status.as_str() {
            STATUS_APPROVED => stats.approved += 1,
            STATUS_REJECTED => stats.rejected += 1,
            STATUS_MANUAL_REVIEW => stats.pending_review += 1,
            _ => {}
        }

        let category = expense
            .category
            .as_deref()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(FALLBACK_CATEGORY);
        match stats
            .by_category
            .iter_mut()
            .find(|bucket| bucket.category == category)
        {
            Some(bucket) => bucket.amount += amount,
            None => stats.by_category.push(CategoryTotal {
                category: category.to_string(),
                amount,
            }),
        }
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(amount: Option<f64>, status: &str, category: Option<&str>) -> ExpenseRecord {
        ExpenseRecord {
            id: uuid::Uuid::new_v4().to_string(),
            employee_id: "4711".to_string(),
            receipt_url: None,
            merchant: None,
            expense_date: None,
            amount,
            currency: Some("EUR".to_string()),
            category: category.map(String::from),
            status: status.to_string(),
            status_reason: None,
            comment: None,
            created_at: "2026-08-01T10:00:00Z".to_string(),
        }
    }

    #[test]
    fn totals_counts_and_category_buckets() {
        let expenses = vec![
            record(Some(10.0), "Approved", Some("Food")),
            record(Some(5.0), "Rejected", Some("Food")),
            record(Some(7.0), "Manual Review", None),
        ];

        let stats = aggregate(&expenses);
        assert_eq!(stats.total, 22.0);
        assert_eq!(stats.approved, 1);
        assert_eq!(stats.rejected, 1);
        assert_eq!(stats.pending_review, 1);
        assert_eq!(
            stats.by_category,
            vec![
                CategoryTotal {
                    category: "Food".to_string(),
                    amount: 15.0
                },
                CategoryTotal {
                    category: "Other".to_string(),
                    amount: 7.0
                },
            ]
        );
    }

    #[test]
    fn missing_amount_counts_as_zero() {
        let expenses = vec![
            record(None, "Approved", Some("Travel")),
            record(Some(3.5), "Approved", Some("Travel")),
        ];

        let stats = aggregate(&expenses);
        assert_eq!(stats.total, 3.5);
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.by_category[0].amount, 3.5);
    }

    #[test]
    fn unknown_status_is_not_counted() {
        let expenses = vec![record(Some(1.0), "Archived", Some("Food"))];
        let stats = aggregate(&expenses);
        assert_eq!(stats.approved + stats.rejected + stats.pending_review, 0);
        assert_eq!(stats.total, 1.0);
    }

    #[test]
    fn empty_category_falls_back_to_other() {
        let expenses = vec![record(Some(2.0), "Approved", Some("  "))];
        let stats = aggregate(&expenses);
        assert_eq!(stats.by_category[0].category, "Other");
    }

    #[test]
    fn aggregate_is_idempotent_over_the_same_list() {
        let expenses = vec![
            record(Some(10.0), "Approved", Some("Food")),
            record(Some(7.0), "Manual Review", None),
        ];

        let first = aggregate(&expenses);
        let second = aggregate(&expenses);
        assert_eq!(first, second);
    }
}
