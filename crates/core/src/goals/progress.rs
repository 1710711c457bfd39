//! Goal progress calculation.
//!
//! Pure function of `(goal, accounts)`; no I/O and no side effects. Goals
//! are classified from their free-text titles against an explicit ordered
//! rule table, and each category draws a fixed share of the balances of the
//! account types it recognizes. First matching rule wins per goal;
//! categories are independent across goals, so two displayed goals may draw
//! on the same account.

use serde::{Deserialize, Serialize};

use crate::goals::GoalCard;
use crate::portfolio::Account;

/// Category a goal title classifies into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Retirement,
    Home,
    Emergency,
    Education,
    /// No title keyword matched; general wealth building.
    General,
}

/// Derived progress for a single goal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalProgress {
    /// Unbounded sum of matched balances; never negative, not capped to the
    /// target. Callers clamp for display.
    pub current_progress: f64,
    /// True iff at least one account satisfies this goal's account predicate.
    pub is_verified: bool,
}

impl GoalProgress {
    /// Display percentage against a target, clamped to 100.
    pub fn percent_of(&self, target_amount: f64) -> f64 {
        if target_amount <= 0.0 {
            return 0.0;
        }
        (self.current_progress / target_amount * 100.0).min(100.0)
    }
}

/// One row of the classification table: which goal titles select it, which
/// account types count toward it, and what share of each balance counts.
struct CategoryRule {
    category: GoalCategory,
    goal_keywords: &'static [&'static str],
    account_keywords: &'static [&'static str],
    weight: f64,
}

/// Ordered rule table; first match on the goal title wins.
const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: GoalCategory::Retirement,
        goal_keywords: &["retirement", "ira"],
        account_keywords: &["ira", "401", "retirement"],
        weight: 1.0,
    },
    CategoryRule {
        category: GoalCategory::Home,
        goal_keywords: &["home", "down payment", "house"],
        account_keywords: &["savings", "brokerage"],
        weight: 0.3,
    },
    CategoryRule {
        category: GoalCategory::Emergency,
        goal_keywords: &["emergency", "safety"],
        account_keywords: &["savings", "cash"],
        weight: 0.5,
    },
    CategoryRule {
        category: GoalCategory::Education,
        goal_keywords: &["education", "college"],
        account_keywords: &["529", "education"],
        weight: 1.0,
    },
];

/// Fallback when no title keyword matches: draw 20% of every account that is
/// not a retirement vehicle.
const GENERAL_RULE: CategoryRule = CategoryRule {
    category: GoalCategory::General,
    goal_keywords: &[],
    account_keywords: &[],
    weight: 0.2,
};

fn classify(title: &str) -> &'static CategoryRule {
    let title = title.to_lowercase();
    CATEGORY_RULES
        .iter()
        .find(|rule| rule.goal_keywords.iter().any(|kw| title.contains(kw)))
        .unwrap_or(&GENERAL_RULE)
}

fn account_matches(rule: &CategoryRule, account_type: &str) -> bool {
    let account_type = account_type.to_lowercase();
    match rule.category {
        GoalCategory::General => {
            !account_type.contains("ira") && !account_type.contains("401")
        }
        _ => rule
            .account_keywords
            .iter()
            .any(|kw| account_type.contains(kw)),
    }
}

/// Returns the category a goal classifies into.
pub fn goal_category(goal: &GoalCard) -> GoalCategory {
    classify(&goal.title).category
}

/// Computes progress and verification for one goal against the supplied
/// accounts.
///
/// With no accounts the result is `(0, false)` for every goal. For the
/// general category, verification only requires that any account exists.
pub fn calculate_progress(goal: &GoalCard, accounts: &[Account]) -> GoalProgress {
    if accounts.is_empty() {
        return GoalProgress {
            current_progress: 0.0,
            is_verified: false,
        };
    }

    let rule = classify(&goal.title);

    let current_progress: f64 = accounts
        .iter()
        .filter(|account| account_matches(rule, &account.account_type))
        .map(|account| account.total_balance.max(0.0) * rule.weight)
        .sum();

    let is_verified = match rule.category {
        GoalCategory::General => true,
        _ => accounts
            .iter()
            .any(|account| account_matches(rule, &account.account_type)),
    };

    GoalProgress {
        current_progress,
        is_verified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profiles::Focus;

    fn goal(title: &str) -> GoalCard {
        GoalCard {
            title: title.to_string(),
            target_amount: 100_000.0,
            timeline: "5 Years".to_string(),
            description: String::new(),
            goal_type: Focus::Home,
        }
    }

    fn account(account_type: &str, balance: f64) -> Account {
        Account {
            id: "1".to_string(),
            account_type: account_type.to_string(),
            total_balance: balance,
            asset_classes: Vec::new(),
            extracted_at: None,
            document_name: None,
        }
    }

    fn sample_accounts() -> Vec<Account> {
        vec![
            account("Traditional IRA", 50_000.0),
            account("Savings", 20_000.0),
        ]
    }

    #[test]
    fn test_retirement_goal_sums_full_retirement_balances() {
        let result = calculate_progress(&goal("Retirement Savings"), &sample_accounts());
        assert_eq!(result.current_progress, 50_000.0);
        assert!(result.is_verified);
    }

    #[test]
    fn test_home_goal_takes_thirty_percent_of_savings() {
        let result = calculate_progress(&goal("Home Down Payment"), &sample_accounts());
        assert_eq!(result.current_progress, 6_000.0);
        assert!(result.is_verified);
    }

    #[test]
    fn test_education_goal_with_no_matching_accounts() {
        let result = calculate_progress(&goal("Education Fund"), &sample_accounts());
        assert_eq!(result.current_progress, 0.0);
        assert!(!result.is_verified);
    }

    #[test]
    fn test_emergency_goal_takes_half_of_savings_and_cash() {
        let accounts = vec![
            account("High-Yield Savings Account", 12_000.0),
            account("Cash Management", 8_000.0),
            account("401(k)", 90_000.0),
        ];
        let result = calculate_progress(&goal("Emergency Fund"), &accounts);
        assert_eq!(result.current_progress, 10_000.0);
        assert!(result.is_verified);
    }

    #[test]
    fn test_general_goal_skips_retirement_vehicles() {
        let accounts = vec![
            account("Roth IRA", 40_000.0),
            account("401(k)", 60_000.0),
            account("Brokerage Account", 25_000.0),
        ];
        let result = calculate_progress(&goal("World Travel"), &accounts);
        assert_eq!(result.current_progress, 5_000.0);
        // Any account at all verifies a general goal.
        assert!(result.is_verified);
    }

    #[test]
    fn test_empty_accounts_yield_zero_unverified() {
        for title in ["Retirement Savings", "Home Down Payment", "Anything"] {
            let result = calculate_progress(&goal(title), &[]);
            assert_eq!(result.current_progress, 0.0);
            assert!(!result.is_verified);
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let accounts = vec![account("ROTH IRA", 10_000.0)];
        let result = calculate_progress(&goal("retirement savings"), &accounts);
        assert_eq!(result.current_progress, 10_000.0);
    }

    #[test]
    fn test_first_matching_rule_wins() {
        // "home" appears before the education rule; a title matching both
        // classifies as home.
        let g = goal("Home and College Fund");
        assert_eq!(goal_category(&g), GoalCategory::Home);
    }

    #[test]
    fn test_calculator_is_pure() {
        let accounts = sample_accounts();
        let g = goal("Retirement Savings");
        let first = calculate_progress(&g, &accounts);
        let second = calculate_progress(&g, &accounts);
        assert_eq!(first, second);
    }

    #[test]
    fn test_percent_of_clamps_at_hundred() {
        let progress = GoalProgress {
            current_progress: 150_000.0,
            is_verified: true,
        };
        assert_eq!(progress.percent_of(100_000.0), 100.0);
        assert_eq!(progress.percent_of(300_000.0), 50.0);
        assert_eq!(progress.percent_of(0.0), 0.0);
    }
}
