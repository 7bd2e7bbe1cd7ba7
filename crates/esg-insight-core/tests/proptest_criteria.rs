// crates/esg-insight-core/tests/proptest_criteria.rs
// ============================================================================
// Module: Criteria Property-Based Tests
// Description: Property tests for the GRI match predicate.
// Purpose: Check match-all and monotonic narrowing across random inputs.
// ============================================================================

//! Property-based tests for search criteria invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use esg_insight_core::CompanyId;
use esg_insight_core::GriDataItemDto;
use esg_insight_core::GriDataSearchCriteria;
use proptest::prelude::*;

/// Small value pools so criteria and items collide often enough to exercise
/// both match outcomes.
fn code_pool() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("GRI 302".to_string()),
        Just("GRI 305".to_string()),
        Just("GRI 401".to_string()),
    ]
}

fn category_pool() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("E".to_string())),
        Just(Some("S".to_string())),
        Just(Some("G".to_string())),
    ]
}

fn item_strategy() -> impl Strategy<Value = GriDataItemDto> {
    (code_pool(), category_pool(), 1_u64..4, any::<bool>()).prop_map(
        |(standard_code, category, company, titled)| {
            let company_id = CompanyId::from_raw(company).unwrap();
            let mut item = GriDataItemDto::new(standard_code, "302-1", "15000", company_id);
            item.category = category;
            if titled {
                item.disclosure_title = Some("Energy consumption".to_string());
            }
            item
        },
    )
}

fn criteria_strategy() -> impl Strategy<Value = GriDataSearchCriteria> {
    (
        proptest::option::of(code_pool()),
        category_pool(),
        proptest::option::of(1_u64..4),
        proptest::option::of(Just("energy".to_string())),
    )
        .prop_map(|(standard_code, category, company, keyword)| {
            let mut criteria = GriDataSearchCriteria::new();
            criteria.standard_code = standard_code;
            criteria.category = category;
            criteria.company_id = company.and_then(CompanyId::from_raw);
            criteria.keyword = keyword;
            criteria
        })
}

proptest! {
    #[test]
    fn unconstrained_criteria_matches_everything(item in item_strategy()) {
        prop_assert!(GriDataSearchCriteria::new().matches(&item));
    }

    #[test]
    fn adding_a_constraint_never_widens_the_match(
        item in item_strategy(),
        criteria in criteria_strategy(),
        extra_code in code_pool(),
    ) {
        // Narrowing implication: anything the tighter criteria matches, the
        // looser criteria must match as well.
        let mut narrowed = criteria.clone();
        narrowed.standard_code = Some(extra_code);
        let mut loosened = narrowed.clone();
        loosened.standard_code = None;
        if narrowed.matches(&item) {
            prop_assert!(loosened.matches(&item));
        }
        prop_assert!(criteria.matches(&item) || !narrowed.matches(&item) || criteria.standard_code.is_some());
    }

    #[test]
    fn dropping_any_constraint_preserves_a_match(
        item in item_strategy(),
        criteria in criteria_strategy(),
    ) {
        if criteria.matches(&item) {
            let mut without_code = criteria.clone();
            without_code.standard_code = None;
            prop_assert!(without_code.matches(&item));

            let mut without_category = criteria.clone();
            without_category.category = None;
            prop_assert!(without_category.matches(&item));

            let mut without_company = criteria.clone();
            without_company.company_id = None;
            prop_assert!(without_company.matches(&item));

            let mut without_keyword = criteria;
            without_keyword.keyword = None;
            prop_assert!(without_keyword.matches(&item));
        }
    }
}
