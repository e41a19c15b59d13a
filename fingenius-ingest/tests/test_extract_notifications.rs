use fingenius_core::UNKNOWN;
use fingenius_ingest::extract;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// A realistic paste from a phone: mixed banks, blank lines, OTPs and promos.
const INBOX: &str = "
Rs. 500 at Zomato on 20/07/2023
Your OTP for login is 482913. Do not share it.

INR 1,299.00 debited for Netflix Subscription on 01/08/2023 Ref 77123
250.00 INR spent at SuperMart on Aug 5, 2023
Rs 180 Uber trip on 03/08/2023
Get 20% cashback on your next order!
Rs.2000 withdrawn at ATM

Rs 349 recharge successful on 28/07/2023
";

#[test]
fn test_no_currency_token_yields_empty_summary() {
    for text in ["", "\n\n  \n", "hello world", "paid 500 at Zomato on 20/07/2023"] {
        let summary = extract(text);
        assert!(summary.records.is_empty(), "expected no records for {text:?}");
        assert_eq!(summary.total, Decimal::ZERO);
    }
}

#[test]
fn test_zomato_line() {
    let summary = extract("Rs. 500 at Zomato on 20/07/2023");
    assert_eq!(summary.records.len(), 1);
    let r = &summary.records[0];
    assert_eq!(r.amount, dec("500"));
    assert_eq!(r.merchant, "Zomato");
    assert_eq!(r.date, "20/07/2023");
    assert_eq!(r.raw_text, "Rs. 500 at Zomato on 20/07/2023");
}

#[test]
fn test_spent_at_fallback_line() {
    let summary = extract("250.00 INR spent at SuperMart on Aug 5, 2023");
    assert_eq!(summary.records.len(), 1);
    let r = &summary.records[0];
    assert_eq!(r.amount, dec("250.00"));
    assert_eq!(r.merchant, "SuperMart");
    assert_eq!(r.date, "Aug 5, 2023");
}

#[test]
fn test_total_is_exact_sum() {
    let summary = extract(INBOX);
    let sum: Decimal = summary.records.iter().map(|r| r.amount).sum();
    assert_eq!(summary.total, sum);
    assert_eq!(summary.total, dec("4578.00"));
}

#[test]
fn test_small_decimals_do_not_drift() {
    let text = "Rs 0.10 at shop\nRs 0.20 at shop\nRs 0.30 at shop";
    assert_eq!(extract(text).total, dec("0.60"));
}

#[test]
fn test_idempotent() {
    assert_eq!(extract(INBOX), extract(INBOX));
}

#[test]
fn test_descending_date_order() {
    let summary = extract("Rs 10 on 01/01/2023\nRs 20 on 01/06/2023");
    assert_eq!(summary.records[0].date, "01/06/2023");
    assert_eq!(summary.records[1].date, "01/01/2023");
}

#[test]
fn test_inbox_ordering_and_labels() {
    let summary = extract(INBOX);
    let got: Vec<(&str, &str)> = summary
        .records
        .iter()
        .map(|r| (r.merchant.as_str(), r.date.as_str()))
        .collect();

    assert_eq!(
        got,
        vec![
            ("SuperMart", "Aug 5, 2023"),
            ("Transport", "03/08/2023"),
            ("Netflix Subscription", "01/08/2023"),
            ("Utilities/Bills", "28/07/2023"),
            ("Zomato", "20/07/2023"),
            ("Cash Withdrawal", UNKNOWN),
        ]
    );
}

#[test]
fn test_blank_and_whitespace_lines_ignored() {
    let summary = extract("\n   \n\t\nRs 42 at Swiggy\n \n");
    assert_eq!(summary.records.len(), 1);
    assert_eq!(summary.records[0].merchant, "Swiggy");
    assert_eq!(summary.records[0].date, UNKNOWN);
}

#[test]
fn test_crlf_lines_are_trimmed() {
    let summary = extract("Rs 42 at Swiggy\r\nRs 8 at Zomato\r\n");
    assert_eq!(summary.records.len(), 2);
    assert!(summary.records.iter().all(|r| !r.raw_text.ends_with('\r')));
}

#[test]
fn test_unknown_dates_keep_input_order_at_the_end() {
    let summary = extract("Rs 1 at Zomato\nRs 2 at Swiggy on 01/01/2020\nRs 3 at Uber");
    let amounts: Vec<Decimal> = summary.records.iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![dec("2"), dec("1"), dec("3")]);
}

#[test]
fn test_total_overflow_drops_the_offending_line() {
    let text = "Rs 50000000000000000000000000000 at Zomato\n\
                Rs 50000000000000000000000000000 at Swiggy\n\
                Rs 20 at Uber";
    let summary = extract(text);

    let merchants: Vec<&str> = summary.records.iter().map(|r| r.merchant.as_str()).collect();
    assert_eq!(merchants, vec!["Zomato", "Transport"]);
    assert_eq!(summary.total, dec("50000000000000000000000000020"));
}
