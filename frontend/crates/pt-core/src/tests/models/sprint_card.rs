use crate::SprintCard;
use crate::tests::date;

#[test]
fn test_parse_end_date_iso() {
    let card = SprintCard::new("1", "2025-01-20");
    assert_eq!(card.parse_end_date().unwrap(), date("2025-01-20"));
}

#[test]
fn test_parse_end_date_rendered_formats() {
    for raw in [
        "January 20, 2025",
        "Jan. 20, 2025",
        "Jan 20, 2025",
        "2025-01-20 00:00:00",
        "2025-01-20T09:30:00",
        "2025-01-20T00:00:00+00:00",
    ] {
        let card = SprintCard::new("1", raw);
        assert_eq!(card.parse_end_date().unwrap(), date("2025-01-20"), "{raw}");
    }
}

#[test]
fn test_parse_end_date_garbage_is_error() {
    let card = SprintCard::new("1", "next tuesday");
    let err = card.parse_end_date().unwrap_err();
    assert!(err.to_string().contains("next tuesday"));
}
