use super::*;

#[test]
fn only_closed_and_over_cap_are_capacity_rejections() {
    assert!(ClientError::Rejected(RejectReason::Closed).is_capacity_rejection());
    assert!(ClientError::Rejected(RejectReason::OverCap).is_capacity_rejection());
    assert!(!ClientError::Rejected(RejectReason::Unspecified).is_capacity_rejection());
    assert!(
        !ClientError::Rejected(RejectReason::Other("duplicate".into())).is_capacity_rejection()
    );
    assert!(!ClientError::Timeout.is_capacity_rejection());
    assert!(!ClientError::NotConfigured.is_capacity_rejection());
}

#[test]
fn rejection_message_names_the_reason() {
    let err = ClientError::Rejected(RejectReason::OverCap);
    assert_eq!(
        err.to_string(),
        "RSVP endpoint rejected the submission: over_cap"
    );
}
