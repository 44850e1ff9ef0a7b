use quickhire::domain::GigStatus;

#[test]
fn given_lifecycle_edges_when_checking_transitions_then_only_forward_steps_allowed() {
    assert!(GigStatus::Posted.can_transition_to(GigStatus::Dispatching));
    assert!(GigStatus::Dispatching.can_transition_to(GigStatus::Matched));
    assert!(GigStatus::Dispatching.can_transition_to(GigStatus::PartiallyMatched));
    assert!(GigStatus::PartiallyMatched.can_transition_to(GigStatus::Matched));
    assert!(GigStatus::Matched.can_transition_to(GigStatus::OnRoute));
    assert!(GigStatus::Complete.can_transition_to(GigStatus::Paid));
    assert!(GigStatus::Paid.can_transition_to(GigStatus::Closed));

    assert!(!GigStatus::Posted.can_transition_to(GigStatus::Matched));
    assert!(!GigStatus::Arrived.can_transition_to(GigStatus::OnRoute));
    assert!(!GigStatus::Paid.can_transition_to(GigStatus::Complete));
}

#[test]
fn given_closed_gig_when_listing_successors_then_none_exist() {
    assert!(GigStatus::Closed.successors().is_empty());
}

#[test]
fn given_any_status_when_transitioning_to_itself_then_rejected() {
    for status in GigStatus::ALL {
        assert!(!status.can_transition_to(status), "{status} -> {status}");
    }
}

#[test]
fn given_requestable_edges_when_checking_then_only_field_updates_allowed() {
    assert!(GigStatus::OnRoute.can_request(GigStatus::Arrived));
    assert!(GigStatus::Arrived.can_request(GigStatus::InProgress));
    assert!(GigStatus::InProgress.can_request(GigStatus::Complete));

    assert!(!GigStatus::Complete.can_request(GigStatus::Paid));
    assert!(!GigStatus::Paid.can_request(GigStatus::Closed));
    assert!(!GigStatus::Dispatching.can_request(GigStatus::Matched));
    assert!(!GigStatus::Posted.can_request(GigStatus::Dispatching));
}

#[test]
fn given_every_requestable_edge_when_checking_table_then_it_is_a_lifecycle_edge() {
    for status in GigStatus::ALL {
        for next in status.requestable_successors() {
            assert!(status.can_transition_to(*next), "{status} -> {next}");
        }
    }
}

#[test]
fn given_status_names_when_parsing_then_case_insensitive() {
    assert_eq!("OnRoute".parse::<GigStatus>(), Ok(GigStatus::OnRoute));
    assert_eq!("inprogress".parse::<GigStatus>(), Ok(GigStatus::InProgress));
    assert_eq!("PAID".parse::<GigStatus>(), Ok(GigStatus::Paid));
    assert!("Finished".parse::<GigStatus>().is_err());
}

#[test]
fn given_every_status_when_round_tripping_name_then_matches() {
    for status in GigStatus::ALL {
        assert_eq!(status.to_string().parse::<GigStatus>(), Ok(status));
    }
}

#[test]
fn given_status_groups_when_classifying_then_predicates_agree() {
    assert!(GigStatus::Dispatching.is_open());
    assert!(GigStatus::PartiallyMatched.is_open());
    assert!(!GigStatus::Matched.is_open());

    assert!(GigStatus::OnRoute.is_active());
    assert!(GigStatus::InProgress.is_active());
    assert!(!GigStatus::Complete.is_active());

    assert!(GigStatus::Paid.is_rateable());
    assert!(GigStatus::Closed.is_rateable());
    assert!(!GigStatus::Complete.is_rateable());
}

#[test]
fn given_status_when_serialized_then_uses_canonical_name() {
    let json = serde_json::to_string(&GigStatus::PartiallyMatched).unwrap();
    assert_eq!(json, "\"PartiallyMatched\"");
}
