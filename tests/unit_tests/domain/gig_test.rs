use chrono::Utc;
use quickhire::domain::{
    AssignmentId, GeoPoint, Gig, GigDraft, GigRuleError, GigStatus, GigType, Location, Staffing,
    StaffingRequest, Urgency, UserId,
};

fn draft(staffing: StaffingRequest) -> GigDraft {
    GigDraft {
        client_id: UserId::new(),
        category: "Plumber".to_string(),
        description: Some("Leaking kitchen sink".to_string()),
        location: Location {
            coordinates: GeoPoint::new(40.7128, -74.0060),
            address: "1 Main St".to_string(),
        },
        radius_miles: 10.0,
        urgency: Urgency::Asap,
        budget: None,
        staffing,
    }
}

fn dispatching(staffing: StaffingRequest) -> Gig {
    let mut gig = Gig::post(draft(staffing));
    gig.advance(GigStatus::Dispatching, Utc::now()).unwrap();
    gig
}

fn crew(workers_needed: u32) -> StaffingRequest {
    StaffingRequest::Multiple {
        workers_needed,
        pay_per_person: 50.0,
    }
}

#[test]
fn given_single_draft_without_budget_when_posting_then_budget_is_base_quote() {
    let gig = Gig::post(draft(StaffingRequest::Single));

    assert_eq!(gig.status, GigStatus::Posted);
    assert_eq!(gig.gig_type(), GigType::Single);
    assert_eq!(gig.budget, 156.0);
    assert_eq!(gig.payable_amount(), 156.0);
}

#[test]
fn given_single_draft_with_budget_when_posting_then_budget_kept() {
    let mut request = draft(StaffingRequest::Single);
    request.budget = Some(99.999);

    let gig = Gig::post(request);

    assert_eq!(gig.budget, 100.0);
}

#[test]
fn given_multiple_draft_when_posting_then_total_is_pay_times_workers() {
    let gig = Gig::post(draft(crew(3)));

    assert_eq!(gig.gig_type(), GigType::Multiple);
    assert_eq!(gig.workers_needed(), 3);
    assert_eq!(gig.workers_hired(), 0);
    assert_eq!(gig.payable_amount(), 150.0);
}

#[test]
fn given_invalid_drafts_when_validating_then_rejected() {
    let mut blank_category = draft(StaffingRequest::Single);
    blank_category.category = "  ".to_string();
    assert!(blank_category.validate().is_err());

    let mut bad_coordinates = draft(StaffingRequest::Single);
    bad_coordinates.location.coordinates = GeoPoint::new(91.0, 0.0);
    assert!(bad_coordinates.validate().is_err());

    let mut negative_budget = draft(StaffingRequest::Single);
    negative_budget.budget = Some(-1.0);
    assert!(negative_budget.validate().is_err());

    assert!(draft(crew(0)).validate().is_err());
    assert!(draft(crew(2)).validate().is_ok());
}

#[test]
fn given_posted_gig_when_skipping_ahead_then_invalid_transition() {
    let mut gig = Gig::post(draft(StaffingRequest::Single));

    let result = gig.advance(GigStatus::InProgress, Utc::now());

    assert_eq!(
        result,
        Err(GigRuleError::InvalidTransition {
            from: GigStatus::Posted,
            to: GigStatus::InProgress,
        })
    );
    assert_eq!(gig.status, GigStatus::Posted);
}

#[test]
fn given_advance_when_applied_then_timeline_stamped() {
    let mut gig = Gig::post(draft(StaffingRequest::Single));
    let at = Utc::now();

    gig.advance(GigStatus::Dispatching, at).unwrap();

    assert_eq!(gig.timeline.dispatched_at, Some(at));
    assert_eq!(gig.updated_at, at);
}

#[test]
fn given_rejected_advance_when_applied_then_version_unchanged() {
    let mut gig = Gig::post(draft(StaffingRequest::Single));

    gig.advance(GigStatus::Closed, Utc::now()).unwrap_err();

    assert_eq!(gig.version, 0);
}

#[test]
fn given_partially_matched_crew_when_hiring_without_status_change_then_version_bumped() {
    let mut gig = dispatching(crew(3));
    gig.accept_worker(UserId::new(), AssignmentId::new(), Utc::now())
        .unwrap();
    let before = gig.revision();
    let at = Utc::now();

    gig.accept_worker(UserId::new(), AssignmentId::new(), at)
        .unwrap();

    assert_eq!(gig.status, before.status);
    assert_eq!(gig.version, before.version + 1);
    assert_eq!(gig.updated_at, at);
    assert_ne!(gig.revision(), before);
}

#[test]
fn given_dispatching_single_gig_when_worker_accepts_then_goes_on_route() {
    let mut gig = dispatching(StaffingRequest::Single);
    let worker = UserId::new();
    let assignment = AssignmentId::new();

    gig.accept_worker(worker, assignment, Utc::now()).unwrap();

    assert_eq!(gig.status, GigStatus::OnRoute);
    assert!(gig.timeline.matched_at.is_some());
    assert!(gig.timeline.on_route_at.is_some());
    assert!(gig.has_worker(worker));
    assert_eq!(
        gig.staffing,
        Staffing::Single {
            assigned_worker_id: Some(worker),
            assignment_id: Some(assignment),
        }
    );
}

#[test]
fn given_single_gig_already_taken_when_second_worker_accepts_then_rejected() {
    let mut gig = dispatching(StaffingRequest::Single);
    let first = UserId::new();
    gig.accept_worker(first, AssignmentId::new(), Utc::now())
        .unwrap();

    let result = gig.accept_worker(UserId::new(), AssignmentId::new(), Utc::now());

    assert!(matches!(
        result,
        Err(GigRuleError::InvalidTransition {
            from: GigStatus::OnRoute,
            ..
        })
    ));
    assert!(gig.has_worker(first));
}

#[test]
fn given_three_worker_gig_when_hiring_then_partially_matched_until_full() {
    let mut gig = dispatching(crew(3));

    gig.accept_worker(UserId::new(), AssignmentId::new(), Utc::now())
        .unwrap();
    assert_eq!(gig.status, GigStatus::PartiallyMatched);
    assert_eq!(gig.workers_hired(), 1);

    gig.accept_worker(UserId::new(), AssignmentId::new(), Utc::now())
        .unwrap();
    assert_eq!(gig.status, GigStatus::PartiallyMatched);
    assert_eq!(gig.workers_hired(), 2);

    gig.accept_worker(UserId::new(), AssignmentId::new(), Utc::now())
        .unwrap();
    assert_eq!(gig.status, GigStatus::Matched);
    assert_eq!(gig.workers_hired(), 3);
}

#[test]
fn given_one_worker_crew_when_hiring_then_matched_immediately() {
    let mut gig = dispatching(crew(1));

    gig.accept_worker(UserId::new(), AssignmentId::new(), Utc::now())
        .unwrap();

    assert_eq!(gig.status, GigStatus::Matched);
    assert!(gig.timeline.partially_matched_at.is_none());
}

#[test]
fn given_hired_worker_when_accepting_again_then_duplicate_assignment() {
    let mut gig = dispatching(crew(2));
    let worker = UserId::new();
    gig.accept_worker(worker, AssignmentId::new(), Utc::now())
        .unwrap();

    let result = gig.accept_worker(worker, AssignmentId::new(), Utc::now());

    assert_eq!(
        result,
        Err(GigRuleError::DuplicateAssignment { worker_id: worker })
    );
    assert_eq!(gig.workers_hired(), 1);
}

#[test]
fn given_full_crew_when_hired_worker_accepts_again_then_duplicate_reported_first() {
    let mut gig = dispatching(crew(1));
    let worker = UserId::new();
    gig.accept_worker(worker, AssignmentId::new(), Utc::now())
        .unwrap();

    let result = gig.accept_worker(worker, AssignmentId::new(), Utc::now());

    assert_eq!(
        result,
        Err(GigRuleError::DuplicateAssignment { worker_id: worker })
    );
}

#[test]
fn given_partially_matched_crew_when_closing_hiring_then_matched_with_shrunk_roster() {
    let mut gig = dispatching(crew(3));
    gig.accept_worker(UserId::new(), AssignmentId::new(), Utc::now())
        .unwrap();
    gig.accept_worker(UserId::new(), AssignmentId::new(), Utc::now())
        .unwrap();

    gig.close_hiring(Utc::now()).unwrap();

    assert_eq!(gig.status, GigStatus::Matched);
    assert_eq!(gig.workers_needed(), 2);
    assert_eq!(gig.payable_amount(), 100.0);
}

#[test]
fn given_single_gig_when_closing_hiring_then_rejected() {
    let mut gig = dispatching(StaffingRequest::Single);

    assert!(gig.close_hiring(Utc::now()).is_err());
    assert_eq!(gig.status, GigStatus::Dispatching);
}

#[test]
fn given_crew_with_no_hires_when_closing_hiring_then_rejected() {
    let mut gig = dispatching(crew(2));

    assert!(gig.close_hiring(Utc::now()).is_err());
}

#[test]
fn given_gig_when_serialized_then_round_trips_staffing() {
    let mut gig = dispatching(crew(2));
    gig.accept_worker(UserId::new(), AssignmentId::new(), Utc::now())
        .unwrap();

    let json = serde_json::to_value(&gig).unwrap();
    assert_eq!(json["staffing"]["gig_type"], "Multiple");
    assert_eq!(json["urgency"], "ASAP");

    let restored: Gig = serde_json::from_value(json).unwrap();
    assert_eq!(restored, gig);
}
