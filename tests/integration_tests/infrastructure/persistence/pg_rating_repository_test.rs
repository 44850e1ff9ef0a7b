use quickhire::application::ports::{GigRepository, RatingRepository, RepositoryError};
use quickhire::domain::{
    GeoPoint, Gig, GigDraft, GigId, Location, RaterType, Rating, StaffingRequest, Urgency, UserId,
};

use crate::helpers::TestPostgres;

async fn stored_gig(test_pg: &TestPostgres) -> GigId {
    let gig = Gig::post(GigDraft {
        client_id: UserId::new(),
        category: "Locksmith".to_string(),
        description: None,
        location: Location {
            coordinates: GeoPoint::new(59.91, 10.75),
            address: String::new(),
        },
        radius_miles: 10.0,
        urgency: Urgency::Asap,
        budget: Some(125.0),
        staffing: StaffingRequest::Single,
    });
    test_pg.gig_repository.create(&gig).await.unwrap();
    gig.id
}

#[tokio::test]
#[ignore = "requires a container runtime"]
async fn given_ratings_when_creating_then_listed_and_counted() {
    let test_pg = TestPostgres::new().await;
    let gig_id = stored_gig(&test_pg).await;

    let client_rating = Rating::new(
        gig_id,
        UserId::new(),
        RaterType::Client,
        5,
        vec!["fast".to_string(), "friendly".to_string()],
        Some("Great job".to_string()),
    )
    .unwrap();
    let worker_rating =
        Rating::new(gig_id, UserId::new(), RaterType::Worker, 4, vec![], None).unwrap();

    test_pg
        .rating_repository
        .create(&client_rating)
        .await
        .expect("Failed to create rating");
    test_pg
        .rating_repository
        .create(&worker_rating)
        .await
        .expect("Failed to create rating");

    assert_eq!(
        test_pg.rating_repository.count_for_gig(gig_id).await.unwrap(),
        2
    );

    let listed = test_pg.rating_repository.list_for_gig(gig_id).await.unwrap();
    let client = listed
        .iter()
        .find(|r| r.id == client_rating.id)
        .expect("Client rating not found");
    assert_eq!(client.rater_type, RaterType::Client);
    assert_eq!(client.tags, vec!["fast", "friendly"]);
    assert_eq!(client.comment.as_deref(), Some("Great job"));
}

#[tokio::test]
#[ignore = "requires a container runtime"]
async fn given_rater_who_already_rated_when_creating_then_constraint_violation() {
    let test_pg = TestPostgres::new().await;
    let gig_id = stored_gig(&test_pg).await;
    let rater = UserId::new();
    test_pg
        .rating_repository
        .create(&Rating::new(gig_id, rater, RaterType::Client, 5, vec![], None).unwrap())
        .await
        .unwrap();

    let result = test_pg
        .rating_repository
        .create(&Rating::new(gig_id, rater, RaterType::Client, 2, vec![], None).unwrap())
        .await;

    assert!(matches!(result, Err(RepositoryError::ConstraintViolation(_))));
    assert_eq!(
        test_pg.rating_repository.count_for_gig(gig_id).await.unwrap(),
        1
    );
}
