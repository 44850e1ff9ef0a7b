use quickhire::domain::{GigId, MAX_SCORE, MIN_SCORE, RaterType, Rating, UserId};

fn rate(score: u8) -> Result<Rating, String> {
    Rating::new(
        GigId::new(),
        UserId::new(),
        RaterType::Client,
        score,
        vec!["punctual".to_string()],
        None,
    )
}

#[test]
fn given_score_in_range_when_rating_then_created() {
    for score in MIN_SCORE..=MAX_SCORE {
        let rating = rate(score).unwrap();
        assert_eq!(rating.score, score);
    }
}

#[test]
fn given_score_out_of_range_when_rating_then_rejected() {
    assert!(rate(0).is_err());
    assert!(rate(6).is_err());
}

#[test]
fn given_rater_type_names_when_parsing_then_case_insensitive() {
    assert_eq!("client".parse::<RaterType>(), Ok(RaterType::Client));
    assert_eq!("WORKER".parse::<RaterType>(), Ok(RaterType::Worker));
    assert!("admin".parse::<RaterType>().is_err());
}
