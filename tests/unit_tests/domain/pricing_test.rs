use quickhire::domain::pricing::{DEFAULT_BASE_RATE, round_cents};
use quickhire::domain::{Urgency, base_rate, quote_price};

#[test]
fn given_known_categories_when_looking_up_base_rate_then_returns_table_value() {
    assert_eq!(base_rate("Plumber"), 120.0);
    assert_eq!(base_rate("Electrician"), 130.0);
    assert_eq!(base_rate("Cleaner"), 80.0);
    assert_eq!(base_rate("HVAC"), 150.0);
}

#[test]
fn given_category_in_other_case_when_looking_up_base_rate_then_matches() {
    assert_eq!(base_rate("plumber"), 120.0);
    assert_eq!(base_rate("  hvac "), 150.0);
}

#[test]
fn given_unknown_category_when_looking_up_base_rate_then_default() {
    assert_eq!(base_rate("Astronaut"), DEFAULT_BASE_RATE);
    assert_eq!(base_rate(""), DEFAULT_BASE_RATE);
}

#[test]
fn given_plumber_ten_miles_asap_when_quoting_then_applies_distance_and_surge() {
    assert_eq!(quote_price("Plumber", 10.0, Urgency::Asap), 182.0);
}

#[test]
fn given_urgency_levels_when_quoting_then_multiplier_applied() {
    assert_eq!(quote_price("Handyman", 0.0, Urgency::Later), 90.0);
    assert_eq!(quote_price("Handyman", 0.0, Urgency::Today), 99.0);
    assert_eq!(quote_price("Handyman", 0.0, Urgency::Asap), 117.0);
}

#[test]
fn given_fractional_distance_when_quoting_then_rounded_to_cents() {
    let price = quote_price("Cleaner", 1.234, Urgency::Today);
    assert_eq!(price, 90.71);
}

#[test]
fn given_amounts_when_rounding_then_two_decimals() {
    assert_eq!(round_cents(10.005_1), 10.01);
    assert_eq!(round_cents(10.004), 10.0);
}

#[test]
fn given_urgency_names_when_parsing_then_case_insensitive() {
    assert_eq!("asap".parse::<Urgency>(), Ok(Urgency::Asap));
    assert_eq!("TODAY".parse::<Urgency>(), Ok(Urgency::Today));
    assert_eq!("Later".parse::<Urgency>(), Ok(Urgency::Later));
    assert!("tomorrow".parse::<Urgency>().is_err());
}

#[test]
fn given_asap_when_serialized_then_uses_upper_case_name() {
    assert_eq!(serde_json::to_string(&Urgency::Asap).unwrap(), "\"ASAP\"");
    assert_eq!(
        serde_json::from_str::<Urgency>("\"Today\"").unwrap(),
        Urgency::Today
    );
}
