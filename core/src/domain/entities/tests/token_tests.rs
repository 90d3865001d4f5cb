//! Unit tests for token entities

use chrono::Utc;

use crate::domain::entities::token::{ActorKind, Claims};

#[test]
fn test_access_token_claims() {
    let claims = Claims::new_access_token("hr@acme.io", ActorKind::Company, 30);

    assert_eq!(claims.sub, "hr@acme.io");
    assert_eq!(claims.user_type.as_deref(), Some("company"));
    assert_eq!(claims.actor_kind(), Some(ActorKind::Company));
    assert_eq!(claims.exp - claims.iat, 30 * 60);
    assert!(!claims.is_expired());
}

#[test]
fn test_unique_jti() {
    let a = Claims::new_access_token("a@b.io", ActorKind::User, 30);
    let b = Claims::new_access_token("a@b.io", ActorKind::User, 30);
    assert_ne!(a.jti, b.jti);
}

#[test]
fn test_unknown_or_missing_actor_kind() {
    let mut claims = Claims::new_access_token("a@b.io", ActorKind::User, 30);

    claims.user_type = Some("admin".to_string());
    assert_eq!(claims.actor_kind(), None);

    claims.user_type = None;
    assert_eq!(claims.actor_kind(), None);
}

#[test]
fn test_expired_claims() {
    let mut claims = Claims::new_access_token("a@b.io", ActorKind::User, 30);
    claims.exp = Utc::now().timestamp() - 1;
    assert!(claims.is_expired());
}

#[test]
fn test_claims_deserialize_without_user_type() {
    let json = r#"{"sub":"a@b.io","exp":1,"iat":0,"jti":"x"}"#;
    let claims: Claims = serde_json::from_str(json).unwrap();
    assert_eq!(claims.user_type, None);
}

#[test]
fn test_actor_kind_round_trip_strings() {
    assert_eq!("user".parse::<ActorKind>().unwrap(), ActorKind::User);
    assert_eq!(ActorKind::Company.to_string(), "company");
    assert!("Company".parse::<ActorKind>().is_err());
}
