use acme::acme_config::SeedConfig;
use acme::acme_core::{hash_password_with_cost, verify_password};

const FAST_COST: u32 = 4;

#[test]
fn test_seed_cost_hash_verifies() {
    let cost = SeedConfig::default().bcrypt_cost;
    let hash = hash_password_with_cost("123456", cost).unwrap();

    assert!(hash.starts_with("$2b$10$"));
    assert_ne!(hash, "123456");
    assert!(verify_password("123456", &hash).unwrap());
}

#[test]
fn test_hash_embeds_requested_cost() {
    let hash = hash_password_with_cost("123456", FAST_COST).unwrap();

    assert!(hash.starts_with("$2b$04$"));
}

#[test]
fn test_cost_out_of_range_fails() {
    let too_low = hash_password_with_cost("123456", 3);
    let too_high = hash_password_with_cost("123456", 32);

    assert!(too_low.is_err());
    assert!(too_high.is_err());
    assert!(
        too_low
            .unwrap_err()
            .error
            .to_string()
            .starts_with("Failed to hash password")
    );
}

#[test]
fn test_same_password_hashes_differently() {
    let first = hash_password_with_cost("123456", FAST_COST).unwrap();
    let second = hash_password_with_cost("123456", FAST_COST).unwrap();

    assert_ne!(first, second);
    assert!(verify_password("123456", &first).unwrap());
    assert!(verify_password("123456", &second).unwrap());
}

#[test]
fn test_wrong_password_rejected() {
    let hash = hash_password_with_cost("123456", FAST_COST).unwrap();

    assert!(!verify_password("1234567", &hash).unwrap());
    assert!(!verify_password("", &hash).unwrap());
}

#[test]
fn test_verify_against_malformed_hash_fails() {
    let result = verify_password("123456", "plaintext-not-a-hash");

    assert!(result.is_err());
}
