//! Basic example: issue a token, verify it, and inspect a rejected one
//!
//! 1. Issue an HS256 token for a JSON payload
//! 2. Verify it with the right secret
//! 3. Verify it with the wrong secret (not an error, just `valid == false`)
//! 4. Use an `Authority` to issue and authenticate registered claims

use hsjwt::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== hsjwt - Basic Example ===\n");

    let secret = b"your-256-bit-secret-key-here!";

    println!("Step 1: Issuing token...");
    let token = issue(&json!({"role": "api_user", "user_id": 42}), secret)?;
    println!("  ✓ Token: {token}\n");

    println!("Step 2: Verifying with the issuing secret...");
    let verification = verify(token.as_str(), secret)?;
    println!("  ✓ Valid: {}", verification.is_valid());
    println!("  ✓ Header: {:?}", verification.header());
    println!("  ✓ Payload: {}\n", verification.payload());

    println!("Step 3: Verifying with a different secret...");
    let verification = verify(token.as_str(), b"wrong-secret")?;
    println!("  ✗ Valid: {}", verification.is_valid());
    println!(
        "  → Untrusted payload still readable: {}\n",
        verification.payload()
    );

    println!("Step 4: Authority with claims validation...");
    let authority = Authority::new(secret.to_vec())?
        .with_algorithm(Algorithm::HS512)
        .with_claims_validation(
            ClaimsValidation::new()
                .require_audience("my-api")
                .clock_skew(60),
        );
    println!("  → {authority:?}");

    let token = authority.issue(
        &Claims::new()
            .with_issuer("https://example.com")
            .with_subject("user-42")
            .with_audience("my-api")
            .expires_in(3600),
    )?;
    let claims: Claims = authority.authenticate(token.as_str())?;
    println!("  ✓ Subject: {:?}", claims.subject());
    println!("  ✓ Expires at: {:?}", claims.expiration());

    Ok(())
}
