// demos/roundtrip.rs

use hmac_jwt::{decode, encode, Algorithm, Claims, JwtError, SecretTable};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("hmac-jwt Roundtrip Example");

    // 1. Populate the secret table (in a real app, load from env/config)
    let secrets = SecretTable::new()
        .with_secret(Algorithm::HS256, "demo-256-bit-secret")
        .with_secret(Algorithm::HS512, "demo-512-bit-secret");

    // 2. Build claims; `iat` will be injected during encode
    let mut claims = Claims::new();
    claims.insert("sub", json!("example.com"));
    claims.insert("roles", json!(["admin"]));
    claims.insert("exp", json!(4_000_000_000u64));

    // 3. Encode with HS512
    let token = encode(&mut claims, Algorithm::HS512, &secrets)?;
    println!("Token: {}", token);
    println!("Injected iat: {:?}", claims.issued_at());

    // 4. Decode and verify with the same table
    let verified = decode(&token, &secrets)?;
    println!("Verified claims: {:?}", verified);

    // 5. Demonstrate rejection: flip the last signature character
    let mut tampered = token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'A' { 'B' } else { 'A' });

    match decode(&tampered, &secrets) {
        Ok(_) => println!("Unexpected: tampered token was accepted"),
        Err(JwtError::InvalidSignature) => println!("Tampered token rejected, as expected"),
        Err(e) => println!("Tampered token rejected with: {}", e),
    }

    // 6. Demonstrate a missing-secret failure (no HS384 entry registered)
    match encode(&mut Claims::new(), Algorithm::HS384, &secrets) {
        Ok(_) => println!("Unexpected: encode without a secret succeeded"),
        Err(e) => println!("Encode without HS384 secret failed: {}", e),
    }

    Ok(())
}
