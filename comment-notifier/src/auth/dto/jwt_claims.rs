use serde::Deserialize;

#[derive(Deserialize)]
pub struct JwtClaims {
    pub sub: String,
    pub realm_access: JwtClaimsRealmAccess,
}

#[derive(Deserialize)]
pub struct JwtClaimsRealmAccess {
    pub roles: Vec<String>,
}
