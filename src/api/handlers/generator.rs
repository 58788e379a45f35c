// src/api/handlers/generator.rs

use actix_web::{web, HttpResponse, Responder};
use crate::generators::PasswordGenerator;
use crate::api::types::{
    BulkGenerationRequest, BulkGenerationResponse, ErrorResponse, GeneratedPassword,
    PasswordGenerationRequest, PasswordGenerationResponse, StrengthCheckRequest,
    StrengthCheckResponse, ValidationError,
};
use crate::api::utils::{bad_request, parse_optional_body};
use crate::models::PasswordGenerationOptions;
use log::{debug, info};

/// Generate a password with the default policy
///
/// Twelve characters drawn from every character class.
#[utoipa::path(
    get,
    path = "/api/generate/quick",
    tag = "Generator",
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Generation failed", body = ErrorResponse)
    )
)]
pub async fn generate_quick() -> impl Responder {
    let generator = PasswordGenerator::new();

    match generator.generate_password(&PasswordGenerationOptions::default()) {
        Ok(password) => {
            debug!("Generated quick password");
            let strength = generator.analyze_password_strength(&password);
            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: true,
                length: password.chars().count(),
                password,
                options: None,
                strength,
            })
        }
        Err(e) => bad_request(&ValidationError::from(e)),
    }
}

/// Generate a password
///
/// Generates a password from the supplied policy. Every field is optional;
/// an empty body uses the defaults.
#[utoipa::path(
    post,
    path = "/api/generate",
    tag = "Generator",
    request_body = PasswordGenerationRequest,
    responses(
        (status = 200, description = "Generated password", body = PasswordGenerationResponse),
        (status = 400, description = "Invalid policy or length", body = ErrorResponse)
    )
)]
pub async fn generate_password(body: web::Bytes) -> impl Responder {
    let result = parse_optional_body::<PasswordGenerationRequest>(&body)
        .and_then(|req| req.resolve())
        .and_then(|options| {
            let generator = PasswordGenerator::new();
            let password = generator.generate_password(&options)?;
            let strength = generator.analyze_password_strength(&password);
            Ok::<_, ValidationError>((options, password, strength))
        });

    match result {
        Ok((options, password, strength)) => {
            debug!("Generated password of length {}", options.length);
            HttpResponse::Ok().json(PasswordGenerationResponse {
                success: true,
                length: password.chars().count(),
                password,
                options: Some(options),
                strength,
            })
        }
        Err(e) => bad_request(&e),
    }
}

/// Check password strength
///
/// Scores the supplied password from 0 to 7 and lists what it is missing.
#[utoipa::path(
    post,
    path = "/api/check-strength",
    tag = "Generator",
    request_body = StrengthCheckRequest,
    responses(
        (status = 200, description = "Strength analysis", body = StrengthCheckResponse),
        (status = 400, description = "No password provided", body = ErrorResponse)
    )
)]
pub async fn check_strength(body: web::Bytes) -> impl Responder {
    let check_req = match parse_optional_body::<StrengthCheckRequest>(&body) {
        Ok(req) => req,
        Err(e) => return bad_request(&e),
    };
    let password = match check_req.password() {
        Ok(password) => password,
        Err(e) => return bad_request(&e),
    };

    let strength = PasswordGenerator::new().analyze_password_strength(password);
    debug!("Scored password: {} ({})", strength.score, strength.level);

    HttpResponse::Ok().json(StrengthCheckResponse {
        success: true,
        password: password.to_string(),
        length: password.chars().count(),
        strength,
    })
}

/// Generate several passwords
///
/// Generates between 1 and 20 passwords (default 5) sharing one policy.
#[utoipa::path(
    post,
    path = "/api/generate/bulk",
    tag = "Generator",
    request_body = BulkGenerationRequest,
    responses(
        (status = 200, description = "Generated passwords", body = BulkGenerationResponse),
        (status = 400, description = "Invalid count, policy or length", body = ErrorResponse)
    )
)]
pub async fn generate_bulk(body: web::Bytes) -> impl Responder {
    let result = parse_optional_body::<BulkGenerationRequest>(&body).and_then(|req| {
        let count = req.resolve_count()?;
        let options = req.options.resolve()?;
        let generated = PasswordGenerator::new().generate_many(&options, count)?;
        Ok::<_, ValidationError>(generated)
    });

    match result {
        Ok(generated) => {
            info!("Generated {} passwords in bulk", generated.len());
            let passwords: Vec<GeneratedPassword> = generated
                .into_iter()
                .map(|(password, strength)| GeneratedPassword { password, strength })
                .collect();
            HttpResponse::Ok().json(BulkGenerationResponse {
                success: true,
                count: passwords.len(),
                passwords,
            })
        }
        Err(e) => bad_request(&e),
    }
}
