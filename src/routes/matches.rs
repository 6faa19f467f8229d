use crate::core::Matcher;
use crate::models::{
    DonorRecord, ErrorResponse, HealthResponse, RankMatchesRequest, RankMatchesResponse,
};
use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub result_cap: usize,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/rank", web::post().to(rank_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank matches endpoint
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "bloodType": "A",
///   "genotypes": {"HPA-1": "aa"},
///   "hlaA1": "A*02:01",
///   "hlaA2": "24",
///   "hlaB1": "7",
///   "hlaB2": "35",
///   "antibodies": "02, 57",
///   "donors": [],
///   "limit": true
/// }
/// ```
///
/// The donor pool arrives in the request body; retrieval and storage
/// belong to the upstream collaborator.
async fn rank_matches(
    state: web::Data<AppState>,
    req: web::Json<RankMatchesRequest>,
    http_req: actix_web::HttpRequest,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank_matches request: field_errors={:?}", errors);
        tracing::info!("Request path: {}, method: {}", http_req.path(), http_req.method());
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let req = req.into_inner();
    let recipient = req.recipient_profile();

    tracing::info!(
        "Ranking {} candidates (excluded groups: {}, weighted loci: {})",
        req.donors.len(),
        recipient.excluded_groups.len(),
        recipient.genotypes.len()
    );

    // Blood-type pre-filter, applied at the boundary rather than inside
    // the engine: donors carrying a differing non-empty blood type are
    // dropped when the recipient supplied one.
    let supplied = req.donors.len();
    let candidates = filter_blood_type(recipient.blood_type.as_deref(), req.donors);
    if candidates.len() < supplied {
        tracing::debug!(
            "Blood-type filter removed {} of {} donors",
            supplied - candidates.len(),
            supplied
        );
    }

    let cap = if req.limit {
        Some(state.result_cap)
    } else {
        None
    };

    // Run matching algorithm
    let result = state.matcher.rank(&recipient, candidates, cap);

    let response = RankMatchesResponse {
        matches: result.matches,
        total_results: result.total_candidates,
    };

    tracing::info!(
        "Returning {} matches (from {} candidates)",
        response.matches.len(),
        result.total_candidates
    );

    HttpResponse::Ok().json(response)
}

/// Drop donors whose non-empty blood type differs from the recipient's.
/// Donors with no recorded blood type are kept.
fn filter_blood_type(blood_type: Option<&str>, donors: Vec<DonorRecord>) -> Vec<DonorRecord> {
    let wanted = match blood_type {
        Some(bt) => bt,
        None => return donors,
    };

    donors
        .into_iter()
        .filter(|d| match d.blood_type.as_deref() {
            Some(donor_bt) if !donor_bt.is_empty() => donor_bt == wanted,
            _ => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donor_with_blood(id: &str, blood_type: Option<&str>) -> DonorRecord {
        DonorRecord {
            id: id.to_string(),
            blood_type: blood_type.map(String::from),
            genotypes: Default::default(),
            hla: Default::default(),
        }
    }

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "healthy".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "healthy");
    }

    #[test]
    fn test_blood_type_filter_drops_mismatches() {
        let donors = vec![
            donor_with_blood("same", Some("A")),
            donor_with_blood("other", Some("B")),
            donor_with_blood("unrecorded", None),
            donor_with_blood("empty", Some("")),
        ];

        let kept = filter_blood_type(Some("A"), donors);

        let ids: Vec<&str> = kept.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["same", "unrecorded", "empty"]);
    }

    #[test]
    fn test_blood_type_filter_passthrough_without_recipient_type() {
        let donors = vec![
            donor_with_blood("a", Some("A")),
            donor_with_blood("b", Some("B")),
        ];

        let kept = filter_blood_type(None, donors);
        assert_eq!(kept.len(), 2);
    }
}
