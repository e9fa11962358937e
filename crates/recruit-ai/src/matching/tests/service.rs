use super::common::*;
use crate::matching::facts::{JdId, ResumeId};
use crate::matching::intelligence::Rating;
use crate::matching::repository::RepositoryError;
use crate::matching::MatchServiceError;

#[test]
fn scoring_a_pair_persists_and_shortlists_top_candidates() {
    let (service, _repository, shortlist) = build_service();
    let jd_id = JdId("jd-1".to_string());
    let resume_id = ResumeId("r-1".to_string());

    let stored = service
        .score_pair(
            &jd_id,
            &platform_jd(),
            &resume_id,
            &strong_resume(),
            reference_date(),
        )
        .expect("pair scores");

    assert_close(stored.core.final_score, 0.875);
    assert_close(stored.intelligence.final_score, 100.0);

    let fetched = service.get(&jd_id, &resume_id).expect("record stored");
    assert_eq!(fetched.intelligence.candidate_name, "Priya Raman");

    let notices = shortlist.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].candidate_name, "Priya Raman");
    assert_eq!(notices[0].rating, Rating::TopChoice);
    assert_close(notices[0].final_score, 100.0);

    // Rescoring the same pair replaces the stored record.
    service
        .score_pair(
            &jd_id,
            &platform_jd(),
            &resume_id,
            &strong_resume(),
            reference_date(),
        )
        .expect("pair rescores");
    assert_eq!(service.ranked(&jd_id).expect("ranked").len(), 1);
}

#[test]
fn weak_candidates_stay_off_the_shortlist() {
    let (service, _repository, shortlist) = build_service();
    let jd_id = JdId("jd-1".to_string());
    let resume_id = ResumeId("r-9".to_string());

    let stored = service
        .score_pair(
            &jd_id,
            &platform_jd(),
            &resume_id,
            &minimal_resume("Lee Chan"),
            reference_date(),
        )
        .expect("pair scores");

    assert!(stored.intelligence.final_score < 90.0);
    assert!(shortlist.notices().is_empty());
    assert!(service.get(&jd_id, &resume_id).is_ok());
}

#[test]
fn rank_orders_and_persists_the_batch() {
    let (service, _repository, shortlist) = build_service();
    let jd_id = JdId("jd-7".to_string());
    let candidates = vec![
        (ResumeId("r-1".to_string()), minimal_resume("Lee Chan")),
        (ResumeId("r-2".to_string()), strong_resume()),
    ];

    let ranked = service
        .rank(&jd_id, &platform_jd(), &candidates, reference_date())
        .expect("batch scores");

    assert_eq!(ranked.len(), 2);
    assert_eq!(ranked[0].position, 1);
    assert_eq!(ranked[0].record.candidate_name, "Priya Raman");
    assert_eq!(ranked[1].position, 2);
    assert_eq!(ranked[1].record.candidate_name, "Lee Chan");

    let stored = service.ranked(&jd_id).expect("stored records");
    assert_eq!(stored.len(), 2);
    assert_eq!(stored[0].intelligence.candidate_name, "Priya Raman");

    let notices = shortlist.notices();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].candidate_name, "Priya Raman");
}

#[test]
fn missing_records_surface_not_found() {
    let (service, _repository, _shortlist) = build_service();
    let result = service.get(
        &JdId("jd-none".to_string()),
        &ResumeId("r-none".to_string()),
    );

    assert!(matches!(
        result,
        Err(MatchServiceError::Repository(RepositoryError::NotFound))
    ));
}
