mod common;

use assert_matches::assert_matches;
use rust_decimal_macros::dec;

use common::TestApp;
use plymill_api::entities::material_lot::{LotStatus, LotUnit, MaterialKind};
use plymill_api::errors::ServiceError;
use plymill_api::services::lots::NewLot;
use plymill_api::services::quality::{BatchDecision, BatchItemOutcome, Verdict};

#[tokio::test]
async fn pending_queue_is_oldest_first() {
    let app = TestApp::new().await;

    let first = app.seed_lot(MaterialKind::Core, dec!(10)).await;
    let second = app.seed_lot(MaterialKind::Face, dec!(20)).await;

    let pending = app
        .state
        .services
        .quality
        .pending_inspection()
        .await
        .expect("pending queue");

    assert_eq!(
        pending.iter().map(|l| l.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[tokio::test]
async fn approve_flips_status_without_touching_quantity_or_location() {
    let app = TestApp::new().await;
    let lot = app.seed_lot(MaterialKind::Core, dec!(80)).await;

    let approved = app
        .state
        .services
        .quality
        .approve(lot.id, None)
        .await
        .expect("approve");

    assert_eq!(approved.status, LotStatus::Approved);
    assert_eq!(approved.quantity, lot.quantity);
    assert_eq!(approved.warehouse_id, lot.warehouse_id);
}

#[tokio::test]
async fn approve_keeps_the_intake_note_when_no_note_is_given() {
    let app = TestApp::new().await;

    let lot = app
        .state
        .services
        .lots
        .receive_lot(NewLot {
            supplier_id: None,
            kind: MaterialKind::Core,
            thickness_mm: None,
            quantity: dec!(10),
            unit: LotUnit::Sheet,
            notes: Some("delivery truck 7".to_string()),
            created_by: "gate-clerk".to_string(),
        })
        .await
        .expect("intake");

    let approved = app
        .state
        .services
        .quality
        .approve(lot.id, None)
        .await
        .expect("approve");
    assert_eq!(approved.notes.as_deref(), Some("delivery truck 7"));

    // A fresh lot approved with a note gets the note replaced.
    let lot = app.seed_lot(MaterialKind::Core, dec!(10)).await;
    let approved = app
        .state
        .services
        .quality
        .approve(lot.id, Some("surface ok".to_string()))
        .await
        .expect("approve with note");
    assert_eq!(approved.notes.as_deref(), Some("surface ok"));
}

#[tokio::test]
async fn reject_requires_a_note() {
    let app = TestApp::new().await;
    let lot = app.seed_lot(MaterialKind::Core, dec!(10)).await;

    let err = app
        .state
        .services
        .quality
        .reject(lot.id, None)
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::ValidationError(_));

    let err = app
        .state
        .services
        .quality
        .reject(lot.id, Some("   ".to_string()))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::ValidationError(_));

    let rejected = app
        .state
        .services
        .quality
        .reject(lot.id, Some("cracked veneer".to_string()))
        .await
        .expect("reject");
    assert_eq!(rejected.status, LotStatus::Rejected);
    assert_eq!(rejected.notes.as_deref(), Some("cracked veneer"));
}

#[tokio::test]
async fn decided_lots_cannot_be_redecided() {
    let app = TestApp::new().await;
    let lot = app.seed_approved_lot(MaterialKind::Core, dec!(10)).await;

    let err = app
        .state
        .services
        .quality
        .approve(lot.id, None)
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));

    let err = app
        .state
        .services
        .quality
        .reject(lot.id, Some("too late".to_string()))
        .await
        .unwrap_err();
    assert_matches!(err, ServiceError::NotFound(_));
}

#[tokio::test]
async fn batch_applies_fresh_items_and_reports_stale_ones() {
    let app = TestApp::new().await;

    let fresh_a = app.seed_lot(MaterialKind::Core, dec!(10)).await;
    let fresh_b = app.seed_lot(MaterialKind::Face, dec!(20)).await;
    let already_decided = app.seed_approved_lot(MaterialKind::Back, dec!(30)).await;

    let outcome = app
        .state
        .services
        .quality
        .batch(vec![
            BatchDecision {
                lot_id: fresh_a.id,
                verdict: Verdict::Approve,
                note: None,
            },
            BatchDecision {
                lot_id: fresh_b.id,
                verdict: Verdict::Reject,
                note: Some("warped".to_string()),
            },
            BatchDecision {
                lot_id: already_decided.id,
                verdict: Verdict::Approve,
                note: None,
            },
            BatchDecision {
                lot_id: 424242,
                verdict: Verdict::Reject,
                note: Some("ghost".to_string()),
            },
        ])
        .await
        .expect("batch");

    assert_eq!(outcome.applied, 2);
    assert_eq!(outcome.items.len(), 4);
    assert_matches!(outcome.items[0], BatchItemOutcome::Applied { lot_id, .. } if lot_id == fresh_a.id);
    assert_matches!(outcome.items[1], BatchItemOutcome::Applied { lot_id, .. } if lot_id == fresh_b.id);
    assert_matches!(outcome.items[2], BatchItemOutcome::Skipped { lot_id, .. } if lot_id == already_decided.id);
    assert_matches!(outcome.items[3], BatchItemOutcome::Skipped { lot_id, .. } if lot_id == 424242);

    let a = app.state.services.lots.get_lot(fresh_a.id).await.expect("lot a");
    assert_eq!(a.status, LotStatus::Approved);
    let b = app.state.services.lots.get_lot(fresh_b.id).await.expect("lot b");
    assert_eq!(b.status, LotStatus::Rejected);
}

#[tokio::test]
async fn batch_skips_rejections_without_notes() {
    let app = TestApp::new().await;
    let lot = app.seed_lot(MaterialKind::Core, dec!(10)).await;

    let outcome = app
        .state
        .services
        .quality
        .batch(vec![BatchDecision {
            lot_id: lot.id,
            verdict: Verdict::Reject,
            note: None,
        }])
        .await
        .expect("batch");

    assert_eq!(outcome.applied, 0);
    assert_matches!(outcome.items[0], BatchItemOutcome::Skipped { .. });

    let unchanged = app.state.services.lots.get_lot(lot.id).await.expect("lot");
    assert_eq!(unchanged.status, LotStatus::AwaitingInspection);
}
