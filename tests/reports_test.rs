mod common;

use chrono::Utc;
use rust_decimal_macros::dec;

use common::TestApp;
use plymill_api::entities::material_lot::{LotStatus, LotUnit, MaterialKind};
use plymill_api::entities::plywood_setting::PlywoodType;
use plymill_api::services::lots::NewLot;
use plymill_api::services::production::{
    HotPressInput, LogFilter, PressDryInput, SettingInput, YieldInput,
};
use plymill_api::services::suppliers::NewSupplier;

fn press_dry_input(
    machine_id: i64,
    lot_id: i64,
    quantity_in: rust_decimal::Decimal,
    accepted: rust_decimal::Decimal,
    rejected: rust_decimal::Decimal,
) -> PressDryInput {
    PressDryInput {
        machine_id,
        batch: YieldInput {
            lot_id,
            quantity_in,
            accepted,
            rejected,
            notes: None,
            created_by: "operator".to_string(),
        },
    }
}

#[tokio::test]
async fn press_dry_daily_totals_and_yield_per_machine() {
    let app = TestApp::new().await;
    let lot = app.seed_approved_lot(MaterialKind::Core, dec!(200)).await;

    app.state
        .services
        .production
        .press_dry(press_dry_input(1, lot.id, dec!(40), dec!(32), dec!(8)))
        .await
        .expect("machine 1 run");
    app.state
        .services
        .production
        .press_dry(press_dry_input(1, lot.id, dec!(20), dec!(16), dec!(4)))
        .await
        .expect("machine 1 second run");
    app.state
        .services
        .production
        .press_dry(press_dry_input(2, lot.id, dec!(50), dec!(50), dec!(0)))
        .await
        .expect("machine 2 run");

    let rows = app
        .state
        .services
        .reports
        .press_dry_daily(&LogFilter::default())
        .await
        .expect("report");
    assert_eq!(rows.len(), 2);

    let today = Utc::now().date_naive();
    let machine_one = rows.iter().find(|r| r.machine_id == 1).expect("machine 1 row");
    assert_eq!(machine_one.day, today);
    assert_eq!(machine_one.total_in, dec!(60));
    assert_eq!(machine_one.total_accepted, dec!(48));
    assert_eq!(machine_one.total_rejected, dec!(12));
    assert_eq!(machine_one.yield_pct, dec!(80));

    let machine_two = rows.iter().find(|r| r.machine_id == 2).expect("machine 2 row");
    assert_eq!(machine_two.yield_pct, dec!(100));

    // Narrowing to one machine drops the other's rows.
    let filtered = app
        .state
        .services
        .reports
        .press_dry_daily(&LogFilter {
            machine_id: Some(2),
            ..Default::default()
        })
        .await
        .expect("filtered report");
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].machine_id, 2);
}

#[tokio::test]
async fn press_dry_daily_reports_zero_yield_without_failing() {
    let app = TestApp::new().await;
    let lot = app.seed_approved_lot(MaterialKind::Core, dec!(50)).await;

    // A batch that produced nothing: all input lost to handling damage,
    // recorded as neither accepted nor rejected sheets.
    app.state
        .services
        .production
        .press_dry(press_dry_input(1, lot.id, dec!(10), dec!(0), dec!(0)))
        .await
        .expect("zero-output run");

    let rows = app
        .state
        .services
        .reports
        .press_dry_daily(&LogFilter::default())
        .await
        .expect("report");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].yield_pct, dec!(0));
}

#[tokio::test]
async fn glue_usage_groups_by_type_and_guards_zero_output() {
    let app = TestApp::new().await;

    for (glue, accepted) in [(dec!(12), dec!(24)), (dec!(6), dec!(12))] {
        app.state
            .services
            .production
            .record_setting(SettingInput {
                plywood_type: PlywoodType::Mm9,
                short_core_qty: dec!(30),
                long_core_qty: dec!(0),
                face_qty: dec!(30),
                back_qty: dec!(30),
                glue_qty: glue,
                accepted,
                rejected: dec!(0),
                notes: None,
                created_by: "operator".to_string(),
            })
            .await
            .expect("setting");
    }
    app.state
        .services
        .production
        .record_setting(SettingInput {
            plywood_type: PlywoodType::Mm3,
            short_core_qty: dec!(10),
            long_core_qty: dec!(0),
            face_qty: dec!(10),
            back_qty: dec!(10),
            glue_qty: dec!(5),
            accepted: dec!(0),
            rejected: dec!(0),
            notes: None,
            created_by: "operator".to_string(),
        })
        .await
        .expect("zero-output setting");

    let rows = app
        .state
        .services
        .reports
        .glue_usage_daily(&LogFilter::default())
        .await
        .expect("report");
    assert_eq!(rows.len(), 2);

    let nine_mm = rows
        .iter()
        .find(|r| r.plywood_type == PlywoodType::Mm9)
        .expect("9mm row");
    assert_eq!(nine_mm.total_glue, dec!(18));
    assert_eq!(nine_mm.total_accepted, dec!(36));
    assert_eq!(nine_mm.glue_per_accepted, dec!(0.5));

    let three_mm = rows
        .iter()
        .find(|r| r.plywood_type == PlywoodType::Mm3)
        .expect("3mm row");
    assert_eq!(three_mm.glue_per_accepted, dec!(0));
}

#[tokio::test]
async fn face_back_intake_counts_supplier_deliveries_by_outcome() {
    let app = TestApp::new().await;

    let supplier = app
        .state
        .services
        .suppliers
        .create(NewSupplier {
            name: "Veneer Jaya".to_string(),
            contact_name: None,
            phone: None,
            address: None,
        })
        .await
        .expect("supplier");

    let mut delivered = Vec::new();
    for (kind, quantity) in [
        (MaterialKind::Face, dec!(100)),
        (MaterialKind::Face, dec!(50)),
        (MaterialKind::Back, dec!(80)),
    ] {
        let lot = app
            .state
            .services
            .lots
            .receive_lot(NewLot {
                supplier_id: Some(supplier.id),
                kind,
                thickness_mm: Some(dec!(0.6)),
                quantity,
                unit: LotUnit::Sheet,
                notes: None,
                created_by: "gate-clerk".to_string(),
            })
            .await
            .expect("intake");
        delivered.push(lot);
    }

    app.state
        .services
        .quality
        .approve(delivered[0].id, None)
        .await
        .expect("approve first face");
    app.state
        .services
        .quality
        .reject(delivered[1].id, Some("mould".to_string()))
        .await
        .expect("reject second face");

    // A supplier-less core lot must not appear in this report.
    app.seed_lot(MaterialKind::Core, dec!(10)).await;

    let rows = app
        .state
        .services
        .reports
        .face_back_intake_daily(&LogFilter::default())
        .await
        .expect("report");
    assert_eq!(rows.len(), 3);

    let approved_face = rows
        .iter()
        .find(|r| r.kind == MaterialKind::Face && r.status == LotStatus::Approved)
        .expect("approved face row");
    assert_eq!(approved_face.total_quantity, dec!(100));
    assert_eq!(approved_face.lot_count, 1);

    let rejected_face = rows
        .iter()
        .find(|r| r.kind == MaterialKind::Face && r.status == LotStatus::Rejected)
        .expect("rejected face row");
    assert_eq!(rejected_face.total_quantity, dec!(50));

    let pending_back = rows
        .iter()
        .find(|r| r.kind == MaterialKind::Back && r.status == LotStatus::AwaitingInspection)
        .expect("pending back row");
    assert_eq!(pending_back.lot_count, 1);
}

#[tokio::test]
async fn finished_goods_daily_groups_by_type_and_grade() {
    let app = TestApp::new().await;

    let setting = app
        .state
        .services
        .production
        .record_setting(SettingInput {
            plywood_type: PlywoodType::Mm29,
            short_core_qty: dec!(20),
            long_core_qty: dec!(20),
            face_qty: dec!(20),
            back_qty: dec!(20),
            glue_qty: dec!(15),
            accepted: dec!(18),
            rejected: dec!(2),
            notes: None,
            created_by: "operator".to_string(),
        })
        .await
        .expect("setting");

    for (accepted, rejected) in [(dec!(10), dec!(0)), (dec!(7), dec!(1))] {
        app.state
            .services
            .production
            .hot_press(HotPressInput {
                setting_id: setting.id,
                quantity_in: accepted + rejected,
                accepted,
                rejected,
                notes: None,
                created_by: "operator".to_string(),
            })
            .await
            .expect("hot press");
    }

    let rows = app
        .state
        .services
        .reports
        .finished_goods_daily(&LogFilter::default())
        .await
        .expect("report");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].plywood_type, PlywoodType::Mm29);
    assert_eq!(rows[0].grade, "A");
    assert_eq!(rows[0].total_quantity, dec!(17));
}

#[tokio::test]
async fn reports_are_stable_against_unchanged_storage() {
    let app = TestApp::new().await;
    let lot = app.seed_approved_lot(MaterialKind::Core, dec!(100)).await;
    app.state
        .services
        .production
        .press_dry(press_dry_input(1, lot.id, dec!(40), dec!(36), dec!(4)))
        .await
        .expect("press dry");

    let first = app
        .state
        .services
        .reports
        .press_dry_daily(&LogFilter::default())
        .await
        .expect("first read");
    let second = app
        .state
        .services
        .reports
        .press_dry_daily(&LogFilter::default())
        .await
        .expect("second read");
    assert_eq!(first, second);

    let stock_first = app
        .state
        .services
        .reports
        .warehouse_stock()
        .await
        .expect("first stock read");
    let stock_second = app
        .state
        .services
        .reports
        .warehouse_stock()
        .await
        .expect("second stock read");
    assert_eq!(stock_first, stock_second);
}

#[tokio::test]
async fn warehouse_stock_shows_rejected_but_not_drained_lots() {
    let app = TestApp::new().await;

    let rejected = app.seed_lot(MaterialKind::Core, dec!(30)).await;
    app.state
        .services
        .quality
        .reject(rejected.id, Some("split".to_string()))
        .await
        .expect("reject");

    let drained = app.seed_approved_lot(MaterialKind::Core, dec!(10)).await;
    app.state
        .services
        .production
        .press_dry(press_dry_input(1, drained.id, dec!(10), dec!(10), dec!(0)))
        .await
        .expect("drain");

    let rows = app
        .state
        .services
        .reports
        .warehouse_stock()
        .await
        .expect("stock report");

    assert!(rows
        .iter()
        .any(|r| r.status == LotStatus::Rejected && r.total_quantity == dec!(30)));
    // The drained source is a tombstone now; only its press-dry output shows.
    assert!(!rows.iter().any(|r| r.total_quantity == dec!(0)));
}
