use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240301_000001_create_warehouses::Migration),
            Box::new(m20240301_000002_create_suppliers::Migration),
            Box::new(m20240301_000003_create_material_lots::Migration),
            Box::new(m20240301_000004_create_press_machines::Migration),
            Box::new(m20240301_000005_create_stage_ledgers::Migration),
            Box::new(m20240301_000006_create_plywood_settings::Migration),
            Box::new(m20240301_000007_create_hot_press_and_finished_goods::Migration),
        ]
    }
}

// Migration implementations

mod m20240301_000001_create_warehouses {
    use chrono::Utc;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000001_create_warehouses"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Warehouses::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Warehouses::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(Warehouses::Code)
                                .string_len(24)
                                .not_null()
                                .unique_key(),
                        )
                        .col(ColumnDef::new(Warehouses::Name).string().not_null())
                        .col(
                            ColumnDef::new(Warehouses::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            // Provision the static topology. The mill's legacy floor names are
            // kept as display names; code is the lookup key.
            let now = Utc::now();
            for (code, name) in [
                ("RECEIVING", "Gudang A"),
                ("INTERMEDIATE_1", "Gudang B"),
                ("INTERMEDIATE_2", "Gudang C"),
                ("FINISHED", "Gudang Finished"),
            ] {
                manager
                    .exec_stmt(
                        Query::insert()
                            .into_table(Warehouses::Table)
                            .columns([Warehouses::Code, Warehouses::Name, Warehouses::CreatedAt])
                            .values_panic([code.into(), name.into(), now.into()])
                            .to_owned(),
                    )
                    .await?;
            }

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Warehouses::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Warehouses {
        Table,
        Id,
        Code,
        Name,
        CreatedAt,
    }
}

mod m20240301_000002_create_suppliers {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000002_create_suppliers"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Suppliers::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Suppliers::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Suppliers::Name).string().not_null())
                        .col(ColumnDef::new(Suppliers::ContactName).string().null())
                        .col(ColumnDef::new(Suppliers::Phone).string().null())
                        .col(ColumnDef::new(Suppliers::Address).string().null())
                        .col(
                            ColumnDef::new(Suppliers::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(Suppliers::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(Suppliers::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Suppliers::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum Suppliers {
        Table,
        Id,
        Name,
        ContactName,
        Phone,
        Address,
        IsActive,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000003_create_material_lots {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000001_create_warehouses::Warehouses;
    use super::m20240301_000002_create_suppliers::Suppliers;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000003_create_material_lots"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(MaterialLots::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(MaterialLots::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(MaterialLots::SupplierId).big_integer().null())
                        .col(ColumnDef::new(MaterialLots::Kind).string_len(16).not_null())
                        .col(
                            ColumnDef::new(MaterialLots::ThicknessMm)
                                .decimal_len(12, 3)
                                .null(),
                        )
                        .col(
                            ColumnDef::new(MaterialLots::Quantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaterialLots::Unit).string_len(8).not_null())
                        .col(
                            ColumnDef::new(MaterialLots::WarehouseId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialLots::Status)
                                .string_len(24)
                                .not_null(),
                        )
                        .col(ColumnDef::new(MaterialLots::Notes).string().null())
                        .col(ColumnDef::new(MaterialLots::CreatedBy).string().not_null())
                        .col(
                            ColumnDef::new(MaterialLots::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(MaterialLots::UpdatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_material_lots_supplier")
                                .from(MaterialLots::Table, MaterialLots::SupplierId)
                                .to(Suppliers::Table, Suppliers::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .name("fk_material_lots_warehouse")
                                .from(MaterialLots::Table, MaterialLots::WarehouseId)
                                .to(Warehouses::Table, Warehouses::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_material_lots_warehouse_status")
                        .table(MaterialLots::Table)
                        .col(MaterialLots::WarehouseId)
                        .col(MaterialLots::Status)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_material_lots_kind")
                        .table(MaterialLots::Table)
                        .col(MaterialLots::Kind)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(MaterialLots::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum MaterialLots {
        Table,
        Id,
        SupplierId,
        Kind,
        ThicknessMm,
        Quantity,
        Unit,
        WarehouseId,
        Status,
        Notes,
        CreatedBy,
        CreatedAt,
        UpdatedAt,
    }
}

mod m20240301_000004_create_press_machines {
    use chrono::Utc;
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000004_create_press_machines"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PressMachines::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PressMachines::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(PressMachines::MachineNo)
                                .integer()
                                .not_null(),
                        )
                        .col(ColumnDef::new(PressMachines::Name).string().not_null())
                        .col(
                            ColumnDef::new(PressMachines::IsActive)
                                .boolean()
                                .not_null()
                                .default(true),
                        )
                        .col(
                            ColumnDef::new(PressMachines::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await?;

            let now = Utc::now();
            for (no, name) in [(1, "Press Dryer 1"), (2, "Press Dryer 2"), (3, "Press Dryer 3")] {
                manager
                    .exec_stmt(
                        Query::insert()
                            .into_table(PressMachines::Table)
                            .columns([
                                PressMachines::MachineNo,
                                PressMachines::Name,
                                PressMachines::CreatedAt,
                            ])
                            .values_panic([no.into(), name.into(), now.into()])
                            .to_owned(),
                    )
                    .await?;
            }

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PressMachines::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum PressMachines {
        Table,
        Id,
        MachineNo,
        Name,
        IsActive,
        CreatedAt,
    }
}

mod m20240301_000005_create_stage_ledgers {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000003_create_material_lots::MaterialLots;
    use super::m20240301_000004_create_press_machines::PressMachines;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000005_create_stage_ledgers"
        }
    }

    /// Columns shared by every yield-style stage ledger.
    fn yield_ledger_table<T: Iden + Copy + 'static>(
        table: T,
        id: T,
        lot_id: T,
        quantity_in: T,
        accepted: T,
        rejected: T,
        notes: T,
        created_by: T,
        created_at: T,
    ) -> TableCreateStatement {
        Table::create()
            .table(table)
            .if_not_exists()
            .col(
                ColumnDef::new(id)
                    .big_integer()
                    .not_null()
                    .auto_increment()
                    .primary_key(),
            )
            .col(ColumnDef::new(lot_id).big_integer().not_null())
            .col(ColumnDef::new(quantity_in).decimal().not_null())
            .col(ColumnDef::new(accepted).decimal().not_null())
            .col(ColumnDef::new(rejected).decimal().not_null())
            .col(ColumnDef::new(notes).string().null())
            .col(ColumnDef::new(created_by).string().not_null())
            .col(
                ColumnDef::new(created_at)
                    .timestamp_with_time_zone()
                    .not_null(),
            )
            .foreign_key(
                ForeignKey::create()
                    .from(table, lot_id)
                    .to(MaterialLots::Table, MaterialLots::Id),
            )
            .to_owned()
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            // press_dry_logs carries the machine key on top of the shared shape
            manager
                .create_table(
                    yield_ledger_table(
                        PressDryLogs::Table,
                        PressDryLogs::Id,
                        PressDryLogs::LotId,
                        PressDryLogs::QuantityIn,
                        PressDryLogs::Accepted,
                        PressDryLogs::Rejected,
                        PressDryLogs::Notes,
                        PressDryLogs::CreatedBy,
                        PressDryLogs::CreatedAt,
                    )
                    .col(
                        ColumnDef::new(PressDryLogs::MachineId)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(PressDryLogs::Table, PressDryLogs::MachineId)
                            .to(PressMachines::Table, PressMachines::Id),
                    )
                    .to_owned(),
                )
                .await?;

            manager
                .create_table(yield_ledger_table(
                    RepairLogs::Table,
                    RepairLogs::Id,
                    RepairLogs::LotId,
                    RepairLogs::QuantityIn,
                    RepairLogs::Accepted,
                    RepairLogs::Rejected,
                    RepairLogs::Notes,
                    RepairLogs::CreatedBy,
                    RepairLogs::CreatedAt,
                ))
                .await?;

            manager
                .create_table(yield_ledger_table(
                    CoreBuildLogs::Table,
                    CoreBuildLogs::Id,
                    CoreBuildLogs::LotId,
                    CoreBuildLogs::QuantityIn,
                    CoreBuildLogs::Accepted,
                    CoreBuildLogs::Rejected,
                    CoreBuildLogs::Notes,
                    CoreBuildLogs::CreatedBy,
                    CoreBuildLogs::CreatedAt,
                ))
                .await?;

            manager
                .create_table(
                    yield_ledger_table(
                        ScarfJoinLogs::Table,
                        ScarfJoinLogs::Id,
                        ScarfJoinLogs::LotId,
                        ScarfJoinLogs::QuantityIn,
                        ScarfJoinLogs::Accepted,
                        ScarfJoinLogs::Rejected,
                        ScarfJoinLogs::Notes,
                        ScarfJoinLogs::CreatedBy,
                        ScarfJoinLogs::CreatedAt,
                    )
                    .col(ColumnDef::new(ScarfJoinLogs::GrainDirection).string().null())
                    .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_press_dry_logs_created_at")
                        .table(PressDryLogs::Table)
                        .col(PressDryLogs::CreatedAt)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_repair_logs_created_at")
                        .table(RepairLogs::Table)
                        .col(RepairLogs::CreatedAt)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_core_build_logs_created_at")
                        .table(CoreBuildLogs::Table)
                        .col(CoreBuildLogs::CreatedAt)
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_scarf_join_logs_created_at")
                        .table(ScarfJoinLogs::Table)
                        .col(ScarfJoinLogs::CreatedAt)
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(ScarfJoinLogs::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(CoreBuildLogs::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(RepairLogs::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(PressDryLogs::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum PressDryLogs {
        Table,
        Id,
        MachineId,
        LotId,
        QuantityIn,
        Accepted,
        Rejected,
        Notes,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum RepairLogs {
        Table,
        Id,
        LotId,
        QuantityIn,
        Accepted,
        Rejected,
        Notes,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum CoreBuildLogs {
        Table,
        Id,
        LotId,
        QuantityIn,
        Accepted,
        Rejected,
        Notes,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden, Clone, Copy)]
    pub(super) enum ScarfJoinLogs {
        Table,
        Id,
        LotId,
        QuantityIn,
        Accepted,
        Rejected,
        GrainDirection,
        Notes,
        CreatedBy,
        CreatedAt,
    }
}

mod m20240301_000006_create_plywood_settings {
    use sea_orm_migration::prelude::*;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000006_create_plywood_settings"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(PlywoodSettings::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(PlywoodSettings::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(PlywoodSettings::PlywoodType)
                                .string_len(8)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PlywoodSettings::ShortCoreQty)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PlywoodSettings::LongCoreQty)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PlywoodSettings::FaceQty)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PlywoodSettings::BackQty)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PlywoodSettings::GlueQty)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PlywoodSettings::Accepted)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(
                            ColumnDef::new(PlywoodSettings::Rejected)
                                .decimal()
                                .not_null()
                                .default(0),
                        )
                        .col(ColumnDef::new(PlywoodSettings::Notes).string().null())
                        .col(
                            ColumnDef::new(PlywoodSettings::CreatedBy)
                                .string()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(PlywoodSettings::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(PlywoodSettings::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum PlywoodSettings {
        Table,
        Id,
        PlywoodType,
        ShortCoreQty,
        LongCoreQty,
        FaceQty,
        BackQty,
        GlueQty,
        Accepted,
        Rejected,
        Notes,
        CreatedBy,
        CreatedAt,
    }
}

mod m20240301_000007_create_hot_press_and_finished_goods {
    use sea_orm_migration::prelude::*;

    use super::m20240301_000001_create_warehouses::Warehouses;
    use super::m20240301_000006_create_plywood_settings::PlywoodSettings;

    pub struct Migration;

    impl MigrationName for Migration {
        fn name(&self) -> &str {
            "m20240301_000007_create_hot_press_and_finished_goods"
        }
    }

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(HotPressLogs::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(HotPressLogs::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(HotPressLogs::SettingId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(HotPressLogs::QuantityIn)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(HotPressLogs::Accepted)
                                .decimal()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(HotPressLogs::Rejected)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(HotPressLogs::Notes).string().null())
                        .col(ColumnDef::new(HotPressLogs::CreatedBy).string().not_null())
                        .col(
                            ColumnDef::new(HotPressLogs::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .from(HotPressLogs::Table, HotPressLogs::SettingId)
                                .to(PlywoodSettings::Table, PlywoodSettings::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_table(
                    Table::create()
                        .table(FinishedGoods::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(FinishedGoods::Id)
                                .big_integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(
                            ColumnDef::new(FinishedGoods::PlywoodType)
                                .string_len(8)
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinishedGoods::Quantity)
                                .decimal()
                                .not_null(),
                        )
                        .col(ColumnDef::new(FinishedGoods::Grade).string_len(4).not_null())
                        .col(
                            ColumnDef::new(FinishedGoods::HotPressLogId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinishedGoods::WarehouseId)
                                .big_integer()
                                .not_null(),
                        )
                        .col(
                            ColumnDef::new(FinishedGoods::Status)
                                .string_len(16)
                                .not_null(),
                        )
                        .col(ColumnDef::new(FinishedGoods::CreatedBy).string().not_null())
                        .col(
                            ColumnDef::new(FinishedGoods::CreatedAt)
                                .timestamp_with_time_zone()
                                .not_null(),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .from(FinishedGoods::Table, FinishedGoods::HotPressLogId)
                                .to(HotPressLogs::Table, HotPressLogs::Id),
                        )
                        .foreign_key(
                            ForeignKey::create()
                                .from(FinishedGoods::Table, FinishedGoods::WarehouseId)
                                .to(Warehouses::Table, Warehouses::Id),
                        )
                        .to_owned(),
                )
                .await?;

            manager
                .create_index(
                    Index::create()
                        .if_not_exists()
                        .name("idx_finished_goods_created_at")
                        .table(FinishedGoods::Table)
                        .col(FinishedGoods::CreatedAt)
                        .to_owned(),
                )
                .await
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(FinishedGoods::Table).to_owned())
                .await?;
            manager
                .drop_table(Table::drop().table(HotPressLogs::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    pub(super) enum HotPressLogs {
        Table,
        Id,
        SettingId,
        QuantityIn,
        Accepted,
        Rejected,
        Notes,
        CreatedBy,
        CreatedAt,
    }

    #[derive(DeriveIden)]
    pub(super) enum FinishedGoods {
        Table,
        Id,
        PlywoodType,
        Quantity,
        Grade,
        HotPressLogId,
        WarehouseId,
        Status,
        CreatedBy,
        CreatedAt,
    }
}
