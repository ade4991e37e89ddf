use sea_orm_migration::prelude::*;

use crate::migrations;

pub struct Migrator;

impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(migrations::m202508010001_create_users::Migration),
            Box::new(migrations::m202508010002_create_instructors::Migration),
            Box::new(migrations::m202508010003_create_classes::Migration),
            Box::new(migrations::m202508010004_create_cart_items::Migration),
            Box::new(migrations::m202508010005_create_payments::Migration),
        ]
    }
}
