//! Fixture data served by the mock transport.
//!
//! Read-only for the process lifetime. Staff emails use the two Arjuna
//! domains so both store contexts are reachable from the fixture set.

use arjuna_core::{CategoryId, Email, ItemId, Role, Rupiah, UserId};

use crate::catalog::{Category, Item};
use crate::models::User;
use crate::reports::DashboardSummary;

/// The only password the mock accepts.
pub const MOCK_PASSWORD: &str = "123456";

fn email(raw: &str) -> Email {
    // Fixture addresses are static and well-formed.
    Email::parse(raw).unwrap_or_else(|_| unreachable!("fixture email {raw} is valid"))
}

/// Staff user fixtures.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new(1),
            name: "Budi Santoso".to_owned(),
            email: email("budi@arjuna.digital"),
            role: Role::Owner,
        },
        User {
            id: UserId::new(2),
            name: "Siti Aminah".to_owned(),
            email: email("siti@arjuna.seragam"),
            role: Role::Admin,
        },
        User {
            id: UserId::new(3),
            name: "Andi Kasir".to_owned(),
            email: email("andi@arjuna.digital"),
            role: Role::Operator,
        },
    ]
}

/// Category fixtures. Ids are load-bearing: 1 is print material, 2 is
/// uniforms/retail, 3 is shared general goods (see catalog visibility).
#[must_use]
pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::new(1),
            name: "Bahan Cetak".to_owned(),
        },
        Category {
            id: CategoryId::new(2),
            name: "Seragam".to_owned(),
        },
        Category {
            id: CategoryId::new(3),
            name: "Umum".to_owned(),
        },
    ]
}

/// Item fixtures.
#[must_use]
pub fn items() -> Vec<Item> {
    vec![
        Item {
            id: ItemId::new(101),
            category_id: CategoryId::new(1),
            name: "Flexi China 280gsm".to_owned(),
            description: "Bahan spanduk outdoor standar".to_owned(),
            image_url: "https://images.unsplash.com/photo-1562654501-a0ccc0fc3fb1?q=80&w=1000"
                .to_owned(),
            stock: 120,
            price: Rupiah::new(15_000),
            unit: "m²".to_owned(),
            is_customizable: true,
        },
        Item {
            id: ItemId::new(102),
            category_id: CategoryId::new(1),
            name: "Sticker Vinyl Ritrama".to_owned(),
            description: "Vinyl glossy, cutting tidak termasuk".to_owned(),
            image_url: String::new(),
            stock: 80,
            price: Rupiah::new(35_000),
            unit: "m²".to_owned(),
            is_customizable: true,
        },
        Item {
            id: ItemId::new(103),
            category_id: CategoryId::new(1),
            name: "Albatros Roll Indoor".to_owned(),
            description: "Dijual per meter lari, lebar roll 1m".to_owned(),
            image_url: String::new(),
            stock: 60,
            price: Rupiah::new(25_000),
            unit: "m".to_owned(),
            is_customizable: true,
        },
        Item {
            id: ItemId::new(104),
            category_id: CategoryId::new(2),
            name: "Seragam PDH Katun".to_owned(),
            description: "Jahit standar, ukuran S-XXL".to_owned(),
            image_url: String::new(),
            stock: 25,
            price: Rupiah::new(185_000),
            unit: "pcs".to_owned(),
            is_customizable: false,
        },
        Item {
            id: ItemId::new(105),
            category_id: CategoryId::new(2),
            name: "Kaos Polo Bordir".to_owned(),
            description: "Bordir logo 1 titik".to_owned(),
            image_url: String::new(),
            stock: 40,
            price: Rupiah::new(95_000),
            unit: "pcs".to_owned(),
            is_customizable: false,
        },
        Item {
            id: ItemId::new(106),
            category_id: CategoryId::new(3),
            name: "Kopi Susu Gula Aren".to_owned(),
            description: "Robusta blend dengan gula aren asli".to_owned(),
            image_url:
                "https://images.unsplash.com/photo-1541167760496-1628856ab772?q=80&w=1000"
                    .to_owned(),
            stock: 45,
            price: Rupiah::new(18_000),
            unit: "pcs".to_owned(),
            is_customizable: false,
        },
        Item {
            id: ItemId::new(107),
            category_id: CategoryId::new(3),
            name: "Mug Custom Polos".to_owned(),
            description: "Mug keramik putih siap sablon".to_owned(),
            image_url: String::new(),
            stock: 30,
            price: Rupiah::new(45_000),
            unit: "pcs".to_owned(),
            is_customizable: false,
        },
        Item {
            id: ItemId::new(108),
            category_id: CategoryId::new(3),
            name: "Pulpen Standard AE7".to_owned(),
            description: String::new(),
            image_url: String::new(),
            stock: 200,
            price: Rupiah::new(3_000),
            unit: "pcs".to_owned(),
            is_customizable: false,
        },
    ]
}

/// Dashboard summary fixture.
#[must_use]
pub fn dashboard_summary() -> DashboardSummary {
    DashboardSummary {
        total_revenue: Rupiah::new(15_500_000),
        transaction_count: 24,
        items_sold: 80,
        top_selling_item: "Flexi China 280gsm".to_owned(),
    }
}
