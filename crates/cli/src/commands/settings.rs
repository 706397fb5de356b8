//! Settings management.

use clap::Subcommand;

use arjuna_core::{PaperSize, StaffId};
use arjuna_pos::error::PosError;
use arjuna_pos::settings::{self, NotifSettings, PrinterSettings, StoreProfile};
use arjuna_pos::state::PosState;

/// Settings subcommands.
#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show all current settings
    Show,
    /// Update the store profile shown on receipts
    Store {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Update the printer configuration
    Printer {
        /// Paper width: 58mm or 80mm
        #[arg(long)]
        paper_size: Option<String>,
        #[arg(long)]
        auto_cut: Option<bool>,
        #[arg(long)]
        footer: Option<String>,
    },
    /// Update notification switches
    Notif {
        #[arg(long)]
        sound: Option<bool>,
        #[arg(long)]
        low_stock: Option<bool>,
        #[arg(long)]
        daily_report: Option<bool>,
    },
    /// Manage staff entries
    Staff {
        #[command(subcommand)]
        action: StaffAction,
    },
    /// Validate a password change (mock: nothing is stored)
    Password {
        #[arg(long)]
        new: String,
        #[arg(long)]
        confirm: String,
    },
}

/// Staff subcommands.
#[derive(Subcommand)]
pub enum StaffAction {
    /// List staff entries
    List,
    /// Add a staff entry
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "Kasir")]
        role: String,
        #[arg(long)]
        email: String,
    },
    /// Remove a staff entry by id
    Remove {
        #[arg(long)]
        id: i64,
    },
}

/// Dispatch a settings action.
///
/// # Errors
///
/// Returns a [`PosError`] for validation or storage failures.
pub fn run(state: &PosState, action: SettingsAction) -> Result<(), PosError> {
    let store = state.settings();

    match action {
        SettingsAction::Show => {
            let profile = store.store_profile()?;
            let printer = store.printer()?;
            let notif = store.notif()?;

            println!("Toko    : {} — {} ({})", profile.name, profile.address, profile.phone);
            println!(
                "Printer : {} | auto-cut {} | \"{}\"",
                printer.paper_size,
                on_off(printer.auto_cut),
                printer.footer_msg,
            );
            println!(
                "Notif   : suara {} | stok menipis {} | laporan harian {}",
                on_off(notif.sound),
                on_off(notif.low_stock),
                on_off(notif.daily_report),
            );
            println!("Staff   :");
            for member in store.staff()? {
                println!("  [{}] {} — {} ({})", member.id, member.name, member.role, member.email);
            }
        }
        SettingsAction::Store {
            name,
            address,
            phone,
        } => {
            let current = store.store_profile()?;
            let profile = StoreProfile {
                name: name.unwrap_or(current.name),
                address: address.unwrap_or(current.address),
                phone: phone.unwrap_or(current.phone),
            };
            store.save_store_profile(&profile)?;
            println!("Profil toko disimpan.");
        }
        SettingsAction::Printer {
            paper_size,
            auto_cut,
            footer,
        } => {
            let current = store.printer()?;
            let paper_size = match paper_size.as_deref() {
                None => current.paper_size,
                Some("58mm") => PaperSize::Mm58,
                Some("80mm") => PaperSize::Mm80,
                Some(other) => {
                    return Err(PosError::BadRequest(format!(
                        "ukuran kertas tidak dikenal: {other}"
                    )));
                }
            };
            let printer = PrinterSettings {
                paper_size,
                auto_cut: auto_cut.unwrap_or(current.auto_cut),
                footer_msg: footer.unwrap_or(current.footer_msg),
            };
            store.save_printer(&printer)?;
            println!("Setelan printer disimpan.");
        }
        SettingsAction::Notif {
            sound,
            low_stock,
            daily_report,
        } => {
            let current = store.notif()?;
            let notif = NotifSettings {
                sound: sound.unwrap_or(current.sound),
                low_stock: low_stock.unwrap_or(current.low_stock),
                daily_report: daily_report.unwrap_or(current.daily_report),
            };
            store.save_notif(&notif)?;
            println!("Setelan notifikasi disimpan.");
        }
        SettingsAction::Staff { action } => match action {
            StaffAction::List => {
                for member in store.staff()? {
                    println!("[{}] {} — {} ({})", member.id, member.name, member.role, member.email);
                }
            }
            StaffAction::Add { name, role, email } => {
                let member = store.add_staff(&name, &role, &email)?;
                println!("Staff {} ditambahkan dengan id {}.", member.name, member.id);
            }
            StaffAction::Remove { id } => {
                store.remove_staff(StaffId::new(id))?;
                println!("Akses staff dicabut.");
            }
        },
        SettingsAction::Password { new, confirm } => {
            settings::validate_password_change(&new, &confirm)?;
            println!("Password berhasil diubah!");
        }
    }
    Ok(())
}

const fn on_off(value: bool) -> &'static str {
    if value { "on" } else { "off" }
}
