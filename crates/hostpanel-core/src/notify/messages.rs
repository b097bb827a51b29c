//! Static, localized texts for toasts and confirmation prompts.

use serde::{Deserialize, Serialize};

use super::{ConfirmPrompt, Toast, ToastKind};
use crate::resources::ResourceKind;

/// Language of user-facing toast and prompt texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    /// Indonesian.
    Id,
}

/// Message catalogue for one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn updated(&self, kind: ResourceKind) -> Toast {
        let text = match self.locale {
            Locale::En => format!("{} updated successfully!", capitalized(kind)),
            Locale::Id => format!("{} berhasil diperbarui!", capitalized(kind)),
        };
        Toast::new(ToastKind::Success, self.success_title(), text)
    }

    pub fn update_failed(&self, kind: ResourceKind) -> Toast {
        let text = match self.locale {
            Locale::En => format!("Failed to update {}!", kind.label()),
            Locale::Id => format!("Gagal memperbarui {}!", kind.label()),
        };
        Toast::new(ToastKind::Error, "Error", text)
    }

    pub fn created(&self, kind: ResourceKind) -> Toast {
        let text = match self.locale {
            Locale::En => format!("{} added successfully!", capitalized(kind)),
            Locale::Id => format!("{} berhasil ditambahkan!", capitalized(kind)),
        };
        Toast::new(ToastKind::Success, self.success_title(), text)
    }

    pub fn create_failed(&self, kind: ResourceKind) -> Toast {
        let text = match self.locale {
            Locale::En => format!("Failed to add {}!", kind.label()),
            Locale::Id => format!("Gagal menambahkan {}!", kind.label()),
        };
        Toast::new(ToastKind::Error, "Error", text)
    }

    pub fn deleted(&self, kind: ResourceKind) -> Toast {
        let (title, text) = match self.locale {
            Locale::En => ("Deleted!", format!("{} deleted successfully.", capitalized(kind))),
            Locale::Id => ("Terhapus!", format!("{} berhasil dihapus.", capitalized(kind))),
        };
        Toast::new(ToastKind::Success, title, text)
    }

    pub fn delete_failed(&self, kind: ResourceKind) -> Toast {
        let (title, text) = match self.locale {
            Locale::En => ("Failed", format!("Failed to delete {}.", kind.label())),
            Locale::Id => ("Gagal", format!("Gagal menghapus {}.", kind.label())),
        };
        Toast::new(ToastKind::Error, title, text)
    }

    /// Warning shown when a form is submitted with invalid input.
    pub fn invalid_form(&self, detail: impl Into<String>) -> Toast {
        let title = match self.locale {
            Locale::En => "Invalid input",
            Locale::Id => "Input tidak valid",
        };
        Toast::new(ToastKind::Warning, title, detail)
    }

    /// Placeholder row text for an empty list.
    pub fn empty_list(&self, kind: ResourceKind) -> String {
        match self.locale {
            Locale::En => format!("No {} records found.", kind.label()),
            Locale::Id => format!("Tidak ada data {}.", kind.label()),
        }
    }

    pub fn confirm_delete(&self) -> ConfirmPrompt {
        match self.locale {
            Locale::En => ConfirmPrompt {
                title: "Are you sure?".to_string(),
                text: "This data will be permanently deleted!".to_string(),
                confirm_label: "Yes, delete!".to_string(),
                cancel_label: "Cancel".to_string(),
            },
            Locale::Id => ConfirmPrompt {
                title: "Apakah Anda yakin?".to_string(),
                text: "Data ini akan dihapus secara permanen!".to_string(),
                confirm_label: "Ya, hapus!".to_string(),
                cancel_label: "Batal".to_string(),
            },
        }
    }

    fn success_title(&self) -> &'static str {
        match self.locale {
            Locale::En => "Success",
            Locale::Id => "Sukses",
        }
    }
}

fn capitalized(kind: ResourceKind) -> String {
    let label = kind.label();
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
