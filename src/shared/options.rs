//! Zentrale Konfiguration des Floor-Ribbon-Editors.
//!
//! `RibbonOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

/// Abtastschwelle in Welteinheiten: erst wenn sich der Blickpunkt auf einer
/// Horizontalachse um mehr als diesen Wert bewegt hat, entsteht eine neue
/// Stützstelle.
pub const SAMPLE_SIZE: f32 = 1.0;
/// Seitlicher Abstand der Schienenanker zum Blickpunkt (pro Seite).
pub const LATERAL_OFFSET: f32 = 1.0;
/// Nachkommastellen der Export-Koordinaten.
pub const EXPORT_DECIMALS: u32 = 2;

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `floor_ribbon_editor.toml` neben der Host-Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RibbonOptions {
    /// Abtastschwelle pro Horizontalachse (Welteinheiten)
    pub sample_size: f32,
    /// Seitlicher Schienenabstand zum Blickpunkt (Welteinheiten)
    pub lateral_offset: f32,
    /// Nachkommastellen beider Export-Formate
    pub export_decimals: u32,
}

impl Default for RibbonOptions {
    fn default() -> Self {
        Self {
            sample_size: SAMPLE_SIZE,
            lateral_offset: LATERAL_OFFSET,
            export_decimals: EXPORT_DECIMALS,
        }
    }
}

impl RibbonOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Host-Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("floor_ribbon_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("floor_ribbon_editor.toml")
    }
}
