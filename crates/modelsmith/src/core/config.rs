//! Conversion configuration
//!
//! Every lookup table the pipeline consults (domain rules, enum mappings,
//! custom enums, file naming conventions) lives in [`ConversionConfig`].
//! [`ConversionConfig::default`] carries the built-in tables; a JSON file
//! can override any subset of fields.
//!
//! # Example
//!
//! ```
//! use modelsmith::core::ConversionConfig;
//!
//! let config = ConversionConfig::default();
//! assert_eq!(config.extension, "puml");
//! assert_eq!(config.custom_enums["Role"].len(), 4);
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use super::ModelError;

/// File-name substring rule mapping a diagram file to a domain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRule {
    /// Lower-case substring searched for in the file stem
    pub pattern: String,
    /// Domain name assigned on match
    pub domain: String,
}

impl DomainRule {
    pub fn new(pattern: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            domain: domain.into(),
        }
    }
}

/// Domain declaration emitted into the document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainDef {
    pub name: String,
    pub description: String,
}

/// Settings for one conversion run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// `modelName` written into the document
    pub model_name: String,
    /// `version` written into the document
    pub version: String,
    /// Extension (without dot) of the diagram files to read
    pub extension: String,
    /// A file is a class diagram when its name starts with one of these
    pub class_file_prefixes: Vec<String>,
    /// A file is a state diagram when its name contains this
    pub statechart_marker: String,
    /// Prefix stripped from state diagram file names before naming
    pub statechart_prefix: String,
    /// Ordered domain rules; the first match wins
    pub domain_rules: Vec<DomainRule>,
    /// Known domains and their descriptions
    pub domains: Vec<DomainDef>,
    /// Attribute name to enumeration name
    pub attribute_enums: IndexMap<String, String>,
    /// Enumerations registered after all diagram-derived ones
    pub custom_enums: IndexMap<String, Vec<String>>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        let attribute_enums = [
            ("statusLaporan", "StatusLaporan"),
            ("statusBarang", "StatusBarang"),
            ("statusKlaim", "StatusKlaim"),
            ("statusSesi", "StatusSesi"),
            ("role", "Role"),
            ("periode", "PeriodeLaporanStatistik"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let custom_enums = [
            ("Role", vec!["mahasiswa", "dosen", "staff", "petugas_keamanan"]),
            (
                "PeriodeLaporanStatistik",
                vec!["Bulanan", "Semesteran", "Tahunan"],
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.into_iter().map(String::from).collect()))
        .collect();

        Self {
            model_name: "SistemPelaporanBarangHilang".to_string(),
            version: "1.0".to_string(),
            extension: "puml".to_string(),
            class_file_prefixes: vec!["class_".to_string(), "main_".to_string()],
            statechart_marker: "state".to_string(),
            statechart_prefix: "state_".to_string(),
            domain_rules: vec![
                DomainRule::new("main_classdiagram", "userManagement"),
                DomainRule::new("pengelolaanbarang", "pengelolaanLaporan"),
                // both spellings occur in the diagram file names
                DomainRule::new("adminstrasipelaporan", "administrasiPelaporan"),
                DomainRule::new("administrasipelaporan", "administrasiPelaporan"),
            ],
            domains: vec![
                DomainDef {
                    name: "userManagement".to_string(),
                    description: "Pengelolaan pengguna, peran, dan autentikasi".to_string(),
                },
                DomainDef {
                    name: "pengelolaanLaporan".to_string(),
                    description: "Pengelolaan laporan barang hilang dan barang temuan"
                        .to_string(),
                },
                DomainDef {
                    name: "administrasiPelaporan".to_string(),
                    description: "Administrasi, verifikasi, dan statistik pelaporan".to_string(),
                },
            ],
            attribute_enums,
            custom_enums,
        }
    }
}

impl ConversionConfig {
    /// Load a config from a JSON file; missing fields keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| ModelError::io(path, e))?;
        Self::from_json_str(&raw).map_err(|e| ModelError::config(path, e.to_string()))
    }

    /// Parse a config from JSON text
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Description of a domain, empty when the domain is not declared
    pub fn domain_description(&self, name: &str) -> &str {
        self.domains
            .iter()
            .find(|d| d.name == name)
            .map(|d| d.description.as_str())
            .unwrap_or("")
    }

    /// True when `file_name` has the configured diagram extension
    pub fn matches_extension(&self, file_name: &str) -> bool {
        file_name
            .rsplit_once('.')
            .is_some_and(|(_, ext)| ext == self.extension)
    }
}
